// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for flashver
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use std::path::PathBuf;

use clap::Parser;

/// What to print on success
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Version,
    Json,
    Table,
}

/// CLI argument parser - every option falls back to a built-in default
#[derive(Parser)]
#[command(
    name = "flashver",
    version,
    about = "Print the latest Flash Player version for an OS and plugin type",
    disable_version_flag = true
)]
#[command(arg(clap::Arg::new("version").long("version").action(clap::ArgAction::Version).help("Print version")))]
pub struct Cli {
    /// Regular expression searched for in the OS column [default: Linux]
    #[arg(long = "os", value_name = "REGEX")]
    pub os: Option<String>,

    /// Regular expression searched for in the plugin type column [default: "Chromium.* PPAPI"]
    #[arg(short = 't', long = "type", value_name = "REGEX")]
    pub plugin_type: Option<String>,

    /// Page holding the release table
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Directory of trusted CA certificates [default: /etc/ssl/certs]
    #[arg(long = "ca-path", value_name = "DIR")]
    pub ca_path: Option<PathBuf>,

    /// Class attribute of the release table [default: data-bordered]
    #[arg(long = "table-class", value_name = "CLASS")]
    pub table_class: Option<String>,

    /// Print the matching release as JSON
    #[arg(short = 'j', long = "json", conflicts_with = "table")]
    pub json: bool,

    /// Print the flattened release table instead of a single version
    #[arg(long = "table", conflicts_with = "json")]
    pub table: bool,

    /// Make the operation more talkative
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion script (only bash is supported currently)
    #[arg(long = "completion", value_name = "SHELL", value_parser = parse_completion_shell)]
    pub completion: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        match (self.json, self.table) {
            (true, _) => OutputMode::Json,
            (_, true) => OutputMode::Table,
            _ => OutputMode::Version,
        }
    }
}

fn parse_completion_shell(s: &str) -> Result<String, String> {
    match s.to_lowercase().as_str() {
        "bash" => Ok(s.to_lowercase()),
        _ => Err(format!("unsupported shell: {s} (only 'bash' is supported)")),
    }
}
