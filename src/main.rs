// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! flashver - Main Application
//!
//! Reads the vendor's Flash Player "about" page and prints the version
//! listed for one operating system and browser plugin type (Linux, Chromium
//! PPAPI by default).
//!
//! The application supports:
//! - Printing the version string (default)
//! - Printing the matching release as JSON
//! - Dumping the flattened release table to check the patterns against
//! - Overriding the page, trust roots, table class and patterns

mod cli;

use std::error::Error;
use std::process::exit;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputMode};
use flashver::{
    Config, DEFAULT_OS_PATTERN, DEFAULT_TYPE_PATTERN, Report, fetch_matrix, latest_release,
};

/// Main application entry point
///
/// Parses command line arguments, runs the lookup and prints the result.
/// Any failure is printed to stderr with its cause chain, followed by exit
/// status 1; nothing is written to stdout in that case.
fn main() {
    let cli = Cli::parse();

    // Handle completion generation first (exits immediately)
    if cli.completion.is_some() {
        print_bash_completion();
        return;
    }

    init_logging(cli.verbose);

    let result = build_config(&cli).and_then(|config| match cli.output_mode() {
        OutputMode::Version => cmd_version(&config),
        OutputMode::Json => cmd_json(&config),
        OutputMode::Table => cmd_table(&config),
    });

    if let Err(e) = result {
        print_error_chain(e.as_ref());
        exit(1);
    }
}

/// Send `tracing` output to stderr
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// everything down to debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Merge command line overrides into the built-in defaults
fn build_config(cli: &Cli) -> Result<Config, Box<dyn Error>> {
    let mut config = Config::new(
        cli.os.as_deref().unwrap_or(DEFAULT_OS_PATTERN),
        cli.plugin_type.as_deref().unwrap_or(DEFAULT_TYPE_PATTERN),
    )?;

    if let Some(url) = &cli.url {
        config = config.with_url(url);
    }
    if let Some(ca_path) = &cli.ca_path {
        config = config.with_trust_root(ca_path);
    }
    if let Some(table_class) = &cli.table_class {
        config = config.with_table_class(table_class);
    }

    Ok(config)
}

/// Print the headline of `e` followed by one line per underlying cause
fn print_error_chain(e: &dyn Error) {
    eprintln!("{e}");
    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("{cause}");
        source = cause.source();
    }
}

// =============================================================================
// Command Implementation Functions
// =============================================================================

/// Print the version string of the matching release
fn cmd_version(config: &Config) -> Result<(), Box<dyn Error>> {
    let release = latest_release(config)?;
    println!("{}", release.version);
    Ok(())
}

/// Print the matching release, its source and fetch time as one JSON object
fn cmd_json(config: &Config) -> Result<(), Box<dyn Error>> {
    let release = latest_release(config)?;
    let report = Report::new(release, config.url.as_str());
    println!("{}", report.to_json()?);
    Ok(())
}

/// Print the flattened release table, one tab-separated row per line
fn cmd_table(config: &Config) -> Result<(), Box<dyn Error>> {
    let matrix = fetch_matrix(config)?;
    let lines: Vec<String> = matrix.rows().iter().map(|row| row.join("\t")).collect();
    println!("{}", lines.join("\n"));
    Ok(())
}

/// Print bash completion script
fn print_bash_completion() {
    print!(
        r#"# bash completion for flashver

_flashver_completions() {{
    local cur prev
    COMPREPLY=()
    cur="${{COMP_WORDS[COMP_CWORD]}}"
    prev="${{COMP_WORDS[COMP_CWORD-1]}}"

    if [[ "${{cur}}" == -* ]]; then
        local options=(
            "--ca-path       (Directory of trusted CA certificates)"
            "--completion    (Generate shell completion script)"
            "-h              (Print help)"
            "--help          (Print help)"
            "-j              (Print the matching release as JSON)"
            "--json          (Print the matching release as JSON)"
            "--os            (Regular expression for the OS column)"
            "--table         (Print the flattened release table)"
            "--table-class   (Class attribute of the release table)"
            "-t              (Regular expression for the plugin type column)"
            "--type          (Regular expression for the plugin type column)"
            "--url           (Page holding the release table)"
            "-v              (Make the operation more talkative)"
            "--verbose       (Make the operation more talkative)"
            "--version       (Print version)"
        )

        local IFS=$'\n'
        local opt name padded
        local width=$((COLUMNS - 1))
        for opt in "${{options[@]}}"; do
            name="${{opt%%  *}}"
            if [[ "$name" == "${{cur}}"* ]]; then
                printf -v padded "%-${{width}}s" "$opt"
                COMPREPLY+=("$padded")
            fi
        done

        if ((${{#COMPREPLY[@]}} == 1)); then
            COMPREPLY[0]="${{COMPREPLY[0]%%  *}}"
        fi
    elif [[ "${{prev}}" == "--ca-path" ]]; then
        COMPREPLY=($(compgen -d -- "${{cur}}"))
    fi
}}

complete -o nosort -F _flashver_completions flashver
"#
    );
}
