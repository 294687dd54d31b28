// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// Renders man/flashver.1 from the same clap definition the binary parses,
// so the option list in the man page cannot drift from --help.

use std::fs;
use std::path::Path;

use clap::CommandFactory;

include!("src/cli.rs");

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let mut page = Vec::new();
    if let Err(e) = clap_mangen::Man::new(Cli::command()).render(&mut page) {
        println!("cargo::warning=man page not rendered: {e}");
        return;
    }

    // A read-only checkout (vendored or packaged builds) gets a warning, not a failure
    let man_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("man");
    let written =
        fs::create_dir_all(&man_dir).and_then(|()| fs::write(man_dir.join("flashver.1"), page));
    if let Err(e) = written {
        println!("cargo::warning=man page not written: {e}");
    }
}
