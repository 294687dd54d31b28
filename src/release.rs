// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Fetch, flatten and select in one call

use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::fetch::fetch;
use crate::select::{Release, select_row};
use crate::table::{Matrix, parse_release_table};

/// Download the configured page and flatten its release table
///
/// # Errors
/// Returns [`Error::Fetch`] or [`Error::Table`] from the failing step
pub fn fetch_matrix(config: &Config) -> Result<Matrix, Error> {
    let body = fetch(&config.url, &config.trust_root)?;
    let matrix = parse_release_table(&body, &config.table_class)?;
    debug!("release table has {} rows", matrix.len());
    Ok(matrix)
}

/// Look up the release matching the configured OS and plugin type patterns
///
/// # Errors
/// Returns [`Error::Fetch`], [`Error::Table`] or [`Error::Select`] from the
/// failing step
pub fn latest_release(config: &Config) -> Result<Release, Error> {
    let matrix = fetch_matrix(config)?;
    Ok(select_row(&matrix, &config.os_pattern, &config.type_pattern)?)
}
