// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release row selection
//!
//! Picks the single row of a flattened release table whose OS and plugin type
//! columns match a pair of regular expressions. Matching is a regex search, so
//! `Linux` matches `Linux (32-bit and 64-bit)`.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::SelectError;
use crate::table::{Column, Matrix, Row};

/// The selected row of the release table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub os: String,
    pub plugin_type: String,
    pub version: String,
}

/// Whether a row matches both patterns; rows too short to hold a column never match
fn row_matches(row: &Row, os: &Regex, plugin_type: &Regex) -> bool {
    let cell = |column: Column| row.get(column.index()).map(String::as_str);

    match (cell(Column::Os), cell(Column::Type), cell(Column::Version)) {
        (Some(os_text), Some(type_text), Some(_)) => {
            os.is_match(os_text) && plugin_type.is_match(type_text)
        }
        _ => false,
    }
}

/// Find the one row matching both patterns
///
/// # Errors
/// Returns [`SelectError::NoMatch`] if no row matches and
/// [`SelectError::Ambiguous`] if more than one does
pub fn select_row(
    matrix: &Matrix,
    os: &Regex,
    plugin_type: &Regex,
) -> Result<Release, SelectError> {
    let matching: Vec<&Row> = matrix
        .rows()
        .iter()
        .filter(|row| row_matches(row, os, plugin_type))
        .collect();

    match matching.as_slice() {
        [row] => {
            debug!("matched row {row:?}");
            Ok(Release {
                os: row[Column::Os.index()].clone(),
                plugin_type: row[Column::Type.index()].clone(),
                version: row[Column::Version.index()].clone(),
            })
        }
        [] => Err(SelectError::NoMatch {
            os: os.to_string(),
            plugin_type: plugin_type.to_string(),
        }),
        many => Err(SelectError::Ambiguous {
            count: many.len(),
            os: os.to_string(),
            plugin_type: plugin_type.to_string(),
        }),
    }
}

/// Version string of the one row matching both patterns
///
/// # Errors
/// Same as [`select_row`]
pub fn select(matrix: &Matrix, os: &Regex, plugin_type: &Regex) -> Result<String, SelectError> {
    select_row(matrix, os, plugin_type).map(|release| release.version)
}
