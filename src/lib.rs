// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Flash Player Version Lookup Library
//!
//! This library reads the vendor's release table, flattens it (expanding row
//! spans) into a matrix of cell text, and picks the version for a given
//! operating system and browser plugin type.

pub mod config;
pub mod error;
pub mod fetch;
pub mod release;
pub mod report;
pub mod select;
pub mod table;

// Re-export commonly used items at the crate root for convenience
pub use config::{
    CA_CERTS_PATH, Config, DEFAULT_OS_PATTERN, DEFAULT_TYPE_PATTERN, FLASH_ABOUT_URL,
    RELEASE_TABLE_CLASS,
};
pub use error::{Error, FetchError, SelectError, TableError};
pub use fetch::{fetch, load_trust_roots};
pub use release::{fetch_matrix, latest_release};
pub use report::Report;
pub use select::{Release, select, select_row};
pub use table::{Column, Matrix, Row, cell_text, find_table, flatten, parse_release_table};
