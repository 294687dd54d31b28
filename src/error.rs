// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error types for the release lookup pipeline
//!
//! Each pipeline step owns a typed error. The crate-level [`Error`] carries a
//! fixed headline for the user, while the step error underneath it (reachable
//! through [`std::error::Error::source`]) holds the detail.

use std::io;
use std::path::PathBuf;

/// Failures while fetching the vendor page
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("cannot read trust-root directory {}", path.display())]
    TrustRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no usable certificates in trust-root directory {}", path.display())]
    NoTrustRoots { path: PathBuf },
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read response body from {url}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failures while locating the release table in the page
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("no table with class '{class}' in page")]
    NotFound { class: String },
    #[error("table with class '{class}' has no data rows")]
    Empty { class: String },
    #[error("invalid CSS selector '{css}': {reason}")]
    Selector { css: &'static str, reason: String },
}

/// Failures while picking the one matching row
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("no row matches OS /{os}/ and type /{plugin_type}/")]
    NoMatch { os: String, plugin_type: String },
    #[error("{count} rows match OS /{os}/ and type /{plugin_type}/")]
    Ambiguous {
        count: usize,
        os: String,
        plugin_type: String,
    },
}

/// Top-level error returned by the pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch page: bad URL or trust-root path?")]
    Fetch(#[from] FetchError),
    #[error("Failed to load release table")]
    Table(#[from] TableError),
    #[error("Parsing error: regular expressions wrong?")]
    Select(#[from] SelectError),
    #[error("Invalid {which} pattern")]
    Pattern {
        which: &'static str,
        #[source]
        source: regex::Error,
    },
}
