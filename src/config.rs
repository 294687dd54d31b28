// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Lookup configuration
//!
//! This module holds the built-in defaults (vendor page, trust roots, table
//! class and the two row patterns) and the [`Config`] structure that carries
//! them, or caller overrides, into the pipeline.

use std::path::PathBuf;

use regex::Regex;

use crate::error::Error;

/// Vendor page listing the current Flash Player releases
pub const FLASH_ABOUT_URL: &str = "https://www.adobe.com/software/flash/about/";

/// Directory of trusted CA certificates (ca-certificates on Debian)
pub const CA_CERTS_PATH: &str = "/etc/ssl/certs";

/// Class attribute of the release table on the vendor page
pub const RELEASE_TABLE_CLASS: &str = "data-bordered";

/// Pattern searched for in the OS column. Use `^` and `$` as necessary.
pub const DEFAULT_OS_PATTERN: &str = "Linux";

/// Pattern searched for in the plugin type column
pub const DEFAULT_TYPE_PATTERN: &str = "Chromium.* PPAPI";

/// Everything the pipeline needs for one lookup
///
/// Patterns are compiled once at construction, so an invalid pattern is
/// reported before any network traffic happens.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page to fetch
    pub url: String,
    /// Directory of trusted CA certificates for the TLS handshake
    pub trust_root: PathBuf,
    /// Class attribute identifying the release table
    pub table_class: String,
    /// Searched for in the OS column
    pub os_pattern: Regex,
    /// Searched for in the plugin type column
    pub type_pattern: Regex,
}

impl Config {
    /// Build a configuration for the given patterns with default page,
    /// trust roots and table class
    ///
    /// # Errors
    /// Returns [`Error::Pattern`] if either pattern is not a valid regex
    pub fn new(os_pattern: &str, type_pattern: &str) -> Result<Self, Error> {
        let os_pattern = Regex::new(os_pattern).map_err(|source| Error::Pattern {
            which: "OS",
            source,
        })?;
        let type_pattern = Regex::new(type_pattern).map_err(|source| Error::Pattern {
            which: "plugin type",
            source,
        })?;

        Ok(Self {
            url: FLASH_ABOUT_URL.to_string(),
            trust_root: PathBuf::from(CA_CERTS_PATH),
            table_class: RELEASE_TABLE_CLASS.to_string(),
            os_pattern,
            type_pattern,
        })
    }

    /// Configuration with every built-in default
    ///
    /// # Errors
    /// Returns [`Error::Pattern`] if a default pattern fails to compile
    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(DEFAULT_OS_PATTERN, DEFAULT_TYPE_PATTERN)
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_trust_root(mut self, trust_root: impl Into<PathBuf>) -> Self {
        self.trust_root = trust_root.into();
        self
    }

    #[must_use]
    pub fn with_table_class(mut self, table_class: impl Into<String>) -> Self {
        self.table_class = table_class.into();
        self
    }
}
