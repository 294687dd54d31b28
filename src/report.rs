// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Machine-readable output of a lookup

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::select::Release;

/// A selected release together with where and when it was read
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub release: Release,
    /// Page the release table was read from
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}

impl Report {
    /// Stamp `release` with the current time
    #[must_use]
    pub fn new(release: Release, source: impl Into<String>) -> Self {
        Self {
            release,
            source: source.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Render as a single-line JSON object
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
