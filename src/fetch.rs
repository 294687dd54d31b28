// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Page download with a caller-supplied trust-root directory
//!
//! HTTPS requests trust only the certificates found in the configured
//! directory; the client's built-in roots are disabled.

use std::fs;
use std::path::Path;

use reqwest::Certificate;
use reqwest::blocking::Client;
use tracing::{debug, warn};
use url::Url;

use crate::error::FetchError;

/// Fetch `url` and return the full response body
///
/// For `https` URLs the server certificate is validated against the
/// certificates in `trust_root`. A single request is made; nothing is retried.
///
/// # Errors
/// Returns a [`FetchError`] if the URL is malformed, the trust roots cannot be
/// loaded, the connection fails, the server answers with a non-success status
/// or the body cannot be read
pub fn fetch(url: &str, trust_root: &Path) -> Result<Vec<u8>, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let mut builder = Client::builder();
    if parsed.scheme() == "https" {
        builder = builder.tls_built_in_root_certs(false);
        for cert in load_trust_roots(trust_root)? {
            builder = builder.add_root_certificate(cert);
        }
    }
    let client = builder.build().map_err(FetchError::Client)?;

    debug!("GET {parsed}");
    let resp = client
        .get(parsed.clone())
        .send()
        .map_err(|source| FetchError::Connect {
            url: url.to_string(),
            source,
        })?;

    if !resp.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let body = resp.bytes().map_err(|source| FetchError::Read {
        url: url.to_string(),
        source,
    })?;
    debug!("received {} bytes from {parsed}", body.len());

    Ok(body.to_vec())
}

/// Load every certificate found in the files of `dir`
///
/// Each regular file (symlinks are followed) is parsed as a PEM bundle.
/// Files holding no certificate are skipped.
///
/// # Errors
/// Returns [`FetchError::TrustRoot`] if the directory cannot be read and
/// [`FetchError::NoTrustRoots`] if it holds no certificate at all
pub fn load_trust_roots(dir: &Path) -> Result<Vec<Certificate>, FetchError> {
    let trust_root_err = |source| FetchError::TrustRoot {
        path: dir.to_path_buf(),
        source,
    };

    let mut certs = Vec::new();
    for entry in fs::read_dir(dir).map_err(trust_root_err)? {
        let path = entry.map_err(trust_root_err)?.path();

        // fs::metadata follows symlinks, hashed c_rehash links included
        if !fs::metadata(&path).is_ok_and(|m| m.is_file()) {
            continue;
        }

        let pem = match fs::read(&path) {
            Ok(pem) => pem,
            Err(e) => {
                warn!("skipping unreadable trust root {}: {e}", path.display());
                continue;
            }
        };

        match Certificate::from_pem_bundle(&pem) {
            Ok(found) if !found.is_empty() => certs.extend(found),
            Ok(_) => debug!("no certificate in {}", path.display()),
            Err(e) => debug!("skipping {}: {e}", path.display()),
        }
    }

    if certs.is_empty() {
        return Err(FetchError::NoTrustRoots {
            path: dir.to_path_buf(),
        });
    }

    debug!("loaded {} trust roots from {}", certs.len(), dir.display());
    Ok(certs)
}
