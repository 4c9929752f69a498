//! Dropbox root discovery
//!
//! The Dropbox desktop client (v2.8+) writes `Dropbox/info.json` under one of
//! the platform's application-data folders. The file names the root of the
//! personal and/or business account:
//!
//! ```json
//! { "personal": { "path": "/home/me/Dropbox", "host": 1234 } }
//! ```

use crate::types::DropCopyError;
use log::debug;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Folder the Dropbox client keeps its settings in
pub const DROPBOX_DIR_NAME: &str = "Dropbox";

/// Settings file that records the Dropbox root
pub const INFO_FILE_NAME: &str = "info.json";

/// `None` when the key is absent, `Some(None)` when it is `null`
#[derive(Debug, Deserialize)]
struct DropboxInfo {
    #[serde(default, deserialize_with = "present")]
    personal: Option<Option<Account>>,
    #[serde(default, deserialize_with = "present")]
    business: Option<Option<Account>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<Account>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Account>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
struct Account {
    path: Option<String>,
}

/// Finds the Dropbox root folder from the client's `info.json`
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    candidates: Vec<PathBuf>,
}

impl ConfigLocator {
    /// Probe `base/Dropbox/info.json` for each base folder, in order
    pub fn new<I, P>(bases: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            candidates: bases
                .into_iter()
                .map(|base| base.as_ref().join(DROPBOX_DIR_NAME).join(INFO_FILE_NAME))
                .collect(),
        }
    }

    /// Use exactly one `info.json`, skipping the platform folders
    pub fn with_info_file(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// Locator over the platform's application-data folders
    pub fn platform() -> Self {
        Self::new(platform_bases())
    }

    /// Probe paths, in the order they are tried
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the first candidate that exists
    pub fn find_info_file(&self) -> Result<PathBuf, DropCopyError> {
        for candidate in &self.candidates {
            debug!("Probing {}", candidate.display());
            if candidate.is_file() {
                return Ok(candidate.clone());
            }
        }

        Err(DropCopyError::InvalidDropbox {
            searched: self.candidates.clone(),
        })
    }

    /// Resolve the Dropbox root directory
    pub fn locate(&self) -> Result<PathBuf, DropCopyError> {
        let info = self.find_info_file()?;
        debug!("Using Dropbox settings at {}", info.display());
        parse_info_file(&info)
    }
}

/// Read `path` and extract the Dropbox root from it
pub fn parse_info_file(path: &Path) -> Result<PathBuf, DropCopyError> {
    let text = fs::read_to_string(path).map_err(|e| DropCopyError::JsonParse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    parse_info(&text)
        .map(PathBuf::from)
        .map_err(|detail| DropCopyError::JsonParse {
            path: path.to_path_buf(),
            detail,
        })
}

/// Extract `personal.path`, falling back to `business.path`
///
/// A present `personal` key wins even when it is unusable; only a missing
/// one falls back to `business`. A leading byte-order mark is ignored.
pub fn parse_info(text: &str) -> Result<String, String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let info: DropboxInfo = serde_json::from_str(text).map_err(|e| e.to_string())?;

    let (key, account) = match (info.personal, info.business) {
        (Some(personal), _) => ("personal", personal),
        (None, Some(business)) => ("business", business),
        (None, None) => return Err("neither `personal` nor `business` is present".to_string()),
    };

    account
        .ok_or_else(|| format!("`{key}` is null"))?
        .path
        .ok_or_else(|| format!("`{key}` has no `path`"))
}

/// Roaming, common and local application-data folders, in probe order
#[cfg(windows)]
fn platform_bases() -> Vec<PathBuf> {
    [
        dirs::config_dir(),
        std::env::var_os("ProgramData").map(PathBuf::from),
        dirs::data_local_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// User config, system config and user local-data folders, in probe order
#[cfg(not(windows))]
fn platform_bases() -> Vec<PathBuf> {
    [
        dirs::config_dir(),
        Some(PathBuf::from("/etc")),
        dirs::data_local_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
