//! On-disk representation of a folder's aging configuration.
//!
//! Each governed folder owns a reserved hidden subdirectory:
//!
//! ```text
//! <folder>/.aging/config.toml   persisted rule set and overrides
//! <folder>/.aging/archive/      archived files (written by the sweeper)
//! <folder>/.aging/log/          sweep logs
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::duration::AgeSpan;
use crate::error::{AgingError, Result};

pub const CONFIG_DIR_NAME: &str = ".aging";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ARCHIVE_DIR_NAME: &str = "archive";
pub const LOG_DIR_NAME: &str = "log";

/// Persisted state of one folder's configuration. This is the codec
/// boundary: everything else about [`AgingConfig`](super::AgingConfig) is
/// derived at load time and never written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire: Option<AgeSpan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep: Option<AgeSpan>,

    #[serde(default, rename = "rule", skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleState>,
}

/// Persisted state of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleState {
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire: Option<AgeSpan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep: Option<AgeSpan>,
}

#[must_use]
pub fn config_dir(directory: &Path) -> PathBuf {
    directory.join(CONFIG_DIR_NAME)
}

#[must_use]
pub fn config_file(directory: &Path) -> PathBuf {
    config_dir(directory).join(CONFIG_FILE_NAME)
}

/// Read the persisted state for `directory`, or `None` if the folder has
/// never been configured.
pub(crate) fn read(directory: &Path) -> Result<Option<ConfigState>> {
    let path = config_file(directory);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).map_err(|source| AgingError::Storage {
        path: path.clone(),
        source,
    })?;
    let state = toml::from_str(&content)?;
    Ok(Some(state))
}

/// Write `state` to the reserved subpath, creating it if absent.
pub(crate) fn write(directory: &Path, state: &ConfigState) -> Result<()> {
    let dir = config_dir(directory);
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|source| AgingError::Storage {
            path: dir.clone(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(state)?;
    let path = config_file(directory);
    fs::write(&path, content).map_err(|source| AgingError::Storage { path, source })
}

/// Remove the entire reserved subpath, rules and all. Irreversible.
pub(crate) fn delete(directory: &Path) -> Result<()> {
    remove_tree(&config_dir(directory))
}

/// Remove one subdirectory of the reserved subpath (archive or log).
pub(crate) fn remove_subdir(directory: &Path, name: &str) -> Result<()> {
    remove_tree(&config_dir(directory).join(name))
}

fn remove_tree(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    fs::remove_dir_all(path).map_err(|source| AgingError::Storage {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
