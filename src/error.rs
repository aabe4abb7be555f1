use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgingError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Rule #{index} does not exist")]
    RuleNotFound { index: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access configuration at {}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config decode error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Config encode error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("The '{0}' command is not yet implemented")]
    Unimplemented(&'static str),
}

impl AgingError {
    /// Process exit code this error maps to: 1 for "not found" and
    /// validation failures, 2 for everything unexpected.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::DirectoryNotFound(_) | Self::RuleNotFound { .. } | Self::Config(_) => {
                crate::EXIT_NOT_FOUND
            }
            _ => crate::EXIT_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, AgingError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
