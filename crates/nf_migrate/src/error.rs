use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MigrateError>;

#[derive(Debug, Error)]
pub enum MigrateError {
    /// A required input file is absent. Checked before any network activity.
    #[error("required file missing: {path}")]
    MissingPath { path: PathBuf },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MigrateError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingPath { .. } => 2,
            _ => 1,
        }
    }
}
