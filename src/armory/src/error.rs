//! Error types for manifest loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to {url} failed: {reason}")]
    Remote { url: String, reason: String },

    #[error("No manifest content path for locale '{0}'")]
    LocaleNotFound(String),

    #[error("Failed to write manifest cache {}: {source}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {table}: {message}")]
    Parse { table: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn remote(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::Remote {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn parse(table: impl Into<String>, err: impl ToString) -> Self {
        Error::Parse {
            table: table.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
