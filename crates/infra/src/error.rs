//! Infrastructure error model.

use std::path::PathBuf;

use biblioteca_core::DomainError;
use thiserror::Error;

pub type InfraResult<T> = Result<T, InfraError>;

#[derive(Debug, Error)]
pub enum InfraError {
    /// An environment setting could not be parsed.
    #[error("invalid configuration {key}: {message}")]
    Config { key: &'static str, message: String },

    /// A catalog document was not valid JSON for a list of books.
    #[error("malformed catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Repositories were requested before `PersistenceSystem::start`.
    #[error("persistence system not started")]
    NotStarted,
}

impl InfraError {
    pub fn config(key: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            key,
            message: message.into(),
        }
    }
}
