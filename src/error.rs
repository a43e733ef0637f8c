//! Error types surfaced at the load and config boundaries.

use thiserror::Error;

/// Failure of a single workbook load. Stored in viewer state, so it carries
/// messages rather than source errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("could not read file: {0}")]
    Read(String),

    #[error("could not decode workbook: {0}")]
    Parse(String),

    #[error("workbook contains no data rows")]
    EmptyData,
}

impl LoadError {
    /// i18n key of the user-facing message for this error.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Read(_) => "error.read",
            Self::Parse(_) => "error.parse",
            Self::EmptyData => "error.empty",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
