//! Error types for loading rules and record documents
//!
//! Validation findings are never errors; these variants cover input that
//! cannot be turned into rule tables or resources at all.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid rule table '{table}': {message}")]
    InvalidRule { table: String, message: String },

    #[error("Invalid length constraint for '{field}': expected [N] or [min, max], found {found}")]
    InvalidLengthConstraint { field: String, found: String },

    #[error("Malformed record document {file}: {message}")]
    MalformedDocument { file: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_rule(table: &str, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            table: table.to_string(),
            message: message.into(),
        }
    }
}
