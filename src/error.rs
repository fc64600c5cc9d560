//! Error types for appsearch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppSearchError {
    /// An attribute code or index field name could not be resolved.
    #[error("unresolvable field '{field}': {reason}")]
    UnresolvableField { field: String, reason: String },

    /// A match clause violates the request contract (non-numeric boost, etc).
    #[error("malformed match clause: {0}")]
    MalformedClause(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppSearchError {
    /// Short machine-readable code used by robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnresolvableField { .. } => "unresolvable_field",
            Self::MalformedClause(_) => "malformed_clause",
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }

    #[must_use]
    pub fn unresolvable(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnresolvableField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppSearchError>;
