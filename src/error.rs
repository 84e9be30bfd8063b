//! Error types for loading language configuration.

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a [`LanguageRegistry`](crate::LanguageRegistry).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The rule table is not valid JSON or does not match the expected shape.
    #[error("Invalid language table: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule entry is well-formed JSON but unusable.
    #[error("Invalid rule for language '{language}': {message}")]
    InvalidRule { language: String, message: String },
}

impl Error {
    /// Create a rule error.
    pub fn invalid_rule(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            language: language.into(),
            message: message.into(),
        }
    }
}
