//! Crate-wide error types.
//!
//! Everything fallible returns [`Result`] with [`PersonaError`]; the two
//! domain failures are `InvalidInput` (a required answer is missing at
//! prediction time) and `UnknownLabel` (the classifier produced a code the
//! label mapping does not know).

#![allow(dead_code)] // Error variants and helpers are available for future use

use thiserror::Error;

/// Main error type for PersonaTUI
#[derive(Error, Debug)]
pub enum PersonaError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required questionnaire field is missing at prediction time
    #[error("Incomplete questionnaire: {0}")]
    InvalidInput(String),

    /// The classifier returned a label code with no mapping entry.
    /// Indicates a mismatch between the model and the label mapping.
    #[error("Classifier returned unknown label code {code}")]
    UnknownLabel { code: i64 },

    /// Answers file errors (loading, parsing, range validation)
    #[error("Answers error: {0}")]
    Answers(String),

    /// Label mapping resource errors (loading, verification)
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// State errors (invalid wizard state for the requested operation)
    #[error("State error: {0}")]
    State(String),

    /// Wizard step machine transition errors
    #[error("Wizard error: {0}")]
    Wizard(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for PersonaTUI operations
pub type Result<T> = std::result::Result<T, PersonaError>;

// Convenient error constructors
impl PersonaError {
    /// Create an invalid-input error for a missing required field
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an unknown-label error for an unmapped classifier code
    pub fn unknown_label(code: i64) -> Self {
        Self::UnknownLabel { code }
    }

    /// Create an answers file error
    pub fn answers(msg: impl Into<String>) -> Self {
        Self::Answers(msg.into())
    }

    /// Create a mapping resource error
    pub fn mapping(msg: impl Into<String>) -> Self {
        Self::Mapping(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a wizard transition error
    pub fn wizard(msg: impl Into<String>) -> Self {
        Self::Wizard(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Free-function form of [`PersonaError::general`] for `map_err` call sites.
pub fn general_error(msg: impl Into<String>) -> PersonaError {
    PersonaError::General(msg.into())
}
