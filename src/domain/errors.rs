use thiserror::Error;

/// Failure while turning the display buffer into a number.
///
/// The controller never surfaces this to the user directly; any variant
/// collapses into the literal `Error` display state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The expression could not be tokenized or parsed.
    #[error("Syntax error: {0}")]
    Syntax(String),
    /// Evaluation produced an infinite or NaN value.
    #[error("Non-finite result: {0}")]
    NonFinite(f64),
}

/// Failure while reading or writing the preference store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings file parsed, but is not an object of string values.
    #[error("Malformed settings: {0}")]
    Malformed(String),
}

pub type EvaluationResult<T> = Result<T, EvaluationError>;
pub type StorageResult<T> = Result<T, StorageError>;
