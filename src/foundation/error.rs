/// Convenience result type used across Tubesleuth.
pub type TubesleuthResult<T> = Result<T, TubesleuthError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Scheduling, transforms and captions never fail; only loading and validating
/// timeline documents and driving the frame evaluator can.
#[derive(thiserror::Error, Debug)]
pub enum TubesleuthError {
    /// Invalid user-provided timeline or settings data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating a render plan over a frame range.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TubesleuthError {
    /// Build a [`TubesleuthError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TubesleuthError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`TubesleuthError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TubesleuthError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
