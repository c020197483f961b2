/// Convenience result type used across the public API.
pub type BezierResult<T> = Result<T, BezierError>;

/// Top-level error type for configuration, parsing and sink failures.
///
/// Degenerate curves, ignored input and out-of-range parameters are not errors; they are
/// modelled as ordinary return values by the evaluator and the driver.
#[derive(thiserror::Error, Debug)]
pub enum BezierError {
    /// Input data failed a validation rule (e.g. a malformed point list).
    #[error("validation error: {0}")]
    Validation(String),

    /// Driver configuration is unusable.
    #[error("config error: {0}")]
    Config(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A frame sink rejected a frame.
    #[error("sink error: {0}")]
    Sink(String),

    /// Any other error with preserved source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BezierError {
    /// Build a [`BezierError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BezierError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BezierError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`BezierError::Sink`] value.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}

impl From<serde_json::Error> for BezierError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
