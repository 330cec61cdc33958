//! Error types
//!
//! Every fallible operation in this crate returns [`MetricsError`]. A computed
//! `0` is always a real value; degenerate inputs surface as an error variant
//! instead.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// A record field is missing, non-numeric or non-finite, or a policy
    /// parameter is outside its domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The indicator has a zero denominator for this input.
    #[error("undefined result: {0}")]
    UndefinedResult(String),
    /// The collection is empty and the operation has no neutral default.
    #[error("empty input: {0}")]
    EmptyInput(String),
    #[error("config error: {0}")]
    Config(String),
}

impl MetricsError {
    pub fn is_undefined(&self) -> bool {
        matches!(self, MetricsError::UndefinedResult(_))
    }
}

impl From<serde_json::Error> for MetricsError {
    fn from(err: serde_json::Error) -> Self {
        MetricsError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
