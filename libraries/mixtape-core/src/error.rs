//! Core error types for Mixtape
use thiserror::Error;

/// Result type alias using `MixtapeError`
pub type Result<T> = std::result::Result<T, MixtapeError>;

/// Core error type for Mixtape
///
/// Only identity fields (user ids, comment text) are validated strictly.
/// Absent songs and comment ids are not errors: the operations that take
/// them treat `None` as a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MixtapeError {
    /// Invalid argument passed to a playlist operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MixtapeError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = MixtapeError::invalid_argument("userId invalid");
        assert_eq!(err.to_string(), "Invalid argument: userId invalid");
    }
}
