//! Error types for DGA

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to the user when any form field is not a number
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numeric values.";

/// DGA errors
///
/// The evaluator itself never fails; every variant here belongs to the
/// shell around it (input parsing, configuration, CLI).
#[derive(Error, Debug)]
pub enum Error {
    /// A gas field could not be parsed as a real number.
    ///
    /// Displays the fixed user-facing message; `field` and `value` are
    /// kept for diagnostics.
    #[error("Please enter valid numeric values.")]
    InvalidInput { field: &'static str, value: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True for rejected form input (as opposed to I/O or config failures)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_is_fixed() {
        let err = Error::InvalidInput {
            field: "CO2",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_str() {
        let err: Error = "boom".into();
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_invalid_input());
    }
}
