//! API error types

use havarot_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum Error {
    /// An option key or value could not be understood
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The input cannot be syllabified at all (e.g. no vowel points)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The engine rejected a word or a name query
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[cfg(feature = "json")]
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use havarot_core::ViolationKind;

    #[test]
    fn test_core_error_is_transparent() {
        let core = CoreError::StructuralViolation {
            kind: ViolationKind::Mater,
            cluster: "\u{05D9}".into(),
            word: "w".into(),
        };
        let message = core.to_string();
        let err: Error = core.into();
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_configuration_display() {
        let err = Error::Configuration("unknown option 'foo'".into());
        assert_eq!(err.to_string(), "configuration error: unknown option 'foo'");
    }
}
