//! Error types for identifier encoding, decoding, and configuration.

use thiserror::Error;

/// Errors that can occur when building, encoding, or decoding identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier is missing a field required to compute its full form.
    #[error("invalid identifier state: {message}")]
    InvalidState { message: String },

    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID has the wrong number of characters.
    #[error("invalid ID length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The ID contains a character outside the configured alphabet.
    #[error("character '{character}' at position {position} is not in the alphabet")]
    UnknownCharacter { character: char, position: usize },

    /// A storage ID must be exactly one character.
    #[error("storage ID must be a single character, got '{value}'")]
    InvalidStorageId { value: String },

    /// The alphabet or length configuration is unusable.
    #[error("invalid ID configuration: {message}")]
    InvalidConfig { message: String },
}

impl IdError {
    /// Returns true if this error was caused by a malformed identifier string.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            IdError::Empty | IdError::InvalidLength { .. } | IdError::UnknownCharacter { .. }
        )
    }

    /// Returns true if this error indicates a full ID was requested too early.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, IdError::InvalidState { .. })
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        IdError::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_family() {
        assert!(IdError::Empty.is_malformed());
        assert!(IdError::InvalidLength {
            expected: 4,
            actual: 2
        }
        .is_malformed());
        assert!(IdError::UnknownCharacter {
            character: '!',
            position: 0
        }
        .is_malformed());
        assert!(!IdError::invalid_config("nope").is_malformed());
    }

    #[test]
    fn test_display_messages() {
        let err = IdError::UnknownCharacter {
            character: 'z',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "character 'z' at position 3 is not in the alphabet"
        );
    }
}
