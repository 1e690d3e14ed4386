//! Identifier configuration: the alphabet and the raw ID length.

use serde::{Deserialize, Serialize};

use crate::{Alphabet, Codec, IdError};

/// Default alphabet: digits, lowercase, then uppercase ASCII letters.
pub const DEFAULT_CHARACTERS: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default raw ID length.
pub const DEFAULT_LENGTH: usize = 12;

/// Alphabet and raw length used to build a [`Codec`].
///
/// Every identifier issued under one configuration must be decoded under the
/// same configuration; changing either field silently changes which storage
/// ID a full ID decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdConfig {
    /// Ordered alphabet, no duplicate characters.
    #[serde(default = "default_characters")]
    pub characters: String,

    /// Raw ID length (`N`).
    #[serde(default = "default_length")]
    pub length: usize,
}

fn default_characters() -> String {
    DEFAULT_CHARACTERS.to_string()
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            characters: default_characters(),
            length: default_length(),
        }
    }
}

impl IdConfig {
    /// Creates a config from an alphabet string and a raw length.
    pub fn new(characters: impl Into<String>, length: usize) -> Self {
        Self {
            characters: characters.into(),
            length,
        }
    }

    /// Checks the config and returns its alphabet.
    pub fn validate(&self) -> Result<Alphabet, IdError> {
        if self.length == 0 {
            return Err(IdError::invalid_config("length must be greater than zero"));
        }
        let alphabet = Alphabet::new(&self.characters)?;

        // Decoding biases by N * L and compares against N + 1.
        self.length
            .checked_add(1)
            .and_then(|full| full.checked_mul(alphabet.len()))
            .ok_or_else(|| {
                IdError::invalid_config(format!(
                    "length {} is too large for an alphabet of {} characters",
                    self.length,
                    alphabet.len()
                ))
            })?;

        Ok(alphabet)
    }

    /// Validates the config and builds a codec from it.
    pub fn build(&self) -> Result<Codec, IdError> {
        let alphabet = self.validate()?;
        Ok(Codec::new(alphabet, self.length))
    }
}
