//! Ordered character set shared by every identifier.
//!
//! The alphabet defines the bijection between characters and their positions
//! that the positional checksum is computed over.

use std::collections::HashMap;

use crate::IdError;

/// An ordered, duplicate-free set of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from its characters, in order.
    ///
    /// Fails if the string is empty or repeats a character.
    pub fn new(characters: &str) -> Result<Self, IdError> {
        let chars: Vec<char> = characters.chars().collect();
        if chars.is_empty() {
            return Err(IdError::invalid_config("alphabet cannot be empty"));
        }

        let mut positions = HashMap::with_capacity(chars.len());
        for (index, &c) in chars.iter().enumerate() {
            if positions.insert(c, index).is_some() {
                return Err(IdError::invalid_config(format!(
                    "alphabet contains duplicate character '{c}'"
                )));
            }
        }

        Ok(Self { chars, positions })
    }

    /// Number of characters (`L`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the alphabet has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Position of `c`, if it belongs to the alphabet.
    #[must_use]
    pub fn position(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    /// Character at `index mod L`.
    #[must_use]
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index % self.chars.len()]
    }

    /// Returns true if `c` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    /// Iterates the characters in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub(crate) fn position_at(&self, c: char, position: usize) -> Result<usize, IdError> {
        self.position(c)
            .ok_or(IdError::UnknownCharacter { character: c, position })
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_positions() {
        let alphabet = Alphabet::new("0123456789abcdef").unwrap();
        assert_eq!(alphabet.len(), 16);
        assert_eq!(alphabet.position('a'), Some(10));
        assert_eq!(alphabet.position('g'), None);
        assert_eq!(alphabet.char_at(26), 'a');
    }

    #[test]
    fn test_empty_rejected() {
        let err = Alphabet::new("").unwrap_err();
        assert!(matches!(err, IdError::InvalidConfig { .. }));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Alphabet::new("abca").unwrap_err();
        assert_eq!(
            err,
            IdError::InvalidConfig {
                message: "alphabet contains duplicate character 'a'".to_string()
            }
        );
    }

    #[test]
    fn test_multibyte_characters() {
        let alphabet = Alphabet::new("αβγ").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.position('γ'), Some(2));
        assert_eq!(alphabet.to_string(), "αβγ");
    }
}
