//! The positional checksum that binds a storage ID to a raw ID.
//!
//! A full ID is one encoded storage character followed by the raw ID. The
//! encoded character is the storage ID's alphabet position plus the sum of the
//! raw ID's positions, reduced mod `L`. Decoding subtracts the same sum, so the
//! storage ID can only be recovered together with the raw ID it was encoded
//! against.
//!
//! Error positions always refer to character offsets in the full ID: the
//! storage (or encoded) character is position 0, raw characters start at 1.

use rand::Rng;
use tracing::trace;

use crate::{Alphabet, IdError, StorageId};

/// Encodes and decodes full IDs for one alphabet and raw length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
    length: usize,
}

impl Codec {
    /// Creates a codec for raw IDs of `length` characters over `alphabet`.
    ///
    /// Only reachable through [`IdConfig::build`](crate::IdConfig::build), which
    /// bounds `length` so the decode arithmetic cannot overflow.
    #[must_use]
    pub(crate) fn new(alphabet: Alphabet, length: usize) -> Self {
        Self { alphabet, length }
    }

    /// The alphabet every ID is drawn from.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Raw ID length (`N`).
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Full ID length (`N + 1`).
    #[must_use]
    pub fn full_length(&self) -> usize {
        self.length + 1
    }

    /// Generates a raw ID from the thread-local RNG.
    #[must_use]
    pub fn generate_raw(&self) -> String {
        self.generate_raw_with(&mut rand::rng())
    }

    /// Generates a raw ID, drawing each character uniformly from `rng`.
    pub fn generate_raw_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let len = self.alphabet.len();
        (0..self.length)
            .map(|_| self.alphabet.char_at(rng.random_range(0..len)))
            .collect()
    }

    /// Encodes `storage` against `raw`, returning the full ID.
    pub fn encode(&self, raw: &str, storage: StorageId) -> Result<String, IdError> {
        let actual = raw.chars().count();
        if actual != self.length {
            return Err(IdError::InvalidLength {
                expected: self.length,
                actual,
            });
        }

        let mut index = self.alphabet.position_at(storage.as_char(), 0)?;
        for (offset, c) in raw.chars().enumerate() {
            index += self.alphabet.position_at(c, offset + 1)?;
        }

        let encoded = self.alphabet.char_at(index);
        let mut full = String::with_capacity(raw.len() + encoded.len_utf8());
        full.push(encoded);
        full.push_str(raw);

        trace!(raw, storage = %storage, full = %full, "encoded identifier");
        Ok(full)
    }

    /// Decodes a full ID into its raw ID and storage ID.
    ///
    /// Rejects empty input, input that is not exactly `N + 1` characters, and
    /// characters outside the alphabet.
    pub fn decode(&self, full: &str) -> Result<(String, StorageId), IdError> {
        let mut chars = full.chars();
        let Some(encoded) = chars.next() else {
            return Err(IdError::Empty);
        };

        let raw = chars.as_str();
        let actual = full.chars().count();
        if actual != self.full_length() {
            return Err(IdError::InvalidLength {
                expected: self.full_length(),
                actual,
            });
        }

        // Bias by N * L so the running subtraction stays non-negative.
        let mut index =
            self.alphabet.position_at(encoded, 0)? + self.length * self.alphabet.len();
        for (offset, c) in raw.chars().enumerate() {
            index -= self.alphabet.position_at(c, offset + 1)?;
        }

        let storage = StorageId::new(self.alphabet.char_at(index));
        trace!(full, raw, storage = %storage, "decoded identifier");
        Ok((raw.to_string(), storage))
    }

    /// Checks that `storage` belongs to this codec's alphabet.
    pub fn check_storage(&self, storage: StorageId) -> Result<(), IdError> {
        self.alphabet.position_at(storage.as_char(), 0).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;
    use crate::IdConfig;

    fn hex_codec() -> Codec {
        IdConfig::new("0123456789abcdef", 3).build().unwrap()
    }

    #[test]
    fn test_worked_example_encode() {
        let codec = hex_codec();
        let full = codec.encode("1f0", StorageId::new('a')).unwrap();
        assert_eq!(full, "a1f0");
    }

    #[test]
    fn test_worked_example_decode() {
        let codec = hex_codec();
        let (raw, storage) = codec.decode("a1f0").unwrap();
        assert_eq!(raw, "1f0");
        assert_eq!(storage, StorageId::new('a'));
    }

    #[rstest]
    #[case("000", '0', "0000")]
    #[case("000", 'f', "f000")]
    #[case("fff", '1', "efff")]
    #[case("123", '4', "a123")]
    #[case("abc", '0', "1abc")]
    fn test_encode_cases(#[case] raw: &str, #[case] storage: char, #[case] expected: &str) {
        let codec = hex_codec();
        let full = codec.encode(raw, StorageId::new(storage)).unwrap();
        assert_eq!(full, expected);

        let (decoded_raw, decoded_storage) = codec.decode(&full).unwrap();
        assert_eq!(decoded_raw, raw);
        assert_eq!(decoded_storage.as_char(), storage);
    }

    #[test]
    fn test_first_character_alone_is_not_the_storage() {
        let codec = hex_codec();
        let (_, storage) = codec.decode("a1f1").unwrap();
        assert_eq!(storage, StorageId::new('9'));
    }

    #[test]
    fn test_single_character_alphabet() {
        let codec = IdConfig::new("x", 2).build().unwrap();
        assert_eq!(codec.generate_raw(), "xx");
        let full = codec.encode("xx", StorageId::new('x')).unwrap();
        assert_eq!(full, "xxx");
        assert_eq!(codec.decode("xxx").unwrap().1, StorageId::new('x'));
    }

    #[rstest]
    #[case("", IdError::Empty)]
    #[case("a1f", IdError::InvalidLength { expected: 4, actual: 3 })]
    #[case("a1f00", IdError::InvalidLength { expected: 4, actual: 5 })]
    #[case("z1f0", IdError::UnknownCharacter { character: 'z', position: 0 })]
    #[case("a1g0", IdError::UnknownCharacter { character: 'g', position: 2 })]
    fn test_decode_malformed(#[case] input: &str, #[case] expected: IdError) {
        let codec = hex_codec();
        let err = codec.decode(input).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err, expected);
    }

    #[test]
    fn test_decode_counts_characters_not_bytes() {
        let codec = IdConfig::new("αβγδ", 2).build().unwrap();
        let full = codec.encode("βγ", StorageId::new('δ')).unwrap();
        assert_eq!(full.chars().count(), 3);
        let (raw, storage) = codec.decode(&full).unwrap();
        assert_eq!(raw, "βγ");
        assert_eq!(storage, StorageId::new('δ'));
    }

    #[test]
    fn test_encode_wrong_length() {
        let codec = hex_codec();
        let err = codec.encode("1f", StorageId::new('a')).unwrap_err();
        assert_eq!(
            err,
            IdError::InvalidLength {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_encode_unknown_storage() {
        let codec = hex_codec();
        let err = codec.encode("1f0", StorageId::new('q')).unwrap_err();
        assert_eq!(
            err,
            IdError::UnknownCharacter {
                character: 'q',
                position: 0
            }
        );
    }

    #[test]
    fn test_encode_unknown_raw_character() {
        let codec = hex_codec();
        let err = codec.encode("1F0", StorageId::new('a')).unwrap_err();
        assert_eq!(
            err,
            IdError::UnknownCharacter {
                character: 'F',
                position: 2
            }
        );
    }

    #[test]
    fn test_generate_raw_is_seedable() {
        let codec = hex_codec();
        let a = codec.generate_raw_with(&mut StdRng::seed_from_u64(7));
        let b = codec.generate_raw_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.chars().count(), 3);
        assert!(a.chars().all(|c| codec.alphabet().contains(c)));
    }

    #[test]
    fn test_generate_raw_is_roughly_uniform() {
        let codec = IdConfig::new("0123", 1).build().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 4];
        let samples = 40_000;
        for _ in 0..samples {
            let raw = codec.generate_raw_with(&mut rng);
            let c = raw.chars().next().unwrap();
            counts[codec.alphabet().position(c).unwrap()] += 1;
        }
        for count in counts {
            // Expected 10_000 each; allow a generous band.
            assert!((9_000..=11_000).contains(&count), "count = {count}");
        }
    }

    #[test]
    fn test_check_storage() {
        let codec = hex_codec();
        assert!(codec.check_storage(StorageId::new('e')).is_ok());
        assert!(codec.check_storage(StorageId::new('E')).is_err());
    }
}
