//! # routeid
//!
//! Self-describing object identifiers that carry a reference to the storage
//! backend owning the object.
//!
//! ## ID Format
//!
//! A full ID is `N + 1` characters drawn from a configured alphabet:
//! one encoded storage character followed by the `N` character raw ID.
//!
//! With the alphabet `0123456789abcdef` and `N = 3`, raw ID `1f0` stored on
//! backend `a` becomes `a1f0`. The leading character is a positional checksum
//! of the storage ID and the raw ID, so it only names the backend when read
//! together with the rest of the string.
//!
//! ## Design Principles
//!
//! - No lookup table: the storage ID is recovered from the full ID alone
//! - The full ID is its own wire format (no prefix, framing, or version)
//! - The codec is built from an explicit [`IdConfig`]; IDs issued under one
//!   configuration only decode correctly under the same configuration
//! - Malformed input is rejected rather than decoded to a wrong backend
//!
//! ```
//! use std::sync::Arc;
//! use routeid::{IdConfig, Identifier, StorageId};
//!
//! let codec = Arc::new(IdConfig::new("0123456789abcdef", 3).build()?);
//!
//! let parsed = Identifier::parse(Arc::clone(&codec), "a1f0")?;
//! assert_eq!(parsed.raw(), "1f0");
//! assert_eq!(parsed.storage(), Some(StorageId::new('a')));
//!
//! let mut fresh = Identifier::generate(codec);
//! fresh.set_storage(StorageId::new('3'))?;
//! assert_eq!(fresh.full()?.len(), 4);
//! # Ok::<(), routeid::IdError>(())
//! ```

mod alphabet;
mod codec;
mod config;
mod error;
mod identifier;
mod types;

pub use alphabet::Alphabet;
pub use codec::Codec;
pub use config::{IdConfig, DEFAULT_CHARACTERS, DEFAULT_LENGTH};
pub use error::IdError;
pub use identifier::Identifier;
pub use types::StorageId;
