//! Identifier values with a lazily computed, cached full form.

use std::sync::Arc;

use tracing::debug;

use crate::{Codec, IdError, StorageId};

/// An object identifier: a raw ID plus the storage backend that owns it.
///
/// The full ID is derived from the raw ID and storage ID on first access and
/// cached until either input changes. Mutation needs `&mut self`; wrap the
/// value in a lock to share it between threads.
#[derive(Debug, Clone)]
pub struct Identifier {
    codec: Arc<Codec>,
    raw: String,
    storage: Option<StorageId>,
    full: Option<String>,
}

impl Identifier {
    /// Creates an identifier with a freshly generated raw ID and no storage.
    #[must_use]
    pub fn generate(codec: Arc<Codec>) -> Self {
        let raw = codec.generate_raw();
        Self::from_raw(codec, raw)
    }

    /// Creates an identifier from a known full ID, decoding it immediately.
    pub fn parse(codec: Arc<Codec>, full: &str) -> Result<Self, IdError> {
        let (raw, storage) = codec.decode(full)?;
        debug!(full, raw = %raw, storage = %storage, "parsed identifier");
        Ok(Self {
            codec,
            raw,
            storage: Some(storage),
            full: Some(full.to_string()),
        })
    }

    /// Creates an identifier around an existing raw ID, storage unset.
    pub(crate) fn from_raw(codec: Arc<Codec>, raw: String) -> Self {
        Self {
            codec,
            raw,
            storage: None,
            full: None,
        }
    }

    /// Replaces the raw ID with a fresh one and returns it.
    pub fn regenerate_raw(&mut self) -> &str {
        self.raw = self.codec.generate_raw();
        self.invalidate();
        &self.raw
    }

    /// Assigns the storage backend.
    ///
    /// Fails if `storage` is not in the codec's alphabet; the identifier is left
    /// unchanged in that case.
    pub fn set_storage(&mut self, storage: StorageId) -> Result<(), IdError> {
        self.codec.check_storage(storage)?;
        self.storage = Some(storage);
        self.invalidate();
        Ok(())
    }

    /// The storage backend, if one has been assigned.
    #[must_use]
    pub fn storage(&self) -> Option<StorageId> {
        self.storage
    }

    /// The raw ID, as used by the storage backend.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The full ID, computed from the raw ID and storage ID if necessary.
    pub fn full(&mut self) -> Result<&str, IdError> {
        let full = match self.full.take() {
            Some(full) => full,
            None => self.compute_full()?,
        };
        Ok(self.full.insert(full).as_str())
    }

    /// The cached full ID, without computing it.
    #[must_use]
    pub fn cached_full(&self) -> Option<&str> {
        self.full.as_deref()
    }

    fn compute_full(&self) -> Result<String, IdError> {
        let storage = self.storage.ok_or_else(|| IdError::InvalidState {
            message: "raw and storage ID must be set to compute the full ID".to_string(),
        })?;
        self.codec.encode(&self.raw, storage)
    }

    fn invalidate(&mut self) {
        if let Some(previous) = self.full.take() {
            debug!(previous = %previous, "invalidated cached full identifier");
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.storage == other.storage && self.codec == other.codec
    }
}

impl Eq for Identifier {}
