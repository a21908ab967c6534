//! Write-through binding between one store key and an in-memory value.

use super::{CellError, Codec, JsonCodec, KeyValueStore};
use std::fmt;
use tracing::{debug, instrument};

/// A value mirrored to a single key of a [`KeyValueStore`].
///
/// The cell reads the key once when opened and writes the encoded value on
/// every [`set`](Self::set), even when the new value equals the old one, so
/// the store always reflects the latest call. Key and codec are fixed for
/// the cell's lifetime.
pub struct PersistedCell<T, S, C = JsonCodec> {
    store: S,
    key: String,
    codec: C,
    value: T,
}

impl<T, S> PersistedCell<T, S, JsonCodec>
where
    S: KeyValueStore,
    JsonCodec: Codec<T>,
{
    /// Opens a cell at `key` using the default JSON codec.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::Decode`] if a stored value exists but cannot be
    /// decoded, or [`CellError::Store`] if the read fails.
    pub fn open(store: S, key: impl Into<String>, default: T) -> Result<Self, CellError> {
        Self::open_with(store, key, default, JsonCodec)
    }
}

impl<T, S, C> PersistedCell<T, S, C>
where
    S: KeyValueStore,
    C: Codec<T>,
{
    /// Opens a cell at `key` with an explicit codec.
    ///
    /// An absent key, or an empty stored string, yields `default` and writes
    /// nothing. A present value is decoded; a decode failure is returned
    /// rather than replaced by `default`.
    ///
    /// Because an empty string reads as absent, a value whose encoding is
    /// empty (such as `""` under [`RawStringCodec`](super::RawStringCodec))
    /// reopens as `default`.
    #[instrument(skip(store, key, default, codec), fields(key = tracing::field::Empty))]
    pub fn open_with(
        store: S,
        key: impl Into<String>,
        default: T,
        codec: C,
    ) -> Result<Self, CellError> {
        let key = key.into();
        tracing::Span::current().record("key", key.as_str());

        let value = match store.get(&key)? {
            Some(raw) if !raw.is_empty() => {
                debug!(key = %key, "Decoding stored value");
                codec
                    .decode(&raw)
                    .map_err(|source| CellError::Decode {
                        key: key.clone(),
                        source,
                    })?
            }
            _ => {
                debug!(key = %key, "No stored value, using default");
                default
            }
        };

        Ok(Self {
            store,
            key,
            codec,
            value,
        })
    }

    /// Replaces the value and writes it through to the store.
    ///
    /// The in-memory value only changes after the store accepted the write,
    /// so a failed call leaves memory and store in agreement.
    #[instrument(skip(self, value), fields(key = %self.key))]
    pub fn set(&mut self, value: T) -> Result<(), CellError> {
        let encoded = self
            .codec
            .encode(&value)
            .map_err(|source| CellError::Encode {
                key: self.key.clone(),
                source,
            })?;
        self.store.set(&self.key, &encoded)?;
        self.value = value;
        debug!(bytes = encoded.len(), "Value persisted");
        Ok(())
    }

    /// Computes a new value from the current one and [`set`](Self::set)s it.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Result<(), CellError> {
        let next = f(&self.value);
        self.set(next)
    }
}

impl<T, S, C> PersistedCell<T, S, C> {
    /// Returns the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the store key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the store handle.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<T: fmt::Debug, S, C> fmt::Debug for PersistedCell<T, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedCell")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
