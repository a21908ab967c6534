//! Persisted state: values kept in sync with a durable key-value store.

mod cell;
mod codec;
mod error;
mod store;

pub use cell::PersistedCell;
pub use codec::{Codec, FnCodec, JsonCodec, RawStringCodec};
pub use error::{CellError, CodecError, StoreError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
