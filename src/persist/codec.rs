//! Encode/decode contracts between in-memory values and stored strings.

use super::CodecError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// Converts values of type `T` to and from their stored string form.
pub trait Codec<T> {
    /// Encodes `value` for storage.
    fn encode(&self, value: &T) -> Result<String, CodecError>;

    /// Decodes a stored string back into a value.
    fn decode(&self, raw: &str) -> Result<T, CodecError>;
}

/// Default codec: structured JSON text via `serde_json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl<T> Codec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(value)?)
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Stores a `String` verbatim, without quoting.
///
/// The empty string encodes to an empty stored value, which
/// [`PersistedCell`](super::PersistedCell) treats as absent: a cell set to
/// `""` reopens with its default. [`JsonCodec`] stores the empty string as
/// two quote characters, so use it when `""` must survive a reopen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawStringCodec;

impl Codec<String> for RawStringCodec {
    fn encode(&self, value: &String) -> Result<String, CodecError> {
        Ok(value.clone())
    }

    fn decode(&self, raw: &str) -> Result<String, CodecError> {
        Ok(raw.to_string())
    }
}

/// Codec assembled from a pair of closures.
///
/// ```
/// use persisted_tictactoe::{Codec, CodecError, FnCodec};
///
/// let codec = FnCodec::new(
///     |n: &u8| -> Result<String, CodecError> { Ok(format!("{:02x}", n)) },
///     |raw: &str| -> Result<u8, CodecError> {
///         u8::from_str_radix(raw, 16).map_err(|e| CodecError::new(e.to_string()))
///     },
/// );
/// assert_eq!(codec.encode(&255u8).unwrap(), "ff");
/// assert_eq!(codec.decode("0a").unwrap(), 10);
/// ```
#[derive(Clone)]
pub struct FnCodec<E, D> {
    encode: E,
    decode: D,
}

impl<E, D> FnCodec<E, D> {
    /// Creates a codec from an encode and a decode function.
    pub fn new(encode: E, decode: D) -> Self {
        Self { encode, decode }
    }
}

impl<E, D> fmt::Debug for FnCodec<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec").finish_non_exhaustive()
    }
}

impl<T, E, D> Codec<T> for FnCodec<E, D>
where
    E: Fn(&T) -> Result<String, CodecError>,
    D: Fn(&str) -> Result<T, CodecError>,
{
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        (self.encode)(value)
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        (self.decode)(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_codec_is_quoted_text() {
        let encoded = Codec::<String>::encode(&JsonCodec, &"Ada".to_string()).unwrap();
        assert_eq!(encoded, "\"Ada\"");
    }

    #[test]
    fn test_json_codec_rejects_garbage() {
        let result: Result<Vec<u8>, _> = JsonCodec.decode("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_string_codec_is_verbatim() {
        let codec = RawStringCodec;
        assert_eq!(codec.encode(&"plain".to_string()).unwrap(), "plain");
        assert_eq!(codec.decode("\"kept\"").unwrap(), "\"kept\"");
    }
}
