use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

///
/// CodecError
///
/// `Decode` is the recoverable path for malformed or mis-shaped interchange
/// text arriving from another party. `Encode` exists for completeness;
/// encoding a well-formed record does not fail in practice.
///

#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("encode error: {0}")]
    Encode(String),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Encode a value as canonical JSON interchange text.
///
/// This helper keeps the error type aligned across the crate.
pub fn encode<T>(value: &T) -> Result<String, CodecError>
where
    T: Serialize,
{
    serde_json::to_string(value).map_err(|err| CodecError::Encode(err.to_string()))
}

/// Decode a value from JSON interchange text produced by [`encode`].
///
/// The whole input must parse; trailing bytes after the document are an
/// error.
pub fn decode<T>(text: &str) -> Result<T, CodecError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(|err| CodecError::Decode(err.to_string()))
}

///
/// TESTS
///
