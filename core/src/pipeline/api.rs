//! pipeline/api.rs
//! Public entry points.
//!
//! Each family comes in two flavours with identical success paths:
//! - `try_*` returns the error to the caller untouched,
//! - the unchecked form panics with the error message.
use crate::canonical::{CanonicalBytes, Value};
use crate::compression::{Codec, CompressedBytes};
use crate::encoding::EncodedText;
use crate::pipeline::core::Pipeline;
use crate::types::CompressorError;

#[track_caller]
fn unwrap_or_abort<T>(result: Result<T, CompressorError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

// -----------------------------------------------------------------------------
// Canonical bytes only
// -----------------------------------------------------------------------------

pub fn try_to_bytes(value: impl Into<Value>) -> Result<CanonicalBytes, CompressorError> {
    Pipeline::default().canonicalize(&value.into())
}

#[track_caller]
pub fn to_bytes(value: impl Into<Value>) -> CanonicalBytes {
    unwrap_or_abort(try_to_bytes(value))
}

// -----------------------------------------------------------------------------
// Deflate
// -----------------------------------------------------------------------------

/// Canonicalize `value` and compress it as a raw deflate stream at the maximum level.
///
/// # Example
/// ```
/// let bytes = compressor_core::try_to_deflate("Hello World").unwrap();
/// assert!(!bytes.is_empty());
/// ```
pub fn try_to_deflate(value: impl Into<Value>) -> Result<CompressedBytes, CompressorError> {
    Pipeline::default().compress(&value.into(), Codec::Deflate)
}

/// Panicking variant of [`try_to_deflate`].
#[track_caller]
pub fn to_deflate(value: impl Into<Value>) -> CompressedBytes {
    unwrap_or_abort(try_to_deflate(value))
}

pub fn try_to_deflate_base64(value: impl Into<Value>) -> Result<EncodedText, CompressorError> {
    Pipeline::default().compress_base64(&value.into(), Codec::Deflate)
}

#[track_caller]
pub fn to_deflate_base64(value: impl Into<Value>) -> EncodedText {
    unwrap_or_abort(try_to_deflate_base64(value))
}

// -----------------------------------------------------------------------------
// Gzip
// -----------------------------------------------------------------------------

/// Canonicalize `value` and compress it as a gzip member at the maximum level.
pub fn try_to_gzip(value: impl Into<Value>) -> Result<CompressedBytes, CompressorError> {
    Pipeline::default().compress(&value.into(), Codec::Gzip)
}

#[track_caller]
pub fn to_gzip(value: impl Into<Value>) -> CompressedBytes {
    unwrap_or_abort(try_to_gzip(value))
}

pub fn try_to_gzip_base64(value: impl Into<Value>) -> Result<EncodedText, CompressorError> {
    Pipeline::default().compress_base64(&value.into(), Codec::Gzip)
}

#[track_caller]
pub fn to_gzip_base64(value: impl Into<Value>) -> EncodedText {
    unwrap_or_abort(try_to_gzip_base64(value))
}

// -----------------------------------------------------------------------------
// Inverse direction
// -----------------------------------------------------------------------------

pub fn try_from_deflate(payload: &[u8]) -> Result<CanonicalBytes, CompressorError> {
    Pipeline::default().decompress(payload, Codec::Deflate)
}

pub fn try_from_deflate_base64(text: &str) -> Result<CanonicalBytes, CompressorError> {
    Pipeline::default().decompress_base64(text, Codec::Deflate)
}

pub fn try_from_gzip(payload: &[u8]) -> Result<CanonicalBytes, CompressorError> {
    Pipeline::default().decompress(payload, Codec::Gzip)
}

pub fn try_from_gzip_base64(text: &str) -> Result<CanonicalBytes, CompressorError> {
    Pipeline::default().decompress_base64(text, Codec::Gzip)
}
