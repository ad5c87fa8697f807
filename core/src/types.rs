//! types.rs
//! Unified error covering every pipeline stage.
//! - `From<T>` impls enable `?` across canonicalize → compress → encode.
//! - There is no partial success: any stage error fails the whole call.
use thiserror::Error;

use crate::canonical::CanonicalError;
use crate::compression::CompressionError;
use crate::encoding::EncodingError;

#[derive(Debug, Error)]
pub enum CompressorError {
    /// Value could not be normalized to bytes.
    #[error("canonicalization error: {0}")]
    Canonical(#[from] CanonicalError),

    /// Codec failed to open, write or close its stream.
    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    /// Text payload was not valid base64.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

impl CompressorError {
    pub fn is_null_indirection(&self) -> bool {
        matches!(self, CompressorError::Canonical(CanonicalError::NullIndirection))
    }

    pub fn is_unsupported_shape(&self) -> bool {
        matches!(self, CompressorError::Canonical(CanonicalError::UnsupportedShape { .. }))
    }
}

pub type Result<T> = std::result::Result<T, CompressorError>;
