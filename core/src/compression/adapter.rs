//! compression/adapter.rs
//! Single-shot compression over the registry codecs.
//!
//! The whole input is written in one pass and the stream is finalized before
//! anything is returned. On any failure the partial output is dropped.
use log::debug;

use crate::compression::registry::{create_compressor, create_decompressor};
use crate::compression::types::{Codec, CompressionError, CompressionLevel};

/// Compressed payload. Always derived from canonical bytes.
pub type CompressedBytes = Vec<u8>;

/// Compress `input` with `codec` at the maximum level.
pub fn compress(input: &[u8], codec: Codec) -> Result<CompressedBytes, CompressionError> {
    compress_with_level(input, codec, CompressionLevel::best())
}

pub fn compress_with_level(
    input: &[u8],
    codec: Codec,
    level: CompressionLevel,
) -> Result<CompressedBytes, CompressionError> {
    let mut compressor = create_compressor(codec, Some(level))?;
    compressor.write_all(input)?;
    let out = compressor.finish()?;

    debug!("[COMPRESSION] {} level={} in={} out={}", codec, level.get(), input.len(), out.len());
    Ok(out)
}

/// Inverse of `compress`.
pub fn decompress(input: &[u8], codec: Codec) -> Result<Vec<u8>, CompressionError> {
    let mut decompressor = create_decompressor(codec)?;
    let mut out = Vec::new();
    decompressor.decompress(input, &mut out)?;

    debug!("[DECOMPRESSION] {} in={} out={}", codec, input.len(), out.len());
    Ok(out)
}
