//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{deflate, gzip};
use crate::compression::types::{Codec, CompressionError, CompressionLevel, Compressor, Decompressor};

pub struct CodecInfo {
    pub codec: Codec,
    pub name: &'static str,
    pub framed: bool,
    pub default_level: CompressionLevel,
}

pub fn resolve(codec_id: u16) -> Result<CodecInfo, CompressionError> {
    let codec = Codec::from_id(codec_id)?;
    Ok(match codec {
        Codec::Deflate => CodecInfo { codec, name: "deflate", framed: false, default_level: CompressionLevel::best() },
        Codec::Gzip    => CodecInfo { codec, name: "gzip", framed: true, default_level: CompressionLevel::best() },
    })
}

pub fn create_compressor(codec: Codec, level: Option<CompressionLevel>)
    -> Result<Box<dyn Compressor + Send>, CompressionError>
{
    let level = match level {
        Some(level) => level,
        None => resolve(codec as u16)?.default_level,
    };
    match codec {
        Codec::Deflate => deflate::DeflateCompressor::new(level),
        Codec::Gzip    => gzip::GzipCompressor::new(level),
    }
}

pub fn create_decompressor(codec: Codec)
    -> Result<Box<dyn Decompressor + Send>, CompressionError>
{
    match codec {
        Codec::Deflate => deflate::DeflateDecompressor::new(),
        Codec::Gzip    => gzip::GzipDecompressor::new(),
    }
}
