//! compression/types.rs
//! Codec identifiers, levels, errors and the compressor traits.
use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::compression::constants::codec_ids;
use crate::constants::{DEFAULT_LEVEL, MAX_LEVEL};
use crate::utils::enum_name_or_hex;

/// FFI-safe enum for compression codec identifiers.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Codec {
    /// Raw deflate stream, no framing.
    Deflate = codec_ids::DEFLATE,
    /// Gzip container: header, deflate body, CRC32 + length trailer.
    Gzip    = codec_ids::GZIP,
}

impl Codec {
    pub const ALL: [Codec; 2] = [Codec::Deflate, Codec::Gzip];

    pub fn name(&self) -> &'static str {
        match self {
            Codec::Deflate => "deflate",
            Codec::Gzip    => "gzip",
        }
    }

    pub fn from_id(raw: u16) -> Result<Self, CompressionError> {
        Codec::try_from_primitive(raw).map_err(|_| CompressionError::UnsupportedCodec { codec_id: raw })
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codec {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deflate" | "flate" => Ok(Codec::Deflate),
            "gzip" | "gz"       => Ok(Codec::Gzip),
            _ => Err(CompressionError::UnknownCodecName(s.to_owned())),
        }
    }
}

/// Deflate-family quality level, 0 (store) to 9 (best).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    pub fn new(level: u32) -> Result<Self, CompressionError> {
        if level > MAX_LEVEL {
            return Err(CompressionError::InvalidLevel { level, max: MAX_LEVEL });
        }
        Ok(Self(level))
    }

    pub fn best() -> Self {
        Self(MAX_LEVEL)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self(DEFAULT_LEVEL)
    }
}

impl From<CompressionLevel> for flate2::Compression {
    fn from(level: CompressionLevel) -> Self {
        flate2::Compression::new(level.0)
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("unsupported compression codec: {}", codec_label(.codec_id))]
    UnsupportedCodec { codec_id: u16 },

    #[error("unknown codec name: {0:?}")]
    UnknownCodecName(String),

    #[error("invalid compression level {level}, expected 0..={max}")]
    InvalidLevel { level: u32, max: u32 },

    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: String, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: String, msg: String },
}

fn codec_label(raw: &u16) -> String {
    enum_name_or_hex::<Codec>(*raw)
}

impl CompressionError {
    pub(crate) fn process(codec: Codec, e: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec: codec.name().into(), msg: e.to_string() }
    }
}

// Require Send so trait objects can cross thread boundaries.
pub trait Compressor: Send {
    /// Write the whole payload into the stream.
    fn write_all(&mut self, input: &[u8]) -> Result<(), CompressionError>;
    /// Flush and close the stream, returning the accumulated output.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, CompressionError>;
}

pub trait Decompressor: Send {
    /// Decode one complete compressed payload into `out`.
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
