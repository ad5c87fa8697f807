//! codecs/gzip.rs
//! Gzip container (RFC 1952) via flate2.
//!
//! The trailer carries CRC32 and ISIZE of the uncompressed payload; the
//! decoder verifies both.

use std::io::{Read, Write};

use flate2::{read::GzDecoder, write::GzEncoder};

use crate::compression::constants::{GZIP_HEADER_LEN, GZIP_MAGIC, GZIP_TRAILER_LEN};
use crate::compression::types::{Codec, CompressionError, CompressionLevel, Compressor, Decompressor};

pub struct GzipCompressor {
    enc: GzEncoder<Vec<u8>>,
}

impl GzipCompressor {
    pub fn new(level: CompressionLevel) -> Result<Box<dyn Compressor + Send>, CompressionError> {
        Ok(Box::new(Self { enc: GzEncoder::new(Vec::new(), level.into()) }))
    }
}

impl Compressor for GzipCompressor {
    fn write_all(&mut self, input: &[u8]) -> Result<(), CompressionError> {
        self.enc
            .write_all(input)
            .map_err(|e| CompressionError::process(Codec::Gzip, e))
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, CompressionError> {
        self.enc
            .finish()
            .map_err(|e| CompressionError::process(Codec::Gzip, e))
    }
}

pub struct GzipDecompressor;

impl GzipDecompressor {
    pub fn new() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        Ok(Box::new(Self))
    }
}

impl Decompressor for GzipDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if input.len() < GZIP_HEADER_LEN + GZIP_TRAILER_LEN || input[..2] != GZIP_MAGIC {
            return Err(CompressionError::process(Codec::Gzip, "input is not a gzip member"));
        }

        let mut dec = GzDecoder::new(input);
        dec.read_to_end(out)
            .map_err(|e| CompressionError::process(Codec::Gzip, e))?;
        Ok(())
    }
}
