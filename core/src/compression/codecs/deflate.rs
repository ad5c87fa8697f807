//! codecs/deflate.rs
//! Raw deflate stream (no zlib/gzip framing) via flate2.

use std::io::{Read, Write};

use flate2::{read::DeflateDecoder, write::DeflateEncoder};

use crate::compression::types::{Codec, CompressionError, CompressionLevel, Compressor, Decompressor};

pub struct DeflateCompressor {
    enc: DeflateEncoder<Vec<u8>>,
}

impl DeflateCompressor {
    pub fn new(level: CompressionLevel) -> Result<Box<dyn Compressor + Send>, CompressionError> {
        Ok(Box::new(Self { enc: DeflateEncoder::new(Vec::new(), level.into()) }))
    }
}

impl Compressor for DeflateCompressor {
    fn write_all(&mut self, input: &[u8]) -> Result<(), CompressionError> {
        self.enc
            .write_all(input)
            .map_err(|e| CompressionError::process(Codec::Deflate, e))
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, CompressionError> {
        self.enc
            .finish()
            .map_err(|e| CompressionError::process(Codec::Deflate, e))
    }
}

pub struct DeflateDecompressor;

impl DeflateDecompressor {
    pub fn new() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        Ok(Box::new(Self))
    }
}

impl Decompressor for DeflateDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut dec = DeflateDecoder::new(input);
        dec.read_to_end(out)
            .map_err(|e| CompressionError::process(Codec::Deflate, e))?;
        Ok(())
    }
}
