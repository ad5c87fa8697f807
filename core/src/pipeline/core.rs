//! pipeline/core.rs
//! Stage composition: canonicalize → compress [→ encode].
use log::debug;

use crate::canonical::{CanonicalBytes, Canonicalizer, Value};
use crate::compression::{self, Codec, CompressedBytes};
use crate::encoding::{self, EncodedText};
use crate::pipeline::config::PipelineConfig;
use crate::types::CompressorError;

/// Stateless composition of the three stages under one config.
/// Cheap to copy; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    canonicalizer: Canonicalizer,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { canonicalizer: config.canonicalizer(), config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn canonicalize(&self, value: &Value) -> Result<CanonicalBytes, CompressorError> {
        Ok(self.canonicalizer.canonicalize(value)?)
    }

    pub fn compress(&self, value: &Value, codec: Codec) -> Result<CompressedBytes, CompressorError> {
        let canonical = self.canonicalize(value)?;
        let compressed = compression::compress_with_level(&canonical, codec, self.config.level)?;

        debug!(
            "[PIPELINE] shape={} canonical={} codec={} compressed={}",
            value.shape(),
            canonical.len(),
            codec,
            compressed.len()
        );
        Ok(compressed)
    }

    pub fn compress_base64(&self, value: &Value, codec: Codec) -> Result<EncodedText, CompressorError> {
        let compressed = self.compress(value, codec)?;
        Ok(encoding::encode(&compressed))
    }

    /// Recover canonical bytes from a compressed payload.
    pub fn decompress(&self, payload: &[u8], codec: Codec) -> Result<CanonicalBytes, CompressorError> {
        Ok(compression::decompress(payload, codec)?)
    }

    pub fn decompress_base64(&self, text: &str, codec: Codec) -> Result<CanonicalBytes, CompressorError> {
        let payload = encoding::decode(text)?;
        self.decompress(&payload, codec)
    }
}
