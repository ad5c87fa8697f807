//! pipeline/config.rs
//! Per-pipeline settings. Nothing is read from files or the environment.
use crate::canonical::{Canonicalizer, StructuralErrorPolicy};
use crate::compression::CompressionLevel;
use crate::constants::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Codec level. The free entry points always use the maximum.
    pub level: CompressionLevel,

    /// Maximum chained indirections before `TooDeep`.
    pub max_depth: usize,

    /// Whether a failed structural view is swallowed or surfaced.
    /// - `Lenient` (default) → empty bytes, matching historical behaviour.
    /// - `Strict` → `CanonicalError::Structural`.
    pub structural_errors: StructuralErrorPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            level: CompressionLevel::best(),
            max_depth: DEFAULT_MAX_DEPTH,
            structural_errors: StructuralErrorPolicy::Lenient,
        }
    }
}

impl PipelineConfig {
    pub fn new(
        level: Option<CompressionLevel>,
        max_depth: Option<usize>,
        structural_errors: Option<StructuralErrorPolicy>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            level: level.unwrap_or(defaults.level),
            max_depth: max_depth.unwrap_or(defaults.max_depth),
            structural_errors: structural_errors.unwrap_or(defaults.structural_errors),
        }
    }

    pub fn strict() -> Self {
        Self { structural_errors: StructuralErrorPolicy::Strict, ..Self::default() }
    }

    pub fn canonicalizer(&self) -> Canonicalizer {
        Canonicalizer::new(Some(self.max_depth), Some(self.structural_errors))
    }
}
