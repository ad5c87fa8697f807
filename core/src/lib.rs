//! compressor-core
//!
//! Turn any value into canonical bytes, compress them with deflate or gzip,
//! and optionally render the result as base64 text.
//!
//! ```
//! use compressor_core::{try_from_deflate_base64, try_to_deflate_base64};
//!
//! let text = try_to_deflate_base64(123).unwrap();
//! assert_eq!(try_from_deflate_base64(&text).unwrap(), b"123");
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Stages
pub mod canonical;
pub mod compression;
pub mod encoding;

// Orchestration
pub mod pipeline;

pub use canonical::{CanonicalError, Complex, Record, ShapeKind, StructuralErrorPolicy, Value};
pub use compression::{Codec, CompressionError, CompressionLevel};
pub use encoding::EncodingError;
pub use pipeline::api::*;
pub use pipeline::{Pipeline, PipelineConfig};
pub use types::CompressorError;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::canonical::{Canonicalizer, Complex, Record, Value};
    pub use crate::compression::Codec;
    pub use crate::pipeline::{Pipeline, PipelineConfig};
    pub use crate::types::CompressorError;
}
