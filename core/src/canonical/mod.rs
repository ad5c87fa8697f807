//! canonical/mod.rs
//! Value-to-bytes normalization.
//!
//! A `Value` is classified into exactly one `ShapeKind`; the `Canonicalizer`
//! maps each shape to its canonical byte form:
//! - scalars render as minimal ASCII text,
//! - byte sequences pass through untouched,
//! - sequences, mappings and records go through the structural (JSON) view,
//! - indirections are followed until a value or a null is reached.

pub mod types;
pub mod convert;
pub mod format;
pub mod reflect;
pub mod structural;
pub mod canonicalize;

pub use types::*;
pub use format::{format_complex, format_float};
pub use reflect::to_value;
pub use structural::encode_structural;
pub use canonicalize::*;
