//! compression/mod.rs
//! Compression adapter: canonical bytes in, finished compressed stream out.
//!
//! Notes:
//! - Two codecs: raw deflate and gzip-framed deflate, both via flate2.
//! - Registry resolves codec IDs to implementations.
//! - Entry points compress at the maximum level; other levels are opt-in.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod adapter;

pub use types::*;
pub use registry::*;
pub use adapter::*;
