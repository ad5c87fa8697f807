//! compression/codecs/mod.rs
//! flate2-backed codec implementations.

pub mod deflate;
pub mod gzip;

pub use deflate::*;
pub use gzip::*;
