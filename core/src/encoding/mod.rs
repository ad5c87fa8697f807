//! encoding/mod.rs
//! Text encoder for contexts that forbid raw binary.

pub mod text;

pub use text::*;
