//! pipeline/mod.rs
//! Orchestration surface over the canonical, compression and encoding stages.

pub mod config;
pub mod core;
pub mod api;

pub use config::*;
pub use self::core::*;
pub use api::*;
