//! constants.rs
//! Stable ids and defaults shared across the pipeline.

/// Stable codec IDs (u16), usable as wire tags by consumers.
pub mod codec_ids {
    pub const DEFLATE: u16 = 0x0001;
    pub const GZIP: u16    = 0x0002;
}

/// Maximum deflate-family level. Entry points always compress at this level.
pub const MAX_LEVEL: u32 = 9;
pub const DEFAULT_LEVEL: u32 = MAX_LEVEL;

/// Upper bound on nested indirections followed before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Shape names carried by `Value::Unsupported`.
pub mod shape_names {
    pub const CHAN: &str           = "chan";
    pub const FUNC: &str           = "func";
    pub const UNSAFE_POINTER: &str = "unsafe pointer";
}

/// Decimal exponent at or above which floats switch to exponent form.
pub const FLOAT_EXP_UPPER: i32 = 6;
/// Decimal exponent below which floats switch to exponent form.
pub const FLOAT_EXP_LOWER: i32 = -4;
