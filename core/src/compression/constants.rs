//! compression/constants.rs
pub use crate::constants::codec_ids;

/// Gzip container overhead: 10-byte header + 8-byte trailer (CRC32, ISIZE).
pub const GZIP_HEADER_LEN: usize  = 10;
pub const GZIP_TRAILER_LEN: usize = 8;

/// Gzip magic bytes.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
