//! encoding/text.rs
//! Standard base64 (RFC 4648 alphabet, `=` padding).
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Text-safe rendering of compressed bytes.
pub type EncodedText = String;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Total for any byte input.
pub fn encode(bytes: &[u8]) -> EncodedText {
    STANDARD.encode(bytes)
}

pub fn decode(text: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(STANDARD.decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_emitted() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
    }

    #[test]
    fn standard_alphabet_not_url_safe() {
        assert_eq!(encode(&[0xfb, 0xff]), "+/8=");
        assert!(decode("-_8=").is_err());
    }

    #[test]
    fn unpadded_input_is_rejected() {
        assert!(decode("Zg").is_err());
        assert_eq!(decode("Zg==").unwrap(), b"f");
    }
}
