//! UTF-8 safe Base64 (RFC 4648 standard alphabet, `=` padded).

use ::base64::Engine as _;
use ::base64::engine::general_purpose::STANDARD;

use crate::error::{DecodeError, Result};

/// Encode the UTF-8 bytes of `text`.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode Base64 and interpret the bytes as UTF-8.
pub fn decode_base64(encoded: &str) -> Result<String> {
    let bytes = STANDARD.decode(encoded).map_err(DecodeError::from)?;
    let text = String::from_utf8(bytes).map_err(DecodeError::from)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;

    #[test]
    fn test_encode() {
        assert_eq!(encode_base64("Hello"), "SGVsbG8=");
        assert_eq!(encode_base64("Hello World!"), "SGVsbG8gV29ybGQh");
        assert_eq!(encode_base64(""), "");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_base64("SGVsbG8=").unwrap(), "Hello");
        assert_eq!(decode_base64("SGVsbG8gV29ybGQh").unwrap(), "Hello World!");
        assert_eq!(decode_base64("").unwrap(), "");
    }

    #[test]
    fn test_decode_invalid_alphabet() {
        let err = decode_base64("!!!invalid!!!").unwrap_err();
        assert!(matches!(err, ToolError::Decode(DecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_bad_padding() {
        assert!(decode_base64("SGVsbG8").is_err());
        assert!(decode_base64("SGVsbG8==").is_err());
    }

    #[test]
    fn test_decode_rejects_url_safe_alphabet() {
        // "???" encodes to "Pz8/" in the standard alphabet, "Pz8_" url-safe
        assert_eq!(encode_base64("???"), "Pz8/");
        assert!(decode_base64("Pz8_").is_err());
    }

    #[test]
    fn test_decode_non_utf8() {
        // 0xFF 0xFE
        let err = decode_base64("//4=").unwrap_err();
        assert!(matches!(err, ToolError::Decode(DecodeError::Utf8(_))));
    }

    #[test]
    fn test_round_trip() {
        for original in [
            "Test string with special chars: !@#$%^&*()",
            "Hello 世界 🌍",
            "émoji 👩‍👩‍👧 and tabs\t\n",
            "",
        ] {
            let encoded = encode_base64(original);
            assert_eq!(decode_base64(&encoded).unwrap(), original);
        }
    }
}
