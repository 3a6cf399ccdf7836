//! Error types shared by the transform modules.
//!
//! Validation failures are not errors: `validate_json` and
//! `validate_image_file` return a [`ValidationResult`] value instead.

use serde::Serialize;
use thiserror::Error;

/// Result alias for fallible transforms.
pub type Result<T, E = ToolError> = std::result::Result<T, E>;

// ============================================================================
// ToolError
// ============================================================================

/// Errors raised by text, data and image transforms.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Malformed JSON input.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Resize target is zero or needs more memory than the decoder allows.
    #[error("invalid target size: {0}")]
    InvalidSize(String),

    /// Background decode/encode task panicked or was cancelled.
    #[error("image task failed: {0}")]
    Task(String),
}

/// Input could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to load image: {0}")]
    Image(#[source] image::ImageError),

    #[error("unsupported image type `{0}`")]
    UnsupportedFormat(String),
}

/// Output could not be produced.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{0}")]
    Image(#[source] image::ImageError),

    #[error("encoder produced no output")]
    Empty,
}

// ============================================================================
// ValidationResult
// ============================================================================

/// Outcome of a validity check. `error` is set iff `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub const fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, yielding the error message on failure.
    pub fn into_result(self) -> std::result::Result<(), String> {
        match self.error {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_invariant() {
        let ok = ValidationResult::ok();
        assert!(ok.valid);
        assert!(ok.error.is_none());

        let bad = ValidationResult::invalid("nope");
        assert!(!bad.valid);
        assert_eq!(bad.error.as_deref(), Some("nope"));
        assert_eq!(bad.into_result(), Err("nope".to_string()));
    }

    #[test]
    fn test_validation_result_serialize_skips_empty_error() {
        let json = serde_json::to_string(&ValidationResult::ok()).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);

        let json = serde_json::to_string(&ValidationResult::invalid("bad")).unwrap();
        assert_eq!(json, r#"{"valid":false,"error":"bad"}"#);
    }

    #[test]
    fn test_error_display() {
        let err = ToolError::from(EncodeError::Empty);
        assert_eq!(err.to_string(), "encode error: encoder produced no output");

        let err = ToolError::from(DecodeError::UnsupportedFormat("image/gif".into()));
        assert!(err.to_string().contains("image/gif"));
    }
}
