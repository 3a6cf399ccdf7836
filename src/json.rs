//! JSON formatting, minification and validation.
//!
//! Object keys keep the order they appear in the input
//! (`serde_json` is built with `preserve_order`). Numbers keep their exact
//! digits (`arbitrary_precision`), so `1e400` or a 30-digit integer is
//! valid and survives a round trip unchanged. Nesting depth is bounded only
//! by memory: parsing grows the stack on demand instead of stopping at
//! serde_json's default depth of 128.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Result, ValidationResult};

/// Default indentation width for [`format_json`].
pub const DEFAULT_INDENT: usize = 2;

/// Indentation widths above this are clamped.
pub const MAX_INDENT: usize = 10;

/// Pretty-print `input` with `indent` spaces per level.
///
/// An indent of zero produces the same output as [`minify_json`].
pub fn format_json(input: &str, indent: usize) -> Result<String> {
    let value = parse(input)?;
    let indent = indent.min(MAX_INDENT);
    if indent == 0 {
        return Ok(serde_json::to_string(&value)?);
    }

    let pad = " ".repeat(indent);
    let mut buf = Vec::with_capacity(input.len() * 2);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(pad.as_bytes()));
    value.serialize(&mut ser)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pretty-print `input` with [`DEFAULT_INDENT`].
#[inline]
pub fn format_json_default(input: &str) -> Result<String> {
    format_json(input, DEFAULT_INDENT)
}

/// Strip all insignificant whitespace from `input`.
pub fn minify_json(input: &str) -> Result<String> {
    let value = parse(input)?;
    Ok(serde_json::to_string(&value)?)
}

/// Check whether `input` parses as JSON.
///
/// Never fails: a parse error is reported in the returned value.
pub fn validate_json(input: &str) -> ValidationResult {
    match parse(input) {
        Ok(_) => ValidationResult::ok(),
        Err(err) => ValidationResult::invalid(err.to_string()),
    }
}

/// Parse a complete JSON text without a nesting limit.
fn parse(input: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(input);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;

    #[test]
    fn test_format_json() {
        let output = format_json_default(r#"{"name":"test","value":123}"#).unwrap();
        assert!(output.contains(r#""name": "test""#));
        assert!(output.contains('\n'));
        assert_eq!(output, "{\n  \"name\": \"test\",\n  \"value\": 123\n}");
    }

    #[test]
    fn test_format_json_nested() {
        let output = format_json_default(r#"{"outer":{"inner":"value"}}"#).unwrap();
        assert!(output.contains(r#""outer":"#));
        assert!(output.contains(r#""inner": "value""#));
        assert!(output.contains("\n    \"inner\""));
    }

    #[test]
    fn test_format_json_custom_indent() {
        let output = format_json("[1,2]", 4).unwrap();
        assert_eq!(output, "[\n    1,\n    2\n]");

        let output = format_json("[1,2]", 0).unwrap();
        assert_eq!(output, "[1,2]");

        let clamped = format_json("[1]", 40).unwrap();
        assert_eq!(clamped, format!("[\n{}1\n]", " ".repeat(MAX_INDENT)));
    }

    #[test]
    fn test_format_json_preserves_key_order() {
        let output = minify_json(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        assert_eq!(output, r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_format_json_invalid() {
        let err = format_json_default(r#"{"invalid json"#).unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_minify_json() {
        let output = minify_json("{\n  \"name\": \"test\",\n  \"value\": 123\n}").unwrap();
        assert!(!output.contains('\n'));
        assert!(!output.contains("  "));
        assert_eq!(output, r#"{"name":"test","value":123}"#);

        assert!(matches!(minify_json("{oops}"), Err(ToolError::Parse(_))));
    }

    #[test]
    fn test_minify_keeps_string_whitespace() {
        let output = minify_json(r#"{ "msg" : "a  b\n" }"#).unwrap();
        assert_eq!(output, r#"{"msg":"a  b\n"}"#);
    }

    #[test]
    fn test_validate_json_valid() {
        for input in [r#"{"valid": true}"#, "[]", "123", r#""string""#, "null"] {
            assert_eq!(validate_json(input), ValidationResult::ok(), "{input}");
        }
    }

    #[test]
    fn test_validate_json_invalid() {
        for input in [r#"{"invalid"#, r#"{name: "test"}"#, "", "[1,]"] {
            let result = validate_json(input);
            assert!(!result.valid, "{input}");
            assert!(result.error.is_some_and(|e| !e.is_empty()), "{input}");
        }
    }

    #[test]
    fn test_numbers_outside_f64_are_valid() {
        for input in ["1e400", "-1e-400", "123456789012345678901234567890"] {
            assert_eq!(validate_json(input), ValidationResult::ok(), "{input}");
        }
        let output = minify_json("[ 1e400, 123456789012345678901234567890, 0.1000 ]").unwrap();
        assert_eq!(output, "[1e400,123456789012345678901234567890,0.1000]");
    }

    #[test]
    fn test_deep_nesting_is_valid() {
        let depth = 1000;
        let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(validate_json(&input).valid);
        assert_eq!(minify_json(&input).unwrap(), input);

        let unbalanced = format!("{}{}", "[".repeat(depth), "]".repeat(depth - 1));
        assert!(!validate_json(&unbalanced).valid);
    }

    #[test]
    fn test_trailing_characters_rejected() {
        assert!(!validate_json("{} {}").valid);
        assert!(matches!(minify_json("[1] x"), Err(ToolError::Parse(_))));
    }

    #[test]
    fn test_transforms_yield_valid_json() {
        let input = r#"{"list":[1,2,{"deep":[true,null]}],"s":"x"}"#;
        assert!(validate_json(&minify_json(input).unwrap()).valid);
        assert!(validate_json(&format_json_default(input).unwrap()).valid);
    }
}
