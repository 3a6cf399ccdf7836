//! `[json]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [json]
//! indent = 2                  # Spaces per level for `json format`
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::json::{DEFAULT_INDENT, MAX_INDENT};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl JsonConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.indent > MAX_INDENT {
            diag.error_with_hint(
                FieldPath::new("json.indent"),
                format!("indent {} exceeds the maximum of {MAX_INDENT}", self.indent),
                "use 0 for minified output, or 2 / 4 for readable output",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_json_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.json.indent, 2);
    }

    #[test]
    fn test_json_indent_too_wide() {
        let config = test_parse_config("[json]\nindent = 12");
        let mut diag = ConfigDiagnostics::new();
        config.json.validate(&mut diag);
        assert_eq!(diag.fields().collect::<Vec<_>>(), ["json.indent"]);
        assert!(diag.to_string().contains("use 0 for minified output"));
    }
}
