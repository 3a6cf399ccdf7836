//! `[text]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [text]
//! words_per_minute = 200      # Reading speed used for reading time
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::text::stats::DEFAULT_WORDS_PER_MINUTE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Reading speed used by `stats`.
    pub words_per_minute: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl TextConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.words_per_minute == 0 {
            diag.error(
                FieldPath::new("text.words_per_minute"),
                "reading speed must be greater than zero",
            );
        }
    }
}
