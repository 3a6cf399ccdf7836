//! `[uuid]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [uuid]
//! max_batch = 100             # Upper bound for `uuid --count`
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UuidConfig {
    /// Largest batch a single `uuid` invocation may generate.
    pub max_batch: usize,
}

impl Default for UuidConfig {
    fn default() -> Self {
        Self { max_batch: 100 }
    }
}

impl UuidConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.max_batch == 0 {
            diag.error(FieldPath::new("uuid.max_batch"), "must allow at least one UUID");
        }
    }
}
