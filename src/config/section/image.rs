//! `[image]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [image]
//! max_size_mb = 10            # Reject inputs larger than this
//! quality = 0.8               # Default quality for `image compress` (0.0 - 1.0)
//! maintain_aspect = true      # Default for `image resize`
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::DEFAULT_MAX_FILE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Upload limit in megabytes (1024-based).
    pub max_size_mb: u64,

    /// Default compression quality.
    pub quality: f32,

    /// Keep the source aspect ratio when only one side is given.
    pub maintain_aspect: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_size_mb: DEFAULT_MAX_FILE_SIZE / (1024 * 1024),
            quality: 0.8,
            maintain_aspect: true,
        }
    }
}

impl ImageConfig {
    /// Upload limit in bytes.
    pub const fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(1024 * 1024)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.max_size_mb == 0 {
            diag.error(FieldPath::new("image.max_size_mb"), "must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.quality) {
            diag.error_with_hint(
                FieldPath::new("image.quality"),
                format!("quality {} is out of range", self.quality),
                "quality is a fraction, e.g. 0.8 for 80%",
            );
        }
    }
}
