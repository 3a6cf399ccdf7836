//! In-memory image files and upload validation.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::error::{DecodeError, Result, ValidationResult};
use crate::image::format::ImageFormatKind;
use crate::image::size::format_file_size;
use crate::utils::mime;

/// Default upload limit for [`validate_image_file`] (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A named, typed blob of image bytes.
///
/// Bytes are shared, so cloning is cheap and transforms can move the
/// buffer onto a blocking worker without copying.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub data: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    pub fn open(path: &Path) -> io::Result<Self> {
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, mime::from_path(path), data))
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// The raster format declared by the MIME type.
    pub fn format(&self) -> Result<ImageFormatKind> {
        ImageFormatKind::from_mime(&self.mime)
            .ok_or_else(|| DecodeError::UnsupportedFormat(self.mime.clone()).into())
    }
}

/// Check name, type and size of an upload before processing it.
pub fn validate_image_file(file: &ImageFile, max_size: u64) -> ValidationResult {
    if file.name.trim().is_empty() {
        return ValidationResult::invalid("File name is empty.");
    }

    if !mime::is_image(&file.mime) {
        let shown = if file.mime.is_empty() { "unknown" } else { &file.mime };
        return ValidationResult::invalid(format!(
            "Invalid file type ({shown}). Please upload an image."
        ));
    }

    if ImageFormatKind::from_mime(&file.mime).is_none() {
        return ValidationResult::invalid(format!(
            "Unsupported image type ({}). Use PNG, JPEG or WebP.",
            file.mime
        ));
    }

    if file.size() > max_size {
        return ValidationResult::invalid(format!(
            "File is too large ({}). Maximum size is {}.",
            format_file_size(file.size(), None),
            format_file_size(max_size, None)
        ));
    }

    ValidationResult::ok()
}
