//! File extension to MIME type, for the raster formats the pipeline handles.
//!
//! Anything else maps to `application/octet-stream`, which upload validation
//! rejects before the bytes reach a decoder.

use std::path::Path;

pub mod types {
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const WEBP: &str = "image/webp";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// MIME type for `path`, judged by its extension in any letter case.
pub fn from_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return types::OCTET_STREAM;
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => types::PNG,
        "jpg" | "jpeg" => types::JPEG,
        "webp" => types::WEBP,
        _ => types::OCTET_STREAM,
    }
}

/// Whether `mime` names an image type at all (supported or not).
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert_eq!(from_path(Path::new("logo.png")), types::PNG);
        assert_eq!(from_path(Path::new("photo.jpeg")), types::JPEG);
        assert_eq!(from_path(Path::new("PHOTO.JPG")), types::JPEG);
        assert_eq!(from_path(Path::new("anim.WebP")), types::WEBP);
    }

    #[test]
    fn test_other_files_are_opaque() {
        for name in ["icon.svg", "scan.tiff", "photo.avif", "notes.txt", "no_extension"] {
            assert_eq!(from_path(Path::new(name)), types::OCTET_STREAM, "{name}");
        }
    }

    #[test]
    fn test_is_image() {
        assert!(is_image(types::PNG));
        assert!(is_image("image/gif"));
        assert!(!is_image(types::OCTET_STREAM));
        assert!(!is_image(""));
    }
}
