//! Raster formats the transform pipeline can decode and encode.

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::utils::mime;

/// Supported raster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormatKind {
    Png,
    #[value(alias = "jpg")]
    #[serde(alias = "jpg")]
    Jpeg,
    Webp,
}

impl ImageFormatKind {
    /// Parse a MIME type such as `image/jpeg` (parameters are ignored).
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let essence = mime_type.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub const fn mime(self) -> &'static str {
        match self {
            Self::Png => mime::types::PNG,
            Self::Jpeg => mime::types::JPEG,
            Self::Webp => mime::types::WEBP,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
        }
    }

    /// Whether the format can store transparency.
    pub const fn supports_alpha(self) -> bool {
        !matches!(self, Self::Jpeg)
    }
}

impl From<ImageFormatKind> for ImageFormat {
    fn from(kind: ImageFormatKind) -> Self {
        match kind {
            ImageFormatKind::Png => Self::Png,
            ImageFormatKind::Jpeg => Self::Jpeg,
            ImageFormatKind::Webp => Self::WebP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(ImageFormatKind::from_mime("image/png"), Some(ImageFormatKind::Png));
        assert_eq!(ImageFormatKind::from_mime("image/jpeg"), Some(ImageFormatKind::Jpeg));
        assert_eq!(ImageFormatKind::from_mime("IMAGE/JPG"), Some(ImageFormatKind::Jpeg));
        assert_eq!(
            ImageFormatKind::from_mime("image/webp; q=0.9"),
            Some(ImageFormatKind::Webp)
        );
        assert_eq!(ImageFormatKind::from_mime("image/gif"), None);
        assert_eq!(ImageFormatKind::from_mime("text/plain"), None);
    }

    #[test]
    fn test_mime_round_trip() {
        for kind in [ImageFormatKind::Png, ImageFormatKind::Jpeg, ImageFormatKind::Webp] {
            assert_eq!(ImageFormatKind::from_mime(kind.mime()), Some(kind));
        }
    }

    #[test]
    fn test_alpha_support() {
        assert!(ImageFormatKind::Png.supports_alpha());
        assert!(ImageFormatKind::Webp.supports_alpha());
        assert!(!ImageFormatKind::Jpeg.supports_alpha());
    }
}
