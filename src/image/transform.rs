//! Compress, resize and convert raster images.
//!
//! Each operation decodes the source into a pixel buffer, draws it onto a
//! fresh surface and re-encodes. Decode and encode are CPU-bound, so they
//! run on tokio's blocking pool; every call owns its buffers and calls may
//! run concurrently.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Limits, Rgba, RgbaImage};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{DecodeError, EncodeError, Result, ToolError};
use crate::image::dimensions::{Dimensions, get_image_dimensions};
use crate::image::file::ImageFile;
use crate::image::format::ImageFormatKind;
use crate::image::size::format_file_size;

/// Quality used by [`convert_image`].
pub const CONVERT_QUALITY: f32 = 0.95;

/// Quality used by [`resize_image`] for lossy targets.
pub const RESIZE_QUALITY: f32 = 0.92;

/// Output of [`compress_image`].
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    #[serde(skip)]
    pub data: Vec<u8>,
    pub original_size: u64,
    pub compressed_size: u64,
}

impl CompressionResult {
    fn new(data: Vec<u8>, original_size: u64) -> Self {
        let compressed_size = data.len() as u64;
        Self {
            data,
            original_size,
            compressed_size,
        }
    }

    /// Size reduction in percent (negative when the output grew).
    #[allow(clippy::cast_precision_loss)]
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_size as f64 / self.original_size as f64) * 100.0
    }
}

/// Re-encode `file` in its own format at `quality` (0.0 - 1.0).
pub async fn compress_image(file: &ImageFile, quality: f32) -> Result<CompressionResult> {
    let format = file.format()?;
    let data = Arc::clone(&file.data);

    let encoded = run_blocking(move || {
        let img = decode(&data, format)?;
        encode(&img, format, quality)
    })
    .await?;

    Ok(CompressionResult::new(encoded, file.size()))
}

/// Scale `file` to the resolved target size, keeping its format.
///
/// See [`get_image_dimensions`] for how missing targets are filled in.
/// A zero target, or one whose pixel buffers would exceed the decoder's
/// allocation budget, fails with [`ToolError::InvalidSize`] before any
/// resampling.
pub async fn resize_image(
    file: &ImageFile,
    target_width: Option<u32>,
    target_height: Option<u32>,
    maintain_aspect: bool,
) -> Result<Vec<u8>> {
    if target_width == Some(0) || target_height == Some(0) {
        return Err(ToolError::InvalidSize(
            "width and height must be at least 1 pixel".to_string(),
        ));
    }
    let format = file.format()?;
    let data = Arc::clone(&file.data);

    run_blocking(move || {
        let img = decode(&data, format)?;
        let dims = get_image_dimensions(
            img.width(),
            img.height(),
            target_width,
            target_height,
            maintain_aspect,
        );
        check_resize_budget(&img, dims)?;
        let resized = img.resize_exact(dims.width, dims.height, FilterType::Lanczos3);
        encode(&resized, format, RESIZE_QUALITY)
    })
    .await
}

/// Re-encode `file` as `target`.
///
/// Formats without alpha get an opaque white background, so transparent
/// pixels turn white instead of black.
pub async fn convert_image(file: &ImageFile, target: ImageFormatKind) -> Result<Vec<u8>> {
    let format = file.format()?;
    let data = Arc::clone(&file.data);

    run_blocking(move || {
        let img = decode(&data, format)?;
        let surface = if target.supports_alpha() {
            img
        } else {
            flatten_on_white(&img)
        };
        encode(&surface, target, CONVERT_QUALITY)
    })
    .await
}

// ============================================================================
// Pipeline steps
// ============================================================================

/// Run a decode/encode job on the blocking pool.
async fn run_blocking<T, F>(job: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ToolError::Task(e.to_string()))?
}

fn decode(data: &[u8], format: ImageFormatKind) -> Result<DynamicImage> {
    image::load_from_memory_with_format(data, format.into())
        .map_err(|e| DecodeError::Image(e).into())
}

/// Reject resizes whose buffers would not fit the default decoder budget.
///
/// Resampling allocates an RGBA `f32` buffer of source width by target
/// height, then the output itself (at most four bytes per pixel here).
fn check_resize_budget(img: &DynamicImage, dims: Dimensions) -> Result<()> {
    let budget = Limits::default().max_alloc.unwrap_or(u64::MAX);

    let target_pixels = u64::from(dims.width).saturating_mul(u64::from(dims.height));
    let resample_pixels = u64::from(img.width()).saturating_mul(u64::from(dims.height));
    let needed = target_pixels
        .saturating_mul(4)
        .max(resample_pixels.saturating_mul(16));

    if needed > budget {
        return Err(ToolError::InvalidSize(format!(
            "{}x{} needs {} of pixel memory, the limit is {}",
            dims.width,
            dims.height,
            format_file_size(needed, None),
            format_file_size(budget, None)
        )));
    }
    Ok(())
}

fn encode(img: &DynamicImage, format: ImageFormatKind, quality: f32) -> Result<Vec<u8>> {
    let mut buf = Vec::new();

    let written = match format {
        ImageFormatKind::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, jpeg_quality(quality));
            DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)
        }
        // PNG is lossless; quality picks nothing but compression effort
        ImageFormatKind::Png => {
            let encoder =
                PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
            img.write_with_encoder(encoder)
        }
        // Only the lossless WebP encoder is available
        ImageFormatKind::Webp => {
            let encoder = WebPEncoder::new_lossless(&mut buf);
            DynamicImage::ImageRgba8(img.to_rgba8()).write_with_encoder(encoder)
        }
    };
    written.map_err(EncodeError::Image)?;

    if buf.is_empty() {
        return Err(EncodeError::Empty.into());
    }
    Ok(buf)
}

/// Map a 0.0 - 1.0 quality factor onto the JPEG encoder's 1 - 100 scale.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn jpeg_quality(quality: f32) -> u8 {
    (quality.clamp(0.0, 1.0) * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Paint `img` over an opaque white surface of the same size.
fn flatten_on_white(img: &DynamicImage) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    let mut surface = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut surface, &img.to_rgba8(), 0, 0);
    DynamicImage::ImageRgba8(surface)
}
