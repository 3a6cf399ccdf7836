//! Target dimension arithmetic for resizing.

use serde::Serialize;

/// Pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Resolve the output size of a resize.
///
/// - no target: source size
/// - `maintain_aspect == false`: each missing target falls back to the source
/// - `maintain_aspect == true` with one target: the other side follows the
///   source aspect ratio, rounded to the nearest pixel
/// - both targets given: used as-is, even with `maintain_aspect`
///
/// Neither side of the result is ever zero.
pub fn get_image_dimensions(
    src_width: u32,
    src_height: u32,
    target_width: Option<u32>,
    target_height: Option<u32>,
    maintain_aspect: bool,
) -> Dimensions {
    let dims = match (target_width, target_height) {
        (None, None) => Dimensions::new(src_width, src_height),
        (Some(width), Some(height)) => Dimensions::new(width, height),
        (width, height) if !maintain_aspect => {
            Dimensions::new(width.unwrap_or(src_width), height.unwrap_or(src_height))
        }
        (Some(width), None) => {
            Dimensions::new(width, scale_side(width, src_height, src_width))
        }
        (None, Some(height)) => {
            Dimensions::new(scale_side(height, src_width, src_height), height)
        }
    };
    Dimensions::new(dims.width.max(1), dims.height.max(1))
}

/// `given * numerator / denominator`, rounded, never below one pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_side(given: u32, numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return numerator.max(1);
    }
    let scaled = f64::from(given) * f64::from(numerator) / f64::from(denominator);
    (scaled.round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_targets_with_aspect() {
        let d = get_image_dimensions(1000, 800, Some(500), Some(400), true);
        assert_eq!(d, Dimensions::new(500, 400));
    }

    #[test]
    fn test_both_targets_pass_through() {
        // An inconsistent explicit pair is not corrected
        let d = get_image_dimensions(1000, 800, Some(500), Some(100), true);
        assert_eq!(d, Dimensions::new(500, 100));
    }

    #[test]
    fn test_width_only_keeps_aspect() {
        let d = get_image_dimensions(1000, 800, Some(500), None, true);
        assert_eq!(d, Dimensions::new(500, 400));
    }

    #[test]
    fn test_height_only_keeps_aspect() {
        let d = get_image_dimensions(1000, 800, None, Some(400), true);
        assert_eq!(d, Dimensions::new(500, 400));
    }

    #[test]
    fn test_distortion_allowed() {
        let d = get_image_dimensions(1000, 800, Some(200), Some(600), false);
        assert_eq!(d, Dimensions::new(200, 600));
    }

    #[test]
    fn test_single_target_without_aspect() {
        let d = get_image_dimensions(1000, 800, Some(200), None, false);
        assert_eq!(d, Dimensions::new(200, 800));
        let d = get_image_dimensions(1000, 800, None, Some(50), false);
        assert_eq!(d, Dimensions::new(1000, 50));
    }

    #[test]
    fn test_no_target() {
        let d = get_image_dimensions(1000, 800, None, None, true);
        assert_eq!(d, Dimensions::new(1000, 800));
    }

    #[test]
    fn test_never_zero() {
        let d = get_image_dimensions(1000, 800, Some(0), None, true);
        assert_eq!(d, Dimensions::new(1, 1));
        let d = get_image_dimensions(1000, 800, Some(0), Some(0), false);
        assert_eq!(d, Dimensions::new(1, 1));
        let d = get_image_dimensions(0, 0, None, None, true);
        assert_eq!(d, Dimensions::new(1, 1));
        let d = get_image_dimensions(0, 800, None, Some(400), true);
        assert_eq!(d, Dimensions::new(1, 400));
    }

    #[test]
    fn test_rounding() {
        // 333 * 2 / 3 = 222
        assert_eq!(get_image_dimensions(3, 2, Some(333), None, true).height, 222);
        // 100 * 3 / 7 = 42.857.. -> 43
        assert_eq!(get_image_dimensions(7, 3, Some(100), None, true).height, 43);
        // tiny results clamp to one pixel
        assert_eq!(get_image_dimensions(1000, 1, Some(10), None, true).height, 1);
    }
}
