//! Bounded downscaling.
//!
//! Images are shrunk, preserving aspect ratio, until neither side exceeds the
//! bound. Images already inside the bound are returned untouched and nothing
//! is ever enlarged.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resampling filter used when an image has to be shrunk.
///
/// All variants average source pixels; nearest-neighbor sampling is not
/// offered because it drops colors instead of blending them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    /// Box average where every source pixel lands in exactly one target pixel
    Area,
    /// Linear (tent) filter
    Triangle,
    /// Cubic filter
    CatmullRom,
    /// Lanczos with window 3 (default)
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    /// Parse a filter name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "area" | "box" => Some(ResizeFilter::Area),
            "triangle" | "linear" => Some(ResizeFilter::Triangle),
            "catmullrom" | "catmull-rom" | "cubic" => Some(ResizeFilter::CatmullRom),
            "lanczos3" | "lanczos" => Some(ResizeFilter::Lanczos3),
            _ => None,
        }
    }

    fn filter_type(self) -> Option<FilterType> {
        match self {
            ResizeFilter::Area => None,
            ResizeFilter::Triangle => Some(FilterType::Triangle),
            ResizeFilter::CatmullRom => Some(FilterType::CatmullRom),
            ResizeFilter::Lanczos3 => Some(FilterType::Lanczos3),
        }
    }
}

/// Dimensions that fit `width x height` inside `max_dimension` on both sides.
///
/// Returns `None` when the image already fits. The longer side becomes
/// exactly `max_dimension`; the shorter side is rounded and kept >= 1.
///
/// # Example
/// ```
/// use dominant_color::preprocess::fit_within;
///
/// assert_eq!(fit_within(400, 100, 200), Some((200, 50)));
/// assert_eq!(fit_within(150, 120, 200), None);
/// ```
pub fn fit_within(width: u32, height: u32, max_dimension: u32) -> Option<(u32, u32)> {
    let max_dimension = max_dimension.max(1);
    if width <= max_dimension && height <= max_dimension {
        return None;
    }

    let (long, short) = if width >= height {
        (width, height)
    } else {
        (height, width)
    };
    let scaled_short = (u64::from(short) * u64::from(max_dimension) + u64::from(long) / 2)
        / u64::from(long);
    let scaled_short = (scaled_short as u32).clamp(1, max_dimension);

    if width >= height {
        Some((max_dimension, scaled_short))
    } else {
        Some((scaled_short, max_dimension))
    }
}

/// Shrink `image` so that neither side exceeds `max_dimension`.
pub fn downscale(image: RgbaImage, max_dimension: u32, filter: ResizeFilter) -> RgbaImage {
    let (width, height) = image.dimensions();
    let Some((new_width, new_height)) = fit_within(width, height, max_dimension) else {
        return image;
    };

    match filter.filter_type() {
        Some(filter_type) => imageops::resize(&image, new_width, new_height, filter_type),
        None => imageops::thumbnail(&image, new_width, new_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    #[test]
    fn test_fit_within_keeps_aspect_ratio() {
        assert_eq!(fit_within(1000, 500, 200), Some((200, 100)));
        assert_eq!(fit_within(500, 1000, 200), Some((100, 200)));
        assert_eq!(fit_within(300, 300, 200), Some((200, 200)));
        assert_eq!(fit_within(201, 3, 200), Some((200, 3)));
    }

    #[test]
    fn test_fit_within_never_collapses_short_side() {
        assert_eq!(fit_within(10_000, 1, 200), Some((200, 1)));
        assert_eq!(fit_within(1, 10_000, 50), Some((1, 50)));
    }

    #[test]
    fn test_fit_within_noop_inside_bound() {
        assert_eq!(fit_within(200, 200, 200), None);
        assert_eq!(fit_within(1, 1, 200), None);
        assert_eq!(fit_within(16, 8, 16), None);
    }

    #[test]
    fn test_downscale_noop_same_dimensions() {
        let input = solid_image(100, 60, [128, 64, 32, 255]);
        let output = downscale(input.clone(), 100, ResizeFilter::Lanczos3);
        assert_eq!(output.dimensions(), (100, 60));
        assert_eq!(output, input, "Pixels should be unchanged for no-op resize");
    }

    #[test]
    fn test_downscale_never_enlarges() {
        let input = solid_image(4, 4, [1, 2, 3, 255]);
        let output = downscale(input, 200, ResizeFilter::Area);
        assert_eq!(output.dimensions(), (4, 4));
    }

    #[test]
    fn test_downscale_preserves_uniform_color_for_every_filter() {
        for filter in [
            ResizeFilter::Area,
            ResizeFilter::Triangle,
            ResizeFilter::CatmullRom,
            ResizeFilter::Lanczos3,
        ] {
            let input = solid_image(300, 120, [200, 40, 90, 255]);
            let output = downscale(input, 100, filter);
            assert_eq!(output.dimensions(), (100, 40), "{filter:?}");
            assert!(
                output.pixels().all(|p| p.0 == [200, 40, 90, 255]),
                "{filter:?} changed a uniform image"
            );
        }
    }

    #[test]
    fn test_filter_from_name() {
        assert_eq!(ResizeFilter::from_name("Lanczos3"), Some(ResizeFilter::Lanczos3));
        assert_eq!(ResizeFilter::from_name("area"), Some(ResizeFilter::Area));
        assert_eq!(ResizeFilter::from_name("catmull-rom"), Some(ResizeFilter::CatmullRom));
        assert_eq!(ResizeFilter::from_name("nearest"), None);
    }
}
