//! dominant-color: saturation-weighted dominant color extraction
//!
//! Reduces an encoded raster image to one representative color. Instead of a
//! naive mean, every distinct pixel value is weighted by how colorful and how
//! opaque it is, so a small vivid logo on a large white page still comes out
//! as the logo's color.
//!
//! # Quick Start
//!
//! ```
//! use dominant_color::{DominantColorExtractor, Rgb8};
//! # use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
//! # let mut bytes = Vec::new();
//! # DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([5, 147, 208, 255])))
//! #     .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
//! #     .unwrap();
//!
//! let extractor = DominantColorExtractor::new().max_dimension(200);
//! let color = extractor.extract(&bytes).unwrap();
//!
//! assert_eq!(color, Some(Rgb8::new(5, 147, 208)));
//! assert_eq!(color.unwrap().to_hex(), "#0593D0");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! encoded bytes
//!     |
//!     v
//! decode + normalize to RGBA8        (PNG, JPEG, GIF, BMP, ...)
//!     |
//!     v
//! downscale, max side <= bound       (averaging filter, never enlarges)
//!     |
//!     v
//! histogram: rgba -> count
//!     |
//!     v
//! weight = S * count * alpha + eps   (S = HSV saturation scaled to 0..255)
//!     |
//!     v
//! round(sum(weight * c) / sum(weight))
//! ```
//!
//! The reduction is a ratio of sums, so weights cancel for a uniform image
//! and the result is exactly that image's color. `eps` keeps the
//! denominator positive for fully gray or fully transparent images, where
//! the result degrades to the unweighted mean of the distinct colors.

pub mod api;
pub mod color;
pub mod histogram;
pub mod preprocess;


pub use api::{extract_color, DominantColorExtractor, ExtractError, DEFAULT_MAX_DIMENSION};
pub use color::{ColorFormat, FormattedColor, ParseColorError, Rgb8};
pub use histogram::{Histogram, WeightedAccumulator, WEIGHT_EPSILON};
pub use preprocess::ResizeFilter;
