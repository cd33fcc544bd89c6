//! Color types and conversion utilities
//!
//! - [`Rgb8`]: the 8-bit color produced by extraction
//! - [`ColorFormat`] / [`FormattedColor`]: explicit output rendering
//! - [`saturation`]: the HSV channel used for weighting
//!
//! # Example
//!
//! ```
//! use dominant_color::{ColorFormat, FormattedColor, Rgb8};
//!
//! let color = Rgb8::new(5, 147, 208);
//! assert_eq!(
//!     color.format(ColorFormat::Hex),
//!     FormattedColor::Hex("#0593D0".to_string())
//! );
//! ```

mod error;
mod hsv;
mod rgb;

pub use error::ParseColorError;
pub use hsv::{saturation, saturation_255};
pub use rgb::{ColorFormat, FormattedColor, Rgb8};
