//! Unified error type for the dominant-color public API.
//!
//! Empty input is not an error: [`DominantColorExtractor::extract`] returns
//! `Ok(None)` for it. Everything below is fatal for the call.
//!
//! [`DominantColorExtractor::extract`]: crate::DominantColorExtractor::extract

use std::fmt;

/// Error returned when extraction cannot produce a color.
///
/// # Example
///
/// ```
/// use dominant_color::{DominantColorExtractor, ExtractError};
///
/// let result = DominantColorExtractor::new().extract(b"not an image");
/// assert!(matches!(result, Err(ExtractError::Decode(_))));
/// ```
#[derive(Debug)]
pub enum ExtractError {
    /// Bytes are not a supported, well-formed image
    Decode(image::ImageError),
    /// Image decoded to zero pixels
    EmptyImage,
    /// Extractor tuning value out of range
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value, rendered
        value: String,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Decode(err) => write!(f, "image decode error: {}", err),
            ExtractError::EmptyImage => write!(f, "image has no pixels"),
            ExtractError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter: {} = {}", name, value)
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for ExtractError {
    fn from(err: image::ImageError) -> Self {
        ExtractError::Decode(err)
    }
}
