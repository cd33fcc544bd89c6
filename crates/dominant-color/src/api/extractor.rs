//! DominantColorExtractor builder -- the primary entry point for the crate.
//!
//! [`DominantColorExtractor`] wraps decode, downscale, histogram and the
//! weighted reduction behind a small fluent configuration.

use crate::api::ExtractError;
use crate::color::{ColorFormat, FormattedColor, Rgb8};
use crate::histogram::{Histogram, WEIGHT_EPSILON};
use crate::preprocess::{decode_rgba, downscale, ResizeFilter};

/// Default bound on the longer side of the sampled image.
pub const DEFAULT_MAX_DIMENSION: u32 = 200;

/// Saturation- and alpha-weighted dominant color extractor.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`extract()`](Self::extract) takes `&self`, so one extractor can be
///   reused across images and shared between threads
/// - Empty input is a soft failure (`Ok(None)`), not an error
///
/// # Example
///
/// ```
/// use dominant_color::{DominantColorExtractor, ResizeFilter};
///
/// let extractor = DominantColorExtractor::new()
///     .max_dimension(64)
///     .filter(ResizeFilter::Area);
///
/// assert_eq!(extractor.extract(&[]).unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DominantColorExtractor {
    max_dimension: u32,
    epsilon: f64,
    filter: ResizeFilter,
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantColorExtractor {
    /// Create an extractor with the default bound (200), the default
    /// epsilon ([`WEIGHT_EPSILON`]) and Lanczos3 resampling.
    pub fn new() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            epsilon: WEIGHT_EPSILON,
            filter: ResizeFilter::default(),
        }
    }

    /// Set the bound on the longer side of the sampled image.
    #[inline]
    pub fn max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Set the per-entry weight stabilizer. Must be finite and positive.
    #[inline]
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the resampling filter used when downscaling.
    #[inline]
    pub fn filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Configured bound on the longer side.
    pub fn get_max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Configured weight stabilizer.
    pub fn get_epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Configured resampling filter.
    pub fn get_filter(&self) -> ResizeFilter {
        self.filter
    }

    fn validate(&self) -> Result<(), ExtractError> {
        if self.max_dimension == 0 {
            return Err(ExtractError::InvalidParameter {
                name: "max_dimension",
                value: self.max_dimension.to_string(),
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ExtractError::InvalidParameter {
                name: "epsilon",
                value: self.epsilon.to_string(),
            });
        }
        Ok(())
    }

    /// Extract the dominant color of an encoded image.
    ///
    /// Returns `Ok(None)` when `bytes` is empty.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidParameter`] for a zero bound or a
    ///   non-positive epsilon
    /// - [`ExtractError::Decode`] / [`ExtractError::EmptyImage`] when the
    ///   bytes do not yield any pixels
    pub fn extract(&self, bytes: &[u8]) -> Result<Option<Rgb8>, ExtractError> {
        self.validate()?;
        if bytes.is_empty() {
            return Ok(None);
        }

        let rgba = decode_rgba(bytes)?;
        let sampled = downscale(rgba, self.max_dimension, self.filter);
        let histogram = Histogram::from_image(&sampled);
        histogram
            .weighted_color(self.epsilon)
            .map(Some)
            .ok_or(ExtractError::EmptyImage)
    }

    /// Extract and render in one step.
    pub fn extract_formatted(
        &self,
        bytes: &[u8],
        format: ColorFormat,
    ) -> Result<Option<FormattedColor>, ExtractError> {
        Ok(self.extract(bytes)?.map(|color| color.format(format)))
    }
}

/// One-shot extraction with default epsilon and filter.
///
/// # Example
///
/// ```
/// use dominant_color::{extract_color, ColorFormat};
///
/// assert_eq!(extract_color(&[], 200, ColorFormat::Hex).unwrap(), None);
/// ```
pub fn extract_color(
    bytes: &[u8],
    max_dimension: u32,
    format: ColorFormat,
) -> Result<Option<FormattedColor>, ExtractError> {
    DominantColorExtractor::new()
        .max_dimension(max_dimension)
        .extract_formatted(bytes, format)
}
