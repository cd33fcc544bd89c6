//! HSV saturation
//!
//! Only the saturation channel of HSV is needed for weighting, so the full
//! hue computation is skipped.

/// HSV saturation of an 8-bit RGB triple in the 0.0..=1.0 range.
///
/// `S = (max - min) / max`, and 0.0 for black where `max == 0`.
///
/// # Example
/// ```
/// use dominant_color::color::saturation;
/// assert_eq!(saturation(255, 0, 0), 1.0);
/// assert_eq!(saturation(128, 128, 128), 0.0);
/// ```
#[inline]
pub fn saturation(r: u8, g: u8, b: u8) -> f64 {
    let max = r.max(g).max(b);
    if max == 0 {
        return 0.0;
    }
    let min = r.min(g).min(b);
    f64::from(max - min) / f64::from(max)
}

/// HSV saturation scaled to the 0.0..=255.0 range used by the weight formula.
#[inline]
pub fn saturation_255(r: u8, g: u8, b: u8) -> f64 {
    saturation(r, g, b) * 255.0
}
