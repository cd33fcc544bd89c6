//! Running weighted sums for the dominant color reduction.

use crate::color::{saturation_255, Rgb8};

/// Default stabilizer added to every histogram entry's weight.
///
/// Small enough not to visibly bias any image with saturated content, and
/// strictly positive so the total weight can never be zero.
pub const WEIGHT_EPSILON: f64 = 0.01;

/// Weight of one histogram entry.
///
/// `saturation_255 * count * alpha + epsilon`
///
/// # Example
/// ```
/// use dominant_color::histogram::{entry_weight, WEIGHT_EPSILON};
///
/// // Gray and fully transparent entries only carry the stabilizer
/// assert_eq!(entry_weight([128, 128, 128, 255], 1000, WEIGHT_EPSILON), WEIGHT_EPSILON);
/// assert_eq!(entry_weight([255, 0, 0, 0], 1000, WEIGHT_EPSILON), WEIGHT_EPSILON);
/// ```
#[inline]
pub fn entry_weight(rgba: [u8; 4], count: u64, epsilon: f64) -> f64 {
    let [r, g, b, a] = rgba;
    saturation_255(r, g, b) * count as f64 * f64::from(a) + epsilon
}

/// Four running sums: weighted red, green, blue and total weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedAccumulator {
    epsilon: f64,
    sum_r: f64,
    sum_g: f64,
    sum_b: f64,
    sum_w: f64,
}

impl WeightedAccumulator {
    /// Create an empty accumulator using `epsilon` as the per-entry stabilizer.
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            sum_r: 0.0,
            sum_g: 0.0,
            sum_b: 0.0,
            sum_w: 0.0,
        }
    }

    /// Fold in one histogram entry.
    pub fn add(&mut self, rgba: [u8; 4], count: u64) {
        let weight = entry_weight(rgba, count, self.epsilon);
        self.add_weighted(Rgb8::new(rgba[0], rgba[1], rgba[2]), weight);
    }

    /// Fold in a color with an explicit weight.
    pub fn add_weighted(&mut self, color: Rgb8, weight: f64) {
        self.sum_r += weight * f64::from(color.r);
        self.sum_g += weight * f64::from(color.g);
        self.sum_b += weight * f64::from(color.b);
        self.sum_w += weight;
    }

    /// Total weight folded in so far.
    pub fn total_weight(&self) -> f64 {
        self.sum_w
    }

    /// Weighted mean, rounded and clamped to 8 bits.
    ///
    /// Returns `None` if nothing with positive weight has been added.
    pub fn finish(self) -> Option<Rgb8> {
        if self.sum_w <= 0.0 || !self.sum_w.is_finite() {
            return None;
        }
        Some(Rgb8::from_f64_rounded(
            self.sum_r / self.sum_w,
            self.sum_g / self.sum_w,
            self.sum_b / self.sum_w,
        ))
    }
}

impl Default for WeightedAccumulator {
    fn default() -> Self {
        Self::new(WEIGHT_EPSILON)
    }
}
