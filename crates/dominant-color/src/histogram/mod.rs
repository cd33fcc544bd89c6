//! Color histogram and weighted reduction.
//!
//! The dominant color is a weighted mean over the distinct RGBA values of an
//! image. Each distinct value is visited once with its occurrence count:
//!
//! ```text
//! weight = saturation_255(r, g, b) * count * alpha + epsilon
//! color  = round(sum(weight * c) / sum(weight))   for c in {r, g, b}
//! ```
//!
//! Saturated pixels dominate, near-gray and transparent pixels contribute
//! almost nothing. `epsilon` keeps the total weight strictly positive, so a
//! fully gray or fully transparent image still reduces to a defined color
//! (the unweighted mean of its distinct colors).

mod accumulator;

pub use accumulator::{entry_weight, WeightedAccumulator, WEIGHT_EPSILON};

use image::RgbaImage;
use std::collections::BTreeMap;

use crate::color::Rgb8;

/// Occurrence count per distinct RGBA value.
///
/// Entries are kept in a sorted map so iteration, and with it the
/// floating point summation order, is the same on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<[u8; 4], u64>,
    total: u64,
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every pixel of an RGBA image.
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut histogram = Self::new();
        for pixel in image.pixels() {
            histogram.add(pixel.0, 1);
        }
        histogram
    }

    /// Add `count` occurrences of `rgba`.
    pub fn add(&mut self, rgba: [u8; 4], count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(rgba).or_insert(0) += count;
        self.total += count;
    }

    /// Number of distinct RGBA values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no pixel has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Occurrence count for one RGBA value.
    pub fn count(&self, rgba: [u8; 4]) -> u64 {
        self.counts.get(&rgba).copied().unwrap_or(0)
    }

    /// Iterate `(rgba, count)` pairs in ascending RGBA order.
    pub fn iter(&self) -> impl Iterator<Item = ([u8; 4], u64)> + '_ {
        self.counts.iter().map(|(rgba, count)| (*rgba, *count))
    }

    /// Reduce the histogram to a single weighted color.
    ///
    /// Returns `None` for an empty histogram.
    pub fn weighted_color(&self, epsilon: f64) -> Option<Rgb8> {
        if self.is_empty() {
            return None;
        }
        let mut acc = WeightedAccumulator::new(epsilon);
        for (rgba, count) in self.iter() {
            acc.add(rgba, count);
        }
        acc.finish()
    }
}

impl FromIterator<([u8; 4], u64)> for Histogram {
    fn from_iter<I: IntoIterator<Item = ([u8; 4], u64)>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for (rgba, count) in iter {
            histogram.add(rgba, count);
        }
        histogram
    }
}
