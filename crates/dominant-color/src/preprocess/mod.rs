//! Image preprocessing ahead of the histogram.
//!
//! 1. **Decode** - auto-detect the format and normalize to RGBA8
//! 2. **Downscale** - bound both sides by `max_dimension` with an averaging
//!    filter, so the histogram stays small while color proportions survive
//!
//! Downscaling is purely a performance control: it changes the sampling
//! resolution, never the reduction itself.

mod decode;
mod resize;

pub use decode::decode_rgba;
pub use resize::{downscale, fit_within, ResizeFilter};
