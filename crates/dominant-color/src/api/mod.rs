//! Public API: the extractor builder and its error type.

mod error;
mod extractor;

pub use error::ExtractError;
pub use extractor::{extract_color, DominantColorExtractor, DEFAULT_MAX_DIMENSION};
