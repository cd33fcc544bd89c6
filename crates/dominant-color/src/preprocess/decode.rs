//! Decoding encoded image bytes into RGBA.

use image::RgbaImage;

use crate::api::ExtractError;

/// Decode `bytes` (format auto-detected) and normalize to 8-bit RGBA.
///
/// Palette, grayscale and 16-bit sources are all converted, so downstream
/// code only ever sees `[r, g, b, a]` pixels.
///
/// # Errors
///
/// - [`ExtractError::Decode`] if the bytes are not a supported image
/// - [`ExtractError::EmptyImage`] if the decoded image has no pixels
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, ExtractError> {
    let image = image::load_from_memory(bytes).map_err(ExtractError::Decode)?;
    let rgba = image.into_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(ExtractError::EmptyImage);
    }
    Ok(rgba)
}
