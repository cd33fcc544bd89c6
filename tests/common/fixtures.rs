//! Test fixtures: in-memory images with known dominant colors.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Colors used across the tests
pub mod colors {
    pub const OCEAN: [u8; 4] = [5, 147, 208, 255];
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const GRAY: [u8; 4] = [128, 128, 128, 255];
}

/// Encode an RGBA image into the given format
pub fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("Failed to encode test image");
    bytes
}

/// Uniform PNG of one color
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    encode(&RgbaImage::from_pixel(width, height, Rgba(rgba)), ImageFormat::Png)
}

/// PNG whose top `colored_rows` rows are `color` and the rest gray
pub fn banded_png(width: u32, height: u32, colored_rows: u32, color: [u8; 4]) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |_, y| {
        if y < colored_rows {
            Rgba(color)
        } else {
            Rgba(colors::GRAY)
        }
    });
    encode(&image, ImageFormat::Png)
}
