//! 8-bit RGB color type
//!
//! [`Rgb8`] is the result type of extraction. Rendering to a string is a
//! separate, explicit step through [`ColorFormat`] and [`FormattedColor`].

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An opaque color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb8 {
    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from floating point channel values in the 0..=255 range.
    ///
    /// Rounds to nearest and clamps, so NaN and out-of-range input still
    /// produce a valid color.
    ///
    /// # Example
    /// ```
    /// use dominant_color::Rgb8;
    /// let color = Rgb8::from_f64_rounded(254.6, -3.0, 300.0);
    /// assert_eq!(color, Rgb8::new(255, 0, 255));
    /// ```
    #[inline]
    pub fn from_f64_rounded(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_f64(r),
            g: channel_from_f64(g),
            b: channel_from_f64(b),
        }
    }

    /// Render as `#RRGGBB` (uppercase, zero-padded).
    ///
    /// # Example
    /// ```
    /// use dominant_color::Rgb8;
    /// assert_eq!(Rgb8::new(5, 147, 208).to_hex(), "#0593D0");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Render in the requested output format.
    pub fn format(self, format: ColorFormat) -> FormattedColor {
        match format {
            ColorFormat::Rgb => FormattedColor::Rgb(self),
            ColorFormat::Hex => FormattedColor::Hex(self.to_hex()),
        }
    }
}

fn channel_from_f64(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    value.round().clamp(0.0, 255.0) as u8
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for (u8, u8, u8) {
    fn from(color: Rgb8) -> Self {
        (color.r, color.g, color.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Output representation of an extracted color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// Integer triple
    #[default]
    Rgb,
    /// `#RRGGBB` string
    Hex,
}

impl ColorFormat {
    /// Parse a format name, falling back to [`ColorFormat::Rgb`] for
    /// anything unrecognized.
    ///
    /// This keeps the permissive behavior older callers rely on. Use the
    /// [`FromStr`] impl to reject unknown names instead.
    ///
    /// # Example
    /// ```
    /// use dominant_color::ColorFormat;
    /// assert_eq!(ColorFormat::from_name_lenient("HEX"), ColorFormat::Hex);
    /// assert_eq!(ColorFormat::from_name_lenient("cmyk"), ColorFormat::Rgb);
    /// ```
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Lowercase name of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hex => "hex",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorFormat::Rgb),
            "hex" => Ok(ColorFormat::Hex),
            _ => Err(ParseColorError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color rendered in one of the [`ColorFormat`] representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedColor {
    /// Integer triple
    Rgb(Rgb8),
    /// `#RRGGBB` string
    Hex(String),
}

impl fmt::Display for FormattedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedColor::Rgb(color) => write!(f, "{}", color),
            FormattedColor::Hex(hex) => f.write_str(hex),
        }
    }
}
