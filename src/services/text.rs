//! Small text helpers: console banners and MD5 digests.

use md5::{Digest, Md5};

/// Text used when a banner is requested without any
pub const DEFAULT_BANNER_TEXT: &str = "Well Come";

const BANNER_CHAR: char = '#';
const GOLDEN_RATIO: f64 = 0.618;

/// Three-line banner framing `text` with `#`.
///
/// Padding on each side is `len * ((1 - 0.618) / 0.618) / 2` spaces,
/// truncated, where `len` is the trimmed text's character count.
pub fn banner(text: &str) -> String {
    let content = text.trim();
    let length = content.chars().count();
    let side = (length as f64 * ((1.0 - GOLDEN_RATIO) / GOLDEN_RATIO) / 2.0) as usize;
    let side_space = " ".repeat(side);

    let content_line = format!("{BANNER_CHAR}{side_space}{content}{side_space}{BANNER_CHAR}");
    let border: String = std::iter::repeat(BANNER_CHAR)
        .take(content_line.chars().count())
        .collect();

    format!("{border}\n{content_line}\n{border}")
}

/// Lowercase hex MD5 digest of `data`
pub fn md5_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Md5::digest(data.as_ref()))
}
