//! Read text files whose encoding is not known up front.
//!
//! Candidate encodings are tried strictly, in order: a decode that would need
//! a replacement character counts as a failure and the next one is tried.
//! Decoded text has its line endings normalized: `\r\n` and lone `\r`
//! both become `\n`.
//!
//! The `gbk` label resolves to encoding_rs's GBK decoder, which is the
//! gb18030 decoder. It therefore also accepts the four-byte gb18030
//! sequences that a strict GBK codec would reject.

use encoding_rs::{Encoding, GBK, UTF_8, WINDOWS_1252};
use std::path::Path;

/// Text decoded with the first encoding that fit
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedText {
    pub content: String,
    pub encoding: &'static Encoding,
}

/// UTF-8, then GBK, then windows-1252.
///
/// windows-1252 maps every byte, so it also covers latin-1 input and acts as
/// the final catch-all.
pub fn default_encodings() -> Vec<&'static Encoding> {
    vec![UTF_8, GBK, WINDOWS_1252]
}

/// Resolve encoding labels ("utf-8", "gbk", "cp1252", "latin1", ...).
///
/// Unknown labels are skipped with a warning.
pub fn encodings_from_labels(labels: &[String]) -> Vec<&'static Encoding> {
    labels
        .iter()
        .filter_map(|label| {
            let encoding = Encoding::for_label(label.trim().as_bytes());
            if encoding.is_none() {
                tracing::warn!(label = %label, "Unknown encoding label, skipping");
            }
            encoding
        })
        .collect()
}

/// Decode `bytes` with the first encoding that needs no replacement.
pub fn decode_with_fallback(bytes: &[u8], encodings: &[&'static Encoding]) -> Option<DecodedText> {
    for &encoding in encodings {
        match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            Some(content) => {
                tracing::info!(encoding = encoding.name(), "Decoded file");
                return Some(DecodedText {
                    content: normalize_newlines(&content),
                    encoding,
                });
            }
            None => {
                tracing::warn!(encoding = encoding.name(), "Decode attempt failed");
            }
        }
    }
    None
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read `path` and decode it with [`decode_with_fallback`].
///
/// `Ok(None)` means the file was read but none of the encodings fit.
pub fn read_with_fallback(
    path: &Path,
    encodings: &[&'static Encoding],
) -> std::io::Result<Option<DecodedText>> {
    let bytes = std::fs::read(path)?;
    let decoded = decode_with_fallback(&bytes, encodings);
    if decoded.is_none() {
        tracing::warn!(path = %path.display(), "No encoding could decode file");
    }
    Ok(decoded)
}
