pub mod diff;
pub mod fetch;
pub mod file_reader;
pub mod image_color;
pub mod text;
pub mod trace_log;

pub use diff::{diff, unified_diff, DiffInput, STRING_LABEL};
pub use fetch::{HttpFetcher, HttpMethod};
pub use file_reader::{
    decode_with_fallback, default_encodings, encodings_from_labels, read_with_fallback,
    DecodedText,
};
pub use image_color::ImageColorService;
pub use text::{banner, md5_hex, DEFAULT_BANNER_TEXT};
pub use trace_log::{TraceKind, TraceLog};
