//! Unified diffs of strings or files.
//!
//! Output is one `String` per diff line with line terminators stripped. The
//! first two lines are the `---`/`+++` header; identical inputs give no lines
//! at all. Hunk headers follow the `diff -u` range format (`@@ -2 +2 @@` for
//! single lines, `@@ -3,0 +4 @@` for pure insertions).

use similar::TextDiff;
use std::path::Path;

/// Header label used for inputs compared as literal text
pub const STRING_LABEL: &str = "<string>";

/// One side of a comparison: its header label and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInput {
    pub label: String,
    pub content: String,
}

impl DiffInput {
    /// Literal text, labelled [`STRING_LABEL`]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            label: STRING_LABEL.to_string(),
            content: content.into(),
        }
    }

    /// Read a UTF-8 file, labelled with its file name
    pub fn file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { label, content })
    }

    /// Treat `raw` as a file path when it names an existing file, otherwise
    /// as text. `force_str` always treats it as text.
    pub fn resolve(raw: &str, force_str: bool) -> std::io::Result<Self> {
        let path = Path::new(raw);
        if !force_str && path.is_file() {
            Self::file(path)
        } else {
            Ok(Self::text(raw))
        }
    }
}

/// Unified diff of `old` against `new` with `context` surrounding lines.
pub fn unified_diff(old: &DiffInput, new: &DiffInput, context: usize) -> Vec<String> {
    let text_diff = TextDiff::from_lines(old.content.as_str(), new.content.as_str());
    let rendered = text_diff
        .unified_diff()
        .context_radius(context)
        .missing_newline_hint(false)
        .header(&old.label, &new.label)
        .to_string();

    let lines: Vec<String> = rendered
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();

    tracing::debug!(
        old = %old.label,
        new = %new.label,
        context,
        lines = lines.len(),
        "Computed diff"
    );
    lines
}

/// Diff two strings or files; see [`DiffInput::resolve`] for how each
/// argument is interpreted.
pub fn diff(a: &str, b: &str, force_str: bool, context: usize) -> std::io::Result<Vec<String>> {
    let old = DiffInput::resolve(a, force_str)?;
    let new = DiffInput::resolve(b, force_str)?;
    Ok(unified_diff(&old, &new, context))
}
