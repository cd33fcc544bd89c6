//! XML-ish trace file.
//!
//! Every record is appended as
//!
//! ```text
//!
//! <INFO FILE="src/main.rs" LINE="42" TIME="2024-05-01 12:00:00" FUNC="color()">
//! Enter color()
//! </INFO>
//! ```
//!
//! FILE and LINE are the call site (via `#[track_caller]`), TIME is local time.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::TraceError;

/// Record tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceKind {
    #[default]
    Info,
    Debug,
    Warn,
    Error,
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraceKind::Info => "INFO",
            TraceKind::Debug => "DEBUG",
            TraceKind::Warn => "WARN",
            TraceKind::Error => "ERROR",
        })
    }
}

/// Appends trace records to one file; safe to share between threads
#[derive(Debug)]
pub struct TraceLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TraceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record attributed to `func` at the caller's location
    #[track_caller]
    pub fn trace(&self, func: &str, content: &str, kind: TraceKind) -> Result<(), TraceError> {
        self.write_record(Location::caller(), func, content, kind)
    }

    /// Run `f` between an `Enter name()` and a `Leave name()` record.
    ///
    /// Trace write failures are logged and never affect `f` or its result.
    #[track_caller]
    pub fn in_trace<T>(&self, name: &str, f: impl FnOnce() -> T) -> T {
        let location = Location::caller();

        self.write_or_warn(location, name, &format!("Enter {name}()"));
        let result = f();
        self.write_or_warn(location, name, &format!("Leave {name}()"));

        result
    }

    fn write_or_warn(&self, location: &Location<'_>, func: &str, content: &str) {
        if let Err(e) = self.write_record(location, func, content, TraceKind::Info) {
            tracing::warn!(%e, "Failed to write trace record");
        }
    }

    fn write_record(
        &self,
        location: &Location<'_>,
        func: &str,
        content: &str,
        kind: TraceKind,
    ) -> Result<(), TraceError> {
        let time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let record = render_record(kind, location.file(), location.line(), &time, func, content);

        // Poisoning only means another writer panicked; the file is still usable
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(record.as_bytes()))
            .map_err(|source| TraceError::Write {
                path: self.path.display().to_string(),
                source,
            })?;

        tracing::trace!(func = %func, kind = %kind, "Trace record written");
        Ok(())
    }
}

fn render_record(
    kind: TraceKind,
    file: &str,
    line: u32,
    time: &str,
    func: &str,
    content: &str,
) -> String {
    format!(
        "\n<{kind} FILE=\"{}\" LINE=\"{line}\" TIME=\"{}\" FUNC=\"{}()\">\n{content}\n</{kind}>\n",
        escape_attr(file),
        escape_attr(time),
        escape_attr(func),
    )
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
