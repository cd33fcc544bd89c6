//! Tests for the XML trace file written by TraceLog.

use std::sync::Arc;
use std::thread;

use ktk::services::{TraceKind, TraceLog};
use tempfile::TempDir;

fn trace_log() -> (TempDir, TraceLog) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let log = TraceLog::new(dir.path().join("trace.xml"));
    (dir, log)
}

#[test]
fn test_in_trace_writes_enter_and_leave() {
    let (_dir, log) = trace_log();

    let value = log.in_trace("compute", || 7 * 6);
    assert_eq!(value, 42);

    let written = std::fs::read_to_string(log.path()).unwrap();
    let enter = written.find("\nEnter compute()\n").expect("missing Enter");
    let leave = written.find("\nLeave compute()\n").expect("missing Leave");
    assert!(enter < leave);

    assert_eq!(written.matches("<INFO FILE=").count(), 2);
    assert_eq!(written.matches("</INFO>\n").count(), 2);
    assert_eq!(written.matches("FUNC=\"compute()\"").count(), 2);
}

#[test]
fn test_in_trace_records_are_nested() {
    let (_dir, log) = trace_log();

    log.in_trace("outer", || log.in_trace("inner", || ()));

    let written = std::fs::read_to_string(log.path()).unwrap();
    let order: Vec<usize> = [
        "Enter outer()",
        "Enter inner()",
        "Leave inner()",
        "Leave outer()",
    ]
    .iter()
    .map(|needle| written.find(needle).expect("record missing"))
    .collect();

    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_trace_appends_to_existing_file() {
    let (_dir, log) = trace_log();
    std::fs::write(log.path(), "existing\n").unwrap();

    log.trace("f", "first", TraceKind::Warn).unwrap();
    log.trace("g", "second", TraceKind::Error).unwrap();

    let written = std::fs::read_to_string(log.path()).unwrap();
    assert!(written.starts_with("existing\n"));
    assert!(written.contains("\nfirst\n</WARN>\n"));
    assert!(written.contains("\nsecond\n</ERROR>\n"));
}

#[test]
fn test_trace_time_attribute_format() {
    let (_dir, log) = trace_log();
    log.trace("f", "x", TraceKind::Info).unwrap();

    let written = std::fs::read_to_string(log.path()).unwrap();
    let start = written.find("TIME=\"").unwrap() + "TIME=\"".len();
    let time = &written[start..start + 19];
    assert!(chrono::NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn test_concurrent_traces_do_not_interleave() {
    let (_dir, log) = trace_log();
    let log = Arc::new(log);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for j in 0..25 {
                    log.trace("worker", &format!("thread {i} record {j}"), TraceKind::Debug)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let written = std::fs::read_to_string(log.path()).unwrap();
    assert_eq!(written.matches("<DEBUG FILE=").count(), 200);
    assert_eq!(written.matches("</DEBUG>\n").count(), 200);

    // Every record body sits directly between its open and close tags
    for record in written.split("</DEBUG>\n").filter(|r| !r.is_empty()) {
        let body = record.rsplit("\">\n").next().unwrap();
        assert!(body.starts_with("thread "), "corrupt record: {record:?}");
    }
}
