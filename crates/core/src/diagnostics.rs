//! Diagnostic output stream.
//!
//! Catalog entities report construction records and rejected updates as plain
//! lines on standard output. Each line is also mirrored as a `tracing` event so
//! that structured log sinks see the same information.
//!
//! [`capture`] records the lines emitted on the current thread, which lets
//! tests assert on output without redirecting the process's stdout.

use std::cell::RefCell;

thread_local! {
    static CAPTURES: RefCell<Vec<Vec<String>>> = const { RefCell::new(Vec::new()) };
}

/// Emit one diagnostic line.
pub fn emit(line: impl AsRef<str>) {
    let line = line.as_ref();
    println!("{line}");
    tracing::debug!(target: "storeroom::diagnostics", "{line}");

    CAPTURES.with(|captures| {
        for buffer in captures.borrow_mut().iter_mut() {
            buffer.push(line.to_string());
        }
    });
}

/// Run `f`, returning its result together with every line emitted meanwhile
/// on this thread.
///
/// Captures nest: an outer capture also sees the lines of an inner one.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    CAPTURES.with(|captures| captures.borrow_mut().push(Vec::new()));

    let guard = CaptureGuard;
    let value = f();
    let lines = guard.finish();

    (value, lines)
}

/// Pops the capture buffer even if `f` panics.
struct CaptureGuard;

impl CaptureGuard {
    fn finish(self) -> Vec<String> {
        let lines = CAPTURES.with(|captures| captures.borrow_mut().pop().unwrap_or_default());
        std::mem::forget(self);
        lines
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        CAPTURES.with(|captures| {
            captures.borrow_mut().pop();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_emitted_lines_in_order() {
        let ((), lines) = capture(|| {
            emit("first");
            emit(String::from("second"));
        });
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn nothing_is_recorded_outside_capture() {
        emit("before");
        let ((), lines) = capture(|| {});
        assert!(lines.is_empty());
    }

    #[test]
    fn nested_captures_both_observe_inner_lines() {
        let (inner, outer) = capture(|| {
            emit("outer only");
            let ((), inner) = capture(|| emit("shared"));
            inner
        });
        assert_eq!(inner, vec!["shared".to_string()]);
        assert_eq!(outer, vec!["outer only".to_string(), "shared".to_string()]);
    }

    #[test]
    fn capture_returns_closure_value() {
        let (value, lines) = capture(|| 42);
        assert_eq!(value, 42);
        assert!(lines.is_empty());
    }
}
