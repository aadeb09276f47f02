//! Diagnostic path formatting
//!
//! Errors carry the segments that led to the failure joined with `", "`,
//! in traversal order. Segments are raw bytes, so they are rendered with
//! lossy UTF-8 conversion.

use std::borrow::Cow;

/// Separator placed between segments in diagnostic paths
pub const PATH_SEPARATOR: &str = ", ";

/// Join `segments` into a diagnostic path string
pub fn display_path<S: AsRef<[u8]>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push_str(PATH_SEPARATOR);
        }
        out.push_str(&String::from_utf8_lossy(segment.as_ref()));
    }
    out
}

/// Join `segments` followed by `last` into a diagnostic path string
pub fn display_path_with<S: AsRef<[u8]>>(segments: &[S], last: &[u8]) -> String {
    let tail: Cow<'_, str> = String::from_utf8_lossy(last);
    if segments.is_empty() {
        return tail.into_owned();
    }
    let mut out = display_path(segments);
    out.push_str(PATH_SEPARATOR);
    out.push_str(&tail);
    out
}
