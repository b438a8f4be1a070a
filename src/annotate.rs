//! Error-line highlighting for captured pane output.
//!
//! A best-effort heuristic: lines that look like errors get an `[ERROR]`
//! prefix so the model can spot them quickly. False positives and negatives
//! are acceptable; the raw text is always preserved.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker prepended to lines that match at least one error pattern.
pub const ERROR_MARKER: &str = "[ERROR]";

/// Ordered error-indicating patterns. Generic words are case-insensitive;
/// OS error codes and exception class names match exactly.
static ERROR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)error",
        r"(?i)failed",
        r"(?i)exception",
        r"(?i)fatal",
        r"(?i)panic",
        r"(?i)cannot",
        r"(?i)undefined",
        r"(?i)not found",
        r"ENOENT",
        r"EACCES",
        r"ECONNREFUSED",
        r"TypeError",
        r"ReferenceError",
        r"SyntaxError",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static error pattern must compile"))
    .collect()
});

/// Whether a single line matches any error pattern.
fn line_has_error(line: &str) -> bool {
    ERROR_PATTERNS.iter().any(|pattern| pattern.is_match(line))
}

/// Prefix error-looking lines with [`ERROR_MARKER`], preserving line order
/// and count. Non-matching lines pass through unchanged.
pub fn highlight_errors(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line_has_error(line) {
                format!("{ERROR_MARKER} {line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count the lines flagged by [`highlight_errors`] in already-annotated text.
pub fn count_error_lines(annotated: &str) -> usize {
    annotated
        .split('\n')
        .filter(|line| line.starts_with(ERROR_MARKER))
        .count()
}
