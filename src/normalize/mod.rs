//! Escape normalization.
//!
//! Recovers the author's literal text from input that may be:
//! - plain text with single-layer escapes
//! - a JSON string literal
//! - a string whose quotes and escapes were escaped a second time
//!
//! [`normalize`] never fails. Input that cannot be decoded strictly falls
//! back to best-effort escape scanning.

mod escape;
mod format;

pub use escape::{decode_escapes, escape_newlines, reescape};
pub use format::{WrapFormat, classify};

use format::ESCAPED_QUOTE;

/// Normalize raw input into literal text.
///
/// # Example
///
/// ```
/// use markprep::normalize::normalize;
///
/// assert_eq!(normalize(r#""line1\nline2""#), "line1\nline2");
/// ```
pub fn normalize(raw: &str) -> String {
    normalize_with_format(raw).1
}

/// Normalize raw input and report which wrap format was detected.
pub fn normalize_with_format(raw: &str) -> (WrapFormat, String) {
    let trimmed = raw.trim();
    let format = classify(trimmed);
    let text = match format {
        WrapFormat::DoubleEscapedQuoted => decode_double_escaped(trimmed),
        WrapFormat::JsonQuoted => decode_json_quoted(trimmed),
        WrapFormat::Bare => decode_escapes(trimmed),
    };
    (format, text)
}

fn decode_double_escaped(trimmed: &str) -> String {
    let body = trimmed
        .strip_prefix(ESCAPED_QUOTE)
        .and_then(|rest| rest.strip_suffix(ESCAPED_QUOTE))
        .unwrap_or(trimmed);
    // Two escape layers: `\\n` collapses to `\n`, then to a line feed.
    decode_escapes(&decode_escapes(body))
}

fn decode_json_quoted(trimmed: &str) -> String {
    match serde_json::from_str::<String>(trimmed) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(%err, "JSON string decode failed, scanning escapes instead");
            let body = strip_outer_quotes(trimmed);
            decode_escapes(body)
        }
    }
}

fn strip_outer_quotes(trimmed: &str) -> &str {
    let inner = trimmed.strip_prefix('"').unwrap_or(trimmed);
    inner.strip_suffix('"').unwrap_or(inner)
}
