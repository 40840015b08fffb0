//! Wrap format classification.

use serde::Serialize;

/// Escaped double-quote marker: a backslash followed by a quote.
pub(super) const ESCAPED_QUOTE: &str = "\\\"";

/// How a raw input string is packaged for transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapFormat {
    /// No wrapping; escapes (if any) are single-layer.
    Bare,
    /// Surrounded by one pair of unescaped double quotes, like a JSON string literal.
    JsonQuoted,
    /// Surrounded by `\"` markers; escapes may be two layers deep.
    DoubleEscapedQuoted,
}

impl WrapFormat {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::JsonQuoted => "json-quoted",
            Self::DoubleEscapedQuoted => "double-escaped",
        }
    }
}

impl std::fmt::Display for WrapFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an already-trimmed input.
///
/// Only the first and last two characters are inspected. The escaped-quote
/// form is checked first, so `\"...\"` is never mistaken for a JSON string
/// that happens to end in an escaped quote. End markers may not overlap.
pub fn classify(trimmed: &str) -> WrapFormat {
    let len = trimmed.chars().count();
    if len >= 4 && trimmed.starts_with(ESCAPED_QUOTE) && trimmed.ends_with(ESCAPED_QUOTE) {
        return WrapFormat::DoubleEscapedQuoted;
    }
    if len >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        return WrapFormat::JsonQuoted;
    }
    WrapFormat::Bare
}
