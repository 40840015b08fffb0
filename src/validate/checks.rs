//! Individual structural checks.
//!
//! Each check scans the whole text and pushes its findings in document order.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Diagnostic;

const FENCE_MARKER: &str = "```";

/// A closed label followed by the opening of a destination: `[...]` then `(`.
static LINK_OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\s*\(").expect("valid link pattern"));

static ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6}) (.+)$").expect("valid heading pattern"));

static SEPARATOR_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s|:\-]+$").expect("valid separator pattern"));

/// Odd number of fence markers means a code block is never closed.
pub(super) fn check_fences(text: &str, issues: &mut Vec<Diagnostic>) {
    let fences = text.matches(FENCE_MARKER).count();
    if fences % 2 != 0 {
        issues.push(Diagnostic::issue(
            "Unclosed code block: found an odd number of ``` fences",
            None,
        ));
    }
}

/// Rows of a table must keep the column count of the row that opened it.
///
/// A table only closes on a blank line. Lines that are not bounded by pipes
/// are skipped while a table is open, not treated as its end.
pub(super) fn check_tables(text: &str, warnings: &mut Vec<Diagnostic>) {
    let mut expected: Option<usize> = None;

    for (index, line) in text.split('\n').enumerate() {
        let trimmed = line.trim();
        if is_table_row(trimmed) {
            let columns = count_columns(trimmed);
            match expected {
                None => expected = Some(columns),
                Some(want) if columns != want && !is_separator_row(trimmed) => {
                    warnings.push(Diagnostic::warning(
                        format!(
                            "Table row at line {} has {columns} columns, expected {want}",
                            index + 1
                        ),
                        Some(index + 1),
                    ));
                }
                Some(_) => {}
            }
        } else if trimmed.is_empty() && expected.is_some() {
            expected = None;
        }
    }
}

fn is_table_row(trimmed: &str) -> bool {
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

fn count_columns(trimmed: &str) -> usize {
    trimmed
        .split('|')
        .filter(|cell| !cell.trim().is_empty())
        .count()
}

fn is_separator_row(trimmed: &str) -> bool {
    SEPARATOR_ROW.is_match(trimmed)
}

/// Square brackets and parentheses must balance within each line.
pub(super) fn check_brackets(text: &str, warnings: &mut Vec<Diagnostic>) {
    for (index, line) in text.split('\n').enumerate() {
        let line_no = index + 1;
        let (mut open_sq, mut close_sq, mut open_par, mut close_par) = (0usize, 0, 0, 0);
        for ch in line.chars() {
            match ch {
                '[' => open_sq += 1,
                ']' => close_sq += 1,
                '(' => open_par += 1,
                ')' => close_par += 1,
                _ => {}
            }
        }
        if open_sq != close_sq {
            warnings.push(Diagnostic::warning(
                format!("Line {line_no}: square brackets mismatched ({open_sq} '[' vs {close_sq} ']')"),
                Some(line_no),
            ));
        }
        if open_par != close_par {
            warnings.push(Diagnostic::warning(
                format!("Line {line_no}: parentheses mismatched ({open_par} '(' vs {close_par} ')')"),
                Some(line_no),
            ));
        }
    }
}

/// Link or image syntax must not break between the label and the destination.
pub(super) fn check_multiline_links(text: &str, warnings: &mut Vec<Diagnostic>) {
    let mut cursor = LineCursor::default();
    for found in LINK_OPENING.find_iter(text) {
        if found.as_str().contains('\n') {
            let line_no = cursor.line_at(text, found.start());
            warnings.push(Diagnostic::warning(
                format!("Link or image syntax starting at line {line_no} spans a line break"),
                Some(line_no),
            ));
        }
    }
}

/// Headings should not skip levels on the way down (H1 straight to H3).
pub(super) fn check_heading_levels(text: &str, warnings: &mut Vec<Diagnostic>) {
    let mut previous = 0usize;
    let mut cursor = LineCursor::default();
    for caps in ATX_HEADING.captures_iter(text) {
        let Some(hashes) = caps.get(1) else {
            continue;
        };
        let level = hashes.as_str().len();
        if level > previous + 1 {
            let line_no = cursor.line_at(text, hashes.start());
            warnings.push(Diagnostic::warning(
                format!("Heading level jumps from H{previous} to H{level}"),
                Some(line_no),
            ));
        }
        previous = level;
    }
}

/// 1-based line lookup for offsets visited in increasing order.
///
/// Regex matches arrive front to back, so only the bytes since the previous
/// lookup are scanned and a whole check stays linear in the text length.
#[derive(Debug, Default)]
struct LineCursor {
    offset: usize,
    newlines: usize,
}

impl LineCursor {
    fn line_at(&mut self, text: &str, offset: usize) -> usize {
        if offset < self.offset {
            self.offset = 0;
            self.newlines = 0;
        }
        self.newlines += text[self.offset..offset].matches('\n').count();
        self.offset = offset;
        self.newlines + 1
    }
}
