//! Structural validation of normalized markdown.
//!
//! The validator does not parse markdown. It runs a handful of cheap
//! line-oriented heuristics that catch the defects most likely to come from
//! a botched escape round-trip:
//! - unclosed code fences (issue)
//! - table rows with the wrong number of cells (warning)
//! - unbalanced brackets or parentheses on a line (warning)
//! - link or image syntax broken across lines (warning)
//! - heading levels that skip a step (warning)

mod checks;
mod types;

pub use types::{Diagnostic, Severity, ValidationResult};

/// Validate normalized text. Never fails; an empty text is simply valid.
///
/// # Example
///
/// ```
/// use markprep::validate::validate;
///
/// let result = validate("# A\n### B");
/// assert!(result.is_valid());
/// assert_eq!(result.warnings().len(), 1);
/// ```
pub fn validate(text: &str) -> ValidationResult {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    checks::check_fences(text, &mut issues);
    checks::check_tables(text, &mut warnings);
    checks::check_brackets(text, &mut warnings);
    checks::check_multiline_links(text, &mut warnings);
    checks::check_heading_levels(text, &mut warnings);

    ValidationResult::new(issues, warnings)
}
