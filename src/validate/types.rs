//! Diagnostic types produced by the structural validator.

use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A hard defect that will very likely break rendering.
    Issue,
    /// A soft irregularity worth a second look.
    Warning,
}

/// A single finding from the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    /// 1-based line number, when the finding maps to one line
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

impl Diagnostic {
    pub(super) fn issue(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            severity: Severity::Issue,
            message: message.into(),
            line,
        }
    }

    pub(super) fn warning(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line,
        }
    }

    pub const fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn line(&self) -> Option<usize> {
        self.line
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Outcome of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    issues: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub(super) const fn new(issues: Vec<Diagnostic>, warnings: Vec<Diagnostic>) -> Self {
        Self { issues, warnings }
    }

    /// Hard defects, in check order.
    pub fn issues(&self) -> &[Diagnostic] {
        &self.issues
    }

    /// Soft defects, in check order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// True when no issues were found. Warnings do not affect validity.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Issues followed by warnings, the order they should be displayed in.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.issues.iter().chain(self.warnings.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_line_when_present() {
        let diag = Diagnostic::warning("square brackets mismatched", Some(3));
        assert_eq!(diag.to_string(), "line 3: square brackets mismatched");
    }

    #[test]
    fn test_display_without_line_is_just_message() {
        let diag = Diagnostic::issue("Unclosed code block", None);
        assert_eq!(diag.to_string(), "Unclosed code block");
    }

    #[test]
    fn test_diagnostics_lists_issues_first() {
        let result = ValidationResult::new(
            vec![Diagnostic::issue("first", None)],
            vec![Diagnostic::warning("second", Some(1))],
        );
        let messages: Vec<_> = result.diagnostics().map(Diagnostic::message).collect();
        assert_eq!(messages, ["first", "second"]);
        assert!(!result.is_valid());
        assert!(result.has_warnings());
    }

    #[test]
    fn test_serializes_without_missing_line() {
        let json = serde_json::to_value(Diagnostic::issue("x", None)).unwrap();
        assert_eq!(json, serde_json::json!({ "severity": "issue", "message": "x" }));
    }
}
