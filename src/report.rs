//! Diagnostic reports for display.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use serde::Serialize;

use crate::normalize::WrapFormat;
use crate::pipeline::Prepared;
use crate::validate::{Diagnostic, Severity, ValidationResult};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    format: WrapFormat,
    valid: bool,
    issues: &'a [Diagnostic],
    warnings: &'a [Diagnostic],
}

/// Render the report for a prepared submission in the requested format.
///
/// # Errors
/// Returns an error if the JSON report cannot be serialized.
pub fn format_report(prepared: &Prepared, format: ReportFormat, color: bool) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(format_text(&prepared.validation, color)),
        ReportFormat::Json => format_json(prepared),
    }
}

/// Human-readable report: issues first, then warnings, then a summary.
pub fn format_text(result: &ValidationResult, color: bool) -> String {
    if result.is_valid() && !result.has_warnings() {
        return "No problems found\n".to_string();
    }

    let mut out = String::new();
    for diag in result.diagnostics() {
        out.push_str(&severity_label(diag.severity(), color));
        out.push_str(": ");
        out.push_str(&diag.to_string());
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} {}, {} {}",
        result.issues().len(),
        plural(result.issues().len(), "issue", "issues"),
        result.warnings().len(),
        plural(result.warnings().len(), "warning", "warnings"),
    );
    out
}

fn severity_label(severity: Severity, color: bool) -> String {
    match (severity, color) {
        (Severity::Issue, true) => "error".red().bold().to_string(),
        (Severity::Warning, true) => "warning".yellow().bold().to_string(),
        (Severity::Issue, false) => "error".to_string(),
        (Severity::Warning, false) => "warning".to_string(),
    }
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn format_json(prepared: &Prepared) -> Result<String> {
    let report = JsonReport {
        format: prepared.format,
        valid: prepared.validation.is_valid(),
        issues: prepared.validation.issues(),
        warnings: prepared.validation.warnings(),
    };
    let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::prepare;
    use crate::validate::validate;

    #[test]
    fn test_clean_text_report() {
        assert_eq!(format_text(&validate("# Fine"), false), "No problems found\n");
    }

    #[test]
    fn test_text_report_lists_issues_before_warnings() {
        let result = validate("# A\n### B\n```");
        let report = format_text(&result, false);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 3, "{report}");
        assert!(lines[0].starts_with("error: Unclosed code block"));
        assert_eq!(lines[1], "warning: line 2: Heading level jumps from H1 to H3");
        assert_eq!(lines[2], "1 issue, 1 warning");
    }

    #[test]
    fn test_colored_report_keeps_messages() {
        let report = format_text(&validate("```"), true);
        assert!(report.contains("Unclosed code block"));
        assert!(report.ends_with("1 issue, 0 warnings\n"));
    }

    #[test]
    fn test_json_report_shape() {
        let prepared = prepare(r#""| a | b |\n| 1 |""#).unwrap();
        let json = format_report(&prepared, ReportFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["format"], "json_quoted");
        assert_eq!(value["valid"], true);
        assert_eq!(value["issues"].as_array().unwrap().len(), 0);
        assert_eq!(value["warnings"][0]["line"], 2);
        assert_eq!(value["warnings"][0]["severity"], "warning");
    }
}
