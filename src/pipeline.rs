//! One submission through normalize and validate.

use crate::normalize::{WrapFormat, normalize_with_format};
use crate::validate::{ValidationResult, validate};

/// A submission that is ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    /// How the raw input was wrapped
    pub format: WrapFormat,
    /// Literal text for the renderer
    pub text: String,
    /// Structural findings about `text`
    pub validation: ValidationResult,
}

/// Normalize and validate raw input.
///
/// Returns `None` when the input is blank; there is nothing to render.
pub fn prepare(raw: &str) -> Option<Prepared> {
    if raw.trim().is_empty() {
        crate::perf::log_event("pipeline.skip", "blank input");
        return None;
    }

    let (format, text) = {
        let _scope = crate::perf::scope("pipeline.normalize");
        normalize_with_format(raw)
    };
    let validation = {
        let _scope = crate::perf::scope("pipeline.validate");
        validate(&text)
    };

    tracing::debug!(
        %format,
        chars = text.chars().count(),
        issues = validation.issues().len(),
        warnings = validation.warnings().len(),
        "prepared submission"
    );
    if crate::perf::is_debug_log_enabled() {
        crate::perf::log_event(
            "pipeline.prepared",
            format!(
                "format={format} issues={} warnings={}",
                validation.issues().len(),
                validation.warnings().len()
            ),
        );
    }

    Some(Prepared {
        format,
        text,
        validation,
    })
}
