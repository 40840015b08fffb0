// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. validate::ValidationResult)
    clippy::module_name_repetitions
)]

//! # Markprep
//!
//! Recover markdown that arrived escaped, check it, and render it.
//!
//! Markdown often travels inside JSON payloads or logs, where every newline
//! became `\n` and every quote `\"` (sometimes twice over). Markprep:
//! - Detects how the text was wrapped and decodes it back to literal text
//! - Flags structural defects: unclosed fences, ragged tables, unbalanced
//!   brackets, links broken across lines, skipped heading levels
//! - Hands the decoded text, untouched, to comrak for HTML rendering
//!
//! ## Pipeline
//!
//! ```text
//! raw input -> normalize -> text -> validate -> diagnostics
//!                             \---> render   -> HTML
//! ```
//!
//! The core stages are pure functions: no state, no I/O, no failure path.
//!
//! ## Modules
//!
//! - [`normalize`]: Wrap format detection and escape decoding
//! - [`validate`]: Structural checks and diagnostics
//! - [`pipeline`]: One submission through both stages
//! - [`render`]: HTML rendering
//! - [`report`]: Diagnostic output (text or JSON)
//! - [`app`]: Command-line run loop
//! - [`config`]: Saved default flags
//! - [`watcher`]: Input file watching

pub mod app;
pub mod config;
pub mod normalize;
pub mod perf;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod sample;
pub mod validate;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::normalize::{WrapFormat, normalize};
    pub use crate::pipeline::{Prepared, prepare};
    pub use crate::render::render_html;
    pub use crate::validate::{Diagnostic, Severity, ValidationResult, validate};
}
