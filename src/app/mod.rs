//! Command-line run loop.
//!
//! One run reads the input, prepares it, writes the diagnostics report to
//! stderr and the emitted content to stdout or `--output`. With `--watch`
//! the run repeats whenever the input file settles after a change.

mod input;

pub use input::InputSource;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::EmitMode;
use crate::pipeline::{Prepared, prepare};
use crate::render::{render_html, render_page};
use crate::report::{ReportFormat, format_report};
use crate::watcher::{DEFAULT_DEBOUNCE, InputWatcher};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of processing one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Diagnostics report, for stderr
    pub report: String,
    /// Emitted content, absent for `--emit none`
    pub emitted: Option<String>,
    /// Whether the validator found hard defects
    pub has_issues: bool,
}

/// Whether a finished run should make the process fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    IssuesFound,
}

/// Command-line application.
pub struct App {
    source: InputSource,
    emit: EmitMode,
    report_format: ReportFormat,
    standalone: bool,
    strict: bool,
    watch: bool,
    color: bool,
    output: Option<PathBuf>,
}

impl App {
    pub const fn new(source: InputSource) -> Self {
        Self {
            source,
            emit: EmitMode::Html,
            report_format: ReportFormat::Text,
            standalone: false,
            strict: false,
            watch: false,
            color: false,
            output: None,
        }
    }

    pub const fn with_emit(mut self, emit: EmitMode) -> Self {
        self.emit = emit;
        self
    }

    pub const fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    /// Wrap emitted HTML in a full page.
    pub const fn with_standalone(mut self, enabled: bool) -> Self {
        self.standalone = enabled;
        self
    }

    /// Report failure when the validator finds issues.
    pub const fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch = enabled;
        self
    }

    /// Color the text report.
    pub const fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Write emitted content to a file instead of stdout.
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Prepare `raw` and build the report and emitted content.
    ///
    /// # Errors
    /// Returns an error for blank input or if the report cannot be formatted.
    pub fn process(&self, raw: &str) -> Result<RunOutput> {
        let Some(prepared) = prepare(raw) else {
            anyhow::bail!("No markdown content to process");
        };
        let report = format_report(&prepared, self.report_format, self.color)?;
        Ok(RunOutput {
            report,
            emitted: self.emit_content(&prepared),
            has_issues: !prepared.validation.is_valid(),
        })
    }

    fn emit_content(&self, prepared: &Prepared) -> Option<String> {
        match self.emit {
            EmitMode::Html if self.standalone => {
                Some(render_page(&prepared.text, &self.source.title()))
            }
            EmitMode::Html => Some(render_html(&prepared.text)),
            EmitMode::Text => {
                let mut text = prepared.text.clone();
                text.push('\n');
                Some(text)
            }
            EmitMode::None => None,
        }
    }

    /// Run once, or keep running on file changes with `--watch`.
    ///
    /// # Errors
    /// Returns an error if the input cannot be read or processed, the output
    /// cannot be written, or watching is requested without an input file.
    pub fn run(&self) -> Result<RunStatus> {
        let _run_scope = crate::perf::scope("app.run");
        if self.watch {
            return self.run_watch();
        }
        self.run_once()
    }

    fn run_once(&self) -> Result<RunStatus> {
        let raw = self.source.read()?;
        let output = self.process(&raw)?;
        self.write_output(&output)?;
        if self.strict && output.has_issues {
            return Ok(RunStatus::IssuesFound);
        }
        Ok(RunStatus::Success)
    }

    fn run_watch(&self) -> Result<RunStatus> {
        let Some(path) = self.source.path() else {
            anyhow::bail!("--watch needs an input file");
        };
        let mut watcher = InputWatcher::new(path, DEFAULT_DEBOUNCE)
            .with_context(|| format!("Failed to watch {}", path.display()))?;

        // Keep watching through bad edits; the next save may fix them.
        if let Err(err) = self.run_once() {
            eprintln!("[warn] {err:#}");
        }
        loop {
            if watcher.take_change_ready() {
                tracing::info!(path = %watcher.target_path().display(), "input changed");
                if let Err(err) = self.run_once() {
                    eprintln!("[warn] {err:#}");
                }
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    fn write_output(&self, output: &RunOutput) -> Result<()> {
        eprint!("{}", output.report);
        let Some(content) = &output.emitted else {
            return Ok(());
        };
        match &self.output {
            Some(path) => std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display())),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|()| stdout.flush())
                    .context("Failed to write to stdout")
            }
        }
    }
}
