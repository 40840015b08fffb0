//! Markprep - unwrap escaped markdown, lint it, render it.
//!
//! # Usage
//!
//! ```bash
//! markprep payload.txt > out.html
//! pbpaste | markprep - --emit text
//! markprep --watch --standalone notes.txt --output notes.html
//! markprep --sample
//! ```

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use markprep::app::{App, InputSource, RunStatus};
use markprep::config::{
    ConfigFlags, EmitMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use markprep::perf;
use markprep::report::ReportFormat;

/// Unwrap escaped markdown, check its structure and render it to HTML
#[derive(Parser, Debug)]
#[command(name = "markprep", version, about, long_about = None)]
struct Cli {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Use the built-in sample instead of FILE
    #[arg(long)]
    sample: bool,

    /// Re-run whenever FILE changes
    #[arg(short, long)]
    watch: bool,

    /// What to write to the output
    #[arg(long, value_enum)]
    emit: Option<EmitMode>,

    /// Wrap HTML output in a standalone page
    #[arg(long)]
    standalone: bool,

    /// Write output to PATH instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Diagnostics report format (written to stderr)
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Exit with status 1 when issues are found
    #[arg(long)]
    strict: bool,

    /// Print stage timings to stderr
    #[arg(long)]
    perf: bool,

    /// Write detailed pipeline events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
        eprintln!("Saved defaults to {}", global_path.display());
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("MARKPREP_DEBUG_LOG").map(PathBuf::from));
    if let Some(path) = &debug_log_path {
        perf::set_debug_log_path(Some(path))
            .with_context(|| format!("Failed to open debug log {}", path.display()))?;
    }

    if (cli.save || cli.clear) && cli.file.is_none() && !cli.sample {
        return Ok(ExitCode::SUCCESS);
    }

    let source = InputSource::from_arg(cli.file, cli.sample)?;
    let app = App::new(source)
        .with_emit(effective.emit.unwrap_or(EmitMode::Html))
        .with_report_format(effective.format.unwrap_or(ReportFormat::Text))
        .with_standalone(effective.standalone)
        .with_strict(effective.strict)
        .with_watch(effective.watch)
        .with_color(std::io::stderr().is_terminal())
        .with_output(cli.output);

    match app.run()? {
        RunStatus::Success => Ok(ExitCode::SUCCESS),
        RunStatus::IssuesFound => Ok(ExitCode::from(1)),
    }
}
