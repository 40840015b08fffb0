//! Saved default flags.
//!
//! Defaults live in a plain-text rc file, one flag per line, in the same
//! spelling as the command line. A global file in the user config directory
//! is merged with a local `.markpreprc`, then with the actual CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::report::ReportFormat;

const APP_DIR: &str = "markprep";
const LOCAL_RC: &str = ".markpreprc";

/// What to write to the output once the input is prepared.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// Rendered HTML
    Html,
    /// The normalized markdown text
    Text,
    /// Only the diagnostics report
    None,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub strict: bool,
    pub standalone: bool,
    pub perf: bool,
    pub emit: Option<EmitMode>,
    pub format: Option<ReportFormat>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: booleans are OR-ed, `other` wins for values.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            strict: self.strict || other.strict,
            standalone: self.standalone || other.standalone,
            perf: self.perf || other.perf,
            emit: other.emit.or(self.emit),
            format: other.format.or(self.format),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR).join("config");
        }
    }

    PathBuf::from(LOCAL_RC)
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_RC)
}

/// Load flags from an rc file. A missing file yields the defaults.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write flags to an rc file, creating its directory if needed.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# markprep defaults (saved with --save)".to_string()];
    if flags.watch {
        lines.push("--watch".to_string());
    }
    if flags.strict {
        lines.push("--strict".to_string());
    }
    if flags.standalone {
        lines.push("--standalone".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(emit) = flags.emit {
        lines.push(format!("--emit {}", emit_name(emit)));
    }
    if let Some(format) = flags.format {
        lines.push(format!("--format {}", format_name(format)));
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove an rc file if it exists.
///
/// # Errors
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick out the savable flags from raw argument tokens. Unknown tokens
/// (including the program name and input path) are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--watch" | "-w" => flags.watch = true,
            "--strict" => flags.strict = true,
            "--standalone" => flags.standalone = true,
            "--perf" => flags.perf = true,
            "--emit" | "--format" | "--debug-log" => {
                if let Some(next) = tokens.get(i + 1) {
                    apply_valued_flag(&mut flags, token, next);
                    i += 1;
                }
            }
            _ => {
                if let Some((name, value)) = token.split_once('=') {
                    apply_valued_flag(&mut flags, name, value);
                }
            }
        }
        i += 1;
    }
    flags
}

fn apply_valued_flag(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--emit" => flags.emit = parse_emit(value),
        "--format" => flags.format = parse_format(value),
        "--debug-log" => flags.debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}

fn parse_emit(s: &str) -> Option<EmitMode> {
    match s {
        "html" => Some(EmitMode::Html),
        "text" => Some(EmitMode::Text),
        "none" => Some(EmitMode::None),
        _ => None,
    }
}

const fn emit_name(emit: EmitMode) -> &'static str {
    match emit {
        EmitMode::Html => "html",
        EmitMode::Text => "text",
        EmitMode::None => "none",
    }
}

fn parse_format(s: &str) -> Option<ReportFormat> {
    match s {
        "text" => Some(ReportFormat::Text),
        "json" => Some(ReportFormat::Json),
        _ => None,
    }
}

const fn format_name(format: ReportFormat) -> &'static str {
    match format {
        ReportFormat::Text => "text",
        ReportFormat::Json => "json",
    }
}
