//! Where raw input comes from.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::sample::sample_input;

/// A source of raw, possibly escaped, markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Sample,
}

impl InputSource {
    /// Interpret a command-line path argument; `-` means stdin.
    ///
    /// # Errors
    /// Returns an error when neither a path nor `--sample` was given.
    pub fn from_arg(arg: Option<PathBuf>, sample: bool) -> Result<Self> {
        if sample {
            return Ok(Self::Sample);
        }
        match arg {
            Some(path) if path.as_os_str() == "-" => Ok(Self::Stdin),
            Some(path) => Ok(Self::File(path)),
            None => anyhow::bail!("No input given: pass a FILE, `-` for stdin, or --sample"),
        }
    }

    /// Read the whole input.
    ///
    /// # Errors
    /// Returns an error if the file or stdin cannot be read as UTF-8.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            Self::Stdin => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .context("Failed to read stdin")?;
                Ok(raw)
            }
            Self::Sample => Ok(sample_input()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin | Self::Sample => None,
        }
    }

    /// Page title for standalone HTML output.
    pub fn title(&self) -> String {
        match self {
            Self::File(path) => path
                .file_stem()
                .map_or_else(|| "markprep".to_string(), |s| s.to_string_lossy().into_owned()),
            Self::Stdin => "markprep".to_string(),
            Self::Sample => "sample".to_string(),
        }
    }
}
