//! Input file watching for `--watch`.
//!
//! Rapid saves are collapsed into one notification so the pipeline runs
//! once per burst of edits, like a debounced live preview.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Quiet period after the last change before the input is re-read.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches one input file and reports debounced changes.
pub struct InputWatcher {
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    dir: PathBuf,
    target: PathBuf,
    debounce: Duration,
    pending_since: Option<Instant>,
}

impl InputWatcher {
    /// Watch the file at `path` through its directory, so a save that
    /// replaces the file is seen as well as one that rewrites it.
    ///
    /// # Errors
    /// Returns an error if `path` names no file, its directory does not
    /// exist, or the platform watcher cannot be set up.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        let (dir, target) = locate(path.as_ref())?;

        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %target.display(), "watching input");

        Ok(Self {
            _watcher: watcher,
            events,
            dir,
            target,
            debounce,
            pending_since: None,
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target
    }

    /// Drain pending events; true once a change has settled for the debounce window.
    pub fn take_change_ready(&mut self) -> bool {
        let mut relevant = 0u32;
        while let Ok(event) = self.events.try_recv() {
            match event {
                Ok(ev) if self.is_relevant(&ev) => relevant += 1,
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "file watcher error");
                    crate::perf::log_event("watcher.error", err.to_string());
                }
            }
        }

        if relevant > 0 {
            if crate::perf::is_debug_log_enabled() {
                crate::perf::log_event(
                    "watcher.change",
                    format!("events={relevant} target={}", self.target.display()),
                );
            }
            self.pending_since = Some(Instant::now());
        }

        match self.pending_since {
            Some(since) if since.elapsed() >= self.debounce => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    /// Reads never count, or re-reading the input after a change would
    /// schedule another run. Some backends only name the directory.
    fn is_relevant(&self, event: &Event) -> bool {
        if matches!(event.kind, EventKind::Access(_)) {
            return false;
        }
        event
            .paths
            .iter()
            .any(|path| path == &self.target || path == &self.dir)
    }
}

/// Canonical directory of the input and the input's path inside it.
///
/// Only the directory is resolved: the file itself may be mid-replace.
fn locate(path: &Path) -> notify::Result<(PathBuf, PathBuf)> {
    let name = path
        .file_name()
        .ok_or_else(|| notify::Error::generic("input path does not name a file"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let dir = parent.canonicalize().map_err(notify::Error::io)?;
    let target = dir.join(name);
    Ok((dir, target))
}
