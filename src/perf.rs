//! Opt-in timing and debug event log.
//!
//! `--perf` prints stage timings to stderr. `--debug-log PATH` appends
//! timestamped pipeline events (including the same timings) to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);
static DEBUG_LOG_OPEN: AtomicBool = AtomicBool::new(false);
static DEBUG_LOG: LazyLock<Mutex<DebugLog>> = LazyLock::new(|| Mutex::new(DebugLog::default()));

/// Times a pipeline stage until dropped.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        let print = is_enabled();
        let record = is_debug_log_enabled();
        if !print && !record {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if print {
            eprintln!("[perf] {}: {:.3} ms", self.name, elapsed_ms);
        }
        if record {
            log_event(self.name, format!("{elapsed_ms:.3} ms"));
        }
    }
}

#[derive(Debug)]
struct DebugLog {
    start: Instant,
    writer: Option<BufWriter<File>>,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            writer: None,
        }
    }
}

fn debug_log() -> MutexGuard<'static, DebugLog> {
    // A panic while holding the lock leaves nothing worth protecting.
    DEBUG_LOG
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Start writing debug events to `path`, or stop when `None`.
///
/// # Errors
/// Returns an error if the log file cannot be created or written.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut log = debug_log();
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writeln!(writer, "markprep debug log start")?;
            writer.flush()?;
            log.start = Instant::now();
            log.writer = Some(writer);
        }
        None => log.writer = None,
    }
    DEBUG_LOG_OPEN.store(log.writer.is_some(), Ordering::Relaxed);
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    DEBUG_LOG_OPEN.load(Ordering::Relaxed)
}

pub fn log_event(name: &str, detail: impl AsRef<str>) {
    if !is_debug_log_enabled() {
        return;
    }
    let mut log = debug_log();
    let elapsed_ms = log.start.elapsed().as_secs_f64() * 1000.0;
    if let Some(writer) = log.writer.as_mut() {
        let _ = writeln!(writer, "[{elapsed_ms:>10.3} ms] {name}: {}", detail.as_ref());
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    // Both switches are process-wide.
    static SWITCHES: Mutex<()> = Mutex::new(());

    fn lock_switches() -> MutexGuard<'static, ()> {
        SWITCHES.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[test]
    fn test_set_enabled_toggles_runtime_flag() {
        let _guard = lock_switches();
        set_enabled(true);
        assert!(is_enabled());

        set_enabled(false);
        assert!(!is_enabled());
    }

    #[test]
    fn test_debug_log_records_events_and_scopes() {
        let _guard = lock_switches();
        let temp_file = NamedTempFile::new().unwrap();
        set_debug_log_path(Some(temp_file.path())).unwrap();
        assert!(is_debug_log_enabled());
        log_event("test.event", "hello world");
        drop(scope("test.scope"));
        set_debug_log_path(None).unwrap();
        assert!(!is_debug_log_enabled());

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("markprep debug log start"));
        assert!(content.contains("test.event: hello world"));
        assert!(content.contains("test.scope: "));
    }

    #[test]
    fn test_scope_with_everything_off_leaves_closed_log_untouched() {
        let _guard = lock_switches();
        let temp_file = NamedTempFile::new().unwrap();
        set_debug_log_path(Some(temp_file.path())).unwrap();
        set_debug_log_path(None).unwrap();
        set_enabled(false);

        drop(scope("quiet.scope"));
        log_event("quiet.event", "dropped");

        assert!(!is_debug_log_enabled());
        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, "markprep debug log start\n");
    }

    #[test]
    fn test_reopened_log_starts_fresh() {
        let _guard = lock_switches();
        let first = NamedTempFile::new().unwrap();
        let second = NamedTempFile::new().unwrap();
        set_debug_log_path(Some(first.path())).unwrap();
        log_event("first.event", "one");
        set_debug_log_path(Some(second.path())).unwrap();
        drop(scope("second.scope"));
        set_debug_log_path(None).unwrap();

        let first = std::fs::read_to_string(first.path()).unwrap();
        let second = std::fs::read_to_string(second.path()).unwrap();
        assert!(first.contains("first.event: one"));
        assert!(!first.contains("second.scope"));
        assert!(second.contains("second.scope: "));
    }
}
