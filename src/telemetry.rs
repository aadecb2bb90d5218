//! Trace logging to a JSON-lines file
//!
//! The terminal belongs to the survey UI once it starts, so traces never go to
//! stdout or stderr. Setup failures are returned to the caller, which reports
//! them before entering raw mode.

use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

use crate::cli::Cli;
use crate::error::TelemetryError;

/// Path of the trace file the global subscriber writes to, once installed
static TRACE_FILE: OnceLock<PathBuf> = OnceLock::new();

pub fn tracing_log_path() -> PathBuf {
    env::var("SURVEYDECK_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("surveydeck_trace.jsonl"))
}

fn tracing_enabled(cli: &Cli) -> bool {
    cli.logs && !cli.no_logs
}

/// Open `path` for appending and make it the global trace sink
fn install_subscriber(path: &Path) -> Result<(), TelemetryError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TelemetryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(Level::DEBUG)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(file)
        .with_current_span(false)
        .with_span_list(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| TelemetryError::AlreadyInstalled)
}

fn init_tracing_in(
    cli: &Cli,
    slot: &OnceLock<PathBuf>,
) -> Result<Option<PathBuf>, TelemetryError> {
    if !tracing_enabled(cli) {
        return Ok(None);
    }
    if let Some(path) = slot.get() {
        return Ok(Some(path.clone()));
    }
    let path = tracing_log_path();
    install_subscriber(&path)?;
    Ok(Some(slot.get_or_init(|| path).clone()))
}

/// Start trace logging if the command line asks for it
///
/// Returns the trace file path when logging is on.
pub fn init_tracing(cli: &Cli) -> Result<Option<PathBuf>, TelemetryError> {
    init_tracing_in(cli, &TRACE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::Mutex;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["surveydeck", "questions.json"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_log_path_prefers_env_override() {
        let _guard = env_lock().lock().expect("env lock");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");
        env::set_var("SURVEYDECK_TRACE_LOG", &path);
        assert_eq!(tracing_log_path(), path);
        env::remove_var("SURVEYDECK_TRACE_LOG");
        assert_eq!(
            tracing_log_path(),
            env::temp_dir().join("surveydeck_trace.jsonl")
        );
    }

    #[test]
    fn test_logging_flags() {
        assert!(!tracing_enabled(&cli(&[])));
        assert!(tracing_enabled(&cli(&["--logs"])));
        assert!(!tracing_enabled(&cli(&["--logs", "--no-logs"])));
        assert!(!tracing_enabled(&cli(&["--no-logs"])));
    }

    #[test]
    fn test_disabled_logging_touches_nothing() {
        let _guard = env_lock().lock().expect("env lock");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disabled.jsonl");
        env::set_var("SURVEYDECK_TRACE_LOG", &path);
        let slot = OnceLock::new();
        assert!(matches!(init_tracing_in(&cli(&[]), &slot), Ok(None)));
        assert!(!path.exists());
        env::remove_var("SURVEYDECK_TRACE_LOG");
    }

    #[test]
    fn test_unwritable_log_path_is_reported() {
        let _guard = env_lock().lock().expect("env lock");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("trace.jsonl");
        env::set_var("SURVEYDECK_TRACE_LOG", &path);
        let slot = OnceLock::new();
        let result = init_tracing_in(&cli(&["--logs"]), &slot);
        assert!(matches!(result, Err(TelemetryError::Open { .. })));
        assert!(slot.get().is_none());
        env::remove_var("SURVEYDECK_TRACE_LOG");
    }

    #[test]
    fn test_installed_path_is_reused() {
        let slot = OnceLock::new();
        let path = PathBuf::from("already-installed.jsonl");
        slot.set(path.clone()).unwrap();
        let result = init_tracing_in(&cli(&["--logs"]), &slot);
        assert!(matches!(result, Ok(Some(p)) if p == path));
    }
}
