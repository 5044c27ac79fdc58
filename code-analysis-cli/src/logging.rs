//! Logging setup
//!
//! In serve mode stdout carries MCP frames, so logs go to a file under
//! `~/.code-analysis/`. Everywhere else they go to stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::Level;

/// Directory holding the MCP log file, relative to the home directory
pub const LOG_DIR_NAME: &str = ".code-analysis";

/// Default log file name in serve mode
pub const DEFAULT_LOG_FILE: &str = "mcp.log";

/// Environment variable overriding the log file name
pub const LOG_FILE_ENV: &str = "CODE_ANALYSIS_LOG_FILE";

/// A thread-safe writer that flushes and syncs every write
///
/// Log lines must reach disk immediately, since the server can be killed by
/// its client at any moment.
///
/// # Example
///
/// ```no_run
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
/// use std::fs::File;
/// use code_analysis_cli::logging::FileWriterGuard;
///
/// let file = File::create("log.txt").unwrap();
/// let mut guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));
/// guard.write_all(b"Log message\n").unwrap();
/// ```
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))
    }
}

impl io::Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock()?;
        let written = file.write(buf)?;
        file.flush()?;
        file.sync_all()?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self.lock()?;
        file.flush()?;
        file.sync_all()
    }
}

/// Pick the log level from the global flags
///
/// Serve mode defaults to debug, since the log file is the only window into
/// a running server.
pub fn log_level(quiet: bool, debug: bool, verbose: bool, mcp_mode: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::TRACE
    } else if debug || mcp_mode {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Path of the serve-mode log file
pub fn log_file_path() -> PathBuf {
    let log_dir = dirs::home_dir()
        .map(|home| home.join(LOG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_DIR_NAME));
    let file_name = std::env::var(LOG_FILE_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    log_dir.join(file_name)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global tracing subscriber
pub fn init_logging(level: Level, mcp_mode: bool) {
    if mcp_mode {
        let log_file = log_file_path();
        match open_log_file(&log_file) {
            Ok(file) => {
                let shared = Arc::new(Mutex::new(file));
                tracing_subscriber::fmt()
                    .with_writer(move || FileWriterGuard::new(shared.clone()))
                    .with_max_level(level)
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!(
                    "Failed to open log file {}, using stderr: {}",
                    log_file.display(),
                    e
                );
            }
        }
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_guard_writes_through() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.log");
        let file = File::create(&path).unwrap();
        let mut guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));

        guard.write_all(b"first line\n").unwrap();
        guard.write_all(b"second line\n").unwrap();
        guard.flush().unwrap();

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn test_log_level_flags() {
        assert_eq!(log_level(true, true, true, true), Level::ERROR);
        assert_eq!(log_level(false, false, true, false), Level::TRACE);
        assert_eq!(log_level(false, true, false, false), Level::DEBUG);
        assert_eq!(log_level(false, false, false, true), Level::DEBUG);
        assert_eq!(log_level(false, false, false, false), Level::INFO);
    }

    #[test]
    #[serial]
    fn test_log_file_path_override() {
        std::env::set_var(LOG_FILE_ENV, "custom.log");
        let path = log_file_path();
        std::env::remove_var(LOG_FILE_ENV);

        assert!(path.ends_with(format!("{LOG_DIR_NAME}/custom.log")));
    }

    #[test]
    #[serial]
    fn test_log_file_path_default() {
        std::env::remove_var(LOG_FILE_ENV);
        assert!(log_file_path().ends_with(format!("{LOG_DIR_NAME}/{DEFAULT_LOG_FILE}")));
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/mcp.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
