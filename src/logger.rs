use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        };
        f.write_str(s)
    }
}

struct Sink {
    file: Option<File>,
    console: bool,
}

/// Append-mode text logger shared by the caches and the game controller.
///
/// One lock serializes timestamp formatting and the write, so entries from
/// any call site land in call order as whole lines. There is no global
/// instance; the application owns the logger and hands out `Arc` clones.
pub struct Logger {
    sink: Mutex<Sink>,
}

impl Logger {
    /// Open `path` for appending. If the file cannot be opened the logger
    /// still works, console-only, and reports what happened on stderr.
    pub fn to_file(path: impl AsRef<Path>, console: bool) -> Self {
        let path = path.as_ref();
        let file = match open_sink(path) {
            Ok(f) => Some(f),
            Err(e) => {
                eprintln!("{e}");
                None
            }
        };
        Logger {
            sink: Mutex::new(Sink { file, console }),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("[{timestamp}] [{level}] {message}");
        if let Some(file) = sink.file.as_mut() {
            // A write error is not worth crashing the frame loop over.
            let _ = writeln!(file, "{entry}");
        }
        if sink.console {
            eprintln!("{entry}");
        }
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
}

fn open_sink(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::SinkUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Temp-file path for logger tests, unique per process and call.
#[cfg(test)]
fn temp_log_path(hint: &str) -> std::path::PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "flappybara_log_test_{}_{}_{}.txt",
        hint,
        std::process::id(),
        nanos
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_tagged_lines_in_call_order() {
        let path = temp_log_path("order");
        let logger = Logger::to_file(&path, false);
        logger.info("first");
        logger.warning("second");
        logger.error("third");

        let body = fs::read_to_string(&path).expect("log file should exist");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("[INFO] first"));
        assert!(lines[1].contains("[WARNING] second"));
        assert!(lines[2].contains("[ERROR] third"));
        // [YYYY-MM-DD HH:MM:SS] prefix is 21 chars.
        assert_eq!(&lines[0][..1], "[");
        assert_eq!(&lines[0][20..22], "] ");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn unopenable_sink_degrades_instead_of_panicking() {
        // A directory path cannot be opened as a file.
        let logger = Logger::to_file(std::env::temp_dir(), false);
        logger.info("still fine");
    }

    #[test]
    fn appends_across_instances() {
        let path = temp_log_path("append");
        Logger::to_file(&path, false).info("one");
        Logger::to_file(&path, false).info("two");

        let body = fs::read_to_string(&path).expect("log file should exist");
        assert_eq!(body.lines().count(), 2);

        let _ = fs::remove_file(path);
    }
}
