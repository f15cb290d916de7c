//! Leveled logger with a console sink and an append-only JSON-lines file.
//!
//! The console line goes out as a `tracing` event, so whatever subscriber
//! the binary installs decides where it is printed. The file sink is owned
//! by the logger itself: one JSON object per line, one append per entry.

mod sanitize;

pub use sanitize::{
    REDACTED, SENSITIVE_FIELDS, SENSITIVE_HEADERS, is_sensitive_field, is_sensitive_header,
    sanitize_body, sanitize_headers, sanitize_query,
};

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;

/// Log severity, ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// One log record as written to the file sink.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            level,
            message: message.into(),
            data,
        }
    }

    /// Human-readable rendering: `[HH:MM:SS] [LEVEL] message`, then the
    /// pretty-printed data on the following lines.
    pub fn console_line(&self) -> String {
        let time = DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
            .unwrap_or_else(|_| self.timestamp.clone());

        let mut line = format!(
            "[{}] [{}] {}",
            time,
            self.level.as_str().to_uppercase(),
            self.message
        );

        if let Some(data) = &self.data {
            if let Ok(pretty) = serde_json::to_string_pretty(data) {
                line.push('\n');
                line.push_str(&pretty);
            }
        }

        line
    }
}

/// Logging service shared by the API client and the test suites.
///
/// Construct one per run (usually behind an `Arc`) and hand it to whatever
/// needs it.
pub struct Logger {
    threshold: LogLevel,
    file: Option<PathBuf>,
    console: bool,
    write_lock: Mutex<()>,
}

impl Logger {
    /// Creates a logger writing entries at or above `threshold` to the
    /// console and, when given, appending them to `file`.
    pub fn new(threshold: LogLevel, file: Option<PathBuf>) -> Self {
        if let Some(parent) = file.as_deref().and_then(Path::parent) {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::error!(
                        path = %parent.display(),
                        error = %e,
                        "failed to create log directory"
                    );
                }
            }
        }

        Self {
            threshold,
            file,
            console: true,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a logger from the suite configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.log_level, Some(config.log_file.clone()))
    }

    /// A logger that drops everything.
    pub fn disabled() -> Self {
        Self {
            threshold: LogLevel::Error,
            file: None,
            console: false,
            write_lock: Mutex::new(()),
        }
    }

    /// Turns the console sink off, keeping only the file.
    pub fn without_console(mut self) -> Self {
        self.console = false;
        self
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        (self.console || self.file.is_some()) && level <= self.threshold
    }

    pub fn error(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Error, message, data);
    }

    pub fn warn(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Warn, message, data);
    }

    pub fn info(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Info, message, data);
    }

    pub fn debug(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Debug, message, data);
    }

    /// Emits one entry to both sinks. Never fails.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, data: Option<Value>) {
        if !self.is_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message, data);

        if self.console {
            write_console(&entry);
        }

        if let Some(path) = &self.file {
            if let Err(e) = self.append(path, &entry) {
                tracing::error!(path = %path.display(), error = %e, "failed to write log file");
            }
        }
    }

    fn append(&self, path: &Path, entry: &LogEntry) -> std::io::Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        // A poisoned lock only means another writer panicked mid-call.
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("file", &self.file)
            .field("console", &self.console)
            .finish()
    }
}

fn write_console(entry: &LogEntry) {
    let line = entry.console_line();
    match entry.level {
        LogLevel::Error => tracing::error!(target: "suite", "{}", line),
        LogLevel::Warn => tracing::warn!(target: "suite", "{}", line),
        LogLevel::Info => tracing::info!(target: "suite", "{}", line),
        LogLevel::Debug => tracing::debug!(target: "suite", "{}", line),
    }
}
