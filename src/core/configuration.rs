use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("Unknown log level: {0}")]
pub struct UnknownLevel(pub String);

/// Minimum severity a logger rule lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    #[default]
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "off" => Ok(LogLevel::Off),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
            LogLevel::Off => "Off",
        };
        write!(f, "{name}")
    }
}

/// A single routing rule: loggers matching `name_pattern` at `min_level` or
/// above are sent to `write_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingRule {
    pub name_pattern: String,
    pub min_level: LogLevel,
    pub write_to: Option<String>,
}

/// Result of a structural parse
///
/// A configuration can be returned even when `initialize_succeeded` is
/// false; the loader decides what to do with a degraded object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfiguration {
    /// Backing file, `None` for in-memory configurations
    pub file_path: Option<PathBuf>,

    pub initialize_succeeded: bool,

    /// Whether the backing file should be watched for changes
    pub auto_reload: bool,

    /// `throwExceptions` as declared by the document itself
    pub throw_exceptions: Option<bool>,

    /// `throwConfigExceptions` as declared by the document itself
    pub throw_config_exceptions: Option<bool>,

    pub rules: Vec<LoggingRule>,

    /// Problems collected by a lenient parse
    pub problems: Vec<String>,
}

impl LoggingConfiguration {
    /// Build a rule-less configuration that keeps monitoring `file_path`.
    ///
    /// Used when the file content is unusable: the host ends up with no
    /// output instead of a crash, and a later fix to the file is still seen.
    pub fn empty_monitored(file_path: &Path, auto_reload: bool) -> Self {
        Self {
            file_path: Some(file_path.to_path_buf()),
            initialize_succeeded: true,
            auto_reload,
            ..Self::default()
        }
    }
}
