//! Core configuration types.
//! - Config holds the parameters of one batch run.
//! - LogLevel is the user-facing verbosity knob.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{PREFIX_DEFAULT, START_INDEX_DEFAULT, SUFFIX_DEFAULT};

/// Verbosity accepted by `--log-level` and `<log_level>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    #[default]
    Normal,
    Info,
    /// Everything, including per-file trace events.
    Debug,
}

impl LogLevel {
    /// Case-insensitive; a few common aliases are accepted (`verbose`, `trace`, `error`).
    pub fn parse(s: &str) -> Option<Self> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => LogLevel::Quiet,
            "normal" => LogLevel::Normal,
            "info" | "verbose" => LogLevel::Info,
            "debug" | "trace" => LogLevel::Debug,
            _ => return None,
        };
        Some(level)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
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
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Parameters of one batch run, built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the camera files
    pub source_dir: PathBuf,
    /// Directory receiving the renamed files
    pub dest_dir: PathBuf,
    /// Filename must start with this token (case-sensitive)
    pub prefix: String,
    /// Filename must end with this token (case-sensitive)
    pub suffix: String,
    /// Sequence number given to the first file in sorted order
    pub start_index: u64,
    pub log_level: LogLevel,
    /// Tracing is also appended here when set
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Construct a Config with explicit directories; other fields use defaults.
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            prefix: PREFIX_DEFAULT.to_string(),
            suffix: SUFFIX_DEFAULT.to_string(),
            start_index: START_INDEX_DEFAULT,
            log_level: LogLevel::Normal,
            log_file: None,
        }
    }

    pub fn with_filters(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    pub fn with_start_index(mut self, start_index: u64) -> Self {
        self.start_index = start_index;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_filter_defaults() {
        let cfg = Config::new("/media", "/gallery");
        assert_eq!(cfg.prefix, "DSCF");
        assert_eq!(cfg.suffix, ".JPG");
        assert_eq!(cfg.start_index, 1);
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let cfg = Config::new("/a", "/b")
            .with_filters("IMG_", ".jpeg")
            .with_start_index(21);
        assert_eq!(cfg.prefix, "IMG_");
        assert_eq!(cfg.suffix, ".jpeg");
        assert_eq!(cfg.start_index, 21);
    }
}
