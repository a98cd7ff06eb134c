//! CLI definition and parsing.
//! Defines Args and merges them over the config file into a `Config`.
//!
//! Notes:
//! - Precedence per setting: flag > config file > built-in default.
//! - --debug is a shorthand for --log-level debug and wins over it.

use anyhow::Result;
use clap::{Parser, ValueHint};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::config::{Config, FileConfig, LogLevel, PREFIX_DEFAULT, START_INDEX_DEFAULT, SUFFIX_DEFAULT};
use crate::errors::GalleryMoveError;

/// Rename camera images to gallery-<n>.jpg and move them into a gallery folder.
/// CLI flags override values from the XML config file.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move camera images into a gallery folder under sequential names"
)]
pub struct Args {
    /// Directory holding the images to move.
    #[arg(short = 's', long = "source", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Directory receiving gallery-<n>.jpg files. Must already exist.
    #[arg(short = 'd', long = "dest", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// Only move files whose name starts with this token (case-sensitive) [default: DSCF]
    #[arg(short = 'p', long, value_name = "TOKEN")]
    pub prefix: Option<String>,

    /// Only move files whose name ends with this token (case-sensitive) [default: .JPG]
    #[arg(short = 'x', long, value_name = "EXT", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Number given to the first file in sorted order [default: 1]
    #[arg(short = 'i', long, value_name = "N")]
    pub start_index: Option<u64>,

    /// XML config file (overrides GALLERY_MOVE_CONFIG and the default location).
    #[arg(short = 'c', long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(long)]
    pub debug: bool,

    /// Also write log output to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location that would be used, then exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Merge flags over the (optional) file config into a complete Config.
    ///
    /// Source and destination have no default; a missing one is a `MissingSetting` error.
    pub fn build_config(&self, file: Option<FileConfig>) -> Result<Config> {
        let file = file.unwrap_or_default();

        let source = self
            .source
            .as_deref()
            .map(trim_trailing_separator)
            .or(file.source_dir)
            .ok_or(GalleryMoveError::MissingSetting("source_dir"))?;
        let dest = self
            .dest
            .as_deref()
            .map(trim_trailing_separator)
            .or(file.dest_dir)
            .ok_or(GalleryMoveError::MissingSetting("dest_dir"))?;

        let mut cfg = Config::new(source, dest)
            .with_filters(
                self.prefix
                    .clone()
                    .or(file.prefix)
                    .unwrap_or_else(|| PREFIX_DEFAULT.to_string()),
                self.suffix
                    .clone()
                    .or(file.suffix)
                    .unwrap_or_else(|| SUFFIX_DEFAULT.to_string()),
            )
            .with_start_index(
                self.start_index
                    .or(file.start_index)
                    .unwrap_or(START_INDEX_DEFAULT),
            );

        if let Some(level) = self.effective_log_level().or(file.log_level) {
            cfg.log_level = level;
        }
        cfg.log_file = self.log_file.clone().or(file.log_file);
        Ok(cfg)
    }
}

/// Drop one trailing separator. Everything else is kept byte-for-byte, and
/// roots such as `/` or `C:\` are left alone.
fn trim_trailing_separator(p: &Path) -> PathBuf {
    if p.parent().is_none() {
        return p.to_path_buf();
    }
    match p.to_str() {
        Some(s) if s.ends_with('/') || s.ends_with(MAIN_SEPARATOR) => PathBuf::from(&s[..s.len() - 1]),
        _ => p.to_path_buf(),
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_separator_is_dropped_but_roots_kept() {
        assert_eq!(trim_trailing_separator(Path::new("/data/media/")), PathBuf::from("/data/media"));
        assert_eq!(trim_trailing_separator(Path::new("/data/media")), PathBuf::from("/data/media"));
        assert_eq!(trim_trailing_separator(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn whitespace_and_quotes_are_part_of_the_name() {
        assert_eq!(trim_trailing_separator(Path::new("/data/photos ")), PathBuf::from("/data/photos "));
        assert_eq!(trim_trailing_separator(Path::new("/data/'raw'")), PathBuf::from("/data/'raw'"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_untouched() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = Path::new(OsStr::from_bytes(b"/data/m\xffedia"));
        assert_eq!(trim_trailing_separator(raw), raw.to_path_buf());
    }
}
