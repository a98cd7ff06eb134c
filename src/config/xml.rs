//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Every field is optional; CLI flags fill or override them afterwards.
//!
//! Notes:
//! - This module only reads the config file; directory checks happen at move time.
//! - Unknown XML fields are a hard error to surface misconfigurations early.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::resolve_config_path;
use super::types::LogLevel;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "source_dir")]
    source_dir: Option<String>,
    #[serde(rename = "dest_dir")]
    dest_dir: Option<String>,
    #[serde(rename = "prefix")]
    prefix: Option<String>,
    #[serde(rename = "suffix")]
    suffix: Option<String>,
    #[serde(rename = "start_index", default, deserialize_with = "de_u64_trimmed_opt")]
    start_index: Option<u64>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

/// Settings read from a config file. `None` means "not set in the file".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub source_dir: Option<PathBuf>,
    pub dest_dir: Option<PathBuf>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub start_index: Option<u64>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

// Trims surrounding whitespace; a malformed number is an error rather than a silent default.
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid start_index '{s}': {e}"))),
    }
}

fn trimmed_path(s: Option<&str>) -> Option<PathBuf> {
    s.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(PathBuf::from)
}

fn xml_to_file_config(parsed: XmlConfig) -> Result<FileConfig> {
    let log_level = match parsed.log_level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<LogLevel>().map_err(anyhow::Error::msg)?),
    };

    Ok(FileConfig {
        source_dir: trimmed_path(parsed.source_dir.as_deref()),
        dest_dir: trimmed_path(parsed.dest_dir.as_deref()),
        prefix: parsed.prefix.map(|s| s.trim().to_string()),
        suffix: parsed.suffix.map(|s| s.trim().to_string()),
        start_index: parsed.start_index,
        log_level,
        log_file: trimmed_path(parsed.log_file.as_deref()),
    })
}

/// Parse config XML text.
pub fn parse_config_xml(contents: &str) -> Result<FileConfig> {
    let parsed: XmlConfig = from_xml_str(contents).context("parse config xml")?;
    xml_to_file_config(parsed)
}

/// Load a FileConfig from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    parse_config_xml(&contents).with_context(|| format!("in config file '{}'", path.display()))
}

/// Locate and load the config file, if any.
///
/// Returns Ok(None) when no explicit file was requested and the default file is absent.
pub fn load_config_file(cli_path: Option<&Path>) -> Result<Option<FileConfig>> {
    let Some((path, explicit)) = resolve_config_path(cli_path) else {
        return Ok(None);
    };

    if !path.exists() {
        if explicit {
            bail!("config file not found: {}", path.display());
        }
        debug!(path = %path.display(), "No default config file; using flags and defaults");
        return Ok(None);
    }

    debug!(path = %path.display(), "Loading config file");
    load_config_from_xml_path(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let xml = r#"
<config>
  <source_dir> /data/media </source_dir>
  <dest_dir>/data/gallery</dest_dir>
  <prefix>DSCF</prefix>
  <suffix>.JPG</suffix>
  <start_index> 21 </start_index>
  <log_level>debug</log_level>
</config>"#;
        let cfg = parse_config_xml(xml).unwrap();
        assert_eq!(cfg.source_dir, Some(PathBuf::from("/data/media")));
        assert_eq!(cfg.dest_dir, Some(PathBuf::from("/data/gallery")));
        assert_eq!(cfg.prefix.as_deref(), Some("DSCF"));
        assert_eq!(cfg.suffix.as_deref(), Some(".JPG"));
        assert_eq!(cfg.start_index, Some(21));
        assert_eq!(cfg.log_level, Some(LogLevel::Debug));
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn missing_fields_stay_unset() {
        let cfg = parse_config_xml("<config><start_index>5</start_index></config>").unwrap();
        assert_eq!(cfg.start_index, Some(5));
        assert!(cfg.source_dir.is_none());
        assert!(cfg.prefix.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = parse_config_xml("<config><dry_run>true</dry_run></config>").unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"), "got: {err:#}");
    }

    #[test]
    fn bad_start_index_is_rejected() {
        let err = parse_config_xml("<config><start_index>-3</start_index></config>").unwrap_err();
        assert!(format!("{err:#}").contains("start_index"), "got: {err:#}");
    }

    #[test]
    fn bad_log_level_is_rejected() {
        assert!(parse_config_xml("<config><log_level>loud</log_level></config>").is_err());
    }
}
