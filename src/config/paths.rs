//! Config file location helpers and symlink checks.

use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GALLERY_MOVE_CONFIG";

/// OS-appropriate default config path.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = config_dir() {
        base.push("gallery_move");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("gallery_move")
                .join("config.xml")
        })
    }
}

/// Pick the config file to read.
///
/// Precedence: explicit `--config` path, then `$GALLERY_MOVE_CONFIG`, then the
/// OS default. The flag tells whether the choice was explicit; an explicit file
/// must exist, the default one may be absent.
pub fn resolve_config_path(cli_path: Option<&Path>) -> Option<(PathBuf, bool)> {
    if let Some(p) = cli_path {
        return Some((p.to_path_buf(), true));
    }
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some((PathBuf::from(p), true));
    }
    default_config_path().map(|p| (p, false))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
