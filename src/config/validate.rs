//! Config validation logic.
//! Cheap, filesystem-free sanity checks on the merged settings. Directory
//! existence is deliberately not probed here: the source is checked by the scan
//! and the destination by the first move.

use anyhow::Result;
use std::path::{MAIN_SEPARATOR, Path};
use tracing::{debug, error, warn};

use crate::errors::GalleryMoveError;

use super::types::Config;

impl Config {
    /// Validate the merged settings before any filesystem access.
    pub fn validate(&self) -> Result<()> {
        ensure_path_set(&self.source_dir, "source_dir")?;
        ensure_path_set(&self.dest_dir, "dest_dir")?;
        warn_if_filter_has_separator(&self.prefix, "prefix");
        warn_if_filter_has_separator(&self.suffix, "suffix");

        debug!(
            source = %self.source_dir.display(),
            dest = %self.dest_dir.display(),
            prefix = %self.prefix,
            suffix = %self.suffix,
            start_index = self.start_index,
            "Config validated"
        );
        Ok(())
    }
}

fn ensure_path_set(path: &Path, name: &'static str) -> Result<()> {
    if path.as_os_str().is_empty() {
        error!("{name} is empty");
        return Err(GalleryMoveError::MissingSetting(name).into());
    }
    Ok(())
}

/// A filter containing a path separator can never match a directory entry name,
/// so the run will simply find nothing to move.
fn warn_if_filter_has_separator(filter: &str, name: &str) -> bool {
    let has_sep = filter.contains('/') || filter.contains(MAIN_SEPARATOR);
    if has_sep {
        warn!("{name} contains a path separator and will match no files: {filter:?}");
    }
    has_sep
}
