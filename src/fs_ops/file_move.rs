//! Single-file move.
//! Attempts an atomic rename; across filesystems falls back to copy + delete.
//! Never overwrites: an occupied destination is a `FileConflict`.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::errors::GalleryMoveError;

use super::atomic::{path_occupied, rename_no_clobber};
use super::copy::safe_copy_and_rename;
use super::helpers::{classify_move_error, io_error_with_help};
use super::util::is_cross_device;

/// How a file reached its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMethod {
    /// Same-filesystem rename.
    Renamed,
    /// Copied across filesystems, then the original was deleted.
    Copied,
}

impl MoveMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveMethod::Renamed => "rename",
            MoveMethod::Copied => "copy",
        }
    }
}

/// Move `src` to the exact path `dest`.
pub fn move_file(src: &Path, dest: &Path) -> Result<MoveMethod> {
    if path_occupied(dest) {
        return Err(GalleryMoveError::FileConflict(dest.to_path_buf()).into());
    }
    settle_rename(src, dest, rename_no_clobber(src, dest))
}

/// Act on the outcome of the rename attempt: done, copy across devices, or fail.
fn settle_rename(src: &Path, dest: &Path, renamed: io::Result<()>) -> Result<MoveMethod> {
    match renamed {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(MoveMethod::Renamed)
        }
        Err(e) if is_cross_device(&e) => {
            debug!(error = %e, "Rename crosses filesystems, using copy+delete");
            let bytes = safe_copy_and_rename(src, dest).map_err(|ce| classify_move_error(ce, src, dest))?;
            fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
            debug!(src = %src.display(), dest = %dest.display(), bytes, "Copied file and removed original");
            Ok(MoveMethod::Copied)
        }
        Err(e) => Err(classify_move_error(e, src, dest)),
    }
}
