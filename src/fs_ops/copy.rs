//! Safe copy-and-rename helper for moves across filesystems:
//! - Copies to a temp file in the destination directory (fsynced)
//! - Renames temp -> dest without clobbering
//! - Removes the temp file if anything fails

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use super::atomic::rename_no_clobber;
use super::io_copy::copy_streaming;
use super::util::unique_temp_path;

/// Copy `src` to `dest` through a temp file in `dest`'s directory.
/// The source is left in place; the caller removes it once this returns Ok.
pub(super) fn safe_copy_and_rename(src: &Path, dest: &Path) -> io::Result<u64> {
    let dest_dir = dest.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("destination has no parent: {}", dest.display()),
        )
    })?;

    let tmp_path = unique_temp_path(dest_dir);
    let bytes = match copy_streaming(src, &tmp_path) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
    };
    debug!(tmp = %tmp_path.display(), bytes, "Copied to temporary file");

    if let Err(e) = rename_no_clobber(&tmp_path, dest) {
        // Best-effort cleanup of the temp file on failure.
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(bytes)
}
