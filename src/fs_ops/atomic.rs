//! No-clobber rename helper.
//! - Refuses to rename onto an existing destination (fail-fast collision policy).
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

/// True if anything (file, dir, dangling symlink) occupies `path`.
pub(super) fn path_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Rename `src` -> `dst` unless `dst` is already taken.
///
/// Returns `AlreadyExists` when `dst` is occupied; other errors are the raw
/// rename error so callers can tell cross-device failures apart.
pub(super) fn rename_no_clobber(src: &Path, dst: &Path) -> io::Result<()> {
    if path_occupied(dst) {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination exists: {}", dst.display()),
        ));
    }

    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
