//! I/O error helpers.
//!
//! - `io_error_with_help` enriches an io::Error with the operation, the path and
//!   a platform-aware hint, for use with `map_err` in anyhow code paths.
//! - `classify_move_error` turns a failed rename/copy into a typed
//!   `GalleryMoveError` when the failure is one the caller reports specially.
//!
//! Usage:
//!   fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

use crate::errors::GalleryMoveError;

/// Hint for a raw OS error code, if we have one.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
        libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
        libc::ENOENT => Some("path not found; verify it exists"),
        libc::ENOTDIR => Some("a path component is not a directory"),
        libc::EEXIST => Some("already exists; remove the target or pick another start index"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem; cannot write here"),
        libc::ENAMETOOLONG => Some("filename or path too long"),
        _ => None,
    }
}

/// Common Win32 error codes.
#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),
        17 => Some("not same device; cross-filesystem move"),
        32 => Some("sharing violation; file is in use"),
        2 | 3 => Some("path not found; verify it exists"),
        80 | 183 => Some("already exists; remove the target or pick another start index"),
        112 => Some("insufficient disk space"),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove the target or pick another start index"),
        _ => None,
    }
}

/// Format a human-friendly message with op/path plus a hint.
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Map a failed move of `src` to `dest` to the most specific error we can name.
///
/// NotFound is ambiguous for rename(2): it may be the destination directory or
/// the source file. The destination directory is checked first since that is
/// the case callers need to report by name.
pub(crate) fn classify_move_error(e: io::Error, src: &Path, dest: &Path) -> anyhow::Error {
    let dest_dir = dest.parent().unwrap_or_else(|| Path::new("."));
    match e.kind() {
        io::ErrorKind::NotFound => {
            if !dest_dir.is_dir() {
                GalleryMoveError::DirectoryNotFound(dest_dir.to_path_buf()).into()
            } else if std::fs::symlink_metadata(src).is_err() {
                GalleryMoveError::SourceNotFound(src.to_path_buf()).into()
            } else {
                anyhow!(build_message("move", src, &e))
            }
        }
        io::ErrorKind::PermissionDenied => GalleryMoveError::PermissionDenied {
            path: dest.to_path_buf(),
            context: build_message("move", src, &e),
        }
        .into(),
        io::ErrorKind::AlreadyExists => GalleryMoveError::FileConflict(dest.to_path_buf()).into(),
        _ if !dest_dir.exists() => GalleryMoveError::DirectoryNotFound(dest_dir.to_path_buf()).into(),
        _ if !dest_dir.is_dir() => GalleryMoveError::NotADirectory(dest_dir.to_path_buf()).into(),
        _ => anyhow!(build_message("move", src, &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn notfound_hint_includes_op_and_path() {
        let p = Path::new("/nonexistent/path/for/test");
        let err = io_error_with_help("open", p)(io::Error::from(io::ErrorKind::NotFound));
        let msg = err.to_string();
        assert!(msg.contains("open"));
        assert!(msg.contains("/nonexistent/path/for/test"));
        assert!(msg.contains("path not found"));
    }

    #[cfg(unix)]
    #[test]
    fn enospc_hint_and_code() {
        let msg = build_message("write", Path::new("/tmp"), &io::Error::from_raw_os_error(libc::ENOSPC));
        assert!(msg.contains("insufficient space"), "msg was: {msg}");
        assert!(msg.contains("os code"));
    }

    #[test]
    fn missing_dest_dir_is_directory_not_found() {
        let td = tempdir().unwrap();
        let src = td.path().join("DSCF0001.JPG");
        std::fs::write(&src, b"x").unwrap();
        let dest = td.path().join("missing").join("gallery-1.jpg");
        let err = classify_move_error(io::Error::from(io::ErrorKind::NotFound), &src, &dest);
        match err.downcast_ref::<GalleryMoveError>() {
            Some(GalleryMoveError::DirectoryNotFound(p)) => assert_eq!(p, &td.path().join("missing")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn vanished_source_is_source_not_found() {
        let td = tempdir().unwrap();
        let src = td.path().join("gone.JPG");
        let dest = td.path().join("gallery-1.jpg");
        let err = classify_move_error(io::Error::from(io::ErrorKind::NotFound), &src, &dest);
        assert!(matches!(
            err.downcast_ref::<GalleryMoveError>(),
            Some(GalleryMoveError::SourceNotFound(_))
        ));
    }

    #[test]
    fn permission_denied_is_typed() {
        let td = tempdir().unwrap();
        let err = classify_move_error(
            io::Error::from(io::ErrorKind::PermissionDenied),
            &td.path().join("a.JPG"),
            &td.path().join("gallery-1.jpg"),
        );
        assert!(matches!(
            err.downcast_ref::<GalleryMoveError>(),
            Some(GalleryMoveError::PermissionDenied { .. })
        ));
    }
}
