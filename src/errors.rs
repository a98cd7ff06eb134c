//! Typed error definitions for gallery_move.
//! Provides a small set of well-known failure modes for better logs, tests and exit codes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryMoveError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("Destination already exists, refusing to overwrite: {0}")]
    FileConflict(PathBuf),

    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Sequence overflow: start index {start} with {count} files exceeds u64")]
    IndexOverflow { start: u64, count: usize },

    #[error("Missing required setting `{0}` (set it in the config file or on the command line)")]
    MissingSetting(&'static str),
}

impl GalleryMoveError {
    /// Process exit code for this failure. Untyped errors exit with 1.
    pub fn code(&self) -> i32 {
        match self {
            GalleryMoveError::DirectoryNotFound(_) | GalleryMoveError::NotADirectory(_) => 2,
            GalleryMoveError::PermissionDenied { .. } => 3,
            GalleryMoveError::FileConflict(_) => 4,
            GalleryMoveError::SourceNotFound(_) => 5,
            GalleryMoveError::IndexOverflow { .. } => 6,
            GalleryMoveError::MissingSetting(_) => 7,
        }
    }

    /// Short machine-friendly name used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GalleryMoveError::DirectoryNotFound(_) => "directory_not_found",
            GalleryMoveError::NotADirectory(_) => "not_a_directory",
            GalleryMoveError::PermissionDenied { .. } => "permission_denied",
            GalleryMoveError::FileConflict(_) => "file_conflict",
            GalleryMoveError::SourceNotFound(_) => "source_not_found",
            GalleryMoveError::IndexOverflow { .. } => "index_overflow",
            GalleryMoveError::MissingSetting(_) => "missing_setting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_failure_class() {
        let conflict = GalleryMoveError::FileConflict(PathBuf::from("/g/gallery-1.jpg"));
        let missing = GalleryMoveError::DirectoryNotFound(PathBuf::from("/nope"));
        let denied = GalleryMoveError::PermissionDenied {
            path: PathBuf::from("/ro"),
            context: "rename".into(),
        };
        assert_eq!(conflict.code(), 4);
        assert_eq!(missing.code(), 2);
        assert_eq!(denied.code(), 3);
        assert_eq!(conflict.kind(), "file_conflict");
    }

    #[test]
    fn message_names_the_path() {
        let e = GalleryMoveError::DirectoryNotFound(PathBuf::from("/data/media"));
        assert!(e.to_string().contains("/data/media"));
    }
}
