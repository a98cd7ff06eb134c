//! Candidate discovery: list the source directory, filter by prefix/suffix,
//! sort by name.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::GalleryMoveError;
use crate::fs_ops::io_error_with_help;

/// A source entry eligible for renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Entry name within the source directory
    pub name: String,
    /// Full path of the entry
    pub path: PathBuf,
}

/// Exact, case-sensitive prefix/suffix match on an entry name.
pub fn matches_filter(name: &str, prefix: &str, suffix: &str) -> bool {
    name.starts_with(prefix) && name.ends_with(suffix)
}

fn source_error(e: io::Error, dir: &Path) -> anyhow::Error {
    match e.kind() {
        io::ErrorKind::NotFound => GalleryMoveError::DirectoryNotFound(dir.to_path_buf()).into(),
        io::ErrorKind::NotADirectory => GalleryMoveError::NotADirectory(dir.to_path_buf()).into(),
        io::ErrorKind::PermissionDenied => GalleryMoveError::PermissionDenied {
            path: dir.to_path_buf(),
            context: format!("cannot read source directory: {e}"),
        }
        .into(),
        _ => io_error_with_help("read source directory", dir)(e),
    }
}

/// List `source_dir` and return the matching entries in ascending name order.
///
/// The whole listing is read before returning, so listing failures always
/// surface before the first move. Directories and names that are not valid
/// UTF-8 are never candidates.
pub fn scan_candidates(source_dir: &Path, prefix: &str, suffix: &str) -> Result<Vec<Candidate>> {
    let meta = fs::metadata(source_dir).map_err(|e| source_error(e, source_dir))?;
    if !meta.is_dir() {
        return Err(GalleryMoveError::NotADirectory(source_dir.to_path_buf()).into());
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(source_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source_dir).to_path_buf();
            match e.into_io_error() {
                Some(ioe) => source_error(ioe, &path),
                None => anyhow::anyhow!("read source directory '{}'", path.display()),
            }
        })?;

        if entry.file_type().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        if !matches_filter(name, prefix, suffix) {
            continue;
        }
        candidates.push(Candidate {
            name: name.to_string(),
            path: entry.path().to_path_buf(),
        });
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        source = %source_dir.display(),
        count = candidates.len(),
        "Scanned source directory"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn names(c: &[Candidate]) -> Vec<&str> {
        c.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn filter_is_case_sensitive() {
        assert!(matches_filter("DSCF0010.JPG", "DSCF", ".JPG"));
        assert!(!matches_filter("DSCF0010.jpg", "DSCF", ".JPG"));
        assert!(!matches_filter("dscf0010.JPG", "DSCF", ".JPG"));
        assert!(!matches_filter("IMG_0001.JPG", "DSCF", ".JPG"));
    }

    #[test]
    fn filters_and_sorts() {
        let dir = assert_fs::TempDir::new().unwrap();
        for n in ["DSCF0030.JPG", "DSCF0010.JPG", "notes.txt", "DSCF0020.JPG", "DSCF0040.RAF"] {
            dir.child(n).touch().unwrap();
        }
        let found = scan_candidates(dir.path(), "DSCF", ".JPG").unwrap();
        assert_eq!(names(&found), ["DSCF0010.JPG", "DSCF0020.JPG", "DSCF0030.JPG"]);
        assert_eq!(found[0].path, dir.path().join("DSCF0010.JPG"));
    }

    #[test]
    fn directories_are_skipped() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("DSCF_folder.JPG").create_dir_all().unwrap();
        dir.child("DSCF0001.JPG").touch().unwrap();
        let found = scan_candidates(dir.path(), "DSCF", ".JPG").unwrap();
        assert_eq!(names(&found), ["DSCF0001.JPG"]);
    }

    #[test]
    fn nested_files_are_not_scanned() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("sub/DSCF0001.JPG").touch().unwrap();
        assert!(scan_candidates(dir.path(), "DSCF", ".JPG").unwrap().is_empty());
    }

    #[test]
    fn sort_is_by_name_not_number() {
        let dir = assert_fs::TempDir::new().unwrap();
        for n in ["DSCF9.JPG", "DSCF10.JPG", "DSCF100.JPG"] {
            dir.child(n).touch().unwrap();
        }
        let found = scan_candidates(dir.path(), "DSCF", ".JPG").unwrap();
        assert_eq!(names(&found), ["DSCF10.JPG", "DSCF100.JPG", "DSCF9.JPG"]);
    }

    #[test]
    fn missing_source_is_directory_not_found() {
        let dir = assert_fs::TempDir::new().unwrap();
        let missing = dir.path().join("media");
        let err = scan_candidates(&missing, "DSCF", ".JPG").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GalleryMoveError>(),
            Some(GalleryMoveError::DirectoryNotFound(p)) if p == &missing
        ));
    }

    #[test]
    fn file_as_source_is_not_a_directory() {
        let dir = assert_fs::TempDir::new().unwrap();
        let f = dir.child("DSCF0001.JPG");
        f.touch().unwrap();
        let err = scan_candidates(f.path(), "DSCF", ".JPG").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GalleryMoveError>(),
            Some(GalleryMoveError::NotADirectory(_))
        ));
    }
}
