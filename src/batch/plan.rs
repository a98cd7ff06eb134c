//! Rename mapping: ordered candidates -> `gallery-<n>.jpg` destinations.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::errors::GalleryMoveError;

use super::scan::Candidate;

pub const GALLERY_STEM: &str = "gallery-";
pub const GALLERY_EXT: &str = ".jpg";

/// One entry of the rename mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    /// Sequence number used in the generated name
    pub index: u64,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Generated file name for sequence number `n`.
pub fn gallery_name(n: u64) -> String {
    format!("{GALLERY_STEM}{n}{GALLERY_EXT}")
}

/// Assign `start_index + i` to the i-th candidate.
///
/// Fails with `IndexOverflow` before anything is planned if the last number
/// would not fit in a u64.
pub fn plan_moves(candidates: &[Candidate], dest_dir: &Path, start_index: u64) -> Result<Vec<PlannedMove>> {
    if let Some(last_offset) = candidates.len().checked_sub(1) {
        let fits = u64::try_from(last_offset)
            .ok()
            .and_then(|off| start_index.checked_add(off))
            .is_some();
        if !fits {
            return Err(GalleryMoveError::IndexOverflow {
                start: start_index,
                count: candidates.len(),
            }
            .into());
        }
    }

    // Offsets are bounded by the check above, so the additions can't overflow.
    Ok(candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let index = start_index + i as u64;
            PlannedMove {
                index,
                source: c.path.clone(),
                destination: dest_dir.join(gallery_name(index)),
            }
        })
        .collect())
}
