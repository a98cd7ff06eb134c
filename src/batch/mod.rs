//! Batch renamer: list matching files, sort them, give them sequential
//! `gallery-<n>.jpg` names and move them to the destination directory.

mod plan;
mod run;
mod scan;

pub use plan::{GALLERY_EXT, GALLERY_STEM, PlannedMove, gallery_name, plan_moves};
pub use run::{BatchReport, MovedFile, progress_line, run_batch, run_batch_with};
pub use scan::{Candidate, matches_filter, scan_candidates};
