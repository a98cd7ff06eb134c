//! Core library for `gallery_move`.
//!
//! Lists the files in a source directory that match a prefix/suffix filter,
//! sorts them by name, and moves each one into a destination directory as
//! `gallery-<n>.jpg`, numbering from a configurable start index.
//!
//! The binary is a thin wrapper: parse flags, load the config file, set up
//! tracing, call [`run_batch`].

pub mod batch;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;

pub use batch::{BatchReport, Candidate, MovedFile, PlannedMove, gallery_name, plan_moves, run_batch, scan_candidates};
pub use config::{Config, FileConfig, LogLevel, default_config_path, load_config_file, path_has_symlink_ancestor};
pub use errors::GalleryMoveError;
pub use fs_ops::{MoveMethod, move_file};
