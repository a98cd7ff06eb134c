//! Filesystem operations: the single-file move primitive and its helpers.

mod atomic;
mod copy;
mod file_move;
mod helpers;
mod io_copy;
mod util;

pub use file_move::{MoveMethod, move_file};
pub use helpers::io_error_with_help;
