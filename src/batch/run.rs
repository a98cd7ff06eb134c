//! Batch execution: scan, plan, then move each file in order.
//! Stops at the first failure; files already moved stay moved.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, error};

use crate::config::Config;
use crate::fs_ops::{MoveMethod, move_file};
use crate::output as out;

use super::plan::{PlannedMove, plan_moves};
use super::scan::scan_candidates;

/// A file that reached its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub method: MoveMethod,
}

/// Outcome of a completed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub moved: Vec<MovedFile>,
}

impl BatchReport {
    pub fn count(&self) -> usize {
        self.moved.len()
    }
}

/// The progress line printed before each move.
pub fn progress_line(planned: &PlannedMove) -> String {
    format!(
        "Moving {} to {}",
        planned.source.display(),
        planned.destination.display()
    )
}

/// Run the batch, printing a progress line on stdout before every move.
pub fn run_batch(config: &Config) -> Result<BatchReport> {
    run_batch_with(config, |planned| out::print_user(&progress_line(planned)))
}

/// Run the batch, calling `notify` before every move instead of printing.
pub fn run_batch_with<F>(config: &Config, mut notify: F) -> Result<BatchReport>
where
    F: FnMut(&PlannedMove),
{
    let candidates = scan_candidates(&config.source_dir, &config.prefix, &config.suffix)?;
    let plan = plan_moves(&candidates, &config.dest_dir, config.start_index)?;
    debug!(count = plan.len(), "Planned moves");

    let mut report = BatchReport::default();
    for planned in &plan {
        notify(planned);
        let method = move_file(&planned.source, &planned.destination).inspect_err(|e| {
            error!(
                src = %planned.source.display(),
                dest = %planned.destination.display(),
                moved_so_far = report.count(),
                error = %e,
                "Move failed; stopping batch"
            );
        })?;
        debug!(
            index = planned.index,
            src = %planned.source.display(),
            dest = %planned.destination.display(),
            method = method.as_str(),
            "Moved"
        );
        report.moved.push(MovedFile {
            source: planned.source.clone(),
            destination: planned.destination.clone(),
            method,
        });
    }

    debug!(moved = report.count(), "Batch complete");
    Ok(report)
}
