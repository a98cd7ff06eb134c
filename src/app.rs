//! Application orchestrator.
//! Loads and merges config, initializes logging, validates settings and runs the batch.
//! Maps failures to exit codes: typed errors use their own code, anything else exits 1.

use anyhow::Result;
use std::process::ExitCode;
use tracing::{debug, error, info};

use gallery_move::cli::Args;
use gallery_move::config::{CONFIG_ENV, load_config_file, resolve_config_path};
use gallery_move::output as out;
use gallery_move::{Config, GalleryMoveError, run_batch};

use crate::logging::init_tracing;

/// Exit code for a failed run; typed errors carry their own.
fn exit_code_for(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<GalleryMoveError>()
        .map(|ge| ge.code())
        .and_then(|c| u8::try_from(c).ok())
        .unwrap_or(1)
}

fn report_failure(e: &anyhow::Error) {
    if let Some(ge) = e.downcast_ref::<GalleryMoveError>() {
        error!(code = ge.code(), kind = ge.kind(), error = %ge, "Run failed");
    } else {
        error!(error = %format!("{e:#}"), "Run failed");
    }
}

fn print_config_location(args: &Args) {
    match resolve_config_path(args.config.as_deref()) {
        Some((path, true)) => {
            out::print_info(&format!("Using explicit config file:\n  {}", path.display()));
            if args.config.is_none() {
                out::print_info(&format!("(from {CONFIG_ENV})"));
            }
        }
        Some((path, false)) => {
            out::print_info(&format!("Default gallery_move config path:\n  {}", path.display()));
            if !path.exists() {
                out::print_info("No config file exists there; flags and defaults are used.");
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
}

/// Load the config file and merge the flags over it.
fn build_config(args: &Args) -> Result<Config> {
    let file = load_config_file(args.config.as_deref())?;
    args.build_config(file)
}

/// Run the CLI application.
pub fn run(args: Args) -> ExitCode {
    if args.print_config {
        print_config_location(&args);
        return ExitCode::SUCCESS;
    }

    // Logging isn't up yet: report config problems directly.
    let cfg = match build_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            return ExitCode::from(exit_code_for(&e));
        }
    };

    // Held until the end of run() so the file appender flushes.
    let _guard = match init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e:#}"));
            return ExitCode::FAILURE;
        }
    };

    debug!(?args, "Starting gallery_move");

    let result = cfg.validate().and_then(|()| run_batch(&cfg));
    match result {
        Ok(report) => {
            info!(moved = report.count(), dest = %cfg.dest_dir.display(), "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            out::print_error(&format!("{e:#}"));
            ExitCode::from(exit_code_for(&e))
        }
    }
}
