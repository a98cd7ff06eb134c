use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = gallery_move::cli::parse();
    app::run(args)
}
