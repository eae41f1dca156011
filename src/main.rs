//! Provides the main entry point to the program.
use h2plan::cli::run_cli;
use h2plan::log::is_logger_initialised;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    if let Err(err) = run_cli() {
        // The logger may not be set up if the failure happened early
        if is_logger_initialised() {
            error!("{err:?}");
        } else {
            eprintln!("Error: {err:?}");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
