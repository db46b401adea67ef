use baseurl_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Stdout carries the resolved URL, so logs go to the state file when possible.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("baseurl error: {:#}", err);
        std::process::exit(1);
    }
}
