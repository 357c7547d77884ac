use clap::Parser;
use seal_sweep::utils::logging;
use std::process::ExitCode;
use sweeper::cli::{run, Cli};

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Parses the command line and runs the requested sweep
#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
