mod convert;
mod utils;

use std::process::ExitCode;
use std::time::Instant;

use crate::cli::Cli;
use crate::report::{Status, init_logging};

/// The main function to run the conversion based on CLI input.
pub fn run(cli: Cli) -> ExitCode {
    let started = Instant::now();
    init_logging(cli.logging);
    let status = Status::new(cli.logging);

    match convert::run(&cli, &status) {
        Ok(()) => {
            status.succeed(started.elapsed());
            ExitCode::SUCCESS
        }
        Err(err) => {
            status.fail(&err);
            ExitCode::FAILURE
        }
    }
}
