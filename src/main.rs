//! Binary entrypoint for the `spec-manager` CLI.

use std::process::ExitCode;

use spec_manager::Error;

fn main() -> ExitCode {
    match spec_manager::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(err)) => {
            let _ = err.print();
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
