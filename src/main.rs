//! Poet CLI - Synthetic multi-module project generator

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = poet_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
