//! Medir CLI
//!
//! Binary classification evaluation metrics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate the built-in example matrix
//! medir demo
//!
//! # Evaluate caller-supplied counts
//! medir eval --tp 80 --fn 20 --fp 10 --tn 90
//!
//! # Evaluate from a JSON spec file, as JSON
//! medir eval counts.json --format json
//! ```

use clap::Parser;
use medir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
