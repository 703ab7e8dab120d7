//! Triggerscan CLI entry point.

use clap::Parser;
use triggerscan::cli::{self, Cli, EXIT_ERROR};

fn main() {
    let args = Cli::parse();

    let exit_code = match cli::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
