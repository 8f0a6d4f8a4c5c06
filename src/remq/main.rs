//! # Remq Binary
//!
//! The binary is intentionally thin: everything user-facing lives in
//! `cli/`, everything else in the `remq` library. This file only invokes
//! `cli::run()` and turns an error into the JSON error object and exit
//! status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
