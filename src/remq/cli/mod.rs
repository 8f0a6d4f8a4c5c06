//! # CLI Behavior
//!
//! Remq's CLI answers with machine-readable JSON only: one value on stdout
//! per successful run, or `{"error": "<message>"}` on stderr with exit
//! status 1.
//!
//! For the overall architecture, see the library documentation.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `setup`: Argument parsing via clap
//! - `print`: JSON emission for results and errors
//! - `logging`: env_logger setup (stderr, `-v` for debug)

mod commands;
mod logging;
mod print;
mod setup;

pub use commands::run;
pub use print::print_error;
