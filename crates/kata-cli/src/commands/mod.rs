//! Command handlers
//!
//! Each subcommand has a `run` function that does the work and returns the
//! lines to print, and a `handle` function that prints them and maps the
//! outcome to an exit code.

pub mod braces;
pub mod dominoes;
pub mod merge;
pub mod traverse;
pub mod word_search;

use tracing::error;

use crate::error::CliResult;

/// Print `lines` to stdout, or report the error. Returns the exit code.
pub(crate) fn finish(command: &str, outcome: CliResult<Vec<String>>) -> i32 {
    match outcome {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            0
        }
        Err(e) => {
            error!(command, code = e.error_code(), "{}", e);
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
