//! `kata braces`: expand a brace pattern.

use clap::Args;
use tracing::debug;

use kata_core::expand_braces;

use crate::error::CliResult;

/// Arguments for the braces command.
#[derive(Args, Debug)]
pub struct BracesArgs {
    /// Pattern such as `~/{Downloads,Pictures}/*.{jpg,gif,png}`
    pub pattern: String,

    /// Stop after this many expansions
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle the braces command.
pub fn handle_braces(args: BracesArgs) -> i32 {
    super::finish("braces", run(&args))
}

pub(crate) fn run(args: &BracesArgs) -> CliResult<Vec<String>> {
    let expansions = expand_braces(&args.pattern)?;
    let lines: Vec<String> = expansions.take(args.limit.unwrap_or(usize::MAX)).collect();
    debug!(pattern = %args.pattern, count = lines.len(), "braces expanded");
    Ok(lines)
}
