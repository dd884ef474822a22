//! `kata merge`: merge two sorted number lists.

use clap::Args;
use tracing::warn;

use kata_core::merge_sorted;

use crate::error::CliResult;

/// Arguments for the merge command.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// First sorted list, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub a: Vec<f64>,

    /// Second sorted list, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub b: Vec<f64>,
}

/// Handle the merge command.
pub fn handle_merge(args: MergeArgs) -> i32 {
    super::finish("merge", run(&args))
}

pub(crate) fn run(args: &MergeArgs) -> CliResult<Vec<String>> {
    for (name, values) in [("a", &args.a), ("b", &args.b)] {
        if values.windows(2).any(|w| w[0] > w[1]) {
            warn!(list = name, "input is not sorted; merged order is unspecified");
        }
    }

    let merged: Vec<String> = merge_sorted(|| args.a.iter().copied(), || args.b.iter().copied())
        .map(|v| v.to_string())
        .collect();
    Ok(vec![merged.join(" ")])
}
