//! `kata dominoes`: decide whether tiles chain, optionally showing a chain.

use clap::Args;
use tracing::debug;

use kata_graph::{arrange, can_chain, Domino};

use crate::error::CliResult;

/// Arguments for the dominoes command.
#[derive(Args, Debug)]
pub struct DominoesArgs {
    /// Tiles as `left:right`, e.g. `1:1 2:2 1:2`. Tiles with a negative
    /// left face go after `--`.
    pub tiles: Vec<String>,

    /// Print one valid arrangement instead of true/false
    #[arg(long)]
    pub arrange: bool,
}

/// Handle the dominoes command.
pub fn handle_dominoes(args: DominoesArgs) -> i32 {
    super::finish("dominoes", run(&args))
}

pub(crate) fn run(args: &DominoesArgs) -> CliResult<Vec<String>> {
    let tiles = args
        .tiles
        .iter()
        .map(|t| t.parse::<Domino>())
        .collect::<Result<Vec<_>, _>>()?;
    debug!(tiles = tiles.len(), "dominoes parsed");

    if args.arrange {
        let line = match arrange(&tiles) {
            Some(chain) if chain.is_empty() => "(empty)".to_string(),
            Some(chain) => chain.to_string(),
            None => "no chain".to_string(),
        };
        return Ok(vec![line]);
    }

    Ok(vec![can_chain(&tiles).to_string()])
}
