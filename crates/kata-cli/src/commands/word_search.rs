//! `kata word-search`: trace a word through a letter grid.

use clap::Args;
use tracing::debug;

use kata_core::Config;
use kata_graph::{Grid, SearchParams};

use crate::error::CliResult;

/// Arguments for the word-search command.
#[derive(Args, Debug)]
pub struct WordSearchArgs {
    /// Word to find
    #[arg(short, long)]
    pub word: String,

    /// Grid rows, top to bottom (rows may differ in length)
    #[arg(required = true)]
    pub rows: Vec<String>,

    /// Compare letters exactly (overrides config)
    #[arg(long)]
    pub case_sensitive: bool,

    /// Give up after this many path extensions (overrides config)
    #[arg(long)]
    pub max_steps: Option<u64>,

    /// Print the cell path instead of true/false
    #[arg(long)]
    pub path: bool,
}

/// Handle the word-search command.
pub fn handle_word_search(args: WordSearchArgs, config: &Config) -> i32 {
    super::finish("word-search", run(&args, config))
}

pub(crate) fn run(args: &WordSearchArgs, config: &Config) -> CliResult<Vec<String>> {
    let mut params = SearchParams::from(&config.search);
    if args.case_sensitive {
        params = params.case_insensitive(false);
    }
    if let Some(steps) = args.max_steps {
        params = params.max_steps(steps);
    }

    let grid = Grid::new(&args.rows);
    debug!(
        rows = grid.row_count(),
        cells = grid.cell_count(),
        word = %args.word,
        "searching grid"
    );
    let found = grid.search(&args.word, &params)?;

    if args.path {
        let line = match found {
            Some(path) => path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            None => "not found".to_string(),
        };
        return Ok(vec![line]);
    }

    Ok(vec![found.is_some().to_string()])
}
