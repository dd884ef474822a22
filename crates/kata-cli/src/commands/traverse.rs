//! `kata traverse`: walk a JSON tree depth- or breadth-first.
//!
//! The input file holds one nested node, `{ "value": ..., "children": [...] }`.
//! A node without `children` is a leaf.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde_json::Value;
use tracing::{info, warn};

use kata_core::Config;
use kata_graph::{bfs_traverse, dfs_traverse, NestedNode, TraversalParams, Tree};

use crate::error::{CliError, CliResult};

/// Traversal order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    /// Pre-order, first child first
    #[default]
    Depth,
    /// Level order
    Breadth,
}

/// Arguments for the traverse command.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    /// JSON file containing the nested tree
    #[arg(short, long)]
    pub file: PathBuf,

    /// Traversal order
    #[arg(short, long, value_enum, default_value_t = TraversalOrder::Depth)]
    pub order: TraversalOrder,

    /// Do not expand nodes deeper than this (overrides config)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Stop after this many nodes (overrides config)
    #[arg(long)]
    pub max_nodes: Option<usize>,

    /// Print a JSON array of values instead of an indented outline
    #[arg(long)]
    pub json: bool,
}

/// Handle the traverse command.
pub fn handle_traverse(args: TraverseArgs, config: &Config) -> i32 {
    super::finish("traverse", run(&args, config))
}

pub(crate) fn run(args: &TraverseArgs, config: &Config) -> CliResult<Vec<String>> {
    let content = std::fs::read_to_string(&args.file)?;
    let nested: NestedNode<Value> = serde_json::from_str(&content)?;
    let (tree, root) = Tree::from_nested(nested);

    let mut params = TraversalParams::from(&config.traversal);
    if let Some(depth) = args.max_depth {
        params = params.max_depth(depth);
    }
    if let Some(nodes) = args.max_nodes {
        if nodes == 0 {
            return Err(CliError::invalid_input("--max-nodes must be greater than 0"));
        }
        params = params.max_nodes(nodes);
    }

    let result = match args.order {
        TraversalOrder::Depth => dfs_traverse(&tree, root, params)?,
        TraversalOrder::Breadth => bfs_traverse(&tree, root, params)?,
    };

    if result.truncated {
        warn!(
            visited = result.node_count(),
            total = tree.len(),
            "traversal stopped at the node limit"
        );
    }
    info!(
        order = ?args.order,
        nodes = result.node_count(),
        "traversal complete"
    );

    let values = result.visited_order.iter().filter_map(|&id| tree.payload(id));
    if args.json {
        let array = Value::Array(values.cloned().collect());
        return Ok(vec![serde_json::to_string(&array)?]);
    }

    Ok(result
        .visited_order
        .iter()
        .filter_map(|&id| {
            let depth = result.depths.get(&id).copied().unwrap_or(0);
            tree.payload(id)
                .map(|value| format!("{}{}", "  ".repeat(depth), render(value)))
        })
        .collect())
}

/// Strings print bare, everything else as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
