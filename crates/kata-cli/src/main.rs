//! Kata CLI
//!
//! Command-line access to the kata algorithms.
//!
//! # Commands
//!
//! - `traverse`: depth- or breadth-first walk of a JSON tree
//! - `merge`: merge two sorted number lists
//! - `dominoes`: decide whether tiles chain, or print a chain
//! - `word-search`: trace a word through a letter grid
//! - `braces`: expand a brace pattern
//!
//! Exit code 0 on success (including a `false` answer), 1 on IO errors or an
//! exhausted search budget, 2 on invalid configuration, 4 on invalid input.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use kata_core::{Config, LoggingConfig};

mod commands;
mod error;

use error::CliResult;

/// Kata CLI - tree traversal, sorted merging, dominoes and word search
#[derive(Parser)]
#[command(name = "kata")]
#[command(version)]
#[command(about = "Run the kata algorithms from the command line")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file (default: config/ directory and KATA__ env vars)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk a JSON tree depth- or breadth-first
    Traverse(commands::traverse::TraverseArgs),
    /// Merge two sorted number lists
    Merge(commands::merge::MergeArgs),
    /// Decide whether domino tiles form one chain
    Dominoes(commands::dominoes::DominoesArgs),
    /// Trace a word through a letter grid
    WordSearch(commands::word_search::WordSearchArgs),
    /// Expand a brace pattern
    Braces(commands::braces::BracesArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    init_logging(cli.verbose, &config.logging);

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Traverse(args) => commands::traverse::handle_traverse(args, &config),
        Commands::Merge(args) => commands::merge::handle_merge(args),
        Commands::Dominoes(args) => commands::dominoes::handle_dominoes(args),
        Commands::WordSearch(args) => commands::word_search::handle_word_search(args, &config),
        Commands::Braces(args) => commands::braces::handle_braces(args),
    };

    std::process::exit(exit_code);
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// `-v` flags win, then `RUST_LOG`, then the configured level.
fn log_filter(verbose: u8, logging: &LoggingConfig) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let builder = fmt()
        .with_env_filter(log_filter(verbose, logging))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.pretty().init(),
    }
}
