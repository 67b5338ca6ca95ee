//! Command-line interface for the sommelier pairing engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod exclusions;
mod fs;
mod recommend;
mod records;
mod search;

pub use error::CliError;
use recommend::RecommendArgs;

const ARG_RECOMMEND_DISH: &str = "dish";
const ARG_RECOMMEND_DATA_DIR: &str = "data-dir";
const ARG_RECOMMEND_DISHES: &str = "dishes";
const ARG_RECOMMEND_WINES: &str = "wines";
const ARG_RECOMMEND_RULES: &str = "rules";
const ARG_RECOMMEND_LIMIT: &str = "limit";
const ARG_RECOMMEND_EXCLUDE: &str = "exclude";
const ENV_RECOMMEND_DISH: &str = "SOMMELIER_CMDS_RECOMMEND_DISH";

/// Environment variable holding the log filter for the binary.
pub const LOG_ENV: &str = "SOMMELIER_LOG";

/// Run the sommelier CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration or data files are
/// invalid, when no dish matches the query, or when writing output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sommelier",
    about = "Rule-based wine pairing for the dishes on a menu",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the wine list for one dish.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
