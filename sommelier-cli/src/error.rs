//! Error types emitted by the sommelier CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use sommelier_scorer::RankError;
use thiserror::Error;

/// Errors emitted by the sommelier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the configuration field involved.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced data file does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the configuration field involved.
        field: &'static str,
        /// Path of the data file involved.
        path: Utf8PathBuf,
    },
    /// A referenced data path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the configuration field involved.
        field: &'static str,
        /// Path of the data file involved.
        path: Utf8PathBuf,
    },
    /// A referenced data path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the configuration field involved.
        field: &'static str,
        /// Path of the data file involved.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Opening a data file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenData {
        /// Name of the configuration field involved.
        field: &'static str,
        /// Path of the data file involved.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A data file is not a JSON array of objects.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseData {
        /// Name of the configuration field involved.
        field: &'static str,
        /// Path of the data file involved.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// A data cell holds a nested array or object.
    #[error("{field} row {row} column {column:?} in {path:?} must be a string, number or boolean")]
    UnsupportedCell {
        /// Name of the configuration field involved.
        field: &'static str,
        /// Path of the data file involved.
        path: Utf8PathBuf,
        /// Row index of the offending cell.
        row: usize,
        /// Column name of the offending cell.
        column: String,
    },
    /// No dish on the menu matches the query.
    #[error("no dish matching {query:?}")]
    DishNotFound {
        /// Dish query that matched nothing.
        query: String,
    },
    /// Ranking the wine list failed.
    #[error(transparent)]
    Rank(#[from] RankError),
    /// Serialising the recommendation failed.
    #[error("failed to serialise recommendation: {0}")]
    SerialiseRecommendation(#[source] serde_json::Error),
    /// Writing the recommendation failed.
    #[error("failed to write recommendation: {0}")]
    WriteRecommendation(#[source] std::io::Error),
}
