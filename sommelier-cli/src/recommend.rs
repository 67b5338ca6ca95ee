//! Recommend command implementation for the sommelier CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sommelier_core::{DishCategory, MatchResult, RuleBook};
use sommelier_scorer::{Ranker, RuleScorer};

use crate::exclusions::{Exclusion, filter_wines, parse_exclusions};
use crate::records::load_records;
use crate::search::find_dish;
use crate::{
    ARG_RECOMMEND_DATA_DIR, ARG_RECOMMEND_DISH, ARG_RECOMMEND_DISHES, ARG_RECOMMEND_EXCLUDE,
    ARG_RECOMMEND_LIMIT, ARG_RECOMMEND_RULES, ARG_RECOMMEND_WINES, CliError, ENV_RECOMMEND_DISH,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend wines for a dish by scoring every wine on the \
                 wine list against the dish's profile. The menu, wine list \
                 and rule metadata are JSON arrays of objects (dishes.json, \
                 wines.json, rules.json).",
    about = "Recommend wines for a dish"
)]
#[ortho_config(prefix = "SOMMELIER")]
pub(crate) struct RecommendArgs {
    /// Dish to pair; matched case-insensitively against the menu.
    #[arg(value_name = "dish")]
    #[serde(default)]
    pub(crate) dish: Option<String>,
    /// Directory containing the default data filenames.
    #[arg(long = ARG_RECOMMEND_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the menu (`dishes.json`).
    #[arg(long = ARG_RECOMMEND_DISHES, value_name = "path")]
    #[serde(default)]
    pub(crate) dishes: Option<Utf8PathBuf>,
    /// Override the path to the wine list (`wines.json`).
    #[arg(long = ARG_RECOMMEND_WINES, value_name = "path")]
    #[serde(default)]
    pub(crate) wines: Option<Utf8PathBuf>,
    /// Override the path to the rule metadata (`rules.json`).
    #[arg(long = ARG_RECOMMEND_RULES, value_name = "path")]
    #[serde(default)]
    pub(crate) rules: Option<Utf8PathBuf>,
    /// Number of wines to recommend.
    #[arg(long = ARG_RECOMMEND_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Wines to avoid, e.g. "kein Rotwein, nicht zu trocken".
    #[arg(long = ARG_RECOMMEND_EXCLUDE, value_name = "text")]
    #[serde(default)]
    pub(crate) exclude: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Free-text dish query.
    pub(crate) dish: String,
    /// Path to the menu.
    pub(crate) dishes: Utf8PathBuf,
    /// Path to the wine list.
    pub(crate) wines: Utf8PathBuf,
    /// Path to the rule metadata.
    pub(crate) rules: Utf8PathBuf,
    /// Number of wines to recommend.
    pub(crate) limit: usize,
    /// Wines to avoid.
    pub(crate) exclusions: Vec<Exclusion>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.dishes, ARG_RECOMMEND_DISHES)?;
        Self::require_existing(&self.wines, ARG_RECOMMEND_WINES)?;
        Self::require_existing(&self.rules, ARG_RECOMMEND_RULES)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match crate::fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let dish = args
            .dish
            .filter(|query| !query.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_RECOMMEND_DISH,
                env: ENV_RECOMMEND_DISH,
            })?;

        let data_dir = args.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let dishes = args
            .dishes
            .unwrap_or_else(|| data_dir.join("dishes.json"));
        let wines = args.wines.unwrap_or_else(|| data_dir.join("wines.json"));
        let rules = args.rules.unwrap_or_else(|| data_dir.join("rules.json"));
        let limit = args.limit.unwrap_or(Ranker::<RuleScorer>::DEFAULT_LIMIT);
        let exclusions = args
            .exclude
            .as_deref()
            .map(parse_exclusions)
            .unwrap_or_default();

        Ok(Self {
            dish,
            dishes,
            wines,
            rules,
            limit,
            exclusions,
        })
    }
}

/// JSON document printed by the `recommend` command.
#[derive(Debug, Serialize)]
pub(crate) struct Recommendation {
    /// Menu name of the dish the query resolved to.
    pub(crate) dish: String,
    /// Category the dish was classified as.
    pub(crate) category: DishCategory,
    /// Exclusions applied to the wine list.
    pub(crate) excluded: Vec<Exclusion>,
    /// Best wines, highest score first.
    pub(crate) recommendations: Vec<MatchResult>,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendation = execute_recommend(args)?;
    write_recommendation(writer, &recommendation)
}

fn execute_recommend(args: RecommendArgs) -> Result<Recommendation, CliError> {
    let config = resolve_recommend_config(args)?;
    let dishes = load_records(&config.dishes, ARG_RECOMMEND_DISHES)?;
    let wines = load_records(&config.wines, ARG_RECOMMEND_WINES)?;
    let rules = RuleBook::from_records(&load_records(&config.rules, ARG_RECOMMEND_RULES)?);

    let dish_name = find_dish(&dishes, &config.dish).ok_or_else(|| CliError::DishNotFound {
        query: config.dish.clone(),
    })?;
    let candidates = filter_wines(&wines, &config.exclusions);
    let ranking = Ranker::new(RuleScorer)
        .with_limit(config.limit)
        .top_matches(dish_name, &dishes, &candidates, &rules)?;

    Ok(Recommendation {
        dish: ranking.dish.name,
        category: ranking.category,
        excluded: config.exclusions,
        recommendations: ranking.matches,
    })
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn write_recommendation(
    writer: &mut dyn Write,
    recommendation: &Recommendation,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(recommendation)
        .map_err(CliError::SerialiseRecommendation)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRecommendation)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRecommendation)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
