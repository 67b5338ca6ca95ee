//! Ranking every wine on a list for one dish.

use std::cmp::Reverse;

use rand::Rng;
use rand::seq::SliceRandom;
use sommelier_core::{
    Attribute, DishCategory, DishProfile, MatchResult, PairingScorer, RecordBatch, RuleBook,
    WineProfile,
};

use crate::{RankError, RuleScorer};

/// The best wines for one dish.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ranking {
    /// The dish the wines were ranked for.
    pub dish: DishProfile,
    /// Category the dish was classified as.
    pub category: DishCategory,
    /// Best matches, highest score first.
    pub matches: Vec<MatchResult>,
}

/// Scores every wine for a dish and keeps the best few.
///
/// Wines with equal scores come back in random relative order: the full
/// match list is shuffled before a stable sort by descending score.
///
/// # Examples
/// ```
/// use sommelier_core::{Record, RecordBatch, RuleBook};
/// use sommelier_scorer::{Ranker, RuleScorer};
///
/// let menu = RecordBatch::new(vec![Record::from_pairs([("Speisename", "Rinderfilet")])]);
/// let wines = RecordBatch::new(vec![
///     Record::from_pairs([("Weinname", "Barolo"), ("Farbe", "Rotwein")]),
///     Record::from_pairs([("Weinname", "Chablis"), ("Farbe", "Weißwein")]),
/// ]);
/// let ranking = Ranker::new(RuleScorer)
///     .with_limit(1)
///     .top_matches("Rinderfilet", &menu, &wines, &RuleBook::new())
///     .unwrap();
/// assert_eq!(ranking.matches.len(), 1);
/// assert_eq!(ranking.matches[0].wine_name, "Barolo");
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<S> {
    scorer: S,
    limit: usize,
}

impl<S> Ranker<S> {
    /// Number of matches kept unless configured otherwise.
    pub const DEFAULT_LIMIT: usize = 3;

    /// Rank with `scorer`, keeping [`Self::DEFAULT_LIMIT`] matches.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Keep at most `limit` matches.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for Ranker<RuleScorer> {
    fn default() -> Self {
        Self::new(RuleScorer)
    }
}

impl<S: PairingScorer> Ranker<S> {
    /// Rank `wines` for the dish named `dish_name`, breaking ties with the
    /// thread-local RNG.
    ///
    /// # Errors
    /// Returns [`RankError::DishNotFound`] when no row of `dishes` carries
    /// exactly that name.
    pub fn top_matches(
        &self,
        dish_name: &str,
        dishes: &RecordBatch,
        wines: &RecordBatch,
        rules: &RuleBook,
    ) -> Result<Ranking, RankError> {
        self.top_matches_with_rng(dish_name, dishes, wines, rules, &mut rand::thread_rng())
    }

    /// As [`Ranker::top_matches`], breaking ties with `rng`.
    ///
    /// # Errors
    /// Returns [`RankError::DishNotFound`] when no row of `dishes` carries
    /// exactly that name.
    pub fn top_matches_with_rng<R: Rng + ?Sized>(
        &self,
        dish_name: &str,
        dishes: &RecordBatch,
        wines: &RecordBatch,
        rules: &RuleBook,
        rng: &mut R,
    ) -> Result<Ranking, RankError> {
        let row = dishes
            .rows()
            .find(|row| row.get(Attribute::DishName) == Some(dish_name))
            .ok_or_else(|| RankError::DishNotFound {
                name: dish_name.to_owned(),
            })?;
        let dish = DishProfile::from_record(&row);

        let mut matches: Vec<MatchResult> = wines
            .rows()
            .map(|wine| {
                self.scorer
                    .score_match(&dish, &WineProfile::from_record(&wine), rules)
            })
            .collect();
        let scored = matches.len();
        matches.shuffle(rng);
        matches.sort_by_key(|result| Reverse(result.score));
        matches.truncate(self.limit);
        log::debug!(
            "ranked {scored} wines for {:?} ({}), keeping {}",
            dish.name,
            dish.category,
            matches.len()
        );

        Ok(Ranking {
            category: dish.category,
            dish,
            matches,
        })
    }
}

/// Rank `wines` for `dish_name` with [`RuleScorer`], keeping at most `limit`.
///
/// # Errors
/// Returns [`RankError::DishNotFound`] when no row of `dishes` carries
/// exactly that name.
pub fn top_matches(
    dish_name: &str,
    dishes: &RecordBatch,
    wines: &RecordBatch,
    rules: &RuleBook,
    limit: usize,
) -> Result<Ranking, RankError> {
    Ranker::new(RuleScorer)
        .with_limit(limit)
        .top_matches(dish_name, dishes, wines, rules)
}
