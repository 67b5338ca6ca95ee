//! Scoring a dish against a wine.
//!
//! The [`PairingScorer`] trait assigns a [`MatchResult`] to a
//! [`DishProfile`](crate::DishProfile) and [`WineProfile`](crate::WineProfile)
//! pair, using a [`RuleBook`](crate::RuleBook) to annotate fired rules.

use crate::{DishProfile, RuleBook, RuleCategory, RuleRecord, WineProfile};

/// Outcome of scoring one wine for one dish.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchResult {
    /// Name of the scored wine.
    pub wine_name: String,
    /// Sum of every fired rule's delta.
    pub score: i32,
    /// Fired rules in evaluation order.
    pub details: Vec<RuleRecord>,
    /// Short prose explanation of the pairing.
    pub explanation: String,
}

impl MatchResult {
    /// Categories of rules that counted in the wine's favour, in firing order
    /// and without repeats.
    #[must_use]
    pub fn positive_categories(&self) -> Vec<RuleCategory> {
        let mut seen = Vec::new();
        for record in self.details.iter().filter(|record| record.is_positive()) {
            if !seen.contains(&record.category) {
                seen.push(record.category);
            }
        }
        seen
    }
}

/// Score a dish and wine pairing.
///
/// Higher scores indicate a better pairing. Implementations must be
/// thread-safe (`Send` + `Sync`) so a ranking can be shared across threads.
/// Scoring is infallible: missing information simply fires fewer rules.
///
/// # Examples
///
/// ```rust
/// use sommelier_core::{
///     DishProfile, MatchResult, PairingScorer, Record, RecordBatch, RuleBook, WineProfile,
/// };
///
/// struct FlatScorer;
///
/// impl PairingScorer for FlatScorer {
///     fn score_match(&self, _dish: &DishProfile, wine: &WineProfile, _rules: &RuleBook) -> MatchResult {
///         MatchResult {
///             wine_name: wine.name.clone(),
///             score: 1,
///             details: Vec::new(),
///             explanation: String::new(),
///         }
///     }
/// }
///
/// let dishes = RecordBatch::new(vec![Record::from_pairs([("Speisename", "Steak")])]);
/// let wines = RecordBatch::new(vec![Record::from_pairs([("Weinname", "Barolo")])]);
/// let dish = DishProfile::from_record(&dishes.rows().next().unwrap());
/// let wine = WineProfile::from_record(&wines.rows().next().unwrap());
/// let result = FlatScorer.score_match(&dish, &wine, &RuleBook::new());
/// assert_eq!(result.score, 1);
/// assert_eq!(result.wine_name, "Barolo");
/// ```
pub trait PairingScorer: Send + Sync {
    /// Score `wine` as a partner for `dish`.
    fn score_match(&self, dish: &DishProfile, wine: &WineProfile, rules: &RuleBook)
    -> MatchResult;
}
