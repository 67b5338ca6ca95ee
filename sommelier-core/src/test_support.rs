//! Test-only scorers and fixtures shared by unit and behaviour tests.

use crate::{
    DishProfile, MatchResult, PairingScorer, Record, RecordBatch, RuleBook, WineProfile,
};

/// `PairingScorer` that gives every wine the same score and no details.
///
/// Useful for exercising tie handling in rankings.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConstantScorer(pub i32);

impl PairingScorer for ConstantScorer {
    fn score_match(&self, _dish: &DishProfile, wine: &WineProfile, _rules: &RuleBook) -> MatchResult {
        MatchResult {
            wine_name: wine.name.clone(),
            score: self.0,
            details: Vec::new(),
            explanation: String::new(),
        }
    }
}

/// Build a one-sheet batch from `(column, value)` rows.
#[must_use]
pub fn batch(rows: &[&[(&str, &str)]]) -> RecordBatch {
    rows.iter()
        .map(|row| Record::from_pairs(row.iter().copied()))
        .collect()
}

/// Wine list with one red, one white and one sparkling wine, German headers.
#[must_use]
pub fn sample_wines() -> RecordBatch {
    batch(&[
        &[
            ("Weinname", "Barolo"),
            ("Farbe", "Rotwein"),
            ("Körper", "voll"),
            ("Säure", "hoch"),
            ("Tannin", "hoch"),
            ("Süße", "trocken"),
            ("Alkoholgehalt", "14,5%"),
        ],
        &[
            ("Weinname", "Riesling Kabinett"),
            ("Farbe", "Weißwein"),
            ("Körper", "leicht"),
            ("Säure", "hoch"),
            ("Tannin", "niedrig"),
            ("Süße", "halbtrocken"),
            ("Alkoholgehalt", "10,5%"),
        ],
        &[
            ("Weinname", "Crémant de Loire"),
            ("Farbe", "Schaumwein"),
            ("Körper", "leicht"),
            ("Säure", "hoch"),
            ("Tannin", "niedrig"),
            ("Süße", "trocken"),
            ("Alkoholgehalt", "12%"),
        ],
    ])
}
