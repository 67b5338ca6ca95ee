//! Facade crate for the sommelier wine pairing engine.
//!
//! This crate re-exports the core domain types together with the rule-based
//! scorer and ranker.

#![forbid(unsafe_code)]

pub use sommelier_core::{
    AromaNote, AromaProfile, Attribute, DishCategory, DishProfile, MatchResult, Ordinal,
    OrdinalScale, PairingScorer, ParseCategoryError, Record, RecordBatch, RecordView, RuleBook,
    RuleCategory, RuleMetadata, RuleRecord, WineColour, WineProfile, parse_alcohol,
};

pub use sommelier_scorer::{
    RankError, Ranker, Ranking, RuleScorer, ScoreSheet, describe, score_match, top_matches,
};

#[cfg(feature = "test-support")]
pub use sommelier_core::ConstantScorer;
