//! Rule-based wine pairing for sommelier dishes.
//!
//! The crate provides three layers on top of
//! [`sommelier_core`]:
//! - **Scoring**: [`RuleScorer`] implements
//!   [`PairingScorer`](sommelier_core::PairingScorer) with a fixed, ordered
//!   set of sommelier heuristics (intensity, colour, acidity, tannin,
//!   sweetness, salt, umami, heat, bitterness, texture and temperature).
//! - **Ranking**: [`Ranker`] scores every wine on a list for one dish,
//!   breaks ties randomly and keeps the best few.
//! - **Explanation**: [`describe`] turns the rules that favoured a wine into
//!   a short piece of prose.
//!
//! # Examples
//!
//! ```
//! use sommelier_core::{Record, RecordBatch, RuleBook};
//! use sommelier_scorer::top_matches;
//!
//! let menu = RecordBatch::new(vec![Record::from_pairs([
//!     ("Speisename", "Lachsfilet"),
//!     ("Fettgehalt", "mittel"),
//! ])]);
//! let wines = RecordBatch::new(vec![
//!     Record::from_pairs([("Weinname", "Barolo"), ("Farbe", "Rotwein"), ("Tannin", "hoch")]),
//!     Record::from_pairs([("Weinname", "Sancerre"), ("Farbe", "Weißwein")]),
//! ]);
//! let ranking = top_matches("Lachsfilet", &menu, &wines, &RuleBook::new(), 3)?;
//! assert_eq!(ranking.matches[0].wine_name, "Sancerre");
//! # Ok::<(), sommelier_scorer::RankError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod explain;
mod rank;

pub use engine::{RuleScorer, ScoreSheet, score_match};
pub use error::RankError;
pub use explain::describe;
pub use rank::{Ranker, Ranking, top_matches};
