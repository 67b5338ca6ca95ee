//! Core domain types for the sommelier pairing engine.
//!
//! Menus, wine lists and rule sheets arrive as loosely structured rows
//! ([`Record`]) whose headers vary between German and English. This crate
//! resolves those headers through [`Attribute`] aliases, normalises the
//! qualitative text onto an [`Ordinal`] scale and produces the
//! [`DishProfile`] and [`WineProfile`] values that a [`PairingScorer`]
//! compares.
//!
//! # Examples
//!
//! ```
//! use sommelier_core::{DishCategory, DishProfile, Ordinal, Record, RecordBatch};
//!
//! let menu = RecordBatch::new(vec![Record::from_pairs([
//!     ("Speisename", "Lachs mit Dill"),
//!     ("Fettgehalt", "hoch"),
//! ])]);
//! let dish = DishProfile::from_record(&menu.rows().next().unwrap());
//! assert_eq!(dish.category, DishCategory::Fish);
//! assert_eq!(dish.fat, Ordinal::High);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attribute;
pub mod colour;
pub mod dish;
mod error;
pub mod ordinal;
pub mod pairing;
pub mod record;
pub mod rule;
pub mod wine;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attribute::Attribute;
pub use colour::WineColour;
pub use dish::{AromaNote, AromaProfile, DishCategory, DishProfile};
pub use error::ParseCategoryError;
pub use ordinal::{Ordinal, OrdinalScale, parse_alcohol};
pub use pairing::{MatchResult, PairingScorer};
pub use record::{Record, RecordBatch, RecordView};
pub use rule::{RuleBook, RuleCategory, RuleMetadata, RuleRecord};
pub use wine::WineProfile;

#[cfg(any(test, feature = "test-support"))]
pub use test_support::ConstantScorer;
