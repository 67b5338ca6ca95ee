//! Error types raised while ranking wines for a dish.

use thiserror::Error;

/// Errors raised by [`Ranker`](crate::Ranker) and
/// [`top_matches`](crate::top_matches).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// No menu row carries the requested dish name.
    #[error("dish '{name}' not found")]
    DishNotFound {
        /// Name that was looked up.
        name: String,
    },
}
