//! Resolving a free-text dish query against the menu.

use sommelier_core::{Attribute, RecordBatch};

/// Name of the dish best matching `query`, exactly as stored on the menu.
///
/// An exact case-insensitive name wins; otherwise the first dish whose name
/// contains the query is chosen.
pub(crate) fn find_dish<'a>(dishes: &'a RecordBatch, query: &str) -> Option<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let names: Vec<&'a str> = dishes
        .rows()
        .filter_map(|row| row.get(Attribute::DishName))
        .collect();

    names
        .iter()
        .find(|name| name.trim().to_lowercase() == needle)
        .or_else(|| {
            names
                .iter()
                .find(|name| name.to_lowercase().contains(&needle))
        })
        .copied()
}
