//! Tabular rows and alias-aware field access.
//!
//! A [`RecordBatch`] holds the rows of one sheet (dishes, wines or rule
//! metadata). When the batch is built it resolves, once, which of its actual
//! column names answer each [`Attribute`]; row lookups then cost a handful of
//! map probes instead of a scan over every column per access.
//!
//! # Examples
//! ```
//! use sommelier_core::{Attribute, Record, RecordBatch};
//!
//! let wines = RecordBatch::new(vec![Record::from_pairs([
//!     ("weinname", "Spätburgunder"),
//!     ("Art", "Rotwein"),
//! ])]);
//! let row = wines.rows().next().unwrap();
//! assert_eq!(row.get(Attribute::WineName), Some("Spätburgunder"));
//! assert_eq!(row.get(Attribute::Colour), Some("Rotwein"));
//! assert_eq!(row.get_or(Attribute::Body, "mittel"), "mittel");
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::Attribute;

/// One row of a sheet: column name to raw cell text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Build a record from `(column, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Set a cell, replacing any previous value in that column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw value stored under an exact column name.
    #[must_use]
    pub fn column(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Column names present in this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Report whether every cell is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|value| value.trim().is_empty())
    }
}

/// Columns answering each attribute, in alias priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldIndex {
    columns: HashMap<Attribute, Vec<String>>,
}

impl FieldIndex {
    fn build<'a>(names: impl Iterator<Item = &'a str>) -> Self {
        let present: BTreeSet<&str> = names.collect();
        let mut folded: HashMap<String, Vec<&str>> = HashMap::new();
        for name in present.iter().copied() {
            folded.entry(name.to_lowercase()).or_default().push(name);
        }

        let mut columns = HashMap::new();
        for attribute in Attribute::ALL {
            let mut matches: Vec<String> = Vec::new();
            for alias in attribute.aliases() {
                // Exact spelling first, then every case variant seen in the batch.
                let exact = present.get(*alias).copied();
                let variants = folded
                    .get(&alias.to_lowercase())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                for column in exact.into_iter().chain(variants.iter().copied()) {
                    if !matches.iter().any(|seen| seen == column) {
                        matches.push(column.to_owned());
                    }
                }
            }
            if !matches.is_empty() {
                columns.insert(attribute, matches);
            }
        }
        Self { columns }
    }

    fn columns_for(&self, attribute: Attribute) -> &[String] {
        self.columns
            .get(&attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Rows of one sheet together with their resolved field index.
///
/// Batches are immutable; [`RecordBatch::filter`] produces a new batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    records: Vec<Record>,
    index: FieldIndex,
}

impl RecordBatch {
    /// Build a batch, dropping rows whose cells are all blank.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let kept: Vec<Record> = records
            .into_iter()
            .filter(|record| !record.is_blank())
            .collect();
        let index = FieldIndex::build(kept.iter().flat_map(Record::columns));
        Self {
            records: kept,
            index,
        }
    }

    /// Iterate over alias-aware views of each row.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = RecordView<'_>> + '_ {
        self.records.iter().map(|record| RecordView {
            record,
            index: &self.index,
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the batch holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return a new batch holding the rows accepted by `keep`.
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&RecordView<'_>) -> bool,
    {
        let records = self
            .rows()
            .filter(|row| keep(row))
            .map(|row| row.record.clone())
            .collect();
        Self::new(records)
    }
}

impl FromIterator<Record> for RecordBatch {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A borrowed row that resolves attributes through its batch's index.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    record: &'a Record,
    index: &'a FieldIndex,
}

impl<'a> RecordView<'a> {
    /// First value present for `attribute`, following alias priority.
    ///
    /// A blank cell counts as present.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&'a str> {
        let record = self.record;
        self.index
            .columns_for(attribute)
            .iter()
            .find_map(|column| record.column(column))
    }

    /// Value for `attribute`, or `default` when no alias is present.
    #[must_use]
    pub fn get_or(&self, attribute: Attribute, default: &'a str) -> &'a str {
        self.get(attribute).unwrap_or(default)
    }

    /// Value for `attribute`, or the attribute's own default text.
    #[must_use]
    pub fn get_or_default(&self, attribute: Attribute) -> &'a str {
        self.get_or(attribute, attribute.default_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn single(pairs: &[(&str, &str)]) -> RecordBatch {
        RecordBatch::new(vec![Record::from_pairs(pairs.iter().copied())])
    }

    #[rstest]
    fn first_listed_alias_wins() {
        let batch = single(&[("Typ", "Weißwein"), ("Farbe", "Rotwein")]);
        let row = batch.rows().next().expect("one row");
        assert_eq!(row.get(Attribute::Colour), Some("Rotwein"));
    }

    #[rstest]
    fn aliases_match_case_insensitively() {
        let batch = single(&[("KOERPER", "voll")]);
        let row = batch.rows().next().expect("one row");
        assert_eq!(row.get(Attribute::Body), Some("voll"));
    }

    #[rstest]
    fn exact_column_beats_case_variant() {
        let batch = single(&[("farbe", "Weißwein"), ("Farbe", "Rotwein")]);
        let row = batch.rows().next().expect("one row");
        assert_eq!(row.get(Attribute::Colour), Some("Rotwein"));
    }

    #[rstest]
    fn blank_cell_is_a_value_not_a_miss() {
        let batch = single(&[("Weinname", "Riesling"), ("Süße", "")]);
        let row = batch.rows().next().expect("one row");
        assert_eq!(row.get_or(Attribute::Sweetness, "mittel"), "");
    }

    #[rstest]
    fn ragged_rows_fall_through_to_later_aliases() {
        let batch = RecordBatch::new(vec![
            Record::from_pairs([("Farbe", "Rotwein")]),
            Record::from_pairs([("Color", "white")]),
        ]);
        let colours: Vec<_> = batch
            .rows()
            .map(|row| row.get(Attribute::Colour))
            .collect();
        assert_eq!(colours, vec![Some("Rotwein"), Some("white")]);
    }

    #[rstest]
    fn header_case_may_differ_between_rows() {
        let batch = RecordBatch::new(vec![
            Record::from_pairs([("Farbe", "Rotwein")]),
            Record::from_pairs([("farbe", "Weißwein")]),
            Record::from_pairs([("FARBE", "Rosé"), ("Typ", "Sekt")]),
        ]);
        let colours: Vec<_> = batch
            .rows()
            .map(|row| row.get(Attribute::Colour))
            .collect();
        assert_eq!(colours, vec![Some("Rotwein"), Some("Weißwein"), Some("Rosé")]);
    }

    #[rstest]
    fn missing_attribute_uses_default() {
        let batch = single(&[("Weinname", "Riesling")]);
        let row = batch.rows().next().expect("one row");
        assert_eq!(row.get_or_default(Attribute::Tannin), "niedrig");
        assert_eq!(row.get_or(Attribute::Colour, "?"), "?");
    }

    #[rstest]
    fn blank_rows_are_dropped() {
        let batch = RecordBatch::new(vec![
            Record::from_pairs([("Weinname", " "), ("Farbe", "")]),
            Record::from_pairs([("Weinname", "Riesling")]),
        ]);
        assert_eq!(batch.len(), 1);
    }

    #[rstest]
    fn filter_leaves_source_untouched() {
        let batch = RecordBatch::new(vec![
            Record::from_pairs([("Weinname", "A"), ("Farbe", "Rotwein")]),
            Record::from_pairs([("Weinname", "B"), ("Farbe", "Weißwein")]),
        ]);
        let whites = batch.filter(|row| row.get(Attribute::Colour) == Some("Weißwein"));
        assert_eq!(whites.len(), 1);
        assert_eq!(batch.len(), 2);
    }
}
