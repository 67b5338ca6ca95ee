//! Pairing rule categories, their external metadata and fired-rule records.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::{Attribute, ParseCategoryError, RecordBatch};

/// One of the fixed pairing heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleCategory {
    /// Dish weight against wine body.
    IntensityMatch,
    /// Wine colour against dish family.
    ColourAndDishType,
    /// Wine acidity must reach the dish's.
    AcidityBalance,
    /// Acidity cutting through fat.
    AcidityFat,
    /// Tannin against fat and protein.
    TanninVsFat,
    /// Tannin against fish.
    TanninVsFish,
    /// Residual sugar against dish sweetness.
    SweetnessBalance,
    /// Salt softening tannin.
    Salt,
    /// Umami amplifying tannin.
    Umami,
    /// Heat against sugar and alcohol.
    SpiceHeat,
    /// Bitterness against tannin.
    Bitterness,
    /// Creamy textures against bubbles or acidity.
    Texture,
    /// Chilled sparkling wine with light dishes.
    Temperature,
}

impl RuleCategory {
    /// Every category, in evaluation order.
    pub const ALL: [Self; 13] = [
        Self::IntensityMatch,
        Self::ColourAndDishType,
        Self::AcidityBalance,
        Self::AcidityFat,
        Self::TanninVsFat,
        Self::TanninVsFish,
        Self::SweetnessBalance,
        Self::Salt,
        Self::Umami,
        Self::SpiceHeat,
        Self::Bitterness,
        Self::Texture,
        Self::Temperature,
    ];

    /// Display name, also the key used in rule metadata sheets.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IntensityMatch => "Intensity match",
            Self::ColourAndDishType => "Color & dish type",
            Self::AcidityBalance => "Acidity balance",
            Self::AcidityFat => "Acidity-fat",
            Self::TanninVsFat => "Tannin vs fat",
            Self::TanninVsFish => "Tannin vs fish",
            Self::SweetnessBalance => "Sweetness balance",
            Self::Salt => "Salt",
            Self::Umami => "Umami",
            Self::SpiceHeat => "Spice/heat",
            Self::Bitterness => "Bitterness",
            Self::Texture => "Texture",
            Self::Temperature => "Temperature",
        }
    }

    /// Key used for this category by German-language rule sheets.
    #[must_use]
    pub const fn german_label(self) -> &'static str {
        match self {
            Self::IntensityMatch => "Intensitätsabgleich (Gewicht)",
            Self::ColourAndDishType => "Weinfarbe & Speiseart",
            Self::AcidityBalance => "Säure-Balance",
            Self::AcidityFat => "Säure-Fett",
            Self::TanninVsFat => "Tannin vs Fett",
            Self::TanninVsFish => "Tannin vs Fisch",
            Self::SweetnessBalance => "Süße-Balance",
            Self::Salt => "Salz",
            Self::Umami => "Umami",
            Self::SpiceHeat => "Würze/Schärfe",
            Self::Bitterness => "Bitterkeit",
            Self::Texture => "Textur",
            Self::Temperature => "Temperatur",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RuleCategory {
    type Err = ParseCategoryError;

    /// Accept the English or German label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.label().to_lowercase() == wanted
                    || category.german_label().to_lowercase() == wanted
            })
            .ok_or_else(|| ParseCategoryError::new("rule category", s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RuleCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RuleCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Citation and description attached to a rule category by the rule sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleMetadata {
    /// Longer description of the heuristic.
    pub description: String,
    /// Where the heuristic comes from.
    pub source: String,
}

/// Rule metadata keyed by category.
///
/// # Examples
/// ```
/// use sommelier_core::{Record, RecordBatch, RuleBook, RuleCategory};
///
/// let sheet = RecordBatch::new(vec![Record::from_pairs([
///     ("Kategorie", "Säure-Balance"),
///     ("Regelbeschreibung", "Acid should match or exceed the dish."),
///     ("Quelle", "WSET Level 3"),
/// ])]);
/// let rules = RuleBook::from_records(&sheet);
/// let meta = rules.get(RuleCategory::AcidityBalance).unwrap();
/// assert_eq!(meta.source, "WSET Level 3");
/// assert!(rules.get(RuleCategory::Salt).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleBook {
    entries: HashMap<RuleCategory, RuleMetadata>,
}

impl RuleBook {
    /// A book with no metadata; every rule record gets empty strings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a rule sheet.
    ///
    /// Rows without a category are skipped, rows naming an unknown category
    /// are skipped with a warning, and later rows override earlier ones.
    #[must_use]
    pub fn from_records(records: &RecordBatch) -> Self {
        let mut book = Self::new();
        for row in records.rows() {
            let raw = row.get_or_default(Attribute::RuleCategory);
            if raw.trim().is_empty() {
                continue;
            }
            match raw.parse::<RuleCategory>() {
                Ok(category) => book.insert(
                    category,
                    RuleMetadata {
                        description: row.get_or_default(Attribute::RuleDescription).to_owned(),
                        source: row.get_or_default(Attribute::RuleSource).to_owned(),
                    },
                ),
                Err(err) => log::warn!("skipping rule metadata row: {err}"),
            }
        }
        book
    }

    /// Set the metadata for a category.
    pub fn insert(&mut self, category: RuleCategory, metadata: RuleMetadata) {
        self.entries.insert(category, metadata);
    }

    /// Add metadata while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_entry(mut self, category: RuleCategory, metadata: RuleMetadata) -> Self {
        self.insert(category, metadata);
        self
    }

    /// Metadata for a category, if the sheet had any.
    #[must_use]
    pub fn get(&self, category: RuleCategory) -> Option<&RuleMetadata> {
        self.entries.get(&category)
    }

    /// Number of categories with metadata.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no category has metadata.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A rule that fired for one dish and wine.
///
/// Serialises with an extra `points` field carrying the signed delta text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRecord {
    /// Category of the rule.
    pub category: RuleCategory,
    /// Points added to the score; never zero.
    pub delta: i32,
    /// Why the rule fired.
    pub justification: &'static str,
    /// Description from the rule sheet, or empty.
    pub description: String,
    /// Source citation from the rule sheet, or empty.
    pub source: String,
}

impl RuleRecord {
    /// The delta with an explicit sign, e.g. `+2` or `-1`.
    #[must_use]
    pub fn points(&self) -> String {
        format!("{:+}", self.delta)
    }

    /// Report whether the rule counted in the wine's favour.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.delta > 0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RuleRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RuleRecord", 6)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("delta", &self.delta)?;
        state.serialize_field("points", &self.points())?;
        state.serialize_field("justification", self.justification)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("source", &self.source)?;
        state.end()
    }
}
