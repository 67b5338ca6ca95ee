//! Dishes: keyword classification, aroma notes and normalised profiles.

use std::fmt;
use std::str::FromStr;

use crate::{Attribute, Ordinal, OrdinalScale, ParseCategoryError, RecordView};

/// Broad family of a dish, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DishCategory {
    /// Fish and seafood.
    Fish,
    /// Duck, chicken, quail and other fowl.
    Poultry,
    /// Beef, veal, venison, lamb.
    RedMeat,
    /// Sweet courses.
    Dessert,
    /// Meat-free savoury dishes.
    Vegetarian,
    /// No keyword matched.
    Unknown,
}

/// Keyword lists in the order they are tested; the first hit wins.
const KEYWORDS: &[(DishCategory, &[&str])] = &[
    (
        DishCategory::Dessert,
        &[
            "dessert", "tarte", "kuchen", "pie", "eis", "süß", "sweet", "cake", "ice cream",
        ],
    ),
    (
        DishCategory::Fish,
        &[
            "fisch",
            "lachs",
            "garnele",
            "auster",
            "hamachi",
            "hummer",
            "seeteufel",
            "steinbutt",
            "kabeljau",
            "sea",
            "fish",
            "salmon",
            "shrimp",
            "prawn",
            "oyster",
            "lobster",
            "cod",
            "tuna",
        ],
    ),
    (
        DishCategory::RedMeat,
        &[
            "rind",
            "kalb",
            "reh",
            "lamm",
            "striploin",
            "steak",
            "vieh",
            "beef",
            "ragout",
            "veal",
            "venison",
            "lamb",
        ],
    ),
    (
        DishCategory::Poultry,
        &[
            "ente", "wachtel", "huhn", "hähn", "poularde", "duck", "chicken", "quail",
        ],
    ),
    (
        DishCategory::Vegetarian,
        &[
            "salat",
            "kürbis",
            "kohlrabi",
            "spätzle",
            "gemüse",
            "veggie",
            "salad",
            "pumpkin",
            "vegetable",
        ],
    ),
];

impl DishCategory {
    /// Classify a dish by substring keywords in its name.
    ///
    /// Matching is plain containment on the lowercased name, so an unrelated
    /// word that happens to contain a keyword also matches ("Reis" contains
    /// "eis" and reads as a dessert).
    ///
    /// # Examples
    /// ```
    /// use sommelier_core::DishCategory;
    ///
    /// assert_eq!(DishCategory::classify("Lachs mit Dill"), DishCategory::Fish);
    /// assert_eq!(DishCategory::classify("Rinderfilet"), DishCategory::RedMeat);
    /// assert_eq!(DishCategory::classify("Brot"), DishCategory::Unknown);
    /// ```
    #[must_use]
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|word| lower.contains(word)))
            .map_or(Self::Unknown, |&(category, _)| category)
    }

    /// Stable identifier, e.g. `red_meat`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::Poultry => "poultry",
            Self::RedMeat => "red_meat",
            Self::Dessert => "dessert",
            Self::Vegetarian => "vegetarian",
            Self::Unknown => "unknown",
        }
    }

    /// Phrase used in explanations, e.g. "fish dish".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fish => "fish dish",
            Self::Poultry => "poultry dish",
            Self::RedMeat => "meat dish",
            Self::Dessert => "dessert",
            Self::Vegetarian => "vegetarian dish",
            Self::Unknown => "dish",
        }
    }

    /// Fish, poultry and vegetarian dishes: the ones light wines suit.
    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Fish | Self::Poultry | Self::Vegetarian)
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DishCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fish" => Ok(Self::Fish),
            "poultry" => Ok(Self::Poultry),
            "red_meat" => Ok(Self::RedMeat),
            "dessert" => Ok(Self::Dessert),
            "vegetarian" => Ok(Self::Vegetarian),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseCategoryError::new("dish category", s)),
        }
    }
}

/// A flavour note that pairing rules react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AromaNote {
    /// Salty.
    Salty,
    /// Savoury umami.
    Umami,
    /// Chilli heat.
    Spicy,
    /// Bitter or astringent.
    Bitter,
    /// Creamy or buttery texture.
    Creamy,
}

impl AromaNote {
    /// Tags in aroma text that signal this note.
    #[must_use]
    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Salty => &["salzig", "salty"],
            Self::Umami => &["umami"],
            Self::Spicy => &["scharf", "spicy"],
            Self::Bitter => &["herb", "astringent", "bitter"],
            Self::Creamy => &["cremig", "buttrig", "creamy", "buttery"],
        }
    }
}

/// Lowercased free-text aroma description of a dish.
///
/// # Examples
/// ```
/// use sommelier_core::{AromaNote, AromaProfile};
///
/// let aroma = AromaProfile::new("Salzig, Umami");
/// assert!(aroma.has(AromaNote::Salty));
/// assert!(aroma.has(AromaNote::Umami));
/// assert!(!aroma.has(AromaNote::Creamy));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AromaProfile {
    text: String,
}

impl AromaProfile {
    /// Wrap raw aroma text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.to_lowercase(),
        }
    }

    /// Report whether any tag for `note` occurs in the text.
    #[must_use]
    pub fn has(&self, note: AromaNote) -> bool {
        note.tags().iter().any(|tag| self.text.contains(tag))
    }

    /// The lowercased text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

/// A dish with every attribute normalised for the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DishProfile {
    /// Dish name as listed on the menu.
    pub name: String,
    /// Category derived from the name.
    pub category: DishCategory,
    /// Fat content.
    pub fat: Ordinal,
    /// Spice level.
    pub spice: Ordinal,
    /// Acidity.
    pub acidity: Ordinal,
    /// Sweetness.
    pub sweetness: Ordinal,
    /// Aroma tags.
    pub aroma: AromaProfile,
}

impl DishProfile {
    /// Normalise a menu row.
    ///
    /// Missing attributes fall back to [`Attribute::default_value`].
    #[must_use]
    pub fn from_record(row: &RecordView<'_>) -> Self {
        let intensity = OrdinalScale::intensity();
        let name = row.get_or_default(Attribute::DishName);
        Self {
            name: name.to_owned(),
            category: DishCategory::classify(name),
            fat: intensity.ordinal(row.get_or_default(Attribute::Fat)),
            spice: intensity.ordinal(row.get_or_default(Attribute::Spice)),
            acidity: intensity.ordinal(row.get_or_default(Attribute::Acidity)),
            sweetness: OrdinalScale::sweetness().ordinal(row.get_or_default(Attribute::Sweetness)),
            aroma: AromaProfile::new(row.get_or_default(Attribute::Aroma)),
        }
    }

    /// The heavier of fat and spice: how much weight the wine must match.
    #[must_use]
    pub fn intensity(&self) -> Ordinal {
        self.fat.max(self.spice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Record, RecordBatch};
    use rstest::rstest;

    #[rstest]
    #[case("Schokoladen-Dessert", DishCategory::Dessert)]
    #[case("Lachsforelle", DishCategory::Fish)]
    #[case("Grilled salmon", DishCategory::Fish)]
    #[case("Rinderfilet", DishCategory::RedMeat)]
    #[case("Lammrücken", DishCategory::RedMeat)]
    #[case("Entenbrust", DishCategory::Poultry)]
    #[case("Kürbissuppe", DishCategory::Vegetarian)]
    #[case("Brot", DishCategory::Unknown)]
    fn classifies_by_keyword(#[case] name: &str, #[case] expected: DishCategory) {
        assert_eq!(DishCategory::classify(name), expected);
    }

    #[rstest]
    fn dessert_outranks_fish() {
        assert_eq!(
            DishCategory::classify("Lachs-Kuchen"),
            DishCategory::Dessert
        );
    }

    #[rstest]
    fn substring_matches_are_not_word_bound() {
        assert_eq!(DishCategory::classify("Reispfanne"), DishCategory::Dessert);
    }

    #[rstest]
    fn category_round_trips_through_text() {
        for category in [
            DishCategory::Fish,
            DishCategory::Poultry,
            DishCategory::RedMeat,
            DishCategory::Dessert,
            DishCategory::Vegetarian,
            DishCategory::Unknown,
        ] {
            assert_eq!(category.as_str().parse::<DishCategory>(), Ok(category));
        }
    }

    #[rstest]
    fn profile_defaults_missing_attributes() {
        let batch = RecordBatch::new(vec![Record::from_pairs([("Speisename", "Steak")])]);
        let row = batch.rows().next().expect("one row");
        let dish = DishProfile::from_record(&row);
        assert_eq!(dish.category, DishCategory::RedMeat);
        assert_eq!(dish.fat, Ordinal::Medium);
        assert_eq!(dish.spice, Ordinal::Medium);
        assert_eq!(dish.acidity, Ordinal::Medium);
        assert_eq!(dish.sweetness, Ordinal::Low);
        assert_eq!(dish.aroma.as_str(), "");
    }

    #[rstest]
    fn intensity_is_the_heavier_of_fat_and_spice() {
        let batch = RecordBatch::new(vec![Record::from_pairs([
            ("Speisename", "Curry"),
            ("Fettgehalt", "niedrig"),
            ("Würze", "hoch"),
        ])]);
        let row = batch.rows().next().expect("one row");
        assert_eq!(DishProfile::from_record(&row).intensity(), Ordinal::High);
    }
}
