//! Normalised wine profiles.

use crate::{Attribute, Ordinal, OrdinalScale, RecordView, WineColour, parse_alcohol};

/// A wine with every attribute normalised for the rule engine.
///
/// # Examples
/// ```
/// use sommelier_core::{Ordinal, Record, RecordBatch, WineColour, WineProfile};
///
/// let wines = RecordBatch::new(vec![Record::from_pairs([
///     ("Weinname", "Barolo"),
///     ("Farbe", "Rotwein"),
///     ("Tannin", "hoch"),
///     ("Alkoholgehalt", "14,5%"),
/// ])]);
/// let wine = WineProfile::from_record(&wines.rows().next().unwrap());
/// assert_eq!(wine.colour, WineColour::Red);
/// assert_eq!(wine.tannin, Ordinal::High);
/// assert_eq!(wine.alcohol, Ordinal::High);
/// assert_eq!(wine.body, Ordinal::Medium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WineProfile {
    /// Wine name as listed on the wine card.
    pub name: String,
    /// Colour or style.
    pub colour: WineColour,
    /// Body.
    pub body: Ordinal,
    /// Acidity.
    pub acidity: Ordinal,
    /// Tannin.
    pub tannin: Ordinal,
    /// Residual sweetness.
    pub sweetness: Ordinal,
    /// Alcohol, bucketed from a percentage where one is given.
    pub alcohol: Ordinal,
}

impl WineProfile {
    /// Normalise a wine-card row.
    ///
    /// Missing attributes fall back to [`Attribute::default_value`].
    #[must_use]
    pub fn from_record(row: &RecordView<'_>) -> Self {
        let intensity = OrdinalScale::intensity();
        Self {
            name: row.get_or_default(Attribute::WineName).to_owned(),
            colour: WineColour::parse(row.get_or_default(Attribute::Colour)),
            body: intensity.ordinal(row.get_or_default(Attribute::Body)),
            acidity: intensity.ordinal(row.get_or_default(Attribute::Acidity)),
            tannin: intensity.ordinal(row.get_or_default(Attribute::Tannin)),
            sweetness: OrdinalScale::sweetness().ordinal(row.get_or_default(Attribute::Sweetness)),
            alcohol: parse_alcohol(row.get_or_default(Attribute::Alcohol)),
        }
    }
}
