//! Ordinal normalisation of qualitative attribute text.
//!
//! Sheets describe intensity in prose ("kräftig", "leicht bis mittel",
//! "full-bodied"). [`OrdinalScale`] folds that vocabulary onto the three-step
//! [`Ordinal`] scale. Unknown text maps to [`Ordinal::Low`] rather than
//! failing, as the inputs are maintained by hand.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Three-step qualitative scale shared by every dish and wine attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Ordinal {
    /// Low, light or dry.
    #[default]
    Low,
    /// Medium.
    Medium,
    /// High, full or sweet.
    High,
}

impl Ordinal {
    /// Numeric rank: 0, 1 or 2.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Number of steps between two ordinals.
    ///
    /// # Examples
    /// ```
    /// use sommelier_core::Ordinal;
    ///
    /// assert_eq!(Ordinal::Low.distance(Ordinal::High), 2);
    /// assert_eq!(Ordinal::High.distance(Ordinal::Medium), 1);
    /// ```
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.value().abs_diff(other.value())
    }
}

impl From<Ordinal> for u8 {
    fn from(value: Ordinal) -> Self {
        value.value()
    }
}

const INTENSITY_TERMS: &[(&str, Ordinal)] = &[
    ("niedrig", Ordinal::Low),
    ("mittel", Ordinal::Medium),
    ("hoch", Ordinal::High),
    ("leicht", Ordinal::Low),
    ("leicht bis mittel", Ordinal::Medium),
    ("mittel bis voll", Ordinal::High),
    ("voll", Ordinal::High),
    ("kräftig", Ordinal::High),
    ("low", Ordinal::Low),
    ("medium", Ordinal::Medium),
    ("high", Ordinal::High),
    ("light", Ordinal::Low),
    ("light to medium", Ordinal::Medium),
    ("medium to full", Ordinal::High),
    ("full", Ordinal::High),
    ("full-bodied", Ordinal::High),
    ("robust", Ordinal::High),
];

const SWEETNESS_TERMS: &[(&str, Ordinal)] = &[
    ("niedrig", Ordinal::Low),
    ("mittel", Ordinal::Medium),
    ("hoch", Ordinal::High),
    ("trocken", Ordinal::Low),
    ("halbtrocken", Ordinal::Medium),
    ("feinherb", Ordinal::Medium),
    ("lieblich", Ordinal::High),
    ("süß", Ordinal::High),
    ("low", Ordinal::Low),
    ("medium", Ordinal::Medium),
    ("high", Ordinal::High),
    ("dry", Ordinal::Low),
    ("off-dry", Ordinal::Medium),
    ("semi-sweet", Ordinal::Medium),
    ("sweet", Ordinal::High),
];

static INTENSITY: LazyLock<OrdinalScale> =
    LazyLock::new(|| OrdinalScale::from_terms(INTENSITY_TERMS));
static SWEETNESS: LazyLock<OrdinalScale> =
    LazyLock::new(|| OrdinalScale::from_terms(SWEETNESS_TERMS));

#[expect(clippy::expect_used, reason = "the pattern is a compile-time literal")]
static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)(?:[.,][0-9]+)?").expect("valid number pattern"));

/// Case-folded lookup table from descriptive text to an [`Ordinal`].
///
/// # Examples
/// ```
/// use sommelier_core::{Ordinal, OrdinalScale};
///
/// let scale = OrdinalScale::intensity();
/// assert_eq!(scale.ordinal(" HOCH "), Ordinal::High);
/// assert_eq!(scale.ordinal("Leicht bis Mittel"), Ordinal::Medium);
/// assert_eq!(scale.ordinal("unbekannt"), Ordinal::Low);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinalScale {
    terms: HashMap<String, Ordinal>,
}

impl OrdinalScale {
    /// Build a scale from `(term, ordinal)` pairs; terms are case-folded.
    #[must_use]
    pub fn from_terms(terms: &[(&str, Ordinal)]) -> Self {
        Self {
            terms: terms
                .iter()
                .map(|&(term, ordinal)| (fold(term), ordinal))
                .collect(),
        }
    }

    /// Scale for body, acidity, tannin, fat, spice and textual alcohol.
    #[must_use]
    pub fn intensity() -> &'static Self {
        &INTENSITY
    }

    /// Scale for residual sugar in wines and sweetness in dishes.
    #[must_use]
    pub fn sweetness() -> &'static Self {
        &SWEETNESS
    }

    /// Map raw text onto the scale, ignoring case and surrounding space.
    ///
    /// Text missing from the scale yields [`Ordinal::Low`].
    #[must_use]
    pub fn ordinal(&self, raw: &str) -> Ordinal {
        let key = fold(raw);
        self.terms.get(&key).copied().unwrap_or_else(|| {
            log::trace!("no ordinal for {key:?}; assuming low");
            Ordinal::Low
        })
    }
}

fn fold(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classify an alcohol value such as `"12,5%"` or `"kräftig"`.
///
/// The first number in the text (comma or dot as decimal separator) is
/// bucketed below 12 % as low, below 14 % as medium and otherwise as high.
/// Text without a number is read on the intensity scale.
///
/// # Examples
/// ```
/// use sommelier_core::{Ordinal, parse_alcohol};
///
/// assert_eq!(parse_alcohol("12,5%"), Ordinal::Medium);
/// assert_eq!(parse_alcohol("11%"), Ordinal::Low);
/// assert_eq!(parse_alcohol("14.2 % vol"), Ordinal::High);
/// assert_eq!(parse_alcohol("hoch"), Ordinal::High);
/// ```
#[must_use]
pub fn parse_alcohol(raw: &str) -> Ordinal {
    let Some(whole) = FIRST_NUMBER
        .captures(raw)
        .and_then(|captures| captures.get(1))
    else {
        return OrdinalScale::intensity().ordinal(raw);
    };
    // Thresholds are whole percentages, so the fraction never changes the
    // bucket. Digit runs too long for u32 are far above any threshold.
    match whole.as_str().parse::<u32>() {
        Ok(percent) if percent < 12 => Ordinal::Low,
        Ok(percent) if percent < 14 => Ordinal::Medium,
        Ok(_) | Err(_) => Ordinal::High,
    }
}
