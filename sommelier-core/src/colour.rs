//! Wine colour parsed from free-text wine types.

use std::fmt;

/// Style of a wine as far as pairing is concerned.
///
/// Unrecognised text is kept, lowercased, in [`WineColour::Other`] so callers
/// can still show what the sheet said.
///
/// # Examples
/// ```
/// use sommelier_core::WineColour;
///
/// assert_eq!(WineColour::parse("Rotwein"), WineColour::Red);
/// assert_eq!(WineColour::parse("Sekt"), WineColour::Sparkling);
/// assert_eq!(WineColour::parse("XYZ").as_str(), "xyz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WineColour {
    /// Red wine.
    Red,
    /// White wine.
    White,
    /// Rosé.
    Rose,
    /// Sparkling wine, Champagne, Sekt or Crémant.
    Sparkling,
    /// Skin-contact white ("orange wine").
    Orange,
    /// Anything else, carrying the normalised source text.
    Other(String),
}

/// Substrings checked in order; the first hit decides the colour.
const MARKERS: &[(&[&str], WineColour)] = &[
    (&["rot", "red"], WineColour::Red),
    (&["weiß", "weiss", "white"], WineColour::White),
    (&["rosé", "rose"], WineColour::Rose),
    (
        &[
            "schaum",
            "champagner",
            "champagne",
            "sekt",
            "crémant",
            "cremant",
            "sparkling",
            "cava",
        ],
        WineColour::Sparkling,
    ),
    (&["orange"], WineColour::Orange),
];

impl WineColour {
    /// Classify a wine type such as "Weißwein" or "Crémant de Loire".
    ///
    /// Matching is by substring, so "Rotweincuvée" is red.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        MARKERS
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| lower.contains(needle)))
            .map_or_else(|| Self::Other(lower), |(_, colour)| colour.clone())
    }

    /// Stable identifier, or the raw text for [`WineColour::Other`].
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Red => "red",
            Self::White => "white",
            Self::Rose => "rosé",
            Self::Sparkling => "sparkling",
            Self::Orange => "orange",
            Self::Other(text) => text.as_str(),
        }
    }

    /// Phrase used in explanations, e.g. "red wine".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Red => "red wine",
            Self::White => "white wine",
            Self::Rose => "rosé",
            Self::Sparkling => "sparkling wine",
            Self::Orange => "orange wine",
            Self::Other(_) => "wine",
        }
    }

    /// White and sparkling wines: the light partners for light dishes.
    #[must_use]
    pub const fn is_light(&self) -> bool {
        matches!(self, Self::White | Self::Sparkling)
    }
}

impl fmt::Display for WineColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WineColour {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WineColour {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
