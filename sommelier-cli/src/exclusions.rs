//! Free-text wine exclusions such as "kein Rotwein" or "not too sweet".

use std::fmt;

use serde::Serialize;
use sommelier_core::{Ordinal, RecordBatch, WineColour, WineProfile};

/// A kind of wine the guest asked to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Exclusion {
    Red,
    White,
    Dry,
    Sweet,
    HighAcidity,
}

impl Exclusion {
    pub(crate) const ALL: [Self; 5] = [
        Self::Red,
        Self::White,
        Self::Dry,
        Self::Sweet,
        Self::HighAcidity,
    ];

    /// Lowercase phrases that request this exclusion.
    const fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Red => &["kein rot", "keinen rot", "nicht rot", "no red", "not red"],
            Self::White => &[
                "kein weiß",
                "keinen weiß",
                "nicht weiß",
                "kein weiss",
                "no white",
                "not white",
            ],
            Self::Dry => &["nicht trocken", "zu trocken", "not dry", "too dry"],
            Self::Sweet => &["nicht süß", "zu süß", "nicht suess", "not sweet", "too sweet"],
            Self::HighAcidity => &["keine säure", "zu sauer", "too acidic", "no acid"],
        }
    }

    /// Report whether `wine` falls under this exclusion.
    pub(crate) fn excludes(self, wine: &WineProfile) -> bool {
        match self {
            Self::Red => wine.colour == WineColour::Red,
            Self::White => wine.colour == WineColour::White,
            Self::Dry => wine.sweetness == Ordinal::Low,
            Self::Sweet => wine.sweetness == Ordinal::High,
            Self::HighAcidity => wine.acidity == Ordinal::High,
        }
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Red => "red wine",
            Self::White => "white wine",
            Self::Dry => "dry wine",
            Self::Sweet => "sweet wine",
            Self::HighAcidity => "high acidity",
        };
        f.write_str(label)
    }
}

/// Every exclusion requested somewhere in `text`, in declaration order.
pub(crate) fn parse_exclusions(text: &str) -> Vec<Exclusion> {
    let lowered = text.to_lowercase();
    Exclusion::ALL
        .into_iter()
        .filter(|exclusion| {
            exclusion
                .phrases()
                .iter()
                .any(|phrase| lowered.contains(phrase))
        })
        .collect()
}

/// Drop every wine matched by one of `exclusions`.
pub(crate) fn filter_wines(wines: &RecordBatch, exclusions: &[Exclusion]) -> RecordBatch {
    if exclusions.is_empty() {
        return wines.clone();
    }
    let kept = wines.filter(|row| {
        let wine = WineProfile::from_record(row);
        !exclusions.iter().any(|exclusion| exclusion.excludes(&wine))
    });
    log::info!(
        "excluding {} kept {} of {} wines",
        exclusions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        kept.len(),
        wines.len()
    );
    kept
}
