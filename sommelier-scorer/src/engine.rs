//! The rule engine: fixed pairing heuristics scored into a [`ScoreSheet`].
//!
//! Each heuristic is a plain function that inspects one dish and one wine and
//! awards points to the sheet it is handed. The functions run in a fixed
//! order, so rule records always come out in the same sequence for the same
//! inputs.

use sommelier_core::{
    AromaNote, DishCategory, DishProfile, MatchResult, Ordinal, PairingScorer, RuleBook,
    RuleCategory, RuleRecord, WineColour, WineProfile,
};

use crate::describe;

/// Accumulates fired rules for one dish and wine.
///
/// # Examples
/// ```
/// use sommelier_core::{RuleBook, RuleCategory};
/// use sommelier_scorer::ScoreSheet;
///
/// let rules = RuleBook::new();
/// let mut sheet = ScoreSheet::new(&rules);
/// sheet.award(RuleCategory::Salt, 2, "Salt softens tannin.");
/// sheet.award(RuleCategory::Umami, 0, "ignored");
/// sheet.award(RuleCategory::Bitterness, -2, "Harsh.");
/// assert_eq!(sheet.score(), 0);
/// assert_eq!(sheet.details().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScoreSheet<'r> {
    rules: &'r RuleBook,
    details: Vec<RuleRecord>,
}

impl<'r> ScoreSheet<'r> {
    /// Start an empty sheet annotated from `rules`.
    #[must_use]
    pub const fn new(rules: &'r RuleBook) -> Self {
        Self {
            rules,
            details: Vec::new(),
        }
    }

    /// Record a fired rule. Zero deltas are not recorded.
    pub fn award(&mut self, category: RuleCategory, delta: i32, justification: &'static str) {
        if delta == 0 {
            return;
        }
        let (description, source) = self
            .rules
            .get(category)
            .map(|meta| (meta.description.clone(), meta.source.clone()))
            .unwrap_or_default();
        self.details.push(RuleRecord {
            category,
            delta,
            justification,
            description,
            source,
        });
    }

    /// Sum of every recorded delta.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.details.iter().map(|record| record.delta).sum()
    }

    /// Records in the order they were awarded.
    #[must_use]
    pub const fn details(&self) -> &[RuleRecord] {
        self.details.as_slice()
    }

    /// Consume the sheet, returning its records.
    #[must_use]
    pub fn into_details(self) -> Vec<RuleRecord> {
        self.details
    }
}

type RuleCheck = fn(&DishProfile, &WineProfile, &mut ScoreSheet<'_>);

/// Evaluation order of the heuristics.
const RULE_CHECKS: [RuleCheck; 13] = [
    intensity_match,
    colour_and_dish_type,
    acidity_balance,
    acidity_fat,
    tannin_vs_fat,
    tannin_vs_fish,
    sweetness_balance,
    salt,
    umami,
    spice_heat,
    bitterness,
    texture,
    temperature,
];

/// Scores pairings with the fixed sommelier heuristics.
///
/// # Examples
/// ```
/// use sommelier_core::{PairingScorer, Record, RecordBatch, RuleBook, DishProfile, WineProfile};
/// use sommelier_scorer::RuleScorer;
///
/// let menu = RecordBatch::new(vec![Record::from_pairs([
///     ("Speisename", "Steak"),
///     ("Fettgehalt", "hoch"),
///     ("Würze", "mittel"),
///     ("Säure", "mittel"),
/// ])]);
/// let wines = RecordBatch::new(vec![Record::from_pairs([
///     ("Weinname", "Barolo"),
///     ("Farbe", "Rotwein"),
///     ("Tannin", "hoch"),
///     ("Säure", "hoch"),
///     ("Körper", "hoch"),
///     ("Süße", "niedrig"),
/// ])]);
/// let dish = DishProfile::from_record(&menu.rows().next().unwrap());
/// let wine = WineProfile::from_record(&wines.rows().next().unwrap());
/// let result = RuleScorer.score_match(&dish, &wine, &RuleBook::new());
/// assert_eq!(result.score, 11);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleScorer;

impl RuleScorer {
    /// Run every heuristic and return the filled sheet.
    #[must_use]
    pub fn evaluate<'r>(
        dish: &DishProfile,
        wine: &WineProfile,
        rules: &'r RuleBook,
    ) -> ScoreSheet<'r> {
        let mut sheet = ScoreSheet::new(rules);
        for check in RULE_CHECKS {
            check(dish, wine, &mut sheet);
        }
        sheet
    }
}

impl PairingScorer for RuleScorer {
    fn score_match(&self, dish: &DishProfile, wine: &WineProfile, rules: &RuleBook) -> MatchResult {
        let sheet = Self::evaluate(dish, wine, rules);
        let score = sheet.score();
        let mut result = MatchResult {
            wine_name: wine.name.clone(),
            score,
            details: sheet.into_details(),
            explanation: String::new(),
        };
        result.explanation = describe(dish, wine, &result.positive_categories());
        result
    }
}

/// Score one pairing with [`RuleScorer`].
#[must_use]
pub fn score_match(dish: &DishProfile, wine: &WineProfile, rules: &RuleBook) -> MatchResult {
    RuleScorer.score_match(dish, wine, rules)
}

fn intensity_match(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    let gap = dish.intensity().distance(wine.body);
    if gap == 0 {
        sheet.award(
            RuleCategory::IntensityMatch,
            2,
            "Body and intensity of dish and wine are balanced.",
        );
    } else if gap >= 2 {
        sheet.award(
            RuleCategory::IntensityMatch,
            -2,
            "The weight of dish and wine drifts far apart.",
        );
    }
}

fn colour_and_dish_type(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    let category = RuleCategory::ColourAndDishType;
    if dish.category.is_light() {
        if wine.colour.is_light() {
            sheet.award(
                category,
                2,
                "Light dish paired with a white or sparkling wine.",
            );
        } else if wine.colour == WineColour::Red && wine.tannin >= Ordinal::Medium {
            sheet.award(
                category,
                -2,
                "A red, tannic wine can overpower light dishes.",
            );
        }
    } else if dish.category == DishCategory::RedMeat {
        if wine.colour == WineColour::Red {
            sheet.award(category, 2, "Hearty meat calls for red wine.");
        } else if wine.colour.is_light() {
            sheet.award(
                category,
                -2,
                "Light wines offer too little structure for red meat.",
            );
        }
    }
}

fn acidity_balance(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    if wine.acidity >= dish.acidity {
        sheet.award(
            RuleCategory::AcidityBalance,
            2,
            "The wine's acidity matches or exceeds the dish's.",
        );
    } else {
        sheet.award(
            RuleCategory::AcidityBalance,
            -2,
            "The wine's acidity falls short of the dish's.",
        );
    }
}

fn acidity_fat(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    if dish.fat < Ordinal::High {
        return;
    }
    match wine.acidity {
        Ordinal::High => sheet.award(
            RuleCategory::AcidityFat,
            2,
            "High fat is balanced by high acidity.",
        ),
        Ordinal::Low => sheet.award(
            RuleCategory::AcidityFat,
            -2,
            "A fatty dish meets a low-acid wine.",
        ),
        Ordinal::Medium => {}
    }
}

fn tannin_vs_fat(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    let rich = dish.category == DishCategory::RedMeat || dish.fat == Ordinal::High;
    if rich && wine.tannin == Ordinal::High {
        sheet.award(
            RuleCategory::TanninVsFat,
            2,
            "Firm tannins cut through fat and protein.",
        );
    }
}

fn tannin_vs_fish(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    if dish.category == DishCategory::Fish && wine.tannin >= Ordinal::Medium {
        sheet.award(
            RuleCategory::TanninVsFish,
            -2,
            "Tannic wine makes fish taste metallic.",
        );
    }
}

fn sweetness_balance(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    let category = RuleCategory::SweetnessBalance;
    if dish.sweetness == Ordinal::High {
        if wine.sweetness >= dish.sweetness {
            sheet.award(
                category,
                2,
                "A sweet dish is matched by enough residual sugar in the wine.",
            );
        } else {
            sheet.award(category, -2, "A sweet dish makes a dry wine taste flat.");
        }
    } else if dish.sweetness == Ordinal::Low && wine.sweetness == Ordinal::Low {
        sheet.award(category, 1, "Dry dish and dry wine harmonise.");
    }
}

fn salt(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    if dish.aroma.has(AromaNote::Salty) && wine.tannin >= Ordinal::Medium {
        sheet.award(
            RuleCategory::Salt,
            2,
            "Salt softens tannin, suiting a structured wine.",
        );
    }
}

fn umami(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    if !dish.aroma.has(AromaNote::Umami) {
        return;
    }
    match wine.tannin {
        Ordinal::High => sheet.award(
            RuleCategory::Umami,
            -2,
            "Umami amplifies tannin; a gentler wine would be better.",
        ),
        Ordinal::Low => sheet.award(
            RuleCategory::Umami,
            1,
            "Delicate umami benefits from a soft tannin profile.",
        ),
        Ordinal::Medium => {}
    }
}

// Both branches may fire for the same pairing.
fn spice_heat(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    if dish.spice < Ordinal::High && !dish.aroma.has(AromaNote::Spicy) {
        return;
    }
    if wine.sweetness >= Ordinal::Medium {
        sheet.award(
            RuleCategory::SpiceHeat,
            2,
            "Residual sugar tempers the heat of the dish.",
        );
    }
    if wine.alcohol == Ordinal::High {
        sheet.award(
            RuleCategory::SpiceHeat,
            -1,
            "High alcohol can amplify the heat.",
        );
    }
}

fn bitterness(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    if !dish.aroma.has(AromaNote::Bitter) {
        return;
    }
    match wine.tannin {
        Ordinal::High => sheet.award(
            RuleCategory::Bitterness,
            -2,
            "Bitter components plus tannin can taste harsh.",
        ),
        Ordinal::Low => sheet.award(
            RuleCategory::Bitterness,
            1,
            "Soft tannin avoids adding bitterness.",
        ),
        Ordinal::Medium => {}
    }
}

fn texture(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    let lifts = wine.colour == WineColour::Sparkling || wine.acidity == Ordinal::High;
    if dish.aroma.has(AromaNote::Creamy) && lifts {
        sheet.award(
            RuleCategory::Texture,
            1,
            "A sparkling or taut structure shows off a creamy dish.",
        );
    }
}

fn temperature(dish: &DishProfile, wine: &WineProfile, sheet: &mut ScoreSheet<'_>) {
    let light_dish = matches!(
        dish.category,
        DishCategory::Fish | DishCategory::Vegetarian
    );
    if wine.colour == WineColour::Sparkling && light_dish {
        sheet.award(
            RuleCategory::Temperature,
            1,
            "Chilled sparkling wine keeps a light dish fresh.",
        );
    }
}
