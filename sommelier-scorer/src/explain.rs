//! Short prose explanations of why a wine suits a dish.

use sommelier_core::{DishCategory, DishProfile, RuleCategory, WineProfile};

const MAX_SENTENCES: usize = 3;

/// Compose up to three sentences about a pairing.
///
/// Sentences are chosen from the categories that counted in the wine's
/// favour, in a fixed priority order starting with the colour fit. Without
/// any recognised category a single generic sentence is returned.
///
/// # Examples
/// ```
/// use sommelier_core::{DishProfile, Record, RecordBatch, RuleCategory, WineProfile};
/// use sommelier_scorer::describe;
///
/// let menu = RecordBatch::new(vec![Record::from_pairs([("Speisename", "Lachs")])]);
/// let wines = RecordBatch::new(vec![Record::from_pairs([
///     ("Weinname", "Chablis"),
///     ("Farbe", "Weißwein"),
/// ])]);
/// let dish = DishProfile::from_record(&menu.rows().next().unwrap());
/// let wine = WineProfile::from_record(&wines.rows().next().unwrap());
///
/// let text = describe(&dish, &wine, &[RuleCategory::ColourAndDishType]);
/// assert_eq!(text, "This white wine is an ideal companion for your fish dish.");
/// ```
#[must_use]
pub fn describe(dish: &DishProfile, wine: &WineProfile, positive: &[RuleCategory]) -> String {
    let fired = |category: RuleCategory| positive.contains(&category);
    let colour = wine.colour.label();
    let mut sentences: Vec<String> = Vec::new();

    if fired(RuleCategory::ColourAndDishType) {
        sentences.push(colour_sentence(dish.category, colour));
    }
    if fired(RuleCategory::IntensityMatch) {
        let text = if sentences.is_empty() {
            "The wine's fullness is perfectly balanced with the aromatics of your dish."
        } else {
            "Wine and dish stand in perfect balance with each other."
        };
        sentences.push(text.to_owned());
    }
    if fired(RuleCategory::AcidityBalance) || fired(RuleCategory::AcidityFat) {
        sentences.push(
            "The lively acidity brings freshness to the palate and lifts the flavours.".to_owned(),
        );
    }
    if fired(RuleCategory::SweetnessBalance) {
        let text = if dish.category == DishCategory::Dessert {
            "The wine's delicate sweetness picks up the dessert notes harmoniously."
        } else {
            "The flavour profiles of wine and dish complement each other harmoniously."
        };
        sentences.push(text.to_owned());
    }

    let fixed = [
        (
            RuleCategory::TanninVsFat,
            "The velvety tannins embrace the rich flavours of the dish.",
        ),
        (
            RuleCategory::Texture,
            "The wine's texture sets an exciting contrast to the dish.",
        ),
        (
            RuleCategory::SpiceHeat,
            "The wine tames the spice and creates a pleasant balance.",
        ),
        (
            RuleCategory::Salt,
            "The salty nuances of the dish are elegantly caught by the wine.",
        ),
    ];
    sentences.extend(
        fixed
            .into_iter()
            .filter(|(category, _)| fired(*category))
            .map(|(_, text)| text.to_owned()),
    );

    if sentences.is_empty() {
        sentences.push(format!(
            "This {colour} suits your choice wonderfully and promises a delightful \
             interplay of flavours."
        ));
    }
    sentences.truncate(MAX_SENTENCES);
    sentences.join(" ")
}

fn colour_sentence(category: DishCategory, colour: &str) -> String {
    match category {
        DishCategory::Fish | DishCategory::Poultry | DishCategory::Vegetarian => format!(
            "This {colour} is an ideal companion for your {}.",
            category.label()
        ),
        DishCategory::RedMeat => format!(
            "The structure of this {colour} harmonises beautifully with the intensity of the meat."
        ),
        DishCategory::Dessert => format!(
            "This {colour} rounds off your {} wonderfully.",
            category.label()
        ),
        DishCategory::Unknown => format!("This {colour} complements your dish elegantly."),
    }
}
