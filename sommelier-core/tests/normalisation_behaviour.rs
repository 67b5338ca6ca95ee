//! Behavioural coverage for turning sheet rows into dish and wine profiles.
#![expect(
    clippy::expect_used,
    reason = "behaviour steps fail fast when a previous step left no state"
)]

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use sommelier_core::{
    AromaNote, DishCategory, DishProfile, Ordinal, Record, RecordBatch, WineColour, WineProfile,
};

#[fixture]
fn rows() -> RefCell<RecordBatch> {
    RefCell::new(RecordBatch::default())
}

#[fixture]
fn wine() -> RefCell<Option<WineProfile>> {
    RefCell::new(None)
}

#[fixture]
fn dish() -> RefCell<Option<DishProfile>> {
    RefCell::new(None)
}

fn single(pairs: &[(&str, &str)]) -> RecordBatch {
    RecordBatch::new(vec![Record::from_pairs(pairs.iter().copied())])
}

#[given("a wine row with German headers")]
fn german_wine(#[from(rows)] rows: &RefCell<RecordBatch>) {
    *rows.borrow_mut() = single(&[
        ("Weinname", "Amarone della Valpolicella"),
        ("Farbe", "Rotwein"),
        ("Körper", "Kräftig"),
        ("Säure", "mittel"),
        ("Tannin", "hoch"),
        ("Süße", "trocken"),
        ("Alkoholgehalt", "15,5 % vol"),
    ]);
}

#[given("a wine row with English headers")]
fn english_wine(#[from(rows)] rows: &RefCell<RecordBatch>) {
    *rows.borrow_mut() = single(&[
        ("Wine", "Moscato d'Asti"),
        ("Type", "Sparkling"),
        ("Body", "light"),
        ("Sweetness", "Sweet"),
        ("Alcohol", "5.5%"),
    ]);
}

#[given("a wine row with only a name")]
fn sparse_wine(#[from(rows)] rows: &RefCell<RecordBatch>) {
    *rows.borrow_mut() = single(&[("Weinname", "Hauswein")]);
}

#[given("a dish row for an apple tart")]
fn apple_tart(#[from(rows)] rows: &RefCell<RecordBatch>) {
    *rows.borrow_mut() = single(&[
        ("Speisename", "Apfeltarte mit Vanille"),
        ("Süße", "hoch"),
        ("Fettgehalt", "mittel"),
    ]);
}

#[given("a dish row for a salty umami broth")]
fn umami_broth(#[from(rows)] rows: &RefCell<RecordBatch>) {
    *rows.borrow_mut() = single(&[
        ("Speisename", "Dashi-Brühe"),
        ("Aromaprofil", "Salzig, Umami, leicht rauchig"),
    ]);
}

#[when("I normalise the wine")]
fn normalise_wine(
    #[from(rows)] rows: &RefCell<RecordBatch>,
    #[from(wine)] wine: &RefCell<Option<WineProfile>>,
) {
    let batch = rows.borrow();
    let row = batch.rows().next().expect("a wine row");
    *wine.borrow_mut() = Some(WineProfile::from_record(&row));
}

#[when("I normalise the dish")]
fn normalise_dish(
    #[from(rows)] rows: &RefCell<RecordBatch>,
    #[from(dish)] dish: &RefCell<Option<DishProfile>>,
) {
    let batch = rows.borrow();
    let row = batch.rows().next().expect("a dish row");
    *dish.borrow_mut() = Some(DishProfile::from_record(&row));
}

#[then("the wine is a full-bodied red with high alcohol")]
fn full_bodied_red(#[from(wine)] wine: &RefCell<Option<WineProfile>>) {
    let binding = wine.borrow();
    let profile = binding.as_ref().expect("wine normalised");
    assert_eq!(profile.colour, WineColour::Red);
    assert_eq!(profile.body, Ordinal::High);
    assert_eq!(profile.tannin, Ordinal::High);
    assert_eq!(profile.sweetness, Ordinal::Low);
    assert_eq!(profile.alcohol, Ordinal::High);
}

#[then("the wine is a sweet sparkling wine with low alcohol")]
fn sweet_sparkling(#[from(wine)] wine: &RefCell<Option<WineProfile>>) {
    let binding = wine.borrow();
    let profile = binding.as_ref().expect("wine normalised");
    assert_eq!(profile.name, "Moscato d'Asti");
    assert_eq!(profile.colour, WineColour::Sparkling);
    assert_eq!(profile.body, Ordinal::Low);
    assert_eq!(profile.sweetness, Ordinal::High);
    assert_eq!(profile.alcohol, Ordinal::Low);
}

#[then("the wine takes the default attributes")]
fn default_wine(#[from(wine)] wine: &RefCell<Option<WineProfile>>) {
    let binding = wine.borrow();
    let profile = binding.as_ref().expect("wine normalised");
    assert_eq!(profile.name, "Hauswein");
    assert_eq!(profile.colour, WineColour::Other(String::new()));
    assert_eq!(profile.body, Ordinal::Medium);
    assert_eq!(profile.acidity, Ordinal::Medium);
    assert_eq!(profile.tannin, Ordinal::Low);
    assert_eq!(profile.sweetness, Ordinal::Low);
    assert_eq!(profile.alcohol, Ordinal::Medium);
}

#[then("the dish is a sweet dessert")]
fn sweet_dessert(#[from(dish)] dish: &RefCell<Option<DishProfile>>) {
    let binding = dish.borrow();
    let profile = binding.as_ref().expect("dish normalised");
    assert_eq!(profile.category, DishCategory::Dessert);
    assert_eq!(profile.sweetness, Ordinal::High);
    assert_eq!(profile.spice, Ordinal::Medium);
}

#[then("the dish carries salty and umami notes")]
fn salty_umami(#[from(dish)] dish: &RefCell<Option<DishProfile>>) {
    let binding = dish.borrow();
    let profile = binding.as_ref().expect("dish normalised");
    assert!(profile.aroma.has(AromaNote::Salty));
    assert!(profile.aroma.has(AromaNote::Umami));
    assert!(!profile.aroma.has(AromaNote::Creamy));
}

#[scenario(path = "tests/features/normalisation.feature", index = 0)]
fn german_wine_row(
    rows: RefCell<RecordBatch>,
    wine: RefCell<Option<WineProfile>>,
    dish: RefCell<Option<DishProfile>>,
) {
    let _ = (rows, wine, dish);
}

#[scenario(path = "tests/features/normalisation.feature", index = 1)]
fn english_wine_row(
    rows: RefCell<RecordBatch>,
    wine: RefCell<Option<WineProfile>>,
    dish: RefCell<Option<DishProfile>>,
) {
    let _ = (rows, wine, dish);
}

#[scenario(path = "tests/features/normalisation.feature", index = 2)]
fn sparse_wine_row(
    rows: RefCell<RecordBatch>,
    wine: RefCell<Option<WineProfile>>,
    dish: RefCell<Option<DishProfile>>,
) {
    let _ = (rows, wine, dish);
}

#[scenario(path = "tests/features/normalisation.feature", index = 3)]
fn dessert_dish_row(
    rows: RefCell<RecordBatch>,
    wine: RefCell<Option<WineProfile>>,
    dish: RefCell<Option<DishProfile>>,
) {
    let _ = (rows, wine, dish);
}

#[scenario(path = "tests/features/normalisation.feature", index = 4)]
fn aroma_dish_row(
    rows: RefCell<RecordBatch>,
    wine: RefCell<Option<WineProfile>>,
    dish: RefCell<Option<DishProfile>>,
) {
    let _ = (rows, wine, dish);
}
