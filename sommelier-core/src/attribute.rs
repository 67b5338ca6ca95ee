//! Canonical attribute names and the column aliases accepted for each.
//!
//! Wine lists and menus arrive from spreadsheets whose headers drift between
//! German and English spellings. Every lookup goes through an [`Attribute`],
//! which knows the aliases to try (first listed wins) and the raw default used
//! when a row carries none of them.
//!
//! # Examples
//! ```
//! use sommelier_core::Attribute;
//!
//! assert_eq!(Attribute::Body.canonical_name(), "Körper");
//! assert!(Attribute::Body.aliases().contains(&"Body"));
//! assert_eq!(Attribute::Tannin.default_value(), "niedrig");
//! ```

/// A field understood by the pairing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    /// Name of a dish; the primary key of a menu.
    DishName,
    /// Fat content of a dish.
    Fat,
    /// Spice level of a dish.
    Spice,
    /// Acidity of a dish or wine.
    Acidity,
    /// Sweetness of a dish or wine.
    Sweetness,
    /// Free-text aroma tags of a dish.
    Aroma,
    /// Name of a wine.
    WineName,
    /// Wine colour or type, e.g. "Rotwein".
    Colour,
    /// Body of a wine.
    Body,
    /// Tannin level of a wine.
    Tannin,
    /// Alcohol content of a wine, as a percentage or ordinal text.
    Alcohol,
    /// Rule category key in rule metadata.
    RuleCategory,
    /// Human-readable rule description in rule metadata.
    RuleDescription,
    /// Source citation in rule metadata.
    RuleSource,
}

impl Attribute {
    /// Every attribute, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::DishName,
        Self::Fat,
        Self::Spice,
        Self::Acidity,
        Self::Sweetness,
        Self::Aroma,
        Self::WineName,
        Self::Colour,
        Self::Body,
        Self::Tannin,
        Self::Alcohol,
        Self::RuleCategory,
        Self::RuleDescription,
        Self::RuleSource,
    ];

    /// Accepted column names, highest priority first.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::DishName => &["Speisename", "Speise", "Dish", "Dish name"],
            Self::Fat => &["Fettgehalt", "Fett", "Fat"],
            Self::Spice => &["Würze", "Wuerze", "Spice"],
            Self::Acidity => &["Säure", "Saeure", "Acidity"],
            Self::Sweetness => &["Süße", "Suesse", "Sweetness"],
            Self::Aroma => &["Aromaprofil", "Aroma", "Aroma profile"],
            Self::WineName => &["Weinname", "Name", "Wein", "Wine"],
            Self::Colour => &[
                "Farbe", "Art", "Weinart", "Typ", "Color", "Colour", "Type",
            ],
            Self::Body => &["Körper", "Koerper", "Body"],
            Self::Tannin => &["Tannin", "Gerbstoff"],
            Self::Alcohol => &["Alkoholgehalt", "Alkohol", "Alcohol"],
            Self::RuleCategory => &["Kategorie", "Category"],
            Self::RuleDescription => &["Regelbeschreibung", "Description"],
            Self::RuleSource => &["Quelle", "Source"],
        }
    }

    /// The column name a well-formed sheet uses for this attribute.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self.aliases().first() {
            Some(name) => *name,
            None => "",
        }
    }

    /// Raw text assumed when a row does not carry the attribute at all.
    ///
    /// Ordinal attributes default to the text a sommelier would assume for
    /// an unspecified value, so the default still passes through the normal
    /// ordinal lookup.
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Fat | Self::Spice | Self::Acidity | Self::Body | Self::Alcohol => "mittel",
            Self::Sweetness | Self::Tannin => "niedrig",
            Self::WineName => "Unknown",
            Self::DishName
            | Self::Aroma
            | Self::Colour
            | Self::RuleCategory
            | Self::RuleDescription
            | Self::RuleSource => "",
        }
    }
}
