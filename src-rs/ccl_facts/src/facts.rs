//! Single-brand supplement facts panels.

use std::fmt;

use ccl_ingredients::Ingredient;
use ccl_serving::{Serving, units_match};

use crate::{
    brand::Brand,
    cell::{Cell, INVALID},
    nutrients::NutrientDb,
    warning::{Warning, Warnings},
};

/// Panel title.
pub const TITLE: &str = "Supplement Facts";

/// Header over the amount column.
pub const AMOUNT_HEADER: &str = "Amount Per Serving";

/// Header over the percent daily value column.
pub const PERCENT_DV_HEADER: &str = "% Daily Value";

/// Marker for an ingredient with no established daily value.
pub const NOT_ESTABLISHED: &str = "†";

/// Footnote shown when `showPdvFootnote` is set.
pub const PDV_FOOTNOTE: &str = "* Percent Daily Values are based on a 2,000 calorie diet.";

/// Footnote shown when `showNdvFootnote` is set.
pub const NDV_FOOTNOTE: &str = "† Daily Value not established.";

/// The percent daily value column of a facts row.
#[derive(Debug, Clone, PartialEq)]
pub enum PercentDv {
    /// Text the data file supplies for the entry, shown as written
    Supplied(String),
    /// Amount as a percent of the daily value
    Percent(f64),
    /// No daily value is established for the ingredient
    NotEstablished,
    /// The serving or the daily value cannot be compared
    Invalid,
    /// Nothing to show
    Unavailable,
}

impl fmt::Display for PercentDv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supplied(text) => f.write_str(text),
            Self::Percent(percent) => write!(f, "{}%", percent.round()),
            Self::NotEstablished => f.write_str(NOT_ESTABLISHED),
            Self::Invalid => f.write_str(INVALID),
            Self::Unavailable => Ok(()),
        }
    }
}

/// One ingredient line of a facts panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FactsRow {
    name: String,
    amount: Cell,
    percent_dv: PercentDv,
}

impl FactsRow {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the amount per serving.
    #[must_use]
    pub const fn amount(&self) -> &Cell {
        &self.amount
    }

    /// Returns the percent daily value.
    #[must_use]
    pub const fn percent_dv(&self) -> &PercentDv {
        &self.percent_dv
    }
}

/// The assembled contents of a supplement facts panel.
///
/// Printers lay the panel out as the title, the serving lines, the column
/// headers, the nutrient rows, a separator when both sections have rows,
/// the supplement rows, the footnotes and finally the other ingredients.
#[derive(Debug, Clone, PartialEq)]
pub struct FactsPanel {
    brand: String,
    serving_size: Option<String>,
    servings_per_container: Option<String>,
    nutrients: Vec<FactsRow>,
    supplements: Vec<FactsRow>,
    footnotes: Vec<&'static str>,
    other_ingredients: Vec<String>,
    warnings: Vec<Warning>,
}

impl FactsPanel {
    /// Returns the brand display name.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the serving size line, if the brand gives one.
    #[must_use]
    pub fn serving_size_line(&self) -> Option<String> {
        self.serving_size
            .as_ref()
            .map(|size| format!("Serving Size: {size}"))
    }

    /// Returns the servings per container line, if the brand gives one.
    #[must_use]
    pub fn servings_per_container_line(&self) -> Option<String> {
        self.servings_per_container
            .as_ref()
            .map(|count| format!("Servings Per Container: {count}"))
    }

    /// Returns the nutrient rows.
    #[must_use]
    pub fn nutrients(&self) -> &[FactsRow] {
        &self.nutrients
    }

    /// Returns the supplement rows.
    #[must_use]
    pub fn supplements(&self) -> &[FactsRow] {
        &self.supplements
    }

    /// Returns true if a separator goes between the two sections.
    #[must_use]
    pub fn has_separator(&self) -> bool {
        !self.nutrients.is_empty() && !self.supplements.is_empty()
    }

    /// Returns the footnotes to show.
    #[must_use]
    pub fn footnotes(&self) -> &[&'static str] {
        &self.footnotes
    }

    /// Returns the other ingredients line, if there are any.
    #[must_use]
    pub fn other_ingredients_line(&self) -> Option<String> {
        if self.other_ingredients.is_empty() {
            None
        } else {
            Some(format!(
                "Other Ingredients: {}.",
                self.other_ingredients.join(", ")
            ))
        }
    }

    /// Returns the warnings found while assembling.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

/// Assembles the facts panel of one brand.
///
/// A percent daily value supplied by an entry is shown as written. Otherwise
/// it is computed against `db`, and without a database the percent column
/// is left empty.
#[must_use]
pub fn assemble(brand: &Brand, db: Option<&NutrientDb>) -> FactsPanel {
    let mut warnings = Warnings::default();

    let nutrients = brand
        .nutrition()
        .iter()
        .map(|ingredient| {
            let amount = amount(brand, ingredient, &mut warnings);
            let percent_dv = match (supplied_percent_dv(ingredient), db) {
                (Some(supplied), _) => supplied,
                (None, Some(db)) => nutrient_percent_dv(brand, ingredient, db, &mut warnings),
                (None, None) => PercentDv::Unavailable,
            };
            FactsRow {
                name: ingredient.name().to_string(),
                amount,
                percent_dv,
            }
        })
        .collect();

    let supplements = brand
        .supplements()
        .iter()
        .map(|ingredient| FactsRow {
            name: ingredient.name().to_string(),
            amount: amount(brand, ingredient, &mut warnings),
            percent_dv: supplied_percent_dv(ingredient).unwrap_or(if db.is_some() {
                PercentDv::NotEstablished
            } else {
                PercentDv::Unavailable
            }),
        })
        .collect();

    let mut footnotes = Vec::new();
    if brand.show_pdv_footnote() {
        footnotes.push(PDV_FOOTNOTE);
    }
    if brand.show_ndv_footnote() {
        footnotes.push(NDV_FOOTNOTE);
    }

    FactsPanel {
        brand: brand.name().to_string(),
        serving_size: brand.serving_size().map(str::to_string),
        servings_per_container: brand.servings_per_container().map(str::to_string),
        nutrients,
        supplements,
        footnotes,
        other_ingredients: brand
            .other_ingredients()
            .iter()
            .map(|ingredient| ingredient.name().to_string())
            .collect(),
        warnings: warnings.into_vec(),
    }
}

fn amount(brand: &Brand, ingredient: &Ingredient, warnings: &mut Warnings) -> Cell {
    match ingredient.serving_result() {
        Ok(serving) => Cell::Value(*serving),
        Err(message) => {
            warnings.push(Warning::InvalidServing {
                brand: brand.id().to_string(),
                id: ingredient.id().to_string(),
                message: message.to_string(),
            });
            Cell::Invalid
        }
    }
}

fn supplied_percent_dv(ingredient: &Ingredient) -> Option<PercentDv> {
    ingredient
        .percent_dv()
        .map(|text| PercentDv::Supplied(text.to_string()))
}

fn nutrient_percent_dv(
    brand: &Brand,
    ingredient: &Ingredient,
    db: &NutrientDb,
    warnings: &mut Warnings,
) -> PercentDv {
    let Some(reference) = db.get(ingredient.id()) else {
        return PercentDv::NotEstablished;
    };

    let daily_value = match reference.serving_result() {
        Ok(daily_value) => daily_value,
        Err(message) => {
            warnings.push(Warning::InvalidReference {
                id: reference.id().to_string(),
                message: message.to_string(),
            });
            return PercentDv::Invalid;
        }
    };

    let Some(serving) = ingredient.serving() else {
        return PercentDv::Invalid;
    };

    if !units_match(serving, daily_value) {
        warnings.push(Warning::UnitMismatch {
            brand: brand.id().to_string(),
            id: ingredient.id().to_string(),
            required: *daily_value.units(),
        });
        return PercentDv::Invalid;
    }

    percent(serving, daily_value).map_or(PercentDv::Unavailable, PercentDv::Percent)
}

fn percent(serving: &Serving, daily_value: &Serving) -> Option<f64> {
    let amount = serving.value()?;
    let daily_value = daily_value.value()?;
    (amount > 0.0 && daily_value > 0.0).then(|| amount / daily_value * 100.0)
}
