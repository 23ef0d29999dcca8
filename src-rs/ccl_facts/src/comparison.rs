//! Cross-brand comparison tables.
//!
//! Each table has a nutrient section and a supplement section. A section's
//! rows are the union of ids across all brands, in the order they are first
//! seen. Every row has display units that each brand's serving must match
//! exactly:
//!
//! - nutrients take their units from the nutrient database, and nutrients
//!   the database does not know are left out of the table;
//! - supplements take their units from the first brand with a parsed
//!   serving for that id.

use ccl_ingredients::{Ingredient, IngredientList};
use ccl_serving::{Units, units_match};
use indexmap::IndexMap;

use crate::{
    brand::Brand,
    cell::Cell,
    nutrients::NutrientDb,
    warning::{Warning, Warnings},
};

/// A brand column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: String,
    name: String,
}

impl Column {
    /// Returns the brand id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the brand display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One ingredient row with a cell per brand.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: String,
    name: String,
    units: Option<Units>,
    cells: Vec<Cell>,
}

impl Row {
    /// Returns the ingredient id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the ingredient display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display units, or `None` if no reference serving parsed.
    #[must_use]
    pub const fn units(&self) -> Option<&Units> {
        self.units.as_ref()
    }

    /// Returns the cells, one per column.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// A reconciled comparison of several brands.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    columns: Vec<Column>,
    nutrients: Vec<Row>,
    supplements: Vec<Row>,
    warnings: Vec<Warning>,
}

impl ComparisonTable {
    /// Returns the brand columns in input order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the nutrient rows.
    #[must_use]
    pub fn nutrients(&self) -> &[Row] {
        &self.nutrients
    }

    /// Returns the supplement rows.
    #[must_use]
    pub fn supplements(&self) -> &[Row] {
        &self.supplements
    }

    /// Returns the warnings found while reconciling.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

/// Reconciles brands into a comparison table.
#[must_use]
pub fn compare(db: &NutrientDb, brands: &[Brand]) -> ComparisonTable {
    let mut warnings = Warnings::default();

    let columns = brands
        .iter()
        .map(|brand| Column {
            id: brand.id().to_string(),
            name: brand.name().to_string(),
        })
        .collect();

    let nutrients = nutrient_rows(db, brands, &mut warnings);
    let supplements = supplement_rows(brands, &mut warnings);

    ComparisonTable {
        columns,
        nutrients,
        supplements,
        warnings: warnings.into_vec(),
    }
}

/// Maps every id in the selected lists to the brands listing it, in first-seen order.
fn union_ids<'a>(
    brands: &'a [Brand],
    list: impl Fn(&'a Brand) -> &'a IngredientList,
) -> IndexMap<&'a str, Vec<(&'a Brand, &'a Ingredient)>> {
    let mut ids: IndexMap<&str, Vec<(&Brand, &Ingredient)>> = IndexMap::new();
    for brand in brands {
        for ingredient in list(brand) {
            ids.entry(ingredient.id())
                .or_default()
                .push((brand, ingredient));
        }
    }
    ids
}

fn nutrient_rows(db: &NutrientDb, brands: &[Brand], warnings: &mut Warnings) -> Vec<Row> {
    let mut rows = Vec::new();

    for (id, listed_by) in union_ids(brands, Brand::nutrition) {
        let Some(reference) = db.get(id) else {
            if let Some((brand, _)) = listed_by.first() {
                warnings.push(Warning::UnknownIngredient {
                    brand: brand.id().to_string(),
                    id: id.to_string(),
                });
            }
            continue;
        };

        let units = match reference.serving_result() {
            Ok(daily_value) => Some(*daily_value.units()),
            Err(message) => {
                warnings.push(Warning::InvalidReference {
                    id: id.to_string(),
                    message: message.to_string(),
                });
                None
            }
        };

        let cells = brands
            .iter()
            .map(|brand| cell(brand, brand.nutrition().get(id), units.as_ref(), warnings))
            .collect();

        rows.push(Row {
            id: id.to_string(),
            name: reference.name().to_string(),
            units,
            cells,
        });
    }

    rows
}

fn supplement_rows(brands: &[Brand], warnings: &mut Warnings) -> Vec<Row> {
    let mut rows = Vec::new();

    for (id, listed_by) in union_ids(brands, Brand::supplements) {
        let name = listed_by
            .first()
            .map_or_else(|| id.to_string(), |(_, ingredient)| ingredient.name().to_string());

        let units = listed_by
            .iter()
            .find_map(|(_, ingredient)| ingredient.serving())
            .map(|serving| *serving.units());

        let cells = brands
            .iter()
            .map(|brand| cell(brand, brand.supplements().get(id), units.as_ref(), warnings))
            .collect();

        rows.push(Row {
            id: id.to_string(),
            name,
            units,
            cells,
        });
    }

    rows
}

/// Builds the cell for one brand's entry against the row's display units.
fn cell(
    brand: &Brand,
    ingredient: Option<&Ingredient>,
    units: Option<&Units>,
    warnings: &mut Warnings,
) -> Cell {
    let Some(ingredient) = ingredient else {
        return Cell::Missing;
    };

    let serving = match ingredient.serving_result() {
        Ok(serving) => serving,
        Err(message) => {
            warnings.push(Warning::InvalidServing {
                brand: brand.id().to_string(),
                id: ingredient.id().to_string(),
                message: message.to_string(),
            });
            return Cell::Invalid;
        }
    };

    match units {
        Some(units) if units_match(serving, units) => Cell::Value(*serving),
        Some(units) => {
            warnings.push(Warning::UnitMismatch {
                brand: brand.id().to_string(),
                id: ingredient.id().to_string(),
                required: *units,
            });
            Cell::Invalid
        }
        None => Cell::Invalid,
    }
}
