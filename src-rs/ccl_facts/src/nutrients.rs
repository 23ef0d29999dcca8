//! The canonical nutrient database.

use ccl_ingredients::{Ingredient, IngredientList, ListOptions, parse_list};
use serde_json::Value;

use crate::{
    error::LoadError,
    source::{self, SourceLoader, SourceRef},
};

/// Reference daily values keyed by nutrient id.
///
/// The database is an ingredient list whose serving field is `dv`. Its units
/// are the display units for nutrients in comparison tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientDb {
    nutrients: IngredientList,
}

impl NutrientDb {
    /// Options the database is parsed with.
    #[must_use]
    pub fn list_options() -> ListOptions {
        ListOptions::new("dv", "Nutrient")
    }

    /// Builds the database from raw JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a valid ingredient list.
    pub fn from_value(raw: &Value) -> Result<Self, LoadError> {
        let nutrients = parse_list(raw, &Self::list_options())?;
        Ok(Self { nutrients })
    }

    /// Loads the database from a source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or is not a valid
    /// ingredient list.
    pub fn load(source: &SourceRef, loader: &impl SourceLoader) -> Result<Self, LoadError> {
        let raw = source::load(source, loader)?;
        let db = Self::from_value(&raw)?;
        tracing::info!(%source, nutrients = db.nutrients.len(), "loaded nutrient database");
        Ok(db)
    }

    /// Looks up a nutrient by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.nutrients.get(id)
    }

    /// Returns the nutrients in source order.
    #[must_use]
    pub const fn nutrients(&self) -> &IngredientList {
        &self.nutrients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MemoryLoader;
    use ccl_serving::{Equivalence, MassUnit, Units};
    use serde_json::json;

    #[test]
    fn from_value_reads_dv() {
        let db = NutrientDb::from_value(&json!({
            "vitaminA": { "name": "Vitamin A", "dv": "900 mcg RAE" },
            "vitaminC": { "dv": "90 mg" }
        }))
        .expect("database should parse");

        let vitamin_a = db.get("vitaminA").expect("entry should exist");
        assert_eq!(vitamin_a.name(), "Vitamin A");
        assert_eq!(
            vitamin_a.serving().map(|dv| *dv.units()),
            Some(Units::with_equivalence(
                MassUnit::Microgram,
                Equivalence::RetinolActivity
            ))
        );
        assert_eq!(db.get("vitaminC").map(Ingredient::name), Some("Vitamin C"));
        assert_eq!(db.nutrients().len(), 2);
    }

    #[test]
    fn load_reports_list_errors() {
        let loader = MemoryLoader::new().with_file("db.json", json!({ "Vitamin C": { "dv": "90 mg" } }));
        let error = NutrientDb::load(&SourceRef::new("db.json", None), &loader)
            .expect_err("invalid key should fail");

        assert_eq!(
            error.to_string(),
            "Nutrient 'Vitamin C' id 'Vitamin C' is not a valid id."
        );
    }
}
