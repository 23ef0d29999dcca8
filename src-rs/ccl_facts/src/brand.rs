//! Brand records.

use std::fmt;

use ccl_ingredients::{IngredientList, ListOptions, parse_list};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::LoadError,
    source::{self, SourceLoader, SourceRef},
};

/// A quantity written either as text or as a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum Quantity {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// The JSON shape of a brand record before its lists are normalized.
///
/// Keys are camel case. The kebab-case spellings used by supplement facts
/// data files are accepted too.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrandRecord {
    name: String,
    #[serde(default, alias = "nutrients")]
    nutrition: Value,
    #[serde(default)]
    supplements: Value,
    #[serde(default, alias = "other-ingredients")]
    other_ingredients: Value,
    #[serde(default, alias = "serving-size")]
    serving_size: Option<Quantity>,
    #[serde(default, alias = "servings-per-container")]
    servings_per_container: Option<Quantity>,
    #[serde(default, alias = "show-percent-dv-footnote")]
    show_pdv_footnote: bool,
    #[serde(default, alias = "show-no-dv-footnote")]
    show_ndv_footnote: bool,
}

/// A brand (or other product source) with its normalized ingredient lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    id: String,
    name: String,
    nutrition: IngredientList,
    supplements: IngredientList,
    other_ingredients: IngredientList,
    serving_size: Option<String>,
    servings_per_container: Option<String>,
    show_pdv_footnote: bool,
    show_ndv_footnote: bool,
}

impl Brand {
    /// Builds a brand from a raw record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing its name, has fields of the
    /// wrong type, or has an invalid ingredient list.
    pub fn from_value(id: impl Into<String>, raw: Value) -> Result<Self, LoadError> {
        let record: BrandRecord = serde_json::from_value(raw).map_err(LoadError::Record)?;

        let nutrition = parse_list(&record.nutrition, &ListOptions::new("serving", "Nutrient"))?;
        let supplements =
            parse_list(&record.supplements, &ListOptions::new("serving", "Supplement"))?;
        let other_ingredients = parse_list(&record.other_ingredients, &ListOptions::default())?;

        Ok(Self {
            id: id.into(),
            name: record.name,
            nutrition,
            supplements,
            other_ingredients,
            serving_size: record.serving_size.map(|quantity| quantity.to_string()),
            servings_per_container: record
                .servings_per_container
                .map(|quantity| quantity.to_string()),
            show_pdv_footnote: record.show_pdv_footnote,
            show_ndv_footnote: record.show_ndv_footnote,
        })
    }

    /// Loads a brand from a source. The brand id is the source's record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or the record is
    /// invalid.
    pub fn load(source: &SourceRef, loader: &impl SourceLoader) -> Result<Self, LoadError> {
        let raw = source::load(source, loader)?;
        let brand = Self::from_value(source.record_id(), raw)?;
        tracing::info!(
            %source,
            id = %brand.id,
            nutrition = brand.nutrition.len(),
            supplements = brand.supplements.len(),
            "loaded brand"
        );
        Ok(brand)
    }

    /// Returns the brand id used in warnings.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nutrition list.
    #[must_use]
    pub const fn nutrition(&self) -> &IngredientList {
        &self.nutrition
    }

    /// Returns the supplement list.
    #[must_use]
    pub const fn supplements(&self) -> &IngredientList {
        &self.supplements
    }

    /// Returns the other (inactive) ingredients.
    #[must_use]
    pub const fn other_ingredients(&self) -> &IngredientList {
        &self.other_ingredients
    }

    /// Returns the serving size text, if given.
    #[must_use]
    pub fn serving_size(&self) -> Option<&str> {
        self.serving_size.as_deref()
    }

    /// Returns the servings-per-container text, if given.
    #[must_use]
    pub fn servings_per_container(&self) -> Option<&str> {
        self.servings_per_container.as_deref()
    }

    /// Returns true if the percent daily value footnote should be shown.
    #[must_use]
    pub const fn show_pdv_footnote(&self) -> bool {
        self.show_pdv_footnote
    }

    /// Returns true if the "daily value not established" footnote should be shown.
    #[must_use]
    pub const fn show_ndv_footnote(&self) -> bool {
        self.show_ndv_footnote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MemoryLoader;
    use ccl_ingredients::ListError;
    use serde_json::json;

    #[test]
    fn full_record() {
        let brand = Brand::from_value(
            "acme",
            json!({
                "name": "Acme Daily",
                "nutrition": { "vitaminC": "90 mg", "zinc": "11 mg" },
                "supplements": [{ "name": "Ashwagandha Root", "serving": "600 mg" }],
                "otherIngredients": ["Gelatin", "Rice Flour"],
                "servingSize": "2 Capsules",
                "servingsPerContainer": 30,
                "showPdvFootnote": true
            }),
        )
        .expect("record should parse");

        assert_eq!(brand.id(), "acme");
        assert_eq!(brand.name(), "Acme Daily");
        assert_eq!(brand.nutrition().ids().collect::<Vec<_>>(), ["vitaminC", "zinc"]);
        assert!(brand.supplements().contains("ashwagandhaRoot"));
        assert_eq!(brand.other_ingredients().len(), 2);
        assert_eq!(brand.serving_size(), Some("2 Capsules"));
        assert_eq!(brand.servings_per_container(), Some("30"));
        assert!(brand.show_pdv_footnote());
        assert!(!brand.show_ndv_footnote());
    }

    #[test]
    fn minimal_record() {
        let brand = Brand::from_value("b", json!({ "name": "Bare" })).expect("record should parse");

        assert!(brand.nutrition().is_empty());
        assert!(brand.supplements().is_empty());
        assert!(brand.other_ingredients().is_empty());
        assert_eq!(brand.serving_size(), None);
    }

    #[test]
    fn nutrients_alias() {
        let brand = Brand::from_value("c", json!({ "name": "C", "nutrients": { "iron": "18 mg" } }))
            .expect("record should parse");
        assert!(brand.nutrition().contains("iron"));
    }

    #[test]
    fn kebab_case_keys() {
        let brand = Brand::from_value(
            "f",
            json!({
                "name": "F",
                "other-ingredients": ["Cellulose"],
                "serving-size": "1 Scoop",
                "servings-per-container": "20",
                "show-percent-dv-footnote": true,
                "show-no-dv-footnote": true
            }),
        )
        .expect("record should parse");

        assert!(brand.other_ingredients().contains("cellulose"));
        assert_eq!(brand.serving_size(), Some("1 Scoop"));
        assert_eq!(brand.servings_per_container(), Some("20"));
        assert!(brand.show_pdv_footnote());
        assert!(brand.show_ndv_footnote());
    }

    #[test]
    fn missing_name() {
        let error = Brand::from_value("d", json!({ "nutrition": {} })).expect_err("name is required");
        assert!(matches!(error, LoadError::Record(_)));
    }

    #[test]
    fn list_error_fails_the_brand() {
        let error = Brand::from_value(
            "e",
            json!({ "name": "E", "supplements": [{ "name": "A" }, { "name": "A" }] }),
        )
        .expect_err("duplicate should fail");

        assert!(matches!(
            error,
            LoadError::List(ListError::DuplicateId { ref entry, ref id })
                if entry == "Supplement [1]" && id == "a"
        ));
    }

    #[test]
    fn load_uses_record_id() {
        let loader = MemoryLoader::new().with_file(
            "brands.json",
            json!({ "zenith": { "name": "Zenith Labs" } }),
        );
        let source = SourceRef::new("brands.json", Some("zenith".to_string()));

        let brand = Brand::load(&source, &loader).expect("brand should load");
        assert_eq!(brand.id(), "zenith");
        assert_eq!(brand.name(), "Zenith Labs");
    }
}
