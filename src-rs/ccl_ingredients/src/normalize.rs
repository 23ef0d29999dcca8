//! Normalization of raw ingredient lists.
//!
//! Supported shapes:
//!
//! 1. An object whose keys are ids. Each value is either a serving string or
//!    a data object with an optional `name` and an optional serving field.
//! 2. An array. Each element is either a name string or a data object with
//!    an `id` and/or a `name` and an optional serving field.
//!
//! Shape errors, id and name errors and duplicate ids abort the whole list.
//! A serving that fails to parse is recorded on its ingredient and the
//! remaining entries are still processed.

use ccl_serving::Serving;
use serde_json::{Map, Value};

use crate::{
    error::ListError,
    id::{id_to_name, name_to_id, verify_id},
    ingredient::{Ingredient, IngredientList},
    options::ListOptions,
    shape::{
        ArrayEntry, ListShape, ObjectEntry, inspect_array_entry, inspect_list,
        inspect_object_entry,
    },
};

/// Field of a data entry holding its own percent daily value text.
const PERCENT_DV_KEY: &str = "percent-dv";

/// Normalizes a raw ingredient list.
pub fn parse_list(raw: &Value, options: &ListOptions) -> Result<IngredientList, ListError> {
    let shape = inspect_list(raw).ok_or_else(|| ListError::NotAList {
        prefix: options.error_prefix.clone(),
    })?;

    let list = match shape {
        ListShape::Absent => IngredientList::new(),
        ListShape::Object(entries) => parse_object_list(entries, options)?,
        ListShape::Array(entries) => parse_array_list(entries, options)?,
    };

    tracing::debug!(
        prefix = %options.error_prefix,
        count = list.len(),
        errors = list.errors().count(),
        "normalized ingredient list"
    );

    Ok(list)
}

fn parse_object_list(
    entries: &Map<String, Value>,
    options: &ListOptions,
) -> Result<IngredientList, ListError> {
    let mut list = IngredientList::new();

    for (id, raw_entry) in entries {
        let entry = format!("{} '{id}'", options.error_prefix);

        if id.is_empty() {
            return Err(ListError::EmptyId { entry });
        }
        if !verify_id(id) {
            return Err(ListError::InvalidId {
                entry,
                id: id.clone(),
            });
        }

        let ingredient = match inspect_object_entry(raw_entry) {
            Some(ObjectEntry::Serving(serving_text)) => {
                let name = id_to_name(id);
                let serving = parse_serving(&entry, serving_text, options);
                Ingredient::new(id.clone(), name, serving)
            }
            Some(ObjectEntry::Data(data)) => {
                if data.contains_key("id") {
                    return Err(ListError::IdRestated { entry });
                }
                let name = optional_name(&entry, data)?.unwrap_or_else(|| id_to_name(id));
                let serving_text = serving_text(&entry, data, options)?;
                let serving = parse_serving(&entry, serving_text, options);
                Ingredient::new(id.clone(), name, serving)
                    .with_percent_dv(percent_dv(&entry, data)?)
            }
            None => return Err(ListError::InvalidEntry { entry }),
        };

        list.insert(&entry, ingredient)?;
    }

    Ok(list)
}

fn parse_array_list(entries: &[Value], options: &ListOptions) -> Result<IngredientList, ListError> {
    let mut list = IngredientList::new();

    for (index, raw_entry) in entries.iter().enumerate() {
        let entry = format!("{} [{index}]", options.error_prefix);

        let ingredient = match inspect_array_entry(raw_entry) {
            Some(ArrayEntry::Name(name)) => {
                if name.is_empty() {
                    return Err(ListError::EmptyName { entry });
                }
                let id = derive_id(&entry, name)?;
                Ingredient::new(id, name.to_string(), Ok(Serving::empty()))
            }
            Some(ArrayEntry::Data(data)) => {
                let explicit_id = optional_id(&entry, data)?;
                let name = optional_name(&entry, data)?;
                let (id, name) = match (explicit_id, name) {
                    (Some(id), Some(name)) => (id, name),
                    (Some(id), None) => {
                        let name = id_to_name(&id);
                        (id, name)
                    }
                    (None, Some(name)) => (derive_id(&entry, &name)?, name),
                    (None, None) => return Err(ListError::MissingName { entry }),
                };
                let serving_text = serving_text(&entry, data, options)?;
                let serving = parse_serving(&entry, serving_text, options);
                Ingredient::new(id, name, serving).with_percent_dv(percent_dv(&entry, data)?)
            }
            None => return Err(ListError::InvalidEntry { entry }),
        };

        list.insert(&entry, ingredient)?;
    }

    Ok(list)
}

/// Reads and validates an explicit `id` property.
fn optional_id(entry: &str, data: &Map<String, Value>) -> Result<Option<String>, ListError> {
    match data.get("id") {
        None => Ok(None),
        Some(Value::String(id)) if id.is_empty() => Err(ListError::EmptyId {
            entry: entry.to_string(),
        }),
        Some(Value::String(id)) if !verify_id(id) => Err(ListError::InvalidId {
            entry: entry.to_string(),
            id: id.clone(),
        }),
        Some(Value::String(id)) => Ok(Some(id.clone())),
        Some(_) => Err(ListError::IdNotString {
            entry: entry.to_string(),
        }),
    }
}

/// Reads an explicit `name` property, rejecting non-strings and empty names.
fn optional_name(entry: &str, data: &Map<String, Value>) -> Result<Option<String>, ListError> {
    match data.get("name") {
        None => Ok(None),
        Some(Value::String(name)) if name.is_empty() => Err(ListError::EmptyName {
            entry: entry.to_string(),
        }),
        Some(Value::String(name)) => Ok(Some(name.clone())),
        Some(_) => Err(ListError::NameNotString {
            entry: entry.to_string(),
        }),
    }
}

fn derive_id(entry: &str, name: &str) -> Result<String, ListError> {
    let id = name_to_id(name);
    if id.is_empty() {
        return Err(ListError::UnderivableId {
            entry: entry.to_string(),
            name: name.to_string(),
        });
    }
    Ok(id)
}

/// Reads the serving field. A missing or `null` field is an empty serving.
fn serving_text<'a>(
    entry: &str,
    data: &'a Map<String, Value>,
    options: &ListOptions,
) -> Result<&'a str, ListError> {
    match data.get(&options.serving_key) {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(ListError::ServingNotString {
            entry: entry.to_string(),
            serving_key: options.serving_key.clone(),
        }),
    }
}

/// Reads the entry's own percent daily value text. A missing or `null`
/// field is absent.
fn percent_dv(entry: &str, data: &Map<String, Value>) -> Result<Option<String>, ListError> {
    match data.get(PERCENT_DV_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ListError::PercentDvNotString {
            entry: entry.to_string(),
        }),
    }
}

/// Parses serving text, turning a failure into the ingredient's error message.
fn parse_serving(entry: &str, text: &str, options: &ListOptions) -> Result<Serving, String> {
    ccl_serving::parse(text).map_err(|error| {
        let message = format!("{entry} {} {error}", options.serving_key);
        tracing::warn!("{message}");
        message
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccl_serving::{MassUnit, Units};
    use serde_json::json;

    fn options() -> ListOptions {
        ListOptions::default()
    }

    mod object_form_tests {
        use super::*;

        #[test]
        fn serving_string_entry() {
            let list = parse_list(&json!({ "vitaminC": "90 mg" }), &options())
                .expect("list should parse");

            assert_eq!(list.len(), 1);
            let vitamin_c = list.get("vitaminC").expect("entry should exist");
            assert_eq!(vitamin_c.id(), "vitaminC");
            assert_eq!(vitamin_c.name(), "Vitamin C");
            let serving = vitamin_c.serving().expect("serving should parse");
            assert_eq!(serving.value(), Some(90.0));
            assert_eq!(serving.units(), &Units::mass(MassUnit::Milligram));
        }

        #[test]
        fn data_entry_with_name_and_serving() {
            let raw = json!({
                "folate": { "name": "Folate (as folic acid)", "serving": "400 mcg DFE" }
            });
            let list = parse_list(&raw, &options()).expect("list should parse");

            let folate = list.get("folate").expect("entry should exist");
            assert_eq!(folate.name(), "Folate (as folic acid)");
            assert_eq!(
                folate.serving().map(ToString::to_string),
                Some("400 mcg DFE".to_string())
            );
        }

        #[test]
        fn data_entry_without_serving() {
            let list = parse_list(&json!({ "zinc": {} }), &options()).expect("list should parse");

            let zinc = list.get("zinc").expect("entry should exist");
            assert_eq!(zinc.name(), "Zinc");
            assert!(zinc.serving().is_some_and(Serving::is_empty));
        }

        #[test]
        fn custom_serving_key() {
            let raw = json!({ "vitaminA": { "name": "Vitamin A", "dv": "900 mcg RAE" } });
            let list = parse_list(&raw, &ListOptions::new("dv", "Nutrient"))
                .expect("list should parse");

            assert_eq!(
                list.get("vitaminA")
                    .and_then(Ingredient::serving)
                    .map(ToString::to_string),
                Some("900 mcg RAE".to_string())
            );
        }

        #[test]
        fn keeps_source_order() {
            let raw = json!({ "zinc": "11 mg", "biotin": "30 mcg", "iron": "18 mg" });
            let list = parse_list(&raw, &options()).expect("list should parse");

            assert_eq!(list.ids().collect::<Vec<_>>(), ["zinc", "biotin", "iron"]);
        }

        #[test]
        fn serving_failure_is_contained() {
            let raw = json!({ "x": "not-a-number widgets", "y": "5 mg" });
            let list = parse_list(&raw, &options()).expect("list should still parse");

            let x = list.get("x").expect("failed entry is kept");
            assert_eq!(x.serving(), None);
            assert_eq!(
                x.error(),
                Some("Ingredient 'x' serving 'not-a-number widgets' failed to parse into value and units")
            );

            let y = list.get("y").expect("sibling entry is kept");
            assert!(y.serving().is_some());
        }

        #[test]
        fn id_restatement_is_an_error() {
            let raw = json!({ "zinc": { "id": "zinc", "serving": "11 mg" } });
            let error = parse_list(&raw, &options()).expect_err("restated id should fail");

            assert_eq!(
                error,
                ListError::IdRestated {
                    entry: "Ingredient 'zinc'".to_string()
                }
            );
        }

        #[test]
        fn invalid_key() {
            let raw = json!({ "Vitamin C": "90 mg" });
            let error = parse_list(&raw, &options()).expect_err("key should fail verification");

            assert!(matches!(error, ListError::InvalidId { id, .. } if id == "Vitamin C"));
        }

        #[test]
        fn empty_key() {
            let error = parse_list(&json!({ "": "90 mg" }), &options())
                .expect_err("empty key should fail");
            assert!(matches!(error, ListError::EmptyId { .. }));
        }

        #[test]
        fn non_string_serving() {
            let raw = json!({ "zinc": { "serving": 11 } });
            let error = parse_list(&raw, &options()).expect_err("numeric serving should fail");

            assert_eq!(
                error,
                ListError::ServingNotString {
                    entry: "Ingredient 'zinc'".to_string(),
                    serving_key: "serving".to_string(),
                }
            );
        }

        #[test]
        fn supplied_percent_dv() {
            let raw = json!({
                "biotin": { "serving": "30 mcg", "percent-dv": "100%" },
                "zinc": "11 mg",
                "iron": { "serving": "9 mg", "percent-dv": null }
            });
            let list = parse_list(&raw, &options()).expect("list should parse");

            assert_eq!(list.get("biotin").and_then(Ingredient::percent_dv), Some("100%"));
            assert_eq!(list.get("zinc").and_then(Ingredient::percent_dv), None);
            assert_eq!(list.get("iron").and_then(Ingredient::percent_dv), None);
        }

        #[test]
        fn non_string_percent_dv() {
            let raw = json!({ "biotin": { "serving": "30 mcg", "percent-dv": 100 } });
            let error = parse_list(&raw, &options()).expect_err("numeric percent-dv should fail");

            assert_eq!(
                error.to_string(),
                "Ingredient 'biotin' property 'percent-dv' is not a string."
            );
        }

        #[test]
        fn non_string_name() {
            let raw = json!({ "zinc": { "name": 7 } });
            let error = parse_list(&raw, &options()).expect_err("numeric name should fail");
            assert!(matches!(error, ListError::NameNotString { .. }));
        }

        #[test]
        fn invalid_entry_type() {
            let error = parse_list(&json!({ "zinc": 11 }), &options())
                .expect_err("numeric entry should fail");
            assert_eq!(
                error.to_string(),
                "Ingredient 'zinc' must be an object or string."
            );
        }
    }

    mod array_form_tests {
        use super::*;

        #[test]
        fn data_entry_with_name() {
            let raw = json!([{ "name": "Vitamin C", "serving": "90 mg" }]);
            let list = parse_list(&raw, &options()).expect("list should parse");

            let vitamin_c = list.get("vitaminC").expect("id should be derived");
            assert_eq!(vitamin_c.name(), "Vitamin C");
            assert_eq!(
                vitamin_c.serving().map(ToString::to_string),
                Some("90 mg".to_string())
            );
        }

        #[test]
        fn name_strings() {
            let raw = json!(["Gelatin", "Rice Flour", "Magnesium Stearate"]);
            let list = parse_list(&raw, &options()).expect("list should parse");

            assert_eq!(
                list.ids().collect::<Vec<_>>(),
                ["gelatin", "riceFlour", "magnesiumStearate"]
            );
            assert_eq!(
                list.iter().map(Ingredient::name).collect::<Vec<_>>(),
                ["Gelatin", "Rice Flour", "Magnesium Stearate"]
            );
        }

        #[test]
        fn explicit_id_without_name() {
            let raw = json!([{ "id": "vitaminB12", "serving": "2.4 mcg" }]);
            let list = parse_list(&raw, &options()).expect("list should parse");

            let b12 = list.get("vitaminB12").expect("entry should exist");
            assert_eq!(b12.name(), "Vitamin B12");
        }

        #[test]
        fn supplied_percent_dv() {
            let raw = json!([{ "name": "Biotin", "serving": "30 mcg", "percent-dv": "100%" }]);
            let list = parse_list(&raw, &options()).expect("list should parse");

            assert_eq!(list.get("biotin").and_then(Ingredient::percent_dv), Some("100%"));
        }

        #[test]
        fn explicit_id_and_name() {
            let raw = json!([{ "id": "coq10", "name": "Coenzyme Q10" }]);
            let list = parse_list(&raw, &options()).expect("list should parse");

            let coq10 = list.get("coq10").expect("explicit id should be used");
            assert_eq!(coq10.name(), "Coenzyme Q10");
        }

        #[test]
        fn duplicate_derived_id() {
            let raw = json!([{ "name": "A" }, { "name": "A" }]);
            let error = parse_list(&raw, &ListOptions::new("serving", "Supplement"))
                .expect_err("duplicate should fail");

            assert_eq!(
                error,
                ListError::DuplicateId {
                    entry: "Supplement [1]".to_string(),
                    id: "a".to_string(),
                }
            );
            assert_eq!(error.to_string(), "Supplement [1] has duplicate id 'a'.");
        }

        #[test]
        fn duplicate_between_name_and_id() {
            let raw = json!(["Vitamin D", { "id": "vitaminD", "serving": "20 mcg" }]);
            let error = parse_list(&raw, &options()).expect_err("duplicate should fail");
            assert!(matches!(error, ListError::DuplicateId { id, .. } if id == "vitaminD"));
        }

        #[test]
        fn serving_failure_is_contained() {
            let raw = json!([
                { "name": "Iron", "serving": "18 kg" },
                { "name": "Zinc", "serving": "11 mg" }
            ]);
            let list = parse_list(&raw, &ListOptions::new("serving", "Nutrient"))
                .expect("list should still parse");

            assert_eq!(
                list.get("iron").and_then(Ingredient::error),
                Some("Nutrient [0] serving '18 kg' parsed units 'kg' not known")
            );
            assert!(list.get("zinc").and_then(Ingredient::serving).is_some());
            assert_eq!(list.errors().count(), 1);
        }

        #[test]
        fn empty_name_string() {
            let error = parse_list(&json!([""]), &options()).expect_err("empty name should fail");
            assert_eq!(
                error,
                ListError::EmptyName {
                    entry: "Ingredient [0]".to_string()
                }
            );
        }

        #[test]
        fn missing_id_and_name() {
            let raw = json!([{ "serving": "5 mg" }]);
            let error = parse_list(&raw, &options()).expect_err("anonymous entry should fail");
            assert!(matches!(error, ListError::MissingName { .. }));
        }

        #[test]
        fn underivable_id() {
            let error = parse_list(&json!(["100%"]), &options())
                .expect_err("name without letters should fail");
            assert!(matches!(error, ListError::UnderivableId { name, .. } if name == "100%"));
        }

        #[test]
        fn invalid_explicit_id() {
            let raw = json!([{ "id": "Vitamin-C" }]);
            let error = parse_list(&raw, &options()).expect_err("id should fail verification");
            assert!(matches!(error, ListError::InvalidId { .. }));
        }

        #[test]
        fn non_string_id() {
            let raw = json!([{ "id": 3, "name": "Three" }]);
            let error = parse_list(&raw, &options()).expect_err("numeric id should fail");
            assert!(matches!(error, ListError::IdNotString { .. }));
        }

        #[test]
        fn invalid_entry_type() {
            let error =
                parse_list(&json!([["nested"]]), &options()).expect_err("nested array should fail");
            assert_eq!(
                error,
                ListError::InvalidEntry {
                    entry: "Ingredient [0]".to_string()
                }
            );
        }
    }

    mod list_shape_tests {
        use super::*;

        #[test]
        fn null_is_empty() {
            let list = parse_list(&Value::Null, &options()).expect("null list should parse");
            assert!(list.is_empty());
        }

        #[test]
        fn scalar_is_an_error() {
            let error = parse_list(&json!("vitaminC"), &ListOptions::new("dv", "Nutrient"))
                .expect_err("string list should fail");
            assert_eq!(error.to_string(), "Nutrient list must be an array or object.");
        }
    }
}
