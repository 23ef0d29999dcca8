//! Ingredient list normalization for the CCL facts tooling
//!
//! Brand and reference data files describe ingredient lists in several
//! shapes. [`parse_list`] turns any of them into an [`IngredientList`]: an
//! ordered mapping from id to [`Ingredient`], where every ingredient has a
//! name and either a parsed serving or the message explaining why its
//! serving did not parse.
//!
//! ```rust
//! use ccl_ingredients::{ListOptions, parse_list};
//! use serde_json::json;
//!
//! let raw = json!([{ "name": "Vitamin C", "serving": "90 mg" }, "Gelatin"]);
//! let list = parse_list(&raw, &ListOptions::default()).expect("valid list");
//!
//! assert_eq!(list.ids().collect::<Vec<_>>(), ["vitaminC", "gelatin"]);
//! ```

mod error;
mod id;
mod ingredient;
mod normalize;
mod options;
pub mod shape;

pub use error::ListError;
pub use id::{id_to_name, name_to_id, verify_id};
pub use ingredient::{Ingredient, IngredientList};
pub use options::ListOptions;

use serde_json::Value;

/// Normalizes a raw ingredient list.
///
/// `raw` may be an object keyed by id, an array of names or data objects, or
/// `null` (an empty list). See [`ListOptions`] for the serving key and error
/// prefix.
///
/// # Errors
///
/// Returns an error if the list or one of its entries has an unsupported
/// shape, if an id or name is missing or invalid, or if two entries share
/// an id. Serving parse failures do not produce an error; they are recorded
/// on the affected [`Ingredient`].
pub fn parse_list(raw: &Value, options: &ListOptions) -> Result<IngredientList, ListError> {
    normalize::parse_list(raw, options)
}
