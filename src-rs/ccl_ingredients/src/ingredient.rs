//! Normalized ingredients and ordered ingredient lists.

use ccl_serving::Serving;
use indexmap::IndexMap;

use crate::error::ListError;

/// A single normalized ingredient.
///
/// The serving is a `Result`: when the serving text failed to parse, the
/// ingredient is still part of its list and carries the prefixed parser
/// message instead of a serving.
///
/// A data entry may also supply its own percent daily value text, which
/// facts panels show as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    id: String,
    name: String,
    serving: Result<Serving, String>,
    percent_dv: Option<String>,
}

impl Ingredient {
    /// Creates an ingredient with no supplied percent daily value.
    #[must_use]
    pub const fn new(id: String, name: String, serving: Result<Serving, String>) -> Self {
        Self {
            id,
            name,
            serving,
            percent_dv: None,
        }
    }

    /// Sets the supplied percent daily value.
    #[must_use]
    pub fn with_percent_dv(mut self, percent_dv: Option<String>) -> Self {
        self.percent_dv = percent_dv;
        self
    }

    /// Returns the id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the serving, or the error message if it failed to parse.
    pub fn serving_result(&self) -> Result<&Serving, &str> {
        self.serving.as_ref().map_err(String::as_str)
    }

    /// Returns the serving if it parsed.
    #[must_use]
    pub fn serving(&self) -> Option<&Serving> {
        self.serving.as_ref().ok()
    }

    /// Returns the serving error message if the serving failed to parse.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.serving.as_ref().err().map(String::as_str)
    }

    /// Returns the percent daily value text supplied by the entry, if any.
    #[must_use]
    pub fn percent_dv(&self) -> Option<&str> {
        self.percent_dv.as_deref()
    }
}

/// An ordered mapping from id to [`Ingredient`].
///
/// Iteration follows source order and ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientList {
    ingredients: IndexMap<String, Ingredient>,
}

impl IngredientList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an ingredient, failing if its id is already present.
    ///
    /// `entry` labels the ingredient in the duplicate-id error.
    pub(crate) fn insert(&mut self, entry: &str, ingredient: Ingredient) -> Result<(), ListError> {
        if self.ingredients.contains_key(ingredient.id()) {
            return Err(ListError::DuplicateId {
                entry: entry.to_string(),
                id: ingredient.id().to_string(),
            });
        }

        self.ingredients.insert(ingredient.id.clone(), ingredient);
        Ok(())
    }

    /// Looks up an ingredient by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    /// Returns true if the list has an ingredient with this id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ingredients.contains_key(id)
    }

    /// Returns the number of ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Iterates over the ids in source order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ingredients.keys().map(String::as_str)
    }

    /// Iterates over the ingredients in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// Iterates over the ingredients whose serving failed to parse.
    pub fn errors(&self) -> impl Iterator<Item = &Ingredient> {
        self.iter().filter(|ingredient| ingredient.error().is_some())
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a Ingredient;
    type IntoIter = indexmap::map::Values<'a, String, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.ingredients.values()
    }
}
