/// Options for normalizing an ingredient list.
///
/// The serving key names the field that holds the serving text in data
/// objects, so the same rules serve daily-value tables (`"dv"`) and brand
/// servings (`"serving"`). The error prefix starts every error message and
/// entry label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Name of the serving field in entry data objects
    pub serving_key: String,
    /// Prefix for error messages
    pub error_prefix: String,
}

impl ListOptions {
    /// Creates options with the given serving key and error prefix.
    #[must_use]
    pub fn new(serving_key: impl Into<String>, error_prefix: impl Into<String>) -> Self {
        Self {
            serving_key: serving_key.into(),
            error_prefix: error_prefix.into(),
        }
    }
}

impl Default for ListOptions {
    /// Options for a plain ingredient list: serving key `serving`, prefix
    /// `Ingredient`.
    fn default() -> Self {
        Self::new("serving", "Ingredient")
    }
}
