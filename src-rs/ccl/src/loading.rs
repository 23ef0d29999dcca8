//! Loading every source a command needs.
//!
//! Sources are loaded one after another. A source that fails is reported
//! on its own and left out; the others are still used.

use ccl_facts::{Brand, LoadError, NutrientDb, SourceLoader, SourceRef};
use ccl_shared::CclError;

/// Converts a load failure into an error labelled with its source.
pub fn convert_error(source: &SourceRef, error: &LoadError) -> CclError {
    CclError::from_error(error, source.to_string())
}

/// Loads the nutrient database.
pub fn load_nutrients(
    source: &SourceRef,
    loader: &impl SourceLoader,
) -> Result<NutrientDb, CclError> {
    NutrientDb::load(source, loader).map_err(|error| convert_error(source, &error))
}

/// Loads a brand.
pub fn load_brand(source: &SourceRef, loader: &impl SourceLoader) -> Result<Brand, CclError> {
    Brand::load(source, loader).map_err(|error| convert_error(source, &error))
}

/// Loads brands in order, keeping the ones that load and the errors of the
/// ones that do not.
pub fn load_brands(
    sources: &[SourceRef],
    loader: &impl SourceLoader,
) -> (Vec<Brand>, Vec<CclError>) {
    let mut brands = Vec::with_capacity(sources.len());
    let mut errors = Vec::new();

    for source in sources {
        match load_brand(source, loader) {
            Ok(brand) => brands.push(brand),
            Err(error) => errors.push(error),
        }
    }

    (brands, errors)
}
