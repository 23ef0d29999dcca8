//! Comparison tables and supplement facts panels for the CCL facts tooling
//!
//! This crate loads brand records and the nutrient database from JSON
//! sources, then assembles them into either a cross-brand
//! [`ComparisonTable`] or a single-brand [`FactsPanel`]. Problems that only
//! affect one cell are reported as [`Warning`]s next to the assembled
//! output, and the cell renders as a sentinel (`-` or `ERR`).
//!
//! ```rust
//! use ccl_facts::{Brand, NutrientDb, compare};
//! use serde_json::json;
//!
//! let db = NutrientDb::from_value(&json!({ "vitaminC": { "dv": "90 mg" } }))
//!     .expect("valid database");
//! let brand = Brand::from_value("acme", json!({
//!     "name": "Acme",
//!     "nutrition": { "vitaminC": "50 mg" }
//! }))
//! .expect("valid brand");
//!
//! let table = compare(&db, &[brand]);
//! assert_eq!(table.nutrients()[0].cells()[0].to_string(), "50 mg");
//! ```

mod brand;
mod cell;
pub mod comparison;
mod error;
pub mod facts;
mod nutrients;
pub mod source;
mod warning;


pub use brand::Brand;
pub use cell::{Cell, INVALID, MISSING};
pub use comparison::{ComparisonTable, compare};
pub use error::{LoadError, SourceError};
pub use facts::{FactsPanel, PercentDv, assemble};
pub use nutrients::NutrientDb;
pub use source::{FsLoader, SourceLoader, SourceRef};
pub use warning::Warning;
