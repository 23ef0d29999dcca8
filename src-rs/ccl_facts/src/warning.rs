//! Non-fatal problems found while assembling tables.

use std::fmt;

use ccl_serving::Units;

/// A problem that affects one cell or row but not the rest of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A brand lists a nutrient that the nutrient database does not know
    UnknownIngredient {
        /// The brand that listed the nutrient
        brand: String,
        /// The nutrient id
        id: String,
    },
    /// A brand supplies a serving in units other than the display units
    UnitMismatch {
        /// The brand that supplied the serving
        brand: String,
        /// The ingredient id
        id: String,
        /// The units the serving must be supplied in
        required: Units,
    },
    /// A brand's serving text failed to parse
    InvalidServing {
        /// The brand that supplied the serving
        brand: String,
        /// The ingredient id
        id: String,
        /// The parse error message
        message: String,
    },
    /// A nutrient database entry's daily value failed to parse
    InvalidReference {
        /// The nutrient id
        id: String,
        /// The parse error message
        message: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIngredient { brand, id } => write!(
                f,
                "Brand '{brand}' ingredient '{id}' is not in the nutrient database."
            ),
            Self::UnitMismatch {
                brand,
                id,
                required,
            } => write!(
                f,
                "Brand '{brand}' ingredient '{id}' must be supplied in units of '{required}'."
            ),
            Self::InvalidServing { brand, id, message } => {
                write!(f, "Brand '{brand}' ingredient '{id}': {message}")
            }
            Self::InvalidReference { id, message } => {
                write!(f, "Nutrient database entry '{id}': {message}")
            }
        }
    }
}

/// Collects warnings in the order they are found and logs each one.
#[derive(Debug, Default)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    pub(crate) fn push(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
        self.0.push(warning);
    }

    pub(crate) fn into_vec(self) -> Vec<Warning> {
        self.0
    }
}
