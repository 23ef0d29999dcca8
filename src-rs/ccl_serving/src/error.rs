//! Errors produced while parsing a serving string.

use ccl_shared::{AsCclError, Context};
use thiserror::Error;

use crate::units::{Equivalence, MassUnit};

/// The reasons a serving string can fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServingError {
    /// The text is not shaped like `[value] [unit] [equivalence]`
    #[error("'{input}' failed to parse into value and units")]
    Malformed {
        /// The full text that was parsed
        input: String,
    },
    /// The unit token is not a known mass unit
    #[error("'{input}' parsed units '{unit}' not known")]
    UnknownUnit {
        /// The full text that was parsed
        input: String,
        /// The unrecognized unit token
        unit: String,
    },
    /// The equivalence token is not a known qualifier
    #[error("'{input}' parsed units '{unit} {equivalence}' not known")]
    UnknownEquivalence {
        /// The full text that was parsed
        input: String,
        /// The unit token preceding the equivalence
        unit: String,
        /// The unrecognized equivalence token
        equivalence: String,
    },
    /// An equivalence qualifier appeared with no mass unit before it
    #[error("'{input}' has equivalence '{equivalence}' without a mass unit")]
    EquivalenceWithoutUnit {
        /// The full text that was parsed
        input: String,
        /// The equivalence that was found
        equivalence: Equivalence,
    },
}

impl ServingError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::Malformed {
            input: input.to_string(),
        }
    }

    pub(crate) fn unknown_unit(input: &str, unit: &str) -> Self {
        Self::UnknownUnit {
            input: input.to_string(),
            unit: unit.to_string(),
        }
    }

    pub(crate) fn unknown_equivalence(input: &str, unit: &str, equivalence: &str) -> Self {
        Self::UnknownEquivalence {
            input: input.to_string(),
            unit: unit.to_string(),
            equivalence: equivalence.to_string(),
        }
    }

    pub(crate) fn equivalence_without_unit(input: &str, equivalence: Equivalence) -> Self {
        Self::EquivalenceWithoutUnit {
            input: input.to_string(),
            equivalence,
        }
    }
}

fn symbol_list<const N: usize>(symbols: [&str; N]) -> String {
    symbols.join(", ")
}

impl AsCclError for ServingError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Malformed { .. } => vec![Context::Note(
                "servings are written as `<value> <unit> <equivalence>`, e.g. `900 mcg RAE`"
                    .to_string(),
            )],
            Self::UnknownUnit { .. } => vec![Context::Help(format!(
                "known units are {}",
                symbol_list(MassUnit::ALL.map(MassUnit::symbol))
            ))],
            Self::UnknownEquivalence { .. } => vec![Context::Help(format!(
                "known equivalences are {}",
                symbol_list(Equivalence::ALL.map(Equivalence::symbol))
            ))],
            Self::EquivalenceWithoutUnit { equivalence, .. } => vec![Context::Help(format!(
                "add a mass unit before the equivalence, e.g. `mcg {equivalence}`"
            ))],
        }
    }
}
