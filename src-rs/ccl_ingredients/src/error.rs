//! Errors that abort parsing of a whole ingredient list.

use ccl_shared::{AsCclError, Context};
use thiserror::Error;

/// An error that invalidates an entire ingredient list.
///
/// Each variant carries the entry label the error was found at, such as
/// `Supplement [2]` for an array entry or `Nutrient 'vitaminC'` for an
/// object entry. Serving parse failures are not list errors; they are kept
/// on the ingredient itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The list is neither an object nor an array
    #[error("{prefix} list must be an array or object.")]
    NotAList {
        /// The configured error prefix
        prefix: String,
    },
    /// An entry has a type the list shape does not allow
    #[error("{entry} must be an object or string.")]
    InvalidEntry {
        /// The entry label
        entry: String,
    },
    /// An explicit id is empty
    #[error("{entry} id must not be an empty string.")]
    EmptyId {
        /// The entry label
        entry: String,
    },
    /// An explicit id is not a string
    #[error("{entry} property 'id' is not a string.")]
    IdNotString {
        /// The entry label
        entry: String,
    },
    /// An explicit id does not have the id form
    #[error("{entry} id '{id}' is not a valid id.")]
    InvalidId {
        /// The entry label
        entry: String,
        /// The rejected id
        id: String,
    },
    /// An object-form entry repeats its id inside its data
    #[error("{entry} must not restate property 'id'.")]
    IdRestated {
        /// The entry label
        entry: String,
    },
    /// An entry has neither an id nor a name
    #[error("{entry} property 'name' not set or is not a string.")]
    MissingName {
        /// The entry label
        entry: String,
    },
    /// A name is present but is not a string
    #[error("{entry} property 'name' is not a string.")]
    NameNotString {
        /// The entry label
        entry: String,
    },
    /// A name is present but empty
    #[error("{entry} property 'name' must not be an empty string.")]
    EmptyName {
        /// The entry label
        entry: String,
    },
    /// No id can be derived from a name
    #[error("{entry} name '{name}' does not produce a valid id.")]
    UnderivableId {
        /// The entry label
        entry: String,
        /// The name the id was derived from
        name: String,
    },
    /// The serving field is present but is not a string
    #[error("{entry} property '{serving_key}' is not a string.")]
    ServingNotString {
        /// The entry label
        entry: String,
        /// The configured serving key
        serving_key: String,
    },
    /// The percent daily value field is present but is not a string
    #[error("{entry} property 'percent-dv' is not a string.")]
    PercentDvNotString {
        /// The entry label
        entry: String,
    },
    /// Two entries resolve to the same id
    #[error("{entry} has duplicate id '{id}'.")]
    DuplicateId {
        /// The label of the second entry
        entry: String,
        /// The repeated id
        id: String,
    },
}

impl AsCclError for ListError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidId { .. } => vec![Context::Note(
                "ids start with a lowercase letter followed by letters and digits, e.g. `vitaminB12`"
                    .to_string(),
            )],
            Self::UnderivableId { .. } => vec![
                Context::Note("ids are derived from the letters and digits of a name".to_string()),
                Context::Help("give the entry an explicit 'id'".to_string()),
            ],
            Self::IdRestated { .. } => vec![Context::Note(
                "in object form the key is the id".to_string(),
            )],
            Self::DuplicateId { .. } => vec![
                Context::Note("ids are derived from names when no id is given".to_string()),
                Context::Help("remove the repeated entry or give it a distinct 'id'".to_string()),
            ],
            Self::NotAList { .. }
            | Self::InvalidEntry { .. }
            | Self::EmptyId { .. }
            | Self::IdNotString { .. }
            | Self::MissingName { .. }
            | Self::NameNotString { .. }
            | Self::EmptyName { .. }
            | Self::ServingNotString { .. }
            | Self::PercentDvNotString { .. } => vec![],
        }
    }
}
