//! Errors for loading brand records and the nutrient database.

use std::{io, path::PathBuf};

use ccl_ingredients::ListError;
use ccl_shared::{AsCclError, Context};
use thiserror::Error;

/// An error reading a JSON source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// The file that was read
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
    /// The file is not valid JSON
    #[error("'{}' is not valid JSON: {source}", path.display())]
    Json {
        /// The file that was parsed
        path: PathBuf,
        /// The underlying JSON error
        source: serde_json::Error,
    },
    /// The selected property is not in the file
    #[error("Source file '{}' property '{prop}' does not exist.", path.display())]
    MissingProperty {
        /// The file that was loaded
        path: PathBuf,
        /// The missing property
        prop: String,
    },
}

impl AsCclError for SourceError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::MissingProperty { .. } => vec![Context::Help(
                "the property after `#` must be a top-level key of the file".to_string(),
            )],
            Self::Io { .. } | Self::Json { .. } => vec![],
        }
    }
}

/// An error loading a brand record or the nutrient database.
///
/// Any of these fails the whole record; other records are unaffected.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be loaded
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The record does not have the expected fields
    #[error("record is malformed: {0}")]
    Record(serde_json::Error),
    /// One of the record's ingredient lists is invalid
    #[error(transparent)]
    List(#[from] ListError),
}

impl AsCclError for LoadError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Source(error) => error.context(),
            Self::Record(_) => vec![Context::Note(
                "a brand record needs a string 'name' and optional 'nutrition', 'supplements' and 'otherIngredients' lists"
                    .to_string(),
            )],
            Self::List(error) => error.context(),
        }
    }
}
