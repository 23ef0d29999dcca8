//! Loading JSON data sources.
//!
//! A source is a file plus an optional top-level property, written
//! `file.json` or `file.json#property`. When a property is given, only that
//! property's value is used, which lets one file hold several records.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde_json::Value;

use crate::error::SourceError;

/// A reference to a JSON file and an optional property within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRef {
    file: PathBuf,
    prop: Option<String>,
}

impl SourceRef {
    /// Creates a source reference.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, prop: Option<String>) -> Self {
        Self {
            file: file.into(),
            prop,
        }
    }

    /// Returns the file path.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Returns the selected property, if any.
    #[must_use]
    pub fn prop(&self) -> Option<&str> {
        self.prop.as_deref()
    }

    /// Returns the id a record loaded from this source is known by.
    ///
    /// This is the property name when there is one, otherwise the file stem.
    #[must_use]
    pub fn record_id(&self) -> String {
        self.prop.clone().unwrap_or_else(|| {
            self.file.file_stem().map_or_else(
                || self.file.display().to_string(),
                |stem| stem.to_string_lossy().into_owned(),
            )
        })
    }
}

impl FromStr for SourceRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('#') {
            Some((file, _)) if file.is_empty() => Err(format!("source '{s}' has no file")),
            Some((_, prop)) if prop.is_empty() => Err(format!("source '{s}' has an empty property")),
            Some((file, prop)) => Ok(Self::new(file, Some(prop.to_string()))),
            None if s.is_empty() => Err("source must not be empty".to_string()),
            None => Ok(Self::new(s, None)),
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.file.display())?;
        if let Some(prop) = &self.prop {
            write!(f, "[{prop}]")?;
        }
        Ok(())
    }
}

/// Reads JSON documents.
pub trait SourceLoader {
    /// Reads and parses the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or is not valid JSON.
    fn load_json(&self, path: &Path) -> Result<Value, SourceError>;
}

/// A [`SourceLoader`] that reads from the file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load_json(&self, path: &Path) -> Result<Value, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Loads a source, selecting its property when one is given.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the property does not
/// exist.
pub fn load(source: &SourceRef, loader: &impl SourceLoader) -> Result<Value, SourceError> {
    tracing::debug!(%source, "loading source");

    let document = loader.load_json(source.file())?;

    let Some(prop) = source.prop() else {
        return Ok(document);
    };

    let value = match document {
        Value::Object(mut map) => map.remove(prop),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            None
        }
    };

    value.ok_or_else(|| SourceError::MissingProperty {
        path: source.file().to_path_buf(),
        prop: prop.to_string(),
    })
}
