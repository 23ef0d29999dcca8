//! Errors for the CCL facts tooling

mod context;
mod traits;

pub use context::Context;
pub use traits::AsCclError;

/// Unified error representation for display
///
/// The record holds the label of the data source the error came from (for
/// example `'brands/acme.json'[nutrition]`), a human-readable message, and
/// any notes or help attached by the originating error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CclError {
    /// Label of the source that failed
    source: String,
    /// Human-readable error message
    message: String,
    /// Notes and help text
    context: Vec<Context>,
}

impl CclError {
    /// Creates a new `CclError` from an error that implements `AsCclError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccl_shared::error::{AsCclError, CclError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsCclError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("Something went wrong".to_string());
    /// let ccl_error = CclError::from_error(&error, "'acme.json'");
    /// assert_eq!(ccl_error.message(), "Something went wrong");
    /// assert_eq!(ccl_error.source(), "'acme.json'");
    /// ```
    pub fn from_error(error: &impl AsCclError, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: error.message(),
            context: error.context(),
        }
    }

    /// Returns the label of the source the error came from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the notes and help text
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
