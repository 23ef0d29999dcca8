use crate::error::Context;

/// Trait for errors that can be shown to a user as a [`CclError`](crate::CclError).
pub trait AsCclError {
    /// Returns the primary error message.
    ///
    /// The message should make sense on its own, without the source label
    /// or any of the context lines.
    fn message(&self) -> String;

    /// Returns additional notes and help text about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
