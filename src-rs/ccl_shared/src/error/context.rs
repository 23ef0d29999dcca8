/// Extra information attached to an error message.
///
/// Contexts are printed below the main message so that a reader can tell
/// which source or entry was involved and what to change.
///
/// # Examples
///
/// ```rust
/// use ccl_shared::error::Context;
///
/// let note = Context::Note("ids are derived from names when no id is given".to_string());
/// let help = Context::Help("rename one of the entries".to_string());
///
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Supplementary detail about the error.
    Note(String),

    /// A suggestion for resolving the error.
    Help(String),
}
