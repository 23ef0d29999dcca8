//! Table cells and their sentinels.

use std::fmt;

use ccl_serving::Serving;

/// Text shown for an ingredient a source does not list.
pub const MISSING: &str = "-";

/// Text shown for a serving that failed to parse or has the wrong units.
pub const INVALID: &str = "ERR";

/// One amount cell of a comparison table or facts panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// A serving in the display units
    Value(Serving),
    /// The source does not list the ingredient
    Missing,
    /// The serving failed to parse or does not match the display units
    Invalid,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(serving) => write!(f, "{serving}"),
            Self::Missing => f.write_str(MISSING),
            Self::Invalid => f.write_str(INVALID),
        }
    }
}
