//! The parsed serving value object.

use std::fmt;

use crate::units::Units;

/// A numeric quantity paired with its units.
///
/// The value is unset when the source text carried no number, for example a
/// bare `"mg"` or an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Serving {
    value: Option<f64>,
    units: Units,
}

impl Serving {
    /// Creates a serving from an optional value and its units.
    #[must_use]
    pub const fn new(value: Option<f64>, units: Units) -> Self {
        Self { value, units }
    }

    /// A serving with no value and no units.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(None, Units::none())
    }

    /// Returns the numeric value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Returns the units.
    #[must_use]
    pub const fn units(&self) -> &Units {
        &self.units
    }

    /// Returns true if both the value and the units are unset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none() && self.units.is_empty()
    }
}

impl AsRef<Units> for Serving {
    fn as_ref(&self) -> &Units {
        &self.units
    }
}

impl fmt::Display for Serving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, self.units.is_empty()) {
            (Some(value), false) => write!(f, "{value} {}", self.units),
            (Some(value), true) => write!(f, "{value}"),
            (None, _) => write!(f, "{}", self.units),
        }
    }
}
