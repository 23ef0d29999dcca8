//! Mass units and bioactive equivalence qualifiers.

use std::fmt;

/// A mass unit a serving may be measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    /// `g`
    Gram,
    /// `mg`
    Milligram,
    /// `mcg`
    Microgram,
}

impl MassUnit {
    /// All recognized mass units.
    pub const ALL: [Self; 3] = [Self::Gram, Self::Milligram, Self::Microgram];

    /// Returns the symbol used when displaying the unit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Milligram => "mg",
            Self::Microgram => "mcg",
        }
    }

    /// Looks up a unit by symbol, ignoring ASCII case.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A bioactive equivalence qualifier, such as the `RAE` in `900 mcg RAE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equivalence {
    /// `NE`, niacin equivalents
    Niacin,
    /// `DFE`, dietary folate equivalents
    DietaryFolate,
    /// `RAE`, retinol activity equivalents
    RetinolActivity,
}

impl Equivalence {
    /// All recognized equivalence qualifiers.
    pub const ALL: [Self; 3] = [Self::Niacin, Self::DietaryFolate, Self::RetinolActivity];

    /// Returns the symbol used when displaying the qualifier.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Niacin => "NE",
            Self::DietaryFolate => "DFE",
            Self::RetinolActivity => "RAE",
        }
    }

    /// Looks up a qualifier by symbol, ignoring ASCII case.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|equivalence| equivalence.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The units of a serving: an optional mass unit and an optional
/// equivalence qualifier.
///
/// An equivalence can only be present together with a mass unit. The
/// constructors are the only way to build a value, so the combination of an
/// equivalence without a mass unit cannot be represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Units {
    mass: Option<MassUnit>,
    equivalence: Option<Equivalence>,
}

impl Units {
    /// Units with neither a mass unit nor an equivalence.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            mass: None,
            equivalence: None,
        }
    }

    /// Units with only a mass unit.
    #[must_use]
    pub const fn mass(mass: MassUnit) -> Self {
        Self {
            mass: Some(mass),
            equivalence: None,
        }
    }

    /// Units with a mass unit qualified by an equivalence.
    #[must_use]
    pub const fn with_equivalence(mass: MassUnit, equivalence: Equivalence) -> Self {
        Self {
            mass: Some(mass),
            equivalence: Some(equivalence),
        }
    }

    /// Returns the mass unit, if any.
    #[must_use]
    pub const fn mass_unit(&self) -> Option<MassUnit> {
        self.mass
    }

    /// Returns the equivalence qualifier, if any.
    #[must_use]
    pub const fn equivalence(&self) -> Option<Equivalence> {
        self.equivalence
    }

    /// Returns true if neither a mass unit nor an equivalence is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mass.is_none() && self.equivalence.is_none()
    }
}

impl AsRef<Self> for Units {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mass, self.equivalence) {
            (Some(mass), Some(equivalence)) => write!(f, "{mass} {equivalence}"),
            (Some(mass), None) => write!(f, "{mass}"),
            (None, Some(equivalence)) => write!(f, "{equivalence}"),
            (None, None) => Ok(()),
        }
    }
}
