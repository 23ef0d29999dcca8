//! Serving-size parsing for the CCL facts tooling
//!
//! A serving string such as `"900 mcg RAE"` is parsed into a [`Serving`]: an
//! optional numeric value plus [`Units`] (an optional [`MassUnit`] and an
//! optional [`Equivalence`]). Units are compared exactly with
//! [`units_match`]; no unit conversion is performed.
//!
//! ```rust
//! use ccl_serving::{MassUnit, parse, units_match};
//!
//! let reference = parse("90 mg").expect("valid serving");
//! let reported = parse("50 mg").expect("valid serving");
//!
//! assert_eq!(reported.units().mass_unit(), Some(MassUnit::Milligram));
//! assert!(units_match(&reference, &reported));
//! ```

mod error;
mod parser;
mod serving;
mod units;

pub use error::ServingError;
pub use serving::Serving;
pub use units::{Equivalence, MassUnit, Units};

/// Parses a serving string.
///
/// Leading and trailing whitespace is ignored and unit tokens are
/// case-insensitive. An empty string parses to an empty serving.
///
/// # Errors
///
/// Returns an error if the text is not shaped like a serving, if the unit or
/// equivalence is not recognized, or if an equivalence is given without a
/// mass unit.
pub fn parse(input: &str) -> Result<Serving, ServingError> {
    parser::parse(input)
}

/// Returns true if both arguments have exactly the same units.
///
/// Either argument may be a [`Serving`] or [`Units`]. Values are ignored.
#[must_use]
pub fn units_match(lhs: &impl AsRef<Units>, rhs: &impl AsRef<Units>) -> bool {
    lhs.as_ref() == rhs.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serving(input: &str) -> Serving {
        parse(input).expect("test serving should parse")
    }

    #[test]
    fn units_match_ignores_values() {
        assert!(units_match(&serving("5 mg"), &serving("10 mg")));
    }

    #[test]
    fn units_match_different_mass() {
        assert!(!units_match(&serving("5 mg"), &serving("5 mcg")));
    }

    #[test]
    fn units_match_different_equivalence() {
        assert!(!units_match(&serving("5 mcg"), &serving("5 mcg RAE")));
    }

    #[test]
    fn units_match_serving_against_units() {
        let units = Units::with_equivalence(MassUnit::Microgram, Equivalence::DietaryFolate);
        assert!(units_match(&serving("400 mcg DFE"), &units));
        assert!(units_match(&units, &serving("200 MCG dfe")));
    }

    #[test]
    fn units_match_both_empty() {
        assert!(units_match(&serving(""), &Units::none()));
        assert!(!units_match(&serving("3"), &serving("3 g")));
    }
}
