//! Grammar for serving strings.
//!
//! A serving is written as an optional value, an optional unit and an
//! optional equivalence, each separated by optional whitespace:
//!
//! ```text
//! serving     := ws* value ws* unit ws* equivalence ws*
//! value       := (digit{1,3} ("," digit{3})+ | digit*) ("." digit+)?
//! unit        := alpha*
//! equivalence := alpha*
//! ```
//!
//! `ws` is any Unicode whitespace, so no-break spaces separate tokens too.
//! Any of the parts may be empty. Letter runs are greedy, so a unit and an
//! equivalence written without whitespace between them form a single
//! (unknown) unit token.

use nom::{
    IResult, Parser as _,
    branch::alt,
    bytes::complete::{take_while, take_while_m_n},
    character::complete::{alpha0, char, digit0, digit1},
    combinator::{all_consuming, opt, recognize},
    multi::many1,
};

use crate::{
    error::ServingError,
    serving::Serving,
    units::{Equivalence, MassUnit, Units},
};

/// The raw tokens of a serving string, before interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawServing<'a> {
    value: &'a str,
    unit: &'a str,
    equivalence: &'a str,
}

/// Parses a serving string into a [`Serving`].
pub fn parse(input: &str) -> Result<Serving, ServingError> {
    let (_rest, raw) = all_consuming(raw_serving)
        .parse(input)
        .map_err(|_| ServingError::malformed(input))?;

    let value = parse_value(input, raw.value)?;
    let units = parse_units(input, raw.unit, raw.equivalence)?;

    Ok(Serving::new(value, units))
}

fn raw_serving(input: &str) -> IResult<&str, RawServing<'_>> {
    let (rest, _) = whitespace0(input)?;
    let (rest, value) = value(rest)?;
    let (rest, _) = whitespace0(rest)?;
    let (rest, unit) = alpha0(rest)?;
    let (rest, _) = whitespace0(rest)?;
    let (rest, equivalence) = alpha0(rest)?;
    let (rest, _) = whitespace0(rest)?;

    Ok((
        rest,
        RawServing {
            value,
            unit,
            equivalence,
        },
    ))
}

/// Skips any Unicode whitespace, including the no-break spaces common in
/// copied label text.
fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace).parse(input)
}

/// Recognizes a number with optional thousands separators and decimal part.
///
/// Matches the empty string.
fn value(input: &str) -> IResult<&str, &str> {
    recognize((alt((grouped_digits, digit0)), opt((char('.'), digit1)))).parse(input)
}

/// Recognizes digits written with comma thousands separators, such as `12,345`.
fn grouped_digits(input: &str) -> IResult<&str, &str> {
    let is_digit = |c: char| c.is_ascii_digit();

    recognize((
        take_while_m_n(1, 3, is_digit),
        many1((char(','), take_while_m_n(3, 3, is_digit))),
    ))
    .parse(input)
}

fn parse_value(input: &str, value: &str) -> Result<Option<f64>, ServingError> {
    if value.is_empty() {
        return Ok(None);
    }

    let digits = value.replace(',', "");
    match digits.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        Ok(_) | Err(_) => Err(ServingError::malformed(input)),
    }
}

fn parse_units(input: &str, unit: &str, equivalence: &str) -> Result<Units, ServingError> {
    if unit.is_empty() {
        return Ok(Units::none());
    }

    let Some(mass) = MassUnit::from_symbol(unit) else {
        // a lone equivalence lands in the unit position
        return Err(match Equivalence::from_symbol(unit) {
            Some(equivalence) => ServingError::equivalence_without_unit(input, equivalence),
            None => ServingError::unknown_unit(input, unit),
        });
    };

    if equivalence.is_empty() {
        return Ok(Units::mass(mass));
    }

    Equivalence::from_symbol(equivalence).map_or_else(
        || Err(ServingError::unknown_equivalence(input, unit, equivalence)),
        |equivalence| Ok(Units::with_equivalence(mass, equivalence)),
    )
}
