use crate::size::error::ParseError;
use crate::size::grammar::split_expression;
use crate::size::resolver::multiplier_for;
use crate::size::types::CompiledSize;
use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Compile a data size expression such as "100MB", "1.5GiB" or "1024".
///
/// The input must be a non-negative decimal literal immediately followed by
/// an optional unit token. Nothing is trimmed: surrounding whitespace makes
/// the expression invalid.
///
/// # Errors
///
/// - [`ParseError::UnsupportedFormat`] when the input does not match the
///   expression grammar (empty input, unknown unit, trailing characters)
/// - [`ParseError::InvalidNumber`] when the literal or the product with the
///   multiplier does not fit the exact decimal representation
pub fn compile(input: &str) -> Result<CompiledSize, ParseError> {
    let (number, unit) = split_expression(input).ok_or_else(|| {
        debug!("rejected data size expression {:?}", input);
        ParseError::UnsupportedFormat(input.to_string())
    })?;

    let literal = parse_literal(number).ok_or_else(|| {
        debug!("numeric literal {:?} in {:?} is out of range", number, input);
        ParseError::InvalidNumber(input.to_string())
    })?;

    let multiplier = multiplier_for(unit);
    let value = literal
        .checked_mul(Decimal::from(multiplier))
        .ok_or_else(|| {
            debug!("data size {:?} overflows the exact representation", input);
            ParseError::InvalidNumber(input.to_string())
        })?;

    Ok(CompiledSize::new(input, multiplier, value))
}

/// Compile an expression that is known to be valid, e.g. a built-in default.
///
/// # Panics
///
/// Panics when `input` is not a valid data size expression. Never call this
/// with user-supplied text; use [`compile`] instead.
pub fn compile_or_abort(input: &str) -> CompiledSize {
    match compile(input) {
        Ok(size) => size,
        Err(e) => panic!("{}", e),
    }
}

// The grammar already guarantees digits with at most one inner '.'
fn parse_literal(number: &str) -> Option<Decimal> {
    if number.starts_with('.') {
        Decimal::from_str(&format!("0{}", number)).ok()
    } else {
        Decimal::from_str(number).ok()
    }
}
