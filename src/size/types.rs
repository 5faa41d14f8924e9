use crate::size::compiler::compile;
use crate::size::error::ParseError;
use crate::size::grammar::is_unit_token;
use crate::size::resolver::{is_known_multiplier, multiplier_for};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A compiled data size expression such as "100MB" or "1.5GiB"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompiledSize {
    /// Original input string, never trimmed or normalized
    input: String,
    /// Power of 1024 selected by the unit token
    multiplier: u64,
    /// Exact byte count: numeric literal times multiplier
    value: Decimal,
}

impl CompiledSize {
    pub(crate) fn new(input: &str, multiplier: u64, value: Decimal) -> Self {
        debug_assert!(is_known_multiplier(multiplier));
        debug_assert!(!value.is_sign_negative());
        Self {
            input: input.to_string(),
            multiplier,
            value,
        }
    }

    /// The expression exactly as it was passed to [`compile`].
    pub fn raw_input(&self) -> &str {
        &self.input
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// The exact byte count, fractional part included ("0.1K" is 102.4).
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The byte count with any fractional byte truncated.
    ///
    /// Every value a [`CompiledSize`] can hold fits in 96 bits, so this is
    /// exact for the integral part.
    pub fn exact_value(&self) -> u128 {
        let integral = self.value.trunc();
        let mantissa = integral.mantissa().unsigned_abs();
        mantissa / 10u128.pow(integral.scale())
    }

    /// The byte count as a `u64`.
    ///
    /// Lossy: the fraction is dropped and values of 2^64 bytes or more
    /// saturate at `u64::MAX`. Use with relatively small sizes.
    pub fn as_u64(&self) -> u64 {
        u64::try_from(self.exact_value()).unwrap_or(u64::MAX)
    }

    /// The size expressed in another unit, e.g. `in_unit("MiB")`.
    ///
    /// The result is a floating-point approximation and may deviate
    /// slightly from the exact value; do not compare it for equality.
    pub fn in_unit(&self, token: &str) -> Result<f64, ParseError> {
        if !is_unit_token(token) {
            return Err(ParseError::UnsupportedUnit(token.to_string()));
        }

        let quotient = self.value / Decimal::from(multiplier_for(token));
        Ok(quotient.to_f64().unwrap_or(f64::NAN))
    }
}

impl fmt::Display for CompiledSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.input)
    }
}

impl FromStr for CompiledSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl TryFrom<&str> for CompiledSize {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        compile(value)
    }
}

// Sizes travel through config files as their original expression
impl Serialize for CompiledSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.input)
    }
}

impl<'de> Deserialize<'de> for CompiledSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        compile(&input).map_err(serde::de::Error::custom)
    }
}
