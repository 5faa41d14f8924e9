use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Standalone unit token: empty, "b", "bytes", a prefix letter, or a prefix
    /// letter followed by "i", "b" or "ib". Letters are ASCII case-insensitive
    /// only; Unicode folding would let U+212A KELVIN SIGN stand in for "k".
    /// Examples: "B", "Bytes", "K", "Ki", "KiB", "kb"
    static ref UNIT_PATTERN: Regex = Regex::new(
        r"(?i-u)^(b|bytes|[kmgtpe]|[kmgtpe]?i|[kmgtpe]i?b)?$"
    ).unwrap();

    /// Full expression: unsigned decimal literal immediately followed by an
    /// optional unit token. No sign, exponent, separators or whitespace.
    /// Examples: "100MB", "1.5GiB", ".5k", "1024"
    static ref EXPRESSION_PATTERN: Regex = Regex::new(
        r"(?i-u)^([0-9]+|[0-9]*\.[0-9]+)(b|bytes|[kmgtpe]|[kmgtpe]?i|[kmgtpe]i?b)?$"
    ).unwrap();
}

/// Check whether a standalone unit token is accepted.
///
/// The empty token is valid inside an expression (raw bytes) but is not a
/// unit on its own, so `validate_unit("")` is false.
pub fn validate_unit(token: &str) -> bool {
    !token.is_empty() && UNIT_PATTERN.is_match(token)
}

/// Same as [`validate_unit`] but accepts the empty token.
pub(crate) fn is_unit_token(token: &str) -> bool {
    UNIT_PATTERN.is_match(token)
}

/// Check whether `input` is a complete size expression.
pub fn is_size_expression(input: &str) -> bool {
    EXPRESSION_PATTERN.is_match(input)
}

/// Split a size expression into its numeric literal and unit token.
/// The unit token is empty when the expression has no suffix.
pub(crate) fn split_expression(input: &str) -> Option<(&str, &str)> {
    EXPRESSION_PATTERN.captures(input).map(|caps: Captures<'_>| {
        let number = caps.get(1).map_or("", |m| m.as_str());
        let unit = caps.get(2).map_or("", |m| m.as_str());
        (number, unit)
    })
}
