use std::fmt;

/// Failure to compile a data size expression or resolve a unit token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not match the `<number><unit>` grammar
    UnsupportedFormat(String),
    /// Numeric literal could not be represented exactly
    InvalidNumber(String),
    /// Standalone unit token does not match the unit grammar
    UnsupportedUnit(String),
}

impl ParseError {
    /// The rejected text, kept verbatim for diagnostics.
    pub fn input(&self) -> &str {
        match self {
            ParseError::UnsupportedFormat(input)
            | ParseError::InvalidNumber(input)
            | ParseError::UnsupportedUnit(input) => input,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnsupportedFormat(input) => {
                write!(f, "unsupported data size format: {:?}", input)
            }
            ParseError::InvalidNumber(input) => write!(f, "invalid numeric literal: {:?}", input),
            ParseError::UnsupportedUnit(token) => {
                write!(f, "unsupported measure format: {:?}", token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure to render a byte count.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The unit ladder ran out before the magnitude became displayable
    UnableToConvert(f64),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnableToConvert(bytes) => write!(f, "unable to convert {}", bytes),
        }
    }
}

impl std::error::Error for FormatError {}
