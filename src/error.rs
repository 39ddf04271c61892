//! Error types for parsing and directive evaluation

use std::fmt;

/// Error type for turning display text back into a number
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Nothing left to parse once symbols and whitespace are stripped
    Empty,
    /// The numeric body could not be read as a number
    InvalidNumber(String),
    /// Text after the number is not a known unit token
    UnknownSuffix(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "No amount to parse"),
            ParseError::InvalidNumber(text) => write!(f, "Invalid number: '{}'", text),
            ParseError::UnknownSuffix(text) => write!(f, "Unknown unit suffix: '{}'", text),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error type for the directive and exchange surfaces
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// A numeric argument was required but the text is not a finite number
    InvalidInput(String),
    /// Amount text could not be parsed
    Parse(ParseError),
    /// No directive is registered under this name
    UnknownDirective(String),
    /// The fixed exchange table has no rate for this currency code
    UnknownCurrency(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::InvalidInput(text) => write!(f, "Not a number: '{}'", text),
            CurrencyError::Parse(e) => write!(f, "Parse error: {}", e),
            CurrencyError::UnknownDirective(name) => write!(f, "Unknown directive: {}", name),
            CurrencyError::UnknownCurrency(code) => write!(f, "No exchange rate for {}", code),
        }
    }
}

impl std::error::Error for CurrencyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CurrencyError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for CurrencyError {
    fn from(e: ParseError) -> Self {
        CurrencyError::Parse(e)
    }
}
