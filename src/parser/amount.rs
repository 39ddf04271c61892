use winnow::Parser;

use crate::error::ParseError;
use crate::parser::tokens::{SYMBOL_TOKENS, parse_numeric_body, parse_sign, parse_unit_token};
use crate::types::CurrencySettings;

/// Parse currency display text back into a number
///
/// Accepts everything the formatter produces: grouped amounts
/// (`"-₹1,20,000.50"`), shorthand (`"1.5L"`, `"2Cr"`), words (`"15 Lakh"`),
/// fixed units (`"₹5.00 Lakhs"`) and accounting parentheses (`"(₹5,000.00)"`).
///
/// # Arguments
/// * `text` - The text to parse
/// * `settings` - Supplies the symbol, group separator and decimal point
///
/// # Returns
/// * `Result<f64, ParseError>` - The amount, or why the text is not one
///
/// # Examples
/// ```
/// use desi_currency::parser::parse_amount;
/// use desi_currency::types::CurrencySettings;
///
/// let settings = CurrencySettings::default();
/// assert_eq!(parse_amount("1.5L", &settings).unwrap(), 150000.0);
/// assert_eq!(parse_amount("-₹1,20,000.50", &settings).unwrap(), -120000.5);
/// ```
pub fn parse_amount(text: &str, settings: &CurrencySettings) -> Result<f64, ParseError> {
    let result = parse_cleaned(&strip_decorations(text, settings), settings);
    if let Err(e) = &result {
        tracing::debug!("Rejected amount text '{}': {}", text, e);
    }
    result
}

/// Remove whitespace and currency symbols anywhere in the text
fn strip_decorations(text: &str, settings: &CurrencySettings) -> String {
    let mut cleaned = if settings.currency_symbol.is_empty() {
        text.to_string()
    } else {
        text.replace(settings.currency_symbol.as_str(), "")
    };
    cleaned.retain(|c| !c.is_whitespace());

    for symbol in SYMBOL_TOKENS {
        cleaned = cleaned.replace(symbol, "");
    }
    cleaned
}

fn parse_cleaned(cleaned: &str, settings: &CurrencySettings) -> Result<f64, ParseError> {
    let (mut input, in_parentheses) = match cleaned
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
    {
        Some(inner) => (inner, true),
        None => (cleaned, false),
    };

    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let is_negative = parse_sign
        .parse_next(&mut input)
        .map_err(|_| ParseError::InvalidNumber(cleaned.to_string()))?;
    if is_negative && in_parentheses {
        return Err(ParseError::InvalidNumber(cleaned.to_string()));
    }

    let body = parse_numeric_body(settings.group_separator, settings.decimal_point)
        .parse_next(&mut input)
        .map_err(|_| ParseError::InvalidNumber(input.to_string()))?;

    let unit = if input.is_empty() {
        None
    } else {
        Some(
            parse_unit_token
                .parse_next(&mut input)
                .map_err(|_| ParseError::UnknownSuffix(input.to_string()))?,
        )
    };

    if !input.is_empty() {
        return Err(ParseError::UnknownSuffix(input.to_string()));
    }

    let value = numeric_value(body, settings)?;
    let multiplier = unit.map_or(1.0, |unit| unit.magnitude());
    let result = value * multiplier;
    if !result.is_finite() {
        return Err(ParseError::InvalidNumber(body.to_string()));
    }

    Ok(if is_negative || in_parentheses {
        -result
    } else {
        result
    })
}

/// Read the numeric body as a float after dropping group separators
fn numeric_value(body: &str, settings: &CurrencySettings) -> Result<f64, ParseError> {
    let normalized: String = body
        .chars()
        .filter(|&c| c != settings.group_separator)
        .map(|c| if c == settings.decimal_point { '.' } else { c })
        .collect();

    normalized
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(body.to_string()))
}
