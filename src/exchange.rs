//! Conversion through the fixed exchange table
//!
//! Rates come from the locale settings and are never refreshed. The table
//! stores rupees per one unit of each foreign currency.

use crate::error::CurrencyError;
use crate::formatter::grouping::finite_or_zero;
use crate::types::CurrencySettings;

/// Rupees per one unit of `code`; the home currency itself has rate one
pub fn exchange_rate(code: &str, settings: &CurrencySettings) -> Result<f64, CurrencyError> {
    if code.eq_ignore_ascii_case(&settings.currency_code) {
        return Ok(1.0);
    }
    settings
        .exchange_rates
        .get(&code.to_ascii_uppercase())
        .copied()
        .ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))
}

/// Convert a rupee amount into `code`
pub fn convert_from_inr(
    amount: f64,
    code: &str,
    settings: &CurrencySettings,
) -> Result<f64, CurrencyError> {
    Ok(finite_or_zero(amount) / exchange_rate(code, settings)?)
}

/// Convert an amount in `code` into rupees
pub fn convert_to_inr(
    amount: f64,
    code: &str,
    settings: &CurrencySettings,
) -> Result<f64, CurrencyError> {
    Ok(finite_or_zero(amount) * exchange_rate(code, settings)?)
}
