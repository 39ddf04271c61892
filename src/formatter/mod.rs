//! Indian currency formatting module
//!
//! This module renders amounts with lakh/crore grouping, unit notations and
//! spelled-out words. The main entry point is [`CurrencyFormatter`].

pub(crate) mod grouping;
mod units;
mod words;

pub use grouping::{MAX_DECIMALS, group_indian};
pub use words::{number_to_words, split_rupees_paise, to_indian_words};

use crate::error::{CurrencyError, ParseError};
use crate::exchange;
use crate::locale::builtin_settings;
use crate::parser::parse_amount;
use crate::types::{CurrencySettings, RupeePaiseSplit, Unit};
use grouping::{decorate, finite_or_zero, format_fixed};
use units::Notation;

/// Formats and parses amounts under one set of display conventions.
///
/// Holds no state beyond its settings; every method is a pure function of
/// its arguments.
///
/// # Examples
/// ```
/// use desi_currency::formatter::CurrencyFormatter;
///
/// let formatter = CurrencyFormatter::default();
/// assert_eq!(formatter.format(123456.789, true), "₹1,23,456.79");
/// assert_eq!(formatter.to_shorthand(1500000.0, true), "₹15L");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    settings: CurrencySettings,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(builtin_settings().clone())
    }
}

impl CurrencyFormatter {
    /// Create a formatter with the given conventions
    pub fn new(settings: CurrencySettings) -> Self {
        Self { settings }
    }

    /// The conventions this formatter applies
    pub fn settings(&self) -> &CurrencySettings {
        &self.settings
    }

    /// The currency glyph
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Indian-grouped amount with two decimals: `₹1,23,456.79`
    pub fn format(&self, amount: f64, show_symbol: bool) -> String {
        self.format_with_decimals(amount, 2, show_symbol)
    }

    /// Indian-grouped amount rounded to whole rupees: `₹1,23,457`
    pub fn format_whole(&self, amount: f64, show_symbol: bool) -> String {
        self.format_with_decimals(amount, 0, show_symbol)
    }

    fn format_with_decimals(&self, amount: f64, decimals: u32, show_symbol: bool) -> String {
        let amount = finite_or_zero(amount);
        let (body, is_zero) = format_fixed(amount.abs(), decimals, &self.settings);
        decorate(&body, amount < 0.0 && !is_zero, show_symbol, &self.settings)
    }

    /// Like [`format`](Self::format), with negatives wrapped in parentheses: `(₹5,000.00)`
    pub fn format_accounting(&self, amount: f64, show_symbol: bool) -> String {
        let amount = finite_or_zero(amount);
        let (body, is_zero) = format_fixed(amount.abs(), 2, &self.settings);
        let formatted = decorate(&body, false, show_symbol, &self.settings);
        if amount < 0.0 && !is_zero {
            format!("({})", formatted)
        } else {
            formatted
        }
    }

    /// [`format`](Self::format) followed by a space and `suffix`, if the suffix is non-empty
    pub fn format_with_suffix(&self, amount: f64, suffix: &str, show_symbol: bool) -> String {
        let formatted = self.format(amount, show_symbol);
        if suffix.is_empty() {
            formatted
        } else {
            format!("{} {}", formatted, suffix)
        }
    }

    /// Scaled to the largest fitting unit, spelled as a word: `₹15 Lakh`, `₹2.5 Crore`, `₹5K`
    pub fn to_words(&self, amount: f64, show_symbol: bool) -> String {
        units::format_scaled(amount, Notation::Words, show_symbol, &self.settings)
    }

    /// Scaled to the largest fitting unit, abbreviated: `₹15L`, `₹2.5Cr`, `₹5K`
    pub fn to_shorthand(&self, amount: f64, show_symbol: bool) -> String {
        units::format_scaled(amount, Notation::Shorthand, show_symbol, &self.settings)
    }

    /// Always in lakhs: `₹5.00 Lakhs`
    ///
    /// `decimals` is capped at [`MAX_DECIMALS`].
    pub fn to_lakhs(&self, amount: f64, decimals: u32, show_symbol: bool) -> String {
        units::format_in_unit(amount, Unit::Lakh, decimals, show_symbol, &self.settings)
    }

    /// Always in crores: `₹1.00 Crore`
    ///
    /// `decimals` is capped at [`MAX_DECIMALS`].
    pub fn to_crores(&self, amount: f64, decimals: u32, show_symbol: bool) -> String {
        units::format_in_unit(amount, Unit::Crore, decimals, show_symbol, &self.settings)
    }

    /// Spelled out in words, see [`to_indian_words`]
    pub fn to_indian_words(&self, amount: f64) -> String {
        to_indian_words(amount)
    }

    /// See [`split_rupees_paise`]
    pub fn split_rupees_paise(&self, amount: f64) -> RupeePaiseSplit {
        split_rupees_paise(amount)
    }

    /// `|amount|` is at least one lakh and below one crore
    pub fn is_lakhs_range(&self, amount: f64) -> bool {
        units::is_lakhs_range(amount)
    }

    /// `|amount|` is at least one crore
    pub fn is_crores_range(&self, amount: f64) -> bool {
        units::is_crores_range(amount)
    }

    /// Parse display text back into a number, see [`parse_amount`]
    pub fn parse(&self, text: &str) -> Result<f64, ParseError> {
        parse_amount(text, &self.settings)
    }

    /// Convert rupees into `code` using the fixed exchange table
    pub fn convert_from_inr(&self, amount: f64, code: &str) -> Result<f64, CurrencyError> {
        exchange::convert_from_inr(amount, code, &self.settings)
    }

    /// Convert an amount in `code` into rupees using the fixed exchange table
    pub fn convert_to_inr(&self, amount: f64, code: &str) -> Result<f64, CurrencyError> {
        exchange::convert_to_inr(amount, code, &self.settings)
    }
}
