//! Indian numbering system currency formatting
//!
//! Formats amounts with lakh/crore digit grouping (`₹1,23,456.79`), unit
//! notations (`₹15L`, `₹2.5 Crore`, `₹5.00 Lakhs`), spelled-out rupees and
//! paise, and parses those representations back into numbers.
//!
//! The free functions below use the built-in Indian-English conventions.
//! Build a [`CurrencyFormatter`] to use different settings.
//!
//! ```
//! assert_eq!(desi_currency::format(123456.789, true), "₹1,23,456.79");
//! assert_eq!(desi_currency::to_words(1500000.0, true), "₹15 Lakh");
//! assert_eq!(desi_currency::parse("2Cr").unwrap(), 20000000.0);
//! ```

pub mod directive;
pub mod error;
pub mod exchange;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

use std::sync::OnceLock;

pub use directive::{ConditionDirective, Directive, SERVICE_KEY};
pub use error::{CurrencyError, ParseError};
pub use formatter::{CurrencyFormatter, number_to_words, split_rupees_paise, to_indian_words};
pub use types::*;

static DEFAULT_FORMATTER: OnceLock<CurrencyFormatter> = OnceLock::new();

/// The formatter behind the free functions
pub fn default_formatter() -> &'static CurrencyFormatter {
    DEFAULT_FORMATTER.get_or_init(CurrencyFormatter::default)
}

/// Indian-grouped amount with two decimals: `₹1,23,456.79`
pub fn format(amount: f64, show_symbol: bool) -> String {
    default_formatter().format(amount, show_symbol)
}

/// Indian-grouped amount rounded to whole rupees: `₹1,23,457`
pub fn format_whole(amount: f64, show_symbol: bool) -> String {
    default_formatter().format_whole(amount, show_symbol)
}

/// Negative amounts in parentheses: `(₹5,000.00)`
pub fn format_accounting(amount: f64, show_symbol: bool) -> String {
    default_formatter().format_accounting(amount, show_symbol)
}

/// [`format`] plus a space-separated suffix when the suffix is non-empty
pub fn format_with_suffix(amount: f64, suffix: &str, show_symbol: bool) -> String {
    default_formatter().format_with_suffix(amount, suffix, show_symbol)
}

/// `₹15 Lakh`, `₹2.5 Crore`, `₹5K`
pub fn to_words(amount: f64, show_symbol: bool) -> String {
    default_formatter().to_words(amount, show_symbol)
}

/// `₹15L`, `₹2.5Cr`, `₹5K`
pub fn to_shorthand(amount: f64, show_symbol: bool) -> String {
    default_formatter().to_shorthand(amount, show_symbol)
}

/// `₹5.00 Lakhs`; `decimals` is capped at [`formatter::MAX_DECIMALS`]
pub fn to_lakhs(amount: f64, decimals: u32, show_symbol: bool) -> String {
    default_formatter().to_lakhs(amount, decimals, show_symbol)
}

/// `₹1.00 Crore`; `decimals` is capped at [`formatter::MAX_DECIMALS`]
pub fn to_crores(amount: f64, decimals: u32, show_symbol: bool) -> String {
    default_formatter().to_crores(amount, decimals, show_symbol)
}

/// Parse display text such as `"1.5L"` or `"-₹1,20,000.50"`
pub fn parse(text: &str) -> Result<f64, ParseError> {
    default_formatter().parse(text)
}

/// The rupee glyph
pub fn symbol() -> &'static str {
    default_formatter().symbol()
}

/// `|amount|` in `[1e5, 1e7)`
pub fn is_lakhs_range(amount: f64) -> bool {
    default_formatter().is_lakhs_range(amount)
}

/// `|amount| >= 1e7`
pub fn is_crores_range(amount: f64) -> bool {
    default_formatter().is_crores_range(amount)
}

/// Render the directive registered as `name` for a numeric `argument`
pub fn render_directive(name: &str, argument: &str) -> Result<String, CurrencyError> {
    name.parse::<Directive>()?.render(default_formatter(), argument)
}
