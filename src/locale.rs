//! Locale support for currency formatting
//!
//! This module loads the Indian-English display conventions from the TOML
//! document embedded in the crate and exposes them as [`CurrencySettings`].

use std::fmt;
use std::sync::OnceLock;

use crate::types::CurrencySettings;

/// Identifier of the only locale shipped with the crate
pub const DEFAULT_LOCALE: &str = "en_IN";

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The document has no table for the requested locale
    NotFound(String),
    /// An error occurred while parsing locale data
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::NotFound(locale) => write!(f, "Locale not found: {}", locale),
            LocaleError::ParseError(msg) => write!(f, "Error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

static BUILTIN_SETTINGS: OnceLock<CurrencySettings> = OnceLock::new();

/// Settings parsed from the embedded locale data.
///
/// Parsed once. Falls back to [`CurrencySettings::default`] if the embedded
/// document is unreadable.
pub fn builtin_settings() -> &'static CurrencySettings {
    BUILTIN_SETTINGS.get_or_init(|| {
        let toml_str = include_str!("locale/en_IN.toml");
        match parse_currency_settings(toml_str, DEFAULT_LOCALE) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load embedded locale data, using defaults: {}", e);
                CurrencySettings::default()
            }
        }
    })
}

/// Parse the settings of `locale_id` from a TOML document.
///
/// Keys missing from the locale table keep their default value.
///
/// # Examples
/// ```
/// use desi_currency::locale::parse_currency_settings;
///
/// let settings = parse_currency_settings("[en_IN]\ngroup = \" \"\n", "en_IN").unwrap();
/// assert_eq!(settings.group_separator, ' ');
/// assert_eq!(settings.currency_symbol, "₹");
/// ```
pub fn parse_currency_settings(toml_str: &str, locale_id: &str) -> Result<CurrencySettings> {
    let parsed_toml: toml::Value =
        toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

    let table = parsed_toml
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

    let value = table
        .get(locale_id)
        .ok_or_else(|| LocaleError::NotFound(locale_id.to_string()))?;

    let mut settings = CurrencySettings::default();
    apply_locale_settings(&mut settings, value)?;
    Ok(settings)
}

/// Apply locale-specific settings from TOML to a CurrencySettings object
fn apply_locale_settings(settings: &mut CurrencySettings, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Locale setting is not a table".to_string()))?;

    if let Some(symbol) = table.get("currency_symbol").and_then(|v| v.as_str()) {
        settings.currency_symbol = symbol.to_string();
    }

    if let Some(code) = table.get("currency_code").and_then(|v| v.as_str()) {
        settings.currency_code = code.to_string();
    }

    if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
        if let Some(c) = decimal.chars().next() {
            settings.decimal_point = c;
        }
    }

    if let Some(group) = table.get("group").and_then(|v| v.as_str()) {
        if let Some(c) = group.chars().next() {
            settings.group_separator = c;
        }
    }

    if settings.decimal_point == settings.group_separator {
        return Err(LocaleError::ParseError(format!(
            "decimal point and group separator are both '{}'",
            settings.decimal_point
        )));
    }

    if let Some(rates) = table.get("rates") {
        let rates = rates
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("rates is not a table".to_string()))?;

        settings.exchange_rates.clear();
        for (code, rate) in rates {
            // TOML writes whole-number rates as integers
            let rate = rate
                .as_float()
                .or_else(|| rate.as_integer().map(|r| r as f64))
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Missing or invalid rate for {}", code))
                })?;

            if !rate.is_finite() || rate <= 0.0 {
                return Err(LocaleError::ParseError(format!(
                    "Rate for {} must be positive",
                    code
                )));
            }
            settings.exchange_rates.insert(code.to_ascii_uppercase(), rate);
        }
    }

    Ok(())
}
