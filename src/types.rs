//! Type definitions for Indian currency formatting
//!
//! This module defines the value types shared by the formatter and the parser:
//! the lakh/crore unit scale, the rupee/paise decomposition of an amount and
//! the display conventions both of them follow.

use std::collections::HashMap;

/// A named scale of the Indian numbering system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    /// 1,000
    Thousand,
    /// 1,00,000
    Lakh,
    /// 1,00,00,000
    Crore,
}

impl Unit {
    /// All units, largest first. Unit selection walks this list.
    pub const DESCENDING: [Unit; 3] = [Unit::Crore, Unit::Lakh, Unit::Thousand];

    /// The numeric value of one unit
    pub fn magnitude(self) -> f64 {
        match self {
            Unit::Thousand => 1e3,
            Unit::Lakh => 1e5,
            Unit::Crore => 1e7,
        }
    }

    /// Singular spelled-out name ("Lakh")
    pub fn name(self) -> &'static str {
        match self {
            Unit::Thousand => "Thousand",
            Unit::Lakh => "Lakh",
            Unit::Crore => "Crore",
        }
    }

    /// Plural spelled-out name ("Lakhs")
    pub fn plural_name(self) -> &'static str {
        match self {
            Unit::Thousand => "Thousands",
            Unit::Lakh => "Lakhs",
            Unit::Crore => "Crores",
        }
    }

    /// Compact suffix used by shorthand notation ("L")
    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::Thousand => "K",
            Unit::Lakh => "L",
            Unit::Crore => "Cr",
        }
    }

    /// Suffix appended by the word notation.
    ///
    /// Lakh and crore are written as separate words ("15 Lakh"), thousands
    /// keep the compact "K" glued to the number ("5K").
    pub fn word_suffix(self) -> &'static str {
        match self {
            Unit::Thousand => "K",
            Unit::Lakh => " Lakh",
            Unit::Crore => " Crore",
        }
    }

    /// Largest unit whose magnitude `abs_value` meets or exceeds
    pub fn select(abs_value: f64) -> Option<Unit> {
        Self::DESCENDING
            .into_iter()
            .find(|unit| abs_value >= unit.magnitude())
    }
}

/// Decomposition of an amount into whole rupees and paise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RupeePaiseSplit {
    /// Whole rupees, carrying the sign of the original amount
    pub rupees: i128,
    /// Paise, always within 0..=99
    pub paise: u8,
    /// Whether the original amount was negative.
    ///
    /// Kept separately because `rupees` is zero for amounts such as -0.50.
    pub is_negative: bool,
}

impl RupeePaiseSplit {
    /// Rupee magnitude without sign
    pub fn abs_rupees(&self) -> u128 {
        self.rupees.unsigned_abs()
    }

    /// True when both parts are zero
    pub fn is_zero(&self) -> bool {
        self.rupees == 0 && self.paise == 0
    }

    /// Reassemble the amount, rounded to two decimal places
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.abs_rupees() as f64 + f64::from(self.paise) / 100.0;
        if self.is_negative { -magnitude } else { magnitude }
    }
}

/// Display conventions used by the formatter and the parser
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencySettings {
    /// Currency glyph placed before the amount
    pub currency_symbol: String,
    /// ISO 4217 code of the home currency
    pub currency_code: String,
    /// Character between the integer and fractional digits
    pub decimal_point: char,
    /// Character between digit groups
    pub group_separator: char,
    /// Fixed exchange table: rupees per one unit of the keyed currency
    pub exchange_rates: HashMap<String, f64>,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        let exchange_rates = [
            ("USD", 83.0),
            ("EUR", 90.0),
            ("GBP", 105.0),
            ("AED", 22.6),
            ("SGD", 61.5),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        Self {
            currency_symbol: "₹".to_string(),
            currency_code: "INR".to_string(),
            decimal_point: '.',
            group_separator: ',',
            exchange_rates,
        }
    }
}

impl CurrencySettings {
    /// Replace the currency glyph
    pub fn with_currency_symbol(mut self, symbol: String) -> Self {
        self.currency_symbol = symbol;
        self
    }

    /// Replace the decimal point character
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Replace the digit group separator
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Add or replace a fixed exchange rate
    pub fn with_exchange_rate(mut self, code: &str, rupees_per_unit: f64) -> Self {
        self.exchange_rates
            .insert(code.to_ascii_uppercase(), rupees_per_unit);
        self
    }
}
