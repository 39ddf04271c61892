//! Template directive table
//!
//! Maps directive names a templating layer registers (`@rupee(123456)`,
//! `@lakh(500000)`, ...) onto formatter operations. Arguments arrive as text
//! and must be plain numbers.

use std::fmt;
use std::str::FromStr;

use crate::error::CurrencyError;
use crate::formatter::CurrencyFormatter;

/// Key under which a host container exposes the formatter
pub const SERVICE_KEY: &str = "desi-currency";

/// Directives that echo a formatted amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `format(x)`
    Rupee,
    /// `format(x)`, short alias of `rupee`
    Rs,
    /// `format(x)` without the symbol
    Amount,
    /// `to_lakhs(x)`
    Lakh,
    /// `to_crores(x)`
    Crore,
    /// `to_shorthand(x)`
    Short,
    /// `to_words(x)`
    Word,
    /// `to_indian_words(x)`
    Spell,
    /// `format_whole(x)`
    Round,
    /// The currency symbol; takes no argument
    Currency,
}

impl Directive {
    /// Every echo directive, in registration order
    pub const ALL: [Directive; 10] = [
        Directive::Rupee,
        Directive::Rs,
        Directive::Amount,
        Directive::Lakh,
        Directive::Crore,
        Directive::Short,
        Directive::Word,
        Directive::Spell,
        Directive::Round,
        Directive::Currency,
    ];

    /// Name the directive is registered under
    pub fn name(self) -> &'static str {
        match self {
            Directive::Rupee => "rupee",
            Directive::Rs => "rs",
            Directive::Amount => "amount",
            Directive::Lakh => "lakh",
            Directive::Crore => "crore",
            Directive::Short => "short",
            Directive::Word => "word",
            Directive::Spell => "spell",
            Directive::Round => "round",
            Directive::Currency => "currency",
        }
    }

    /// Whether the directive reads its argument
    pub fn takes_argument(self) -> bool {
        !matches!(self, Directive::Currency)
    }

    /// Render the directive for `argument`
    ///
    /// The argument is ignored by [`Directive::Currency`].
    pub fn render(
        self,
        formatter: &CurrencyFormatter,
        argument: &str,
    ) -> Result<String, CurrencyError> {
        if !self.takes_argument() {
            return Ok(formatter.symbol().to_string());
        }

        let amount = parse_argument(argument)?;
        let rendered = match self {
            Directive::Rupee | Directive::Rs => formatter.format(amount, true),
            Directive::Amount => formatter.format(amount, false),
            Directive::Lakh => formatter.to_lakhs(amount, 2, true),
            Directive::Crore => formatter.to_crores(amount, 2, true),
            Directive::Short => formatter.to_shorthand(amount, true),
            Directive::Word => formatter.to_words(amount, true),
            Directive::Spell => formatter.to_indian_words(amount),
            Directive::Round => formatter.format_whole(amount, true),
            Directive::Currency => formatter.symbol().to_string(),
        };
        Ok(rendered)
    }
}

impl FromStr for Directive {
    type Err = CurrencyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|directive| directive.name() == name)
            .ok_or_else(|| CurrencyError::UnknownDirective(name.to_string()))
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Directives that guard a template block on the amount's range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionDirective {
    /// `is_lakhs_range(x)`
    Lakh,
    /// `is_crores_range(x)`
    Crore,
}

impl ConditionDirective {
    /// Name the condition is registered under
    pub fn name(self) -> &'static str {
        match self {
            ConditionDirective::Lakh => "lakh",
            ConditionDirective::Crore => "crore",
        }
    }

    /// Evaluate the condition for `argument`
    pub fn evaluate(
        self,
        formatter: &CurrencyFormatter,
        argument: &str,
    ) -> Result<bool, CurrencyError> {
        let amount = parse_argument(argument)?;
        Ok(match self {
            ConditionDirective::Lakh => formatter.is_lakhs_range(amount),
            ConditionDirective::Crore => formatter.is_crores_range(amount),
        })
    }
}

impl FromStr for ConditionDirective {
    type Err = CurrencyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "lakh" => Ok(ConditionDirective::Lakh),
            "crore" => Ok(ConditionDirective::Crore),
            _ => Err(CurrencyError::UnknownDirective(name.to_string())),
        }
    }
}

/// Read a directive argument as a finite number.
///
/// Only plain numeric literals are accepted; display text such as "1.5L"
/// belongs to [`CurrencyFormatter::parse`].
pub fn parse_argument(argument: &str) -> Result<f64, CurrencyError> {
    let trimmed = argument.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CurrencyError::InvalidInput(trimmed.to_string()))
}
