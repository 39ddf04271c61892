use crate::formatter::grouping::{
    MAX_DECIMALS, decorate, finite_or_zero, format_compact, format_fixed, split_fixed,
};
use crate::types::{CurrencySettings, Unit};

/// Which suffix family a scaled amount is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Notation {
    /// "15 Lakh", "2.5 Crore", "5K"
    Words,
    /// "15L", "2.5Cr", "5K"
    Shorthand,
}

/// Scale by the largest applicable unit and append its suffix
pub(crate) fn format_scaled(
    amount: f64,
    notation: Notation,
    show_symbol: bool,
    settings: &CurrencySettings,
) -> String {
    let amount = finite_or_zero(amount);
    let abs_value = amount.abs();

    let unit = select_rounded(abs_value);
    tracing::trace!("Amount {} scaled by {:?}", amount, unit);

    let (mut body, is_zero) = match unit {
        Some(unit) => format_compact(abs_value / unit.magnitude(), settings),
        None => format_compact(abs_value, settings),
    };
    if let Some(unit) = unit {
        body.push_str(match notation {
            Notation::Words => unit.word_suffix(),
            Notation::Shorthand => unit.abbreviation(),
        });
    }

    decorate(&body, amount < 0.0 && !is_zero, show_symbol, settings)
}

/// Pick the unit after rounding to two places in the unit first chosen.
///
/// A value that rounds up to the next threshold moves to that unit, so
/// 999.999 reads `1K` and 99,999 reads `1L`.
fn select_rounded(abs_value: f64) -> Option<Unit> {
    let unit = Unit::select(abs_value);
    let magnitude = unit.map_or(1.0, Unit::magnitude);
    let scaled = abs_value / magnitude;
    let (whole, fraction) = split_fixed(scaled, 2);
    let rounded = whole.parse::<f64>().unwrap_or(scaled) + fraction as f64 / 100.0;
    Unit::select(rounded * magnitude).max(unit)
}

/// Express an amount in a fixed unit with `decimals` places: "5.00 Lakhs".
///
/// The unit name is singular only when the rounded value is exactly one.
pub(crate) fn format_in_unit(
    amount: f64,
    unit: Unit,
    decimals: u32,
    show_symbol: bool,
    settings: &CurrencySettings,
) -> String {
    let amount = finite_or_zero(amount);
    let value = amount.abs() / unit.magnitude();
    if decimals > MAX_DECIMALS {
        tracing::debug!("{} decimals requested, using {}", decimals, MAX_DECIMALS);
    }

    let (mut body, is_zero) = format_fixed(value, decimals, settings);
    let (whole, fraction) = split_fixed(value, decimals);
    body.push(' ');
    body.push_str(if whole == "1" && fraction == 0 {
        unit.name()
    } else {
        unit.plural_name()
    });

    decorate(&body, amount < 0.0 && !is_zero, show_symbol, settings)
}

/// `|amount|` in `[1e5, 1e7)`
pub(crate) fn is_lakhs_range(amount: f64) -> bool {
    let abs_value = finite_or_zero(amount).abs();
    abs_value >= Unit::Lakh.magnitude() && abs_value < Unit::Crore.magnitude()
}

/// `|amount| >= 1e7`
pub(crate) fn is_crores_range(amount: f64) -> bool {
    finite_or_zero(amount).abs() >= Unit::Crore.magnitude()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> CurrencySettings {
        CurrencySettings::default()
    }

    #[test]
    fn test_words_notation() {
        let s = settings();
        assert_eq!(format_scaled(1500000.0, Notation::Words, true, &s), "₹15 Lakh");
        assert_eq!(format_scaled(25000000.0, Notation::Words, true, &s), "₹2.5 Crore");
        assert_eq!(format_scaled(5000.0, Notation::Words, true, &s), "₹5K");
        assert_eq!(format_scaled(999.0, Notation::Words, false, &s), "999");
        assert_eq!(format_scaled(12.345, Notation::Words, false, &s), "12.35");
    }

    #[test]
    fn test_shorthand_notation() {
        let s = settings();
        assert_eq!(format_scaled(1500000.0, Notation::Shorthand, true, &s), "₹15L");
        assert_eq!(format_scaled(25000000.0, Notation::Shorthand, true, &s), "₹2.5Cr");
        assert_eq!(format_scaled(-1234.0, Notation::Shorthand, true, &s), "-₹1.23K");
        assert_eq!(format_scaled(-0.001, Notation::Shorthand, true, &s), "₹0");
    }

    #[test]
    fn test_unit_thresholds() {
        let s = settings();
        assert_eq!(format_scaled(99999.0, Notation::Shorthand, false, &s), "1L");
        assert_eq!(format_scaled(100000.0, Notation::Shorthand, false, &s), "1L");
        assert_eq!(format_scaled(9999999.0, Notation::Shorthand, false, &s), "1Cr");
        assert_eq!(format_scaled(10000000.0, Notation::Shorthand, false, &s), "1Cr");
        assert_eq!(format_scaled(99994.0, Notation::Shorthand, false, &s), "99.99K");
    }

    #[test]
    fn test_unit_after_rounding() {
        let s = settings();
        assert_eq!(format_scaled(999.999, Notation::Words, true, &s), "₹1K");
        assert_eq!(format_scaled(999.994, Notation::Words, true, &s), "₹999.99");
        assert_eq!(format_scaled(99999.999, Notation::Words, true, &s), "₹1 Lakh");
        assert_eq!(format_scaled(-9999999.0, Notation::Words, true, &s), "-₹1 Crore");
        assert_eq!(select_rounded(999.999), Some(Unit::Thousand));
        assert_eq!(select_rounded(999.995), Some(Unit::Thousand));
        assert_eq!(select_rounded(999.99), None);
        assert_eq!(select_rounded(1e7), Some(Unit::Crore));
    }

    #[test]
    fn test_large_amounts() {
        let s = settings();
        assert_eq!(
            format_scaled(1e20, Notation::Shorthand, true, &s),
            "₹1,00,00,00,00,00,000Cr"
        );
        assert_eq!(
            format_in_unit(1e20, Unit::Lakh, 0, false, &s),
            "1,00,00,00,00,00,00,000 Lakhs"
        );
    }

    #[test]
    fn test_fixed_unit() {
        let s = settings();
        assert_eq!(format_in_unit(500000.0, Unit::Lakh, 2, true, &s), "₹5.00 Lakhs");
        assert_eq!(format_in_unit(100000.0, Unit::Lakh, 2, true, &s), "₹1.00 Lakh");
        assert_eq!(format_in_unit(100400.0, Unit::Lakh, 2, true, &s), "₹1.00 Lakh");
        assert_eq!(format_in_unit(100600.0, Unit::Lakh, 2, true, &s), "₹1.01 Lakhs");
        assert_eq!(format_in_unit(10000000.0, Unit::Crore, 2, true, &s), "₹1.00 Crore");
        assert_eq!(format_in_unit(-25000000.0, Unit::Crore, 1, false, &s), "-2.5 Crores");
        assert_eq!(format_in_unit(0.0, Unit::Lakh, 0, true, &s), "₹0 Lakhs");
    }

    #[test]
    fn test_ranges() {
        assert!(!is_lakhs_range(99999.99));
        assert!(is_lakhs_range(100000.0));
        assert!(is_lakhs_range(-9999999.0));
        assert!(!is_lakhs_range(10000000.0));
        assert!(is_crores_range(10000000.0));
        assert!(is_crores_range(-1e12));
        assert!(!is_crores_range(f64::INFINITY));
    }
}
