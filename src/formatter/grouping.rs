use crate::types::CurrencySettings;

const EPSILON: f64 = 1e-9;

/// 2^53. From here on every f64 is a whole number.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Upper bound on fractional digits; keeps `10^decimals` scaling inside u64
pub const MAX_DECIMALS: u32 = 9;

/// Replace NaN and infinities with zero so every entry point stays total
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::debug!("Non-finite amount {} treated as zero", value);
        0.0
    }
}

/// Round a non-negative value below one to `decimals` places, scaled to an integer.
///
/// Halves round up. The epsilon absorbs binary representation error so that
/// 1.005 rounds to 1.01 the way it reads.
fn round_fraction(fraction: f64, decimals: u32) -> u64 {
    let scaled = fraction * 10f64.powi(decimals as i32);
    let floor = scaled.trunc();
    if scaled - floor >= 0.5 - EPSILON {
        floor as u64 + 1
    } else {
        floor as u64
    }
}

/// Split a non-negative value into the decimal digits of its whole part and
/// `decimals` rounded fractional digits.
///
/// A fraction that rounds up to a full unit is carried into the whole part,
/// so the fractional part is always below `10^decimals`. Values past 2^53
/// have no fraction and are written out digit for digit.
pub(crate) fn split_fixed(abs_value: f64, decimals: u32) -> (String, u64) {
    if abs_value >= EXACT_INTEGER_LIMIT {
        return (format!("{:.0}", abs_value.trunc()), 0);
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let divisor = 10u64.pow(decimals);

    let mut whole = abs_value.trunc() as u64;
    let mut fraction = round_fraction(abs_value.fract(), decimals);
    if fraction >= divisor {
        whole += 1;
        fraction -= divisor;
    }
    (whole.to_string(), fraction)
}

/// Insert separators using Indian grouping.
///
/// The last three digits form the anchor group, everything before it is
/// grouped in pairs: `1234567` becomes `12,34,567`.
pub fn group_indian(digits: &str, separator: char) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, anchor) = digits.split_at(len - 3);
    let mut grouped = String::with_capacity(len + len / 2);
    for (i, digit) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped.push(separator);
    grouped.push_str(anchor);
    grouped
}

/// Format a non-negative value with Indian grouping and exactly `decimals` fractional digits.
///
/// Returns the text together with a flag telling whether it rounded to zero.
pub(crate) fn format_fixed(
    abs_value: f64,
    decimals: u32,
    settings: &CurrencySettings,
) -> (String, bool) {
    let decimals = decimals.min(MAX_DECIMALS);
    let (whole, fraction) = split_fixed(abs_value, decimals);

    let mut result = group_indian(&whole, settings.group_separator);
    if decimals > 0 {
        result.push(settings.decimal_point);
        result.push_str(&format!("{:0width$}", fraction, width = decimals as usize));
    }
    (result, whole == "0" && fraction == 0)
}

/// Format a non-negative value rounded to two places with trailing zero decimals dropped.
///
/// `5.00` becomes `5`, `5.50` becomes `5.5`.
pub(crate) fn format_compact(abs_value: f64, settings: &CurrencySettings) -> (String, bool) {
    let (whole, fraction) = split_fixed(abs_value, 2);

    let mut result = group_indian(&whole, settings.group_separator);
    if fraction != 0 {
        result.push(settings.decimal_point);
        if fraction % 10 == 0 {
            result.push_str(&(fraction / 10).to_string());
        } else {
            result.push_str(&format!("{:02}", fraction));
        }
    }
    (result, whole == "0" && fraction == 0)
}

/// Attach the sign and the currency symbol to a formatted magnitude.
///
/// The sign precedes the symbol: `-₹5,000.00`.
pub(crate) fn decorate(
    body: &str,
    is_negative: bool,
    show_symbol: bool,
    settings: &CurrencySettings,
) -> String {
    let mut result = String::with_capacity(body.len() + settings.currency_symbol.len() + 1);
    if is_negative {
        result.push('-');
    }
    if show_symbol {
        result.push_str(&settings.currency_symbol);
    }
    result.push_str(body);
    result
}
