//! Spelling amounts out in English words using Indian grouping
//!
//! `12345.67` reads "Twelve Thousand Three Hundred Forty Five Rupees and
//! Sixty Seven Paise". Groups are crore, lakh, thousand, hundred and the
//! final two digits.

use crate::formatter::grouping::{finite_or_zero, split_fixed};
use crate::types::RupeePaiseSplit;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Words for a two-digit group; empty for zero.
///
/// Callers only pass values below 100.
fn two_digit_words(n: u64) -> String {
    let n = (n % 100) as usize;
    match n {
        0..=9 => ONES[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ => {
            let ones = ONES[n % 10];
            if ones.is_empty() {
                TENS[n / 10].to_string()
            } else {
                format!("{} {}", TENS[n / 10], ones)
            }
        }
    }
}

/// Spell a non-negative integer using crore, lakh, thousand and hundred.
///
/// A crore count above 99 is itself spelled with Indian grouping, so
/// `1_000_00_00_000` reads "One Thousand Crore".
///
/// # Examples
/// ```
/// use desi_currency::formatter::number_to_words;
///
/// assert_eq!(number_to_words(0), "Zero");
/// assert_eq!(number_to_words(1_50_00_000), "One Crore Fifty Lakh");
/// ```
pub fn number_to_words(n: u128) -> String {
    digits_to_words(&n.to_string())
}

/// Spell a string of ASCII decimal digits of any length
fn digits_to_words(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "Zero".to_string();
    }

    let mut segments: Vec<String> = Vec::new();

    let (crore_digits, below_crore) = digits.split_at(digits.len().saturating_sub(7));
    if !crore_digits.is_empty() {
        segments.push(format!("{} Crore", digits_to_words(crore_digits)));
    }

    let mut rest = below_crore
        .bytes()
        .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));

    let lakh = rest / 100_000;
    rest %= 100_000;
    if lakh > 0 {
        segments.push(format!("{} Lakh", two_digit_words(lakh)));
    }

    let thousand = rest / 1_000;
    rest %= 1_000;
    if thousand > 0 {
        segments.push(format!("{} Thousand", two_digit_words(thousand)));
    }

    let hundred = rest / 100;
    rest %= 100;
    if hundred > 0 {
        segments.push(format!("{} Hundred", ONES[hundred as usize]));
    }

    if rest > 0 {
        segments.push(two_digit_words(rest));
    }

    segments.join(" ")
}

/// Split an amount into whole rupees and paise.
///
/// Paise are rounded to the nearest integer; a fraction that rounds to 100
/// paise carries into the rupees. Rupees are exact up to `i128::MAX`
/// (about 1.7e38) and saturate there.
pub fn split_rupees_paise(amount: f64) -> RupeePaiseSplit {
    let amount = finite_or_zero(amount);
    let is_negative = amount < 0.0;
    let (digits, paise) = split_fixed(amount.abs(), 2);
    let rupees = digits.parse::<i128>().unwrap_or_else(|_| {
        tracing::debug!("Rupee count {} saturated at i128::MAX", digits);
        i128::MAX
    });

    RupeePaiseSplit {
        rupees: if is_negative { -rupees } else { rupees },
        paise: paise as u8,
        is_negative,
    }
}

/// Spell an amount out as rupees and paise.
///
/// Every finite amount is spelled exactly, crore counts nesting as needed:
/// `1e20` reads "Ten Lakh Crore Crore Rupees".
pub fn to_indian_words(amount: f64) -> String {
    let amount = finite_or_zero(amount);
    let (digits, paise) = split_fixed(amount.abs(), 2);

    let mut result = digits_to_words(&digits);
    result.push_str(if digits == "1" { " Rupee" } else { " Rupees" });

    if paise > 0 {
        result.push_str(" and ");
        result.push_str(&number_to_words(u128::from(paise)));
        result.push_str(" Paise");
    }

    if amount < 0.0 && (digits != "0" || paise > 0) {
        format!("Negative {}", result)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_words() {
        assert_eq!(two_digit_words(0), "");
        assert_eq!(two_digit_words(7), "Seven");
        assert_eq!(two_digit_words(10), "Ten");
        assert_eq!(two_digit_words(19), "Nineteen");
        assert_eq!(two_digit_words(20), "Twenty");
        assert_eq!(two_digit_words(45), "Forty Five");
        assert_eq!(two_digit_words(99), "Ninety Nine");
    }

    #[test]
    fn test_number_to_words_groups() {
        assert_eq!(number_to_words(5), "Five");
        assert_eq!(number_to_words(100), "One Hundred");
        assert_eq!(number_to_words(101), "One Hundred One");
        assert_eq!(number_to_words(1000), "One Thousand");
        assert_eq!(number_to_words(12345), "Twelve Thousand Three Hundred Forty Five");
        assert_eq!(number_to_words(100000), "One Lakh");
        assert_eq!(
            number_to_words(9999999),
            "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine"
        );
        assert_eq!(number_to_words(10000000), "One Crore");
        assert_eq!(
            number_to_words(123456789),
            "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred Eighty Nine"
        );
    }

    #[test]
    fn test_number_to_words_large_crore() {
        assert_eq!(number_to_words(10_000_000_000), "One Thousand Crore");
        assert_eq!(
            number_to_words(1_250_000_000_000),
            "One Lakh Twenty Five Thousand Crore"
        );
        assert_eq!(
            number_to_words(u128::from(u64::MAX) + 1),
            "One Lakh Eighty Four Thousand Four Hundred Sixty Seven Crore \
             Forty Four Lakh Seven Thousand Three Hundred Seventy Crore \
             Ninety Five Lakh Fifty One Thousand Six Hundred Sixteen"
        );
    }

    #[test]
    fn test_split_rupees_paise() {
        assert_eq!(
            split_rupees_paise(12345.67),
            RupeePaiseSplit {
                rupees: 12345,
                paise: 67,
                is_negative: false
            }
        );
        assert_eq!(
            split_rupees_paise(-12.5),
            RupeePaiseSplit {
                rupees: -12,
                paise: 50,
                is_negative: true
            }
        );
    }

    #[test]
    fn test_split_paise_carry() {
        let split = split_rupees_paise(4.999);
        assert_eq!(split.rupees, 5);
        assert_eq!(split.paise, 0);

        let split = split_rupees_paise(-0.996);
        assert_eq!(split.rupees, -1);
        assert_eq!(split.paise, 0);
    }

    #[test]
    fn test_to_indian_words() {
        assert_eq!(
            to_indian_words(12345.67),
            "Twelve Thousand Three Hundred Forty Five Rupees and Sixty Seven Paise"
        );
        assert_eq!(to_indian_words(1.0), "One Rupee");
        assert_eq!(to_indian_words(0.0), "Zero Rupees");
        assert_eq!(to_indian_words(0.5), "Zero Rupees and Fifty Paise");
        assert_eq!(to_indian_words(-1.01), "Negative One Rupee and One Paise");
        assert_eq!(to_indian_words(-0.001), "Zero Rupees");
    }

    #[test]
    fn test_amounts_beyond_u64() {
        let split = split_rupees_paise(1e20);
        assert_eq!(split.rupees, 100_000_000_000_000_000_000);
        assert_eq!(split.paise, 0);
        assert_eq!(split_rupees_paise(-1e20).rupees, -100_000_000_000_000_000_000);
        assert_eq!(split_rupees_paise(1e300).rupees, i128::MAX);

        assert_eq!(to_indian_words(1e20), "Ten Lakh Crore Crore Rupees");
        assert_eq!(to_indian_words(-1e20), "Negative Ten Lakh Crore Crore Rupees");
        assert!(to_indian_words(f64::MAX).ends_with(" Rupees"));
    }
}
