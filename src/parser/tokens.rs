use winnow::ascii::Caseless;
use winnow::combinator::{alt, opt};
use winnow::token::{literal, take_while};
use winnow::{ModalResult, Parser};

use crate::types::Unit;

/// Symbols stripped from amount text before parsing.
///
/// "Rs." comes before "Rs" so its dot is never read as a decimal point.
pub(crate) const SYMBOL_TOKENS: [&str; 3] = ["₹", "Rs.", "Rs"];

// Longer spellings come first so that "Lakh" is not read as "L" + "akh".
fn parse_crore(input: &mut &str) -> ModalResult<Unit> {
    alt((
        literal(Caseless("crores")),
        literal(Caseless("crore")),
        literal(Caseless("cr")),
    ))
    .value(Unit::Crore)
    .parse_next(input)
}

fn parse_lakh(input: &mut &str) -> ModalResult<Unit> {
    alt((
        literal(Caseless("lakhs")),
        literal(Caseless("lakh")),
        literal(Caseless("l")),
    ))
    .value(Unit::Lakh)
    .parse_next(input)
}

fn parse_thousand(input: &mut &str) -> ModalResult<Unit> {
    alt((
        literal(Caseless("thousands")),
        literal(Caseless("thousand")),
        literal(Caseless("k")),
    ))
    .value(Unit::Thousand)
    .parse_next(input)
}

/// Parse a unit token such as "Cr", "lakh" or "K", ignoring case
pub fn parse_unit_token(input: &mut &str) -> ModalResult<Unit> {
    alt((parse_crore, parse_lakh, parse_thousand)).parse_next(input)
}

/// Parse an optional leading minus sign
pub(crate) fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt('-').map(|sign| sign.is_some()).parse_next(input)
}

/// Parse the numeric body: digits with group separators and a decimal point
pub(crate) fn parse_numeric_body<'s>(
    group_separator: char,
    decimal_point: char,
) -> impl FnMut(&mut &'s str) -> ModalResult<&'s str> {
    move |input: &mut &'s str| {
        take_while(1.., |c: char| {
            c.is_ascii_digit() || c == group_separator || c == decimal_point
        })
        .parse_next(input)
    }
}
