use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt, preceded};
use winnow::error::ErrMode;
use winnow::token::{literal, one_of, take_till};
use winnow::{ModalResult, Parser};

use crate::types::TemplateToken;

// Numeric literal parsers

/// Parse the leading decimal literal of a normalized amount
///
/// Accepts `-?(digits[.digits] | .digits)` with an optional exponent and
/// leaves anything after the literal unconsumed, so `"1.2.3"` reads `1.2`.
pub fn parse_leading_float(input: &mut &str) -> ModalResult<f64> {
    let mantissa = alt((
        (digit1, opt(('.', digit0))).void(),
        ('.', digit1).void(),
    ));
    let exponent = opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1));

    (opt('-'), mantissa, exponent)
        .take()
        .try_map(|text: &str| text.parse::<f64>())
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Template parsers

pub fn parse_unit_placeholder(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("%u")
        .value(TemplateToken::Unit)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_number_placeholder(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("%n")
        .value(TemplateToken::Number)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_literal_text(input: &mut &str) -> ModalResult<TemplateToken> {
    take_till(1.., '%')
        .map(|text: &str| TemplateToken::Literal(text.to_string()))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// A `%` that does not start a placeholder is shown as-is
pub fn parse_stray_percent(input: &mut &str) -> ModalResult<TemplateToken> {
    preceded(literal("%"), opt(literal("%")))
        .value(TemplateToken::Literal("%".to_string()))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
