use winnow::combinator::{alt, repeat};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::TemplateToken;

fn parse_template_token(input: &mut &str) -> ModalResult<TemplateToken> {
    alt((
        parse_unit_placeholder,
        parse_number_placeholder,
        parse_literal_text,
        parse_stray_percent,
    ))
    .parse_next(input)
}

/// Parse a currency display template
///
/// `%u` becomes [`TemplateToken::Unit`], `%n` becomes [`TemplateToken::Number`],
/// `%%` is a literal percent sign and everything else is literal text.
/// Adjacent literal runs are merged.
///
/// # Examples
/// ```
/// use formatcurrency::parser::parse_template;
/// use formatcurrency::types::TemplateToken;
///
/// let tokens = parse_template("%n %u").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         TemplateToken::Number,
///         TemplateToken::Literal(" ".to_string()),
///         TemplateToken::Unit,
///     ]
/// );
/// ```
pub fn parse_template(input_str: &str) -> Result<Vec<TemplateToken>, String> {
    let tokens: Vec<TemplateToken> = repeat(0.., parse_template_token)
        .parse(input_str)
        .map_err(|e| format!("Parse error in template {input_str:?}: {e}"))?;

    let mut merged: Vec<TemplateToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match (merged.last_mut(), token) {
            (Some(TemplateToken::Literal(previous)), TemplateToken::Literal(text)) => {
                previous.push_str(&text);
            }
            (_, token) => merged.push(token),
        }
    }

    Ok(merged)
}
