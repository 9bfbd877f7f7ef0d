use std::borrow::Cow;

use winnow::Parser;

use crate::locale::Settings;
use crate::parser::tokens::parse_leading_float;
use crate::types::{Input, Output, Value};

/// Why a value could not be read as a number
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnformatError {
    /// Null or empty text
    #[error("no value to parse")]
    Empty,
    /// Nothing numeric was left after stripping the formatting
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Reads raw numbers out of formatted currency strings
///
/// The decimal separator defaults to the `decimal` of the selected number
/// locale and can be overridden per call.
#[derive(Debug, Clone, Default)]
pub struct Unformatter {
    settings: Settings,
}

impl Unformatter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The decimal separator used when a call does not provide one
    pub fn default_decimal(&self) -> char {
        self.settings.number_locale(None).decimal
    }

    /// Parse a value, reporting why it could not be read
    ///
    /// Numbers are returned unchanged (except NaN, which has no value).
    /// Text is read as follows:
    /// 1. `(123.45)` style negatives become `-123.45`
    /// 2. everything but digits, `-` and the decimal separator is dropped
    /// 3. the first decimal separator becomes `.`
    /// 4. the leading decimal literal is read; anything after it is ignored
    ///
    /// # Examples
    /// ```
    /// use formatcurrency::parser::{UnformatError, Unformatter};
    ///
    /// let unformatter = Unformatter::default();
    /// assert_eq!(unformatter.try_unformat("$ (1.99)", None), Ok(-1.99));
    /// assert_eq!(unformatter.try_unformat("", None), Err(UnformatError::Empty));
    /// ```
    pub fn try_unformat<'a>(
        &self,
        value: impl Into<Value<'a>>,
        decimal: Option<char>,
    ) -> Result<f64, UnformatError> {
        match value.into() {
            Value::Null => Err(UnformatError::Empty),
            Value::Number(n) if n.is_nan() => Err(UnformatError::NotANumber(n.to_string())),
            Value::Number(n) => Ok(n),
            Value::Text(text) if text.is_empty() => Err(UnformatError::Empty),
            Value::Text(text) => {
                let decimal = decimal.unwrap_or_else(|| self.default_decimal());
                read_amount(&text, decimal)
                    .ok_or_else(|| UnformatError::NotANumber(text.into_owned()))
            }
        }
    }

    /// Parse a value, collapsing anything unreadable to zero
    ///
    /// A result of `0` is ambiguous: use [`Unformatter::try_unformat`] to tell
    /// a real zero apart from a failed parse.
    pub fn unformat<'a>(&self, value: impl Into<Value<'a>>, decimal: Option<char>) -> f64 {
        let value = value.into();
        if value.is_falsy() {
            return 0.0;
        }

        self.try_unformat(value, decimal).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "unreadable amount, using zero");
            0.0
        })
    }

    /// Parse every element of a sequence independently, keeping order and length
    pub fn unformat_all<'a, I>(&self, values: I, decimal: Option<char>) -> Vec<f64>
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        values
            .into_iter()
            .map(|value| self.unformat(value, decimal))
            .collect()
    }

    /// Parse a scalar or a sequence, returning a result of the same shape
    pub fn apply<'a>(&self, input: impl Into<Input<'a>>, decimal: Option<char>) -> Output {
        match input.into() {
            Input::Scalar(value) => Output::Scalar(self.unformat(value, decimal)),
            Input::Sequence(values) => Output::Sequence(self.unformat_all(values, decimal)),
        }
    }
}

/// Parse a value with the default settings, collapsing failures to zero
///
/// # Examples
/// ```
/// use formatcurrency::unformat;
///
/// assert_eq!(unformat("$ 123,456.78", None), 123456.78);
/// assert_eq!(unformat("$ 123,456", Some(',')), 123.456);
/// ```
pub fn unformat<'a>(value: impl Into<Value<'a>>, decimal: Option<char>) -> f64 {
    Unformatter::default().unformat(value, decimal)
}

/// Parse every element of a sequence with the default settings
pub fn unformat_all<'a, I>(values: I, decimal: Option<char>) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: Into<Value<'a>>,
{
    Unformatter::default().unformat_all(values, decimal)
}

fn read_amount(text: &str, decimal: char) -> Option<f64> {
    let signed = rewrite_bracketed_negative(text);

    let stripped: String = signed
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == '-' || c == decimal)
        .collect();
    let normalized = if decimal == '.' {
        stripped
    } else {
        stripped.replacen(decimal, ".", 1)
    };

    let mut input = normalized.as_str();
    parse_leading_float.parse_next(&mut input).ok()
}

/// Rewrite the first `(...)` group holding a digit as `-...`
///
/// A group runs from a `(` to the last `)` before the end of that line. The
/// first group whose content has an ASCII digit is rewritten, so `($ 1.99)`
/// reads as negative while an empty `()` in surrounding noise does not.
fn rewrite_bracketed_negative(text: &str) -> Cow<'_, str> {
    for (open, _) in text.match_indices('(') {
        let after = &text[open + 1..];
        let line_end = after
            .find(['\n', '\r', '\u{2028}', '\u{2029}'])
            .unwrap_or(after.len());
        let Some(close) = after[..line_end].rfind(')') else {
            continue;
        };

        let content = &after[..close];
        if content.bytes().any(|b| b.is_ascii_digit()) {
            return Cow::Owned(format!(
                "{}-{}{}",
                &text[..open],
                content,
                &after[close + 1..]
            ));
        }
    }

    Cow::Borrowed(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_bracketed_negative() {
        assert_eq!(rewrite_bracketed_negative("$ (1.99)"), "$ -1.99");
        assert_eq!(rewrite_bracketed_negative("(1) and (2)"), "-1) and (2");
        assert_eq!(rewrite_bracketed_negative("&*()$ 123"), "&*()$ 123");
        assert_eq!(rewrite_bracketed_negative("() x"), "() x");
        assert_eq!(rewrite_bracketed_negative("($1.99)"), "-$1.99");
        assert_eq!(rewrite_bracketed_negative("( 1.99 )"), "- 1.99 ");
        assert_eq!(rewrite_bracketed_negative("(12\n)"), "(12\n)");
        assert_eq!(rewrite_bracketed_negative("(12"), "(12");
    }

    #[test]
    fn test_read_amount() {
        assert_eq!(read_amount("$ 123,456.78", '.'), Some(123456.78));
        assert_eq!(read_amount("€ 1.234,5", ','), Some(1234.5));
        assert_eq!(read_amount("abc", '.'), None);
        assert_eq!(read_amount("-", '.'), None);
        assert_eq!(read_amount("--5", '.'), None);
        assert_eq!(read_amount("5-3", '.'), Some(5.0));
        assert_eq!(read_amount("$.50", '.'), Some(0.5));
    }

    #[test]
    fn test_repeated_decimal_separator() {
        // Only the first separator is converted; reading stops at the second
        assert_eq!(read_amount("1.234.567", '.'), Some(1.234));
        assert_eq!(read_amount("1,234,567", ','), Some(1.234));
    }
}
