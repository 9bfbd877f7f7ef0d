//! Type definitions for currency parsing and formatting
//!
//! This module defines the values accepted by the unformatter, the values it
//! produces, and the tokens a currency display template is parsed into.

use std::borrow::Cow;

/// A single scalar handed to the unformatter
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// No value at all
    Null,
    /// An already-numeric value, returned as-is
    Number(f64),
    /// Formatted text such as `"$ 1,234.56"`
    Text(Cow<'a, str>),
}

impl Value<'_> {
    /// Checks if the value counts as "nothing", which unformats to zero
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Number(n) => *n == 0.0 || n.is_nan(),
            Value::Text(text) => text.is_empty(),
        }
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

/// Magnitudes above 2^53 round to the nearest representable `f64`
impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

/// Magnitudes above 2^53 round to the nearest representable `f64`
impl From<u64> for Value<'_> {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value<'_> {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Either one scalar or an ordered sequence of scalars
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    Scalar(Value<'a>),
    Sequence(Vec<Value<'a>>),
}

impl<'a> Input<'a> {
    pub fn scalar(value: impl Into<Value<'a>>) -> Self {
        Input::Scalar(value.into())
    }

    pub fn sequence<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        Input::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<'a> From<Value<'a>> for Input<'a> {
    fn from(value: Value<'a>) -> Self {
        Input::Scalar(value)
    }
}

impl<'a, T> From<Vec<T>> for Input<'a>
where
    T: Into<Value<'a>>,
{
    fn from(values: Vec<T>) -> Self {
        Input::sequence(values)
    }
}

/// Result of unformatting an [`Input`], shaped like the input
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl Output {
    /// Returns the scalar result, or `None` for a sequence
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Output::Scalar(value) => Some(*value),
            Output::Sequence(_) => None,
        }
    }

    /// Flattens the output into a vector; a scalar becomes a one-element vector
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Output::Scalar(value) => vec![value],
            Output::Sequence(values) => values,
        }
    }
}

/// Represents a single token of a currency display template such as `"%u%n"`
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateToken {
    /// Currency unit placeholder (%u)
    Unit,
    /// Formatted number placeholder (%n)
    Number,
    /// Text to display directly
    Literal(String),
}
