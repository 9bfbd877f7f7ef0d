//! Currency formatting module
//!
//! This module renders numbers as currency strings according to the
//! currency and number records of a [`Settings`] value.
//! The main entry point is [`CurrencyFormatter::number_to_currency`].

mod core;

use std::borrow::Cow;

use crate::locale::{CurrencyFormat, Settings};
use crate::parser::parse_template;
use crate::types::TemplateToken;

use self::core::{
    RoundedDigits, group_integer_digits, round_fixed, round_significant,
    strip_insignificant_zeros,
};

/// Per-call overrides for [`CurrencyFormatter::number_to_currency`]
///
/// Every field left as `None` takes its value from the selected currency record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyOptions {
    /// Key of the currency record to start from
    pub currency: Option<String>,
    /// Key of the number locale supplying the group size
    pub locale: Option<String>,
    pub format: Option<String>,
    pub negative_format: Option<String>,
    pub unit: Option<String>,
    pub separator: Option<String>,
    pub delimiter: Option<String>,
    pub precision: Option<u32>,
    pub significant: Option<bool>,
    pub strip_insignificant_zeros: Option<bool>,
}

impl CurrencyOptions {
    pub fn with_currency(mut self, key: impl Into<String>) -> Self {
        self.currency = Some(key.into());
        self
    }

    pub fn with_locale(mut self, key: impl Into<String>) -> Self {
        self.locale = Some(key.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_negative_format(mut self, format: impl Into<String>) -> Self {
        self.negative_format = Some(format.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_significant(mut self, significant: bool) -> Self {
        self.significant = Some(significant);
        self
    }

    pub fn with_strip_insignificant_zeros(mut self, strip: bool) -> Self {
        self.strip_insignificant_zeros = Some(strip);
        self
    }

    /// Apply the overrides on top of a currency record
    fn apply_to(&self, base: &CurrencyFormat) -> CurrencyFormat {
        CurrencyFormat {
            format: self.format.clone().unwrap_or_else(|| base.format.clone()),
            // A replaced positive template also replaces the derived negative one
            negative_format: self.negative_format.clone().or_else(|| {
                if self.format.is_some() {
                    None
                } else {
                    base.negative_format.clone()
                }
            }),
            unit: self.unit.clone().unwrap_or_else(|| base.unit.clone()),
            separator: self
                .separator
                .clone()
                .unwrap_or_else(|| base.separator.clone()),
            delimiter: self
                .delimiter
                .clone()
                .unwrap_or_else(|| base.delimiter.clone()),
            precision: self.precision.unwrap_or(base.precision),
            significant: self.significant.unwrap_or(base.significant),
            strip_insignificant_zeros: self
                .strip_insignificant_zeros
                .unwrap_or(base.strip_insignificant_zeros),
        }
    }
}

/// Renders numbers as currency strings
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    settings: Settings,
}

impl CurrencyFormatter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Format a number as a currency amount
    ///
    /// # Arguments
    /// * `number` - The amount to format
    /// * `options` - Overrides for the selected currency record
    ///
    /// # Returns
    /// * `String` - The formatted amount; NaN and infinities are shown as-is
    ///
    /// # Examples
    /// ```
    /// use formatcurrency::formatter::{CurrencyFormatter, CurrencyOptions};
    ///
    /// let formatter = CurrencyFormatter::default();
    /// assert_eq!(formatter.number_to_currency(12345.67, &CurrencyOptions::default()), "$12,345.67");
    /// assert_eq!(formatter.number_to_currency(-5.0, &CurrencyOptions::default()), "-$5.00");
    /// ```
    pub fn number_to_currency(&self, number: f64, options: &CurrencyOptions) -> String {
        if !number.is_finite() {
            return number.to_string();
        }

        let base = self.settings.currency(options.currency.as_deref());
        let currency = options.apply_to(&base);
        let group_size = self
            .settings
            .number_locale(options.locale.as_deref())
            .grouping;

        let digits = if currency.significant {
            round_significant(number.abs(), currency.precision)
        } else {
            round_fixed(number.abs(), currency.precision as usize)
        };
        let is_negative = number < 0.0 && !digits.is_zero();

        let amount = join_digits(
            &digits,
            group_size,
            &currency.delimiter,
            &currency.separator,
            currency.strip_insignificant_zeros,
        );

        let template = if is_negative {
            currency.negative_template()
        } else {
            Cow::Borrowed(currency.format.as_str())
        };
        render_template(&template, &currency.unit, &amount)
    }

    /// Format a plain number with the selected number locale
    ///
    /// `precision` overrides the locale's number of fractional digits.
    pub fn format_number(&self, number: f64, precision: Option<u32>) -> String {
        if !number.is_finite() {
            return number.to_string();
        }

        let locale = self.settings.number_locale(None);
        let digits = round_fixed(
            number.abs(),
            precision.unwrap_or(locale.precision) as usize,
        );

        let mut result = String::new();
        if number < 0.0 && !digits.is_zero() {
            result.push('-');
        }
        result.push_str(&join_digits(
            &digits,
            locale.grouping,
            &locale.thousand.to_string(),
            &locale.decimal.to_string(),
            false,
        ));
        result
    }
}

fn join_digits(
    digits: &RoundedDigits,
    group_size: u32,
    delimiter: &str,
    separator: &str,
    strip_zeros: bool,
) -> String {
    let mut amount = group_integer_digits(&digits.integer, group_size, delimiter);

    let fraction = if strip_zeros {
        strip_insignificant_zeros(&digits.fraction)
    } else {
        digits.fraction.as_str()
    };
    if !fraction.is_empty() {
        amount.push_str(separator);
        amount.push_str(fraction);
    }

    amount
}

fn render_template(template: &str, unit: &str, amount: &str) -> String {
    let tokens = parse_template(template).unwrap_or_else(|e| {
        tracing::warn!(template, error = %e, "falling back to unit-number layout");
        vec![TemplateToken::Unit, TemplateToken::Number]
    });

    let mut result = String::with_capacity(template.len() + unit.len() + amount.len());
    for token in &tokens {
        match token {
            TemplateToken::Unit => result.push_str(unit),
            TemplateToken::Number => result.push_str(amount),
            TemplateToken::Literal(text) => result.push_str(text),
        }
    }
    result
}

/// Format a number as a currency amount with the default settings
///
/// # Examples
/// ```
/// use formatcurrency::number_to_currency;
///
/// assert_eq!(number_to_currency(123.0), "$123.00");
/// ```
pub fn number_to_currency(number: f64) -> String {
    CurrencyFormatter::default().number_to_currency(number, &CurrencyOptions::default())
}

/// Format a number as a currency amount with the default settings and per-call overrides
pub fn number_to_currency_with(number: f64, options: &CurrencyOptions) -> String {
    CurrencyFormatter::default().number_to_currency(number, options)
}

/// Format a plain number with the default settings
pub fn format_number(number: f64, precision: Option<u32>) -> String {
    CurrencyFormatter::default().format_number(number, precision)
}
