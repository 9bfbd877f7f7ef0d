//! Locale settings for currency parsing and formatting
//!
//! This module holds the currency and number records used when a call does
//! not override them, and loads overrides from TOML configuration.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;

/// Error type for settings operations
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The TOML document could not be read
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    /// No currency record exists under the given key
    #[error("currency not found: {0}")]
    UnknownCurrency(String),
    /// No number locale record exists under the given key
    #[error("number locale not found: {0}")]
    UnknownLocale(String),
    /// A record holds a value that cannot be used
    #[error("invalid setting {field} for {key}: {reason}")]
    Invalid {
        key: String,
        field: &'static str,
        reason: String,
    },
}

type Result<T> = std::result::Result<T, SettingsError>;

/// How a currency amount is displayed
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Display template, `%u` for the unit and `%n` for the number
    pub format: String,
    /// Template for negative amounts; `"-"` followed by `format` when absent
    pub negative_format: Option<String>,
    /// Currency symbol
    pub unit: String,
    /// Decimal separator
    pub separator: String,
    /// Thousands delimiter
    pub delimiter: String,
    /// Fractional digits, or significant digits when `significant` is set
    pub precision: u32,
    pub significant: bool,
    /// Drop trailing zeros after the separator
    pub strip_insignificant_zeros: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            format: "%u%n".to_string(),
            negative_format: None,
            unit: "$".to_string(),
            separator: ".".to_string(),
            delimiter: ",".to_string(),
            precision: 2,
            significant: false,
            strip_insignificant_zeros: false,
        }
    }
}

impl CurrencyFormat {
    /// The template used for negative amounts
    pub fn negative_template(&self) -> Cow<'_, str> {
        match &self.negative_format {
            Some(format) => Cow::Borrowed(format.as_str()),
            None => Cow::Owned(format!("-{}", self.format)),
        }
    }
}

/// Plain number conventions of a locale
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    /// Fractional digits for plain number formatting
    pub precision: u32,
    /// Number of digits per thousands group
    pub grouping: u32,
    /// Thousands separator
    pub thousand: char,
    /// Decimal separator
    pub decimal: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            precision: 0,
            grouping: 3,
            thousand: ',',
            decimal: '.',
        }
    }
}

/// All currency and number records plus the keys selected by default
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub default_currency: String,
    pub currencies: BTreeMap<String, CurrencyFormat>,
    pub default_number: String,
    pub numbers: BTreeMap<String, NumberLocale>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_currency: "usd".to_string(),
            currencies: BTreeMap::from([("usd".to_string(), CurrencyFormat::default())]),
            default_number: "en".to_string(),
            numbers: BTreeMap::from([("en".to_string(), NumberLocale::default())]),
        }
    }
}

/// The shape of a settings document; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    default_currency: Option<String>,
    currencies: BTreeMap<String, CurrencyFormat>,
    default_number: Option<String>,
    numbers: BTreeMap<String, NumberLocale>,
}

impl Settings {
    /// Load settings from a TOML document layered over the defaults
    ///
    /// Records in the document replace records with the same key; fields
    /// missing from a record take their default values.
    ///
    /// # Examples
    /// ```
    /// use formatcurrency::locale::Settings;
    ///
    /// let settings = Settings::from_toml_str(
    ///     r#"
    ///     default_number = "de"
    ///     [numbers.de]
    ///     decimal = ","
    ///     thousand = "."
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(settings.number_locale(None).decimal, ',');
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(toml_str)?;

        let mut settings = Self::default();
        if let Some(key) = file.default_currency {
            settings.default_currency = key;
        }
        if let Some(key) = file.default_number {
            settings.default_number = key;
        }
        settings.currencies.extend(file.currencies);
        settings.numbers.extend(file.numbers);

        settings.validate()?;
        Ok(settings)
    }

    /// Check that the default keys resolve and every record is usable
    pub fn validate(&self) -> Result<()> {
        self.try_currency(None)?;
        self.try_number_locale(None)?;

        for (key, number) in &self.numbers {
            if number.grouping == 0 {
                return Err(SettingsError::Invalid {
                    key: key.clone(),
                    field: "grouping",
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        for (key, currency) in &self.currencies {
            if !currency.format.contains("%n") {
                return Err(SettingsError::Invalid {
                    key: key.clone(),
                    field: "format",
                    reason: format!("template {:?} has no %n placeholder", currency.format),
                });
            }
        }

        Ok(())
    }

    pub fn with_currency(mut self, key: impl Into<String>, currency: CurrencyFormat) -> Self {
        self.currencies.insert(key.into(), currency);
        self
    }

    pub fn with_number_locale(mut self, key: impl Into<String>, number: NumberLocale) -> Self {
        self.numbers.insert(key.into(), number);
        self
    }

    pub fn with_default_currency(mut self, key: impl Into<String>) -> Self {
        self.default_currency = key.into();
        self
    }

    pub fn with_default_number(mut self, key: impl Into<String>) -> Self {
        self.default_number = key.into();
        self
    }

    /// Get a currency record by key, or the default currency when `key` is `None`
    pub fn try_currency(&self, key: Option<&str>) -> Result<&CurrencyFormat> {
        let key = key.unwrap_or(&self.default_currency);
        self.currencies
            .get(key)
            .ok_or_else(|| SettingsError::UnknownCurrency(key.to_string()))
    }

    /// Get a number locale by key, or the default locale when `key` is `None`
    pub fn try_number_locale(&self, key: Option<&str>) -> Result<NumberLocale> {
        let key = key.unwrap_or(&self.default_number);
        self.numbers
            .get(key)
            .copied()
            .ok_or_else(|| SettingsError::UnknownLocale(key.to_string()))
    }

    /// Like [`Settings::try_currency`], falling back to the built-in USD record
    pub fn currency(&self, key: Option<&str>) -> Cow<'_, CurrencyFormat> {
        match self.try_currency(key) {
            Ok(currency) => Cow::Borrowed(currency),
            Err(e) => {
                tracing::warn!(error = %e, "using built-in currency format");
                Cow::Owned(CurrencyFormat::default())
            }
        }
    }

    /// Like [`Settings::try_number_locale`], falling back to the built-in `en` record
    pub fn number_locale(&self, key: Option<&str>) -> NumberLocale {
        self.try_number_locale(key).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using built-in number locale");
            NumberLocale::default()
        })
    }

    /// List all configured currency keys
    pub fn list_currencies(&self) -> Vec<String> {
        self.currencies.keys().cloned().collect()
    }

    /// List all configured number locale keys
    pub fn list_number_locales(&self) -> Vec<String> {
        self.numbers.keys().cloned().collect()
    }
}
