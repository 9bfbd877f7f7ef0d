pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

/// Version of the library, for embedding diagnostics
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Main API exports
pub use formatter::{
    CurrencyFormatter, CurrencyOptions, format_number, number_to_currency, number_to_currency_with,
};
pub use locale::{CurrencyFormat, NumberLocale, Settings, SettingsError};
pub use parser::{UnformatError, Unformatter, parse, parse_template, unformat, unformat_all};
pub use types::*;
