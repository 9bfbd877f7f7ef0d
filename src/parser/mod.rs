//! Currency string parsing module
//!
//! This module turns formatted currency strings back into numbers and parses
//! the display templates used by the formatter.
//! The main entry points are [`Unformatter`] and [`parse_template`].

mod template;
mod tokens;
mod unformat;

pub use template::parse_template;
pub use unformat::{UnformatError, Unformatter, unformat, unformat as parse, unformat_all};
