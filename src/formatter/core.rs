/// Digits of a rounded magnitude, split at the decimal point
#[derive(Debug, Clone, PartialEq)]
pub(super) struct RoundedDigits {
    pub integer: String,
    pub fraction: String,
}

impl RoundedDigits {
    pub fn is_zero(&self) -> bool {
        self.integer.chars().chain(self.fraction.chars()).all(|c| c == '0')
    }
}

/// Round a non-negative finite magnitude to a fixed number of fractional digits
///
/// Ties round away from zero, so `0.125` at two places is `0.13`.
pub(super) fn round_fixed(magnitude: f64, decimal_places: usize) -> RoundedDigits {
    let rounded = round_half_away(magnitude, decimal_places);
    let rendered = format!("{rounded:.decimal_places$}");
    match rendered.split_once('.') {
        Some((integer, fraction)) => RoundedDigits {
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        },
        None => RoundedDigits {
            integer: rendered,
            fraction: String::new(),
        },
    }
}

fn round_half_away(magnitude: f64, decimal_places: usize) -> f64 {
    let scale = 10f64.powi(decimal_places.min(i32::MAX as usize) as i32);
    let scaled = magnitude * scale;
    // Past 2^53 every f64 is already a whole number at this scale
    if !scale.is_finite() || !scaled.is_finite() || scaled >= 9_007_199_254_740_992.0 {
        return magnitude;
    }
    scaled.round() / scale
}

/// Round a non-negative finite magnitude to a number of significant digits
///
/// Digits left of the decimal point beyond the significant ones become zeros,
/// so `123.456` at two significant digits is `120`.
pub(super) fn round_significant(magnitude: f64, significant_digits: u32) -> RoundedDigits {
    let significant_digits = significant_digits.max(1) as i32;
    // Subnormals have no usable decimal exponent; they show as zero
    if magnitude < f64::MIN_POSITIVE {
        return round_fixed(0.0, (significant_digits - 1) as usize);
    }

    let mut exponent = magnitude.log10().floor() as i32;
    // Rounding can carry into a new leading digit, e.g. 9.96 -> 10.0
    let carried = round_to_exponent(magnitude, exponent, significant_digits);
    if carried != 0.0 && carried.log10().floor() as i32 > exponent {
        exponent += 1;
    }

    let decimal_places = significant_digits - 1 - exponent;
    if decimal_places >= 0 {
        round_fixed(magnitude, decimal_places as usize)
    } else {
        round_fixed(round_to_exponent(magnitude, exponent, significant_digits), 0)
    }
}

fn round_to_exponent(magnitude: f64, exponent: i32, significant_digits: i32) -> f64 {
    let shift = significant_digits - 1 - exponent;
    if shift >= 0 {
        let scale = 10f64.powi(shift);
        (magnitude * scale).round() / scale
    } else {
        let factor = 10f64.powi(-shift);
        (magnitude / factor).round() * factor
    }
}

/// Insert a delimiter between groups of `group_size` digits, counting from the right
pub(super) fn group_integer_digits(digits: &str, group_size: u32, delimiter: &str) -> String {
    let group_size = group_size as usize;
    if group_size == 0 || delimiter.is_empty() || digits.len() <= group_size {
        return digits.to_string();
    }

    let int_digits: Vec<char> = digits.chars().collect();
    let mut grouped: Vec<String> = Vec::with_capacity(int_digits.len() / group_size + 1);
    for chunk in int_digits.rchunks(group_size).rev() {
        grouped.push(chunk.iter().collect());
    }
    grouped.join(delimiter)
}

/// Drop trailing zeros of the fractional digits
pub(super) fn strip_insignificant_zeros(fraction: &str) -> &str {
    fraction.trim_end_matches('0')
}
