//! Locale-tolerant numeric parsing
//!
//! The sheet mixes `1,234.56` and `1.234,56` style cells depending on who
//! last edited it. A trailing comma-decimal pattern switches the parser
//! into comma-decimal mode; everything else falls back to stripping
//! non-numeric characters.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMA_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r",\d{1,2}$").unwrap()
});

/// Parse a monetary cell into a float. Unparseable values become 0.0.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = if COMMA_DECIMAL.is_match(trimmed) {
        // Comma-decimal locale: periods are thousands separators.
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect()
    };

    normalized.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_decimal_locale() {
        assert!((parse_amount("1.234,56") - 1234.56).abs() < f64::EPSILON);
        assert!((parse_amount("12,5") - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_dot_decimal_locale() {
        assert!((parse_amount("1,234.56") - 1234.56).abs() < f64::EPSILON);
        assert!((parse_amount("$ 99.95") - 99.95).abs() < f64::EPSILON);
    }

    #[test]
    fn unparseable_defaults_to_zero() {
        assert!(parse_amount("").abs() < f64::EPSILON);
        assert!(parse_amount("n/a").abs() < f64::EPSILON);
    }

    #[test]
    fn negative_amounts_survive() {
        assert!((parse_amount("-42.10") - -42.10).abs() < f64::EPSILON);
    }
}
