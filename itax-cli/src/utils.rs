//! Input parsing helpers.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Error returned when a string cannot be parsed as a rupee amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}'")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a rupee amount the way a person types one.
///
/// Accepts a leading `₹`, comma grouping in either the Indian or the
/// western style, and surrounding whitespace. An empty string parses as
/// zero, matching a form field left blank.
///
/// # Examples
///
/// ```
/// use itax_cli::utils::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("₹12,50,000").unwrap(), dec!(1250000));
/// assert_eq!(parse_amount("").unwrap(), dec!(0));
/// assert!(parse_amount("twelve lakh").is_err());
/// ```
pub fn parse_amount(value: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount(value);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    normalized.parse().map_err(|source| {
        warn!(input = %value, "failed to parse amount");
        ParseAmountError {
            input: value.to_string(),
            source,
        }
    })
}

fn normalize_amount(value: &str) -> String {
    let trimmed = value.trim();
    let without_symbol = trimmed.strip_prefix('₹').unwrap_or(trimmed);
    without_symbol.replace(',', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_amounts() {
        assert_eq!(parse_amount("1500000").unwrap(), dec!(1500000));
        assert_eq!(parse_amount("2400.50").unwrap(), dec!(2400.50));
    }

    #[test]
    fn parses_indian_grouping_and_rupee_symbol() {
        assert_eq!(parse_amount("12,50,000").unwrap(), dec!(1250000));
        assert_eq!(parse_amount("₹1,00,000").unwrap(), dec!(100000));
        assert_eq!(parse_amount("₹ 75,000").unwrap(), dec!(75000));
    }

    #[test]
    fn parses_western_grouping() {
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_amount("  42000  ").unwrap(), dec!(42000));
    }

    #[test]
    fn empty_input_parses_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let error = parse_amount("12 lakh").unwrap_err();
        assert_eq!(error.to_string(), "invalid amount '12 lakh'");
    }
}
