//! Display formatting for amounts and rates.
//!
//! All rounding for display happens here; the calculation core hands us
//! full-precision values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// The amount is rounded half away from zero to the nearest rupee, then
/// grouped in the lakh/crore style: the last three digits form a group,
/// every group above that has two digits.
///
/// # Examples
///
/// ```
/// use itax_cli::format::format_inr;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_inr(dec!(1425000)), "₹14,25,000");
/// assert_eq!(format_inr(dec!(97500.4)), "₹97,500");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let grouped = group_indian(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Formats a percentage value (already scaled to percent) with one
/// decimal place, so `5` becomes `5.0%`.
pub fn format_percent(rate_percent: Decimal) -> String {
    let rounded =
        rate_percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, group) = head.split_at(head.len() - 2);
        groups.push(group);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_small_amounts_without_separators() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(999)), "₹999");
    }

    #[test]
    fn groups_thousands_and_lakhs() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
        assert_eq!(format_inr(dec!(75000)), "₹75,000");
        assert_eq!(format_inr(dec!(100000)), "₹1,00,000");
        assert_eq!(format_inr(dec!(1275000)), "₹12,75,000");
    }

    #[test]
    fn groups_crores() {
        assert_eq!(format_inr(dec!(12345678)), "₹1,23,45,678");
        assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789");
    }

    #[test]
    fn rounds_to_whole_rupees_half_away_from_zero() {
        assert_eq!(format_inr(dec!(74100.156)), "₹74,100");
        assert_eq!(format_inr(dec!(74100.5)), "₹74,101");
        assert_eq!(format_inr(dec!(0.4)), "₹0");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_inr(dec!(-48100)), "-₹48,100");
        assert_eq!(format_inr(dec!(-0.2)), "₹0");
    }

    #[test]
    fn formats_percentages_with_one_decimal() {
        assert_eq!(format_percent(dec!(0)), "0.0%");
        assert_eq!(format_percent(dec!(5)), "5.0%");
        assert_eq!(format_percent(dec!(30)), "30.0%");
        assert_eq!(format_percent(dec!(12.75)), "12.8%");
    }
}
