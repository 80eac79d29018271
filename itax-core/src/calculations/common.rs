//! Common helper functions shared across tax calculations.

use rust_decimal::Decimal;

/// Clamps a value at zero, returning zero for any negative input.
///
/// Tax amounts and income components are never negative, so negative
/// intermediate results (for example deductions exceeding gross income)
/// are floored here.
///
/// # Arguments
///
/// * `value` - The value to clamp
///
/// # Examples
///
/// ```
/// use itax_core::calculations::common::non_negative;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(non_negative(dec!(1250.75)), dec!(1250.75));
/// assert_eq!(non_negative(dec!(-40000)), dec!(0));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn non_negative_passes_positive_values_through() {
        assert_eq!(non_negative(dec!(123.45)), dec!(123.45));
        assert_eq!(non_negative(dec!(0.01)), dec!(0.01));
    }

    #[test]
    fn non_negative_keeps_zero() {
        assert_eq!(non_negative(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn non_negative_clamps_negative_values() {
        assert_eq!(non_negative(dec!(-1)), Decimal::ZERO);
        assert_eq!(non_negative(dec!(-0.005)), Decimal::ZERO);
        assert_eq!(non_negative(dec!(-987654.32)), Decimal::ZERO);
    }
}
