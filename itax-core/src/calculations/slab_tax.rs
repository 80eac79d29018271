//! Slab-wise income tax calculation.
//!
//! Walks a slab schedule from the lowest slab upward, taxing each slice
//! of income at the marginal rate of the slab it falls into, then layers
//! the Section 87A rebate and the health and education cess on top.
//!
//! # Calculation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Clamp negative taxable income to zero |
//! | 2 | Walk the slabs, taxing `min(remaining, slab width)` in each |
//! | 3 | Record a breakdown row for every slab that received income |
//! | 4 | Wipe the basic tax when taxable income is at or below the rebate ceiling |
//! | 5 | Charge 4% cess on whatever tax survives the rebate |
//!
//! The rebate is a hard cliff: one rupee above the ceiling and the full
//! basic tax is due, with no marginal relief.
//!
//! # Example
//!
//! ```
//! use itax_core::calculations::SlabTaxCalculator;
//! use itax_core::models::Regime;
//! use rust_decimal_macros::dec;
//!
//! let calculator = SlabTaxCalculator::for_regime(Regime::New);
//! let result = calculator.calculate(dec!(1425000));
//!
//! assert_eq!(result.basic_tax, dec!(93750));
//! assert_eq!(result.cess, dec!(3750));
//! assert_eq!(result.total_tax, dec!(97500));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::non_negative;
use crate::models::{Regime, SlabRule};

/// Taxable income at or below this amount pays no tax at all.
pub const REBATE_INCOME_CEILING: Decimal = dec!(1275000);

/// Health and education cess, charged on the tax left after the rebate.
pub const CESS_RATE: Decimal = dec!(0.04);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlabScheduleError {
    #[error("slab schedule is empty")]
    Empty,
    #[error("slab {0} does not increase the upper bound")]
    UnorderedBounds(usize),
    #[error("open-ended slab {0} must be last in the schedule")]
    EarlyOpenEnded(usize),
    #[error("last slab must be open ended")]
    MissingOpenEnded,
    #[error("slab rate {0} is outside [0, 1)")]
    RateOutOfRange(Decimal),
}

/// One row of the per-slab tax breakdown.
///
/// `range_high` is `None` for the open-ended top slab. `rate_percent`
/// carries the slab rate scaled to percent, so a `0.05` rate is stored
/// as `5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdownEntry {
    pub range_low: Decimal,
    pub range_high: Option<Decimal>,
    pub income_in_slab: Decimal,
    pub rate_percent: Decimal,
    pub tax_in_slab: Decimal,
}

/// Complete result of a slab tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// The income the tax was computed on, after clamping at zero.
    pub taxable_income: Decimal,
    /// Slab-wise tax before rebate and cess.
    pub basic_tax: Decimal,
    /// Amount forgiven by the rebate, zero above the ceiling.
    pub rebate: Decimal,
    pub tax_after_rebate: Decimal,
    pub cess: Decimal,
    pub total_tax: Decimal,
    pub breakdown: Vec<TaxBreakdownEntry>,
}

/// Calculates slab-wise tax, rebate, and cess over a slab schedule.
#[derive(Debug, Clone)]
pub struct SlabTaxCalculator<'a> {
    rules: &'a [SlabRule],
}

impl<'a> SlabTaxCalculator<'a> {
    /// Creates a calculator over a caller-supplied slab schedule.
    ///
    /// # Errors
    ///
    /// Returns a [`SlabScheduleError`] unless the schedule has strictly
    /// increasing upper bounds, exactly one open-ended slab in the last
    /// position, and every rate within `[0, 1)`.
    pub fn new(rules: &'a [SlabRule]) -> Result<Self, SlabScheduleError> {
        Self::validate(rules)?;
        Ok(Self { rules })
    }

    /// Creates a calculator over the built-in schedule for `regime`.
    ///
    /// The built-in FY 2025-26 schedules are known to be well formed, so
    /// this constructor cannot fail.
    pub fn for_regime(regime: Regime) -> Self {
        Self {
            rules: regime.slab_rules(),
        }
    }

    /// Computes tax on `taxable_income`.
    ///
    /// Negative income is clamped to zero with a warning rather than
    /// rejected, so the calculation is total over all inputs.
    ///
    /// # Arguments
    ///
    /// * `taxable_income` - Income after all deductions, in rupees
    ///
    /// # Returns
    ///
    /// A [`TaxResult`] with the basic tax, rebate, cess, total, and a
    /// breakdown row for every slab that received income.
    pub fn calculate(&self, taxable_income: Decimal) -> TaxResult {
        let taxable_income = if taxable_income < Decimal::ZERO {
            warn!(
                taxable_income = %taxable_income,
                "negative taxable income clamped to zero"
            );
            Decimal::ZERO
        } else {
            taxable_income
        };

        let (basic_tax, breakdown) = self.slab_breakdown(taxable_income);
        let tax_after_rebate = self.tax_after_rebate(taxable_income, basic_tax);
        let rebate = basic_tax - tax_after_rebate;
        let cess = self.cess(tax_after_rebate);
        let total_tax = tax_after_rebate + cess;

        TaxResult {
            taxable_income,
            basic_tax,
            rebate,
            tax_after_rebate,
            cess,
            total_tax,
            breakdown,
        }
    }

    fn validate(rules: &[SlabRule]) -> Result<(), SlabScheduleError> {
        if rules.is_empty() {
            return Err(SlabScheduleError::Empty);
        }

        let mut previous_limit = Decimal::ZERO;
        let last = rules.len() - 1;
        for (index, rule) in rules.iter().enumerate() {
            if rule.rate < Decimal::ZERO || rule.rate >= Decimal::ONE {
                return Err(SlabScheduleError::RateOutOfRange(rule.rate));
            }
            match rule.upper_bound {
                Some(bound) => {
                    if index == last {
                        return Err(SlabScheduleError::MissingOpenEnded);
                    }
                    if bound <= previous_limit {
                        return Err(SlabScheduleError::UnorderedBounds(index));
                    }
                    previous_limit = bound;
                }
                None => {
                    if index != last {
                        return Err(SlabScheduleError::EarlyOpenEnded(index));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walks the schedule and returns the basic tax plus one breakdown
    /// row per slab that received income.
    fn slab_breakdown(
        &self,
        taxable_income: Decimal,
    ) -> (Decimal, Vec<TaxBreakdownEntry>) {
        let mut remaining = taxable_income;
        let mut previous_limit = Decimal::ZERO;
        let mut basic_tax = Decimal::ZERO;
        let mut breakdown = Vec::new();

        for rule in self.rules {
            let income_in_slab = match rule.upper_bound {
                Some(bound) => non_negative(remaining).min(bound - previous_limit),
                None => non_negative(remaining),
            };
            let tax_in_slab = income_in_slab * rule.rate;

            if income_in_slab > Decimal::ZERO {
                breakdown.push(TaxBreakdownEntry {
                    range_low: previous_limit,
                    range_high: rule.upper_bound,
                    income_in_slab,
                    rate_percent: rule.rate * dec!(100),
                    tax_in_slab,
                });
            }

            basic_tax += tax_in_slab;
            remaining -= income_in_slab;
            if let Some(bound) = rule.upper_bound {
                previous_limit = bound;
            }
            if remaining <= Decimal::ZERO {
                break;
            }
        }

        (basic_tax, breakdown)
    }

    fn tax_after_rebate(
        &self,
        taxable_income: Decimal,
        basic_tax: Decimal,
    ) -> Decimal {
        if taxable_income <= REBATE_INCOME_CEILING {
            Decimal::ZERO
        } else {
            basic_tax
        }
    }

    fn cess(&self, tax_after_rebate: Decimal) -> Decimal {
        tax_after_rebate * CESS_RATE
    }
}

// ============================================================================
// Tests
// ============================================================================
