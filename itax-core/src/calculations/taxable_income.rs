//! Taxable income aggregation.
//!
//! Collects the income components into a gross figure, then applies the
//! regime's standard deduction, professional tax, and (under the old
//! regime only) the capped Chapter VI-A deductions.
//!
//! # Calculation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Gross income = salary + HRA + LTA + interest + rental income |
//! | 2 | Subtract the regime's standard deduction |
//! | 3 | Subtract professional tax |
//! | 4 | Old regime only: subtract the capped Chapter VI-A total |
//! | 5 | Clamp the result at zero |
//!
//! Sections 80C, 80D, and 80EEA are capped individually; 80G and other
//! deductions are not. The combined total is then capped again at
//! [`AGGREGATE_DEDUCTION_CAP`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::calculations::common::non_negative;
use crate::models::{DeductionDetails, IncomeDetails, Regime};

/// Per-section cap on 80C investments.
pub const SECTION_80C_CAP: Decimal = dec!(150000);

/// Per-section cap on 80D health insurance premiums.
pub const SECTION_80D_CAP: Decimal = dec!(100000);

/// Per-section cap on 80EEA housing-loan interest.
pub const SECTION_80EEA_CAP: Decimal = dec!(150000);

/// Ceiling on the combined Chapter VI-A deduction total.
pub const AGGREGATE_DEDUCTION_CAP: Decimal = dec!(350000);

/// Derives taxable income from the entered income and deductions.
#[derive(Debug, Clone)]
pub struct IncomeAggregator {
    regime: Regime,
}

impl IncomeAggregator {
    pub fn new(regime: Regime) -> Self {
        Self { regime }
    }

    /// Computes taxable income for this aggregator's regime.
    ///
    /// Chapter VI-A deductions only reduce taxable income under the old
    /// regime; under the new regime they are ignored even when supplied.
    /// The result never goes below zero.
    ///
    /// # Arguments
    ///
    /// * `income` - Annual income components
    /// * `deductions` - Chapter VI-A amounts, if the user entered any
    pub fn taxable_income(
        &self,
        income: &IncomeDetails,
        deductions: Option<&DeductionDetails>,
    ) -> Decimal {
        let gross = self.gross_income(income);
        let professional_tax = clamped("professional_tax", income.professional_tax);
        let chapter_via = match (self.regime, deductions) {
            (Regime::Old, Some(deductions)) => self.capped_deductions(deductions),
            _ => Decimal::ZERO,
        };

        non_negative(
            gross - self.regime.standard_deduction() - professional_tax - chapter_via,
        )
    }

    /// Sums the income components into gross income.
    ///
    /// Professional tax is a deduction, not income, and home-loan
    /// interest is accepted from the form but never aggregated, so
    /// neither appears here.
    pub fn gross_income(&self, income: &IncomeDetails) -> Decimal {
        clamped("salary", income.salary)
            + clamped("hra", income.hra)
            + clamped("lta", income.lta)
            + clamped("interest_income", income.interest_income)
            + clamped("rental_income", income.rental_income)
    }

    /// Applies the per-section and aggregate caps to the Chapter VI-A
    /// deductions and returns the claimable total.
    pub fn capped_deductions(&self, deductions: &DeductionDetails) -> Decimal {
        let section_80c =
            clamped("section_80c", deductions.section_80c).min(SECTION_80C_CAP);
        let section_80d =
            clamped("section_80d", deductions.section_80d).min(SECTION_80D_CAP);
        let section_80eea =
            clamped("section_80eea", deductions.section_80eea).min(SECTION_80EEA_CAP);
        let section_80g = clamped("section_80g", deductions.section_80g);
        let other = clamped("other_deductions", deductions.other_deductions);

        let total = section_80c + section_80d + section_80eea + section_80g + other;
        total.min(AGGREGATE_DEDUCTION_CAP)
    }
}

fn clamped(field: &str, amount: Decimal) -> Decimal {
    if amount < Decimal::ZERO {
        warn!(field, amount = %amount, "negative amount treated as zero");
        return Decimal::ZERO;
    }
    amount
}

// ============================================================================
// Tests
// ============================================================================
