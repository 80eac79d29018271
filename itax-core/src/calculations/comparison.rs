//! Side-by-side regime comparison.
//!
//! Runs the full calculation under both regimes from the same entered
//! income and deductions, then recommends the cheaper regime.
//!
//! # Example
//!
//! ```
//! use itax_core::calculations::compare;
//! use itax_core::models::{DeductionDetails, IncomeDetails, Regime};
//! use rust_decimal_macros::dec;
//!
//! let income = IncomeDetails {
//!     salary: dec!(1500000),
//!     ..Default::default()
//! };
//! let comparison = compare(&income, &DeductionDetails::default());
//!
//! assert_eq!(comparison.recommended_regime, Regime::New);
//! assert_eq!(comparison.savings, dec!(48100));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::slab_tax::{SlabTaxCalculator, TaxResult};
use crate::calculations::taxable_income::IncomeAggregator;
use crate::models::{DeductionDetails, IncomeDetails, Regime};

/// Full results under both regimes plus the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub new_regime: TaxResult,
    pub old_regime: TaxResult,
    pub recommended_regime: Regime,
    /// Absolute difference between the two total tax figures.
    pub savings: Decimal,
}

/// Compares the total tax under both regimes.
///
/// The deductions are passed to both sides; the new-regime aggregation
/// ignores them on its own. The recommendation goes to the regime with
/// the strictly lower total tax, and to the old regime on an exact tie,
/// since it leaves the taxpayer free to claim deductions later.
pub fn compare(
    income: &IncomeDetails,
    deductions: &DeductionDetails,
) -> ComparisonResult {
    let new_regime = regime_result(Regime::New, income, deductions);
    let old_regime = regime_result(Regime::Old, income, deductions);

    let recommended_regime = if new_regime.total_tax < old_regime.total_tax {
        Regime::New
    } else {
        Regime::Old
    };
    let savings = (new_regime.total_tax - old_regime.total_tax).abs();

    ComparisonResult {
        new_regime,
        old_regime,
        recommended_regime,
        savings,
    }
}

fn regime_result(
    regime: Regime,
    income: &IncomeDetails,
    deductions: &DeductionDetails,
) -> TaxResult {
    let aggregator = IncomeAggregator::new(regime);
    let taxable = aggregator.taxable_income(income, Some(deductions));
    SlabTaxCalculator::for_regime(regime).calculate(taxable)
}

// ============================================================================
// Tests
// ============================================================================
