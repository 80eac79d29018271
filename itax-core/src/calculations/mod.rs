//! Tax calculations for the FY 2025-26 regime comparison.
//!
//! [`IncomeAggregator`] turns entered income and deductions into taxable
//! income, [`SlabTaxCalculator`] turns taxable income into tax, and
//! [`compare`] runs both regimes side by side.

pub mod common;
pub mod comparison;
pub mod slab_tax;
pub mod taxable_income;

pub use comparison::{ComparisonResult, compare};
pub use slab_tax::{
    SlabScheduleError, SlabTaxCalculator, TaxBreakdownEntry, TaxResult,
};
pub use taxable_income::IncomeAggregator;
