//! Core calculation engine for the FY 2025-26 Indian income tax
//! estimator.
//!
//! Everything here is pure: the built-in slab schedules are static data,
//! and the calculators take plain value types and return plain value
//! types. Frontends (CLI, web, tests) own all formatting and rounding.

pub mod calculations;
pub mod models;

pub use calculations::{
    ComparisonResult, IncomeAggregator, SlabScheduleError, SlabTaxCalculator,
    TaxBreakdownEntry, TaxResult, compare,
};
pub use models::*;
