//! Command-line frontend for the FY 2025-26 income tax estimator.

pub mod cli;
pub mod format;
pub mod render;
pub mod utils;
pub mod wizard;
