use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chapter VI-A deduction amounts entered by the user.
///
/// Values are stored exactly as entered. Per-section and aggregate caps
/// are applied by
/// [`IncomeAggregator`](crate::calculations::IncomeAggregator), and only
/// under the old regime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionDetails {
    /// Section 80C investments (EPF, PPF, ELSS, life insurance).
    pub section_80c: Decimal,
    /// Section 80D health insurance premiums.
    pub section_80d: Decimal,
    /// Section 80G charitable donations.
    pub section_80g: Decimal,
    /// Section 80EEA interest on affordable-housing loans.
    pub section_80eea: Decimal,
    pub other_deductions: Decimal,
}
