use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual income entered by the user, all amounts in rupees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeDetails {
    pub salary: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Leave travel allowance.
    pub lta: Decimal,
    /// Deducted from gross income, never added to it.
    pub professional_tax: Decimal,
    pub interest_income: Decimal,
    pub rental_income: Decimal,
    /// Accepted from the form but not applied by any calculation.
    pub home_loan_interest: Option<Decimal>,
}
