mod deduction_details;
mod income_details;
mod regime;
mod slab;

pub use deduction_details::DeductionDetails;
pub use income_details::IncomeDetails;
pub use regime::Regime;
pub use slab::{NEW_REGIME_SLABS, OLD_REGIME_SLABS, SlabRule};
