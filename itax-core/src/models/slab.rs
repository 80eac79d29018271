use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A single slab in a progressive tax schedule.
///
/// `upper_bound` is the cumulative income ceiling of the slab; `None`
/// marks the open-ended top slab. The slab's lower edge is the previous
/// slab's `upper_bound` (zero for the first slab). `rate` is a fraction,
/// so 5% is `0.05`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabRule {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// New-regime slab schedule for FY 2025-26.
pub static NEW_REGIME_SLABS: [SlabRule; 7] = [
    SlabRule {
        upper_bound: Some(dec!(400000)),
        rate: Decimal::ZERO,
    },
    SlabRule {
        upper_bound: Some(dec!(800000)),
        rate: dec!(0.05),
    },
    SlabRule {
        upper_bound: Some(dec!(1200000)),
        rate: dec!(0.10),
    },
    SlabRule {
        upper_bound: Some(dec!(1600000)),
        rate: dec!(0.15),
    },
    SlabRule {
        upper_bound: Some(dec!(2000000)),
        rate: dec!(0.20),
    },
    SlabRule {
        upper_bound: Some(dec!(2400000)),
        rate: dec!(0.25),
    },
    SlabRule {
        upper_bound: None,
        rate: dec!(0.30),
    },
];

/// Old-regime slab schedule for FY 2025-26.
pub static OLD_REGIME_SLABS: [SlabRule; 6] = [
    SlabRule {
        upper_bound: Some(dec!(300000)),
        rate: Decimal::ZERO,
    },
    SlabRule {
        upper_bound: Some(dec!(600000)),
        rate: dec!(0.05),
    },
    SlabRule {
        upper_bound: Some(dec!(900000)),
        rate: dec!(0.10),
    },
    SlabRule {
        upper_bound: Some(dec!(1200000)),
        rate: dec!(0.15),
    },
    SlabRule {
        upper_bound: Some(dec!(1500000)),
        rate: dec!(0.20),
    },
    SlabRule {
        upper_bound: None,
        rate: dec!(0.30),
    },
];

// ============================================================================
// Tests
// ============================================================================
