use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::slab::{NEW_REGIME_SLABS, OLD_REGIME_SLABS, SlabRule};

/// The two tax regimes an Indian taxpayer can file under in FY 2025-26.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    #[default]
    New,
    Old,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::New => "new",
            Regime::Old => "old",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Regime::New),
            "old" => Some(Regime::Old),
            _ => None,
        }
    }

    /// Standard deduction on salary income under this regime.
    pub fn standard_deduction(&self) -> Decimal {
        match self {
            Regime::New => dec!(75000),
            Regime::Old => dec!(50000),
        }
    }

    /// Built-in FY 2025-26 slab schedule for this regime.
    pub fn slab_rules(&self) -> &'static [SlabRule] {
        match self {
            Regime::New => &NEW_REGIME_SLABS,
            Regime::Old => &OLD_REGIME_SLABS,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn as_str_and_parse_round_trip() {
        for regime in [Regime::New, Regime::Old] {
            assert_eq!(Regime::parse(regime.as_str()), Some(regime));
        }
        assert_eq!(Regime::parse("flat"), None);
        assert_eq!(Regime::parse("NEW"), None);
    }

    #[test]
    fn standard_deduction_differs_by_regime() {
        assert_eq!(Regime::New.standard_deduction(), dec!(75000));
        assert_eq!(Regime::Old.standard_deduction(), dec!(50000));
    }

    #[test]
    fn slab_rules_select_the_matching_schedule() {
        assert_eq!(Regime::New.slab_rules().len(), 7);
        assert_eq!(Regime::Old.slab_rules().len(), 6);
    }

    #[test]
    fn default_regime_is_new() {
        assert_eq!(Regime::default(), Regime::New);
    }
}
