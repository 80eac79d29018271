//! Text and JSON rendering of comparison results.
//!
//! Everything writes to a caller-supplied writer so the output can be
//! asserted on in tests.

use std::io::{self, Write};

use rust_decimal::Decimal;
use serde::Serialize;

use itax_core::calculations::{ComparisonResult, IncomeAggregator, TaxResult};
use itax_core::models::{DeductionDetails, IncomeDetails, Regime};

use crate::format::{format_inr, format_percent};

/// Financial year the built-in slab schedules describe.
pub const FINANCIAL_YEAR: &str = "2025-26";

/// Assessment year matching [`FINANCIAL_YEAR`].
pub const ASSESSMENT_YEAR: &str = "2026-27";

/// Machine-readable envelope for `--json` output.
#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub financial_year: &'static str,
    pub assessment_year: &'static str,
    pub selected_regime: Regime,
    pub gross_income: Decimal,
    pub chapter_via_deductions: Decimal,
    pub comparison: &'a ComparisonResult,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(
        selected: Regime,
        income: &IncomeDetails,
        deductions: &DeductionDetails,
        comparison: &'a ComparisonResult,
    ) -> Self {
        let aggregator = IncomeAggregator::new(Regime::Old);
        Self {
            financial_year: FINANCIAL_YEAR,
            assessment_year: ASSESSMENT_YEAR,
            selected_regime: selected,
            gross_income: aggregator.gross_income(income),
            chapter_via_deductions: aggregator.capped_deductions(deductions),
            comparison,
        }
    }
}

/// Prints the full text report: income summary, the selected regime's
/// slab breakdown, and the regime comparison.
pub fn print_comparison<W: Write>(
    out: &mut W,
    selected: Regime,
    income: &IncomeDetails,
    deductions: &DeductionDetails,
    comparison: &ComparisonResult,
) -> io::Result<()> {
    let aggregator = IncomeAggregator::new(Regime::Old);

    writeln!(
        out,
        "TAX SUMMARY - FY {FINANCIAL_YEAR} (AY {ASSESSMENT_YEAR})"
    )?;
    writeln!(out)?;

    writeln!(out, "INCOME")?;
    writeln!(
        out,
        "  {:<20}{}",
        "Gross income:",
        format_inr(aggregator.gross_income(income))
    )?;
    writeln!(
        out,
        "  {:<20}{}",
        "Professional tax:",
        format_inr(income.professional_tax)
    )?;
    writeln!(
        out,
        "  {:<20}{}",
        "Chapter VI-A (old):",
        format_inr(aggregator.capped_deductions(deductions))
    )?;
    writeln!(out)?;

    let detail = match selected {
        Regime::New => &comparison.new_regime,
        Regime::Old => &comparison.old_regime,
    };
    print_regime_detail(out, section_title(selected), detail)?;
    writeln!(out)?;

    writeln!(out, "COMPARISON")?;
    writeln!(
        out,
        "  {:<20}{}",
        "New regime total:",
        format_inr(comparison.new_regime.total_tax)
    )?;
    writeln!(
        out,
        "  {:<20}{}",
        "Old regime total:",
        format_inr(comparison.old_regime.total_tax)
    )?;
    let recommended = regime_label(comparison.recommended_regime);
    if comparison.savings.is_zero() {
        writeln!(
            out,
            "  {:<20}{recommended} (both regimes owe the same)",
            "Recommended:"
        )?;
    } else {
        writeln!(
            out,
            "  {:<20}{recommended} (saves {})",
            "Recommended:",
            format_inr(comparison.savings)
        )?;
    }

    Ok(())
}

/// Prints the built-in slab schedule for one regime.
pub fn print_slabs<W: Write>(out: &mut W, regime: Regime) -> io::Result<()> {
    writeln!(
        out,
        "{} SLABS - FY {FINANCIAL_YEAR}",
        section_title(regime)
    )?;

    let mut previous_limit = Decimal::ZERO;
    for rule in regime.slab_rules() {
        writeln!(
            out,
            "  {:<26}{:>7}",
            range_label(previous_limit, rule.upper_bound),
            format_percent(rule.rate * Decimal::ONE_HUNDRED)
        )?;
        if let Some(bound) = rule.upper_bound {
            previous_limit = bound;
        }
    }

    Ok(())
}

/// Serializes a [`ComparisonReport`] as pretty-printed JSON.
pub fn print_json<W: Write>(
    out: &mut W,
    report: &ComparisonReport<'_>,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn print_regime_detail<W: Write>(
    out: &mut W,
    title: &str,
    result: &TaxResult,
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(
        out,
        "  {:<20}{}",
        "Taxable income:",
        format_inr(result.taxable_income)
    )?;

    writeln!(out, "  Slab breakdown:")?;
    if result.breakdown.is_empty() {
        writeln!(out, "    (no taxable income)")?;
    }
    for entry in &result.breakdown {
        writeln!(
            out,
            "    {:<26} income {:>12}  @ {:>6}  tax {:>12}",
            range_label(entry.range_low, entry.range_high),
            format_inr(entry.income_in_slab),
            format_percent(entry.rate_percent),
            format_inr(entry.tax_in_slab)
        )?;
    }

    writeln!(out, "  {:<20}{}", "Basic tax:", format_inr(result.basic_tax))?;
    writeln!(out, "  {:<20}{}", "Rebate (87A):", format_inr(result.rebate))?;
    writeln!(out, "  {:<20}{}", "Cess (4%):", format_inr(result.cess))?;
    writeln!(out, "  {:<20}{}", "Total tax:", format_inr(result.total_tax))?;

    Ok(())
}

fn section_title(regime: Regime) -> &'static str {
    match regime {
        Regime::New => "NEW REGIME",
        Regime::Old => "OLD REGIME",
    }
}

fn regime_label(regime: Regime) -> &'static str {
    match regime {
        Regime::New => "New regime",
        Regime::Old => "Old regime",
    }
}

fn range_label(low: Decimal, high: Option<Decimal>) -> String {
    match high {
        Some(high) if low.is_zero() => format!("up to {}", format_inr(high)),
        Some(high) => format!("{} - {}", format_inr(low), format_inr(high)),
        None => format!("above {}", format_inr(low)),
    }
}
