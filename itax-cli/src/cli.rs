//! Command-line interface definition.

use std::io;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing::debug;

use itax_core::calculations::compare;
use itax_core::models::{DeductionDetails, IncomeDetails, Regime};

use crate::render::{self, ComparisonReport};
use crate::utils::parse_amount;
use crate::wizard;

/// Income tax estimator for FY 2025-26, comparing the old and new
/// regimes.
#[derive(Debug, Parser)]
#[command(name = "itax", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare tax under both regimes from amounts given as flags.
    Compare(CompareArgs),
    /// Print the built-in slab schedule for a regime.
    Slabs(SlabsArgs),
    /// Enter income and deductions step by step.
    Wizard,
}

impl Commands {
    pub fn exec(self) -> anyhow::Result<()> {
        match self {
            Commands::Compare(args) => args.exec(),
            Commands::Slabs(args) => args.exec(),
            Commands::Wizard => {
                let stdin = io::stdin();
                wizard::run(stdin.lock(), io::stdout())
            }
        }
    }
}

/// Mirror of [`Regime`] that clap can parse from the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RegimeArg {
    #[default]
    New,
    Old,
}

impl From<RegimeArg> for Regime {
    fn from(value: RegimeArg) -> Self {
        match value {
            RegimeArg::New => Regime::New,
            RegimeArg::Old => Regime::Old,
        }
    }
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Annual salary.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub salary: Decimal,

    /// House rent allowance.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub hra: Decimal,

    /// Leave travel allowance.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub lta: Decimal,

    /// Interest income from savings and deposits.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub interest_income: Decimal,

    /// Net rental income.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub rental_income: Decimal,

    /// Professional tax deducted by the employer.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub professional_tax: Decimal,

    /// Home loan interest. Recorded but not used in the calculation.
    #[arg(long, value_parser = parse_amount)]
    pub home_loan_interest: Option<Decimal>,

    /// Section 80C investments.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub section_80c: Decimal,

    /// Section 80D health insurance premiums.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub section_80d: Decimal,

    /// Section 80G donations.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub section_80g: Decimal,

    /// Section 80EEA housing-loan interest.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub section_80eea: Decimal,

    /// Any other old-regime deductions.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub other_deductions: Decimal,

    /// Regime whose slab breakdown is shown in the text report.
    #[arg(long, value_enum, default_value_t = RegimeArg::New)]
    pub regime: RegimeArg,

    /// Print the full comparison as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl CompareArgs {
    pub fn exec(&self) -> anyhow::Result<()> {
        let selected = Regime::from(self.regime);
        debug!(regime = selected.as_str(), json = self.json, "running comparison");

        let income = self.income_details();
        let deductions = self.deduction_details();
        let comparison = compare(&income, &deductions);

        let mut stdout = io::stdout();
        if self.json {
            let report =
                ComparisonReport::new(selected, &income, &deductions, &comparison);
            render::print_json(&mut stdout, &report)?;
        } else {
            render::print_comparison(
                &mut stdout,
                selected,
                &income,
                &deductions,
                &comparison,
            )?;
        }
        Ok(())
    }

    fn income_details(&self) -> IncomeDetails {
        IncomeDetails {
            salary: self.salary,
            hra: self.hra,
            lta: self.lta,
            professional_tax: self.professional_tax,
            interest_income: self.interest_income,
            rental_income: self.rental_income,
            home_loan_interest: self.home_loan_interest,
        }
    }

    fn deduction_details(&self) -> DeductionDetails {
        DeductionDetails {
            section_80c: self.section_80c,
            section_80d: self.section_80d,
            section_80g: self.section_80g,
            section_80eea: self.section_80eea,
            other_deductions: self.other_deductions,
        }
    }
}

#[derive(Debug, Args)]
pub struct SlabsArgs {
    /// Regime whose schedule is printed.
    #[arg(long, value_enum, default_value_t = RegimeArg::New)]
    pub regime: RegimeArg,
}

impl SlabsArgs {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut stdout = io::stdout();
        render::print_slabs(&mut stdout, Regime::from(self.regime))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn compare_args_accept_formatted_amounts() {
        let cli = Cli::parse_from([
            "itax",
            "compare",
            "--salary",
            "₹15,00,000",
            "--section-80c",
            "1,50,000",
            "--regime",
            "old",
        ]);

        let Commands::Compare(args) = cli.command else {
            panic!("expected the compare subcommand");
        };
        assert_eq!(args.salary, dec!(1500000));
        assert_eq!(args.section_80c, dec!(150000));
        assert!(matches!(args.regime, RegimeArg::Old));
    }

    #[test]
    fn compare_args_default_to_zero() {
        let cli = Cli::parse_from(["itax", "compare"]);

        let Commands::Compare(args) = cli.command else {
            panic!("expected the compare subcommand");
        };
        assert_eq!(args.salary, Decimal::ZERO);
        assert_eq!(args.home_loan_interest, None);
        assert!(!args.json);
    }

    #[test]
    fn income_details_carry_every_flag() {
        let cli = Cli::parse_from([
            "itax",
            "compare",
            "--salary",
            "1200000",
            "--hra",
            "150000",
            "--lta",
            "60000",
            "--interest-income",
            "30000",
            "--rental-income",
            "180000",
            "--professional-tax",
            "2400",
            "--home-loan-interest",
            "350000",
        ]);

        let Commands::Compare(args) = cli.command else {
            panic!("expected the compare subcommand");
        };
        let income = args.income_details();
        assert_eq!(income.salary, dec!(1200000));
        assert_eq!(income.hra, dec!(150000));
        assert_eq!(income.lta, dec!(60000));
        assert_eq!(income.interest_income, dec!(30000));
        assert_eq!(income.rental_income, dec!(180000));
        assert_eq!(income.professional_tax, dec!(2400));
        assert_eq!(income.home_loan_interest, Some(dec!(350000)));
    }
}
