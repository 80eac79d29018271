//! Interactive four-step entry flow.
//!
//! Walks the user through the same steps as the web form: basic details,
//! income, deductions, then the computed summary. Input and output are
//! generic over [`BufRead`] and [`Write`] so the whole flow can be
//! driven from a byte buffer in tests.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use itax_core::calculations::compare;
use itax_core::calculations::taxable_income::{
    SECTION_80C_CAP, SECTION_80D_CAP, SECTION_80EEA_CAP,
};
use itax_core::models::{DeductionDetails, IncomeDetails, Regime};

use crate::format::format_inr;
use crate::render;
use crate::utils::parse_amount;

/// Number of steps in the flow, including the summary.
pub const STEP_COUNT: usize = 4;

/// The four steps of the entry flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    BasicDetails,
    IncomeDetails,
    Deductions,
    Summary,
}

impl FormStep {
    pub fn title(&self) -> &'static str {
        match self {
            FormStep::BasicDetails => "Basic Details",
            FormStep::IncomeDetails => "Income Details",
            FormStep::Deductions => "Deductions",
            FormStep::Summary => "Tax Summary",
        }
    }

    /// One-based position, for "Step 2 of 4" banners.
    pub fn position(&self) -> usize {
        match self {
            FormStep::BasicDetails => 1,
            FormStep::IncomeDetails => 2,
            FormStep::Deductions => 3,
            FormStep::Summary => 4,
        }
    }

    /// The following step; the summary is terminal.
    pub fn next(&self) -> FormStep {
        match self {
            FormStep::BasicDetails => FormStep::IncomeDetails,
            FormStep::IncomeDetails => FormStep::Deductions,
            FormStep::Deductions => FormStep::Summary,
            FormStep::Summary => FormStep::Summary,
        }
    }

    /// The preceding step; the first step stays put.
    pub fn back(&self) -> FormStep {
        match self {
            FormStep::BasicDetails => FormStep::BasicDetails,
            FormStep::IncomeDetails => FormStep::BasicDetails,
            FormStep::Deductions => FormStep::IncomeDetails,
            FormStep::Summary => FormStep::Deductions,
        }
    }
}

/// Everything collected across the steps.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    /// Asked on the first step; informational only.
    pub age: Option<u32>,
    pub regime: Regime,
    pub income: IncomeDetails,
    pub deductions: DeductionDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavCommand {
    Next,
    Back,
    Quit,
}

/// Runs the flow to completion over the given input and output.
///
/// Blank answers fall back to zero (or the default regime), and end of
/// input is treated as accepting the defaults for everything that
/// remains, so a partially scripted run still reaches the summary.
pub fn run<R, W>(mut input: R, mut output: W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut state = WizardState::default();
    let mut step = FormStep::BasicDetails;

    loop {
        writeln!(output)?;
        writeln!(
            output,
            "Step {} of {}: {}",
            step.position(),
            STEP_COUNT,
            step.title()
        )?;

        match step {
            FormStep::BasicDetails => {
                state.age = prompt_age(&mut input, &mut output)?;
                state.regime = prompt_regime(&mut input, &mut output, state.regime)?;
            }
            FormStep::IncomeDetails => {
                writeln!(output, "  (amounts in rupees, Enter for 0)")?;
                state.income.salary = prompt_amount(&mut input, &mut output, "Salary")?;
                state.income.hra = prompt_amount(&mut input, &mut output, "HRA")?;
                state.income.lta = prompt_amount(&mut input, &mut output, "LTA")?;
                state.income.interest_income =
                    prompt_amount(&mut input, &mut output, "Interest income")?;
                state.income.rental_income =
                    prompt_amount(&mut input, &mut output, "Rental income")?;
                state.income.professional_tax =
                    prompt_amount(&mut input, &mut output, "Professional tax")?;
            }
            FormStep::Deductions => {
                if state.regime == Regime::New {
                    writeln!(
                        output,
                        "  (applied under the old regime only, still used for the comparison)"
                    )?;
                }
                state.deductions.section_80c = prompt_amount(
                    &mut input,
                    &mut output,
                    &format!("80C investments (max {})", format_inr(SECTION_80C_CAP)),
                )?;
                state.deductions.section_80d = prompt_amount(
                    &mut input,
                    &mut output,
                    &format!("80D premiums (max {})", format_inr(SECTION_80D_CAP)),
                )?;
                state.deductions.section_80g =
                    prompt_amount(&mut input, &mut output, "80G donations")?;
                state.deductions.section_80eea = prompt_amount(
                    &mut input,
                    &mut output,
                    &format!("80EEA interest (max {})", format_inr(SECTION_80EEA_CAP)),
                )?;
                state.deductions.other_deductions =
                    prompt_amount(&mut input, &mut output, "Other deductions")?;
            }
            FormStep::Summary => {
                writeln!(output)?;
                let comparison = compare(&state.income, &state.deductions);
                render::print_comparison(
                    &mut output,
                    state.regime,
                    &state.income,
                    &state.deductions,
                    &comparison,
                )?;
                return Ok(());
            }
        }

        match prompt_nav(&mut input, &mut output)? {
            NavCommand::Next => step = step.next(),
            NavCommand::Back => step = step.back(),
            NavCommand::Quit => {
                writeln!(output, "Aborted.")?;
                return Ok(());
            }
        }
    }
}

fn prompt_amount<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> std::io::Result<Decimal>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "  {label}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Decimal::ZERO);
        }
        match parse_amount(line.trim()) {
            Ok(amount) => return Ok(amount),
            Err(error) => writeln!(output, "  {error}, try again")?,
        }
    }
}

fn prompt_age<R, W>(input: &mut R, output: &mut W) -> std::io::Result<Option<u32>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "  Age (optional): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse() {
            Ok(age) => return Ok(Some(age)),
            Err(_) => writeln!(output, "  enter a whole number, try again")?,
        }
    }
}

fn prompt_regime<R, W>(
    input: &mut R,
    output: &mut W,
    current: Regime,
) -> std::io::Result<Regime>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "  Regime to display [new/old], Enter for {current}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(current);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(current);
        }
        match Regime::parse(&answer.to_ascii_lowercase()) {
            Some(regime) => return Ok(regime),
            None => writeln!(output, "  enter 'new' or 'old', try again")?,
        }
    }
}

fn prompt_nav<R, W>(input: &mut R, output: &mut W) -> std::io::Result<NavCommand>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "[Enter] continue, [b] back, [q] quit: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(NavCommand::Next);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" => return Ok(NavCommand::Next),
            "b" | "back" => return Ok(NavCommand::Back),
            "q" | "quit" => return Ok(NavCommand::Quit),
            _ => writeln!(output, "  enter b, q, or press Enter")?,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
