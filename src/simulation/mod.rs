use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::decimal::{Money, Rate};
use crate::emi::installment_amount;
use crate::errors::{Result, SimulationError};
use crate::types::LoanTerms;

pub mod engine;

pub use engine::{run_payoff, MonthlyPosition, PayoffRun};

/// outcome of a single payoff run, rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub total_interest_paid: Money,
    pub months_taken: u32,
    pub final_installment: Money,
}

/// contractual schedule compared against the configured strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaymentSummary {
    pub baseline_emi: Money,
    pub baseline_total_interest: Money,
    pub optimized_total_interest: Money,
    pub interest_saved: Money,
    pub original_months: u32,
    pub optimized_months: u32,
    pub months_saved: u32,
    pub yearly_extra_payment: Money,
    pub first_year_emi: Money,
    pub last_year_emi: Money,
}

/// simulate the payoff of `terms` under `config`
pub fn simulate_payoff(terms: &LoanTerms, config: &SimulationConfig) -> Result<SimulationResult> {
    terms.validate()?;
    config.validate()?;
    let rate = Rate::monthly_from_annual_percent(terms.annual_rate_percent)?;
    let emi = installment_amount(terms.principal, rate, terms.tenure_months)?;
    let run = run_payoff(terms.principal, rate, emi, terms.tenure_months, config);
    Ok(SimulationResult {
        total_interest_paid: run.total_interest.round_unit(),
        months_taken: run.months_taken,
        final_installment: run.final_installment.round_unit(),
    })
}

/// month-by-month positions for the run, at full working precision
pub fn payoff_schedule(terms: &LoanTerms, config: &SimulationConfig) -> Result<Vec<MonthlyPosition>> {
    terms.validate()?;
    config.validate()?;
    let rate = Rate::monthly_from_annual_percent(terms.annual_rate_percent)?;
    let emi = installment_amount(terms.principal, rate, terms.tenure_months)?;
    Ok(run_payoff(terms.principal, rate, emi, terms.tenure_months, config).months)
}

/// compare the contractual schedule with the configured strategies over `tenure_years`
///
/// the baseline side is the closed form `emi * months - principal`, not a second
/// simulator run; with both strategies off the two agree within one rounding unit
pub fn simulate_prepayment(
    principal: Money,
    annual_rate_percent: Decimal,
    tenure_years: u32,
    config: &SimulationConfig,
) -> Result<PrepaymentSummary> {
    if tenure_years == 0 {
        return Err(SimulationError::InvalidTenure { months: 0 });
    }
    let tenure_months = tenure_years.saturating_mul(12);
    let terms = LoanTerms::new(principal, annual_rate_percent, tenure_months);
    terms.validate()?;
    config.validate()?;

    let rate = Rate::monthly_from_annual_percent(annual_rate_percent)?;
    let emi = installment_amount(principal, rate, tenure_months)?;
    let baseline_total_interest = emi * Decimal::from(tenure_months) - principal;

    let run = run_payoff(principal, rate, emi, tenure_months, config);
    let saved = baseline_total_interest - run.total_interest;
    debug!(
        "prepayment over {} months: baseline interest {}, optimized {}",
        tenure_months, baseline_total_interest, run.total_interest
    );

    Ok(PrepaymentSummary {
        baseline_emi: emi.round_unit(),
        baseline_total_interest: baseline_total_interest.round_unit(),
        optimized_total_interest: run.total_interest.round_unit(),
        interest_saved: saved.round_unit(),
        original_months: tenure_months,
        optimized_months: run.months_taken,
        months_saved: tenure_months - run.months_taken,
        yearly_extra_payment: if config.lump_sum_enabled {
            emi.round_unit()
        } else {
            Money::ZERO
        },
        first_year_emi: emi.round_unit(),
        last_year_emi: run.final_installment.round_unit(),
    })
}
