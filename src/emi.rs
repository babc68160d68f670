use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{powi, round_working, Money, Rate};
use crate::errors::Result;
use crate::types::LoanTerms;

/// equated monthly installment with its lifetime totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub monthly_emi: Money,
    pub total_interest: Money,
    pub total_payment: Money,
}

/// EMI = P * r * (1+r)^n / ((1+r)^n - 1), rounded to the whole unit
pub fn compute_emi(principal: Money, annual_rate_percent: Decimal, tenure_months: u32) -> Result<Money> {
    LoanTerms::new(principal, annual_rate_percent, tenure_months).validate()?;
    let rate = Rate::monthly_from_annual_percent(annual_rate_percent)?;
    let emi = installment_amount(principal, rate, tenure_months)?;
    debug!(
        "emi for {} at {}% over {} months: {}",
        principal, annual_rate_percent, tenure_months, emi
    );
    Ok(emi.round_unit())
}

/// emi together with total interest and total payment over the full tenure
pub fn emi_breakdown(principal: Money, annual_rate_percent: Decimal, tenure_months: u32) -> Result<EmiBreakdown> {
    LoanTerms::new(principal, annual_rate_percent, tenure_months).validate()?;
    let rate = Rate::monthly_from_annual_percent(annual_rate_percent)?;
    let emi = installment_amount(principal, rate, tenure_months)?;
    let total_payment = emi * Decimal::from(tenure_months);
    let total_interest = total_payment - principal;
    Ok(EmiBreakdown {
        monthly_emi: emi.round_unit(),
        total_interest: total_interest.round_unit(),
        total_payment: total_payment.round_unit(),
    })
}

/// full-precision installment; zero tenure yields zero, zero rate falls back to straight-line
pub(crate) fn installment_amount(principal: Money, monthly_rate: Rate, months: u32) -> Result<Money> {
    if months == 0 {
        return Ok(Money::ZERO);
    }
    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(months));
    }
    let compound = powi(Decimal::ONE + monthly_rate.as_decimal(), months)?;
    if compound <= Decimal::ONE {
        // rate too small to register at the working precision behaves as zero
        return Ok(principal / Decimal::from(months));
    }
    let numerator = principal * monthly_rate.as_decimal() * compound;
    let denominator = round_working(compound - Decimal::ONE);
    Ok(numerator / denominator)
}
