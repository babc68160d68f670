use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::{powi, round_working, Money, Rate};
use crate::errors::Result;
use crate::types::{EligibilityInput, EligibilityResult};

/// reference assumptions for reverse amortization of free capacity
pub const REFERENCE_ANNUAL_RATE_PERCENT: Decimal = dec!(8.5);
pub const REFERENCE_TENURE_MONTHS: u32 = 240;

/// turn free monthly capacity into the loan it can service at the reference terms
///
/// capacity = income * foir - obligations; non-positive capacity is ineligible
pub fn evaluate_eligibility(input: &EligibilityInput) -> Result<EligibilityResult> {
    input.validate()?;

    let capacity = input.monthly_income * input.occupation.foir() - input.existing_obligations;
    if capacity <= Money::ZERO {
        debug!(
            "no free capacity for income {} against obligations {}",
            input.monthly_income, input.existing_obligations
        );
        return Ok(EligibilityResult {
            eligible: false,
            max_loan_amount: Money::ZERO,
            max_monthly_capacity: Money::ZERO,
        });
    }

    let rate = Rate::monthly_from_annual_percent(REFERENCE_ANNUAL_RATE_PERCENT)?;
    let compound = powi(Decimal::ONE + rate.as_decimal(), REFERENCE_TENURE_MONTHS)?;
    // present value of an annuity of one unit: ((1+r)^n - 1) / (r * (1+r)^n)
    let numerator = round_working(compound - Decimal::ONE);
    let denominator = round_working(rate.as_decimal() * compound);
    let annuity_factor = round_working(numerator / denominator);
    let max_loan = (capacity * annuity_factor).round_unit();
    debug!(
        "capacity {} at foir {} supports a loan of {}",
        capacity,
        input.occupation.foir(),
        max_loan
    );

    Ok(EligibilityResult {
        eligible: true,
        max_loan_amount: max_loan,
        max_monthly_capacity: capacity.round_unit(),
    })
}
