use log::{debug, trace};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::decimal::{Money, Rate};

/// one month of the payoff loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPosition {
    pub month: u32,
    pub opening_balance: Money,
    pub installment: Money,
    pub payment: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub closing_balance: Money,
}

/// raw outcome of one payoff run
#[derive(Debug, Clone)]
pub struct PayoffRun {
    pub months: Vec<MonthlyPosition>,
    pub total_interest: Money,
    pub months_taken: u32,
    pub final_installment: Money,
}

/// reduce the balance month by month under the configured strategies
///
/// the loop is capped at `max_months` so adversarial input cannot spin forever
pub fn run_payoff(
    principal: Money,
    monthly_rate: Rate,
    initial_installment: Money,
    max_months: u32,
    config: &SimulationConfig,
) -> PayoffRun {
    let step_up_factor = Decimal::ONE + config.step_up_rate;
    let mut balance = principal;
    let mut current = initial_installment;
    let mut total_interest = Money::ZERO;
    let mut month = 0;
    let mut months = Vec::new();

    while balance > Money::ZERO && month < max_months {
        month += 1;
        let opening = balance;
        let interest = balance * monthly_rate.as_decimal();
        total_interest += interest;

        let mut payment = current;
        if config.lump_sum_enabled && month % 12 == 0 {
            payment += current;
        }

        let due = balance + interest;
        if payment >= due {
            payment = due;
            balance = Money::ZERO;
        } else {
            balance -= payment - interest;
        }
        let principal_portion = payment - interest;

        trace!(
            "month {}: opening {} interest {} payment {} closing {}",
            month,
            opening,
            interest,
            payment,
            balance
        );
        months.push(MonthlyPosition {
            month,
            opening_balance: opening,
            installment: current,
            payment,
            interest_portion: interest,
            principal_portion,
            closing_balance: balance,
        });

        if config.step_up_enabled && month % 12 == 0 && balance > Money::ZERO {
            current = current * step_up_factor;
        }
    }

    debug!("payoff settled after {} months, interest {}", month, total_interest);
    PayoffRun {
        months,
        total_interest,
        months_taken: month,
        final_installment: current,
    }
}
