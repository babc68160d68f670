use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid principal amount: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidRate {
        rate: Decimal,
    },

    #[error("invalid tenure: {months} months")]
    InvalidTenure {
        months: u32,
    },

    #[error("invalid monthly income: {amount}")]
    InvalidIncome {
        amount: Money,
    },

    #[error("invalid monthly obligation: {amount}")]
    InvalidObligation {
        amount: Money,
    },

    #[error("invalid spend amount: {amount}")]
    InvalidSpend {
        amount: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
