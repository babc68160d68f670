pub mod config;
pub mod decimal;
pub mod eligibility;
pub mod emi;
pub mod errors;
pub mod rewards;
pub mod simulation;
pub mod types;

// re-export key types
pub use config::{SimulationConfig, DEFAULT_STEP_UP_RATE};
pub use decimal::{Money, Rate};
pub use eligibility::{
    evaluate_eligibility, REFERENCE_ANNUAL_RATE_PERCENT, REFERENCE_TENURE_MONTHS,
};
pub use emi::{compute_emi, emi_breakdown, EmiBreakdown};
pub use errors::{Result, SimulationError};
pub use rewards::compare_rewards;
pub use simulation::{
    payoff_schedule, run_payoff, simulate_payoff, simulate_prepayment, MonthlyPosition, PayoffRun,
    PrepaymentSummary, SimulationResult,
};
pub use types::{
    EligibilityInput, EligibilityResult, LoanTerms, Occupation, RewardProfile, RewardResult,
    SpendProfile,
};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
