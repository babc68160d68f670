/// payoff schedule - dump the month-by-month positions as json
use loan_simulation_rs::{payoff_schedule, LoanTerms, Money, SimulationConfig};
use rust_decimal_macros::dec;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    let terms = LoanTerms::new(Money::from_major(200_000), dec!(9), 18);
    let schedule = payoff_schedule(&terms, &SimulationConfig::with_lump_sum())?;

    println!("{}", serde_json::to_string_pretty(&schedule)?);
    println!("paid off in {} months", schedule.len());

    Ok(())
}
