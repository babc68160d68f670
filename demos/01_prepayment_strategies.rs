/// prepayment strategies - compare lump-sum and step-up against the contract
use loan_simulation_rs::{simulate_prepayment, Money, SimulationConfig};
use rust_decimal_macros::dec;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let principal = Money::from_major(1_000_000);
    let scenarios = [
        ("contract only", SimulationConfig::baseline()),
        ("yearly lump sum", SimulationConfig::with_lump_sum()),
        ("yearly step-up", SimulationConfig::with_step_up()),
        ("both strategies", SimulationConfig::aggressive()),
    ];

    for (label, config) in &scenarios {
        let summary = simulate_prepayment(principal, dec!(8.5), 20, config)?;
        println!(
            "{:<16} interest {:>9}  saved {:>8}  months {:>3}  last emi {:>6}",
            label,
            summary.optimized_total_interest.to_string(),
            summary.interest_saved.to_string(),
            summary.optimized_months,
            summary.last_year_emi.to_string()
        );
    }

    Ok(())
}
