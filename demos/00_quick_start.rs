/// quick start - compute an emi and its lifetime cost
use loan_simulation_rs::{compute_emi, emi_breakdown, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10 lakh over 20 years at 8.5%
    let principal = Money::from_major(1_000_000);
    let emi = compute_emi(principal, dec!(8.5), 240)?;
    println!("monthly emi: {}", emi);

    // what the loan costs over its full life
    let breakdown = emi_breakdown(principal, dec!(8.5), 240)?;
    println!("total interest: {}", breakdown.total_interest);
    println!("total payment:  {}", breakdown.total_payment);

    Ok(())
}
