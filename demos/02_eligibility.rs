/// eligibility - how much loan an income can service
use loan_simulation_rs::{evaluate_eligibility, EligibilityInput, Money, Occupation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let applicants = [
        ("salaried, no debts", 100_000, Occupation::Salaried, 0),
        ("salaried, heavy debts", 50_000, Occupation::Salaried, 30_000),
        ("professional", 75_000, Occupation::Professional, 10_000),
        // free-form labels degrade to salaried
        ("consultant", 80_000, Occupation::from_label("consultant"), 5_000),
    ];

    for (label, income, occupation, obligations) in applicants {
        let input = EligibilityInput {
            monthly_income: Money::from_major(income),
            occupation,
            existing_obligations: Money::from_major(obligations),
        };
        let result = evaluate_eligibility(&input)?;
        if result.eligible {
            println!(
                "{:<22} capacity {:>7}/month, can borrow up to {}",
                label,
                result.max_monthly_capacity.to_string(),
                result.max_loan_amount
            );
        } else {
            println!("{:<22} not eligible", label);
        }
    }

    Ok(())
}
