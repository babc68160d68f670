/// reward comparison - rank card programs by cash value for a spend pattern
use loan_simulation_rs::{compare_rewards, Money, RewardProfile, SpendProfile};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spend = SpendProfile {
        annual_dining: Money::from_major(100_000),
        annual_travel: Money::from_major(50_000),
        annual_other: Money::from_major(20_000),
    };

    let catalog = vec![
        RewardProfile {
            name: "HDFC Regalia Gold".to_string(),
            dining_multiplier: dec!(4),
            travel_multiplier: dec!(2),
            other_multiplier: dec!(1),
            point_value: dec!(0.25),
        },
        RewardProfile {
            name: "Amex Platinum Travel".to_string(),
            dining_multiplier: dec!(1),
            travel_multiplier: dec!(5),
            other_multiplier: dec!(1.5),
            point_value: dec!(0.50),
        },
        RewardProfile {
            name: "SBI Cashback".to_string(),
            dining_multiplier: dec!(5),
            travel_multiplier: dec!(5),
            other_multiplier: dec!(1),
            point_value: dec!(1.00),
        },
    ];

    // results come back in catalog order; rank them here
    let mut results = compare_rewards(&spend, &catalog)?;
    results.sort_by(|a, b| b.total_cash_value.cmp(&a.total_cash_value));

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{}. {:<22} {:>7} points, worth {}",
            rank + 1,
            result.profile_name,
            result.total_points,
            result.total_cash_value
        );
    }

    Ok(())
}
