use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, SimulationError};

/// immutable terms of a loan under simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate_percent: Decimal,
    pub tenure_months: u32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate_percent: Decimal, tenure_months: u32) -> Self {
        LoanTerms {
            principal,
            annual_rate_percent,
            tenure_months,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.principal < Money::ZERO {
            return Err(SimulationError::InvalidPrincipal {
                amount: self.principal,
            });
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(SimulationError::InvalidRate {
                rate: self.annual_rate_percent,
            });
        }
        if self.tenure_months == 0 {
            return Err(SimulationError::InvalidTenure { months: 0 });
        }
        Ok(())
    }
}

/// occupation class driving the obligation-to-income ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Occupation {
    #[default]
    Salaried,
    SelfEmployed,
    Professional,
}

impl Occupation {
    /// maximum share of income that may go to obligations
    pub fn foir(&self) -> Decimal {
        match self {
            Occupation::SelfEmployed => dec!(0.40),
            Occupation::Professional => dec!(0.45),
            Occupation::Salaried => dec!(0.50),
        }
    }

    /// parse a free-form label; unrecognized labels fall back to salaried
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "self-employed" | "self employed" => Occupation::SelfEmployed,
            "professional" => Occupation::Professional,
            _ => Occupation::Salaried,
        }
    }
}

/// income and obligation picture of an applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub monthly_income: Money,
    pub occupation: Occupation,
    pub existing_obligations: Money,
}

impl EligibilityInput {
    pub fn validate(&self) -> Result<()> {
        if self.monthly_income < Money::ZERO {
            return Err(SimulationError::InvalidIncome {
                amount: self.monthly_income,
            });
        }
        if self.existing_obligations < Money::ZERO {
            return Err(SimulationError::InvalidObligation {
                amount: self.existing_obligations,
            });
        }
        Ok(())
    }
}

/// eligibility verdict with the affordable ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub max_loan_amount: Money,
    pub max_monthly_capacity: Money,
}

/// annual spend split across reward categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpendProfile {
    pub annual_dining: Money,
    pub annual_travel: Money,
    pub annual_other: Money,
}

impl SpendProfile {
    pub fn validate(&self) -> Result<()> {
        for amount in [self.annual_dining, self.annual_travel, self.annual_other] {
            if amount < Money::ZERO {
                return Err(SimulationError::InvalidSpend { amount });
            }
        }
        Ok(())
    }
}

/// reward program configuration, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardProfile {
    pub name: String,
    pub dining_multiplier: Decimal,
    pub travel_multiplier: Decimal,
    pub other_multiplier: Decimal,
    pub point_value: Decimal,
}

impl RewardProfile {
    pub fn validate(&self) -> Result<()> {
        let factors = [
            self.dining_multiplier,
            self.travel_multiplier,
            self.other_multiplier,
            self.point_value,
        ];
        if factors.iter().any(|f| *f < Decimal::ZERO) {
            return Err(SimulationError::InvalidConfiguration {
                message: format!("negative factor in reward profile {}", self.name),
            });
        }
        Ok(())
    }
}

/// points and cash value earned by one reward profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardResult {
    pub profile_name: String,
    pub total_points: i64,
    pub total_cash_value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_terms_validation() {
        let terms = LoanTerms::new(Money::from_major(1_000_000), dec!(8.5), 240);
        assert!(terms.validate().is_ok());

        let negative_principal = LoanTerms::new(Money::from_major(-1), dec!(8.5), 240);
        assert!(matches!(
            negative_principal.validate(),
            Err(SimulationError::InvalidPrincipal { .. })
        ));

        let negative_rate = LoanTerms::new(Money::from_major(1_000), dec!(-0.5), 12);
        assert!(matches!(
            negative_rate.validate(),
            Err(SimulationError::InvalidRate { .. })
        ));

        let zero_tenure = LoanTerms::new(Money::from_major(1_000), dec!(8.5), 0);
        assert!(matches!(
            zero_tenure.validate(),
            Err(SimulationError::InvalidTenure { months: 0 })
        ));
    }

    #[test]
    fn test_foir_by_occupation() {
        assert_eq!(Occupation::SelfEmployed.foir(), dec!(0.40));
        assert_eq!(Occupation::Professional.foir(), dec!(0.45));
        assert_eq!(Occupation::Salaried.foir(), dec!(0.50));
    }

    #[test]
    fn test_occupation_labels() {
        assert_eq!(Occupation::from_label("salaried"), Occupation::Salaried);
        assert_eq!(Occupation::from_label("Self-Employed"), Occupation::SelfEmployed);
        assert_eq!(Occupation::from_label("self employed"), Occupation::SelfEmployed);
        assert_eq!(Occupation::from_label("PROFESSIONAL"), Occupation::Professional);
        assert_eq!(Occupation::from_label("consultant"), Occupation::Salaried);
        assert_eq!(Occupation::default(), Occupation::Salaried);
    }

    #[test]
    fn test_terms_json_roundtrip() {
        let terms = LoanTerms::new(Money::from_major(1_000_000), dec!(8.5), 240);
        let json = serde_json::to_string(&terms).unwrap();
        let back: LoanTerms = serde_json::from_str(&json).unwrap();
        assert_eq!(back, terms);
    }

    #[test]
    fn test_spend_profile_validation() {
        let spend = SpendProfile {
            annual_dining: Money::from_major(100_000),
            annual_travel: Money::from_major(50_000),
            annual_other: Money::from_major(-1),
        };
        assert!(matches!(
            spend.validate(),
            Err(SimulationError::InvalidSpend { .. })
        ));
    }

    #[test]
    fn test_reward_profile_validation() {
        let profile = RewardProfile {
            name: "broken".to_string(),
            dining_multiplier: dec!(2),
            travel_multiplier: dec!(-1),
            other_multiplier: dec!(1),
            point_value: dec!(0.25),
        };
        assert!(matches!(
            profile.validate(),
            Err(SimulationError::InvalidConfiguration { .. })
        ));
    }
}
