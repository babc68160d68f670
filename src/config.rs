use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimulationError};

/// annual installment growth applied by the step-up strategy
pub const DEFAULT_STEP_UP_RATE: Decimal = dec!(0.05);

/// prepayment strategy switches for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub lump_sum_enabled: bool,
    pub step_up_enabled: bool,
    pub step_up_rate: Decimal,
}

impl SimulationConfig {
    /// contractual schedule only, no prepayment
    pub fn baseline() -> Self {
        Self {
            lump_sum_enabled: false,
            step_up_enabled: false,
            step_up_rate: DEFAULT_STEP_UP_RATE,
        }
    }

    /// one extra installment at the end of every loan year
    pub fn with_lump_sum() -> Self {
        Self {
            lump_sum_enabled: true,
            step_up_enabled: false,
            step_up_rate: DEFAULT_STEP_UP_RATE,
        }
    }

    /// installment grows after every completed loan year
    pub fn with_step_up() -> Self {
        Self {
            lump_sum_enabled: false,
            step_up_enabled: true,
            step_up_rate: DEFAULT_STEP_UP_RATE,
        }
    }

    /// both strategies combined
    pub fn aggressive() -> Self {
        Self {
            lump_sum_enabled: true,
            step_up_enabled: true,
            step_up_rate: DEFAULT_STEP_UP_RATE,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_up_rate < Decimal::ZERO {
            return Err(SimulationError::InvalidConfiguration {
                message: format!("negative step-up rate: {}", self.step_up_rate),
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let baseline = SimulationConfig::baseline();
        assert!(!baseline.lump_sum_enabled);
        assert!(!baseline.step_up_enabled);
        assert_eq!(baseline, SimulationConfig::default());

        let aggressive = SimulationConfig::aggressive();
        assert!(aggressive.lump_sum_enabled);
        assert!(aggressive.step_up_enabled);
        assert_eq!(aggressive.step_up_rate, dec!(0.05));

        assert!(SimulationConfig::with_lump_sum().lump_sum_enabled);
        assert!(SimulationConfig::with_step_up().step_up_enabled);
    }

    #[test]
    fn test_validation() {
        assert!(SimulationConfig::baseline().validate().is_ok());

        let broken = SimulationConfig {
            step_up_rate: dec!(-0.05),
            ..SimulationConfig::with_step_up()
        };
        assert!(matches!(
            broken.validate(),
            Err(SimulationError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SimulationConfig::aggressive();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
