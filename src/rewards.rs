use log::debug;

use crate::errors::Result;
use crate::types::{RewardProfile, RewardResult, SpendProfile};

/// accrue points and cash value for each profile, preserving input order
///
/// ranking is left to the caller; no ordering is imposed on the results
pub fn compare_rewards(spend: &SpendProfile, profiles: &[RewardProfile]) -> Result<Vec<RewardResult>> {
    spend.validate()?;
    let mut results = Vec::with_capacity(profiles.len());
    for profile in profiles {
        profile.validate()?;
        let points = spend.annual_dining * profile.dining_multiplier
            + spend.annual_travel * profile.travel_multiplier
            + spend.annual_other * profile.other_multiplier;
        let cash_value = points * profile.point_value;
        debug!(
            "profile {}: {} points worth {}",
            profile.name, points, cash_value
        );
        results.push(RewardResult {
            profile_name: profile.name.clone(),
            total_points: points.to_whole_units(),
            total_cash_value: cash_value.to_whole_units(),
        });
    }
    Ok(results)
}
