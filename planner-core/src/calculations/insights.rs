//! Headline figures for a three-scenario forecast.

use serde::{Deserialize, Serialize};

use super::{CalculationError, calculate_income};
use crate::ScenarioSet;

/// Optimistic weekly hours at or above this are flagged as near capacity.
pub const CAPACITY_WARNING_HOURS: f64 = 45.0;

/// Rate increase used for the "what if you raised your rate" figure.
pub const RATE_INCREASE_FRACTION: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastInsights {
    pub realistic_annual_net: f64,
    /// Pessimistic annual net; the income floor.
    pub floor_annual_net: f64,
    /// Optimistic annual net.
    pub ceiling_annual_net: f64,
    pub range: f64,
    /// `ceiling / floor`; `None` when the floor is not positive.
    pub spread: Option<f64>,
    /// Optimistic weekly hours, present only when near capacity.
    pub capacity_warning_hours: Option<f64>,
    /// Annual net gained by a 10% rate increase on the realistic scenario.
    pub rate_increase_gain: f64,
}

impl ForecastInsights {
    /// Derives insights from all three scenarios sharing `tax_rate`.
    ///
    /// # Errors
    ///
    /// Fails with the first scenario's [`CalculationError`]; no partial
    /// insights are produced.
    pub fn from_scenarios(
        scenarios: &ScenarioSet,
        tax_rate: f64,
    ) -> Result<Self, CalculationError> {
        let [pessimistic, realistic, optimistic] = scenarios.configs(tax_rate);

        let floor = calculate_income(&pessimistic)?.annual_net;
        let realistic = calculate_income(&realistic)?.annual_net;
        let ceiling = calculate_income(&optimistic)?.annual_net;

        let optimistic_hours = scenarios.optimistic.hours_per_week;

        Ok(Self {
            realistic_annual_net: realistic,
            floor_annual_net: floor,
            ceiling_annual_net: ceiling,
            range: ceiling - floor,
            spread: (floor > 0.0).then(|| ceiling / floor),
            capacity_warning_hours: (optimistic_hours >= CAPACITY_WARNING_HOURS)
                .then_some(optimistic_hours),
            rate_increase_gain: realistic * RATE_INCREASE_FRACTION,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn insights_for_default_scenarios() {
        let insights = ForecastInsights::from_scenarios(&ScenarioSet::default(), 25.0).unwrap();

        assert_eq!(insights.floor_annual_net, 345_000.0);
        assert_eq!(insights.realistic_annual_net, 750_000.0);
        assert_eq!(insights.ceiling_annual_net, 1_032_750.0);
        assert_eq!(insights.range, 687_750.0);
        assert_eq!(insights.capacity_warning_hours, Some(45.0));
        assert_eq!(insights.rate_increase_gain, 75_000.0);
    }

    #[test]
    fn spread_is_ceiling_over_floor() {
        let insights = ForecastInsights::from_scenarios(&ScenarioSet::default(), 25.0).unwrap();

        let spread = insights.spread.unwrap();
        assert!((spread - 1_032_750.0 / 345_000.0).abs() < 1e-12);
    }

    #[test]
    fn spread_is_absent_for_zero_floor() {
        let mut scenarios = ScenarioSet::default();
        scenarios.pessimistic.hours_per_week = 0.0;

        let insights = ForecastInsights::from_scenarios(&scenarios, 25.0).unwrap();

        assert_eq!(insights.floor_annual_net, 0.0);
        assert_eq!(insights.spread, None);
    }

    #[test]
    fn no_capacity_warning_below_threshold() {
        let mut scenarios = ScenarioSet::default();
        scenarios.optimistic.hours_per_week = 44.0;

        let insights = ForecastInsights::from_scenarios(&scenarios, 25.0).unwrap();

        assert_eq!(insights.capacity_warning_hours, None);
    }

    #[test]
    fn any_failing_scenario_fails_insights() {
        let mut scenarios = ScenarioSet::default();
        scenarios.realistic.vacation_weeks = f64::NAN;

        let result = ForecastInsights::from_scenarios(&scenarios, 25.0);

        assert_eq!(result, Err(CalculationError::InvalidInput));
    }
}
