//! Seasonal projection: spreads each scenario's monthly net income across the
//! twelve calendar months using a [`SeasonalPattern`].
//!
//! Each month's value is `round_half_up(monthly_net × multiplier[month])`,
//! where `monthly_net` comes straight from [`calculate_income`].
//!
//! If any scenario fails to calculate, the whole projection fails. The
//! `generate_*` functions report that as an empty `Vec`; callers must read an
//! empty projection as a failure, never as "no data".
//!
//! # Example
//!
//! ```
//! use planner_core::{IncomeConfig, Month, SeasonalPattern};
//! use planner_core::calculations::generate_seasonal_projection;
//!
//! let realistic = IncomeConfig::default();
//! let points = generate_seasonal_projection(
//!     &realistic,
//!     &realistic,
//!     &realistic,
//!     SeasonalPattern::Q4Heavy,
//! );
//!
//! assert_eq!(points.len(), 12);
//! assert_eq!(points[0].month, Month::Jan);
//! assert_eq!(points[0].realistic, 50_000.0);  // 62,500 × 0.8
//! assert_eq!(points[11].realistic, 81_250.0); // 62,500 × 1.3
//! ```

use tracing::warn;

use super::common::round_half_up;
use super::{CalculationError, calculate_income};
use crate::{IncomeConfig, Month, MonthlyDataPoint, SeasonalPattern};

/// Projects twelve months of net income for three scenarios.
///
/// # Errors
///
/// Returns the first [`CalculationError`] raised by any scenario, in
/// pessimistic, realistic, optimistic order.
pub fn seasonal_projection(
    pessimistic: &IncomeConfig,
    realistic: &IncomeConfig,
    optimistic: &IncomeConfig,
    pattern: SeasonalPattern,
) -> Result<[MonthlyDataPoint; 12], CalculationError> {
    let pessimistic = calculate_income(pessimistic)?.monthly_net;
    let realistic = calculate_income(realistic)?.monthly_net;
    let optimistic = calculate_income(optimistic)?.monthly_net;

    let multipliers = pattern.multipliers();

    Ok(std::array::from_fn(|index| {
        let multiplier = multipliers[index];
        MonthlyDataPoint {
            month: Month::ALL[index],
            pessimistic: round_half_up(pessimistic * multiplier),
            realistic: round_half_up(realistic * multiplier),
            optimistic: round_half_up(optimistic * multiplier),
        }
    }))
}

/// Twelve months of seasonally adjusted net income, or an empty `Vec` if any
/// scenario fails to calculate.
pub fn generate_seasonal_projection(
    pessimistic: &IncomeConfig,
    realistic: &IncomeConfig,
    optimistic: &IncomeConfig,
    pattern: SeasonalPattern,
) -> Vec<MonthlyDataPoint> {
    match seasonal_projection(pessimistic, realistic, optimistic, pattern) {
        Ok(points) => points.to_vec(),
        Err(error) => {
            warn!(%error, pattern = %pattern, "seasonal projection aborted");
            Vec::new()
        }
    }
}

/// [`generate_seasonal_projection`] with a flat (steady) pattern.
pub fn generate_monthly_projection(
    pessimistic: &IncomeConfig,
    realistic: &IncomeConfig,
    optimistic: &IncomeConfig,
) -> Vec<MonthlyDataPoint> {
    generate_seasonal_projection(pessimistic, realistic, optimistic, SeasonalPattern::Steady)
}
