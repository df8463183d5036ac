//! Inverse solvers: given a target annual net income, find the hourly rate or
//! the weekly hours that reach it with the rest of the config held fixed.
//!
//! Both solvers re-derive billable weeks and the tax multiplier from the
//! config they are given, so they never depend on an earlier
//! [`super::calculate_income`] result.
//!
//! ```text
//! required_rate  = target / (tax_multiplier × hours_per_week × billable_weeks)
//! required_hours = target / (tax_multiplier × hourly_rate    × billable_weeks)
//! ```

use tracing::{debug, warn};

use super::CalculationError;
use super::common::{billable_weeks, tax_multiplier};
use crate::IncomeConfig;

/// Hourly rate needed to reach `target_annual_net`.
///
/// `config.hourly_rate` is ignored.
///
/// # Errors
///
/// - [`CalculationError::InvalidTarget`] if the target is non-finite or ≤ 0
/// - [`CalculationError::InvalidInput`] if any config field is non-finite
/// - [`CalculationError::ZeroHours`] if `hours_per_week` is zero
/// - [`CalculationError::FullTaxRate`] if the tax rate is exactly 100%
///
/// # Example
///
/// ```
/// use planner_core::IncomeConfig;
/// use planner_core::calculations::calculate_required_rate;
///
/// let config = IncomeConfig {
///     hourly_rate: 500.0,
///     hours_per_week: 40.0,
///     vacation_weeks: 2.0,
///     tax_rate: 25.0,
/// };
///
/// // 1,500,000 / (0.75 × 40 × 50)
/// assert_eq!(calculate_required_rate(&config, 1_500_000.0), Ok(1_000.0));
/// ```
pub fn calculate_required_rate(
    config: &IncomeConfig,
    target_annual_net: f64,
) -> Result<f64, CalculationError> {
    let net_per_unit = net_per_unit(
        config,
        target_annual_net,
        config.hours_per_week,
        CalculationError::ZeroHours,
    )?;

    let required_rate = target_annual_net / net_per_unit;
    debug!(target_annual_net, required_rate, "solved for hourly rate");
    Ok(required_rate)
}

/// Weekly hours needed to reach `target_annual_net`.
///
/// `config.hours_per_week` is ignored.
///
/// # Errors
///
/// - [`CalculationError::InvalidTarget`] if the target is non-finite or ≤ 0
/// - [`CalculationError::InvalidInput`] if any config field is non-finite
/// - [`CalculationError::ZeroRate`] if `hourly_rate` is zero
/// - [`CalculationError::FullTaxRate`] if the tax rate is exactly 100%
pub fn calculate_required_hours(
    config: &IncomeConfig,
    target_annual_net: f64,
) -> Result<f64, CalculationError> {
    let net_per_unit = net_per_unit(
        config,
        target_annual_net,
        config.hourly_rate,
        CalculationError::ZeroRate,
    )?;

    let required_hours = target_annual_net / net_per_unit;
    debug!(target_annual_net, required_hours, "solved for weekly hours");
    Ok(required_hours)
}

/// Annual net income produced by one unit of the unknown (one currency unit
/// of rate, or one weekly hour), given the known `factor`. A zero `factor`
/// fails with `zero_factor`.
fn net_per_unit(
    config: &IncomeConfig,
    target_annual_net: f64,
    factor: f64,
    zero_factor: CalculationError,
) -> Result<f64, CalculationError> {
    if !target_annual_net.is_finite() || target_annual_net <= 0.0 {
        warn!(target_annual_net, "target annual net must be a positive number");
        return Err(CalculationError::InvalidTarget(target_annual_net));
    }
    if !config.is_finite() {
        warn!(?config, "income config has non-finite fields");
        return Err(CalculationError::InvalidInput);
    }

    let multiplier = tax_multiplier(config.tax_rate);
    if factor == 0.0 {
        return Err(zero_factor);
    }
    if multiplier == 0.0 {
        return Err(CalculationError::FullTaxRate);
    }

    Ok(multiplier * factor * billable_weeks(config.vacation_weeks))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_config() -> IncomeConfig {
        IncomeConfig {
            hourly_rate: 500.0,
            hours_per_week: 40.0,
            vacation_weeks: 2.0,
            tax_rate: 25.0,
        }
    }

    // =========================================================================
    // calculate_required_rate tests
    // =========================================================================

    #[test]
    fn required_rate_standard_case() {
        let result = calculate_required_rate(&test_config(), 750_000.0);

        assert_eq!(result, Ok(500.0));
    }

    #[test]
    fn required_rate_ignores_current_rate() {
        let config = IncomeConfig {
            hourly_rate: 0.0,
            ..test_config()
        };

        assert_eq!(calculate_required_rate(&config, 750_000.0), Ok(500.0));
    }

    #[test]
    fn required_rate_uses_billable_week_floor() {
        let config = IncomeConfig {
            vacation_weeks: 52.0,
            tax_rate: 0.0,
            ..test_config()
        };

        // one billable week of 40 hours
        assert_eq!(calculate_required_rate(&config, 4_000.0), Ok(100.0));
    }

    #[test]
    fn required_rate_rejects_zero_target() {
        assert_eq!(
            calculate_required_rate(&test_config(), 0.0),
            Err(CalculationError::InvalidTarget(0.0))
        );
    }

    #[test]
    fn required_rate_rejects_negative_target() {
        assert_eq!(
            calculate_required_rate(&test_config(), -10.0),
            Err(CalculationError::InvalidTarget(-10.0))
        );
    }

    #[test]
    fn required_rate_rejects_non_finite_target() {
        assert!(matches!(
            calculate_required_rate(&test_config(), f64::NAN),
            Err(CalculationError::InvalidTarget(_))
        ));
        assert_eq!(
            calculate_required_rate(&test_config(), f64::INFINITY),
            Err(CalculationError::InvalidTarget(f64::INFINITY))
        );
    }

    #[test]
    fn required_rate_rejects_zero_hours() {
        let config = IncomeConfig {
            hours_per_week: 0.0,
            ..test_config()
        };

        assert_eq!(
            calculate_required_rate(&config, 750_000.0),
            Err(CalculationError::ZeroHours)
        );
    }

    #[test]
    fn required_rate_rejects_full_tax() {
        let config = IncomeConfig {
            tax_rate: 100.0,
            ..test_config()
        };

        assert_eq!(
            calculate_required_rate(&config, 750_000.0),
            Err(CalculationError::FullTaxRate)
        );
    }

    #[test]
    fn required_rate_rejects_non_finite_config() {
        let config = IncomeConfig {
            vacation_weeks: f64::NAN,
            ..test_config()
        };

        assert_eq!(
            calculate_required_rate(&config, 750_000.0),
            Err(CalculationError::InvalidInput)
        );
    }

    // =========================================================================
    // calculate_required_hours tests
    // =========================================================================

    #[test]
    fn required_hours_standard_case() {
        let result = calculate_required_hours(&test_config(), 750_000.0);

        assert_eq!(result, Ok(40.0));
    }

    #[test]
    fn required_hours_ignores_current_hours() {
        let config = IncomeConfig {
            hours_per_week: 0.0,
            ..test_config()
        };

        assert_eq!(calculate_required_hours(&config, 375_000.0), Ok(20.0));
    }

    #[test]
    fn required_hours_rejects_zero_rate() {
        let config = IncomeConfig {
            hourly_rate: 0.0,
            ..test_config()
        };

        assert_eq!(
            calculate_required_hours(&config, 750_000.0),
            Err(CalculationError::ZeroRate)
        );
    }

    #[test]
    fn required_hours_rejects_full_tax() {
        let config = IncomeConfig {
            tax_rate: 100.0,
            ..test_config()
        };

        assert_eq!(
            calculate_required_hours(&config, 750_000.0),
            Err(CalculationError::FullTaxRate)
        );
    }

    #[test]
    fn required_hours_rejects_invalid_target() {
        assert_eq!(
            calculate_required_hours(&test_config(), -1.0),
            Err(CalculationError::InvalidTarget(-1.0))
        );
    }
}
