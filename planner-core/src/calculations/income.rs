//! Income calculator: derives gross and net income at daily, weekly, monthly
//! and annual granularity from an [`IncomeConfig`].
//!
//! # Formula
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | `billable_weeks = max(1, 52 - vacation_weeks)` |
//! | 2 | `annual_gross = hourly_rate × hours_per_week × billable_weeks` |
//! | 3 | `annual_net = annual_gross × (1 - tax_rate / 100)` |
//! | 4 | daily = annual / 365, weekly = annual / 52, monthly = annual / 12 |
//!
//! The tax rate is not bounded here. Bounds are the job of
//! [`super::validate_and_clamp_config`].
//!
//! # Example
//!
//! ```
//! use planner_core::IncomeConfig;
//! use planner_core::calculations::calculate_income;
//!
//! let config = IncomeConfig {
//!     hourly_rate: 500.0,
//!     hours_per_week: 40.0,
//!     vacation_weeks: 2.0,
//!     tax_rate: 25.0,
//! };
//!
//! let result = calculate_income(&config).unwrap();
//!
//! assert_eq!(result.annual_gross, 1_000_000.0);
//! assert_eq!(result.annual_net, 750_000.0);
//! assert_eq!(result.monthly_net, 62_500.0);
//! ```

use tracing::{debug, warn};

use super::CalculationError;
use super::common::{DAYS_PER_YEAR, MONTHS_PER_YEAR, WEEKS_PER_YEAR, billable_weeks, tax_multiplier};
use crate::{IncomeConfig, IncomeResult};

/// Calculates income at every granularity for `config`.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if any field of `config` is NaN
/// or infinite.
pub fn calculate_income(config: &IncomeConfig) -> Result<IncomeResult, CalculationError> {
    if !config.is_finite() {
        warn!(?config, "income config has non-finite fields");
        return Err(CalculationError::InvalidInput);
    }

    let annual_gross = annual_gross(config);
    let annual_net = annual_gross * tax_multiplier(config.tax_rate);

    debug!(annual_gross, annual_net, "calculated annual income");

    Ok(IncomeResult {
        daily_gross: annual_gross / DAYS_PER_YEAR,
        daily_net: annual_net / DAYS_PER_YEAR,
        weekly_gross: annual_gross / WEEKS_PER_YEAR,
        weekly_net: annual_net / WEEKS_PER_YEAR,
        monthly_gross: annual_gross / MONTHS_PER_YEAR,
        monthly_net: annual_net / MONTHS_PER_YEAR,
        annual_gross,
        annual_net,
    })
}

/// Gain in annual net income from raising the hourly rate by `fraction`
/// (0.10 for a 10% raise), all else equal.
///
/// Returns `0.0` when either calculation fails, so a what-if line can always
/// be rendered.
pub fn rate_increase_what_if(
    config: &IncomeConfig,
    fraction: f64,
) -> f64 {
    let raised = IncomeConfig {
        hourly_rate: config.hourly_rate * (1.0 + fraction),
        ..*config
    };

    match (calculate_income(config), calculate_income(&raised)) {
        (Ok(current), Ok(raised)) => raised.annual_net - current.annual_net,
        _ => 0.0,
    }
}

fn annual_gross(config: &IncomeConfig) -> f64 {
    config.hourly_rate * config.hours_per_week * billable_weeks(config.vacation_weeks)
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

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    // =========================================================================
    // annual_gross tests
    // =========================================================================

    #[test]
    fn annual_gross_multiplies_rate_hours_and_billable_weeks() {
        assert_eq!(annual_gross(&test_config()), 1_000_000.0);
    }

    #[test]
    fn annual_gross_uses_one_week_when_vacation_exceeds_year() {
        let config = IncomeConfig {
            vacation_weeks: 60.0,
            ..test_config()
        };

        assert_eq!(annual_gross(&config), 20_000.0);
    }

    // =========================================================================
    // calculate_income tests
    // =========================================================================

    #[test]
    fn calculate_standard_case() {
        let result = calculate_income(&test_config()).unwrap();

        assert_eq!(result.annual_gross, 1_000_000.0);
        assert_eq!(result.annual_net, 750_000.0);
        assert_eq!(result.monthly_gross, 1_000_000.0 / 12.0);
        assert_eq!(result.monthly_net, 62_500.0);
        assert_eq!(result.weekly_net, 750_000.0 / 52.0);
        assert_eq!(result.daily_net, 750_000.0 / 365.0);
    }

    #[test]
    fn calculate_amortizes_over_calendar_time_not_worked_time() {
        let config = IncomeConfig {
            vacation_weeks: 42.0,
            ..test_config()
        };

        let result = calculate_income(&config).unwrap();

        // 10 billable weeks, but the daily figure still spreads over 365 days
        assert_eq!(result.annual_gross, 200_000.0);
        assert_close(result.daily_gross * 365.0, 200_000.0);
        assert_close(result.weekly_gross * 52.0, 200_000.0);
    }

    #[test]
    fn calculate_granularities_agree() {
        let result = calculate_income(&IncomeConfig {
            hourly_rate: 733.3,
            hours_per_week: 37.5,
            vacation_weeks: 3.5,
            tax_rate: 17.25,
        })
        .unwrap();

        assert_close(result.daily_net * 365.0, result.annual_net);
        assert_close(result.weekly_net * 52.0, result.annual_net);
        assert_close(result.monthly_net * 12.0, result.annual_net);
    }

    #[test]
    fn calculate_zero_tax_keeps_gross() {
        let config = IncomeConfig {
            tax_rate: 0.0,
            ..test_config()
        };

        let result = calculate_income(&config).unwrap();

        assert_eq!(result.annual_net, result.annual_gross);
    }

    #[test]
    fn calculate_trusts_out_of_range_tax_rate() {
        let config = IncomeConfig {
            tax_rate: 150.0,
            ..test_config()
        };

        let result = calculate_income(&config).unwrap();

        assert_eq!(result.annual_net, -500_000.0);
    }

    #[test]
    fn calculate_zero_hours_yields_zero_income() {
        let config = IncomeConfig {
            hours_per_week: 0.0,
            ..test_config()
        };

        let result = calculate_income(&config).unwrap();

        assert_eq!(result.annual_gross, 0.0);
        assert_eq!(result.daily_net, 0.0);
    }

    #[test]
    fn calculate_rejects_nan() {
        let config = IncomeConfig {
            hours_per_week: f64::NAN,
            ..test_config()
        };

        assert_eq!(calculate_income(&config), Err(CalculationError::InvalidInput));
    }

    #[test]
    fn calculate_rejects_infinity() {
        for config in [
            IncomeConfig {
                hourly_rate: f64::INFINITY,
                ..test_config()
            },
            IncomeConfig {
                vacation_weeks: f64::NEG_INFINITY,
                ..test_config()
            },
            IncomeConfig {
                tax_rate: f64::INFINITY,
                ..test_config()
            },
        ] {
            assert_eq!(calculate_income(&config), Err(CalculationError::InvalidInput));
        }
    }

    // =========================================================================
    // rate_increase_what_if tests
    // =========================================================================

    #[test]
    fn what_if_ten_percent_raise() {
        let gain = rate_increase_what_if(&test_config(), 0.10);

        assert_close(gain, 75_000.0);
    }

    #[test]
    fn what_if_returns_zero_for_invalid_config() {
        let config = IncomeConfig {
            tax_rate: f64::NAN,
            ..test_config()
        };

        assert_eq!(rate_increase_what_if(&config, 0.10), 0.0);
    }
}
