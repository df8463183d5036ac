//! Plain-text rendering of calculation results, and CSV export of
//! projections.
//!
//! Renderers write to any [`io::Write`] so they can be tested against a
//! buffer.

use std::io::{self, Write};

use planner_core::calculations::{CalculationError, ForecastInsights, RATE_INCREASE_FRACTION};
use planner_core::{Currency, IncomeResult, MonthlyDataPoint, ScenarioKind, SeasonalPattern};

use crate::state::PlannerState;
use crate::utils::{format_grouped, format_money, opt_money_display};

/// Shown in place of any figure the engine could not produce.
pub const UNABLE_TO_CALCULATE: &str = "Unable to calculate income. Please check your inputs.";

pub fn render_income<W: Write>(
    w: &mut W,
    result: &IncomeResult,
    rate_increase_gain: f64,
    currency: Currency,
) -> io::Result<()> {
    writeln!(w, "{:<10} {:>18} {:>18}", "", "Gross", "Net")?;
    for (label, gross, net) in [
        ("Per day", result.daily_gross, result.daily_net),
        ("Per week", result.weekly_gross, result.weekly_net),
        ("Per month", result.monthly_gross, result.monthly_net),
        ("Per year", result.annual_gross, result.annual_net),
    ] {
        writeln!(
            w,
            "{:<10} {:>18} {:>18}",
            label,
            format_money(gross, currency),
            format_money(net, currency)
        )?;
    }
    writeln!(w)?;
    writeln!(
        w,
        "A {:.0}% rate increase would add {} to your annual income.",
        RATE_INCREASE_FRACTION * 100.0,
        format_money(rate_increase_gain, currency)
    )
}

pub fn render_solution<W: Write>(
    w: &mut W,
    target_annual_net: f64,
    required_rate: Result<f64, CalculationError>,
    required_hours: Result<f64, CalculationError>,
    currency: Currency,
) -> io::Result<()> {
    writeln!(
        w,
        "To net {} per year:",
        format_money(target_annual_net, currency)
    )?;
    match required_rate {
        Ok(rate) => writeln!(
            w,
            "  required hourly rate: {} {} at your current hours",
            currency.code(),
            format_grouped(rate, 2)
        )?,
        Err(error) => writeln!(w, "  required hourly rate: unavailable ({error})")?,
    }
    match required_hours {
        Ok(hours) => writeln!(
            w,
            "  required hours/week:  {} at your current rate",
            format_grouped(hours, 1)
        )?,
        Err(error) => writeln!(w, "  required hours/week:  unavailable ({error})")?,
    }
    Ok(())
}

pub fn render_projection<W: Write>(
    w: &mut W,
    points: &[MonthlyDataPoint],
    pattern: SeasonalPattern,
    currency: Currency,
) -> io::Result<()> {
    if points.is_empty() {
        return writeln!(w, "{UNABLE_TO_CALCULATE}");
    }

    writeln!(w, "Monthly net income ({pattern}):")?;
    writeln!(
        w,
        "{:<5} {:>16} {:>16} {:>16}",
        "",
        ScenarioKind::Pessimistic.as_str(),
        ScenarioKind::Realistic.as_str(),
        ScenarioKind::Optimistic.as_str()
    )?;
    for point in points {
        writeln!(
            w,
            "{:<5} {:>16} {:>16} {:>16}",
            point.month.label(),
            format_money(point.pessimistic, currency),
            format_money(point.realistic, currency),
            format_money(point.optimistic, currency)
        )?;
    }

    let total = |f: fn(&MonthlyDataPoint) -> f64| points.iter().map(f).sum::<f64>();
    writeln!(
        w,
        "{:<5} {:>16} {:>16} {:>16}",
        "Total",
        format_money(total(|p| p.pessimistic), currency),
        format_money(total(|p| p.realistic), currency),
        format_money(total(|p| p.optimistic), currency)
    )
}

pub fn render_insights<W: Write>(
    w: &mut W,
    insights: &ForecastInsights,
    currency: Currency,
) -> io::Result<()> {
    writeln!(w, "Key insights:")?;
    writeln!(
        w,
        "  - Your realistic annual income: {}",
        format_money(insights.realistic_annual_net, currency)
    )?;
    let spread = insights
        .spread
        .map(|s| format!(" ({s:.1}x spread)"))
        .unwrap_or_default();
    writeln!(
        w,
        "  - Income range: {} - {}{}",
        format_money(insights.floor_annual_net, currency),
        format_money(insights.ceiling_annual_net, currency),
        spread
    )?;
    if let Some(hours) = insights.capacity_warning_hours {
        writeln!(
            w,
            "  - Optimistic scenario requires {hours} hrs/week - near max capacity. \
             Consider raising rates instead."
        )?;
    }
    writeln!(
        w,
        "  - Even in the pessimistic case you earn {} - that's your income floor.",
        format_money(insights.floor_annual_net, currency)
    )?;
    writeln!(
        w,
        "  - A {:.0}% rate increase would add {} to your realistic annual income.",
        RATE_INCREASE_FRACTION * 100.0,
        format_money(insights.rate_increase_gain, currency)
    )
}

pub fn render_state<W: Write>(
    w: &mut W,
    state: &PlannerState,
) -> io::Result<()> {
    let currency = state.currency;
    writeln!(w, "Currency:        {currency}")?;
    writeln!(
        w,
        "Hourly rate:     {}",
        format_money(state.hourly_rate, currency)
    )?;
    writeln!(w, "Hours per week:  {}", state.hours_per_week)?;
    writeln!(w, "Vacation weeks:  {}", state.vacation_weeks)?;
    writeln!(w, "Tax rate:        {}%", state.tax_rate)?;
    writeln!(
        w,
        "Target (net/yr): {}",
        opt_money_display(state.target_annual_net, currency)
    )?;
    match (state.mxn_to_usd_rate, state.rate_updated_at) {
        (Some(rate), Some(at)) => writeln!(w, "MXN->USD rate:   {rate} (as of {})", at.to_rfc3339())?,
        (Some(rate), None) => writeln!(w, "MXN->USD rate:   {rate}")?,
        _ => writeln!(w, "MXN->USD rate:   —")?,
    }
    writeln!(w, "Scenarios:")?;
    for kind in ScenarioKind::ALL {
        let inputs = state.scenarios.get(kind);
        writeln!(
            w,
            "  {:<12} {} x {} hrs/week, {} weeks off",
            kind.as_str(),
            format_money(inputs.hourly_rate, currency),
            inputs.hours_per_week,
            inputs.vacation_weeks
        )?;
    }
    Ok(())
}

/// Writes `month,pessimistic,realistic,optimistic` rows with a header.
pub fn write_projection_csv<W: Write>(
    w: W,
    points: &[MonthlyDataPoint],
) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(w);
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
