//! Command execution.
//!
//! Each command reads the loaded [`PlannerState`], runs the engine and writes
//! a plain-text report. Commands that change inputs report back so the caller
//! knows to save the state file.

use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use planner_core::calculations::{
    ForecastInsights, calculate_income, calculate_required_hours, calculate_required_rate,
    generate_seasonal_projection, rate_increase_what_if, RATE_INCREASE_FRACTION,
    validate_and_clamp_config,
};
use planner_core::fx::{FixedRateProvider, RateProvider, convert_amount};
use planner_core::{Currency, PartialIncomeConfig};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command, ConfigArgs};
use crate::report::{
    UNABLE_TO_CALCULATE, render_income, render_insights, render_projection, render_solution,
    render_state, write_projection_csv,
};
use crate::state::{PlannerState, ScenarioUpdate};
use crate::utils::format_grouped;

/// Whether a command changed the planner inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Changed,
}

/// Loads the state file, runs the command, and saves the state if the command
/// changed it.
pub async fn run<W: Write>(
    cli: Cli,
    out: &mut W,
) -> Result<()> {
    let mut state = PlannerState::load(&cli.state)?;

    if execute(cli.command, &mut state, out).await? == Outcome::Changed {
        state.save(&cli.state)?;
    }
    Ok(())
}

pub async fn execute<W: Write>(
    command: Command,
    state: &mut PlannerState,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Command::Show => {
            render_state(out, state)?;
            Ok(Outcome::Unchanged)
        }
        Command::Income(overrides) => {
            income(state, &overrides, out)?;
            Ok(Outcome::Unchanged)
        }
        Command::Solve { target } => {
            solve(state, target, out)?;
            Ok(Outcome::Unchanged)
        }
        Command::Forecast { pattern, csv } => {
            let configs = state.scenarios.configs(state.tax_rate);
            let [pessimistic, realistic, optimistic] = &configs;
            let points =
                generate_seasonal_projection(pessimistic, realistic, optimistic, pattern);

            render_projection(out, &points, pattern, state.currency)?;
            writeln!(out)?;
            match ForecastInsights::from_scenarios(&state.scenarios, state.tax_rate) {
                Ok(insights) => render_insights(out, &insights, state.currency)?,
                Err(error) => {
                    warn!(%error, "cannot derive forecast insights");
                    writeln!(out, "{UNABLE_TO_CALCULATE}")?;
                }
            }

            if let Some(path) = csv {
                if points.is_empty() {
                    bail!("projection unavailable; nothing written to {}", path.display());
                }
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
                write_projection_csv(file, &points)
                    .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
                info!(path = %path.display(), "wrote projection CSV");
            }
            Ok(Outcome::Unchanged)
        }
        Command::Set {
            config,
            target,
            clear_target,
        } => {
            if let Some(rate) = config.rate {
                state.set_hourly_rate(rate);
            }
            if let Some(hours) = config.hours {
                state.set_hours_per_week(hours);
            }
            if let Some(weeks) = config.vacation {
                state.set_vacation_weeks(weeks);
            }
            if let Some(tax) = config.tax {
                state.set_tax_rate(tax);
            }
            if target.is_some() {
                state.set_target_annual_net(target);
            } else if clear_target {
                state.set_target_annual_net(None);
            }

            render_state(out, state)?;
            Ok(Outcome::Changed)
        }
        Command::Scenario {
            kind,
            rate,
            hours,
            vacation,
        } => {
            state.set_scenario(
                kind,
                ScenarioUpdate {
                    hourly_rate: rate,
                    hours_per_week: hours,
                    vacation_weeks: vacation,
                },
            );
            debug!(scenario = %kind, inputs = ?state.scenarios.get(kind), "updated scenario");

            render_state(out, state)?;
            Ok(Outcome::Changed)
        }
        Command::Currency { currency, rate } => {
            let provider = match rate {
                Some(rate) => Some(
                    FixedRateProvider::new(rate, Some(Utc::now()))
                        .context("Invalid exchange rate")?,
                ),
                None => state
                    .mxn_to_usd_rate
                    .and_then(|cached| FixedRateProvider::new(cached, state.rate_updated_at).ok()),
            };

            switch_currency(
                state,
                currency,
                provider.as_ref().map(|p| p as &dyn RateProvider),
            )
            .await;

            render_state(out, state)?;
            Ok(Outcome::Changed)
        }
        Command::Convert {
            amount,
            from,
            to,
            rate,
        } => {
            let converted = convert_amount(amount, from.code(), to.code(), rate);
            writeln!(
                out,
                "{} {} = {} {}",
                from.code(),
                format_grouped(amount, 2),
                to.code(),
                format_grouped(converted, 2)
            )?;
            Ok(Outcome::Unchanged)
        }
        Command::Reset => {
            state.reset_to_defaults();
            render_state(out, state)?;
            Ok(Outcome::Changed)
        }
    }
}

/// Fetches a fresh MXN → USD quote from `provider`, remembers it, and switches
/// the display currency.
///
/// A missing provider or a failed quote still switches the currency; amounts
/// are then left unconverted.
pub async fn switch_currency(
    state: &mut PlannerState,
    next: Currency,
    provider: Option<&dyn RateProvider>,
) {
    let quote = match provider {
        Some(provider) => match provider.quote("MXN", "USD").await {
            Ok(quote) => Some(quote),
            Err(error) => {
                warn!(%error, "exchange rate unavailable; amounts are not converted");
                None
            }
        },
        None => {
            if next != state.currency {
                warn!("no exchange rate known; pass --rate to convert amounts");
            }
            None
        }
    };

    if let Some(quote) = &quote {
        state.set_rate(quote);
    }
    state.switch_currency(next, quote.map(|q| q.rate));
}

fn income<W: Write>(
    state: &PlannerState,
    overrides: &ConfigArgs,
    out: &mut W,
) -> Result<()> {
    let config = validate_and_clamp_config(&PartialIncomeConfig {
        hourly_rate: Some(overrides.rate.unwrap_or(state.hourly_rate)),
        hours_per_week: Some(overrides.hours.unwrap_or(state.hours_per_week)),
        vacation_weeks: Some(overrides.vacation.unwrap_or(state.vacation_weeks)),
        tax_rate: Some(overrides.tax.unwrap_or(state.tax_rate)),
    });

    match calculate_income(&config) {
        Ok(result) => {
            let gain = rate_increase_what_if(&config, RATE_INCREASE_FRACTION);
            render_income(out, &result, gain, state.currency)?;
        }
        Err(error) => {
            warn!(%error, ?config, "income calculation failed");
            writeln!(out, "{UNABLE_TO_CALCULATE}")?;
        }
    }
    Ok(())
}

fn solve<W: Write>(
    state: &PlannerState,
    target: Option<f64>,
    out: &mut W,
) -> Result<()> {
    let Some(target) = target.or(state.target_annual_net) else {
        bail!("no income target; pass --target or save one with `set --target`");
    };

    let config = state.config();
    render_solution(
        out,
        target,
        calculate_required_rate(&config, target),
        calculate_required_hours(&config, target),
        state.currency,
    )?;
    Ok(())
}
