use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use planner_core::{Currency, ScenarioKind, SeasonalPattern};

use crate::utils::parse_amount;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Freelance income planner.
///
/// Derives take-home income from an hourly rate, billable hours, vacation
/// and a flat tax rate, solves for the rate or hours needed to hit a target,
/// and projects three scenarios month by month.
#[derive(Debug, Parser)]
#[command(name = "income-planner", version, about, long_about = None)]
pub struct Cli {
    /// File holding the saved planner inputs (created on first change).
    #[arg(long, global = true, default_value = "income-planner.toml")]
    pub state: PathBuf,

    /// Log filter, e.g. `debug` or `warn,planner_core=debug`.
    /// Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Snapshot inputs; every field is optional.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Hourly rate in the current currency (commas allowed).
    #[arg(long, value_parser = parse_amount)]
    pub rate: Option<f64>,

    /// Billable hours per week.
    #[arg(long)]
    pub hours: Option<f64>,

    /// Weeks of vacation per year.
    #[arg(long)]
    pub vacation: Option<f64>,

    /// Flat tax rate, in percent.
    #[arg(long)]
    pub tax: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the saved inputs.
    Show,

    /// Income per day, week, month and year. Flags override saved inputs for
    /// this run only.
    Income(ConfigArgs),

    /// Hourly rate and weekly hours needed to reach a net annual target.
    Solve {
        /// Target net income per year; defaults to the saved target.
        #[arg(long, value_parser = parse_amount)]
        target: Option<f64>,
    },

    /// Month-by-month projection of the three scenarios.
    Forecast {
        /// Seasonal curve: steady, q4-heavy or summer-slow.
        #[arg(long, default_value_t = SeasonalPattern::Steady)]
        pattern: SeasonalPattern,

        /// Also write the projection to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Change and save snapshot inputs. Values are clamped to their ranges.
    Set {
        #[command(flatten)]
        config: ConfigArgs,

        /// Net annual income target.
        #[arg(long, value_parser = parse_amount, conflicts_with = "clear_target")]
        target: Option<f64>,

        /// Forget the saved target.
        #[arg(long)]
        clear_target: bool,
    },

    /// Change and save one forecast scenario.
    Scenario {
        /// pessimistic, realistic or optimistic.
        kind: ScenarioKind,

        #[arg(long, value_parser = parse_amount)]
        rate: Option<f64>,

        #[arg(long)]
        hours: Option<f64>,

        #[arg(long)]
        vacation: Option<f64>,
    },

    /// Switch the display currency, converting saved amounts.
    Currency {
        /// MXN or USD.
        currency: Currency,

        /// MXN -> USD exchange rate; defaults to the last saved rate.
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Convert an amount between MXN and USD.
    Convert {
        #[arg(value_parser = parse_amount)]
        amount: f64,

        #[arg(long)]
        from: Currency,

        #[arg(long)]
        to: Currency,

        /// MXN -> USD exchange rate.
        #[arg(long)]
        rate: f64,
    },

    /// Restore the default snapshot inputs and clear the target.
    Reset,
}
