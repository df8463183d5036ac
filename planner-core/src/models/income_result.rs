use serde::{Deserialize, Serialize};

/// Gross and net income at each time granularity.
///
/// Daily, weekly and monthly figures are the annual figures spread over a
/// calendar year (365 days, 52 weeks, 12 months), not over worked time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeResult {
    pub daily_gross: f64,
    pub daily_net: f64,
    pub weekly_gross: f64,
    pub weekly_net: f64,
    pub monthly_gross: f64,
    pub monthly_net: f64,
    pub annual_gross: f64,
    pub annual_net: f64,
}
