mod currency;
mod income_config;
mod income_result;
mod monthly_data_point;
mod scenario;
mod seasonal_pattern;

pub use currency::{Currency, UnknownCurrency};
pub use income_config::{IncomeConfig, PartialIncomeConfig};
pub use income_result::IncomeResult;
pub use monthly_data_point::{Month, MonthlyDataPoint};
pub use scenario::{ScenarioInputs, ScenarioKind, ScenarioSet, UnknownScenario};
pub use seasonal_pattern::{SeasonalPattern, UnknownSeasonalPattern};
