use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::IncomeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Pessimistic,
    Realistic,
    Optimistic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scenario '{0}' (expected pessimistic, realistic or optimistic)")]
pub struct UnknownScenario(pub String);

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [Self::Pessimistic, Self::Realistic, Self::Optimistic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pessimistic => "pessimistic",
            Self::Realistic => "realistic",
            Self::Optimistic => "optimistic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pessimistic" => Some(Self::Pessimistic),
            "realistic" => Some(Self::Realistic),
            "optimistic" => Some(Self::Optimistic),
            _ => None,
        }
    }
}

impl FromStr for ScenarioKind {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-scenario inputs. The tax rate is shared by all scenarios and lives
/// outside this struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub hourly_rate: f64,
    pub hours_per_week: f64,
    pub vacation_weeks: f64,
}

impl ScenarioInputs {
    pub fn with_tax_rate(&self, tax_rate: f64) -> IncomeConfig {
        IncomeConfig {
            hourly_rate: self.hourly_rate,
            hours_per_week: self.hours_per_week,
            vacation_weeks: self.vacation_weeks,
            tax_rate,
        }
    }
}

impl From<IncomeConfig> for ScenarioInputs {
    fn from(config: IncomeConfig) -> Self {
        Self {
            hourly_rate: config.hourly_rate,
            hours_per_week: config.hours_per_week,
            vacation_weeks: config.vacation_weeks,
        }
    }
}

/// The three named scenarios compared by a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub pessimistic: ScenarioInputs,
    pub realistic: ScenarioInputs,
    pub optimistic: ScenarioInputs,
}

impl ScenarioSet {
    pub fn get(&self, kind: ScenarioKind) -> &ScenarioInputs {
        match kind {
            ScenarioKind::Pessimistic => &self.pessimistic,
            ScenarioKind::Realistic => &self.realistic,
            ScenarioKind::Optimistic => &self.optimistic,
        }
    }

    pub fn get_mut(&mut self, kind: ScenarioKind) -> &mut ScenarioInputs {
        match kind {
            ScenarioKind::Pessimistic => &mut self.pessimistic,
            ScenarioKind::Realistic => &mut self.realistic,
            ScenarioKind::Optimistic => &mut self.optimistic,
        }
    }

    /// Full configs for (pessimistic, realistic, optimistic) with the shared
    /// tax rate merged in.
    pub fn configs(&self, tax_rate: f64) -> [IncomeConfig; 3] {
        ScenarioKind::ALL.map(|kind| self.get(kind).with_tax_rate(tax_rate))
    }
}

impl Default for ScenarioSet {
    /// Pessimistic and optimistic rates sit 20% either side of the default
    /// rate of 500.
    fn default() -> Self {
        Self {
            pessimistic: ScenarioInputs {
                hourly_rate: 400.0,
                hours_per_week: 25.0,
                vacation_weeks: 6.0,
            },
            realistic: ScenarioInputs {
                hourly_rate: 500.0,
                hours_per_week: 40.0,
                vacation_weeks: 2.0,
            },
            optimistic: ScenarioInputs {
                hourly_rate: 600.0,
                hours_per_week: 45.0,
                vacation_weeks: 1.0,
            },
        }
    }
}
