use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named seasonal curves applied to a flat monthly net figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonalPattern {
    #[default]
    Steady,
    Q4Heavy,
    SummerSlow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown seasonal pattern '{0}' (expected steady, q4-heavy or summer-slow)")]
pub struct UnknownSeasonalPattern(pub String);

const STEADY: [f64; 12] = [1.0; 12];
const Q4_HEAVY: [f64; 12] = [0.8, 0.8, 0.9, 0.9, 1.0, 1.0, 0.9, 0.9, 1.0, 1.1, 1.2, 1.3];
const SUMMER_SLOW: [f64; 12] = [1.0, 1.0, 1.1, 1.1, 0.9, 0.7, 0.7, 0.8, 1.0, 1.1, 1.1, 1.0];

impl SeasonalPattern {
    pub const ALL: [SeasonalPattern; 3] = [Self::Steady, Self::Q4Heavy, Self::SummerSlow];

    /// Multipliers for January through December.
    pub fn multipliers(&self) -> &'static [f64; 12] {
        match self {
            Self::Steady => &STEADY,
            Self::Q4Heavy => &Q4_HEAVY,
            Self::SummerSlow => &SUMMER_SLOW,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Steady => "steady",
            Self::Q4Heavy => "q4-heavy",
            Self::SummerSlow => "summer-slow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "steady" => Some(Self::Steady),
            "q4-heavy" => Some(Self::Q4Heavy),
            "summer-slow" => Some(Self::SummerSlow),
            _ => None,
        }
    }
}

impl FromStr for SeasonalPattern {
    type Err = UnknownSeasonalPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownSeasonalPattern(s.to_string()))
    }
}

impl fmt::Display for SeasonalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_is_steady() {
        assert_eq!(SeasonalPattern::default(), SeasonalPattern::Steady);
    }

    #[test]
    fn steady_is_flat() {
        assert!(SeasonalPattern::Steady.multipliers().iter().all(|m| *m == 1.0));
    }

    #[test]
    fn q4_heavy_peaks_in_december() {
        let multipliers = SeasonalPattern::Q4Heavy.multipliers();

        assert_eq!(multipliers[0], 0.8);
        assert_eq!(multipliers[11], 1.3);
    }

    #[test]
    fn summer_slow_dips_in_june_and_july() {
        let multipliers = SeasonalPattern::SummerSlow.multipliers();

        assert_eq!(multipliers[5], 0.7);
        assert_eq!(multipliers[6], 0.7);
    }

    #[test]
    fn parse_accepts_kebab_case_names() {
        for pattern in SeasonalPattern::ALL {
            assert_eq!(pattern.as_str().parse::<SeasonalPattern>(), Ok(pattern));
        }
        assert_eq!(SeasonalPattern::parse("winter"), None);
    }
}
