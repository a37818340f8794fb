use serde::{Deserialize, Serialize};

use super::scoring::ScoringWeights;
use super::thresholds::{AlertThresholds, BenchmarkTable};
use crate::core::{Error, Result};

/// Longest forecast horizon accepted from configuration or the command line
pub const MAX_HORIZON: usize = 3650;

/// Window sizes used by trend detection and forecasting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSettings {
    #[serde(default = "default_moving_average_period")]
    pub moving_average_period: usize,

    #[serde(default = "default_seasonality_period")]
    pub seasonality_period: usize,

    /// Horizon used when the caller does not specify one
    #[serde(default = "default_horizon")]
    pub default_horizon: usize,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            moving_average_period: default_moving_average_period(),
            seasonality_period: default_seasonality_period(),
            default_horizon: default_horizon(),
        }
    }
}

impl TrendSettings {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.moving_average_period == 0 {
            errors.push("moving_average_period must be at least 1".to_string());
        }
        if self.seasonality_period == 0 {
            errors.push("seasonality_period must be at least 1".to_string());
        }
        if self.default_horizon > MAX_HORIZON {
            errors.push(format!(
                "default_horizon must be at most {MAX_HORIZON}, got {}",
                self.default_horizon
            ));
        }
        errors
    }
}

pub fn default_moving_average_period() -> usize {
    7
}
pub fn default_seasonality_period() -> usize {
    12
}
pub fn default_horizon() -> usize {
    6
}

/// Complete engine configuration, read once at startup.
///
/// ```toml
/// [alerts]
/// low_fuel_efficiency = 0.8
///
/// [scoring]
/// fuel_efficiency = 0.5
///
/// [trends]
/// moving_average_period = 14
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub benchmarks: BenchmarkTable,

    #[serde(default)]
    pub alerts: AlertThresholds,

    #[serde(default)]
    pub scoring: ScoringWeights,

    #[serde(default)]
    pub trends: TrendSettings,
}

impl EngineConfig {
    // Pure function: gather every validation message across sections
    pub fn collect_validation_errors(&self) -> Vec<String> {
        let mut errors = self.benchmarks.validate();
        errors.extend(self.alerts.validate());
        errors.extend(self.scoring.validate());
        errors.extend(self.trends.validate());
        errors
    }

    /// Reject configurations that would make the engine misbehave
    pub fn validate(&self) -> Result<()> {
        let errors = self.collect_validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors.join("; ")))
        }
    }

    /// Render as TOML for `forecourt init`
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("Failed to serialize config: {e}")))
    }
}
