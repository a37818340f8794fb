//! Trend detection over historical series (oldest value first).
//!
//! Every detector returns `None` when the series is too short for its
//! window. `None` means "no trend determinable" and must never be read as
//! a flat trend.

pub mod moving_average;
pub mod regression;
pub mod seasonality;

pub use moving_average::moving_average_trend;
pub use regression::{fit_linear_regression, linear_regression_trend, RegressionFit};
pub use seasonality::{detect_seasonality, SeasonalityResult};

use crate::config::TrendSettings;
use crate::core::sanitize_series;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

impl TrendDirection {
    /// Increasing only for a strictly positive `delta`; zero reads as decreasing
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Increasing
        } else {
            Self::Decreasing
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increasing => write!(f, "increasing"),
            Self::Decreasing => write!(f, "decreasing"),
        }
    }
}

/// Method-specific data attached to a trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum TrendDetail {
    MovingAverage { average: f64, period: usize },
    LinearRegression(RegressionFit),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Non-negative magnitude; relative for moving average, |slope| for regression
    pub strength: f64,
    #[serde(flatten)]
    pub detail: TrendDetail,
}

impl TrendResult {
    pub fn is_decreasing(&self) -> bool {
        self.direction == TrendDirection::Decreasing
    }

    pub fn is_increasing(&self) -> bool {
        self.direction == TrendDirection::Increasing
    }

    pub fn regression_fit(&self) -> Option<&RegressionFit> {
        match &self.detail {
            TrendDetail::LinearRegression(fit) => Some(fit),
            TrendDetail::MovingAverage { .. } => None,
        }
    }
}

/// Output of `analyze_trends`; each member is `None` on short history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub moving_average: Option<TrendResult>,
    pub linear_regression: Option<TrendResult>,
    pub seasonality: Option<SeasonalityResult>,
}

/// Run all three detectors with the configured windows
pub fn analyze_trends(data: &[f64], settings: &TrendSettings) -> TrendAnalysis {
    let analysis = TrendAnalysis {
        moving_average: moving_average_trend(data, settings.moving_average_period),
        linear_regression: linear_regression_trend(data),
        seasonality: detect_seasonality(data, settings.seasonality_period),
    };
    tracing::debug!(
        points = data.len(),
        moving_average = analysis.moving_average.is_some(),
        linear_regression = analysis.linear_regression.is_some(),
        seasonality = analysis.seasonality.is_some(),
        "analyzed trends"
    );
    analysis
}

/// Sanitize a series and log when points had to be replaced
pub(crate) fn prepare_series(data: &[f64]) -> Vec<f64> {
    let (values, replaced) = sanitize_series(data);
    if replaced > 0 {
        tracing::warn!(replaced, "series contains non-finite points; treating them as 0");
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(TrendDirection::from_delta(0.1), TrendDirection::Increasing);
        assert_eq!(TrendDirection::from_delta(-0.1), TrendDirection::Decreasing);
        assert_eq!(TrendDirection::from_delta(0.0), TrendDirection::Decreasing);
    }

    #[test]
    fn test_analyze_trends_short_history() {
        let analysis = analyze_trends(&[1.0, 2.0, 3.0], &TrendSettings::default());
        assert!(analysis.moving_average.is_none());
        assert!(analysis.linear_regression.is_some());
        assert!(analysis.seasonality.is_none());
    }

    #[test]
    fn test_analyze_trends_empty_history() {
        let analysis = analyze_trends(&[], &TrendSettings::default());
        assert_eq!(analysis, TrendAnalysis::default());
    }

    #[test]
    fn test_trend_result_serializes_method_tag() {
        let result = moving_average_trend(&[1.0, 1.0, 1.0, 4.0], 4).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["method"], "moving_average");
        assert_eq!(json["direction"], "increasing");
        assert_eq!(json["period"], 4);
    }
}
