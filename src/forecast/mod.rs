//! Short-horizon projections of a historical series.
//!
//! Three interchangeable methods. Each returns exactly `horizon`
//! non-negative points, or `None` when its history requirement is not met.

mod projection;

pub use projection::{linear_regression_forecast, moving_average_forecast, seasonal_forecast};

use crate::config::TrendSettings;
use crate::trends::detect_seasonality;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    MovingAverage,
    LinearRegression,
    Seasonal,
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MovingAverage => write!(f, "moving_average"),
            Self::LinearRegression => write!(f, "linear_regression"),
            Self::Seasonal => write!(f, "seasonal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast: Vec<f64>,
    pub method: ForecastMethod,
    /// At most 1.0; regression based methods carry R² and may go below 0
    pub confidence: f64,
}

impl ForecastResult {
    pub fn horizon(&self) -> usize {
        self.forecast.len()
    }

    pub fn mean(&self) -> f64 {
        crate::core::numeric::mean(&self.forecast)
    }
}

/// Output of `generate_forecasts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSet {
    pub moving_average: Option<ForecastResult>,
    pub linear_regression: Option<ForecastResult>,
    /// Present only when seasonality was detected
    pub seasonal: Option<ForecastResult>,
}

/// Run every method with the configured windows
pub fn generate_forecasts(data: &[f64], horizon: usize, settings: &TrendSettings) -> ForecastSet {
    let seasonality = detect_seasonality(data, settings.seasonality_period);
    let set = ForecastSet {
        moving_average: moving_average_forecast(data, settings.moving_average_period, horizon),
        linear_regression: linear_regression_forecast(data, horizon),
        seasonal: seasonality
            .as_ref()
            .and_then(|s| seasonal_forecast(data, s, horizon)),
    };
    tracing::debug!(
        points = data.len(),
        horizon,
        seasonal = set.seasonal.is_some(),
        "generated forecasts"
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_forecasts_linear_series() {
        let set = generate_forecasts(
            &[100.0, 200.0, 300.0, 400.0, 500.0],
            6,
            &TrendSettings::default(),
        );
        assert!(set.moving_average.is_none());
        assert!(set.seasonal.is_none());

        let lr = set.linear_regression.unwrap();
        assert_eq!(lr.horizon(), 6);
        assert!((lr.forecast[0] - 600.0).abs() < 1e-9);
        assert!((lr.confidence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_generate_forecasts_seasonal_present_with_two_cycles() {
        let data: Vec<f64> = (0..24).map(|i| 100.0 + (i % 12) as f64 * 5.0).collect();
        let set = generate_forecasts(&data, 3, &TrendSettings::default());
        assert!(set.moving_average.is_some());
        let seasonal = set.seasonal.unwrap();
        assert_eq!(seasonal.method, ForecastMethod::Seasonal);
        assert_eq!(seasonal.horizon(), 3);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(ForecastMethod::LinearRegression.to_string(), "linear_regression");
    }
}
