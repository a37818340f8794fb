use super::{ForecastMethod, ForecastResult};
use crate::core::numeric::{mean, variance};
use crate::core::{safe_div, sanitize_series};
use crate::trends::{fit_linear_regression, SeasonalityResult};

/// Flat carry of the mean of the last `period` points.
///
/// Confidence is `max(0, 1 - variance / mean²)` over the same window.
pub fn moving_average_forecast(
    data: &[f64],
    period: usize,
    horizon: usize,
) -> Option<ForecastResult> {
    if period == 0 || data.len() < period {
        return None;
    }

    let (values, _) = sanitize_series(&data[data.len() - period..]);
    let average = mean(&values);
    let spread = variance(&values, average);
    let confidence = (1.0 - safe_div(spread, average * average)).max(0.0);

    Some(ForecastResult {
        forecast: vec![average.max(0.0); horizon],
        method: ForecastMethod::MovingAverage,
        confidence,
    })
}

/// Extend the least squares line `horizon` steps past the last point.
///
/// Projected values below zero are clamped to zero. Confidence is the
/// fit's raw R².
pub fn linear_regression_forecast(data: &[f64], horizon: usize) -> Option<ForecastResult> {
    let fit = fit_linear_regression(data)?;
    let n = fit.points;

    let forecast = (1..=horizon)
        .map(|i| fit.predict((n + i - 1) as f64).max(0.0))
        .collect();

    Some(ForecastResult {
        forecast,
        method: ForecastMethod::LinearRegression,
        confidence: fit.r_squared,
    })
}

/// Regression forecast scaled by the seasonal index of each projected
/// point. Phases count from the first projected point, so point `i` uses
/// `seasonality_index[i % period]`.
pub fn seasonal_forecast(
    data: &[f64],
    seasonality: &SeasonalityResult,
    horizon: usize,
) -> Option<ForecastResult> {
    if seasonality.period == 0 || seasonality.seasonality_index.len() != seasonality.period {
        return None;
    }
    let base = linear_regression_forecast(data, horizon)?;

    let forecast = base
        .forecast
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            seasonality
                .index_at(i)
                .map(|index| (value * index).max(0.0))
        })
        .collect::<Option<Vec<f64>>>()?;

    Some(ForecastResult {
        forecast,
        method: ForecastMethod::Seasonal,
        confidence: base.confidence * seasonality.strength,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::detect_seasonality;

    #[test]
    fn test_moving_average_forecast_is_flat() {
        let data = [1.0, 2.0, 10.0, 10.0, 10.0, 10.0];
        let result = moving_average_forecast(&data, 4, 5).unwrap();
        assert_eq!(result.forecast, vec![10.0; 5]);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.method, ForecastMethod::MovingAverage);
    }

    #[test]
    fn test_moving_average_confidence_from_variance() {
        // mean 10, variance 4 -> 1 - 4/100
        let data = [8.0, 12.0, 8.0, 12.0];
        let result = moving_average_forecast(&data, 4, 1).unwrap();
        assert!((result.confidence - 0.96).abs() < 1e-12);
    }

    #[test]
    fn test_moving_average_confidence_floor() {
        let data = [0.0, 0.0, 0.0, 40.0];
        let result = moving_average_forecast(&data, 4, 2).unwrap();
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_moving_average_insufficient() {
        assert!(moving_average_forecast(&[1.0, 2.0], 7, 3).is_none());
    }

    #[test]
    fn test_regression_forecast_continues_line() {
        let result = linear_regression_forecast(&[100.0, 200.0, 300.0, 400.0, 500.0], 6).unwrap();
        assert_eq!(result.forecast, vec![600.0, 700.0, 800.0, 900.0, 1000.0, 1100.0]);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_regression_forecast_clamps_at_zero() {
        let result = linear_regression_forecast(&[30.0, 20.0, 10.0], 3).unwrap();
        assert_eq!(result.forecast, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        let result = linear_regression_forecast(&[1.0, 2.0], 0).unwrap();
        assert!(result.forecast.is_empty());
    }

    #[test]
    fn test_seasonal_forecast_scales_by_phase() {
        // flat level 20 with a four-phase pattern
        let data = [10.0, 20.0, 40.0, 10.0, 10.0, 20.0, 40.0, 10.0];
        let seasonality = detect_seasonality(&data, 4).unwrap();
        let base = linear_regression_forecast(&data, 4).unwrap();
        let result = seasonal_forecast(&data, &seasonality, 4).unwrap();

        assert_eq!(result.forecast.len(), 4);
        for (i, value) in result.forecast.iter().enumerate() {
            let expected = base.forecast[i] * seasonality.seasonality_index[i % 4];
            assert!((value - expected).abs() < 1e-9);
        }
        assert!((result.confidence - base.confidence * 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_seasonal_phase_starts_at_first_projected_point() {
        // ten points, period 4: history ends mid-cycle
        let data = [10.0, 20.0, 40.0, 10.0, 10.0, 20.0, 40.0, 10.0, 10.0, 20.0];
        let seasonality = detect_seasonality(&data, 4).unwrap();
        let base = linear_regression_forecast(&data, 4).unwrap();
        let result = seasonal_forecast(&data, &seasonality, 4).unwrap();

        let expected: Vec<f64> = base
            .forecast
            .iter()
            .zip(&seasonality.seasonality_index)
            .map(|(value, index)| value * index)
            .collect();
        assert_eq!(result.forecast.len(), expected.len());
        for (got, want) in result.forecast.iter().zip(&expected) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
        // phase 2 carries the peak regardless of where the history stopped
        let peak = result
            .forecast
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, v)| {
                if v > best.1 {
                    (i, v)
                } else {
                    best
                }
            });
        assert_eq!(peak.0, 2);
    }

    #[test]
    fn test_seasonal_forecast_rejects_short_index() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let seasonality = SeasonalityResult {
            period: 4,
            seasonal_factors: vec![1.0, 1.0],
            seasonality_index: vec![1.0, 1.0],
            strength: 0.0,
            dominant_period: 0,
        };
        assert!(seasonal_forecast(&data, &seasonality, 3).is_none());
    }
}
