use super::{prepare_series, TrendDetail, TrendDirection, TrendResult};
use crate::core::numeric::mean;
use crate::core::safe_div;

/// Compare the newest point with the mean of the last `period` points.
///
/// Strength is the relative distance `|last - mean| / mean`.
pub fn moving_average_trend(data: &[f64], period: usize) -> Option<TrendResult> {
    if period == 0 || data.len() < period {
        return None;
    }

    let values = prepare_series(data);
    let window = &values[values.len() - period..];
    let average = mean(window);
    let last = *window.last()?;

    Some(TrendResult {
        direction: TrendDirection::from_delta(last - average),
        strength: safe_div((last - average).abs(), average),
        detail: TrendDetail::MovingAverage { average, period },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_full_window() {
        assert!(moving_average_trend(&[1.0; 6], 7).is_none());
        assert!(moving_average_trend(&[1.0; 7], 7).is_some());
        assert!(moving_average_trend(&[1.0; 3], 0).is_none());
    }

    #[test]
    fn test_increasing_last_point() {
        // window mean = 12.5, last = 18
        let data = [100.0, 10.0, 10.0, 10.0, 12.0, 18.0];
        let result = moving_average_trend(&data, 4).unwrap();
        assert_eq!(result.direction, TrendDirection::Increasing);
        assert!((result.strength - 0.44).abs() < 1e-12);
        assert_eq!(
            result.detail,
            TrendDetail::MovingAverage {
                average: 12.5,
                period: 4
            }
        );
    }

    #[test]
    fn test_decreasing_last_point() {
        let data = [20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 8.0];
        let result = moving_average_trend(&data, 7).unwrap();
        assert!(result.is_decreasing());
        // mean = 128 / 7
        let mean = 128.0 / 7.0;
        assert!((result.strength - (mean - 8.0) / mean).abs() < 1e-12);
    }

    #[test]
    fn test_flat_window_reads_as_decreasing() {
        let result = moving_average_trend(&[5.0; 7], 7).unwrap();
        assert_eq!(result.direction, TrendDirection::Decreasing);
        assert_eq!(result.strength, 0.0);
    }

    #[test]
    fn test_zero_mean_is_guarded() {
        let result = moving_average_trend(&[0.0, 0.0, 0.0], 3).unwrap();
        assert_eq!(result.strength, 0.0);
        assert!(result.strength.is_finite());
    }
}
