use serde::{Deserialize, Serialize};

use super::{prepare_series, TrendDetail, TrendDirection, TrendResult};

/// Ordinary least squares fit of `y = slope * x + intercept` over `x = 0..n`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, unclamped: poor fits go negative
    pub r_squared: f64,
    /// Number of points fitted
    pub points: usize,
}

impl RegressionFit {
    /// Value of the fitted line at position `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Closed-form least squares fit; `None` for fewer than two points
pub fn fit_linear_regression(data: &[f64]) -> Option<RegressionFit> {
    if data.len() < 2 {
        return None;
    }

    let values = prepare_series(data);
    let n = values.len() as f64;

    let (sum_x, sum_y, sum_xy, sum_x2) = values.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), (i, &y)| {
            let x = i as f64;
            (sx + x, sy + y, sxy + x * y, sx2 + x * x)
        },
    );

    // n >= 2 with distinct x positions keeps this strictly positive
    let denominator = n * sum_x2 - sum_x * sum_x;
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let (ss_res, ss_tot) = values.iter().enumerate().fold((0.0, 0.0), |(res, tot), (i, &y)| {
        let predicted = slope * i as f64 + intercept;
        (res + (y - predicted).powi(2), tot + (y - mean_y).powi(2))
    });

    // A constant series is fitted exactly by the flat line
    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Some(RegressionFit {
        slope,
        intercept,
        r_squared,
        points: values.len(),
    })
}

/// Direction from the sign of the fitted slope, strength `|slope|`
pub fn linear_regression_trend(data: &[f64]) -> Option<TrendResult> {
    let fit = fit_linear_regression(data)?;
    Some(TrendResult {
        direction: TrendDirection::from_delta(fit.slope),
        strength: fit.slope.abs(),
        detail: TrendDetail::LinearRegression(fit),
    })
}
