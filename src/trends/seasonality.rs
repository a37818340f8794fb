use serde::{Deserialize, Serialize};

use super::prepare_series;
use crate::core::numeric::mean;
use crate::core::safe_div;

/// Repeating pattern found in a series with a known cycle length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityResult {
    /// Cycle length in periods
    pub period: usize,
    /// Mean value at each phase of the cycle
    pub seasonal_factors: Vec<f64>,
    /// Seasonal factors relative to the overall mean
    pub seasonality_index: Vec<f64>,
    /// `(max - min) / max` over the index
    pub strength: f64,
    /// Phase with the highest index
    pub dominant_period: usize,
}

impl SeasonalityResult {
    /// Index for the phase of `position`; `None` for a malformed result
    pub fn index_at(&self, position: usize) -> Option<f64> {
        if self.period == 0 {
            return None;
        }
        self.seasonality_index.get(position % self.period).copied()
    }
}

/// Phase-average seasonality; needs at least two full cycles of data
pub fn detect_seasonality(data: &[f64], period: usize) -> Option<SeasonalityResult> {
    if period == 0 || data.len() < 2 * period {
        return None;
    }

    let values = prepare_series(data);
    let overall_mean = mean(&values);

    let seasonal_factors: Vec<f64> = (0..period)
        .map(|phase| {
            let phase_values: Vec<f64> = values
                .iter()
                .skip(phase)
                .step_by(period)
                .copied()
                .collect();
            mean(&phase_values)
        })
        .collect();

    let seasonality_index: Vec<f64> = seasonal_factors
        .iter()
        .map(|&factor| safe_div(factor, overall_mean))
        .collect();

    let (dominant_period, max) = seasonality_index.iter().copied().enumerate().fold(
        (0, f64::NEG_INFINITY),
        |(best, best_value), (phase, value)| {
            if value > best_value {
                (phase, value)
            } else {
                (best, best_value)
            }
        },
    );
    let min = seasonality_index
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);

    Some(SeasonalityResult {
        period,
        seasonal_factors,
        seasonality_index,
        strength: safe_div(max - min, max),
        dominant_period,
    })
}
