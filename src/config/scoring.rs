//! Scoring configuration for the overall site score
//!
//! Each rated category contributes `points * weight` to the score, where
//! points come from the category rating (excellent 10, good 8, average 6,
//! poor 3).

use crate::benchmark::BenchmarkCategory;
use serde::{Deserialize, Serialize};

/// Per-category weights used by `AnalyticsEngine::score_metrics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_fuel_efficiency_weight")]
    pub fuel_efficiency: f64,

    #[serde(default = "default_profit_margin_weight")]
    pub profit_margin: f64,

    #[serde(default = "default_shop_fuel_ratio_weight")]
    pub shop_fuel_ratio: f64,

    #[serde(default = "default_volume_efficiency_weight")]
    pub volume_efficiency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            fuel_efficiency: default_fuel_efficiency_weight(),
            profit_margin: default_profit_margin_weight(),
            shop_fuel_ratio: default_shop_fuel_ratio_weight(),
            volume_efficiency: default_volume_efficiency_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: a weight must be finite and non-negative
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    pub fn weight_for(&self, category: BenchmarkCategory) -> f64 {
        match category {
            BenchmarkCategory::FuelEfficiency => self.fuel_efficiency,
            BenchmarkCategory::ProfitMargin => self.profit_margin,
            BenchmarkCategory::ShopFuelRatio => self.shop_fuel_ratio,
            BenchmarkCategory::VolumeEfficiency => self.volume_efficiency,
        }
    }

    pub fn total(&self) -> f64 {
        BenchmarkCategory::ALL
            .iter()
            .map(|&c| self.weight_for(c))
            .sum()
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors: Vec<String> = BenchmarkCategory::ALL
            .iter()
            .filter(|&&c| !Self::is_valid_weight(self.weight_for(c)))
            .map(|c| format!("{c} weight must be a non-negative number"))
            .collect();

        if errors.is_empty() && self.total() <= 0.0 {
            errors.push("at least one scoring weight must be positive".to_string());
        }

        errors
    }
}

pub fn default_fuel_efficiency_weight() -> f64 {
    0.4
}
pub fn default_profit_margin_weight() -> f64 {
    0.3
}
pub fn default_shop_fuel_ratio_weight() -> f64 {
    0.2
}
pub fn default_volume_efficiency_weight() -> f64 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-12);
        assert!(weights.validate().is_empty());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            shop_fuel_ratio: -0.2,
            ..ScoringWeights::default()
        };
        let errors = weights.validate();
        assert_eq!(errors, vec!["shop_fuel_ratio weight must be a non-negative number"]);
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let weights = ScoringWeights {
            fuel_efficiency: 0.0,
            profit_margin: 0.0,
            shop_fuel_ratio: 0.0,
            volume_efficiency: 0.0,
        };
        assert_eq!(weights.validate().len(), 1);
    }
}
