use crate::alerts::AlertRule;
use crate::benchmark::BenchmarkCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ascending cutoffs for one benchmark category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingThresholds {
    pub poor: f64,
    pub good: f64,
    pub excellent: f64,
}

impl RatingThresholds {
    pub const fn new(poor: f64, good: f64, excellent: f64) -> Self {
        Self {
            poor,
            good,
            excellent,
        }
    }

    // Pure function: cutoffs must be finite and ascending
    pub fn validate(&self, name: &str) -> Result<(), String> {
        let all_finite =
            self.poor.is_finite() && self.good.is_finite() && self.excellent.is_finite();
        if !all_finite {
            return Err(format!("{name} thresholds must be finite numbers"));
        }
        if self.poor > self.good || self.good > self.excellent {
            return Err(format!(
                "{name} thresholds must be ascending (poor <= good <= excellent), got {} / {} / {}",
                self.poor, self.good, self.excellent
            ));
        }
        Ok(())
    }
}

/// Benchmark threshold table keyed by category name.
///
/// Kept as a string-keyed map so a table loaded from TOML may omit a
/// category; classifying against a missing one is a configuration error.
///
/// ```toml
/// [benchmarks.fuel_efficiency]
/// poor = 0.5
/// good = 1.0
/// excellent = 1.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable {
    categories: BTreeMap<String, RatingThresholds>,
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        BenchmarkCategory::ALL
            .iter()
            .map(|&category| (category, default_thresholds(category)))
            .collect()
    }
}

impl FromIterator<(BenchmarkCategory, RatingThresholds)> for BenchmarkTable {
    fn from_iter<I: IntoIterator<Item = (BenchmarkCategory, RatingThresholds)>>(iter: I) -> Self {
        Self {
            categories: iter
                .into_iter()
                .map(|(category, thresholds)| (category.as_str().to_string(), thresholds))
                .collect(),
        }
    }
}

impl BenchmarkTable {
    /// Table with no categories at all
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    pub fn get(&self, category: &str) -> Option<&RatingThresholds> {
        self.categories.get(category)
    }

    pub fn insert(&mut self, category: impl Into<String>, thresholds: RatingThresholds) {
        self.categories.insert(category.into(), thresholds);
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &RatingThresholds)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn validate(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter_map(|(name, t)| t.validate(name).err())
            .collect()
    }
}

pub fn default_thresholds(category: BenchmarkCategory) -> RatingThresholds {
    match category {
        // Gross margin in currency per liter
        BenchmarkCategory::FuelEfficiency => RatingThresholds::new(0.5, 1.0, 1.5),
        // Percent
        BenchmarkCategory::ProfitMargin => RatingThresholds::new(5.0, 15.0, 25.0),
        BenchmarkCategory::ShopFuelRatio => RatingThresholds::new(0.1, 0.2, 0.3),
        // Fraction of target volume achieved
        BenchmarkCategory::VolumeEfficiency => RatingThresholds::new(0.6, 0.8, 0.95),
    }
}

/// Default trigger points for the alert rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    #[serde(default = "default_low_fuel_efficiency")]
    pub low_fuel_efficiency: f64,

    #[serde(default = "default_high_profit_margin")]
    pub high_profit_margin: f64,

    #[serde(default = "default_low_shop_fuel_ratio")]
    pub low_shop_fuel_ratio: f64,

    /// Minimum relative strength of a decreasing moving-average trend
    #[serde(default = "default_declining_trend")]
    pub declining_trend: f64,

    /// Minimum relative strength of an increasing moving-average trend
    #[serde(default = "default_strong_growth")]
    pub strong_growth: f64,

    /// Labor cost as percent of fuel revenue
    #[serde(default = "default_high_labor_cost")]
    pub high_labor_cost: f64,

    #[serde(default = "default_low_volume_efficiency")]
    pub low_volume_efficiency: f64,

    /// Rules that are never evaluated
    #[serde(default)]
    pub disabled_rules: Vec<AlertRule>,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            low_fuel_efficiency: default_low_fuel_efficiency(),
            high_profit_margin: default_high_profit_margin(),
            low_shop_fuel_ratio: default_low_shop_fuel_ratio(),
            declining_trend: default_declining_trend(),
            strong_growth: default_strong_growth(),
            high_labor_cost: default_high_labor_cost(),
            low_volume_efficiency: default_low_volume_efficiency(),
            disabled_rules: Vec::new(),
        }
    }
}

impl AlertThresholds {
    pub fn threshold_for(&self, rule: AlertRule) -> f64 {
        match rule {
            AlertRule::LowFuelEfficiency => self.low_fuel_efficiency,
            AlertRule::HighProfitMargin => self.high_profit_margin,
            AlertRule::LowShopFuelRatio => self.low_shop_fuel_ratio,
            AlertRule::DecliningTrend => self.declining_trend,
            AlertRule::StrongGrowth => self.strong_growth,
            AlertRule::HighLaborCost => self.high_labor_cost,
            AlertRule::LowVolumeEfficiency => self.low_volume_efficiency,
        }
    }

    pub fn is_enabled(&self, rule: AlertRule) -> bool {
        !self.disabled_rules.contains(&rule)
    }

    pub fn validate(&self) -> Vec<String> {
        AlertRule::ALL
            .iter()
            .filter(|&&rule| !self.threshold_for(rule).is_finite())
            .map(|rule| format!("alert threshold for {rule} must be a finite number"))
            .collect()
    }
}

pub fn default_low_fuel_efficiency() -> f64 {
    0.6
}
pub fn default_high_profit_margin() -> f64 {
    20.0
}
pub fn default_low_shop_fuel_ratio() -> f64 {
    0.2
}
pub fn default_declining_trend() -> f64 {
    0.05
}
pub fn default_strong_growth() -> f64 {
    0.1
}
pub fn default_high_labor_cost() -> f64 {
    25.0
}
pub fn default_low_volume_efficiency() -> f64 {
    0.7
}
