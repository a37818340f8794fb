//! Per-period performance metrics.
//!
//! Every ratio is computed through `safe_div`, so a record of all zeros
//! produces a fully defined (if degenerate) bundle rather than an error.

pub mod calculator;

pub use calculator::{calculate_fuel_mix, calculate_metrics};

use crate::benchmark::Rating;
use crate::core::FuelGrade;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEfficiencyMetrics {
    pub liters_per_rand: f64,
    pub rand_per_liter: f64,
    /// Gross fuel margin per liter
    pub efficiency_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityMetrics {
    pub gross_profit: f64,
    pub net_profit: f64,
    /// Percent of fuel revenue
    pub gross_profit_margin: f64,
    /// Percent of fuel revenue
    pub net_profit_margin: f64,
    pub total_costs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeMetrics {
    pub total_volume: f64,
    pub average_daily_volume: f64,
    /// Achieved volume over target volume
    pub volume_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopMetrics {
    pub shop_revenue: f64,
    pub shop_fuel_ratio: f64,
    /// Percent of all customers who bought in the shop
    pub shop_conversion_rate: f64,
    pub average_basket: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalMetrics {
    /// Percent of fuel revenue
    pub labor_cost_ratio: f64,
    /// Non-fuel operating costs per liter sold
    pub cost_per_liter: f64,
    pub contribution_margin_per_liter: f64,
    /// Liters needed to cover fixed costs
    pub break_even_volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelMixEntry {
    pub grade: FuelGrade,
    pub volume: f64,
    /// Percent of the summed fuel line volume
    pub volume_share: f64,
    pub margin_per_liter: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRatings {
    pub fuel_efficiency: Rating,
    pub profit_margin: Rating,
    pub shop_fuel_ratio: Rating,
    pub volume_efficiency: Rating,
}

/// Everything derived from a single `PeriodRecord`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsBundle {
    pub fuel_efficiency: FuelEfficiencyMetrics,
    pub profitability: ProfitabilityMetrics,
    pub volume: VolumeMetrics,
    pub shop: ShopMetrics,
    pub operational: OperationalMetrics,
    pub fuel_mix: Vec<FuelMixEntry>,
    pub ratings: MetricRatings,
}
