//! Threshold alerts over period metrics and trends.
//!
//! Each rule is a pure function of one value and an optional threshold
//! override. `evaluate_alerts` runs every enabled rule in declaration
//! order and keeps only the triggered ones.

pub mod rules;

pub use rules::{
    declining_trend, high_labor_cost, high_profit_margin, low_fuel_efficiency,
    low_shop_fuel_ratio, low_volume_efficiency, strong_growth,
};

use crate::config::AlertThresholds;
use crate::core::Severity;
use crate::metrics::MetricsBundle;
use crate::trends::TrendResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert rules in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertRule {
    LowFuelEfficiency,
    HighProfitMargin,
    LowShopFuelRatio,
    DecliningTrend,
    StrongGrowth,
    HighLaborCost,
    LowVolumeEfficiency,
}

impl AlertRule {
    pub const ALL: [AlertRule; 7] = [
        Self::LowFuelEfficiency,
        Self::HighProfitMargin,
        Self::LowShopFuelRatio,
        Self::DecliningTrend,
        Self::StrongGrowth,
        Self::HighLaborCost,
        Self::LowVolumeEfficiency,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LowFuelEfficiency => "low_fuel_efficiency",
            Self::HighProfitMargin => "high_profit_margin",
            Self::LowShopFuelRatio => "low_shop_fuel_ratio",
            Self::DecliningTrend => "declining_trend",
            Self::StrongGrowth => "strong_growth",
            Self::HighLaborCost => "high_labor_cost",
            Self::LowVolumeEfficiency => "low_volume_efficiency",
        }
    }

    /// Fixed severity of the rule
    pub const fn severity(&self) -> Severity {
        match self {
            Self::LowFuelEfficiency | Self::HighLaborCost => Severity::High,
            Self::LowShopFuelRatio | Self::DecliningTrend | Self::LowVolumeEfficiency => {
                Severity::Medium
            }
            Self::HighProfitMargin | Self::StrongGrowth => Severity::Low,
        }
    }
}

impl fmt::Display for AlertRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub rule: AlertRule,
    pub triggered: bool,
    pub severity: Severity,
    pub message: String,
    pub recommendation: String,
}

/// Evaluate all enabled rules and return the triggered alerts.
///
/// Trend rules only run when a trend is supplied.
pub fn evaluate_alerts(
    metrics: &MetricsBundle,
    trend: Option<&TrendResult>,
    thresholds: &AlertThresholds,
) -> Vec<Alert> {
    let threshold = |rule: AlertRule| Some(thresholds.threshold_for(rule));

    let alerts: Vec<Alert> = AlertRule::ALL
        .iter()
        .filter(|&&rule| thresholds.is_enabled(rule))
        .filter_map(|&rule| match rule {
            AlertRule::LowFuelEfficiency => Some(low_fuel_efficiency(
                metrics.fuel_efficiency.efficiency_ratio,
                threshold(rule),
            )),
            AlertRule::HighProfitMargin => Some(high_profit_margin(
                metrics.profitability.gross_profit_margin,
                threshold(rule),
            )),
            AlertRule::LowShopFuelRatio => Some(low_shop_fuel_ratio(
                metrics.shop.shop_fuel_ratio,
                threshold(rule),
            )),
            AlertRule::DecliningTrend => trend.map(|t| declining_trend(t, threshold(rule))),
            AlertRule::StrongGrowth => trend.map(|t| strong_growth(t, threshold(rule))),
            AlertRule::HighLaborCost => Some(high_labor_cost(
                metrics.operational.labor_cost_ratio,
                threshold(rule),
            )),
            AlertRule::LowVolumeEfficiency => Some(low_volume_efficiency(
                metrics.volume.volume_efficiency,
                threshold(rule),
            )),
        })
        .filter(|alert| alert.triggered)
        .collect();

    tracing::debug!(triggered = alerts.len(), "evaluated alert rules");
    alerts
}
