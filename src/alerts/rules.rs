use super::{Alert, AlertRule};
use crate::config::{
    default_declining_trend, default_high_labor_cost, default_high_profit_margin,
    default_low_fuel_efficiency, default_low_shop_fuel_ratio, default_low_volume_efficiency,
    default_strong_growth,
};
use crate::core::finite_or_zero;
use crate::trends::TrendResult;

fn build(rule: AlertRule, triggered: bool, message: String, recommendation: &str) -> Alert {
    Alert {
        rule,
        triggered,
        severity: rule.severity(),
        message,
        recommendation: recommendation.to_string(),
    }
}

pub fn low_fuel_efficiency(efficiency: f64, threshold: Option<f64>) -> Alert {
    let threshold = threshold.unwrap_or_else(default_low_fuel_efficiency);
    let efficiency = finite_or_zero(efficiency);
    build(
        AlertRule::LowFuelEfficiency,
        efficiency < threshold,
        format!("Fuel margin per liter {efficiency:.2} is below the {threshold:.2} threshold"),
        "Review pump prices against supplier cost and check for wet-stock losses",
    )
}

pub fn high_profit_margin(margin: f64, threshold: Option<f64>) -> Alert {
    let threshold = threshold.unwrap_or_else(default_high_profit_margin);
    let margin = finite_or_zero(margin);
    build(
        AlertRule::HighProfitMargin,
        margin > threshold,
        format!("Gross profit margin {margin:.1}% is above {threshold:.1}%"),
        "Hold current pricing and consider reinvesting in forecourt promotions",
    )
}

pub fn low_shop_fuel_ratio(ratio: f64, threshold: Option<f64>) -> Alert {
    let threshold = threshold.unwrap_or_else(default_low_shop_fuel_ratio);
    let ratio = finite_or_zero(ratio);
    build(
        AlertRule::LowShopFuelRatio,
        ratio < threshold,
        format!("Shop revenue is {ratio:.2} of fuel revenue, below {threshold:.2}"),
        "Drive fuel customers into the shop with combo offers and visible signage",
    )
}

pub fn declining_trend(trend: &TrendResult, threshold: Option<f64>) -> Alert {
    let threshold = threshold.unwrap_or_else(default_declining_trend);
    build(
        AlertRule::DecliningTrend,
        trend.is_decreasing() && trend.strength > threshold,
        format!(
            "Performance is {} with strength {:.3} (threshold {threshold:.3})",
            trend.direction, trend.strength
        ),
        "Investigate recent volume loss: competitor pricing, road works or supply gaps",
    )
}

pub fn strong_growth(trend: &TrendResult, threshold: Option<f64>) -> Alert {
    let threshold = threshold.unwrap_or_else(default_strong_growth);
    build(
        AlertRule::StrongGrowth,
        trend.is_increasing() && trend.strength > threshold,
        format!(
            "Performance is {} with strength {:.3} (threshold {threshold:.3})",
            trend.direction, trend.strength
        ),
        "Check tank capacity and delivery schedules to sustain the higher demand",
    )
}

pub fn high_labor_cost(ratio: f64, threshold: Option<f64>) -> Alert {
    let threshold = threshold.unwrap_or_else(default_high_labor_cost);
    let ratio = finite_or_zero(ratio);
    build(
        AlertRule::HighLaborCost,
        ratio > threshold,
        format!("Labor cost is {ratio:.1}% of fuel revenue, above {threshold:.1}%"),
        "Align attendant rosters with hourly traffic patterns",
    )
}

pub fn low_volume_efficiency(efficiency: f64, threshold: Option<f64>) -> Alert {
    let threshold = threshold.unwrap_or_else(default_low_volume_efficiency);
    let efficiency = finite_or_zero(efficiency);
    build(
        AlertRule::LowVolumeEfficiency,
        efficiency < threshold,
        format!(
            "Volume reached {:.0}% of target, below {:.0}%",
            efficiency * 100.0,
            threshold * 100.0
        ),
        "Review local price positioning and fleet account activity",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use crate::trends::{TrendDetail, TrendDirection};

    fn trend(direction: TrendDirection, strength: f64) -> TrendResult {
        TrendResult {
            direction,
            strength,
            detail: TrendDetail::MovingAverage {
                average: 100.0,
                period: 7,
            },
        }
    }

    #[test]
    fn test_low_fuel_efficiency_default_threshold() {
        let alert = low_fuel_efficiency(0.3, None);
        assert!(alert.triggered);
        assert_eq!(alert.severity, Severity::High);
        assert!(!low_fuel_efficiency(0.9, None).triggered);
        assert!(!low_fuel_efficiency(0.6, None).triggered);
    }

    #[test]
    fn test_threshold_override() {
        assert!(low_fuel_efficiency(0.9, Some(1.0)).triggered);
        assert!(!high_profit_margin(25.0, Some(30.0)).triggered);
        assert!(high_labor_cost(12.0, Some(10.0)).triggered);
    }

    #[test]
    fn test_high_profit_margin_is_low_severity() {
        let alert = high_profit_margin(21.0, None);
        assert!(alert.triggered);
        assert_eq!(alert.severity, Severity::Low);
        assert!(!high_profit_margin(20.0, None).triggered);
    }

    #[test]
    fn test_shop_labor_and_volume_rules() {
        assert!(low_shop_fuel_ratio(0.1, None).triggered);
        assert_eq!(low_shop_fuel_ratio(0.1, None).severity, Severity::Medium);
        assert!(!low_shop_fuel_ratio(0.2, None).triggered);

        assert!(high_labor_cost(26.0, None).triggered);
        assert!(!high_labor_cost(25.0, None).triggered);

        let volume = low_volume_efficiency(0.5, None);
        assert!(volume.triggered);
        assert_eq!(volume.severity, Severity::Medium);
        assert_eq!(volume.message, "Volume reached 50% of target, below 70%");
    }

    #[test]
    fn test_trend_rules() {
        assert!(declining_trend(&trend(TrendDirection::Decreasing, 0.06), None).triggered);
        assert!(!declining_trend(&trend(TrendDirection::Decreasing, 0.05), None).triggered);
        assert!(!declining_trend(&trend(TrendDirection::Increasing, 0.5), None).triggered);

        assert!(strong_growth(&trend(TrendDirection::Increasing, 0.2), None).triggered);
        assert!(!strong_growth(&trend(TrendDirection::Increasing, 0.1), None).triggered);
        assert!(!strong_growth(&trend(TrendDirection::Decreasing, 0.5), None).triggered);
        assert_eq!(
            strong_growth(&trend(TrendDirection::Increasing, 0.2), None).severity,
            Severity::Low
        );
    }

    #[test]
    fn test_nan_value_reads_as_zero() {
        assert!(low_fuel_efficiency(f64::NAN, None).triggered);
        assert!(!high_labor_cost(f64::NAN, None).triggered);
    }
}
