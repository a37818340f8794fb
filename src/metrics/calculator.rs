use super::{
    FuelEfficiencyMetrics, FuelMixEntry, MetricRatings, MetricsBundle, OperationalMetrics,
    ProfitabilityMetrics, ShopMetrics, VolumeMetrics,
};
use crate::benchmark::{classify, BenchmarkCategory};
use crate::config::BenchmarkTable;
use crate::core::{finite_or_zero, safe_div, FuelLine, PeriodRecord, Result};

/// Finite copy of the aggregate figures of a record
struct Figures {
    volume: f64,
    revenue: f64,
    cost: f64,
    shop_revenue: f64,
    shop_customers: f64,
    total_customers: f64,
    labor: f64,
    overhead: f64,
    fixed: f64,
    target_volume: f64,
    period_days: f64,
}

impl Figures {
    fn from_record(record: &PeriodRecord) -> Self {
        Self {
            volume: finite_or_zero(record.fuel_volume),
            revenue: finite_or_zero(record.fuel_revenue),
            cost: finite_or_zero(record.fuel_cost),
            shop_revenue: finite_or_zero(record.shop_revenue),
            shop_customers: finite_or_zero(record.shop_customers),
            total_customers: finite_or_zero(record.total_customers),
            labor: finite_or_zero(record.labor_cost),
            overhead: finite_or_zero(record.overhead),
            fixed: finite_or_zero(record.fixed_costs),
            target_volume: finite_or_zero(record.target_volume),
            period_days: finite_or_zero(record.period_days),
        }
    }
}

fn fuel_efficiency(f: &Figures) -> FuelEfficiencyMetrics {
    FuelEfficiencyMetrics {
        liters_per_rand: safe_div(f.volume, f.revenue),
        rand_per_liter: safe_div(f.revenue, f.volume),
        efficiency_ratio: safe_div(f.revenue - f.cost, f.volume),
    }
}

fn profitability(f: &Figures) -> ProfitabilityMetrics {
    let gross_profit = f.revenue - f.cost;
    let total_costs = f.cost + f.labor + f.overhead + f.fixed;
    let net_profit = f.revenue - total_costs;
    ProfitabilityMetrics {
        gross_profit,
        net_profit,
        gross_profit_margin: safe_div(gross_profit, f.revenue) * 100.0,
        net_profit_margin: safe_div(net_profit, f.revenue) * 100.0,
        total_costs,
    }
}

fn volume(f: &Figures) -> VolumeMetrics {
    VolumeMetrics {
        total_volume: f.volume,
        average_daily_volume: safe_div(f.volume, f.period_days),
        volume_efficiency: safe_div(f.volume, f.target_volume),
    }
}

fn shop(f: &Figures) -> ShopMetrics {
    ShopMetrics {
        shop_revenue: f.shop_revenue,
        shop_fuel_ratio: safe_div(f.shop_revenue, f.revenue),
        shop_conversion_rate: safe_div(f.shop_customers, f.total_customers) * 100.0,
        average_basket: safe_div(f.shop_revenue, f.shop_customers),
    }
}

fn operational(f: &Figures, contribution_margin_per_liter: f64) -> OperationalMetrics {
    OperationalMetrics {
        labor_cost_ratio: safe_div(f.labor, f.revenue) * 100.0,
        cost_per_liter: safe_div(f.labor + f.overhead + f.fixed, f.volume),
        contribution_margin_per_liter,
        break_even_volume: safe_div(f.fixed, contribution_margin_per_liter),
    }
}

/// Share and margin of each fuel grade, in input order
pub fn calculate_fuel_mix(lines: &[FuelLine]) -> Vec<FuelMixEntry> {
    let total_volume: f64 = lines.iter().map(|l| finite_or_zero(l.volume)).sum();

    lines
        .iter()
        .map(|line| {
            let volume = finite_or_zero(line.volume);
            FuelMixEntry {
                grade: line.grade,
                volume,
                volume_share: safe_div(volume, total_volume) * 100.0,
                margin_per_liter: safe_div(
                    finite_or_zero(line.revenue) - finite_or_zero(line.cost),
                    volume,
                ),
            }
        })
        .collect()
}

/// Derive the full metrics bundle for one period.
///
/// Fails only when `table` lacks one of the rated categories.
pub fn calculate_metrics(record: &PeriodRecord, table: &BenchmarkTable) -> Result<MetricsBundle> {
    if record.has_non_finite() {
        tracing::warn!("period record contains non-finite figures; treating them as 0");
    }

    let figures = Figures::from_record(record);
    let fuel_efficiency = fuel_efficiency(&figures);
    let profitability = profitability(&figures);
    let volume = volume(&figures);
    let shop = shop(&figures);
    let operational = operational(&figures, fuel_efficiency.efficiency_ratio);

    let ratings = MetricRatings {
        fuel_efficiency: classify(
            fuel_efficiency.efficiency_ratio,
            BenchmarkCategory::FuelEfficiency.as_str(),
            table,
        )?,
        profit_margin: classify(
            profitability.gross_profit_margin,
            BenchmarkCategory::ProfitMargin.as_str(),
            table,
        )?,
        shop_fuel_ratio: classify(
            shop.shop_fuel_ratio,
            BenchmarkCategory::ShopFuelRatio.as_str(),
            table,
        )?,
        volume_efficiency: classify(
            volume.volume_efficiency,
            BenchmarkCategory::VolumeEfficiency.as_str(),
            table,
        )?,
    };

    tracing::debug!(
        efficiency_ratio = fuel_efficiency.efficiency_ratio,
        gross_margin = profitability.gross_profit_margin,
        shop_fuel_ratio = shop.shop_fuel_ratio,
        "calculated period metrics"
    );

    Ok(MetricsBundle {
        fuel_efficiency,
        profitability,
        volume,
        shop,
        operational,
        fuel_mix: calculate_fuel_mix(&record.fuels),
        ratings,
    })
}
