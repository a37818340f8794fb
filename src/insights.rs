//! Qualitative insights composed from metrics, trends and forecasts.

use crate::benchmark::Rating;
use crate::core::Severity;
use crate::forecast::ForecastSet;
use crate::metrics::MetricsBundle;
use crate::trends::{TrendAnalysis, TrendDirection};
use serde::{Deserialize, Serialize};

/// Seasonality strength above which a pattern is worth reporting
const NOTABLE_SEASONALITY: f64 = 0.2;

/// Forecast confidence below which projections are flagged as unreliable
const RELIABLE_FORECAST: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Efficiency,
    Profitability,
    Shop,
    Volume,
    Trend,
    Seasonality,
    Forecast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Insight {
    fn new(
        category: InsightCategory,
        severity: Severity,
        title: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

fn rating_insights(metrics: &MetricsBundle) -> Vec<Insight> {
    let mut insights = Vec::new();
    let ratings = &metrics.ratings;

    match ratings.fuel_efficiency {
        Rating::Poor => insights.push(Insight::new(
            InsightCategory::Efficiency,
            Severity::High,
            "Fuel margin below benchmark",
            format!(
                "Gross margin of {:.2} per liter rates poor",
                metrics.fuel_efficiency.efficiency_ratio
            ),
        )),
        Rating::Excellent => insights.push(Insight::new(
            InsightCategory::Efficiency,
            Severity::Low,
            "Excellent fuel margin",
            format!(
                "Gross margin of {:.2} per liter rates excellent",
                metrics.fuel_efficiency.efficiency_ratio
            ),
        )),
        Rating::Average | Rating::Good => {}
    }

    match ratings.profit_margin {
        Rating::Poor => insights.push(Insight::new(
            InsightCategory::Profitability,
            Severity::High,
            "Thin profit margin",
            format!(
                "Gross profit margin of {:.1}% rates poor",
                metrics.profitability.gross_profit_margin
            ),
        )),
        Rating::Excellent => insights.push(Insight::new(
            InsightCategory::Profitability,
            Severity::Low,
            "Excellent profit margin",
            format!(
                "Gross profit margin of {:.1}% rates excellent",
                metrics.profitability.gross_profit_margin
            ),
        )),
        Rating::Average | Rating::Good => {}
    }

    if ratings.shop_fuel_ratio == Rating::Poor {
        insights.push(Insight::new(
            InsightCategory::Shop,
            Severity::Medium,
            "Shop underperforming",
            format!(
                "Shop revenue is only {:.2} of fuel revenue",
                metrics.shop.shop_fuel_ratio
            ),
        ));
    }

    if ratings.volume_efficiency == Rating::Poor {
        insights.push(Insight::new(
            InsightCategory::Volume,
            Severity::Medium,
            "Volume well below target",
            format!(
                "Only {:.0}% of target volume was sold",
                metrics.volume.volume_efficiency * 100.0
            ),
        ));
    }

    insights
}

fn trend_insights(trends: &TrendAnalysis) -> Vec<Insight> {
    let mut insights = Vec::new();

    // a flat fit has no direction worth reporting
    if let Some(trend) = trends.linear_regression.as_ref().filter(|t| t.strength > 0.0) {
        match trend.direction {
            TrendDirection::Decreasing => insights.push(Insight::new(
                InsightCategory::Trend,
                Severity::Medium,
                "Long-run decline",
                format!("History declines by {:.2} per period", trend.strength),
            )),
            TrendDirection::Increasing => insights.push(Insight::new(
                InsightCategory::Trend,
                Severity::Low,
                "Long-run growth",
                format!("History grows by {:.2} per period", trend.strength),
            )),
        }
    }

    if let Some(seasonality) = &trends.seasonality {
        if seasonality.strength > NOTABLE_SEASONALITY {
            insights.push(Insight::new(
                InsightCategory::Seasonality,
                Severity::Low,
                "Seasonal pattern",
                format!(
                    "Demand peaks at phase {} of a {}-period cycle (strength {:.2})",
                    seasonality.dominant_period, seasonality.period, seasonality.strength
                ),
            ));
        }
    }

    insights
}

fn forecast_insights(forecasts: &ForecastSet) -> Vec<Insight> {
    forecasts
        .linear_regression
        .iter()
        .filter(|f| f.confidence < RELIABLE_FORECAST)
        .map(|f| {
            Insight::new(
                InsightCategory::Forecast,
                Severity::Low,
                "Low forecast confidence",
                format!(
                    "Linear projection explains little of the history (R² {:.2})",
                    f.confidence
                ),
            )
        })
        .collect()
}

/// Rule-based insights, ordered: ratings, trends, forecasts
pub fn generate_insights(
    metrics: &MetricsBundle,
    trends: &TrendAnalysis,
    forecasts: &ForecastSet,
) -> Vec<Insight> {
    let mut insights = rating_insights(metrics);
    insights.extend(trend_insights(trends));
    insights.extend(forecast_insights(forecasts));
    insights
}
