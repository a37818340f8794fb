//! Explicitly constructed analytics engine.
//!
//! The engine owns a validated, immutable `EngineConfig`. All operations
//! are pure functions of their arguments plus that configuration, so one
//! engine can be shared freely across threads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug_span;

use crate::alerts::{evaluate_alerts, Alert};
use crate::benchmark::{
    self, BenchmarkCategory, BenchmarkScore, CompetitivePosition, Rating, WeightedMetric,
};
use crate::config::EngineConfig;
use crate::core::{PeriodRecord, Result};
use crate::forecast::{self, ForecastSet};
use crate::insights::{self, Insight};
use crate::metrics::{self, MetricsBundle};
use crate::trends::{self, TrendAnalysis};

/// Everything produced for one analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: MetricsBundle,
    pub trends: TrendAnalysis,
    pub forecasts: ForecastSet,
    pub alerts: Vec<Alert>,
    pub insights: Vec<Insight>,
    pub score: BenchmarkScore,
}

#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    config: EngineConfig,
}

impl AnalyticsEngine {
    /// Validate `config` and build an engine around it
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn calculate_metrics(&self, record: &PeriodRecord) -> Result<MetricsBundle> {
        metrics::calculate_metrics(record, &self.config.benchmarks)
    }

    pub fn analyze_trends(&self, history: &[f64]) -> TrendAnalysis {
        trends::analyze_trends(history, &self.config.trends)
    }

    pub fn generate_forecasts(&self, history: &[f64], horizon: usize) -> ForecastSet {
        forecast::generate_forecasts(history, horizon, &self.config.trends)
    }

    /// Metric rules only
    pub fn generate_alerts(&self, record: &PeriodRecord) -> Result<Vec<Alert>> {
        let metrics = self.calculate_metrics(record)?;
        Ok(evaluate_alerts(&metrics, None, &self.config.alerts))
    }

    /// Metric rules plus the trend rules, evaluated on the moving-average trend
    pub fn generate_alerts_with_trends(
        &self,
        record: &PeriodRecord,
        trends: &TrendAnalysis,
    ) -> Result<Vec<Alert>> {
        let metrics = self.calculate_metrics(record)?;
        Ok(evaluate_alerts(
            &metrics,
            trends.moving_average.as_ref(),
            &self.config.alerts,
        ))
    }

    pub fn generate_insights(
        &self,
        record: &PeriodRecord,
        trends: &TrendAnalysis,
        forecasts: &ForecastSet,
    ) -> Result<Vec<Insight>> {
        let metrics = self.calculate_metrics(record)?;
        Ok(insights::generate_insights(&metrics, trends, forecasts))
    }

    pub fn classify(&self, value: f64, category: &str) -> Result<Rating> {
        benchmark::classify(value, category, &self.config.benchmarks)
    }

    pub fn calculate_score(
        &self,
        metrics: &BTreeMap<String, WeightedMetric>,
    ) -> Result<BenchmarkScore> {
        benchmark::calculate_score(metrics, &self.config.benchmarks)
    }

    pub fn competitive_analysis(
        &self,
        site: &BTreeMap<String, f64>,
        competitor: &BTreeMap<String, f64>,
    ) -> BTreeMap<String, CompetitivePosition> {
        benchmark::competitive_analysis(site, competitor)
    }

    /// Weighted site score over the four rated categories
    pub fn score_metrics(&self, metrics: &MetricsBundle) -> Result<BenchmarkScore> {
        let weighted: BTreeMap<String, WeightedMetric> = BenchmarkCategory::ALL
            .iter()
            .map(|&category| {
                let value = match category {
                    BenchmarkCategory::FuelEfficiency => metrics.fuel_efficiency.efficiency_ratio,
                    BenchmarkCategory::ProfitMargin => metrics.profitability.gross_profit_margin,
                    BenchmarkCategory::ShopFuelRatio => metrics.shop.shop_fuel_ratio,
                    BenchmarkCategory::VolumeEfficiency => metrics.volume.volume_efficiency,
                };
                let weight = self.config.scoring.weight_for(category);
                (
                    category.as_str().to_string(),
                    WeightedMetric::new(value, weight, category.as_str()),
                )
            })
            .collect();
        self.calculate_score(&weighted)
    }

    /// Full pipeline: metrics, trends, forecasts, alerts, insights, score
    pub fn analyze(
        &self,
        record: &PeriodRecord,
        history: &[f64],
        horizon: usize,
    ) -> Result<AnalysisReport> {
        let span = debug_span!("analyze", history = history.len(), horizon);
        let _enter = span.enter();

        let metrics = self.calculate_metrics(record)?;
        let trends = self.analyze_trends(history);
        let forecasts = self.generate_forecasts(history, horizon);
        let alerts = evaluate_alerts(
            &metrics,
            trends.moving_average.as_ref(),
            &self.config.alerts,
        );
        let insights = insights::generate_insights(&metrics, &trends, &forecasts);
        let score = self.score_metrics(&metrics)?;

        tracing::debug!(
            alerts = alerts.len(),
            insights = insights.len(),
            grade = %score.grade,
            "analysis complete"
        );

        Ok(AnalysisReport {
            metrics,
            trends,
            forecasts,
            alerts,
            insights,
            score,
        })
    }
}
