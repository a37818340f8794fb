//! Performance analytics for fuel stations.
//!
//! The library turns one period's trading figures plus an optional history
//! series into metrics, trends, forecasts, benchmark ratings, alerts and
//! insights. [`AnalyticsEngine`] is the entry point; the component modules
//! are public for callers that only need one piece.

pub mod alerts;
pub mod benchmark;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod forecast;
pub mod insights;
pub mod io;
pub mod metrics;
pub mod trends;

pub use crate::alerts::{Alert, AlertRule};
pub use crate::benchmark::{
    BenchmarkCategory, BenchmarkScore, CompetitivePosition, Grade, Position, Rating,
    WeightedMetric,
};
pub use crate::config::{EngineConfig, TrendSettings};
pub use crate::core::{Error, FuelGrade, FuelLine, PeriodRecord, Result, Severity};
pub use crate::engine::{AnalysisReport, AnalyticsEngine};
pub use crate::forecast::{ForecastMethod, ForecastResult, ForecastSet};
pub use crate::insights::{Insight, InsightCategory};
pub use crate::metrics::MetricsBundle;
pub use crate::trends::{SeasonalityResult, TrendAnalysis, TrendDirection, TrendResult};
