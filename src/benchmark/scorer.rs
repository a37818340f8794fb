use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Grade, Rating};
use crate::config::BenchmarkTable;
use crate::core::{finite_or_zero, safe_div, Error, Result};

/// Rate `value` against the cutoffs configured for `category`.
///
/// An unknown category is a configuration error and is returned as such.
pub fn classify(value: f64, category: &str, table: &BenchmarkTable) -> Result<Rating> {
    let thresholds = table.get(category).ok_or_else(|| {
        tracing::warn!(category, "classification against unknown benchmark category");
        Error::configuration(format!("unknown benchmark category '{category}'"))
    })?;

    let value = finite_or_zero(value);
    let rating = if value >= thresholds.excellent {
        Rating::Excellent
    } else if value >= thresholds.good {
        Rating::Good
    } else if value >= thresholds.poor {
        Rating::Average
    } else {
        Rating::Poor
    };
    Ok(rating)
}

/// One input to `calculate_score`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMetric {
    pub value: f64,
    pub weight: f64,
    pub category: String,
}

impl WeightedMetric {
    pub fn new(value: f64, weight: f64, category: impl Into<String>) -> Self {
        Self {
            value,
            weight,
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkScore {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub grade: Grade,
}

/// Weighted score over a set of named metrics.
///
/// Every entry is rated, its points multiplied by its weight and summed;
/// the maximum possible score assumes every entry rated excellent.
pub fn calculate_score(
    metrics: &BTreeMap<String, WeightedMetric>,
    table: &BenchmarkTable,
) -> Result<BenchmarkScore> {
    let mut score = 0.0;
    let mut max_score = 0.0;

    for (name, metric) in metrics {
        if !(metric.weight.is_finite() && metric.weight >= 0.0) {
            return Err(Error::configuration(format!(
                "metric '{name}' has invalid weight {}",
                metric.weight
            )));
        }
        let rating = classify(metric.value, &metric.category, table)?;
        score += rating.points() * metric.weight;
        max_score += Rating::MAX_POINTS * metric.weight;
    }

    let percentage = safe_div(score, max_score) * 100.0;
    let grade = Grade::from_percentage(percentage);
    tracing::debug!(score, max_score, percentage, %grade, "benchmark score");

    Ok(BenchmarkScore {
        score,
        max_score,
        percentage,
        grade,
    })
}
