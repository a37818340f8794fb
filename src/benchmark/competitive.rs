use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{finite_or_zero, safe_div};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Ahead,
    Behind,
}

/// Site standing on one metric relative to a competitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitivePosition {
    /// Percent difference, positive when the site is higher
    pub difference: f64,
    pub position: Position,
    /// Absolute size of the difference
    pub gap: f64,
}

/// Compare every metric present in both maps.
///
/// Keys present on only one side are skipped. A competitor value of zero
/// or below is read as 1 to keep the percentage defined.
pub fn competitive_analysis(
    site: &BTreeMap<String, f64>,
    competitor: &BTreeMap<String, f64>,
) -> BTreeMap<String, CompetitivePosition> {
    site.iter()
        .filter_map(|(key, &site_value)| {
            let &competitor_value = competitor.get(key)?;
            let difference = safe_div(
                finite_or_zero(site_value) - finite_or_zero(competitor_value),
                competitor_value,
            ) * 100.0;
            let position = if difference > 0.0 {
                Position::Ahead
            } else {
                Position::Behind
            };
            Some((
                key.clone(),
                CompetitivePosition {
                    difference,
                    position,
                    gap: difference.abs(),
                },
            ))
        })
        .collect()
}
