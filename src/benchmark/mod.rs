//! Benchmark ratings and weighted scoring.
//!
//! A metric value is rated against the three ascending cutoffs of its
//! category. Ratings map to fixed points, points are weighted and summed,
//! and the share of the maximum achievable score becomes a letter grade.

pub mod competitive;
pub mod scorer;

pub use competitive::{competitive_analysis, CompetitivePosition, Position};
pub use scorer::{calculate_score, classify, BenchmarkScore, WeightedMetric};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories present in the default threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkCategory {
    FuelEfficiency,
    ProfitMargin,
    ShopFuelRatio,
    VolumeEfficiency,
}

impl BenchmarkCategory {
    pub const ALL: [BenchmarkCategory; 4] = [
        Self::FuelEfficiency,
        Self::ProfitMargin,
        Self::ShopFuelRatio,
        Self::VolumeEfficiency,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FuelEfficiency => "fuel_efficiency",
            Self::ProfitMargin => "profit_margin",
            Self::ShopFuelRatio => "shop_fuel_ratio",
            Self::VolumeEfficiency => "volume_efficiency",
        }
    }
}

impl fmt::Display for BenchmarkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenchmarkCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown benchmark category '{s}'"))
    }
}

/// Qualitative rating of a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Poor,
    Average,
    Good,
    Excellent,
}

impl Rating {
    /// Points contributed to a weighted score
    pub const fn points(&self) -> f64 {
        match self {
            Self::Excellent => 10.0,
            Self::Good => 8.0,
            Self::Average => 6.0,
            Self::Poor => 3.0,
        }
    }

    pub const MAX_POINTS: f64 = 10.0;
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poor => write!(f, "poor"),
            Self::Average => write!(f, "average"),
            Self::Good => write!(f, "good"),
            Self::Excellent => write!(f, "excellent"),
        }
    }
}

/// Letter grade derived from a score percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage {
            p if p >= 90.0 => Self::A,
            p if p >= 80.0 => Self::B,
            p if p >= 70.0 => Self::C,
            p if p >= 60.0 => Self::D,
            _ => Self::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
