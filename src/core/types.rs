use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel category sold on the forecourt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelGrade {
    Petrol93,
    Petrol95,
    /// Low sulphur diesel (50 ppm)
    DieselEx,
    /// Standard diesel (500 ppm)
    Diesel500,
    Paraffin,
    Other,
}

impl fmt::Display for FuelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Petrol93 => "petrol 93",
            Self::Petrol95 => "petrol 95",
            Self::DieselEx => "diesel ex",
            Self::Diesel500 => "diesel 500",
            Self::Paraffin => "paraffin",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Sales of a single fuel grade within a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelLine {
    pub grade: FuelGrade,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub cost: f64,
}

impl FuelLine {
    pub fn new(grade: FuelGrade, volume: f64, revenue: f64, cost: f64) -> Self {
        Self {
            grade,
            volume,
            revenue,
            cost,
        }
    }
}

/// One reporting period's raw business figures.
///
/// Volumes are liters, everything else is in currency units. Absent
/// fields deserialize to `0.0`. The aggregate `fuel_*` fields drive all
/// formulas; `fuels` only feeds the fuel mix breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodRecord {
    pub fuel_volume: f64,
    pub fuel_revenue: f64,
    pub fuel_cost: f64,
    pub shop_revenue: f64,
    pub shop_customers: f64,
    pub total_customers: f64,
    pub labor_cost: f64,
    pub overhead: f64,
    pub fixed_costs: f64,
    /// Planned fuel volume for the period
    pub target_volume: f64,
    /// Length of the period in days
    pub period_days: f64,
    pub fuels: Vec<FuelLine>,
}

impl PeriodRecord {
    /// Record with only the fuel aggregates populated
    pub fn fuel(volume: f64, revenue: f64, cost: f64) -> Self {
        Self {
            fuel_volume: volume,
            fuel_revenue: revenue,
            fuel_cost: cost,
            ..Self::default()
        }
    }

    /// True if any figure, including fuel lines, is NaN or infinite
    pub fn has_non_finite(&self) -> bool {
        let aggregates = [
            self.fuel_volume,
            self.fuel_revenue,
            self.fuel_cost,
            self.shop_revenue,
            self.shop_customers,
            self.total_customers,
            self.labor_cost,
            self.overhead,
            self.fixed_costs,
            self.target_volume,
            self.period_days,
        ];
        aggregates.iter().any(|v| !v.is_finite())
            || self
                .fuels
                .iter()
                .any(|l| !(l.volume.is_finite() && l.revenue.is_finite() && l.cost.is_finite()))
    }
}

/// Severity shared by alerts and insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}
