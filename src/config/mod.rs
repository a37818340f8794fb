// Sub-modules
mod core;
mod loader;
mod scoring;
mod thresholds;

pub use self::core::{
    default_horizon, default_moving_average_period, default_seasonality_period, EngineConfig,
    TrendSettings, MAX_HORIZON,
};

pub use loader::{load_config, load_config_from_path, parse_and_validate_config, CONFIG_FILE_NAME};

pub use scoring::{
    default_fuel_efficiency_weight, default_profit_margin_weight, default_shop_fuel_ratio_weight,
    default_volume_efficiency_weight, ScoringWeights,
};

pub use thresholds::{
    default_declining_trend, default_high_labor_cost, default_high_profit_margin,
    default_low_fuel_efficiency, default_low_shop_fuel_ratio, default_low_volume_efficiency,
    default_strong_growth, default_thresholds, AlertThresholds, BenchmarkTable, RatingThresholds,
};
