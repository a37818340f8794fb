use crate::config::{load_config, load_config_from_path, EngineConfig};
use crate::engine::{AnalysisReport, AnalyticsEngine};
use crate::io::{self, create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub current: PathBuf,
    pub history: Option<PathBuf>,
    pub horizon: Option<usize>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

fn resolve_config(explicit: Option<&Path>) -> Result<EngineConfig> {
    let config = match explicit {
        Some(path) => load_config_from_path(path)?,
        None => load_config(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Load inputs, run the full pipeline and return the report
pub fn run_analysis(config: &AnalyzeConfig) -> Result<AnalysisReport> {
    let engine_config = resolve_config(config.config.as_deref())?;
    let horizon = config
        .horizon
        .unwrap_or(engine_config.trends.default_horizon);
    let engine = AnalyticsEngine::new(engine_config)?;

    let record = io::read_period_record(&config.current)?;
    let history = match &config.history {
        Some(path) => io::read_history(path)?,
        None => Vec::new(),
    };
    tracing::info!(
        history = history.len(),
        horizon,
        "analyzing {}",
        config.current.display()
    );

    let report = engine
        .analyze(&record, &history, horizon)
        .context("Analysis failed")?;
    Ok(report)
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let report = run_analysis(&config)?;

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = create_writer(config.format, BufWriter::new(file));
            writer.write_report(&report)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = create_writer(config.format, stdout.lock());
            writer.write_report(&report)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_inputs(dir: &Path) -> AnalyzeConfig {
        let current = dir.join("current.json");
        let history = dir.join("history.json");
        let config = dir.join("custom.toml");
        fs::write(
            &current,
            r#"{"fuel_volume": 1000, "fuel_revenue": 20000, "fuel_cost": 18000}"#,
        )
        .unwrap();
        fs::write(&history, "[100, 110, 120, 130, 140, 150, 160, 170]").unwrap();
        fs::write(&config, "[trends]\ndefault_horizon = 4\n").unwrap();
        AnalyzeConfig {
            current,
            history: Some(history),
            horizon: None,
            config: Some(config),
            format: OutputFormat::Json,
            output: None,
        }
    }

    #[test]
    fn test_horizon_defaults_to_configured_value() {
        let dir = TempDir::new().unwrap();
        let mut config = write_inputs(dir.path());
        let report = run_analysis(&config).unwrap();
        assert_eq!(report.forecasts.linear_regression.unwrap().horizon(), 4);

        config.horizon = Some(2);
        let report = run_analysis(&config).unwrap();
        assert_eq!(report.forecasts.linear_regression.unwrap().horizon(), 2);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = TempDir::new().unwrap();
        let mut config = write_inputs(dir.path());
        config.config = Some(dir.path().join("missing.toml"));
        assert!(run_analysis(&config).is_err());
    }

    #[test]
    fn test_output_file_receives_json() {
        let dir = TempDir::new().unwrap();
        let mut config = write_inputs(dir.path());
        let out = dir.path().join("report.json");
        config.output = Some(out.clone());

        handle_analyze(config).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert!(value["trends"]["moving_average"].is_object());
    }
}
