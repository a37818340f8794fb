use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::core::EngineConfig;
use crate::core::{Error, Result, ResultExt};

/// File name looked up by `load_config` and written by `forecourt init`
pub const CONFIG_FILE_NAME: &str = "forecourt.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<EngineConfig> {
    let config = toml::from_str::<EngineConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file; any failure is returned to the caller
pub fn load_config_from_path(path: &Path) -> Result<EngineConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;

    let config = parse_and_validate_config(&contents)
        .context(format!("Invalid config {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load `forecourt.toml` from `dir` if present, defaults otherwise.
///
/// A missing file is not an error. A file that exists but fails to parse
/// or validate is.
pub fn load_config(dir: &Path) -> Result<EngineConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    match fs::metadata(&path) {
        Ok(_) => load_config_from_path(&path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(EngineConfig::default())
        }
        Err(e) => {
            tracing::warn!("Failed to stat config file {}: {}", path.display(), e);
            Err(Error::file_system("Failed to read config file", path, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_alert_override() {
        let config = parse_and_validate_config("[alerts]\nlow_fuel_efficiency = 0.9\n").unwrap();
        assert_eq!(config.alerts.low_fuel_efficiency, 0.9);
        assert_eq!(config.alerts.high_profit_margin, 20.0);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = parse_and_validate_config("[alerts\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_invalid_values_are_error() {
        let err = parse_and_validate_config("[trends]\nseasonality_period = 0\n").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
