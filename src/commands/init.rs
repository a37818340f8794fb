use crate::config::{EngineConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::Path;

/// Write the default configuration into `dir`, refusing to clobber an
/// existing file unless `force` is set.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let body = EngineConfig::default().to_toml_string()?;
    let contents = format!("# Forecourt analytics configuration\n\n{body}");
    io::write_file(&config_path, &contents)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
