use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use crate::app::config::FormatterConfig;

const CONFIG_FILE_NAME: &str = "formatter.toml";

pub fn load_formatter_config(path: &Path) -> Result<FormatterConfig> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read formatter config {}", path.display()))?;
    let config: FormatterConfig = toml::from_str(&content)
        .wrap_err_with(|| format!("Invalid formatter config {}", path.display()))?;
    log::debug!("Loaded formatter config from {}", path.display());
    Ok(config)
}

/// `~/.config/mwb-doctrine/formatter.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("mwb-doctrine").join(CONFIG_FILE_NAME))
}

/// Explicit path first, then the per-user file, then built-in defaults.
pub fn resolve_formatter_config(explicit: Option<&Path>) -> Result<FormatterConfig> {
    if let Some(path) = explicit {
        return load_formatter_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => load_formatter_config(&path),
        _ => {
            log::debug!("No formatter config found, using defaults");
            Ok(FormatterConfig::default())
        }
    }
}
