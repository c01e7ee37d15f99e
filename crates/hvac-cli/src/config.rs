//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::warn;

use hvac_core::{HorizontalSweep, PanelConfig, PressureUnit, RawValuePolicy, TemperatureUnit};

use crate::cli::ConfigKey;

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Panel preferences and behavior
    #[serde(default)]
    pub panel: PanelConfig,
}

impl Config {
    /// Default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hvac")
            .join("config.toml")
    }

    /// Resolve an explicit path, falling back to the default location
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map(Path::to_path_buf).unwrap_or_else(Self::default_path)
    }

    /// Load config from file, or return default if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => warn!("Failed to parse config {}: {}", path.display(), e),
            },
            Err(e) => warn!("Failed to read config {}: {}", path.display(), e),
        }
        Self::default()
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = self.to_toml()?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Update one key from its command-line text
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let panel = &mut self.panel;
        match key {
            ConfigKey::TemperatureUnit => {
                panel.temperature_unit = value.parse::<TemperatureUnit>()?
            }
            ConfigKey::PressureUnit => panel.pressure_unit = value.parse::<PressureUnit>()?,
            ConfigKey::RawValuePolicy => panel.raw_value_policy = parse_policy(value)?,
            ConfigKey::HorizontalSweep => panel.horizontal_sweep = parse_sweep(value)?,
        }
        Ok(())
    }

    /// Render as TOML for display
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

fn parse_policy(value: &str) -> Result<RawValuePolicy> {
    match value.to_lowercase().replace('-', "_").as_str() {
        "display_unit" | "display" => Ok(RawValuePolicy::DisplayUnit),
        "base_unit" | "base" => Ok(RawValuePolicy::BaseUnit),
        _ => bail!(
            "Invalid raw value policy '{}'. Use: display_unit, base_unit",
            value
        ),
    }
}

fn parse_sweep(value: &str) -> Result<HorizontalSweep> {
    match value.to_lowercase().as_str() {
        "half" | "180" => Ok(HorizontalSweep::Half),
        "full" | "360" => Ok(HorizontalSweep::Full),
        _ => bail!("Invalid horizontal sweep '{}'. Use: half (180), full (360)", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config.panel.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(config.panel.pressure_unit, PressureUnit::Pascal);
    }

    #[test]
    fn test_load_unparsable_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[panel]\ntemperature_unit = \"rankine\"\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.panel.temperature_unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_load_partial_panel_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[panel]\npressure_unit = \"mmhg\"\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.panel.pressure_unit, PressureUnit::MmHg);
        assert_eq!(config.panel.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(config.panel.validation.temperature_max, 70.0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set(ConfigKey::TemperatureUnit, "Fahrenheit").unwrap();
        config.set(ConfigKey::RawValuePolicy, "base-unit").unwrap();
        config.set(ConfigKey::HorizontalSweep, "360").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path);
        assert_eq!(reloaded.panel.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(reloaded.panel.raw_value_policy, RawValuePolicy::BaseUnit);
        assert_eq!(reloaded.panel.horizontal_sweep, HorizontalSweep::Full);
    }

    #[test]
    fn test_set_rejects_unknown_values() {
        let mut config = Config::default();
        assert!(config.set(ConfigKey::PressureUnit, "bar").is_err());
        assert!(config.set(ConfigKey::RawValuePolicy, "sometimes").is_err());
        assert!(config.set(ConfigKey::HorizontalSweep, "270").is_err());
        assert_eq!(config.panel.pressure_unit, PressureUnit::Pascal);
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        assert_eq!(Config::resolve_path(Some(&explicit)), explicit);
        assert!(Config::resolve_path(None).ends_with("hvac/config.toml"));
    }

    #[test]
    fn test_to_toml_has_panel_table() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("[panel]"));
        assert!(rendered.contains("temperature_unit = \"celsius\""));
    }
}
