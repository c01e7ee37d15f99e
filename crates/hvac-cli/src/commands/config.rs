//! Config command implementation.

use std::path::Path;

use anyhow::Result;

use crate::cli::{ConfigAction, ConfigKey};
use crate::config::Config;

pub fn cmd_config(action: ConfigAction, path: &Path, quiet: bool) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", Config::load_from(path).to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(path);
            config.set(key, &value)?;
            config.save_to(path)?;
            if !quiet {
                println!("Set {} = {}", key_name(key), value);
            }
        }
    }
    Ok(())
}

fn key_name(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::TemperatureUnit => "temperature_unit",
        ConfigKey::PressureUnit => "pressure_unit",
        ConfigKey::RawValuePolicy => "raw_value_policy",
        ConfigKey::HorizontalSweep => "horizontal_sweep",
    }
}
