//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use hvac_core::UnitSelection;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "hvac")]
#[command(author, version, about = "HVAC monitoring panel and unit converter", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "HVAC_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a value between two units of the same quantity
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Unit the value is expressed in (e.g. celsius, K, Pa, mmHg)
        #[arg(long)]
        from: UnitSelection,

        /// Unit to convert to
        #[arg(long)]
        to: UnitSelection,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run an interactive panel session on stdin
    Panel {
        /// Do not write the selected units back to the config file on exit
        #[arg(long)]
        no_save: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Temperature unit selected at startup
    TemperatureUnit,
    /// Pressure unit selected at startup
    PressureUnit,
    /// Unit pairing for submitted values (display_unit, base_unit)
    RawValuePolicy,
    /// Horizontal air-direction travel (half, full)
    HorizontalSweep,
}

/// Configuration subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
        /// Configuration value
        value: String,
    },
}
