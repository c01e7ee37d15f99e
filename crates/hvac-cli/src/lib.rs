//! Command-line front end for the HVAC monitoring panel.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `convert` | Convert a value between two units of one quantity |
//! | `panel` | Interactive panel session on stdin |
//! | `config` | Show or edit the configuration file |
//!
//! # Panel session
//!
//! `hvac panel` prints the whole panel, then reads one command per line:
//!
//! ```text
//! scale temperature fahrenheit
//! submit 25.5 60 101325
//! ac
//! air horizontal 90
//! show
//! quit
//! ```
//!
//! Every state change prints the affected lines, e.g.
//! `Temperature: 25.50 °F`. Errors go to stderr and the session continues.
//!
//! # Configuration
//!
//! The CLI stores configuration in `~/.config/hvac/config.toml` (or platform
//! equivalent). The `[panel]` table holds:
//!
//! - `temperature_unit`: `celsius`, `fahrenheit` or `kelvin`
//! - `pressure_unit`: `pascal` or `mmhg`
//! - `raw_value_policy`: `display_unit` or `base_unit`
//! - `horizontal_sweep`: `half` (0-180°) or `full` (0-360°)
//! - `[panel.validation]`: `temperature_min`, `temperature_max`
//!
//! The two units are written back when a panel session ends, unless
//! `--no-save` is given.
//!
//! # Environment Variables
//!
//! - `HVAC_CONFIG`: Config file path (overridden by `--config`)
//! - `RUST_LOG`: Log filter when neither `--verbose` nor `--quiet` is set
//!
//! # Examples
//!
//! ```bash
//! hvac convert 101325 --from Pa --to mmHg
//! hvac convert -40 --from C --to F --format json
//! hvac config set temperature-unit kelvin
//! ```

// This crate is primarily a binary; the command implementations live in
// main.rs and its modules.

// Re-export core dependencies for convenience
pub use hvac_core;
pub use hvac_types;
