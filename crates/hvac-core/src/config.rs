//! Panel configuration.
//!
//! All fields have defaults, so an empty TOML table deserializes into
//! [`PanelConfig::default`].

use serde::{Deserialize, Serialize};

use hvac_types::{PressureUnit, TemperatureUnit};

use crate::validation::ValidatorConfig;

/// How a raw value injected from outside is paired with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawValuePolicy {
    /// The value is taken as already expressed in the unit currently on
    /// display; the unit does not change.
    #[default]
    DisplayUnit,
    /// The value is taken as Celsius / Pascal and the display unit resets to
    /// that base unit.
    BaseUnit,
}

/// Travel of the horizontal air-direction slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalSweep {
    /// 0-180 degrees.
    #[default]
    Half,
    /// 0-360 degrees.
    Full,
}

impl HorizontalSweep {
    /// Largest horizontal angle in degrees.
    pub fn max_degrees(&self) -> u16 {
        match self {
            HorizontalSweep::Half => 180,
            HorizontalSweep::Full => 360,
        }
    }
}

/// Largest vertical air-direction angle in degrees.
pub const VERTICAL_MAX_DEGREES: u16 = 90;

/// Configuration for an [`UpdateCoordinator`](crate::UpdateCoordinator).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Temperature unit selected at startup.
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    /// Pressure unit selected at startup.
    #[serde(default)]
    pub pressure_unit: PressureUnit,

    /// Unit pairing for injected raw values.
    #[serde(default)]
    pub raw_value_policy: RawValuePolicy,

    /// Horizontal slider travel.
    #[serde(default)]
    pub horizontal_sweep: HorizontalSweep,

    /// Bounds for submitted readings.
    #[serde(default)]
    pub validation: ValidatorConfig,
}
