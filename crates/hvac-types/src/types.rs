//! Core types for HVAC panel state.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

/// Physical quantity shown on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quantity {
    /// Air temperature.
    Temperature,
    /// Relative humidity, always a percentage.
    Humidity,
    /// Atmospheric pressure.
    Pressure,
}

impl Quantity {
    /// Every quantity, in display order.
    pub const ALL: [Quantity; 3] = [Quantity::Temperature, Quantity::Humidity, Quantity::Pressure];

    /// Human-readable label used as the prefix of the panel text.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Temperature => "Temperature",
            Quantity::Humidity => "Humidity",
            Quantity::Pressure => "Pressure",
        }
    }

    /// Whether the quantity carries a selectable unit.
    ///
    /// ```
    /// use hvac_types::Quantity;
    ///
    /// assert!(Quantity::Temperature.has_unit());
    /// assert!(!Quantity::Humidity.has_unit());
    /// ```
    #[must_use]
    pub fn has_unit(&self) -> bool {
        !matches!(self, Quantity::Humidity)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Temperature => write!(f, "temperature"),
            Quantity::Humidity => write!(f, "humidity"),
            Quantity::Pressure => write!(f, "pressure"),
        }
    }
}

impl FromStr for Quantity {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" | "t" => Ok(Quantity::Temperature),
            "humidity" | "hum" | "h" => Ok(Quantity::Humidity),
            "pressure" | "press" | "p" => Ok(Quantity::Pressure),
            _ => Err(ParseError::UnknownQuantity(s.to_string())),
        }
    }
}

/// Temperature scale.
///
/// Tokens are matched case-insensitively against the scale name, its
/// initial, and its symbol:
///
/// ```
/// use hvac_types::TemperatureUnit;
///
/// assert_eq!("Fahrenheit".parse(), Ok(TemperatureUnit::Fahrenheit));
/// assert_eq!("°C".parse(), Ok(TemperatureUnit::Celsius));
/// assert_eq!("k".parse(), Ok(TemperatureUnit::Kelvin));
/// assert!("Rankine".parse::<TemperatureUnit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl TemperatureUnit {
    /// Every temperature unit, in selector order.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Canonical short label (`°C`, `°F`, `K`).
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "Celsius"),
            TemperatureUnit::Fahrenheit => write!(f, "Fahrenheit"),
            TemperatureUnit::Kelvin => write!(f, "Kelvin"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            _ => Err(ParseError::UnknownUnit {
                family: "temperature",
                token: s.to_string(),
            }),
        }
    }
}

/// Pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PressureUnit {
    /// Pascals.
    #[default]
    Pascal,
    /// Millimetres of mercury.
    MmHg,
}

impl PressureUnit {
    /// Every pressure unit, in selector order.
    pub const ALL: [PressureUnit; 2] = [PressureUnit::Pascal, PressureUnit::MmHg];

    /// Canonical short label (`Pa`, `mmHg`).
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::MmHg => "mmHg",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressureUnit::Pascal => write!(f, "Pascals"),
            PressureUnit::MmHg => write!(f, "mmHg"),
        }
    }
}

impl FromStr for PressureUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "pascal" | "pascals" | "pa" => Ok(PressureUnit::Pascal),
            "mmhg" => Ok(PressureUnit::MmHg),
            _ => Err(ParseError::UnknownUnit {
                family: "pressure",
                token: s.to_string(),
            }),
        }
    }
}

/// Axis of the air-direction sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AirAxis {
    /// Left/right louvre sweep.
    Horizontal,
    /// Up/down louvre tilt.
    Vertical,
}

impl fmt::Display for AirAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirAxis::Horizontal => write!(f, "horizontal"),
            AirAxis::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for AirAxis {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" | "h" => Ok(AirAxis::Horizontal),
            "vertical" | "v" => Ok(AirAxis::Vertical),
            _ => Err(ParseError::UnknownAxis(s.to_string())),
        }
    }
}

/// Relative humidity as a whole percentage.
///
/// The only way to build one is through the checked constructor, so a value
/// outside 0-100 cannot exist.
///
/// ```
/// use hvac_types::Humidity;
///
/// assert_eq!(Humidity::new(60).unwrap().percent(), 60);
/// assert!(Humidity::new(101).is_err());
/// assert!(Humidity::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
pub struct Humidity(u8);

impl Humidity {
    /// Largest representable humidity.
    pub const MAX: u8 = 100;

    /// Create a humidity value, rejecting anything outside 0-100.
    pub fn new(percent: i64) -> ParseResult<Self> {
        if (0..=i64::from(Self::MAX)).contains(&percent) {
            Ok(Self(percent as u8))
        } else {
            Err(ParseError::HumidityOutOfRange(percent))
        }
    }

    /// The percentage value.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Humidity {
    type Error = ParseError;

    fn try_from(value: i64) -> ParseResult<Self> {
        Self::new(value)
    }
}

impl From<Humidity> for u8 {
    fn from(value: Humidity) -> Self {
        value.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
