//! Unit conversion engine.
//!
//! Conversions are pure functions over the closed unit enums from
//! hvac-types. There is no fallback path: a unit that is not part of the enum
//! never reaches this module, because token parsing rejects it first.
//!
//! # Example
//!
//! ```
//! use hvac_core::convert::{convert_pressure, convert_temperature};
//! use hvac_types::{PressureUnit, TemperatureUnit};
//!
//! let f = convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
//! assert_eq!(f, 212.0);
//!
//! let mmhg = convert_pressure(101_325.0, PressureUnit::Pascal, PressureUnit::MmHg);
//! assert!((mmhg - 760.0).abs() < 0.01);
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use hvac_types::{ParseError, PressureUnit, Quantity, TemperatureUnit};

use crate::error::{Error, Result};

/// Pascals in one millimetre of mercury.
pub const PASCALS_PER_MMHG: f64 = 133.322;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Convert a temperature between scales.
///
/// Returns `value` untouched when `from == to`.
#[must_use]
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    match (from, to) {
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
    }
}

/// Convert a pressure between Pascals and mmHg.
///
/// Returns `value` untouched when `from == to`.
#[must_use]
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    match (from, to) {
        (PressureUnit::Pascal, PressureUnit::MmHg) => value / PASCALS_PER_MMHG,
        (PressureUnit::MmHg, PressureUnit::Pascal) => value * PASCALS_PER_MMHG,
        _ => value,
    }
}

/// A family of interchangeable display units for one quantity.
///
/// Implemented for [`TemperatureUnit`] and [`PressureUnit`], which lets
/// [`Measurement`](crate::Measurement) share one `set_unit` implementation.
pub trait Unit: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// The quantity this unit family measures.
    const QUANTITY: Quantity;

    /// Unit a fresh measurement starts in.
    fn base() -> Self;

    /// Canonical short label for presentation.
    fn label(self) -> &'static str;

    /// Convert `value` from one unit of this family to another.
    fn convert(value: f64, from: Self, to: Self) -> f64;

    /// Wrap the unit into the family-erased [`UnitSelection`].
    fn selection(self) -> UnitSelection;
}

impl Unit for TemperatureUnit {
    const QUANTITY: Quantity = Quantity::Temperature;

    fn base() -> Self {
        TemperatureUnit::Celsius
    }

    fn label(self) -> &'static str {
        self.symbol()
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_temperature(value, from, to)
    }

    fn selection(self) -> UnitSelection {
        UnitSelection::Temperature(self)
    }
}

impl Unit for PressureUnit {
    const QUANTITY: Quantity = Quantity::Pressure;

    fn base() -> Self {
        PressureUnit::Pascal
    }

    fn label(self) -> &'static str {
        self.symbol()
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_pressure(value, from, to)
    }

    fn selection(self) -> UnitSelection {
        UnitSelection::Pressure(self)
    }
}

/// A unit of any unit-bearing quantity.
///
/// This is what a unit selector hands over: the quantity is implied by the
/// variant, so a temperature unit can never be applied to pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "quantity", content = "unit", rename_all = "snake_case")]
pub enum UnitSelection {
    /// A temperature scale.
    Temperature(TemperatureUnit),
    /// A pressure unit.
    Pressure(PressureUnit),
}

impl UnitSelection {
    /// Parse a unit token for a specific quantity.
    ///
    /// ```
    /// use hvac_core::convert::UnitSelection;
    /// use hvac_types::{Quantity, TemperatureUnit};
    ///
    /// let unit = UnitSelection::parse(Quantity::Temperature, "Kelvin").unwrap();
    /// assert_eq!(unit, UnitSelection::Temperature(TemperatureUnit::Kelvin));
    ///
    /// // Humidity has no unit selector
    /// assert!(UnitSelection::parse(Quantity::Humidity, "%").is_err());
    /// ```
    pub fn parse(quantity: Quantity, token: &str) -> Result<Self> {
        match quantity {
            Quantity::Temperature => Ok(UnitSelection::Temperature(token.parse()?)),
            Quantity::Pressure => Ok(UnitSelection::Pressure(token.parse()?)),
            Quantity::Humidity => Err(Error::UnitNotSupported(quantity)),
        }
    }

    /// The quantity this unit measures.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        match self {
            UnitSelection::Temperature(_) => Quantity::Temperature,
            UnitSelection::Pressure(_) => Quantity::Pressure,
        }
    }

    /// Canonical short label.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitSelection::Temperature(unit) => unit.symbol(),
            UnitSelection::Pressure(unit) => unit.symbol(),
        }
    }
}

impl fmt::Display for UnitSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSelection::Temperature(unit) => fmt::Display::fmt(unit, f),
            UnitSelection::Pressure(unit) => fmt::Display::fmt(unit, f),
        }
    }
}

impl FromStr for UnitSelection {
    type Err = ParseError;

    /// Parse a token of either family, trying temperature first.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(unit) = s.parse::<TemperatureUnit>() {
            return Ok(UnitSelection::Temperature(unit));
        }
        s.parse::<PressureUnit>()
            .map(UnitSelection::Pressure)
            .map_err(|_| ParseError::UnknownUnit {
                family: "temperature or pressure",
                token: s.to_string(),
            })
    }
}

/// A single pending conversion: produced by a unit change, applied once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    /// Magnitude expressed in `from`.
    pub value: f64,
    /// Unit the value is currently in.
    pub from: UnitSelection,
    /// Unit to convert into.
    pub to: UnitSelection,
}

impl ConversionRequest {
    /// Create a new conversion request.
    pub fn new(value: f64, from: UnitSelection, to: UnitSelection) -> Self {
        Self { value, from, to }
    }

    /// The quantity being converted, if both units agree on one.
    #[must_use]
    pub fn quantity(&self) -> Option<Quantity> {
        let quantity = self.from.quantity();
        (quantity == self.to.quantity()).then_some(quantity)
    }

    /// Perform the conversion, consuming the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnitMismatch`] when the units belong to different
    /// quantities.
    pub fn apply(self) -> Result<f64> {
        let converted = match (self.from, self.to) {
            (UnitSelection::Temperature(from), UnitSelection::Temperature(to)) => {
                convert_temperature(self.value, from, to)
            }
            (UnitSelection::Pressure(from), UnitSelection::Pressure(to)) => {
                convert_pressure(self.value, from, to)
            }
            (from, to) => return Err(Error::UnitMismatch { from, to }),
        };
        debug!(
            "Converted {} {} -> {} {}",
            self.value,
            self.from.symbol(),
            converted,
            self.to.symbol()
        );
        Ok(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_temperature_identity() {
        for unit in TemperatureUnit::ALL {
            assert_eq!(convert_temperature(21.37, unit, unit), 21.37);
        }
    }

    #[test]
    fn test_celsius_to_fahrenheit_freezing() {
        assert_close(convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
    }

    #[test]
    fn test_celsius_to_fahrenheit_boiling() {
        assert_close(convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
    }

    #[test]
    fn test_celsius_fahrenheit_cross_at_minus_forty() {
        assert_close(convert_temperature(-40.0, Celsius, Fahrenheit), -40.0);
        assert_close(convert_temperature(-40.0, Fahrenheit, Celsius), -40.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_close(convert_temperature(0.0, Celsius, Kelvin), 273.15);
        assert_close(convert_temperature(273.15, Kelvin, Celsius), 0.0);
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        assert_close(convert_temperature(32.0, Fahrenheit, Kelvin), 273.15);
        assert_close(convert_temperature(212.0, Fahrenheit, Kelvin), 373.15);
    }

    #[test]
    fn test_kelvin_to_fahrenheit() {
        assert_close(convert_temperature(373.15, Kelvin, Fahrenheit), 212.0);
        assert_close(convert_temperature(0.0, Kelvin, Fahrenheit), -459.67);
    }

    #[test]
    fn test_pressure_standard_atmosphere() {
        let mmhg = convert_pressure(101_325.0, PressureUnit::Pascal, PressureUnit::MmHg);
        assert!((mmhg - 760.0).abs() < 0.01, "got {mmhg}");
    }

    #[test]
    fn test_pressure_mmhg_to_pascal() {
        let pa = convert_pressure(1.0, PressureUnit::MmHg, PressureUnit::Pascal);
        assert_eq!(pa, PASCALS_PER_MMHG);
    }

    #[test]
    fn test_pressure_identity() {
        for unit in PressureUnit::ALL {
            assert_eq!(convert_pressure(987.6, unit, unit), 987.6);
        }
    }

    #[test]
    fn test_unit_trait_base_units() {
        assert_eq!(<TemperatureUnit as Unit>::base(), Celsius);
        assert_eq!(<PressureUnit as Unit>::base(), PressureUnit::Pascal);
        assert_eq!(Kelvin.label(), "K");
        assert_eq!(PressureUnit::MmHg.selection().quantity(), Quantity::Pressure);
    }

    #[test]
    fn test_unit_selection_parse_rejects_humidity() {
        assert_eq!(
            UnitSelection::parse(Quantity::Humidity, "percent"),
            Err(Error::UnitNotSupported(Quantity::Humidity))
        );
    }

    #[test]
    fn test_unit_selection_parse_rejects_wrong_family() {
        let err = UnitSelection::parse(Quantity::Pressure, "Celsius").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::UnknownUnit { .. })));
    }

    #[test]
    fn test_unit_selection_from_str_either_family() {
        assert_eq!(
            "F".parse::<UnitSelection>(),
            Ok(UnitSelection::Temperature(Fahrenheit))
        );
        assert_eq!(
            "mmHg".parse::<UnitSelection>(),
            Ok(UnitSelection::Pressure(PressureUnit::MmHg))
        );
        assert!("furlongs".parse::<UnitSelection>().is_err());
    }

    #[test]
    fn test_unit_selection_serialization() {
        let json = serde_json::to_string(&UnitSelection::Temperature(Kelvin)).unwrap();
        assert_eq!(json, r#"{"quantity":"temperature","unit":"kelvin"}"#);
    }

    #[test]
    fn test_conversion_request_apply() {
        let request = ConversionRequest::new(
            0.0,
            UnitSelection::Temperature(Celsius),
            UnitSelection::Temperature(Fahrenheit),
        );
        assert_eq!(request.quantity(), Some(Quantity::Temperature));
        assert_close(request.apply().unwrap(), 32.0);
    }

    #[test]
    fn test_conversion_request_mismatch() {
        let request = ConversionRequest::new(
            1.0,
            UnitSelection::Temperature(Celsius),
            UnitSelection::Pressure(PressureUnit::Pascal),
        );
        assert_eq!(request.quantity(), None);
        assert!(matches!(request.apply(), Err(Error::UnitMismatch { .. })));
    }
}
