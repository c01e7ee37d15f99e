//! Presentation strings for the display layer.
//!
//! Measured values are rendered with exactly two decimals, humidity as a
//! whole percentage, and every label reads `<Quantity>: <value> <unit>`.

use serde::Serialize;

use hvac_types::{Humidity, Quantity};

use crate::convert::{Unit, UnitSelection};
use crate::measurement::Measurement;

/// Label shown for humidity values.
pub const HUMIDITY_SYMBOL: &str = "%";

/// Ready-to-display text for one quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// Quantity being shown.
    pub quantity: Quantity,
    /// Formatted magnitude.
    pub value: String,
    /// Canonical unit label.
    pub unit: &'static str,
    /// Unit the selector should show, if the quantity has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<UnitSelection>,
    /// Full label text.
    pub label: String,
}

impl Presentation {
    fn new(
        quantity: Quantity,
        value: String,
        unit: &'static str,
        selection: Option<UnitSelection>,
    ) -> Self {
        let label = format!("{}: {} {}", quantity.label(), value, unit);
        Self {
            quantity,
            value,
            unit,
            selection,
            label,
        }
    }
}

/// Render a value with exactly two decimals.
///
/// ```
/// use hvac_core::format::format_value;
///
/// assert_eq!(format_value(32.0), "32.00");
/// assert_eq!(format_value(759.9987), "760.00");
/// ```
pub fn format_value(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    // Avoid showing "-0.00" for values that round to zero
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

/// Present a temperature or pressure measurement.
pub fn present_measurement<U: Unit>(measurement: &Measurement<U>) -> Presentation {
    let unit = measurement.unit();
    Presentation::new(
        U::QUANTITY,
        format_value(measurement.value()),
        unit.label(),
        Some(unit.selection()),
    )
}

/// Present a humidity reading.
pub fn present_humidity(humidity: Humidity) -> Presentation {
    Presentation::new(
        Quantity::Humidity,
        humidity.percent().to_string(),
        HUMIDITY_SYMBOL,
        None,
    )
}

/// Caption of the AC button for the given state.
///
/// The button offers the opposite action of the current state.
pub fn ac_caption(ac_on: bool) -> &'static str {
    if ac_on { "Turn Off AC" } else { "Turn On AC" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvac_types::{PressureUnit, TemperatureUnit};

    #[test]
    fn test_format_value_two_decimals() {
        assert_eq!(format_value(0.0), "0.00");
        assert_eq!(format_value(25.5), "25.50");
        assert_eq!(format_value(-12.346), "-12.35");
        assert_eq!(format_value(101_325.0), "101325.00");
    }

    #[test]
    fn test_format_value_negative_zero() {
        assert_eq!(format_value(-0.0), "0.00");
        assert_eq!(format_value(-0.001), "0.00");
    }

    #[test]
    fn test_present_temperature() {
        let presentation =
            present_measurement(&Measurement::new(25.5, TemperatureUnit::Celsius));
        assert_eq!(presentation.quantity, Quantity::Temperature);
        assert_eq!(presentation.value, "25.50");
        assert_eq!(presentation.unit, "°C");
        assert_eq!(
            presentation.selection,
            Some(UnitSelection::Temperature(TemperatureUnit::Celsius))
        );
        assert_eq!(presentation.label, "Temperature: 25.50 °C");
    }

    #[test]
    fn test_present_pressure_mmhg() {
        let presentation = present_measurement(&Measurement::new(760.0, PressureUnit::MmHg));
        assert_eq!(presentation.label, "Pressure: 760.00 mmHg");
    }

    #[test]
    fn test_present_kelvin_label() {
        let presentation =
            present_measurement(&Measurement::new(273.15, TemperatureUnit::Kelvin));
        assert_eq!(presentation.label, "Temperature: 273.15 K");
    }

    #[test]
    fn test_present_humidity() {
        let presentation = present_humidity(Humidity::new(60).unwrap());
        assert_eq!(presentation.value, "60");
        assert_eq!(presentation.unit, "%");
        assert_eq!(presentation.selection, None);
        assert_eq!(presentation.label, "Humidity: 60 %");
    }

    #[test]
    fn test_ac_caption() {
        assert_eq!(ac_caption(false), "Turn On AC");
        assert_eq!(ac_caption(true), "Turn Off AC");
    }

    #[test]
    fn test_presentation_serialization_skips_missing_selection() {
        let json = serde_json::to_string(&present_humidity(Humidity::new(5).unwrap())).unwrap();
        assert!(!json.contains("selection"));
        assert!(json.contains("\"label\":\"Humidity: 5 %\""));
    }
}
