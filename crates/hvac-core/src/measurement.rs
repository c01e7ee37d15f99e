//! A value paired with the unit it is expressed in.

use serde::Serialize;
use tracing::debug;

use crate::convert::Unit;

/// Magnitude of a unit-bearing quantity together with its display unit.
///
/// The fields are private so the pair can only change together: either the
/// unit changes and the value is converted with it ([`Measurement::set_unit`]),
/// or both are replaced at once ([`Measurement::replace`]).
///
/// ```
/// use hvac_core::Measurement;
/// use hvac_types::TemperatureUnit;
///
/// let mut temperature = Measurement::new(0.0, TemperatureUnit::Celsius);
/// assert!(temperature.set_unit(TemperatureUnit::Fahrenheit));
/// assert_eq!(temperature.value(), 32.0);
/// assert_eq!(temperature.unit(), TemperatureUnit::Fahrenheit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement<U> {
    value: f64,
    unit: U,
}

impl<U: Unit> Measurement<U> {
    /// Create a measurement of `value` expressed in `unit`.
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// A zero reading in the given unit.
    pub fn zero(unit: U) -> Self {
        Self::new(0.0, unit)
    }

    /// Current magnitude, in [`Measurement::unit`].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current display unit.
    pub fn unit(&self) -> U {
        self.unit
    }

    /// The magnitude expressed in another unit, without changing `self`.
    pub fn value_in(&self, unit: U) -> f64 {
        U::convert(self.value, self.unit, unit)
    }

    /// Switch to `unit`, converting the stored value.
    ///
    /// Returns `false` and leaves the measurement untouched when `unit` is
    /// already the current unit, so repeated selections never drift.
    pub fn set_unit(&mut self, unit: U) -> bool {
        if unit == self.unit {
            return false;
        }
        let converted = U::convert(self.value, self.unit, unit);
        debug!(
            "{} {} {} -> {} {}",
            U::QUANTITY,
            self.value,
            self.unit.label(),
            converted,
            unit.label()
        );
        self.value = converted;
        self.unit = unit;
        true
    }

    /// Overwrite value and unit together.
    pub fn replace(&mut self, value: f64, unit: U) {
        self.value = value;
        self.unit = unit;
    }
}

impl<U: Unit> Default for Measurement<U> {
    fn default() -> Self {
        Self::zero(U::base())
    }
}
