//! Authoritative panel state.
//!
//! The [`MeasurementStore`] owns the temperature and pressure measurements,
//! the humidity, the AC flag and the air direction. It performs no
//! validation of its own beyond what its argument types already guarantee:
//! text parsing and range checks happen in [`crate::validation`] before any
//! value reaches it.

use serde::Serialize;
use tracing::{debug, warn};

use hvac_types::{AirAxis, Humidity, PressureUnit, Quantity, TemperatureUnit};

use crate::config::{HorizontalSweep, VERTICAL_MAX_DEGREES};
use crate::convert::UnitSelection;
use crate::measurement::Measurement;

/// Louvre angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AirDirection {
    /// Horizontal sweep angle.
    pub horizontal: u16,
    /// Vertical tilt angle.
    pub vertical: u16,
}

impl AirDirection {
    /// Angle for one axis.
    pub fn angle(&self, axis: AirAxis) -> u16 {
        match axis {
            AirAxis::Horizontal => self.horizontal,
            AirAxis::Vertical => self.vertical,
        }
    }
}

/// New readings ready to be written, each already paired with its unit.
///
/// Built only by the [`UpdateCoordinator`](crate::UpdateCoordinator), which
/// picks the units according to its [`RawValuePolicy`](crate::RawValuePolicy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RawValues {
    /// Temperature reading.
    pub temperature: Measurement<TemperatureUnit>,
    /// Humidity reading.
    pub humidity: Humidity,
    /// Pressure reading.
    pub pressure: Measurement<PressureUnit>,
}

/// Owner of every piece of panel state.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementStore {
    temperature: Measurement<TemperatureUnit>,
    humidity: Humidity,
    pressure: Measurement<PressureUnit>,
    ac_on: bool,
    air_direction: AirDirection,
    #[serde(skip)]
    sweep: HorizontalSweep,
}

impl Default for MeasurementStore {
    fn default() -> Self {
        Self::new(
            TemperatureUnit::default(),
            PressureUnit::default(),
            HorizontalSweep::default(),
        )
    }
}

impl MeasurementStore {
    /// Create a store with zero readings in the given units.
    pub fn new(
        temperature_unit: TemperatureUnit,
        pressure_unit: PressureUnit,
        sweep: HorizontalSweep,
    ) -> Self {
        Self {
            temperature: Measurement::zero(temperature_unit),
            humidity: Humidity::default(),
            pressure: Measurement::zero(pressure_unit),
            ac_on: false,
            air_direction: AirDirection::default(),
            sweep,
        }
    }

    /// Current temperature.
    pub fn temperature(&self) -> &Measurement<TemperatureUnit> {
        &self.temperature
    }

    /// Current pressure.
    pub fn pressure(&self) -> &Measurement<PressureUnit> {
        &self.pressure
    }

    /// Current humidity.
    pub fn humidity(&self) -> Humidity {
        self.humidity
    }

    /// Whether the AC is switched on.
    pub fn ac_on(&self) -> bool {
        self.ac_on
    }

    /// Current louvre angles.
    pub fn air_direction(&self) -> AirDirection {
        self.air_direction
    }

    /// Largest accepted angle for an axis.
    pub fn axis_max(&self, axis: AirAxis) -> u16 {
        match axis {
            AirAxis::Horizontal => self.sweep.max_degrees(),
            AirAxis::Vertical => VERTICAL_MAX_DEGREES,
        }
    }

    /// Switch a quantity to a new display unit, converting its value.
    ///
    /// Returns the quantity that changed, or `None` when the unit was already
    /// selected.
    pub fn set_unit(&mut self, unit: UnitSelection) -> Option<Quantity> {
        let changed = match unit {
            UnitSelection::Temperature(unit) => self.temperature.set_unit(unit),
            UnitSelection::Pressure(unit) => self.pressure.set_unit(unit),
        };
        if !changed {
            debug!("{} already shown in {}", unit.quantity(), unit);
        }
        changed.then(|| unit.quantity())
    }

    /// Overwrite all three readings at once.
    ///
    /// Each measurement takes the unit it carries. Pairing values with units
    /// is the coordinator's job: under [`RawValuePolicy::DisplayUnit`] it
    /// passes the current display units, so they are preserved.
    ///
    /// [`RawValuePolicy::DisplayUnit`]: crate::RawValuePolicy::DisplayUnit
    pub(crate) fn set_raw_values(&mut self, values: RawValues) {
        self.temperature = values.temperature;
        self.humidity = values.humidity;
        self.pressure = values.pressure;
    }

    /// Flip the AC flag and return the new state.
    pub fn toggle_ac(&mut self) -> bool {
        self.ac_on = !self.ac_on;
        self.ac_on
    }

    /// Store a louvre angle, clamped into the axis range.
    ///
    /// Returns the angle actually stored.
    pub fn set_air_direction(&mut self, axis: AirAxis, angle: i32) -> u16 {
        let max = self.axis_max(axis);
        let clamped = angle.clamp(0, i32::from(max)) as u16;
        if i32::from(clamped) != angle {
            warn!("Clamped {} air direction {} to {}", axis, angle, clamped);
        }
        match axis {
            AirAxis::Horizontal => self.air_direction.horizontal = clamped,
            AirAxis::Vertical => self.air_direction.vertical = clamped,
        }
        clamped
    }
}
