//! Update coordination between the presentation layer and the store.
//!
//! The [`UpdateCoordinator`] is the only writer of the [`MeasurementStore`].
//! Each request runs to completion before it returns: parse and validate,
//! convert, mutate, then derive the updates the display must render. A
//! request that fails at any step returns an error and leaves the store as it
//! was.
//!
//! # Example
//!
//! ```
//! use hvac_core::{Command, PanelConfig, UpdateCoordinator};
//! use hvac_types::Quantity;
//!
//! let mut panel = UpdateCoordinator::new(&PanelConfig::default());
//!
//! let updates = panel
//!     .handle(Command::UnitChangeRequested {
//!         quantity: Quantity::Temperature,
//!         unit: "Fahrenheit".to_string(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(updates.len(), 1);
//! assert_eq!(updates[0].to_string(), "Temperature: 32.00 °F");
//! ```

use tracing::{info, warn};

use hvac_types::{AirAxis, PressureUnit, Quantity, TemperatureUnit};

use crate::config::{PanelConfig, RawValuePolicy};
use crate::convert::{Unit, UnitSelection};
use crate::error::Result;
use crate::format::{ac_caption, present_humidity, present_measurement};
use crate::measurement::Measurement;
use crate::messages::{Command, PanelUpdate};
use crate::store::{MeasurementStore, RawValues};
use crate::validation::SubmissionValidator;

/// Receiver for panel updates.
///
/// Implemented for any `FnMut(&PanelUpdate)`, so a closure that writes to a
/// widget or a terminal can be passed directly to
/// [`UpdateCoordinator::dispatch`].
pub trait PresentationSink {
    /// Render one update.
    fn refresh(&mut self, update: &PanelUpdate);
}

impl<F> PresentationSink for F
where
    F: FnMut(&PanelUpdate),
{
    fn refresh(&mut self, update: &PanelUpdate) {
        self(update)
    }
}

/// Owner of the panel state and handler of every [`Command`].
#[derive(Debug, Clone)]
pub struct UpdateCoordinator {
    store: MeasurementStore,
    validator: SubmissionValidator,
    policy: RawValuePolicy,
}

impl Default for UpdateCoordinator {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}

impl UpdateCoordinator {
    /// Create a coordinator with a fresh store built from `config`.
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            store: MeasurementStore::new(
                config.temperature_unit,
                config.pressure_unit,
                config.horizontal_sweep,
            ),
            validator: SubmissionValidator::new(config.validation.clone()),
            policy: config.raw_value_policy,
        }
    }

    /// Read access to the current state.
    pub fn store(&self) -> &MeasurementStore {
        &self.store
    }

    /// The active raw value policy.
    pub fn policy(&self) -> RawValuePolicy {
        self.policy
    }

    /// Currently selected temperature unit.
    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.store.temperature().unit()
    }

    /// Currently selected pressure unit.
    pub fn pressure_unit(&self) -> PressureUnit {
        self.store.pressure().unit()
    }

    /// Handle one command and return the updates to render.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown unit tokens, unit requests on humidity,
    /// and rejected submissions. The store is unchanged in every error case.
    pub fn handle(&mut self, command: Command) -> Result<Vec<PanelUpdate>> {
        match command {
            Command::UnitChangeRequested { quantity, unit } => {
                self.request_unit_change(quantity, &unit)
            }
            Command::RawValuesSubmitted {
                temperature,
                humidity,
                pressure,
            } => self.submit_raw_values(&temperature, &humidity, &pressure),
            Command::AcToggleRequested => Ok(self.request_ac_toggle()),
            Command::AirDirectionRequested { axis, angle } => {
                Ok(self.request_air_direction(axis, angle))
            }
        }
    }

    /// Handle one command and push every resulting update into `sink`.
    pub fn dispatch<S>(&mut self, command: Command, sink: &mut S) -> Result<()>
    where
        S: PresentationSink + ?Sized,
    {
        for update in self.handle(command)? {
            sink.refresh(&update);
        }
        Ok(())
    }

    /// Switch a quantity's display unit.
    ///
    /// Returns one update for the converted quantity, or none when the unit
    /// was already selected.
    pub fn request_unit_change(
        &mut self,
        quantity: Quantity,
        token: &str,
    ) -> Result<Vec<PanelUpdate>> {
        let unit = UnitSelection::parse(quantity, token)?;
        Ok(self
            .store
            .set_unit(unit)
            .map(|changed| vec![self.present(changed)])
            .unwrap_or_default())
    }

    /// Validate and store operator-entered readings.
    ///
    /// On success all three quantities are re-rendered.
    pub fn submit_raw_values(
        &mut self,
        temperature: &str,
        humidity: &str,
        pressure: &str,
    ) -> Result<Vec<PanelUpdate>> {
        let submission = match self.validator.validate(temperature, humidity, pressure) {
            Ok(submission) => submission,
            Err(e) => {
                warn!("Rejected submission: {}", e);
                return Err(e.into());
            }
        };

        let (temperature_unit, pressure_unit) = match self.policy {
            RawValuePolicy::DisplayUnit => (self.temperature_unit(), self.pressure_unit()),
            RawValuePolicy::BaseUnit => (TemperatureUnit::base(), PressureUnit::base()),
        };
        self.store.set_raw_values(RawValues {
            temperature: Measurement::new(submission.temperature, temperature_unit),
            humidity: submission.humidity,
            pressure: Measurement::new(submission.pressure, pressure_unit),
        });
        info!(
            "Stored readings: {} {}, {}%, {} {}",
            submission.temperature,
            temperature_unit.symbol(),
            submission.humidity,
            submission.pressure,
            pressure_unit.symbol()
        );

        Ok(Quantity::ALL.iter().map(|q| self.present(*q)).collect())
    }

    /// Flip the AC state.
    pub fn request_ac_toggle(&mut self) -> Vec<PanelUpdate> {
        let on = self.store.toggle_ac();
        info!("AC switched {}", if on { "on" } else { "off" });
        vec![self.present_ac()]
    }

    /// Move an air-direction slider; out-of-range angles are clamped.
    pub fn request_air_direction(&mut self, axis: AirAxis, angle: i32) -> Vec<PanelUpdate> {
        let angle = self.store.set_air_direction(axis, angle);
        vec![PanelUpdate::AirDirection { axis, angle }]
    }

    /// Every update needed to render the panel from scratch.
    pub fn snapshot(&self) -> Vec<PanelUpdate> {
        let air = self.store.air_direction();
        let mut updates: Vec<PanelUpdate> =
            Quantity::ALL.iter().map(|q| self.present(*q)).collect();
        updates.push(self.present_ac());
        updates.extend([AirAxis::Horizontal, AirAxis::Vertical].map(|axis| {
            PanelUpdate::AirDirection {
                axis,
                angle: air.angle(axis),
            }
        }));
        updates
    }

    fn present(&self, quantity: Quantity) -> PanelUpdate {
        let presentation = match quantity {
            Quantity::Temperature => present_measurement(self.store.temperature()),
            Quantity::Humidity => present_humidity(self.store.humidity()),
            Quantity::Pressure => present_measurement(self.store.pressure()),
        };
        PanelUpdate::Measurement(presentation)
    }

    fn present_ac(&self) -> PanelUpdate {
        let on = self.store.ac_on();
        PanelUpdate::AcStatus {
            on,
            caption: ac_caption(on),
        }
    }
}
