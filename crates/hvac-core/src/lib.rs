//! Measurement state and unit-conversion engine for the HVAC monitoring panel.
//!
//! This crate holds everything behind the panel's display: the authoritative
//! readings, the conversion tables, submission validation and the presentation
//! strings. It has no knowledge of any particular UI; a presentation layer
//! sends [`Command`]s and renders the [`PanelUpdate`]s that come back.
//!
//! # Features
//!
//! - **Unit conversion**: Celsius / Fahrenheit / Kelvin and Pascal / mmHg
//! - **Typed measurements**: a value and its unit always travel together
//! - **Validated submissions**: all-or-nothing, with every field error reported
//! - **Air direction**: horizontal and vertical louvre angles, clamped
//! - **Presentation**: two-decimal labels ready for display
//!
//! # Quick Start
//!
//! ```
//! use hvac_core::{Command, PanelConfig, UpdateCoordinator};
//! use hvac_core::types::Quantity;
//!
//! let mut panel = UpdateCoordinator::new(&PanelConfig::default());
//!
//! panel
//!     .handle(Command::RawValuesSubmitted {
//!         temperature: "21.5".to_string(),
//!         humidity: "40".to_string(),
//!         pressure: "101325".to_string(),
//!     })
//!     .unwrap();
//!
//! let updates = panel
//!     .handle(Command::UnitChangeRequested {
//!         quantity: Quantity::Pressure,
//!         unit: "mmHg".to_string(),
//!     })
//!     .unwrap();
//! assert_eq!(updates[0].to_string(), "Pressure: 760.00 mmHg");
//! ```

pub mod config;
pub mod convert;
pub mod coordinator;
pub mod error;
pub mod format;
pub mod measurement;
pub mod messages;
pub mod store;
pub mod validation;

// Re-export the shared vocabulary from hvac-types
pub use hvac_types::types;

// Core exports
pub use config::{HorizontalSweep, PanelConfig, RawValuePolicy, VERTICAL_MAX_DEGREES};
pub use convert::{
    ConversionRequest, KELVIN_OFFSET, PASCALS_PER_MMHG, Unit, UnitSelection, convert_pressure,
    convert_temperature,
};
pub use coordinator::{PresentationSink, UpdateCoordinator};
pub use error::{Error, Result};
pub use format::{Presentation, ac_caption, format_value};
pub use measurement::Measurement;
pub use messages::{Command, PanelUpdate};
pub use store::{AirDirection, MeasurementStore};
pub use validation::{
    FieldError, FieldErrorKind, Submission, SubmissionError, SubmissionValidator, ValidatorConfig,
};

// Re-export from hvac-types
pub use hvac_types::{AirAxis, Humidity, ParseError, PressureUnit, Quantity, TemperatureUnit};
