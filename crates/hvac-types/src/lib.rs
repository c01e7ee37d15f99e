//! Unit and quantity types for the HVAC monitoring panel.
//!
//! This crate provides the closed vocabulary shared by the conversion engine
//! (hvac-core) and any presentation layer (hvac-cli):
//!
//! - [`Quantity`]: temperature, humidity, pressure
//! - [`TemperatureUnit`] and [`PressureUnit`]: the selectable display units
//! - [`Humidity`]: a percentage that cannot leave 0-100
//! - [`AirAxis`]: the two air-direction sliders
//!
//! Every type parses from the tokens a selector or text field would hand over,
//! and an unknown token is an error rather than a silent default.
//!
//! # Example
//!
//! ```
//! use hvac_types::{PressureUnit, TemperatureUnit};
//!
//! let unit: TemperatureUnit = "Kelvin".parse().unwrap();
//! assert_eq!(unit.symbol(), "K");
//!
//! let unit: PressureUnit = "mmHg".parse().unwrap();
//! assert_eq!(unit.symbol(), "mmHg");
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{AirAxis, Humidity, PressureUnit, Quantity, TemperatureUnit};
