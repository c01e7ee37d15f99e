//! Message types between the presentation layer and the coordinator.
//!
//! ```text
//! +--------------------+     Command      +---------------------+
//! | Presentation layer | --------------> |  UpdateCoordinator  |
//! |  (selectors, form) |                 |  (owns the store)   |
//! |                    | <-------------- |                     |
//! +--------------------+   PanelUpdate   +---------------------+
//! ```
//!
//! - [`Command`]: one variant per kind of user interaction
//! - [`PanelUpdate`]: what the display must re-render afterwards

use core::fmt;

use serde::{Deserialize, Serialize};

use hvac_types::{AirAxis, Quantity};

use crate::format::Presentation;

/// Requests sent from the presentation layer to the coordinator.
///
/// Unit tokens and submitted values travel as raw strings; the coordinator
/// parses and validates them at this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// A unit selector changed.
    UnitChangeRequested {
        /// Quantity whose selector changed.
        quantity: Quantity,
        /// Selected unit token, e.g. `"Fahrenheit"`.
        unit: String,
    },

    /// The settings form was submitted.
    RawValuesSubmitted {
        /// Temperature text field.
        temperature: String,
        /// Humidity text field.
        humidity: String,
        /// Pressure text field.
        pressure: String,
    },

    /// The AC button was pressed.
    AcToggleRequested,

    /// An air-direction slider moved.
    AirDirectionRequested {
        /// Slider axis.
        axis: AirAxis,
        /// Requested angle in degrees; clamped into range.
        angle: i32,
    },
}

/// Changes the display has to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelUpdate {
    /// New text for one quantity.
    Measurement(Presentation),

    /// New AC state and the caption for its button.
    AcStatus {
        /// Whether the AC is on.
        on: bool,
        /// Button caption.
        caption: &'static str,
    },

    /// A louvre angle after clamping.
    AirDirection {
        /// Slider axis.
        axis: AirAxis,
        /// Stored angle in degrees.
        angle: u16,
    },
}

impl PanelUpdate {
    /// The quantity this update refreshes, if it refreshes one.
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            PanelUpdate::Measurement(presentation) => Some(presentation.quantity),
            _ => None,
        }
    }
}

impl fmt::Display for PanelUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelUpdate::Measurement(presentation) => write!(f, "{}", presentation.label),
            PanelUpdate::AcStatus { on, caption } => {
                write!(f, "AC: {} [{}]", if *on { "on" } else { "off" }, caption)
            }
            PanelUpdate::AirDirection { axis, angle } => {
                write!(f, "Air direction ({}): {}°", axis, angle)
            }
        }
    }
}
