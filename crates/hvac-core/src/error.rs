//! Error types for hvac-core.
//!
//! Every error leaves the panel state untouched: operations validate and
//! convert before they mutate, so a caller that receives an [`Error`] can keep
//! using the same [`UpdateCoordinator`](crate::UpdateCoordinator) as if the
//! request had never been made.
//!
//! | Error | Cause | Caller action |
//! |-------|-------|---------------|
//! | [`Error::Parse`] | Unknown unit, quantity or axis token | Fix the selector wiring |
//! | [`Error::Validation`] | Submitted text failed parsing or range checks | Ask the operator to resubmit |
//! | [`Error::UnitNotSupported`] | Unit requested for humidity | Fix the selector wiring |
//! | [`Error::UnitMismatch`] | Conversion between two unit families | Pick units of one quantity |

use thiserror::Error;

use hvac_types::{ParseError, Quantity};

use crate::convert::UnitSelection;
use crate::validation::SubmissionError;

/// Errors that can occur while handling panel requests.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A token could not be mapped onto the closed set of units, quantities
    /// or axes.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A raw-value submission was rejected; nothing was stored.
    #[error("Submission rejected: {0}")]
    Validation(#[from] SubmissionError),

    /// The quantity has no unit to select.
    #[error("{0} has no selectable unit")]
    UnitNotSupported(Quantity),

    /// The two units belong to different quantities.
    #[error("Cannot convert {from} to {to}: units measure different quantities")]
    UnitMismatch {
        /// Source unit.
        from: UnitSelection,
        /// Target unit.
        to: UnitSelection,
    },
}

/// Result type alias using hvac-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
