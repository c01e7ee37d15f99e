//! Error types for token parsing in hvac-types.

use thiserror::Error;

/// Errors that can occur when turning raw tokens into panel types.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The unit token is not part of the unit family for this quantity.
    #[error("Unknown {family} unit: '{token}'")]
    UnknownUnit {
        /// Unit family that was expected ("temperature" or "pressure").
        family: &'static str,
        /// The offending token.
        token: String,
    },
    /// The token does not name a quantity.
    #[error("Unknown quantity: '{0}'")]
    UnknownQuantity(String),
    /// The token does not name an air-direction axis.
    #[error("Unknown air direction axis: '{0}'")]
    UnknownAxis(String),
    /// Humidity is not a percentage in 0-100.
    #[error("Humidity {0}% is out of valid range (0-100)")]
    HumidityOutOfRange(i64),
}

/// Result type alias using hvac-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
