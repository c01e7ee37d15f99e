//! Parsing and bounds checking for operator-submitted readings.
//!
//! A submission arrives as three raw strings. Every field is checked, all
//! failures are collected, and the submission is accepted only if none
//! failed, so a rejected submission never reaches the store.
//!
//! # Example
//!
//! ```
//! use hvac_core::SubmissionValidator;
//! use hvac_types::Quantity;
//!
//! let validator = SubmissionValidator::default();
//!
//! let accepted = validator.validate("25.5", "60", "101325").unwrap();
//! assert_eq!(accepted.temperature, 25.5);
//! assert_eq!(accepted.humidity.percent(), 60);
//!
//! let rejected = validator.validate("-100", "50", "1000").unwrap_err();
//! assert_eq!(rejected.fields(), vec![Quantity::Temperature]);
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use hvac_types::{Humidity, Quantity};

/// Why a single field was rejected.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new checks in
/// future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FieldErrorKind {
    /// The text is not a finite number.
    NotANumber { input: String },
    /// The number lies outside the accepted range.
    OutOfRange { value: f64, min: f64, max: f64 },
    /// The number is below zero where only non-negative values make sense.
    Negative { value: f64 },
}

/// A rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field.
    pub field: Quantity,
    /// What was wrong with it.
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.field.label();
        match &self.kind {
            FieldErrorKind::NotANumber { input } => {
                write!(f, "{} '{}' is not a number", name, input)
            }
            FieldErrorKind::OutOfRange { value, min, max } => {
                write!(f, "{} {} is outside {} to {}", name, value, min, max)
            }
            FieldErrorKind::Negative { value } => {
                write!(f, "{} {} must not be negative", name, value)
            }
        }
    }
}

/// All field errors of one rejected submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionError {
    /// Field errors in temperature, humidity, pressure order.
    pub errors: Vec<FieldError>,
}

impl SubmissionError {
    /// The fields that failed validation.
    pub fn fields(&self) -> Vec<Quantity> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// Whether the given field failed validation.
    pub fn has_field(&self, field: Quantity) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for SubmissionError {}

/// A submission that passed every check.
///
/// The numbers carry no unit yet: the coordinator pairs them with units
/// according to its [`RawValuePolicy`](crate::RawValuePolicy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    /// Temperature as entered.
    pub temperature: f64,
    /// Humidity, rounded to a whole percentage.
    pub humidity: Humidity,
    /// Pressure as entered.
    pub pressure: f64,
}

/// Configuration for submission validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Lowest accepted temperature, in the unit it was entered in.
    pub temperature_min: f64,
    /// Highest accepted temperature, in the unit it was entered in.
    pub temperature_max: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            temperature_min: -50.0,
            temperature_max: 70.0,
        }
    }
}

/// Validator for raw-value submissions.
#[derive(Debug, Clone, Default)]
pub struct SubmissionValidator {
    config: ValidatorConfig,
}

impl SubmissionValidator {
    /// Create a validator with the given config.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Parse and check the three raw fields.
    ///
    /// # Errors
    ///
    /// Returns every field error found; the submission is all-or-nothing.
    pub fn validate(
        &self,
        temperature: &str,
        humidity: &str,
        pressure: &str,
    ) -> Result<Submission, SubmissionError> {
        let mut errors = Vec::new();

        let temperature = parse_field(Quantity::Temperature, temperature)
            .and_then(|value| self.check_temperature(value))
            .map_err(|e| errors.push(e))
            .ok();
        let humidity = parse_field(Quantity::Humidity, humidity)
            .and_then(check_humidity)
            .map_err(|e| errors.push(e))
            .ok();
        let pressure = parse_field(Quantity::Pressure, pressure)
            .and_then(check_pressure)
            .map_err(|e| errors.push(e))
            .ok();

        match (temperature, humidity, pressure) {
            (Some(temperature), Some(humidity), Some(pressure)) => Ok(Submission {
                temperature,
                humidity,
                pressure,
            }),
            _ => Err(SubmissionError { errors }),
        }
    }

    fn check_temperature(&self, value: f64) -> Result<f64, FieldError> {
        let (min, max) = (self.config.temperature_min, self.config.temperature_max);
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(FieldError {
                field: Quantity::Temperature,
                kind: FieldErrorKind::OutOfRange { value, min, max },
            })
        }
    }
}

fn parse_field(field: Quantity, input: &str) -> Result<f64, FieldError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError {
            field,
            kind: FieldErrorKind::NotANumber {
                input: input.to_string(),
            },
        }),
    }
}

fn check_humidity(value: f64) -> Result<Humidity, FieldError> {
    let max = f64::from(Humidity::MAX);
    if !(0.0..=max).contains(&value) {
        return Err(FieldError {
            field: Quantity::Humidity,
            kind: FieldErrorKind::OutOfRange {
                value,
                min: 0.0,
                max,
            },
        });
    }
    // In range, so rounding stays within 0-100
    Humidity::new(value.round() as i64).map_err(|_| FieldError {
        field: Quantity::Humidity,
        kind: FieldErrorKind::OutOfRange {
            value,
            min: 0.0,
            max,
        },
    })
}

fn check_pressure(value: f64) -> Result<f64, FieldError> {
    if value < 0.0 {
        Err(FieldError {
            field: Quantity::Pressure,
            kind: FieldErrorKind::Negative { value },
        })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(t: &str, h: &str, p: &str) -> Result<Submission, SubmissionError> {
        SubmissionValidator::default().validate(t, h, p)
    }

    #[test]
    fn test_valid_submission() {
        let submission = validate("25.5", "60", "101325").unwrap();
        assert_eq!(submission.temperature, 25.5);
        assert_eq!(submission.humidity.percent(), 60);
        assert_eq!(submission.pressure, 101_325.0);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let submission = validate(" 20 ", "\t45\n", " 0 ").unwrap();
        assert_eq!(submission.temperature, 20.0);
        assert_eq!(submission.pressure, 0.0);
    }

    #[test]
    fn test_temperature_bounds_inclusive() {
        assert!(validate("-50", "50", "1000").is_ok());
        assert!(validate("70", "50", "1000").is_ok());
        assert!(validate("70.01", "50", "1000").is_err());
        assert!(validate("-50.01", "50", "1000").is_err());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let err = validate("-100", "50", "1000").unwrap_err();
        assert_eq!(err.fields(), vec![Quantity::Temperature]);
        assert_eq!(
            err.errors[0].kind,
            FieldErrorKind::OutOfRange {
                value: -100.0,
                min: -50.0,
                max: 70.0
            }
        );
    }

    #[test]
    fn test_not_a_number_names_field() {
        let err = validate("20", "wet", "1000").unwrap_err();
        assert!(err.has_field(Quantity::Humidity));
        assert!(!err.has_field(Quantity::Temperature));
        assert_eq!(err.to_string(), "Humidity 'wet' is not a number");
    }

    #[test]
    fn test_non_finite_text_is_not_a_number() {
        for text in ["NaN", "inf", "-infinity", ""] {
            let err = validate(text, "50", "1000").unwrap_err();
            assert_eq!(err.fields(), vec![Quantity::Temperature], "input {text:?}");
        }
    }

    #[test]
    fn test_humidity_range() {
        assert!(validate("20", "0", "1000").is_ok());
        assert!(validate("20", "100", "1000").is_ok());
        assert!(validate("20", "101", "1000").is_err());
        assert!(validate("20", "-1", "1000").is_err());
    }

    #[test]
    fn test_humidity_rounds_to_whole_percent() {
        assert_eq!(validate("20", "59.6", "0").unwrap().humidity.percent(), 60);
        assert_eq!(validate("20", "99.5", "0").unwrap().humidity.percent(), 100);
    }

    #[test]
    fn test_negative_pressure_rejected() {
        let err = validate("20", "50", "-1").unwrap_err();
        assert_eq!(
            err.errors,
            vec![FieldError {
                field: Quantity::Pressure,
                kind: FieldErrorKind::Negative { value: -1.0 }
            }]
        );
    }

    #[test]
    fn test_all_errors_reported_together() {
        let err = validate("abc", "150", "-5").unwrap_err();
        assert_eq!(
            err.fields(),
            vec![Quantity::Temperature, Quantity::Humidity, Quantity::Pressure]
        );
        assert_eq!(
            err.to_string(),
            "Temperature 'abc' is not a number; Humidity 150 is outside 0 to 100; \
             Pressure -5 must not be negative"
        );
    }

    #[test]
    fn test_custom_temperature_bounds() {
        let validator = SubmissionValidator::new(ValidatorConfig {
            temperature_min: 0.0,
            temperature_max: 400.0,
        });
        assert!(validator.validate("300", "50", "1000").is_ok());
        assert!(validator.validate("-1", "50", "1000").is_err());
    }
}
