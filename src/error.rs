//! Errors raised by the record computations.

use thiserror::Error;

/// Message carried by [`InsightError::InvalidInput`] when a measurement
/// list has no present readings.
pub const NO_VALID_MEASUREMENTS: &str = "No valid measurements to average";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsightError {
    /// A required field was absent from a record.
    #[error("record {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },
    /// The input as a whole cannot produce a result.
    #[error("{0}")]
    InvalidInput(String),
    /// A present value could not be coerced to a number.
    #[error("value {value:?} at position {index} is not numeric")]
    Conversion { index: usize, value: String },
}

impl InsightError {
    pub fn no_valid_measurements() -> Self {
        InsightError::InvalidInput(NO_VALID_MEASUREMENTS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_is_verbatim() {
        assert_eq!(
            InsightError::no_valid_measurements().to_string(),
            "No valid measurements to average"
        );
    }

    #[test]
    fn test_missing_field_message_names_field() {
        let err = InsightError::MissingField { index: 2, field: "status" };
        assert_eq!(err.to_string(), "record 2 is missing field `status`");
    }
}
