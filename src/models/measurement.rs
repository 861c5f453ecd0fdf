use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InsightError;

/// A raw measurement reading, before coercion to floating point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MeasurementValue {
    Number(f64),
    Flag(bool),
    Text(String),
    /// Any other JSON value (objects, arrays); never numeric.
    Other(Value),
}

impl MeasurementValue {
    /// Coerces the reading to `f64`.
    ///
    /// Booleans map to 1.0 / 0.0 and text is parsed after trimming
    /// surrounding whitespace. `index` locates the entry on failure.
    pub fn to_f64(&self, index: usize) -> Result<f64, InsightError> {
        match self {
            MeasurementValue::Number(value) => Ok(*value),
            MeasurementValue::Flag(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
            MeasurementValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| self.conversion_error(index)),
            MeasurementValue::Other(_) => Err(self.conversion_error(index)),
        }
    }

    fn conversion_error(&self, index: usize) -> InsightError {
        InsightError::Conversion {
            index,
            value: self.to_string(),
        }
    }
}

impl std::fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementValue::Number(value) => write!(f, "{value}"),
            MeasurementValue::Flag(flag) => write!(f, "{flag}"),
            MeasurementValue::Text(text) => write!(f, "{text}"),
            MeasurementValue::Other(value) => write!(f, "{value}"),
        }
    }
}

/// A measurement slot: either a reading or an explicit gap.
///
/// JSON `null` decodes to `Absent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "Option<MeasurementValue>", into = "Option<MeasurementValue>")]
pub enum Measurement {
    Present(MeasurementValue),
    Absent,
}

impl Measurement {
    /// Shorthand for a present numeric reading.
    pub fn number(value: f64) -> Self {
        Measurement::Present(MeasurementValue::Number(value))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Measurement::Absent)
    }
}

impl From<Option<MeasurementValue>> for Measurement {
    fn from(value: Option<MeasurementValue>) -> Self {
        match value {
            Some(value) => Measurement::Present(value),
            None => Measurement::Absent,
        }
    }
}

impl From<Measurement> for Option<MeasurementValue> {
    fn from(measurement: Measurement) -> Self {
        match measurement {
            Measurement::Present(value) => Some(value),
            Measurement::Absent => None,
        }
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        value.map(MeasurementValue::Number).into()
    }
}
