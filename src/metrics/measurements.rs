//! Average over measurement series with gaps.

use crate::error::InsightError;
use crate::models::measurement::Measurement;

/// Average every present measurement, skipping absent slots.
///
/// # Errors
/// - `InvalidInput("No valid measurements to average")` when no slot is present.
/// - `Conversion` for the first present value that is not numeric.
pub fn average_valid_measurements(values: &[Measurement]) -> Result<f64, InsightError> {
    let mut total = 0.0;
    let mut valid_count = 0usize;

    for (index, measurement) in values.iter().enumerate() {
        match measurement {
            Measurement::Present(value) => {
                total += value.to_f64(index)?;
                valid_count += 1;
            }
            Measurement::Absent => {}
        }
    }

    if valid_count == 0 {
        tracing::debug!(values = values.len(), "no present measurements");
        return Err(InsightError::no_valid_measurements());
    }

    tracing::debug!(values = values.len(), valid = valid_count, "averaged measurements");
    Ok(total / valid_count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::measurement::MeasurementValue;

    fn series(values: &[Option<f64>]) -> Vec<Measurement> {
        values.iter().copied().map(Measurement::from).collect()
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let values = series(&[Some(1.0), None, Some(3.0)]);
        assert_eq!(average_valid_measurements(&values).unwrap(), 2.0);
    }

    #[test]
    fn test_all_absent_is_invalid_input() {
        let values = series(&[None, None]);
        let err = average_valid_measurements(&values).unwrap_err();
        assert_eq!(err, InsightError::InvalidInput("No valid measurements to average".to_string()));
        assert_eq!(err.to_string(), "No valid measurements to average");
    }

    #[test]
    fn test_empty_series_is_invalid_input() {
        assert!(matches!(
            average_valid_measurements(&[]),
            Err(InsightError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mixed_readings_are_coerced() {
        let values = vec![
            Measurement::Present(MeasurementValue::Text("4".to_string())),
            Measurement::Absent,
            Measurement::Present(MeasurementValue::Flag(true)),
            Measurement::number(1.0),
        ];
        assert_eq!(average_valid_measurements(&values).unwrap(), 2.0);
    }

    #[test]
    fn test_non_numeric_reading_fails() {
        let values = vec![
            Measurement::number(1.0),
            Measurement::Absent,
            Measurement::Present(MeasurementValue::Text("n/a".to_string())),
        ];
        assert_eq!(
            average_valid_measurements(&values).unwrap_err(),
            InsightError::Conversion { index: 2, value: "n/a".to_string() }
        );
    }

    #[test]
    fn test_is_idempotent() {
        let values = series(&[Some(2.0), None, Some(5.0), Some(8.0)]);
        let first = average_valid_measurements(&values).unwrap();
        let second = average_valid_measurements(&values).unwrap();
        assert_eq!(first, 5.0);
        assert_eq!(first, second);
    }
}
