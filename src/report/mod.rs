//! Insight report generation.
//!
//! Runs the order, email and measurement computations over one
//! dataset and records the counts behind each figure.

use crate::data::SampleDataset;
use crate::error::InsightError;
use crate::metrics::{average_non_cancelled, average_valid_measurements};
use crate::models::report::{EmailSummary, InsightReport, MeasurementSummary, OrderSummary};
use crate::validation::count_valid_emails;

/// Generate the combined report for a dataset.
///
/// # Errors
/// Propagates order field lookups and measurement failures unchanged,
/// including `InvalidInput` when the measurement series has no readings.
pub fn generate_report(dataset: &SampleDataset) -> Result<InsightReport, InsightError> {
    let orders = OrderSummary {
        total_orders: dataset.orders.len(),
        cancelled_orders: dataset.orders.iter().filter(|o| o.is_cancelled()).count(),
        average_order_value: average_non_cancelled(&dataset.orders)?,
    };

    let valid_emails = count_valid_emails(Some(dataset.emails.as_slice()));
    let emails = EmailSummary {
        total_entries: dataset.emails.len(),
        valid_emails,
        valid_rate: percentage(valid_emails, dataset.emails.len()),
    };

    let measurements = MeasurementSummary {
        total_slots: dataset.measurements.len(),
        absent_slots: dataset.measurements.iter().filter(|m| m.is_absent()).count(),
        average: average_valid_measurements(&dataset.measurements)?,
    };

    tracing::info!(
        orders = orders.total_orders,
        emails = emails.total_entries,
        measurements = measurements.total_slots,
        "generated insight report"
    );

    Ok(InsightReport {
        orders,
        emails,
        measurements,
    })
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
