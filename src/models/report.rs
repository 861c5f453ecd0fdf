use serde::{Deserialize, Serialize};

use super::email::EmailCandidate;
use super::measurement::Measurement;
use super::order::Order;

/// Combined insight report over one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    /// Order value metrics.
    pub orders: OrderSummary,
    /// Email validity metrics.
    pub emails: EmailSummary,
    /// Measurement metrics.
    pub measurements: MeasurementSummary,
}

/// Results of averaging non-cancelled orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Total number of order records.
    pub total_orders: usize,
    /// Number of records with status "cancelled".
    pub cancelled_orders: usize,
    /// Average amount over non-cancelled orders (0.0 if none).
    pub average_order_value: f64,
}

/// Results of counting valid emails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSummary {
    /// Total number of entries, including non-text ones.
    pub total_entries: usize,
    /// Number of entries that are structurally valid addresses.
    pub valid_emails: usize,
    /// Share of valid entries as a percentage (0.0–100.0).
    pub valid_rate: f64,
}

/// Results of averaging measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementSummary {
    /// Total number of slots.
    pub total_slots: usize,
    /// Number of absent slots.
    pub absent_slots: usize,
    /// Average over present readings.
    pub average: f64,
}

/// API request body for the /api/orders endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersRequest {
    pub orders: Vec<Order>,
}

/// API request body for the /api/emails endpoint.
///
/// `emails` may be null or omitted, which counts as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailsRequest {
    #[serde(default)]
    pub emails: Option<Vec<EmailCandidate>>,
}

/// API request body for the /api/measurements endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementsRequest {
    pub values: Vec<Measurement>,
}
