use serde::{Deserialize, Serialize};

use crate::error::InsightError;

/// Status value that excludes an order from the average.
pub const CANCELLED_STATUS: &str = "cancelled";

/// An order record as received from a storefront export.
///
/// Both fields are optional on the wire so a record with a missing key
/// can still be decoded; the accessors fail fast when a field is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order status (e.g., "paid", "shipped", "cancelled").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Order amount. Not validated or coerced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl Order {
    /// Creates a complete order record.
    pub fn new(status: impl Into<String>, amount: f64) -> Self {
        Order {
            status: Some(status.into()),
            amount: Some(amount),
        }
    }

    /// Returns the status, or `MissingField` if the record has none.
    ///
    /// `index` is the record's position in the batch being scanned and is
    /// only used to locate the failure.
    pub fn status(&self, index: usize) -> Result<&str, InsightError> {
        self.status
            .as_deref()
            .ok_or(InsightError::MissingField { index, field: "status" })
    }

    /// Returns the amount, or `MissingField` if the record has none.
    pub fn amount(&self, index: usize) -> Result<f64, InsightError> {
        self.amount
            .ok_or(InsightError::MissingField { index, field: "amount" })
    }

    /// Returns true if the status is exactly "cancelled".
    pub fn is_cancelled(&self) -> bool {
        self.status.as_deref() == Some(CANCELLED_STATUS)
    }
}
