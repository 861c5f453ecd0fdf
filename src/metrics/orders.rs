//! Average order value over non-cancelled orders.

use crate::error::InsightError;
use crate::models::order::{Order, CANCELLED_STATUS};

/// Average `amount` across every order whose status is not exactly "cancelled".
///
/// Returns `0.0` when no order qualifies (including an empty batch).
/// The status of each record is read first; the amount is only read for
/// records that qualify, so a cancelled record without an amount is fine.
///
/// # Errors
/// `MissingField` for the first record lacking `status`, or lacking
/// `amount` while not cancelled.
pub fn average_non_cancelled(orders: &[Order]) -> Result<f64, InsightError> {
    let mut total = 0.0;
    let mut count = 0usize;

    for (index, order) in orders.iter().enumerate() {
        if order.status(index)? != CANCELLED_STATUS {
            total += order.amount(index)?;
            count += 1;
        }
    }

    tracing::debug!(orders = orders.len(), counted = count, "averaged non-cancelled orders");

    if count == 0 {
        return Ok(0.0);
    }
    Ok(total / count as f64)
}
