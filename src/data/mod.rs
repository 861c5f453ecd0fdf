//! Sample data generation for the insight report.
//!
//! Produces a storefront-like batch of orders, a contact list with
//! the usual mix of malformed entries, and a sensor series with gaps.
//! Uses seeded RNG for reproducible datasets across runs.
//!
//! # Data Distribution
//! - Orders: 55% paid, 20% shipped, 10% pending, 15% cancelled
//! - Amount range: $5–$400, rounded to cents
//! - Emails: ~half valid, the rest spread across each rejection rule
//!   plus non-text entries
//! - Measurements: ~20% absent, readings around 20.0 ± 5.0

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::email::EmailCandidate;
use crate::models::measurement::Measurement;
use crate::models::order::{Order, CANCELLED_STATUS};

const LOCAL_PARTS: [&str; 5] = ["ana", "joao.silva", "m.garcia", "support", "li_wei"];
const DOMAINS: [&str; 4] = ["example.com", "mail.example.org", "shop.co", "test.io"];

/// Shapes of malformed addresses, one per rejection rule.
const MALFORMED: [&str; 6] = [
    "plainaddress", "user@localhost", "@example.com", "a@b..com", "a@b@c.com", "x@.io"
];

/// Default data seed for reproducible generation.
pub const DATA_SEED: u64 = 42;

/// Sizes and seed of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    pub seed: u64,
    pub orders: usize,
    pub emails: usize,
    pub measurements: usize,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        DatasetSpec {
            seed: DATA_SEED,
            orders: 120,
            emails: 60,
            measurements: 90,
        }
    }
}

/// One generated batch of each input kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDataset {
    pub orders: Vec<Order>,
    pub emails: Vec<EmailCandidate>,
    pub measurements: Vec<Measurement>,
}

/// Generate a dataset. Always returns the same data for the same spec.
pub fn generate_dataset(spec: &DatasetSpec) -> SampleDataset {
    let mut rng = StdRng::seed_from_u64(spec.seed);

    let orders = (0..spec.orders).map(|_| generate_order(&mut rng)).collect();
    let emails = (0..spec.emails).map(|_| generate_email(&mut rng)).collect();
    let measurements = (0..spec.measurements)
        .map(|_| generate_measurement(&mut rng))
        .collect();

    SampleDataset {
        orders,
        emails,
        measurements,
    }
}

/// Get the standard sample dataset (default spec).
pub fn get_sample_dataset() -> SampleDataset {
    generate_dataset(&DatasetSpec::default())
}

fn generate_order(rng: &mut StdRng) -> Order {
    let roll: f64 = rng.gen();
    let status = if roll < 0.55 {
        "paid"
    } else if roll < 0.75 {
        "shipped"
    } else if roll < 0.85 {
        "pending"
    } else {
        CANCELLED_STATUS
    };

    Order::new(status, round_to_cents(rng.gen_range(5.0..400.0)))
}

fn generate_email(rng: &mut StdRng) -> EmailCandidate {
    let roll: f64 = rng.gen();
    if roll < 0.50 {
        let local = LOCAL_PARTS[rng.gen_range(0..LOCAL_PARTS.len())];
        let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
        EmailCandidate::Text(format!("{local}@{domain}"))
    } else if roll < 0.85 {
        EmailCandidate::Text(MALFORMED[rng.gen_range(0..MALFORMED.len())].to_string())
    } else if roll < 0.93 {
        EmailCandidate::Other(Value::Null)
    } else {
        EmailCandidate::Other(Value::from(rng.gen_range(100u32..1000)))
    }
}

fn generate_measurement(rng: &mut StdRng) -> Measurement {
    if rng.gen_bool(0.20) {
        Measurement::Absent
    } else {
        Measurement::number(round_to_cents(rng.gen_range(15.0..25.0)))
    }
}

/// Round a float to 2 decimal places.
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::email::is_valid_email;

    #[test]
    fn test_generates_requested_sizes() {
        let spec = DatasetSpec {
            seed: 1,
            orders: 10,
            emails: 20,
            measurements: 30,
        };
        let data = generate_dataset(&spec);
        assert_eq!(data.orders.len(), 10);
        assert_eq!(data.emails.len(), 20);
        assert_eq!(data.measurements.len(), 30);
    }

    #[test]
    fn test_is_deterministic() {
        let d1 = get_sample_dataset();
        let d2 = get_sample_dataset();
        assert_eq!(d1.orders, d2.orders);
        assert_eq!(d1.emails, d2.emails);
        assert_eq!(d1.measurements, d2.measurements);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_dataset(&DatasetSpec { seed: 1, ..DatasetSpec::default() });
        let b = generate_dataset(&DatasetSpec { seed: 2, ..DatasetSpec::default() });
        assert_ne!(a.orders, b.orders);
    }

    #[test]
    fn test_orders_are_complete_and_in_range() {
        let data = get_sample_dataset();
        for order in &data.orders {
            let amount = order.amount.expect("generated orders carry an amount");
            assert!(order.status.is_some());
            assert!((5.0..=400.0).contains(&amount), "Amount {amount} out of range");
        }
        assert!(data.orders.iter().any(Order::is_cancelled));
        assert!(data.orders.iter().any(|o| !o.is_cancelled()));
    }

    #[test]
    fn test_malformed_shapes_are_all_invalid() {
        for email in &MALFORMED {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_generated_addresses_are_valid() {
        for local in &LOCAL_PARTS {
            for domain in &DOMAINS {
                let email = format!("{local}@{domain}");
                assert!(is_valid_email(&email), "{email} should be accepted");
            }
        }
    }

    #[test]
    fn test_measurements_have_gaps_and_readings() {
        let data = get_sample_dataset();
        let absent = data.measurements.iter().filter(|m| m.is_absent()).count();
        assert!(absent > 0, "expected some absent slots");
        assert!(absent < data.measurements.len(), "expected some readings");
    }
}
