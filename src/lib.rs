//! Record Insights — Shared Library
//!
//! This crate contains the order, email and measurement computations,
//! their domain types, and the sample data used by the reports.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and logic reusable.

pub mod config;
pub mod data;
pub mod error;
pub mod responses;
pub mod metrics;
pub mod models;
pub mod report;
pub mod validation;

pub use error::InsightError;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
