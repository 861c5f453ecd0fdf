//! Domain models for the record insight computations.
//!
//! These types are shared across all modules: metrics, validation, data, and report.

pub mod email;
pub mod measurement;
pub mod order;
pub mod report;
