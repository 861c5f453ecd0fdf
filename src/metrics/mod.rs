//! Averaging computations over order and measurement batches.
//!
//! Both are single linear scans. They differ only in what an empty
//! result means: no qualifying orders averages to zero, while no
//! present measurements is an error.

pub mod measurements;
pub mod orders;

pub use measurements::average_valid_measurements;
pub use orders::average_non_cancelled;
