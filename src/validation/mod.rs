//! Structural checks on free-form contact data.

pub mod email;

pub use email::{count_valid_emails, is_valid_email};
