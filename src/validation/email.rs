//! Structural email checks.
//!
//! These are shape heuristics, not a standards-compliant validator.
//! An address passes when it has:
//! - exactly one `@`, with a non-empty local part before it;
//! - a domain containing at least one `.`;
//! - no empty domain labels (rejects "a..b", ".com", "b.").

use crate::models::email::EmailCandidate;

/// Returns true if `candidate` has the shape `local@label.label[.label...]`.
pub fn is_valid_email(candidate: &str) -> bool {
    let mut parts = candidate.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

/// Count the text entries that pass [`is_valid_email`].
///
/// Non-text entries are skipped silently. A missing or empty list counts
/// as zero. Duplicates are counted each time they appear.
pub fn count_valid_emails(emails: Option<&[EmailCandidate]>) -> usize {
    let emails = match emails {
        Some(emails) if !emails.is_empty() => emails,
        _ => return 0,
    };

    let count = emails
        .iter()
        .filter_map(EmailCandidate::as_text)
        .filter(|candidate| is_valid_email(candidate))
        .count();

    tracing::debug!(entries = emails.len(), valid = count, "counted valid emails");
    count
}
