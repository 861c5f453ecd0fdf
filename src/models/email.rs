use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry in an email list.
///
/// Decoded untagged from JSON: strings become `Text`, any other value
/// (numbers, null, objects) becomes `Other` and is never validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EmailCandidate {
    /// A text entry, eligible for validation.
    Text(String),
    /// Anything that is not text.
    Other(Value),
}

impl EmailCandidate {
    /// Returns the text if this entry is text-typed.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EmailCandidate::Text(text) => Some(text),
            EmailCandidate::Other(_) => None,
        }
    }
}

impl From<&str> for EmailCandidate {
    fn from(text: &str) -> Self {
        EmailCandidate::Text(text.to_string())
    }
}
