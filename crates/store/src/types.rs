use serde::{Deserialize, Serialize};

/// A known utterance and how many times it has been observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    pub occurrence_count: u64,
}

impl Statement {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            occurrence_count: 1,
        }
    }
}

/// `statement_text` was observed as a reply to `in_response_to_text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseLink {
    pub statement_text: String,
    pub in_response_to_text: String,
}
