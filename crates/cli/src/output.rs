use serde::{Deserialize, Serialize};

/// `{"message": "..."}` as sent by the chat page.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// `{"response": "..."}` returned to the chat page.
#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse<'a> {
    pub response: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatsOutput {
    pub statements: usize,
    pub links: usize,
    pub prompts: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct TrainOutput {
    pub snapshot: String,
    pub conversations: usize,
    pub statements: usize,
    pub links: usize,
}
