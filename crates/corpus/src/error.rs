use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Malformed corpus entry in {origin}: conversation {conversation}, turn {turn} is {found}, expected a string")]
    MalformedCorpusEntry {
        origin: String,
        conversation: usize,
        turn: usize,
        found: &'static str,
    },

    #[error("Malformed corpus {origin}: {reason}")]
    MalformedCorpus { origin: String, reason: String },

    #[error("Failed to parse YAML corpus {origin}: {error}")]
    Yaml {
        origin: String,
        error: serde_yaml::Error,
    },

    #[error("Failed to parse JSON corpus {origin}: {error}")]
    Json {
        origin: String,
        error: serde_json::Error,
    },

    #[error("Unsupported corpus file (expected .yml, .yaml or .json): {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),
}
