use thiserror::Error;

pub type Result<T> = std::result::Result<T, SelectorError>;

#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("Invalid bot configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse bot configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
