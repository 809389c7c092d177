use crate::error::{Result, SelectorError};
use parley_similarity::SimilarityStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reply used when no stored prompt is close enough to the input.
pub const DEFAULT_FALLBACK_RESPONSE: &str = "I don't understand.";

/// Fuzzy matches must score strictly above this; 0.0 accepts any shared token.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.0;

/// Matching policy for a bot.
///
/// ```toml
/// fallback_response = "I don't understand."
/// confidence_threshold = 0.0
/// strategy = "token_overlap"   # or "levenshtein"
/// learn = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    /// Returned when nothing matches (never blank)
    pub fallback_response: String,

    /// Minimum similarity a fuzzy prompt must exceed, in `[0.0, 1.0)`
    pub confidence_threshold: f32,

    /// How inputs are compared against stored prompts
    pub strategy: SimilarityStrategy,

    /// Store each input as a statement after answering
    pub learn: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            fallback_response: DEFAULT_FALLBACK_RESPONSE.to_string(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            strategy: SimilarityStrategy::default(),
            learn: false,
        }
    }
}

impl BotConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading bot config from {}", path.display());
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fallback_response.trim().is_empty() {
            return Err(SelectorError::InvalidConfig(
                "fallback_response must not be blank".to_string(),
            ));
        }

        if !self.confidence_threshold.is_finite()
            || !(0.0..1.0).contains(&self.confidence_threshold)
        {
            return Err(SelectorError::InvalidConfig(format!(
                "confidence_threshold ({}) must be in [0.0, 1.0)",
                self.confidence_threshold
            )));
        }

        Ok(())
    }
}
