use crate::config::BotConfig;
use crate::error::Result;
use crate::selector::{ResponseSelector, Selection};
use parley_store::StatementStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A response selector bound to a shared statement store.
///
/// Replies are computed under a read lock, so any number of `respond` calls can run at
/// once. Writes (`learn_response` and learning mode) take the write lock and are
/// serialized.
#[derive(Clone)]
pub struct ChatBot {
    store: Arc<RwLock<StatementStore>>,
    selector: ResponseSelector,
    learn: bool,
}

impl ChatBot {
    pub fn new(store: StatementStore, config: BotConfig) -> Result<Self> {
        Self::with_shared_store(Arc::new(RwLock::new(store)), config)
    }

    pub fn with_shared_store(
        store: Arc<RwLock<StatementStore>>,
        config: BotConfig,
    ) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "ChatBot ready (strategy={}, threshold={:.3}, learn={})",
            config.strategy,
            config.confidence_threshold,
            config.learn
        );
        Ok(Self {
            store,
            selector: ResponseSelector::new(&config),
            learn: config.learn,
        })
    }

    pub async fn respond(&self, input: &str) -> String {
        self.respond_detailed(input).await.text
    }

    /// Select a reply; in learning mode the input is stored afterwards.
    pub async fn respond_detailed(&self, input: &str) -> Selection {
        let selection = {
            let store = self.store.read().await;
            self.selector.select(&store, input)
        };
        log::debug!(
            "Reply origin={} confidence={:.3}",
            selection.origin.as_str(),
            selection.confidence
        );

        if self.learn {
            self.store.write().await.add_statement(input);
        }
        selection
    }

    /// Record `response` as a reply to `prompt`.
    pub async fn learn_response(&self, response: &str, prompt: &str) {
        let mut store = self.store.write().await;
        store.add_statement(response);
        store.add_response_link(response, prompt);
    }

    #[must_use]
    pub fn store(&self) -> Arc<RwLock<StatementStore>> {
        Arc::clone(&self.store)
    }
}
