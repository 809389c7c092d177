use crate::corpus::Corpus;
use parley_store::StatementStore;

/// Counters reported after a corpus has been loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub conversations: usize,
    pub turns: usize,
    /// Statements that did not exist before this load
    pub statements: usize,
    /// Links that did not exist before this load
    pub links: usize,
}

impl std::ops::AddAssign for LoadStats {
    fn add_assign(&mut self, rhs: Self) {
        self.conversations += rhs.conversations;
        self.turns += rhs.turns;
        self.statements += rhs.statements;
        self.links += rhs.links;
    }
}

/// Feeds corpora into a [`StatementStore`].
pub struct CorpusLoader;

impl CorpusLoader {
    /// Load every conversation of `corpus`, in order.
    ///
    /// Each turn is counted with `add_statement`, then linked as a response to the turn
    /// before it. Loading the same corpus again adds no statements or links; only
    /// occurrence counts grow.
    pub fn load(store: &mut StatementStore, corpus: &Corpus) -> LoadStats {
        let stats = Self::load_conversations(store, &corpus.conversations);
        log::info!(
            "Loaded corpus '{}': {} conversations, {} new statements, {} new links",
            corpus.name,
            stats.conversations,
            stats.statements,
            stats.links
        );
        stats
    }

    pub fn load_all<'a>(
        store: &mut StatementStore,
        corpora: impl IntoIterator<Item = &'a Corpus>,
    ) -> LoadStats {
        let mut total = LoadStats::default();
        for corpus in corpora {
            total += Self::load(store, corpus);
        }
        total
    }

    pub fn load_conversations(store: &mut StatementStore, conversations: &[Vec<String>]) -> LoadStats {
        let statements_before = store.len();
        let links_before = store.link_count();
        let mut turns = 0;

        for conversation in conversations {
            for text in conversation {
                store.add_statement(text);
            }
            for pair in conversation.windows(2) {
                store.add_response_link(&pair[1], &pair[0]);
            }
            turns += conversation.len();
        }

        LoadStats {
            conversations: conversations.len(),
            turns,
            statements: store.len() - statements_before,
            links: store.link_count() - links_before,
        }
    }
}
