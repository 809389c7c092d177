use crate::config::BotConfig;
use parley_similarity::Comparator;
use parley_store::{Statement, StatementStore};

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrigin {
    /// The input is a stored prompt with linked responses
    Exact,

    /// The input was matched to the closest stored prompt
    Closest,

    /// Nothing matched; the configured fallback was used
    Fallback,
}

impl MatchOrigin {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchOrigin::Exact => "exact",
            MatchOrigin::Closest => "closest",
            MatchOrigin::Fallback => "fallback",
        }
    }
}

/// Chosen reply plus how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub text: String,
    pub origin: MatchOrigin,
    /// Similarity between the input and `matched_prompt` (1.0 for exact, 0.0 for fallback)
    pub confidence: f32,
    pub matched_prompt: Option<String>,
}

/// Stateless best-match selection over a borrowed store.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    comparator: Comparator,
    threshold: f32,
    fallback: String,
}

impl ResponseSelector {
    #[must_use]
    pub fn new(config: &BotConfig) -> Self {
        Self {
            comparator: Comparator::new(config.strategy),
            threshold: config.confidence_threshold,
            fallback: config.fallback_response.clone(),
        }
    }

    /// Reply text for `input`. Never fails; degrades to the fallback response.
    #[must_use]
    pub fn respond(&self, store: &StatementStore, input: &str) -> String {
        self.select(store, input).text
    }

    pub fn select(&self, store: &StatementStore, input: &str) -> Selection {
        if store.is_empty() {
            log::debug!("Statement store is empty, using fallback");
            return self.fallback();
        }

        let direct = store.get_response_candidates(input);
        if let Some(reply) = pick_response(&direct) {
            return Selection {
                text: reply.text.clone(),
                origin: MatchOrigin::Exact,
                confidence: 1.0,
                matched_prompt: Some(input.to_string()),
            };
        }

        let Some((prompt, confidence)) = self.closest_prompt(store, input) else {
            log::debug!(
                "No prompt scored above {:.3} for {:?}, using fallback",
                self.threshold,
                input
            );
            return self.fallback();
        };

        let candidates = store.get_response_candidates(&prompt.text);
        match pick_response(&candidates) {
            Some(reply) => {
                log::debug!(
                    "Matched {:?} to prompt {:?} (confidence {:.3})",
                    input,
                    prompt.text,
                    confidence
                );
                Selection {
                    text: reply.text.clone(),
                    origin: MatchOrigin::Closest,
                    confidence,
                    matched_prompt: Some(prompt.text.clone()),
                }
            }
            None => {
                log::debug!(
                    "Closest statement {:?} has no replies, using fallback",
                    prompt.text
                );
                self.fallback()
            }
        }
    }

    /// Highest-scoring statement strictly above the threshold; the earliest stored
    /// statement wins ties. Reply-only statements compete too, and a win by one of them
    /// ends in the fallback.
    fn closest_prompt<'s>(
        &self,
        store: &'s StatementStore,
        input: &str,
    ) -> Option<(&'s Statement, f32)> {
        let mut best: Option<(&Statement, f32)> = None;
        for prompt in store.all_statements() {
            let score = self.comparator.score(input, &prompt.text);
            if score <= self.threshold {
                continue;
            }
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((prompt, score));
            }
        }
        best
    }

    fn fallback(&self) -> Selection {
        Selection {
            text: self.fallback.clone(),
            origin: MatchOrigin::Fallback,
            confidence: 0.0,
            matched_prompt: None,
        }
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(&BotConfig::default())
    }
}

/// Most frequent candidate; the earliest linked one wins ties.
fn pick_response<'s>(candidates: &[&'s Statement]) -> Option<&'s Statement> {
    let mut best: Option<&Statement> = None;
    for &candidate in candidates {
        if best.map_or(true, |top| candidate.occurrence_count > top.occurrence_count) {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimilarityStrategy;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn store_with(conversations: &[&[&str]]) -> StatementStore {
        let mut store = StatementStore::new();
        for conversation in conversations {
            for text in conversation.iter() {
                store.add_statement(text);
            }
            for pair in conversation.windows(2) {
                store.add_response_link(pair[1], pair[0]);
            }
        }
        store
    }

    #[test]
    fn exact_match_returns_linked_response() {
        let store = store_with(&[&["Good morning!", "Good morning! How can I help you today?"]]);
        let selection = ResponseSelector::default().select(&store, "Good morning!");
        assert_eq!(selection.text, "Good morning! How can I help you today?");
        assert_eq!(selection.origin, MatchOrigin::Exact);
        assert_eq!(selection.confidence, 1.0);
    }

    #[test]
    fn exact_match_beats_better_scoring_fuzzy_prompt() {
        // "how are you" is stored verbatim with its own reply; another prompt shares all
        // of its tokens but must not be considered.
        let store = store_with(&[
            &["How are you doing today", "Fuzzy reply"],
            &["how are you", "Exact reply"],
        ]);
        assert_eq!(
            ResponseSelector::default().respond(&store, "how are you"),
            "Exact reply"
        );
    }

    #[test]
    fn exact_match_is_case_sensitive_then_fuzzy() {
        let store = store_with(&[&["Hello", "Hi there"]]);
        let selection = ResponseSelector::default().select(&store, "hello");
        assert_eq!(selection.origin, MatchOrigin::Closest);
        assert_eq!(selection.text, "Hi there");
        assert_eq!(selection.matched_prompt.as_deref(), Some("Hello"));
        assert_eq!(selection.confidence, 1.0);
    }

    #[test]
    fn empty_store_returns_fallback() {
        let store = StatementStore::new();
        let selection = ResponseSelector::default().select(&store, "hello");
        assert_eq!(selection.text, "I don't understand.");
        assert_eq!(selection.origin, MatchOrigin::Fallback);
    }

    #[test]
    fn no_shared_tokens_returns_fallback() {
        let store = store_with(&[&["hello", "hi"]]);
        assert_eq!(
            ResponseSelector::default().respond(&store, "goodbye"),
            "I don't understand."
        );
    }

    #[test]
    fn custom_fallback_is_used() {
        let config = BotConfig {
            fallback_response: "Could you rephrase that?".to_string(),
            ..BotConfig::default()
        };
        let store = StatementStore::new();
        assert_eq!(
            ResponseSelector::new(&config).respond(&store, "anything"),
            "Could you rephrase that?"
        );
    }

    #[test]
    fn closest_statement_without_replies_falls_back() {
        // "weather today" is only ever a reply. It is the closest statement, so the
        // weaker "today is friday" prompt must not answer for it.
        let store = store_with(&[
            &["what is it like", "weather today"],
            &["today is friday", "Yay weekend"],
        ]);
        let selection = ResponseSelector::default().select(&store, "weather today");
        assert_eq!(selection.origin, MatchOrigin::Fallback);
        assert_eq!(selection.text, "I don't understand.");
        assert_eq!(selection.matched_prompt, None);
    }

    #[test]
    fn reply_only_statement_that_loses_does_not_block_a_match() {
        let store = store_with(&[&["what is it like", "weather today"]]);
        let selection = ResponseSelector::default().select(&store, "what is the weather like");
        assert_eq!(selection.origin, MatchOrigin::Closest);
        assert_eq!(selection.text, "weather today");
    }

    #[test]
    fn picks_highest_scoring_prompt() {
        let store = store_with(&[
            &["tell me a story", "Once upon a time..."],
            &["tell me a joke", "Why did the chicken cross the road?"],
        ]);
        let selection = ResponseSelector::default().select(&store, "please tell me a joke");
        assert_eq!(selection.text, "Why did the chicken cross the road?");
        assert_eq!(selection.matched_prompt.as_deref(), Some("tell me a joke"));
    }

    #[test]
    fn equal_scores_prefer_earliest_prompt() {
        let store = store_with(&[&["red apple", "first"], &["green apple", "second"]]);
        // "apple" shares one token with each prompt: identical scores.
        assert_eq!(ResponseSelector::default().respond(&store, "apple"), "first");
    }

    #[test]
    fn threshold_filters_weak_matches() {
        let store = store_with(&[&["good morning everyone", "Morning!"]]);
        let strict = BotConfig {
            confidence_threshold: 0.6,
            ..BotConfig::default()
        };
        // {good} shared: 2*1 / (1+3) = 0.5
        assert_eq!(
            ResponseSelector::new(&strict).respond(&store, "good"),
            "I don't understand."
        );
        assert_eq!(ResponseSelector::default().respond(&store, "good"), "Morning!");
    }

    #[test]
    fn most_frequent_response_wins() {
        let mut store = StatementStore::new();
        store.add_response_link("rare reply", "prompt");
        store.add_response_link("common reply", "prompt");
        store.add_statement("common reply");
        store.add_statement("common reply");

        assert_eq!(store.get("rare reply").map(|s| s.occurrence_count), Some(1));
        assert_eq!(store.get("common reply").map(|s| s.occurrence_count), Some(3));
        assert_eq!(
            ResponseSelector::default().respond(&store, "prompt"),
            "common reply"
        );
    }

    #[test]
    fn frequency_ties_prefer_earliest_link() {
        let mut store = StatementStore::new();
        store.add_statement("second");
        store.add_response_link("first", "prompt");
        store.add_response_link("second", "prompt");
        assert_eq!(ResponseSelector::default().respond(&store, "prompt"), "first");
    }

    #[test]
    fn levenshtein_strategy_matches_typos() {
        let store = store_with(&[&["what subjects do you like", "Coding!"]]);
        let config = BotConfig {
            strategy: SimilarityStrategy::Levenshtein,
            confidence_threshold: 0.8,
            ..BotConfig::default()
        };
        assert_eq!(
            ResponseSelector::new(&config).respond(&store, "what subjcts do you lik"),
            "Coding!"
        );
    }

    proptest! {
        #[test]
        fn proptest_respond_is_deterministic(input in "[a-z ]{0,30}") {
            let store = store_with(&[
                &["hello there", "hi"],
                &["how are you", "fine", "good to hear"],
                &["what is your name", "parley"],
            ]);
            let selector = ResponseSelector::default();
            let first = selector.select(&store, &input);
            for _ in 0..3 {
                prop_assert_eq!(&selector.select(&store, &input), &first);
            }
        }
    }
}
