use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::levenshtein::levenshtein_distance;
use crate::normalize::tokenize;

/// Closed set of comparison strategies, chosen by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityStrategy {
    /// Dice coefficient over the sets of normalized tokens
    #[default]
    TokenOverlap,

    /// `1 - distance / max_len` over the normalized text
    Levenshtein,
}

impl SimilarityStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TokenOverlap => "token_overlap",
            Self::Levenshtein => "levenshtein",
        }
    }
}

impl std::fmt::Display for SimilarityStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SimilarityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "token_overlap" | "tokens" | "dice" => Ok(Self::TokenOverlap),
            "levenshtein" | "edit" => Ok(Self::Levenshtein),
            other => Err(format!(
                "unknown similarity strategy '{other}' (expected token_overlap|levenshtein)"
            )),
        }
    }
}

/// Scores statement pairs with one fixed strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator {
    strategy: SimilarityStrategy,
}

impl Comparator {
    #[must_use]
    pub const fn new(strategy: SimilarityStrategy) -> Self {
        Self { strategy }
    }

    /// Similarity in `[0.0, 1.0]`; symmetric in its arguments.
    ///
    /// Two texts without any tokens are identical (1.0); one empty side scores 0.0.
    #[must_use]
    pub fn score(&self, a: &str, b: &str) -> f32 {
        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);

        match (tokens_a.is_empty(), tokens_b.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }

        match self.strategy {
            SimilarityStrategy::TokenOverlap => dice(&tokens_a, &tokens_b),
            SimilarityStrategy::Levenshtein => edit_ratio(&tokens_a.join(" "), &tokens_b.join(" ")),
        }
    }
}

fn dice(a: &[String], b: &[String]) -> f32 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let shared = set_a.intersection(&set_b).count();
    let total = set_a.len() + set_b.len();
    (2 * shared) as f32 / total as f32
}

fn edit_ratio(a: &str, b: &str) -> f32 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(a, b);
    1.0 - distance as f32 / longest as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STRATEGIES: [SimilarityStrategy; 2] =
        [SimilarityStrategy::TokenOverlap, SimilarityStrategy::Levenshtein];

    #[test]
    fn identical_text_scores_one() {
        for strategy in STRATEGIES {
            let comparator = Comparator::new(strategy);
            assert_eq!(comparator.score("hello world", "hello world"), 1.0);
            assert_eq!(comparator.score("Hello, World!", "hello world"), 1.0);
        }
    }

    #[test]
    fn disjoint_tokens_score_zero() {
        let comparator = Comparator::new(SimilarityStrategy::TokenOverlap);
        assert_eq!(comparator.score("hello", "goodbye"), 0.0);
    }

    #[test]
    fn empty_inputs() {
        for strategy in STRATEGIES {
            let comparator = Comparator::new(strategy);
            assert_eq!(comparator.score("", ""), 1.0);
            assert_eq!(comparator.score("!!", "   "), 1.0);
            assert_eq!(comparator.score("", "hello"), 0.0);
            assert_eq!(comparator.score("hello", ""), 0.0);
        }
    }

    #[test]
    fn token_overlap_counts_sets() {
        let comparator = Comparator::new(SimilarityStrategy::TokenOverlap);
        // {good, morning} vs {good, afternoon}: 2*1 / (2+2)
        assert_eq!(comparator.score("Good morning!", "Good afternoon!"), 0.5);
        // Repeated tokens do not inflate the overlap.
        assert_eq!(comparator.score("hi hi hi", "hi"), 1.0);
    }

    #[test]
    fn levenshtein_ratio() {
        let comparator = Comparator::new(SimilarityStrategy::Levenshtein);
        // "kitten" -> "sitting": 3 edits over 7 chars
        let score = comparator.score("kitten", "sitting");
        assert!((score - (1.0 - 3.0 / 7.0)).abs() < 1e-6);
    }

    #[test]
    fn parses_strategy_names() {
        assert_eq!(
            "token-overlap".parse::<SimilarityStrategy>().unwrap(),
            SimilarityStrategy::TokenOverlap
        );
        assert_eq!(
            "Levenshtein".parse::<SimilarityStrategy>().unwrap(),
            SimilarityStrategy::Levenshtein
        );
        assert!("cosine".parse::<SimilarityStrategy>().is_err());
    }

    proptest! {
        #[test]
        fn proptest_score_is_symmetric(a in "[a-zA-Z ,.!?']{0,40}", b in "[a-zA-Z ,.!?']{0,40}") {
            for strategy in STRATEGIES {
                let comparator = Comparator::new(strategy);
                prop_assert_eq!(comparator.score(&a, &b), comparator.score(&b, &a));
            }
        }

        #[test]
        fn proptest_score_is_bounded(a in "\\PC{0,40}", b in "\\PC{0,40}") {
            for strategy in STRATEGIES {
                let score = Comparator::new(strategy).score(&a, &b);
                prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
            }
        }

        #[test]
        fn proptest_self_similarity_is_one(a in "[a-z ]{0,40}") {
            for strategy in STRATEGIES {
                prop_assert_eq!(Comparator::new(strategy).score(&a, &a), 1.0);
            }
        }
    }
}
