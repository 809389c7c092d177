use clap::ValueEnum;
use parley_selector::SimilarityStrategy;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum StrategyFlag {
    TokenOverlap,
    Levenshtein,
}

impl StrategyFlag {
    pub(crate) const fn as_domain(self) -> SimilarityStrategy {
        match self {
            StrategyFlag::TokenOverlap => SimilarityStrategy::TokenOverlap,
            StrategyFlag::Levenshtein => SimilarityStrategy::Levenshtein,
        }
    }
}
