use crate::corpus::{Corpus, CorpusFormat};
use crate::error::Result;

const BUNDLED_GENERAL: &str = include_str!("../data/general.yml");
const BUNDLED_SCHOOL: &str = include_str!("../data/school.yml");
const BUNDLED_GREETINGS: &str = include_str!("../data/greetings.yml");

/// Names of the bundled corpora, in load order.
pub const BUNDLED_CORPUS_NAMES: [&str; 3] = ["general", "school", "greetings"];

/// General conversation first, then the school and greeting exchanges.
pub fn bundled_corpora() -> Result<Vec<Corpus>> {
    [BUNDLED_GENERAL, BUNDLED_SCHOOL, BUNDLED_GREETINGS]
        .into_iter()
        .zip(BUNDLED_CORPUS_NAMES)
        .map(|(text, name)| Corpus::parse(name, text, CorpusFormat::Yaml))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CorpusLoader;
    use parley_store::StatementStore;

    #[test]
    fn bundled_corpora_parse_in_order() {
        let corpora = bundled_corpora().expect("bundled corpora parse");
        let names: Vec<&str> = corpora.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, BUNDLED_CORPUS_NAMES);
        assert!(corpora.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn school_exchanges_are_one_chain() {
        let corpora = bundled_corpora().unwrap();
        let mut store = StatementStore::new();
        CorpusLoader::load_all(&mut store, &corpora);

        let reply: Vec<&str> = store
            .get_response_candidates("Who made you?")
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(
            reply,
            vec!["I was created by a talented Year 9 student at Tempe High School!"]
        );

        // Each entry answers the one before it, including across question boundaries.
        let after_answer: Vec<&str> = store
            .get_response_candidates(
                "I find all subjects interesting, but I really enjoy helping with coding!",
            )
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(after_answer, vec!["Can you help with homework?"]);
    }
}
