use parley_corpus::{read_corpus_path, CorpusError, CorpusLoader};
use parley_store::StatementStore;
use tempfile::TempDir;

#[tokio::test]
async fn loads_corpus_directory_into_store() {
    let temp = TempDir::new().expect("tempdir");
    tokio::fs::write(
        temp.path().join("greetings.yml"),
        r#"
categories: [greetings]
conversations:
  - - Good morning!
    - Good morning! How can I help you today?
"#,
    )
    .await
    .expect("write yaml");
    tokio::fs::write(
        temp.path().join("school.json"),
        r#"{"conversations": [["Who made you?", "A student at school."]]}"#,
    )
    .await
    .expect("write json");

    let corpora = read_corpus_path(temp.path()).await.expect("read corpora");
    assert_eq!(corpora.len(), 2);

    let mut store = StatementStore::new();
    let stats = CorpusLoader::load_all(&mut store, &corpora);
    assert_eq!(stats.statements, 4);
    assert_eq!(stats.links, 2);
    assert_eq!(
        store
            .get_response_candidates("Who made you?")
            .first()
            .map(|s| s.text.as_str()),
        Some("A student at school.")
    );
}

#[tokio::test]
async fn malformed_file_fails_the_whole_load() {
    let temp = TempDir::new().expect("tempdir");
    tokio::fs::write(temp.path().join("a.yml"), "- - fine\n  - also fine\n")
        .await
        .expect("write good");
    tokio::fs::write(temp.path().join("b.yml"), "- - broken\n  - null\n")
        .await
        .expect("write bad");

    let err = read_corpus_path(temp.path()).await.unwrap_err();
    assert!(
        matches!(err, CorpusError::MalformedCorpusEntry { turn: 1, .. }),
        "unexpected error: {err}"
    );
}
