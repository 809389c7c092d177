use crate::types::{ResponseLink, Statement};
use std::collections::HashMap;

/// In-memory statement store.
///
/// Statements are keyed by their exact (case-sensitive) text and keep insertion order.
/// Links are deduplicated and also keep insertion order, which is what response
/// tie-breaks rely on.
#[derive(Debug, Clone, Default)]
pub struct StatementStore {
    statements: Vec<Statement>,
    /// text -> position in `statements`
    index: HashMap<String, usize>,
    /// Links in insertion order
    links: Vec<ResponseLink>,
    /// prompt position -> response positions, in link insertion order
    responses: HashMap<usize, Vec<usize>>,
}

impl StatementStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text`, or bump its occurrence count if it is already known.
    ///
    /// Returns the statement's insertion position.
    pub fn add_statement(&mut self, text: &str) -> usize {
        if let Some(&pos) = self.index.get(text) {
            self.statements[pos].occurrence_count += 1;
            return pos;
        }
        self.insert(Statement::new(text))
    }

    /// Record that `response_text` was observed as a reply to `prompt_text`.
    ///
    /// Missing endpoints are created with `add_statement`; existing endpoints are left
    /// untouched. Recording the same link twice is a no-op.
    pub fn add_response_link(&mut self, response_text: &str, prompt_text: &str) {
        let prompt = self.ensure(prompt_text);
        let response = self.ensure(response_text);

        let replies = self.responses.entry(prompt).or_default();
        if replies.contains(&response) {
            return;
        }
        replies.push(response);
        self.links.push(ResponseLink {
            statement_text: response_text.to_string(),
            in_response_to_text: prompt_text.to_string(),
        });
    }

    /// Statements linked as responses to `prompt_text`, in link insertion order.
    #[must_use]
    pub fn get_response_candidates(&self, prompt_text: &str) -> Vec<&Statement> {
        self.index
            .get(prompt_text)
            .and_then(|pos| self.responses.get(pos))
            .map(|replies| replies.iter().map(|&r| &self.statements[r]).collect())
            .unwrap_or_default()
    }

    /// Every known statement, in insertion order.
    #[must_use]
    pub fn all_statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Statements that have at least one linked response, in insertion order.
    pub fn prompts(&self) -> impl Iterator<Item = &Statement> {
        self.statements
            .iter()
            .enumerate()
            .filter(|(pos, _)| self.responses.get(pos).is_some_and(|r| !r.is_empty()))
            .map(|(_, statement)| statement)
    }

    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Statement> {
        self.index.get(text).map(|&pos| &self.statements[pos])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    #[must_use]
    pub fn links(&self) -> &[ResponseLink] {
        &self.links
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    fn ensure(&mut self, text: &str) -> usize {
        match self.index.get(text) {
            Some(&pos) => pos,
            None => self.add_statement(text),
        }
    }

    /// Append a statement that is known to be absent.
    pub(crate) fn insert(&mut self, statement: Statement) -> usize {
        let pos = self.statements.len();
        self.index.insert(statement.text.clone(), pos);
        self.statements.push(statement);
        pos
    }
}
