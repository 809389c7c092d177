use crate::error::{CorpusError, Result};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File encodings a corpus can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Yaml,
    Json,
}

impl CorpusFormat {
    /// Pick the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A named, ordered list of conversations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub name: String,
    pub categories: Vec<String>,
    pub conversations: Vec<Vec<String>>,
}

impl Corpus {
    #[must_use]
    pub fn from_conversations(name: impl Into<String>, conversations: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
            conversations,
        }
    }

    /// Parse corpus text in the given format. `name` identifies the corpus in errors.
    pub fn parse(name: &str, text: &str, format: CorpusFormat) -> Result<Self> {
        let value: Value = match format {
            CorpusFormat::Yaml => serde_yaml::from_str(text).map_err(|error| CorpusError::Yaml {
                origin: name.to_string(),
                error,
            })?,
            CorpusFormat::Json => {
                let json: serde_json::Value =
                    serde_json::from_str(text).map_err(|error| CorpusError::Json {
                        origin: name.to_string(),
                        error,
                    })?;
                serde_yaml::to_value(json).map_err(|error| CorpusError::Yaml {
                    origin: name.to_string(),
                    error,
                })?
            }
        };
        Self::from_value(name, value)
    }

    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.conversations.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn from_value(name: &str, value: Value) -> Result<Self> {
        let malformed = |reason: &str| CorpusError::MalformedCorpus {
            origin: name.to_string(),
            reason: reason.to_string(),
        };

        let (categories, conversations) = match value {
            Value::Sequence(conversations) => (Vec::new(), conversations),
            Value::Mapping(mut doc) => {
                let categories = match doc.remove("categories") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Sequence(items)) => {
                        let mut categories = Vec::with_capacity(items.len());
                        for (idx, item) in items.into_iter().enumerate() {
                            match item {
                                Value::String(category) => categories.push(category),
                                other => {
                                    return Err(malformed(&format!(
                                        "category {idx} is {}, expected a string",
                                        value_kind(&other)
                                    )))
                                }
                            }
                        }
                        categories
                    }
                    Some(Value::String(single)) => vec![single],
                    Some(_) => return Err(malformed("`categories` must be a list of strings")),
                };
                match doc.remove("conversations") {
                    Some(Value::Sequence(conversations)) => (categories, conversations),
                    Some(Value::Null) => (categories, Vec::new()),
                    Some(_) => return Err(malformed("`conversations` must be a list")),
                    None => return Err(malformed("missing `conversations` list")),
                }
            }
            Value::Null => (Vec::new(), Vec::new()),
            _ => return Err(malformed("expected a list of conversations")),
        };

        let mut parsed = Vec::with_capacity(conversations.len());
        for (conversation_idx, conversation) in conversations.into_iter().enumerate() {
            let turns = match conversation {
                Value::Sequence(turns) => turns,
                other => {
                    return Err(malformed(&format!(
                        "conversation {conversation_idx} is {}, expected a list",
                        value_kind(&other)
                    )))
                }
            };
            let mut texts = Vec::with_capacity(turns.len());
            for (turn_idx, turn) in turns.into_iter().enumerate() {
                match turn {
                    Value::String(text) => texts.push(text),
                    other => {
                        return Err(CorpusError::MalformedCorpusEntry {
                            origin: name.to_string(),
                            conversation: conversation_idx,
                            turn: turn_idx,
                            found: value_kind(&other),
                        })
                    }
                }
            }
            parsed.push(texts);
        }

        Ok(Self {
            name: name.to_string(),
            categories,
            conversations: parsed,
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Read one corpus file, or every corpus file under a directory.
///
/// Directory entries are visited in path order so repeated loads produce the same
/// statement insertion order.
pub async fn read_corpus_path(path: impl AsRef<Path>) -> Result<Vec<Corpus>> {
    let path = path.as_ref();
    let files = if tokio::fs::metadata(path).await?.is_dir() {
        corpus_files_in(path)?
    } else {
        if CorpusFormat::from_path(path).is_none() {
            return Err(CorpusError::UnsupportedFormat(path.display().to_string()));
        }
        vec![path.to_path_buf()]
    };

    let mut corpora = Vec::with_capacity(files.len());
    for file in files {
        let Some(format) = CorpusFormat::from_path(&file) else {
            continue;
        };
        log::debug!("Reading corpus file {}", file.display());
        let text = tokio::fs::read_to_string(&file).await?;
        corpora.push(Corpus::parse(&file.display().to_string(), &text, format)?);
    }
    Ok(corpora)
}

fn corpus_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && CorpusFormat::from_path(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
