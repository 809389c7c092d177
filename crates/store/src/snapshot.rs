use crate::error::{Result, StoreError};
use crate::store::StatementStore;
use crate::types::{ResponseLink, Statement};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const STORE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedStore {
    schema_version: u32,
    statements: Vec<Statement>,
    links: Vec<ResponseLink>,
}

impl StatementStore {
    /// Read a snapshot written by [`StatementStore::save`].
    ///
    /// Statement and link order is restored exactly, so tie-breaks behave the same as in
    /// the process that wrote the snapshot.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading statement store from {}", path.display());
        let bytes = tokio::fs::read(path).await?;
        let persisted: PersistedStore = serde_json::from_slice(&bytes)?;
        if persisted.schema_version != STORE_SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: persisted.schema_version,
                expected: STORE_SCHEMA_VERSION,
            });
        }

        let mut store = Self::new();
        for statement in persisted.statements {
            if store.contains(&statement.text) {
                log::warn!("Duplicate statement in snapshot: {:?}", statement.text);
                continue;
            }
            store.insert(statement);
        }
        for link in persisted.links {
            for endpoint in [&link.statement_text, &link.in_response_to_text] {
                if !store.contains(endpoint) {
                    return Err(StoreError::DanglingLink(endpoint.clone()));
                }
            }
            store.add_response_link(&link.statement_text, &link.in_response_to_text);
        }

        log::info!(
            "Loaded {} statements and {} links",
            store.len(),
            store.link_count()
        );
        Ok(store)
    }

    /// Write the store as a JSON snapshot (atomic rename over `path`).
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let persisted = PersistedStore {
            schema_version: STORE_SCHEMA_VERSION,
            statements: self.all_statements().to_vec(),
            links: self.links().to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&persisted)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        log::info!("Saved statement store to {}", path.display());
        Ok(())
    }
}
