//! JSON-file questionnaire store.
//!
//! The whole collection lives in one JSON document. Every mutation
//! rewrites the file through a temp file in the same directory followed
//! by a rename, so readers never observe a half-written store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use tempfile::NamedTempFile;
use uuid::Uuid;

use quizdeck_core::error::StoreError;
use quizdeck_core::model::Questionnaire;
use quizdeck_core::store::QuestionnaireStore;

/// A questionnaire store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: RwLock<HashMap<Uuid, Questionnaire>>,
}

impl JsonStore {
    /// Open a store at `path`, loading any existing content. A missing
    /// file is an empty store; it is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let all: Vec<Questionnaire> = serde_json::from_str(&content)
                .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))?;
            all.into_iter().map(|q| (q.id, q)).collect()
        } else {
            HashMap::new()
        };
        tracing::debug!(path = %path.display(), loaded = inner.len(), "json store opened");
        Ok(Self {
            path,
            inner: RwLock::new(inner),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current state out atomically.
    fn flush(&self, inner: &HashMap<Uuid, Questionnaire>) -> Result<(), StoreError> {
        let mut all: Vec<&Questionnaire> = inner.values().collect();
        // Stable on-disk order keeps diffs readable.
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let json = serde_json::to_string_pretty(&all)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;
        let tmp = NamedTempFile::new_in(dir)?;
        std::fs::write(tmp.path(), json)?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

#[async_trait]
impl QuestionnaireStore for JsonStore {
    async fn find_by_title_ci(&self, title: &str) -> Result<Option<Questionnaire>, StoreError> {
        let needle = title.trim().to_lowercase();
        let inner = self.inner.read().unwrap();
        Ok(inner
            .values()
            .find(|q| q.title.to_lowercase() == needle)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Questionnaire>, StoreError> {
        Ok(self.inner.read().unwrap().get(&id).cloned())
    }

    async fn save(&self, mut questionnaire: Questionnaire) -> Result<Questionnaire, StoreError> {
        let mut inner = self.inner.write().unwrap();
        match inner.get(&questionnaire.id) {
            Some(existing) => questionnaire.created_at = existing.created_at,
            None => questionnaire.created_at = Utc::now(),
        }
        inner.insert(questionnaire.id, questionnaire.clone());
        self.flush(&inner)?;
        Ok(questionnaire)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().unwrap();
        let found = inner.remove(&id).is_some();
        if found {
            self.flush(&inner)?;
        }
        Ok(found)
    }

    async fn list_all(&self) -> Result<Vec<Questionnaire>, StoreError> {
        let inner = self.inner.read().unwrap();
        let mut all: Vec<Questionnaire> = inner.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
