//! In-memory questionnaire store.
//!
//! The reference implementation of the store contract: interior
//! mutability behind an `RwLock`, no durability. Useful for tests and
//! for embedding the service without a backing file.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use quizdeck_core::error::StoreError;
use quizdeck_core::model::Questionnaire;
use quizdeck_core::store::QuestionnaireStore;

/// A process-local questionnaire store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<Uuid, Questionnaire>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored questionnaires.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl QuestionnaireStore for MemoryStore {
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
            // Later saves preserve the original creation time.
            Some(existing) => questionnaire.created_at = existing.created_at,
            None => questionnaire.created_at = Utc::now(),
        }
        inner.insert(questionnaire.id, questionnaire.clone());
        Ok(questionnaire)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.inner.write().unwrap().remove(&id).is_some())
    }

    async fn list_all(&self) -> Result<Vec<Questionnaire>, StoreError> {
        let inner = self.inner.read().unwrap();
        let mut all: Vec<Questionnaire> = inner.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
