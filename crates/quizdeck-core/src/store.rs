//! Persistence trait for questionnaires.
//!
//! The lifecycle service programs against this trait; concrete
//! implementations live in the `quizdeck-store` crate. Implementations
//! own their concurrency control — the core imposes no locking or
//! ordering across requests, and last-write-wins on concurrent edits
//! is acceptable.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::Questionnaire;

/// Storage collaborator for the questionnaire lifecycle.
#[async_trait]
pub trait QuestionnaireStore: Send + Sync {
    /// Look up a questionnaire whose title matches case-insensitively
    /// (compared after trimming). Used for the global uniqueness check.
    async fn find_by_title_ci(&self, title: &str) -> Result<Option<Questionnaire>, StoreError>;

    /// Look up a questionnaire by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Questionnaire>, StoreError>;

    /// Upsert a questionnaire and return the persisted value.
    ///
    /// The first save stamps `created_at`; later saves of the same
    /// identifier preserve the original timestamp.
    async fn save(&self, questionnaire: Questionnaire) -> Result<Questionnaire, StoreError>;

    /// Delete a questionnaire and everything nested in it. Returns
    /// whether the identifier was found.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;

    /// All questionnaires, newest first (creation time descending).
    async fn list_all(&self) -> Result<Vec<Questionnaire>, StoreError>;
}
