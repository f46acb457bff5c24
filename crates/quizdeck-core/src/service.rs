//! Questionnaire lifecycle orchestration.
//!
//! Create, update, delete, fetch, list, and submit-for-score, all over
//! a [`QuestionnaireStore`] collaborator. Validation runs before any
//! write (all-or-nothing), and scoring never mutates stored state.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::{Answer, Question, Questionnaire, QuestionnaireDraft};
use crate::score::score;
use crate::store::QuestionnaireStore;
use crate::validate::{check_title_conflict, validate};

/// The questionnaire lifecycle service.
pub struct QuestionnaireService {
    store: Arc<dyn QuestionnaireStore>,
}

impl QuestionnaireService {
    pub fn new(store: Arc<dyn QuestionnaireStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new questionnaire.
    ///
    /// Identifiers for the questionnaire and every nested question and
    /// answer are minted here; the returned value carries them.
    pub async fn create(&self, draft: QuestionnaireDraft) -> Result<Questionnaire, ServiceError> {
        validate(&draft)?;
        check_title_conflict(self.store.as_ref(), &draft.title, None).await??;

        let questionnaire = reconcile(Uuid::new_v4(), &draft);
        let saved = self.store.save(questionnaire).await?;
        tracing::debug!(id = %saved.id, title = %saved.title, "questionnaire created");
        Ok(saved)
    }

    /// Validate and persist an edit: a full replace of title + questions.
    ///
    /// Drafts carrying `Existing` refs update those entities in place
    /// (identifiers preserved); `New` refs become freshly added entities;
    /// stored sub-entities the draft does not mention are dropped.
    pub async fn update(
        &self,
        id: Uuid,
        draft: QuestionnaireDraft,
    ) -> Result<Questionnaire, ServiceError> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        validate(&draft)?;
        check_title_conflict(self.store.as_ref(), &draft.title, Some(existing.id)).await??;

        let mut questionnaire = reconcile(existing.id, &draft);
        questionnaire.created_at = existing.created_at;
        let saved = self.store.save(questionnaire).await?;
        tracing::debug!(id = %saved.id, title = %saved.title, "questionnaire updated");
        Ok(saved)
    }

    /// Delete a questionnaire and everything nested in it.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.store.delete_by_id(id).await? {
            tracing::debug!(%id, "questionnaire deleted");
            Ok(())
        } else {
            Err(ServiceError::NotFound(id))
        }
    }

    /// Fetch a questionnaire by identifier.
    pub async fn get(&self, id: Uuid) -> Result<Questionnaire, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// All questionnaires, newest first.
    pub async fn list(&self) -> Result<Vec<Questionnaire>, ServiceError> {
        Ok(self.store.list_all().await?)
    }

    /// Score a submission against a stored questionnaire.
    ///
    /// `selections` is positionally aligned with the questionnaire's
    /// question order; incomplete submissions are not an error (missing
    /// positions score zero).
    pub async fn submit(&self, id: Uuid, selections: &[Uuid]) -> Result<f64, ServiceError> {
        let questionnaire = self.get(id).await?;
        let total = score(&questionnaire, selections);
        tracing::debug!(%id, selections = selections.len(), total, "submission scored");
        Ok(total)
    }
}

/// Resolve a draft into a persisted shape: mint identifiers for `New`
/// refs, keep `Existing` ones, and trim every text field.
fn reconcile(id: Uuid, draft: &QuestionnaireDraft) -> Questionnaire {
    Questionnaire {
        id,
        title: draft.title.trim().to_string(),
        questions: draft
            .questions
            .iter()
            .map(|q| Question {
                id: q.id.resolve(),
                text: q.text.trim().to_string(),
                answers: q
                    .answers
                    .iter()
                    .map(|a| Answer {
                        id: a.id.resolve(),
                        text: a.text.trim().to_string(),
                        weight: a.weight,
                        is_correct: a.is_correct,
                    })
                    .collect(),
            })
            .collect(),
        // The store stamps this on first save and preserves it afterwards.
        created_at: Utc::now(),
    }
}
