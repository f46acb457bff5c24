//! Structural and uniqueness validation of questionnaire drafts.
//!
//! All checks run before anything is persisted; the first failing check
//! wins and its message is the user-facing reason. The title uniqueness
//! check needs the store (it compares against every other persisted
//! questionnaire) and is therefore a separate async step the service
//! runs after the structural pass.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::{StoreError, ValidationError};
use crate::model::QuestionnaireDraft;
use crate::store::QuestionnaireStore;

/// Run every structural check on a draft. First failure wins.
///
/// Question indices in error messages are 1-based.
pub fn validate(draft: &QuestionnaireDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if draft.questions.is_empty() {
        return Err(ValidationError::NoQuestions);
    }

    for (i, question) in draft.questions.iter().enumerate() {
        let index = i + 1;

        if question.text.trim().is_empty() {
            return Err(ValidationError::EmptyQuestionText { index });
        }

        let mut texts = HashSet::new();
        let mut weights = Vec::new();
        let mut correct = 0usize;

        for answer in &question.answers {
            let text = answer.text.trim();
            if text.is_empty() {
                return Err(ValidationError::EmptyAnswerText { index });
            }
            if !answer.weight.is_finite() {
                return Err(ValidationError::InvalidWeight { index });
            }
            // Answer texts are compared case-sensitively, unlike question
            // texts and titles.
            if !texts.insert(text) {
                return Err(ValidationError::DuplicateAnswerText { index });
            }
            if weights.iter().any(|w: &f64| *w == answer.weight) {
                return Err(ValidationError::DuplicateAnswerWeight { index });
            }
            weights.push(answer.weight);
            if answer.is_correct {
                correct += 1;
            }
        }

        if correct != 1 {
            return Err(ValidationError::CorrectAnswerCount { index });
        }
    }

    let mut seen = HashSet::new();
    for question in &draft.questions {
        if !seen.insert(question.text.trim().to_lowercase()) {
            return Err(ValidationError::DuplicateQuestionText);
        }
    }

    Ok(())
}

/// Check the draft's title against all other persisted questionnaires,
/// case-insensitively.
///
/// `own_id` excludes the questionnaire being edited from the conflict
/// check, so an update that keeps its title does not collide with itself.
pub async fn check_title_conflict(
    store: &dyn QuestionnaireStore,
    title: &str,
    own_id: Option<Uuid>,
) -> Result<Result<(), ValidationError>, StoreError> {
    match store.find_by_title_ci(title.trim()).await? {
        Some(existing) if Some(existing.id) != own_id => {
            tracing::warn!(title = %title.trim(), conflict = %existing.id, "title already taken");
            Ok(Err(ValidationError::DuplicateTitle))
        }
        _ => Ok(Ok(())),
    }
}
