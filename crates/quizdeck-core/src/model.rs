//! Core data model types for quizdeck.
//!
//! Persisted entities carry identifiers assigned at persistence time;
//! draft shapes carry an [`EntityRef`] instead, so "create this" and
//! "update that in place" are explicit variants rather than sentinel
//! empty strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A candidate response to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Unique identifier, assigned on first save.
    pub id: Uuid,
    /// Answer text shown to the respondent.
    pub text: String,
    /// Contribution to the total score when selected. May be negative.
    pub weight: f64,
    /// Whether this is the designated correct answer.
    pub is_correct: bool,
}

/// A prompt with an ordered set of answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, assigned on first save.
    pub id: Uuid,
    /// The question text.
    pub text: String,
    /// Ordered answer options.
    pub answers: Vec<Answer>,
}

/// A titled, ordered collection of questions.
///
/// Question order is significant: submissions are positionally aligned
/// with it (see [`crate::score`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Unique identifier, assigned on first save.
    pub id: Uuid,
    /// Display title, globally unique case-insensitively.
    pub title: String,
    /// Ordered questions.
    pub questions: Vec<Question>,
    /// When the questionnaire was first persisted.
    pub created_at: DateTime<Utc>,
}

/// Reference to a sub-entity during create/edit.
///
/// `New` mints a fresh identifier at reconciliation time; `Existing`
/// updates the entity with that identifier in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityRef {
    /// Not yet persisted; an identifier will be assigned.
    #[default]
    New,
    /// Already persisted under this identifier.
    Existing(Uuid),
}

impl EntityRef {
    /// Build from an optional identifier (absent means new).
    pub fn from_id(id: Option<Uuid>) -> Self {
        match id {
            Some(id) => EntityRef::Existing(id),
            None => EntityRef::New,
        }
    }

    /// The concrete identifier: the existing one, or a freshly minted v4.
    pub fn resolve(self) -> Uuid {
        match self {
            EntityRef::New => Uuid::new_v4(),
            EntityRef::Existing(id) => id,
        }
    }

    /// The identifier if this reference is `Existing`.
    pub fn id(self) -> Option<Uuid> {
        match self {
            EntityRef::New => None,
            EntityRef::Existing(id) => Some(id),
        }
    }
}

/// Candidate answer as submitted by an author.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerDraft {
    pub id: EntityRef,
    pub text: String,
    pub weight: f64,
    pub is_correct: bool,
}

/// Candidate question as submitted by an author.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    pub id: EntityRef,
    pub text: String,
    pub answers: Vec<AnswerDraft>,
}

/// Candidate questionnaire as submitted by an author.
///
/// For create, all refs are `New`; for edit, refs carried over from a
/// fetched questionnaire are `Existing` and are preserved across the save.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionnaireDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

impl Questionnaire {
    /// Re-derive a draft from a persisted questionnaire, keeping every
    /// identifier as `Existing`. This is the starting point for an edit.
    pub fn to_draft(&self) -> QuestionnaireDraft {
        QuestionnaireDraft {
            title: self.title.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| QuestionDraft {
                    id: EntityRef::Existing(q.id),
                    text: q.text.clone(),
                    answers: q
                        .answers
                        .iter()
                        .map(|a| AnswerDraft {
                            id: EntityRef::Existing(a.id),
                            text: a.text.clone(),
                            weight: a.weight,
                            is_correct: a.is_correct,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Questionnaire {
        Questionnaire {
            id: Uuid::new_v4(),
            title: "Math".into(),
            questions: vec![Question {
                id: Uuid::new_v4(),
                text: "2+2?".into(),
                answers: vec![
                    Answer {
                        id: Uuid::new_v4(),
                        text: "3".into(),
                        weight: 0.0,
                        is_correct: false,
                    },
                    Answer {
                        id: Uuid::new_v4(),
                        text: "4".into(),
                        weight: 10.0,
                        is_correct: true,
                    },
                ],
            }],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn questionnaire_serde_roundtrip() {
        let q = sample();
        let json = serde_json::to_string(&q).unwrap();
        let back: Questionnaire = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn entity_ref_resolve_preserves_existing() {
        let id = Uuid::new_v4();
        assert_eq!(EntityRef::Existing(id).resolve(), id);
        assert_eq!(EntityRef::from_id(Some(id)), EntityRef::Existing(id));
        assert_eq!(EntityRef::from_id(None), EntityRef::New);
    }

    #[test]
    fn entity_ref_resolve_mints_distinct_ids() {
        assert_ne!(EntityRef::New.resolve(), EntityRef::New.resolve());
    }

    #[test]
    fn to_draft_keeps_identifiers() {
        let q = sample();
        let draft = q.to_draft();
        assert_eq!(draft.title, q.title);
        assert_eq!(draft.questions[0].id, EntityRef::Existing(q.questions[0].id));
        assert_eq!(
            draft.questions[0].answers[1].id,
            EntityRef::Existing(q.questions[0].answers[1].id)
        );
    }
}
