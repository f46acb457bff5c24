//! TOML questionnaire definition parser.
//!
//! Authors write questionnaire definitions as TOML files; the CLI reads
//! them for `create` and `update`. Optional `id` fields map to
//! [`EntityRef::Existing`] so a definition emitted from a stored
//! questionnaire can be edited and submitted back.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AnswerDraft, EntityRef, QuestionDraft, Questionnaire, QuestionnaireDraft};

/// Intermediate TOML structure for a questionnaire definition.
#[derive(Debug, Serialize, Deserialize)]
struct TomlQuestionnaire {
    title: String,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    question: String,
    #[serde(default)]
    answers: Vec<TomlAnswer>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    text: String,
    weight: f64,
    #[serde(default)]
    correct: bool,
}

/// Parse a TOML definition file into a draft.
pub fn parse_questionnaire(path: &Path) -> Result<QuestionnaireDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read questionnaire file: {}", path.display()))?;
    parse_questionnaire_str(&content, path)
}

/// Parse a TOML string into a draft (useful for testing).
pub fn parse_questionnaire_str(content: &str, source_path: &Path) -> Result<QuestionnaireDraft> {
    let parsed: TomlQuestionnaire = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionnaireDraft {
        title: parsed.title,
        questions: parsed
            .questions
            .into_iter()
            .map(|q| QuestionDraft {
                id: EntityRef::from_id(q.id),
                text: q.question,
                answers: q
                    .answers
                    .into_iter()
                    .map(|a| AnswerDraft {
                        id: EntityRef::from_id(a.id),
                        text: a.text,
                        weight: a.weight,
                        is_correct: a.correct,
                    })
                    .collect(),
            })
            .collect(),
    })
}

/// Render a persisted questionnaire as a TOML definition, identifiers
/// included, ready to edit and feed back through `update`.
pub fn to_toml(questionnaire: &Questionnaire) -> Result<String> {
    let doc = TomlQuestionnaire {
        title: questionnaire.title.clone(),
        questions: questionnaire
            .questions
            .iter()
            .map(|q| TomlQuestion {
                id: Some(q.id),
                question: q.text.clone(),
                answers: q
                    .answers
                    .iter()
                    .map(|a| TomlAnswer {
                        id: Some(a.id),
                        text: a.text.clone(),
                        weight: a.weight,
                        correct: a.is_correct,
                    })
                    .collect(),
            })
            .collect(),
    };
    toml::to_string_pretty(&doc).context("failed to serialize questionnaire to TOML")
}
