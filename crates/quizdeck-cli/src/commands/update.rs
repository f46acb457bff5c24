//! The `quizdeck update` command.

use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use quizdeck_core::parser;
use quizdeck_core::service::QuestionnaireService;

pub async fn execute(service: &QuestionnaireService, id: Uuid, file: PathBuf) -> Result<()> {
    let draft = parser::parse_questionnaire(&file)?;
    let saved = service.update(id, draft).await?;

    println!(
        "Updated \"{}\" ({} questions)",
        saved.title,
        saved.questions.len()
    );
    Ok(())
}
