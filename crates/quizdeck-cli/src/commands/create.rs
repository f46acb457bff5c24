//! The `quizdeck create` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdeck_core::parser;
use quizdeck_core::service::QuestionnaireService;

pub async fn execute(service: &QuestionnaireService, file: PathBuf) -> Result<()> {
    let draft = parser::parse_questionnaire(&file)?;
    let saved = service.create(draft).await?;

    println!(
        "Created \"{}\" ({} questions)",
        saved.title,
        saved.questions.len()
    );
    println!("Id: {}", saved.id);
    Ok(())
}
