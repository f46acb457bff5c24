//! The `quizdeck show` command.

use anyhow::Result;
use uuid::Uuid;

use quizdeck_core::model::Questionnaire;
use quizdeck_core::parser;
use quizdeck_core::service::QuestionnaireService;

pub async fn execute(service: &QuestionnaireService, id: Uuid, format: &str) -> Result<()> {
    let questionnaire = service.get(id).await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&questionnaire)?),
        // TOML output round-trips through `update`: edit it and feed it back.
        "toml" => println!("{}", parser::to_toml(&questionnaire)?),
        "text" => print_text(&questionnaire),
        other => anyhow::bail!("unknown format: {other} (expected text, json, or toml)"),
    }
    Ok(())
}

fn print_text(q: &Questionnaire) {
    println!("{} ({})", q.title, q.id);
    for (i, question) in q.questions.iter().enumerate() {
        println!("  {}. {}", i + 1, question.text);
        for answer in &question.answers {
            let marker = if answer.is_correct { "*" } else { " " };
            println!(
                "    {marker} [{}] {} (weight {})",
                answer.id, answer.text, answer.weight
            );
        }
    }
}
