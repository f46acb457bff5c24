//! The `quizdeck submit` command.

use anyhow::{Context, Result};
use uuid::Uuid;

use quizdeck_core::service::QuestionnaireService;

pub async fn execute(
    service: &QuestionnaireService,
    id: Uuid,
    answers: &str,
    format: &str,
) -> Result<()> {
    let selections = parse_selections(answers)?;
    let score = service.submit(id, &selections).await?;

    match format {
        "json" => println!("{}", serde_json::json!({ "score": score })),
        "text" => println!("Score: {score}"),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }
    Ok(())
}

/// Parse a comma-separated list of answer identifiers. An empty string
/// is an empty (but valid) submission.
fn parse_selections(answers: &str) -> Result<Vec<Uuid>> {
    answers
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Uuid>()
                .with_context(|| format!("invalid answer identifier: '{s}'"))
        })
        .collect()
}
