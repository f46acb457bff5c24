//! The `quizdeck list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizdeck_core::service::QuestionnaireService;

pub async fn execute(service: &QuestionnaireService) -> Result<()> {
    let all = service.list().await?;

    if all.is_empty() {
        println!("No questionnaires available");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Title", "Questions", "Created", "Id"]);

    for q in &all {
        table.add_row(vec![
            Cell::new(&q.title),
            Cell::new(q.questions.len()),
            Cell::new(q.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(q.id),
        ]);
    }

    println!("{table}");
    Ok(())
}
