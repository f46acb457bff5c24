//! The `quizdeck delete` command.

use anyhow::Result;
use uuid::Uuid;

use quizdeck_core::service::QuestionnaireService;

pub async fn execute(service: &QuestionnaireService, id: Uuid) -> Result<()> {
    service.delete(id).await?;
    println!("Deleted {id}");
    Ok(())
}
