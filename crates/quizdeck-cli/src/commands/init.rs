//! The `quizdeck init` command.

use std::path::Path;

use anyhow::Result;

const EXAMPLE_DEFINITION: &str = r#"title = "Math"

[[questions]]
question = "2+2?"

[[questions.answers]]
text = "3"
weight = 0.0
correct = false

[[questions.answers]]
text = "4"
weight = 10.0
correct = true

[[questions]]
question = "What is the square root of 16?"

[[questions.answers]]
text = "2"
weight = 0.0
correct = false

[[questions.answers]]
text = "4"
weight = 5.0
correct = true
"#;

pub fn execute() -> Result<()> {
    let path = Path::new("questionnaire.toml");

    if path.exists() {
        println!("questionnaire.toml already exists, skipping");
        return Ok(());
    }

    std::fs::write(path, EXAMPLE_DEFINITION)?;
    println!("Created questionnaire.toml");
    println!("Edit it, then run: quizdeck create --file questionnaire.toml");
    Ok(())
}
