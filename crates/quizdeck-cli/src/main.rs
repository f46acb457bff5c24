//! quizdeck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use quizdeck_core::service::QuestionnaireService;
use quizdeck_store::JsonStore;

mod commands;

#[derive(Parser)]
#[command(name = "quizdeck", version, about = "Weighted multiple-choice questionnaires")]
struct Cli {
    /// JSON store file
    #[arg(long, global = true, default_value = "quizdeck.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a questionnaire from a TOML definition
    Create {
        /// Path to the .toml definition
        #[arg(long)]
        file: PathBuf,
    },

    /// Replace a questionnaire's title and questions from a TOML definition
    Update {
        /// Questionnaire identifier
        #[arg(long)]
        id: Uuid,

        /// Path to the .toml definition
        #[arg(long)]
        file: PathBuf,
    },

    /// List questionnaires, newest first
    List,

    /// Show a questionnaire
    Show {
        /// Questionnaire identifier
        #[arg(long)]
        id: Uuid,

        /// Output format: text, json, toml
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Delete a questionnaire
    Delete {
        /// Questionnaire identifier
        #[arg(long)]
        id: Uuid,
    },

    /// Submit answers and get the score
    Submit {
        /// Questionnaire identifier
        #[arg(long)]
        id: Uuid,

        /// Selected answer identifiers, comma-separated, one per question
        /// in question order
        #[arg(long, default_value = "")]
        answers: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter questionnaire definition
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdeck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // `init` does not touch the store.
    if let Commands::Init = cli.command {
        return commands::init::execute();
    }

    let store = JsonStore::open(&cli.data_file)?;
    let service = QuestionnaireService::new(Arc::new(store));

    match cli.command {
        Commands::Create { file } => commands::create::execute(&service, file).await,
        Commands::Update { id, file } => commands::update::execute(&service, id, file).await,
        Commands::List => commands::list::execute(&service).await,
        Commands::Show { id, format } => commands::show::execute(&service, id, &format).await,
        Commands::Delete { id } => commands::delete::execute(&service, id).await,
        Commands::Submit {
            id,
            answers,
            format,
        } => commands::submit::execute(&service, id, &answers, &format).await,
        Commands::Init => unreachable!("handled above"),
    }
}
