use anyhow::{Context, Result};
use clap::Parser;
use elsyser_client::commands::{self, Outcome};
use elsyser_client::domain::{FieldKind, FormKind};
use elsyser_client::infrastructure::{log_messages, logging};
use elsyser_client::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Check ELSYSER form input and routes the way the web client does"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Validate a JSON form payload
    Check {
        /// Form to validate as (login, register, news, comment)
        form: FormKind,

        /// Read the payload from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// News item a comment belongs to
        #[arg(long)]
        news_id: Option<u64>,
    },

    /// Validate a single text value
    Field {
        /// Field kind (email, name, password, title, content)
        kind: FieldKind,

        value: String,
    },

    /// Resolve a URL fragment to its canonical route
    Route { fragment: String },
}

fn main() -> Result<ExitCode> {
    let app = App::parse();

    let settings = Settings::new().context("Failed to load configuration")?;
    logging::init(&settings.logging);
    info!("{}", log_messages::application::STARTING);
    debug!(base_url = %settings.api.base_url, "{}", log_messages::application::CONFIG_LOADED);

    let outcome = match app.command {
        SubCommands::Check {
            form,
            file,
            news_id,
        } => {
            let payload = commands::read_payload(file.as_deref(), std::io::stdin())?;
            commands::check_form(&settings.endpoints(), form, &payload, news_id)?
        }
        SubCommands::Field { kind, value } => commands::check_field(kind, &value),
        SubCommands::Route { fragment } => commands::resolve_route(&fragment)?,
    };

    Ok(print(outcome))
}

fn print(outcome: Outcome) -> ExitCode {
    for line in &outcome.lines {
        println!("{line}");
    }
    outcome.status.into()
}
