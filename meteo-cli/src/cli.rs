use clap::{Parser, Subcommand};
use inquire::InquireError;
use meteo_core::{ClientConfig, ViewState, WeatherLookupController};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "City weather lookup over Open-Meteo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one city and print the outcome.
    Lookup {
        /// City name, free text.
        city: String,

        /// Print the final view-state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for city names in a loop; Esc or Ctrl-C exits.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut controller = WeatherLookupController::new(&ClientConfig::default())?;

        match self.command {
            Command::Lookup { city, json } => lookup_once(&mut controller, &city, json).await,
            Command::Interactive => interactive(&mut controller).await,
        }
    }
}

async fn lookup_once(
    controller: &mut WeatherLookupController,
    city: &str,
    json: bool,
) -> anyhow::Result<()> {
    let state = controller.submit(city).await;

    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        println!("{}", render::render(state));
    }

    if matches!(state, ViewState::Error { .. }) {
        std::process::exit(1);
    }

    Ok(())
}

async fn interactive(controller: &mut WeatherLookupController) -> anyhow::Result<()> {
    println!("{}", render::render(controller.state()));

    loop {
        let city = match inquire::Text::new("City:").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        // Same guard the submit path applies: blank input changes nothing.
        if city.trim().is_empty() {
            continue;
        }

        println!("{}", render::render(&ViewState::Loading));
        let state = controller.submit(&city).await;
        println!("{}", render::render(state));
    }

    Ok(())
}
