mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use llm_client::AnthropicClient;
use prediction_engine::{OutcomePredictor, PredictionRequest};
use tracing::{info, warn};
use value_engine::{evaluate, ValueBetQuery};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Predict { team1, team2 } => {
            if !config.llm.provider.eq_ignore_ascii_case("anthropic") {
                warn!(
                    "Configured provider '{}' but this binary currently supports Anthropic only",
                    config.llm.provider
                );
            }

            let api_key =
                std::env::var("ANTHROPIC_API_KEY").context("ANTHROPIC_API_KEY must be set")?;
            let backend =
                AnthropicClient::new(api_key, config.llm.model.clone(), config.llm.timeout_ms);
            let predictor = OutcomePredictor::new(backend);

            let request = PredictionRequest::new(team1, team2)?;
            info!(model = %config.llm.model, "requesting match outcome prediction");
            let result = predictor.predict(&request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::ValueBet {
            predicted_probability,
            bookmaker_odds,
            minimum_value_threshold,
        } => {
            let verdict = evaluate(&ValueBetQuery {
                predicted_probability,
                bookmaker_odds,
                minimum_value_threshold,
            })?;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
    }

    Ok(())
}
