use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "betsense",
    about = "Match outcome prediction and value bet evaluation"
)]
pub struct Cli {
    /// Path to the TOML config file. Missing file falls back to defaults.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the two-stage pipeline and print the prediction as JSON.
    Predict {
        team1: String,
        team2: String,
    },
    /// Evaluate a wager for statistical value and print the verdict as JSON.
    ValueBet {
        /// Estimated true probability of the outcome, in [0, 1].
        #[arg(long)]
        predicted_probability: f64,

        /// Decimal odds offered by the bookmaker, >= 1.
        #[arg(long)]
        bookmaker_odds: f64,

        /// Minimum edge ratio for a bet to count as value, >= 1.
        #[arg(long, default_value_t = 1.05)]
        minimum_value_threshold: f64,
    },
}
