use llm_client::BackendError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single prediction request: the two teams facing each other.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PredictionRequest {
    pub team1: String,
    pub team2: String,
}

impl PredictionRequest {
    pub fn new(
        team1: impl Into<String>,
        team2: impl Into<String>,
    ) -> Result<Self, PredictionError> {
        let team1 = team1.into();
        let team2 = team2.into();
        if team1.trim().is_empty() || team2.trim().is_empty() {
            return Err(PredictionError::InvalidRequest(
                "team names must be non-empty".into(),
            ));
        }
        Ok(Self { team1, team2 })
    }
}

/// One bookmaker's quotes for the three match outcomes, in decimal odds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookmakerOdds {
    pub bookmaker: String,
    pub team1_win: f64,
    pub draw: f64,
    pub team2_win: f64,
}

/// Fabricated match dataset produced by stage one and consumed exactly once
/// by stage two. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SyntheticMatchData {
    pub historical_data: String,
    pub real_time_data: String,
    pub odds_data: Vec<BookmakerOdds>,
    pub match_date: String,
}

/// Terminal output of the pipeline. The reasoning text carries the bet
/// suggestion verbatim; nothing downstream parses or verifies it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PredictionResult {
    pub predicted_outcome: String,
    pub confidence_level: f64,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_bet: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("match data backend call failed: {0}")]
    Backend(#[from] BackendError),
    #[error("generated match data rejected: {0}")]
    InvalidData(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("invalid prediction request: {0}")]
    InvalidRequest(String),
    #[error("match data generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("analysis backend call failed: {0}")]
    Analysis(#[source] BackendError),
    #[error("prediction rejected: {0}")]
    InvalidPrediction(String),
}

/// Semantic checks on top of schema conformance. An empty odds table is
/// tolerated; quotes that are present must all be positive and finite.
pub(crate) fn validate_match_data(data: &SyntheticMatchData) -> Result<(), GenerationError> {
    if data.historical_data.trim().is_empty() {
        return Err(GenerationError::InvalidData("historicalData is empty".into()));
    }
    if data.real_time_data.trim().is_empty() {
        return Err(GenerationError::InvalidData("realTimeData is empty".into()));
    }
    if data.match_date.trim().is_empty() {
        return Err(GenerationError::InvalidData("matchDate is empty".into()));
    }

    for quote in &data.odds_data {
        if quote.bookmaker.trim().is_empty() {
            return Err(GenerationError::InvalidData(
                "bookmaker name is empty".into(),
            ));
        }
        for (label, price) in [
            ("team1Win", quote.team1_win),
            ("draw", quote.draw),
            ("team2Win", quote.team2_win),
        ] {
            if !price.is_finite() || price <= 0.0 {
                return Err(GenerationError::InvalidData(format!(
                    "{} odds from {} must be positive, got {}",
                    label, quote.bookmaker, price
                )));
            }
        }
    }

    Ok(())
}

/// The outcome label is a closed three-element set, not free text.
pub(crate) fn validate_prediction(
    request: &PredictionRequest,
    result: &PredictionResult,
) -> Result<(), PredictionError> {
    let allowed = [
        format!("{} wins", request.team1),
        "Draw".to_string(),
        format!("{} wins", request.team2),
    ];
    if !allowed.contains(&result.predicted_outcome) {
        return Err(PredictionError::InvalidPrediction(format!(
            "predictedOutcome '{}' is not one of {:?}",
            result.predicted_outcome, allowed
        )));
    }
    if !(0.0..=1.0).contains(&result.confidence_level) {
        return Err(PredictionError::InvalidPrediction(format!(
            "confidenceLevel must be in [0,1], got {}",
            result.confidence_level
        )));
    }
    if result.reasoning.trim().is_empty() {
        return Err(PredictionError::InvalidPrediction(
            "reasoning is empty".into(),
        ));
    }
    Ok(())
}
