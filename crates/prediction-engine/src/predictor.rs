use llm_client::{generate_as, GenerativeBackend};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::generator::MatchDataGenerator;
use crate::types::{
    validate_prediction, PredictionError, PredictionRequest, PredictionResult, SyntheticMatchData,
};

const MATCH_ANALYST_PERSONA: &str = "You are a world-class sports commentator and analyst, with a deep understanding of game dynamics, team history, and player performance. Your primary goal is to provide a thorough analysis of the upcoming match.";

/// Stage two orchestrator: generate a synthetic dataset, then reason over it.
///
/// The two backend calls are strictly sequential and neither is retried. The
/// generated odds table is deliberately left out of the analysis prompt so the
/// prediction cannot anchor on invented prices; the odds exist only inside the
/// dataset handed back for display.
pub struct OutcomePredictor<B: GenerativeBackend + Clone> {
    generator: MatchDataGenerator<B>,
    backend: B,
}

impl<B: GenerativeBackend + Clone> OutcomePredictor<B> {
    pub fn new(backend: B) -> Self {
        Self {
            generator: MatchDataGenerator::new(backend.clone()),
            backend,
        }
    }

    #[instrument(skip(self, request), fields(team1 = %request.team1, team2 = %request.team2))]
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let request_id = Uuid::new_v4();
        info!(%request_id, "starting outcome prediction");

        let data = self.generator.generate(request, request_id).await?;
        debug!(
            %request_id,
            bookmakers = data.odds_data.len(),
            match_date = %data.match_date,
            "synthetic match data ready"
        );

        let prompt = Self::analysis_prompt(request, &data);
        let result: PredictionResult =
            generate_as(&self.backend, MATCH_ANALYST_PERSONA, prompt, request_id)
                .await
                .map_err(PredictionError::Analysis)?;

        validate_prediction(request, &result)?;
        info!(
            %request_id,
            outcome = %result.predicted_outcome,
            confidence = result.confidence_level,
            "prediction complete"
        );
        Ok(result)
    }

    fn analysis_prompt(request: &PredictionRequest, data: &SyntheticMatchData) -> String {
        format!(
            r#"Analyze the provided match data and predict the outcome for the match between {team1} and {team2} on {match_date}. Focus on team predominance and current form, not past achievements.

- Historical Data: {historical}
- Real-Time Data: {real_time}

Based on your analysis, provide a predictedOutcome that is exactly one of "{team1} wins", "Draw" or "{team2} wins", a confidenceLevel between 0 and 1, and detailed reasoning for your conclusion.

After providing your sports analysis, also include your suggested bet within the reasoning. For example: "Given my analysis, I also see a value bet opportunity. I recommend betting on {team1} to win with Bookmaker A at 2.5 odds.""#,
            team1 = request.team1,
            team2 = request.team2,
            match_date = data.match_date,
            historical = data.historical_data,
            real_time = data.real_time_data,
        )
    }
}
