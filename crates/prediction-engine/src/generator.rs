use llm_client::{generate_as, GenerativeBackend};
use tracing::instrument;
use uuid::Uuid;

use crate::types::{validate_match_data, GenerationError, PredictionRequest, SyntheticMatchData};

const DATA_SIMULATOR_PERSONA: &str = "You are a creative sports data simulator.";

/// Stage one: fabricate a plausible match dataset from two team names.
///
/// One backend call with a fixed instruction template parameterized only by
/// the team names. The template asks for recent form per team, a tactical
/// narrative, exactly three fictitious bookmaker quotes, and a future date.
pub struct MatchDataGenerator<B> {
    backend: B,
}

impl<B: GenerativeBackend> MatchDataGenerator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[instrument(skip(self, request), fields(request_id = %request_id, team1 = %request.team1, team2 = %request.team2))]
    pub async fn generate(
        &self,
        request: &PredictionRequest,
        request_id: Uuid,
    ) -> Result<SyntheticMatchData, GenerationError> {
        let prompt = format!(
            r#"For the match between {team1} and {team2}, generate a realistic-sounding but fictional set of data.

This data should include:
1. Historical Data: a brief summary of each team's recent performance (e.g., last 5 matches).
2. Real-Time Data: analysis of key players, tactical setups, and any other relevant factors like weather or home advantage. Be creative and specific.
3. Odds Data: decimal odds for the match from exactly three different fictional bookmakers with distinct made-up names (e.g., 'Bookmaker A', 'BettorBet', 'SureWin').
4. Match Date: a plausible future date for the match.

Make the data sound authentic and compelling."#,
            team1 = request.team1,
            team2 = request.team2,
        );

        let data: SyntheticMatchData =
            generate_as(&self.backend, DATA_SIMULATOR_PERSONA, prompt, request_id).await?;
        validate_match_data(&data)?;
        Ok(data)
    }
}
