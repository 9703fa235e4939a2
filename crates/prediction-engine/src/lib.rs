//! Two-stage match outcome prediction pipeline.
//!
//! Stage one fabricates a plausible match dataset (form, conditions, bookmaker
//! quotes, date) from nothing but two team names. Stage two reasons over that
//! dataset and produces an outcome, a confidence level, and narrative
//! reasoning with an embedded bet suggestion. Each stage is one backend call;
//! they run strictly in sequence and a failure in either aborts the request.

mod generator;
mod predictor;
mod types;

pub use generator::MatchDataGenerator;
pub use predictor::OutcomePredictor;
pub use types::{
    BookmakerOdds, GenerationError, PredictionError, PredictionRequest, PredictionResult,
    SyntheticMatchData,
};
