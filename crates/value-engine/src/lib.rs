//! Deterministic value-bet evaluation.
//!
//! A wager is a value bet when the bettor's estimated probability beats the
//! probability implied by the bookmaker's price by more than a configured
//! margin. This is pure arithmetic with no backend calls and no shared state;
//! it is safe to call concurrently from any number of callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One evaluation request. Constructed per call, discarded after.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValueBetQuery {
    /// Estimated true probability of the outcome, in [0, 1].
    pub predicted_probability: f64,
    /// Decimal odds offered for the same outcome, >= 1.
    pub bookmaker_odds: f64,
    /// Minimum edge ratio for value, e.g. 1.05 for a 5% edge. >= 1.
    pub minimum_value_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValueBetVerdict {
    pub is_value_bet: bool,
    /// Edge per unit stake as a percentage, stored unrounded. Only the reason
    /// string rounds for display.
    pub value_percentage: f64,
    pub reason: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("predictedProbability must be a finite number in [0, 1], got {0}")]
    Probability(f64),
    #[error("bookmakerOdds must be a finite number >= 1, got {0}")]
    Odds(f64),
    #[error("minimumValueThreshold must be a finite number >= 1, got {0}")]
    Threshold(f64),
}

/// Classifies a wager as value or not.
///
/// Both conditions are strict: a predicted probability exactly equal to the
/// implied probability is not value, and an edge ratio exactly equal to the
/// threshold is not value. Out-of-range input fails fast instead of
/// propagating NaN or Infinity into the verdict.
pub fn evaluate(query: &ValueBetQuery) -> Result<ValueBetVerdict, InvalidInputError> {
    if !query.predicted_probability.is_finite()
        || !(0.0..=1.0).contains(&query.predicted_probability)
    {
        return Err(InvalidInputError::Probability(query.predicted_probability));
    }
    if !query.bookmaker_odds.is_finite() || query.bookmaker_odds < 1.0 {
        return Err(InvalidInputError::Odds(query.bookmaker_odds));
    }
    if !query.minimum_value_threshold.is_finite() || query.minimum_value_threshold < 1.0 {
        return Err(InvalidInputError::Threshold(query.minimum_value_threshold));
    }

    let implied_probability = 1.0 / query.bookmaker_odds;
    // Expected value per unit stake, zero-sum convention.
    let edge = query.predicted_probability * query.bookmaker_odds - 1.0;
    let value_percentage = edge * 100.0;

    let is_value_bet = query.predicted_probability > implied_probability
        && (1.0 + edge) > query.minimum_value_threshold;

    let predicted_pct = format!("{:.1}", query.predicted_probability * 100.0);
    let implied_pct = format!("{:.1}", implied_probability * 100.0);
    let value_pct = format!("{:.1}", value_percentage);
    let threshold_pct = format!("{:.1}", (query.minimum_value_threshold - 1.0) * 100.0);

    let reason = if is_value_bet {
        format!(
            "This is a value bet. Your predicted probability of {predicted_pct}% is higher than the implied probability of {implied_pct}%, and the calculated value of +{value_pct}% exceeds your minimum threshold of +{threshold_pct}%."
        )
    } else if query.predicted_probability <= implied_probability {
        format!(
            "This is not a value bet. Your predicted probability of {predicted_pct}% is not higher than the bookmaker's implied probability of {implied_pct}%."
        )
    } else {
        format!(
            "This is not a value bet. Although your probability is higher, the calculated value of +{value_pct}% does not exceed your minimum threshold of +{threshold_pct}%."
        )
    };

    Ok(ValueBetVerdict {
        is_value_bet,
        value_percentage,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(p: f64, odds: f64, threshold: f64) -> ValueBetQuery {
        ValueBetQuery {
            predicted_probability: p,
            bookmaker_odds: odds,
            minimum_value_threshold: threshold,
        }
    }

    #[test]
    fn clear_value_bet_is_flagged() {
        // predicted 55% vs implied ~47.6%, edge ~15.5% over a 5% threshold
        let verdict = evaluate(&query(0.55, 2.10, 1.05)).unwrap();

        assert!(verdict.is_value_bet);
        assert!((verdict.value_percentage - 15.5).abs() < 1e-9);
        assert!(verdict.reason.starts_with("This is a value bet."));
        assert!(verdict.reason.contains("55.0%"));
        assert!(verdict.reason.contains("47.6%"));
        assert!(verdict.reason.contains("+15.5%"));
        assert!(verdict.reason.contains("+5.0%"));
    }

    #[test]
    fn predicted_below_implied_is_not_value() {
        let verdict = evaluate(&query(0.40, 2.10, 1.05)).unwrap();

        assert!(!verdict.is_value_bet);
        assert!(verdict.value_percentage < 0.0);
        assert!(verdict
            .reason
            .contains("is not higher than the bookmaker's implied probability"));
        assert!(verdict.reason.contains("40.0%"));
        assert!(verdict.reason.contains("47.6%"));
    }

    #[test]
    fn equal_probabilities_are_not_value() {
        // predicted exactly equals implied: strict inequality excludes it
        let verdict = evaluate(&query(0.50, 2.00, 1.10)).unwrap();

        assert!(!verdict.is_value_bet);
        assert!(verdict
            .reason
            .contains("is not higher than the bookmaker's implied probability"));
    }

    #[test]
    fn boundary_is_exclusive_for_any_odds() {
        for odds in [1.25, 1.5, 2.0, 4.0, 10.0] {
            let verdict = evaluate(&query(1.0 / odds, odds, 1.0)).unwrap();
            assert!(!verdict.is_value_bet, "odds {odds} should not be value");
        }
    }

    #[test]
    fn positive_edge_below_threshold_is_not_value() {
        // predicted 52% at 2.0 gives a 4% edge, threshold wants 10%
        let verdict = evaluate(&query(0.52, 2.00, 1.10)).unwrap();

        assert!(!verdict.is_value_bet);
        assert!((verdict.value_percentage - 4.0).abs() < 1e-9);
        assert!(verdict
            .reason
            .contains("Although your probability is higher"));
        assert!(verdict.reason.contains("+4.0%"));
        assert!(verdict.reason.contains("+10.0%"));
    }

    #[test]
    fn edge_exactly_at_threshold_is_not_value() {
        // 0.55 * 2.0 - 1 = 0.10, edge ratio 1.10 == threshold: strict
        let verdict = evaluate(&query(0.55, 2.00, 1.10)).unwrap();
        assert!(!verdict.is_value_bet);
    }

    #[test]
    fn value_percentage_is_stored_unrounded() {
        let q = query(0.55, 2.10, 1.05);
        let verdict = evaluate(&q).unwrap();
        assert_eq!(
            verdict.value_percentage,
            (q.predicted_probability * q.bookmaker_odds - 1.0) * 100.0
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let q = query(0.61, 1.95, 1.07);
        assert_eq!(evaluate(&q).unwrap(), evaluate(&q).unwrap());
    }

    #[test]
    fn out_of_range_inputs_fail_fast() {
        assert_eq!(
            evaluate(&query(1.2, 2.0, 1.05)),
            Err(InvalidInputError::Probability(1.2))
        );
        assert_eq!(
            evaluate(&query(-0.1, 2.0, 1.05)),
            Err(InvalidInputError::Probability(-0.1))
        );
        assert_eq!(
            evaluate(&query(0.5, 0.0, 1.05)),
            Err(InvalidInputError::Odds(0.0))
        );
        assert_eq!(
            evaluate(&query(0.5, -2.0, 1.05)),
            Err(InvalidInputError::Odds(-2.0))
        );
        assert_eq!(
            evaluate(&query(0.5, 2.0, 0.9)),
            Err(InvalidInputError::Threshold(0.9))
        );
        assert!(evaluate(&query(f64::NAN, 2.0, 1.05)).is_err());
        assert!(evaluate(&query(0.5, f64::INFINITY, 1.05)).is_err());
    }

    #[test]
    fn verdict_serializes_with_camel_case_fields() {
        let verdict = evaluate(&query(0.55, 2.10, 1.05)).unwrap();
        let json = serde_json::to_value(&verdict).unwrap();
        assert!(json.get("isValueBet").is_some());
        assert!(json.get("valuePercentage").is_some());
        assert!(json.get("reason").is_some());
    }
}
