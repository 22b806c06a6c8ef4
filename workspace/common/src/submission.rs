//! Prediction form state machine.
//!
//! `Idle -> Submitting -> {Success, Failed}`. Starting a submission clears the
//! previous result or error at once. Every submission takes a ticket from a
//! generation counter and only the response for the newest ticket may touch
//! the state, so a slow earlier response can never overwrite a later one.

use crate::error::FetchError;
use crate::prediction::PredictionResponse;

pub const PREDICTION_FAILED: &str = "Failed to make prediction. Please try again.";

/// Identifies one request issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic counter handing out request tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Supersedes every ticket handed out so far.
    pub fn advance(&mut self) -> RequestTicket {
        self.current = self.current.wrapping_add(1);
        RequestTicket(self.current)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.current
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(PredictionResponse),
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn prediction(&self) -> Option<&PredictionResponse> {
        match self {
            Self::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionTracker {
    generation: RequestGeneration,
    state: SubmissionState,
}

impl SubmissionTracker {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Enter `Submitting`, dropping any shown prediction or error.
    pub fn begin(&mut self) -> RequestTicket {
        self.state = SubmissionState::Submitting;
        self.generation.advance()
    }

    /// Apply a finished request. Returns `false` and leaves the state alone
    /// when a newer submission has started since `ticket` was issued.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<PredictionResponse, FetchError>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!(?ticket, "Discarding superseded prediction response");
            return false;
        }

        self.state = match result {
            Ok(response) => SubmissionState::Success(response),
            Err(err) => {
                tracing::error!(error = %err, "Prediction request failed");
                SubmissionState::Failed(PREDICTION_FAILED.to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::RiskClassification;
    use pretty_assertions::assert_eq;

    fn response(probability: f64, risk: &str) -> PredictionResponse {
        PredictionResponse {
            default_probability: probability,
            risk_classification: RiskClassification::from(risk),
        }
    }

    #[test]
    fn test_starts_idle() {
        let tracker = SubmissionTracker::default();
        assert_eq!(tracker.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_successful_submission() {
        let mut tracker = SubmissionTracker::default();

        let ticket = tracker.begin();
        assert!(tracker.state().is_submitting());

        assert!(tracker.complete(ticket, Ok(response(0.42, "Medium"))));
        let prediction = tracker.state().prediction().unwrap();
        assert_eq!(prediction.probability_percent(), "42.00%");
        assert_eq!(prediction.risk_classification.label(), "Medium");
        assert_eq!(prediction.risk_classification.color_class(), "text-yellow-600");
    }

    #[test]
    fn test_failed_submission_shows_generic_message() {
        let mut tracker = SubmissionTracker::default();
        let ticket = tracker.begin();

        tracker.complete(ticket, Err(FetchError::HttpStatus(422)));

        assert_eq!(
            tracker.state().error(),
            Some("Failed to make prediction. Please try again.")
        );
        assert!(tracker.state().prediction().is_none());
    }

    #[test]
    fn test_new_submission_clears_previous_result() {
        let mut tracker = SubmissionTracker::default();
        let first = tracker.begin();
        tracker.complete(first, Ok(response(0.1, "Low")));
        assert!(tracker.state().prediction().is_some());

        let second = tracker.begin();
        assert_eq!(tracker.state(), &SubmissionState::Submitting);

        tracker.complete(second, Err(FetchError::Network("offline".to_string())));
        assert!(tracker.state().prediction().is_none());
        assert!(tracker.state().error().is_some());
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut tracker = SubmissionTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(tracker.complete(second, Ok(response(0.7, "High"))));
        // The first request resolves last and must not win.
        assert!(!tracker.complete(first, Ok(response(0.05, "Low"))));

        assert_eq!(tracker.state(), &SubmissionState::Success(response(0.7, "High")));
    }

    #[test]
    fn test_superseded_failure_is_discarded() {
        let mut tracker = SubmissionTracker::default();
        let first = tracker.begin();
        let _second = tracker.begin();

        assert!(!tracker.complete(first, Err(FetchError::HttpStatus(500))));
        assert!(tracker.state().is_submitting());
    }

    #[test]
    fn test_generation_tickets() {
        let mut generation = RequestGeneration::default();
        let a = generation.advance();
        assert!(generation.is_current(a));
        let b = generation.advance();
        assert!(!generation.is_current(a));
        assert!(generation.is_current(b));
    }
}
