use std::fmt::Display;

/// State of a read-only view backed by one GET request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    /// Resolve a finished request. Errors of any kind collapse into
    /// `failure_message`; the detailed error is only logged.
    pub fn from_result<E: Display>(result: Result<T, E>, failure_message: &str) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => {
                tracing::error!(error = %err, "{}", failure_message);
                Self::Error(failure_message.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::dashboard::{DASHBOARD_FETCH_FAILED, DashboardStats};
    use crate::history::HISTORY_FETCH_FAILED;
    use crate::prediction::PredictionRecord;

    #[test]
    fn test_success_keeps_data() {
        let state: FetchState<Vec<u8>> = FetchState::from_result(Ok::<_, FetchError>(vec![1, 2]), "x");
        assert!(state.is_success());
        assert_eq!(state.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_failure_replaces_previous_data_with_generic_message() {
        let mut state = FetchState::Success(vec!["stale".to_string()]);
        assert!(state.data().is_some());

        state = FetchState::from_result(Err(FetchError::HttpStatus(502)), HISTORY_FETCH_FAILED);

        assert!(state.is_error());
        assert!(state.data().is_none());
        assert_eq!(
            state.error().map(String::as_str),
            Some("Failed to fetch prediction history.")
        );
    }

    #[test]
    fn test_dashboard_failure_has_no_statistics() {
        let state: FetchState<Vec<PredictionRecord>> = FetchState::from_result(
            Err(FetchError::Network("connection refused".to_string())),
            DASHBOARD_FETCH_FAILED,
        );

        let stats = state.data().map(|records| DashboardStats::from_records(records));
        assert!(stats.is_none());
        assert_eq!(
            state.error().map(String::as_str),
            Some("Failed to fetch dashboard statistics.")
        );
    }

    #[test]
    fn test_default_is_not_started() {
        let state: FetchState<()> = FetchState::default();
        assert_eq!(state, FetchState::NotStarted);
        assert!(!state.is_loading());
    }
}
