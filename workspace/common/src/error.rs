use thiserror::Error;

/// Failure of a single backend round trip.
///
/// Views never show these details to the user; each one collapses every
/// variant into its own generic message and only logs the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, CORS, connection refused).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status code.
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// The body could not be encoded or did not have the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_details() {
        assert_eq!(FetchError::HttpStatus(503).to_string(), "HTTP error: 503");
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
        assert!(
            FetchError::Decode("missing field `risk_classification`".to_string())
                .to_string()
                .contains("risk_classification")
        );
    }
}
