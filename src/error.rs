// Error types for the endpoint client. Every failure the client can hit
// while summarizing is one of these variants; the presentation layer turns
// them into a display string instead of propagating them.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("the access token contains characters that are not allowed in a header")]
    InvalidToken,

    #[error("failed to reach the endpoint: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response body is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl SummarizeError {
    /// Request-level failures are the ones raised while issuing the HTTP
    /// call itself (bad header, network, non-2xx). Anything after a
    /// successful response is treated as unexpected.
    pub fn is_request_error(&self) -> bool {
        !matches!(self, SummarizeError::Malformed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_error_message() {
        let err = SummarizeError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "model is loading".into(),
        };
        assert_eq!(
            err.to_string(),
            "endpoint returned 503 Service Unavailable: model is loading"
        );
        assert!(err.is_request_error());
    }

    #[test]
    fn test_malformed_is_not_request_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = SummarizeError::Malformed(parse_err);
        assert!(!err.is_request_error());
        assert!(err.to_string().starts_with("response body is not valid JSON"));
    }
}
