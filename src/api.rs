// API client module: a small blocking HTTP client that sends dialogues to a
// hosted inference endpoint and pulls the summary out of the response.
// One request per dialogue, no retries; batches are plain sequential loops.

use crate::config::EndpointConfig;
use crate::error::SummarizeError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

pub type SummaryResult = Result<Summary, SummarizeError>;

/// What the endpoint gave back, decided once when the body is parsed.
#[derive(Clone, Debug, PartialEq)]
pub enum Summary {
    /// The response had the expected `[{"summary_text": ...}]` shape.
    Generated(String),
    /// Any other JSON payload, kept verbatim. Some deployments answer with
    /// shapes we don't know about, so this is passed through rather than
    /// rejected.
    Raw(Value),
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Generated(text) => f.write_str(text),
            Summary::Raw(value) => write!(f, "{value}"),
        }
    }
}

/// Request payload. Inference endpoints expect the text under `inputs`.
#[derive(Serialize, Debug)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
}

/// First element of a successful response. Summarization pipelines fill
/// `summary_text`; text2text deployments of the same model fill
/// `generated_text` instead.
#[derive(Deserialize, Debug)]
struct GeneratedText {
    summary_text: Option<String>,
    generated_text: Option<String>,
}

/// Turn a decoded response body into a `Summary`.
pub fn parse_response(body: Value) -> Summary {
    let text = body
        .as_array()
        .and_then(|items| items.first())
        .and_then(|first| GeneratedText::deserialize(first).ok())
        .and_then(|g| g.summary_text.or(g.generated_text));

    match text {
        Some(text) => Summary::Generated(text),
        None => Summary::Raw(body),
    }
}

/// Collapse a result into the single string shown to users. Request-level
/// failures and unexpected ones get different prefixes.
pub fn render_result(result: &SummaryResult) -> String {
    match result {
        Ok(summary) => summary.to_string(),
        Err(err) if err.is_request_error() => format!("Request error: {err}"),
        Err(err) => format!("Unexpected error: {err}"),
    }
}

/// Anything that can summarize a dialogue. The presentation layer only
/// talks to this trait, which keeps it testable without a network.
pub trait Summarize {
    fn summarize(&self, dialogue: &str) -> SummaryResult;

    /// One result per dialogue, in input order. A failed dialogue does not
    /// stop the ones after it.
    fn summarize_batch<S: AsRef<str>>(&self, dialogues: &[S]) -> Vec<SummaryResult> {
        dialogues
            .iter()
            .map(|dialogue| self.summarize(dialogue.as_ref()))
            .collect()
    }

    /// `summarize`, already rendered to a display string.
    fn summarize_text(&self, dialogue: &str) -> String {
        render_result(&self.summarize(dialogue))
    }
}

/// Blocking client for one inference endpoint. Holds the reqwest client
/// (with the configured timeout) and the endpoint configuration it was
/// built from.
#[derive(Clone, Debug)]
pub struct EndpointClient {
    client: Client,
    config: EndpointConfig,
}

impl EndpointClient {
    pub fn new(config: EndpointConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SummarizeError::Transport)?;
        Ok(EndpointClient { client, config })
    }

    /// Authorization header map; empty when no token is configured.
    fn auth_headers(&self) -> Result<HeaderMap, SummarizeError> {
        let mut headers = HeaderMap::new();
        if let Some(t) = &self.config.token {
            let mut val = HeaderValue::from_str(&format!("Bearer {}", t))
                .map_err(|_| SummarizeError::InvalidToken)?;
            val.set_sensitive(true);
            headers.insert(AUTHORIZATION, val);
        }
        Ok(headers)
    }
}

impl Summarize for EndpointClient {
    fn summarize(&self, dialogue: &str) -> SummaryResult {
        let headers = self.auth_headers()?;
        debug!(url = %self.config.url, chars = dialogue.len(), "sending summarization request");

        let res = self
            .client
            .post(&self.config.url)
            .headers(headers)
            .json(&SummarizeRequest { inputs: dialogue })
            .send()
            .map_err(|e| {
                info!(url = %self.config.url, error = %e, "summarization request failed");
                SummarizeError::Transport(e)
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            info!(url = %self.config.url, %status, "endpoint rejected summarization request");
            return Err(SummarizeError::Status { status, body });
        }

        let bytes = res.bytes().map_err(SummarizeError::Transport)?;
        let body: Value = serde_json::from_slice(&bytes).map_err(SummarizeError::Malformed)?;

        let summary = parse_response(body);
        if let Summary::Raw(_) = &summary {
            info!("response has no summary text, passing the raw payload through");
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_summary_text() {
        let body = json!([{"summary_text": "A is getting a puppy."}]);
        assert_eq!(
            parse_response(body),
            Summary::Generated("A is getting a puppy.".into())
        );
    }

    #[test]
    fn test_parse_generated_text() {
        let body = json!([{"generated_text": "They plan a trip."}]);
        assert_eq!(parse_response(body), Summary::Generated("They plan a trip.".into()));
    }

    #[test]
    fn test_summary_text_preferred_over_generated_text() {
        let body = json!([{"generated_text": "second", "summary_text": "first"}]);
        assert_eq!(parse_response(body), Summary::Generated("first".into()));
    }

    #[test]
    fn test_unknown_shapes_fall_back_to_raw() {
        for body in [
            json!({"error": "Model is currently loading", "estimated_time": 20.0}),
            json!([]),
            json!(["just a string"]),
            json!([{"label": "POSITIVE"}]),
            json!([{"summary_text": 42}]),
        ] {
            assert_eq!(parse_response(body.clone()), Summary::Raw(body));
        }
    }

    #[test]
    fn test_raw_renders_as_compact_json() {
        let result: SummaryResult = Ok(Summary::Raw(json!({"error": "busy"})));
        assert_eq!(render_result(&result), r#"{"error":"busy"}"#);
    }

    #[test]
    fn test_render_prefixes() {
        let request: SummaryResult = Err(SummarizeError::InvalidToken);
        assert!(render_result(&request).starts_with("Request error: "));

        let parse_err = serde_json::from_str::<Value>("not json").unwrap_err();
        let unexpected: SummaryResult = Err(SummarizeError::Malformed(parse_err));
        assert!(render_result(&unexpected).starts_with("Unexpected error: "));
    }

    #[test]
    fn test_auth_headers() {
        let with_token =
            EndpointClient::new(EndpointConfig::new("http://localhost", Some("secret".into()))).unwrap();
        let headers = with_token.auth_headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret");

        let without = EndpointClient::new(EndpointConfig::new("http://localhost", None)).unwrap();
        assert!(without.auth_headers().unwrap().is_empty());
    }

    #[test]
    fn test_token_with_newline_is_rejected_before_sending() {
        let client =
            EndpointClient::new(EndpointConfig::new("http://localhost", Some("abc\ndef".into()))).unwrap();
        let result = client.summarize("hello");
        assert!(matches!(result, Err(SummarizeError::InvalidToken)));
    }
}
