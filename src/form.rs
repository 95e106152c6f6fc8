// Form logic shared by the terminal UI: input validation, batch splitting,
// latency measurement and result rendering. Nothing in here touches the
// terminal, so it can be driven with a stub client in tests.

use crate::api::{render_result, Summarize};
use crate::config::EndpointConfig;
use crate::error::SummarizeError;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

pub const MISSING_ENDPOINT: &str = "Please enter the endpoint URL.";
pub const MISSING_DIALOGUE: &str = "Please enter a dialogue to summarize.";
pub const MISSING_DIALOGUES: &str =
    "Please enter at least one dialogue. Separate dialogues with a blank line.";

/// Separator between dialogues in batch input, and between summaries in
/// batch output.
pub const DIALOGUE_SEPARATOR: &str = "\n\n";

/// Wall-clock time spent on one form action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Latency(pub Duration);

impl Latency {
    pub fn millis(&self) -> f64 {
        self.0.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ms", self.millis())
    }
}

/// The two output fields of a form action.
#[derive(Clone, Debug, PartialEq)]
pub struct FormOutput {
    pub text: String,
    pub latency: Option<Latency>,
}

impl FormOutput {
    fn rejected(message: &str) -> Self {
        FormOutput {
            text: message.to_string(),
            latency: None,
        }
    }

    /// Latency field as shown to the user; empty when nothing was sent.
    pub fn latency_text(&self) -> String {
        self.latency.map(|l| l.to_string()).unwrap_or_default()
    }
}

/// Endpoint fields as typed into the form.
#[derive(Clone, Debug, Default)]
pub struct EndpointFields {
    pub url: String,
    pub token: String,
    pub timeout: Option<Duration>,
}

impl EndpointFields {
    fn to_config(&self) -> Option<EndpointConfig> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        let config = EndpointConfig::new(url, Some(self.token.trim().to_string()));
        Some(match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        })
    }
}

/// Split batch input on blank-line separators, trimming each dialogue and
/// dropping the empty ones.
pub fn split_dialogues(raw: &str) -> Vec<String> {
    raw.replace("\r\n", "\n")
        .split(DIALOGUE_SEPARATOR)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect()
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Latency) {
    let start = Instant::now();
    let value = f();
    (value, Latency(start.elapsed()))
}

/// Single-dialogue action. `connect` builds the client for the validated
/// endpoint; it is not called when validation fails.
pub fn summarize_single<S, F>(fields: &EndpointFields, dialogue: &str, connect: F) -> FormOutput
where
    S: Summarize,
    F: FnOnce(EndpointConfig) -> Result<S, SummarizeError>,
{
    let Some(config) = fields.to_config() else {
        return FormOutput::rejected(MISSING_ENDPOINT);
    };
    if dialogue.trim().is_empty() {
        return FormOutput::rejected(MISSING_DIALOGUE);
    }

    let client = match connect(config) {
        Ok(client) => client,
        Err(err) => {
            return FormOutput {
                text: render_result(&Err(err)),
                latency: None,
            }
        }
    };

    let (text, latency) = timed(|| client.summarize_text(dialogue));
    info!(%latency, "single dialogue summarized");
    FormOutput {
        text,
        latency: Some(latency),
    }
}

/// Batch action: split, summarize each dialogue in order, join the
/// results back with blank lines.
pub fn summarize_batch<S, F>(fields: &EndpointFields, raw: &str, connect: F) -> FormOutput
where
    S: Summarize,
    F: FnOnce(EndpointConfig) -> Result<S, SummarizeError>,
{
    let Some(config) = fields.to_config() else {
        return FormOutput::rejected(MISSING_ENDPOINT);
    };
    let dialogues = split_dialogues(raw);
    if dialogues.is_empty() {
        return FormOutput::rejected(MISSING_DIALOGUES);
    }

    let client = match connect(config) {
        Ok(client) => client,
        Err(err) => {
            return FormOutput {
                text: render_result(&Err(err)),
                latency: None,
            }
        }
    };

    let (results, latency) = timed(|| client.summarize_batch(dialogues.as_slice()));
    info!(%latency, count = dialogues.len(), "batch summarized");
    let text = results
        .iter()
        .map(render_result)
        .collect::<Vec<_>>()
        .join(DIALOGUE_SEPARATOR);
    FormOutput {
        text,
        latency: Some(latency),
    }
}
