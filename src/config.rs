// Process configuration. Values come from the environment (a `.env` file
// in the working directory is loaded by the binaries before this runs).

use anyhow::{Context, Result};
use std::time::Duration;

/// Request timeout used when `SUMMARIZER_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to reach one endpoint. An `EndpointClient` is built
/// from exactly one of these and never changes it afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointConfig {
    pub url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        EndpointConfig {
            url: url.into(),
            token: token.filter(|t| !t.trim().is_empty()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Startup defaults for the interactive form and the demo binary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub endpoint_url: Option<String>,
    pub token: Option<String>,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Read `MODEL_URL` (or `HF_API_URL`), `HF_TOKEN` and
    /// `SUMMARIZER_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable lookup, so callers (and
    /// tests) don't have to touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint_url = non_empty("MODEL_URL").or_else(|| non_empty("HF_API_URL"));
        let token = non_empty("HF_TOKEN");
        let timeout = match non_empty("SUMMARIZER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("SUMMARIZER_TIMEOUT_SECS must be whole seconds, got {raw:?}"))?;
                if secs == 0 {
                    anyhow::bail!("SUMMARIZER_TIMEOUT_SECS must be at least 1 second");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Settings {
            endpoint_url,
            token,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Build the endpoint configuration from the environment defaults.
    /// Fails when no endpoint URL was configured.
    pub fn endpoint(&self) -> Result<EndpointConfig> {
        let url = self
            .endpoint_url
            .clone()
            .context("MODEL_URL (or HF_API_URL) is not set")?;
        Ok(EndpointConfig::new(url, self.token.clone()).with_timeout(self.timeout()))
    }
}
