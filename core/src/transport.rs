//! Blocking HTTP executor for the JSON endpoint and the file endpoint.
//!
//! # Design
//! One synchronous round trip per call. The ureq agent is built inside the
//! call with a global timeout, so the connection is scoped to the call and
//! released on every exit path. `http_status_as_error(false)` keeps ureq
//! from turning 4xx/5xx statuses into errors — status interpretation is
//! not this layer's job; it returns the raw body string and classification
//! happens downstream. Any network, DNS or timeout failure surfaces as
//! `ApiError::Transport` before JSON is ever looked at.

use std::time::Duration;

use crate::error::ApiError;

const DEFAULT_ENDPOINT: &str = "https://api.novaposhta.ua/v2.0/json/";
const DEFAULT_FILE_ENDPOINT: &str = "https://my.novaposhta.ua";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Explicit transport configuration. Tests point `endpoint` at a local
/// mock server; production callers keep the defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the JSON-RPC endpoint.
    pub endpoint: String,
    /// Base URL for the binary document endpoint.
    pub file_endpoint: String,
    /// Timeout covering the whole exchange.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            file_endpoint: DEFAULT_FILE_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Executes HTTP exchanges against the configured endpoints.
#[derive(Debug, Clone)]
pub struct Transport {
    config: Config,
}

impl Transport {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    /// POST the serialized payload to the JSON endpoint and return the raw
    /// response body without parsing it.
    pub fn post_json(&self, payload: &str) -> Result<String, ApiError> {
        let agent = agent(self.config.timeout);
        let mut response = agent
            .post(&self.config.endpoint)
            .content_type("application/json")
            .send(payload.as_bytes())
            .map_err(transport_error)?;
        response
            .body_mut()
            .read_to_string()
            .map_err(transport_error)
    }

    /// Binary document retrieval: GET on
    /// `{file_endpoint}/{path}/apiKey/{api_key}`, raw body returned with no
    /// JSON involved. Shares the transport-error contract of `post_json`.
    pub fn fetch_file(
        &self,
        api_key: &str,
        path: &str,
        timeout: Duration,
    ) -> Result<String, ApiError> {
        let url = format!(
            "{}/{}/apiKey/{}",
            self.config.file_endpoint.trim_end_matches('/'),
            path.trim_matches('/'),
            api_key
        );
        let agent = agent(timeout);
        let mut response = agent.get(&url).call().map_err(transport_error)?;
        response
            .body_mut()
            .read_to_string()
            .map_err(transport_error)
    }
}

fn agent(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

fn transport_error(err: ureq::Error) -> ApiError {
    ApiError::Transport {
        message: err.to_string(),
    }
}
