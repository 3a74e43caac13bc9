//! Entry point tying the pipeline together.
//!
//! # Design
//! `Client` holds only the API key and the transport configuration — no
//! per-call mutable state, so concurrent `fetch` calls from multiple
//! threads do not race. Each call runs the full pipeline once: build the
//! envelope, POST it, classify the body. Observability goes through the
//! `log` facade at the point of detection (info on request, debug on raw
//! response, error on every failure path); with no logger installed the
//! macros are no-ops and control flow is unchanged.

use std::time::Duration;

use crate::error::ApiError;
use crate::request::{Params, RequestEnvelope};
use crate::response::{classify, ResultContainer};
use crate::transport::{Config, Transport};

/// Synchronous client for the postal-logistics JSON-RPC API.
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    transport: Transport,
}

impl Client {
    /// Client against the production endpoints with the default timeout.
    pub fn new(api_key: &str) -> Self {
        Self::with_config(api_key, Config::default())
    }

    pub fn with_config(api_key: &str, config: Config) -> Self {
        Self {
            api_key: api_key.to_string(),
            transport: Transport::new(config),
        }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.transport.set_timeout(timeout);
    }

    /// Call `model.method(params)` and classify the outcome.
    ///
    /// Exactly one blocking round trip. Every failure category propagates
    /// as its own [`ApiError`] variant: `Encode` before the wire,
    /// `Transport` before any JSON decoding, then `MalformedResponse` or
    /// `LogicalError` from classification.
    pub fn fetch(
        &self,
        model: &str,
        method: &str,
        params: Params,
    ) -> Result<ResultContainer, ApiError> {
        let envelope = RequestEnvelope::new(&self.api_key, model, method, params);
        let payload = match envelope.to_json() {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("failed to encode request for {model}.{method}: {err}");
                return Err(err);
            }
        };
        log::info!("requested {model}.{method}");
        let body = match self.transport.post_json(&payload) {
            Ok(body) => body,
            Err(err) => {
                log::error!("transport failure calling {model}.{method}: {err}");
                return Err(err);
            }
        };
        log::debug!("service responded: {body}");
        match classify(&body) {
            Ok(container) => Ok(container),
            Err(err @ ApiError::LogicalError { .. }) => {
                log::error!("service rejected {model}.{method}: {err}");
                Err(err)
            }
            Err(err) => {
                log::error!("unclassifiable response from {model}.{method}: {err}");
                Err(err)
            }
        }
    }

    /// Retrieve a binary document by path, bypassing the JSON envelope.
    pub fn fetch_file(&self, path: &str, timeout: Duration) -> Result<String, ApiError> {
        match self.transport.fetch_file(&self.api_key, path, timeout) {
            Ok(body) => Ok(body),
            Err(err) => {
                log::error!("file fetch failed for `{path}`: {err}");
                Err(err)
            }
        }
    }
}
