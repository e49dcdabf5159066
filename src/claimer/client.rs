//! Faucet HTTP client
//!
//! Owns the single `reqwest::Client` and performs exactly one POST per
//! attempt. Retry cadence is the worker's job, not this module's.

use std::time::{Duration, Instant};

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

use super::error::ClaimerError;
use super::outcome::{ClaimOutcome, TransportFailure, classify_response};
use crate::config::FaucetConfig;

/// Outcome of one attempt plus the wall-clock time it took.
#[derive(Debug)]
pub struct AttemptResult {
    pub outcome: ClaimOutcome,
    pub elapsed: Duration,
}

/// HTTP client for the Morkie faucet endpoint.
pub struct FaucetClient {
    http: reqwest::Client,
    api_url: String,
}

impl FaucetClient {
    /// Build the client with the configured timeout and the fixed header
    /// set the faucet expects from a browser.
    pub fn new(config: &FaucetConfig) -> Result<Self, ClaimerError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("es"));
        headers.insert(header::ORIGIN, header_value(&config.origin, "faucet.origin")?);
        headers.insert(
            header::REFERER,
            header_value(&config.referer, "faucet.referer")?,
        );
        headers.insert(
            header::USER_AGENT,
            header_value(&config.user_agent, "faucet.user_agent")?,
        );
        headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
        headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
        headers.insert("sec-fetch-site", HeaderValue::from_static("same-origin"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// Perform one claim attempt: single POST, no retries, transport errors
    /// and response bodies both end up classified.
    pub async fn claim(&self, address: &str) -> AttemptResult {
        let started = Instant::now();
        let outcome = self.claim_once(address).await;
        AttemptResult {
            outcome,
            elapsed: started.elapsed(),
        }
    }

    async fn claim_once(&self, address: &str) -> ClaimOutcome {
        let payload = serde_json::json!({ "address": address });
        debug!("POST {} payload={}", self.api_url, payload);

        let response = match self.http.post(&self.api_url).json(&payload).send().await {
            Ok(response) => response,
            Err(err) => return ClaimOutcome::ConnectionError(map_transport_error(&err)),
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return ClaimOutcome::ConnectionError(map_transport_error(&err)),
        };
        debug!("faucet replied status={} body_len={}", status, body.len());

        classify_response(status, &body)
    }
}

fn header_value(value: &str, field: &str) -> Result<HeaderValue, ClaimerError> {
    HeaderValue::from_str(value)
        .map_err(|_| ClaimerError::Config(format!("invalid header value for {}", field)))
}

fn map_transport_error(err: &reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout
    } else if err.is_connect() {
        TransportFailure::Connect(err.to_string())
    } else {
        TransportFailure::Request(err.to_string())
    }
}
