//! HTTP client for the ViaCEP postal-code directory
//!
//! Issues a single unauthenticated GET per lookup and maps the JSON
//! payload onto `LookupResult`. All failures are converted to
//! `LookupResult::TransportError` at the trait boundary.

use super::traits::{Address, LookupResult, PostalLookup};
use crate::config::LookupConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Failures internal to the client, before they are flattened into
/// `LookupResult::TransportError` for callers.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request to ViaCEP failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("ViaCEP returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Raw ViaCEP response body. Every address field is optional in practice;
/// `erro` is present (and truthy) only for unknown codes.
#[derive(Debug, Default, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    // ViaCEP has answered both `"erro": true` and `"erro": "true"` over time
    fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(value) => value.as_bool() == Some(true) || value.as_str() == Some("true"),
            None => false,
        }
    }

    fn into_result(self) -> LookupResult {
        if self.is_not_found() {
            return LookupResult::NotFound;
        }
        LookupResult::Found(Address {
            street: self.logradouro,
            district: self.bairro,
            city: self.localidade,
            state: self.uf,
        })
    }
}

/// Client for the ViaCEP directory service
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a client from the resolved user configuration
    pub fn new() -> Result<Self, LookupError> {
        Self::from_config(&LookupConfig::load().unwrap_or_default())
    }

    /// Create a client from an explicit configuration
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, code: &str) -> Result<LookupResult, LookupError> {
        let url = format!("{}/ws/{}/json/", self.base_url, code);
        tracing::debug!(%url, "querying postal-code directory");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let payload: ViaCepResponse = response.json().await?;
        Ok(payload.into_result())
    }
}

#[async_trait]
impl PostalLookup for ViaCepClient {
    async fn lookup(&self, code: &str) -> LookupResult {
        match self.fetch(code).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(code, error = %err, "postal-code lookup failed");
                LookupResult::TransportError(err.to_string())
            }
        }
    }
}
