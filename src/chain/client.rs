// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Xion LCD (REST) client for chain queries.

use std::time::Duration;

use base64ct::{Base64Url, Encoding};
use serde::Deserialize;
use url::Url;

use super::types::{Coin, NetworkConfig};

/// Request timeout for chain queries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Xion chain client speaking the Cosmos LCD REST API.
pub struct ChainClient {
    /// Network configuration
    network: NetworkConfig,
    /// Base REST URL (validated at construction)
    base_url: Url,
    /// Shared HTTP client
    http: reqwest::Client,
}

/// Bank module response for `/cosmos/bank/v1beta1/balances/{address}`.
#[derive(Debug, Deserialize)]
struct BankBalancesResponse {
    #[serde(default)]
    balances: Vec<Coin>,
}

/// CosmWasm response for `/cosmwasm/wasm/v1/contract/{address}/smart/{query}`.
#[derive(Debug, Deserialize)]
struct SmartQueryResponse {
    data: serde_json::Value,
}

/// LCD error body, e.g. `{"code":3,"message":"decoding bech32 failed"}`.
#[derive(Debug, Deserialize)]
struct LcdErrorBody {
    #[serde(default)]
    message: String,
}

impl ChainClient {
    /// Create a new client for the specified network.
    pub fn new(network: NetworkConfig) -> Result<Self, ChainClientError> {
        Self::with_rest_url(network.rest_url, network)
    }

    /// Create a client with an explicit REST URL (environment override).
    pub fn with_rest_url(rest_url: &str, network: NetworkConfig) -> Result<Self, ChainClientError> {
        // A trailing slash keeps Url::join from truncating base paths.
        let normalized = if rest_url.ends_with('/') {
            rest_url.to_string()
        } else {
            format!("{rest_url}/")
        };

        let base_url: Url = normalized
            .parse()
            .map_err(|e: url::ParseError| ChainClientError::InvalidRestUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ChainClientError::RestError(e.to_string()))?;

        Ok(Self {
            network,
            base_url,
            http,
        })
    }

    /// Get all bank balances for an address.
    pub async fn get_balances(&self, address: &str) -> Result<Vec<Coin>, ChainClientError> {
        let url = self
            .join(&format!("cosmos/bank/v1beta1/balances/{address}"))?;

        let body: BankBalancesResponse = self.get_json(url).await?;
        Ok(body.balances)
    }

    /// Run a read-only CosmWasm smart query against a contract.
    ///
    /// The query JSON travels in the URL path; URL-safe base64 keeps the
    /// encoded payload out of the path-segment separators.
    pub async fn smart_query(
        &self,
        contract: &str,
        query: &serde_json::Value,
    ) -> Result<serde_json::Value, ChainClientError> {
        let payload =
            serde_json::to_vec(query).map_err(|e| ChainClientError::InvalidQuery(e.to_string()))?;
        let encoded = Base64Url::encode_string(&payload);

        let url = self.join(&format!(
            "cosmwasm/wasm/v1/contract/{contract}/smart/{encoded}"
        ))?;

        let body: SmartQueryResponse = self.get_json(url).await?;
        Ok(body.data)
    }

    /// Ping the chain's node-info endpoint (used by the readiness probe).
    pub async fn node_info(&self) -> Result<(), ChainClientError> {
        let url = self.join("cosmos/base/tendermint/v1beta1/node_info")?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ChainClientError::RestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChainClientError::UpstreamStatus {
                status: response.status().as_u16(),
                message: "node info unavailable".to_string(),
            });
        }

        Ok(())
    }

    /// Get the network configuration.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Get the configured REST base URL.
    pub fn rest_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn join(&self, path: &str) -> Result<Url, ChainClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ChainClientError::InvalidRestUrl(e.to_string()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, ChainClientError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ChainClientError::RestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the LCD's own message when it sends one.
            let message = response
                .json::<LcdErrorBody>()
                .await
                .map(|b| b.message)
                .unwrap_or_default();
            return Err(ChainClientError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ChainClientError::RestError(e.to_string()))
    }
}

/// Errors that can occur during chain queries.
#[derive(Debug, thiserror::Error)]
pub enum ChainClientError {
    #[error("Invalid REST URL: {0}")]
    InvalidRestUrl(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("REST error: {0}")]
    RestError(String),

    #[error("Chain returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::types::XION_TESTNET;

    #[test]
    fn new_accepts_known_networks() {
        let client = ChainClient::new(XION_TESTNET).unwrap();
        assert_eq!(client.network().chain_id, "xion-testnet-1");
        assert!(client.rest_url().starts_with("https://"));
    }

    #[test]
    fn with_rest_url_rejects_malformed_url() {
        let result = ChainClient::with_rest_url("not a url", XION_TESTNET);
        assert!(matches!(result, Err(ChainClientError::InvalidRestUrl(_))));
    }

    #[test]
    fn smart_query_path_is_url_safe() {
        // A query containing bytes whose standard-base64 encoding would
        // include `/` must still produce a clean path segment.
        let payload = serde_json::json!({"balance": {"address": "xion1??>>??"}});
        let encoded = Base64Url::encode_string(&serde_json::to_vec(&payload).unwrap());
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('+'));
    }
}
