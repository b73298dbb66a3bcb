// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation, and use camelCase field names on the wire.
//!
//! Required request fields are modeled as `Option` so that their absence
//! can be rejected with the service's own 400 message instead of a
//! deserializer error.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::chain::CoinBalance;

// =============================================================================
// Wallet Key Models
// =============================================================================

/// Response for wallet generation and import.
///
/// Carries the derived public identity plus the private key encrypted for
/// transport. The plaintext private key is never returned by these flows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletKeyResponse {
    /// Bech32 wallet address (e.g. `xion1…`).
    pub address: String,
    /// Compressed secp256k1 public key, hex-encoded.
    pub public_key: String,
    /// AES-256-CBC ciphertext of the private key, hex-encoded.
    pub encrypted_private_key: String,
    /// Initialization vector used for the encryption, hex-encoded.
    pub iv: String,
}

/// Request to derive a wallet from a caller-supplied private key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportWalletRequest {
    /// Private key as 64 hex characters.
    pub private_key: Option<String>,
}

/// Request to recover a wallet from a mnemonic phrase.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecoverWalletRequest {
    /// BIP-39 recovery phrase.
    pub mnemonic: Option<String>,
}

/// Response for wallet recovery.
///
/// Only the address is surfaced: recovered keys are not re-encrypted for
/// return.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecoverWalletResponse {
    /// Bech32 wallet address.
    pub address: String,
}

/// Request to decrypt a previously encrypted private key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecryptKeyRequest {
    /// Hex-encoded ciphertext as returned at encryption time.
    pub encrypted_key: Option<String>,
    /// Hex-encoded IV as returned at encryption time.
    pub iv: Option<String>,
}

/// Response carrying a decrypted private key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecryptKeyResponse {
    /// The original private key, hex-encoded.
    pub private_key: String,
}

// =============================================================================
// Chain Proxy Models
// =============================================================================

/// Response for the wallet balance proxy.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    /// Queried wallet address.
    pub address: String,
    /// Network name.
    pub network: String,
    /// Cosmos chain ID.
    pub chain_id: String,
    /// Bank balances held by the address.
    pub balances: Vec<CoinBalance>,
}

/// Request to run a read-only smart query against a contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContractQueryRequest {
    /// Query message forwarded verbatim to the contract.
    #[schema(value_type = Option<Object>)]
    pub query: Option<serde_json::Value>,
}

/// Response from a contract smart query.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContractQueryResponse {
    /// Contract response, passed through verbatim.
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_key_response_uses_camel_case() {
        let response = WalletKeyResponse {
            address: "xion1abc".to_string(),
            public_key: "02ff".to_string(),
            encrypted_private_key: "deadbeef".to_string(),
            iv: "00".repeat(16),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("publicKey").is_some());
        assert!(json.get("encryptedPrivateKey").is_some());
        assert!(json.get("iv").is_some());
        assert!(json.get("public_key").is_none());
    }

    #[test]
    fn decrypt_request_accepts_partial_bodies() {
        let parsed: DecryptKeyRequest = serde_json::from_str(r#"{"iv":"00"}"#).unwrap();
        assert!(parsed.encrypted_key.is_none());
        assert_eq!(parsed.iv.as_deref(), Some("00"));
    }
}
