// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values, and the
//! [`Settings`] loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `3000` |
//! | `ADDRESS_PREFIX` | Bech32 human-readable prefix for derived addresses | `xion` |
//! | `CHAIN_NETWORK` | Chain to proxy queries to (`testnet` or `mainnet`) | `testnet` |
//! | `CHAIN_REST_URL` | LCD REST endpoint override | Network default |
//! | `ENCRYPTION_KEY` | 64-hex-char AES-256 key for the secret cipher | Random per process |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use crate::chain::{NetworkConfig, XION_MAINNET, XION_TESTNET};

/// Environment variable name for the bech32 address prefix.
pub const ADDRESS_PREFIX_ENV: &str = "ADDRESS_PREFIX";

/// Environment variable name for the chain network selector.
pub const CHAIN_NETWORK_ENV: &str = "CHAIN_NETWORK";

/// Environment variable name for the LCD REST endpoint override.
pub const CHAIN_REST_URL_ENV: &str = "CHAIN_REST_URL";

/// Environment variable name for the cipher key.
///
/// When unset, a random key is generated at startup and ciphertexts from
/// earlier process lifetimes become undecryptable. Supplying the key from
/// a secret store makes the key lifecycle explicit and survivable.
pub const ENCRYPTION_KEY_ENV: &str = "ENCRYPTION_KEY";

/// Environment variable name for the logging format selector.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default bech32 prefix for the observed deployment.
pub const DEFAULT_ADDRESS_PREFIX: &str = "xion";

/// Configuration error raised during startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {ENCRYPTION_KEY_ENV}: {0}")]
    InvalidEncryptionKey(String),
}

/// Derivation settings shared by all requests.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bech32 human-readable prefix for derived addresses.
    pub address_prefix: String,
    /// Network the chain proxy targets.
    pub network: NetworkConfig,
    /// LCD REST endpoint (network default unless overridden).
    pub rest_url: String,
}

impl Settings {
    /// Load settings from the environment.
    pub fn from_env() -> Self {
        let address_prefix = env::var(ADDRESS_PREFIX_ENV)
            .unwrap_or_else(|_| DEFAULT_ADDRESS_PREFIX.to_string());

        let network = match env::var(CHAIN_NETWORK_ENV).as_deref() {
            Ok("mainnet") => XION_MAINNET,
            _ => XION_TESTNET,
        };

        let rest_url =
            env::var(CHAIN_REST_URL_ENV).unwrap_or_else(|_| network.rest_url.to_string());

        Self {
            address_prefix,
            network,
            rest_url,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
            network: XION_TESTNET,
            rest_url: XION_TESTNET.rest_url.to_string(),
        }
    }
}

/// Read the cipher key from the environment, if configured.
///
/// Returns `Ok(None)` when the variable is unset (the caller falls back to
/// a random per-process key) and an error when it is set but malformed.
pub fn encryption_key_from_env() -> Result<Option<[u8; 32]>, ConfigError> {
    let raw = match env::var(ENCRYPTION_KEY_ENV) {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };

    let bytes = hex::decode(raw.trim())
        .map_err(|_| ConfigError::InvalidEncryptionKey("not a hexadecimal string".to_string()))?;

    let key: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
        ConfigError::InvalidEncryptionKey(format!("expected 32 bytes, got {}", b.len()))
    })?;

    Ok(Some(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_target_xion_testnet() {
        let settings = Settings::default();
        assert_eq!(settings.address_prefix, "xion");
        assert_eq!(settings.network.chain_id, "xion-testnet-1");
        assert_eq!(settings.rest_url, XION_TESTNET.rest_url);
    }
}
