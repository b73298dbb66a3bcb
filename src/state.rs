// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::chain::ChainClient;
use crate::config::Settings;
use crate::wallet::SecretCipher;

/// Shared application state.
///
/// Everything here is immutable after startup: the cipher key, the chain
/// client, and the derivation settings are read-only, so handlers clone
/// the state freely and run without locking.
#[derive(Clone)]
pub struct AppState {
    pub cipher: Arc<SecretCipher>,
    pub chain: Arc<ChainClient>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(cipher: SecretCipher, chain: ChainClient, settings: Settings) -> Self {
        Self {
            cipher: Arc::new(cipher),
            chain: Arc::new(chain),
            settings: Arc::new(settings),
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        use crate::chain::XION_TESTNET;

        Self::new(
            SecretCipher::new([0x42; 32]),
            ChainClient::new(XION_TESTNET).expect("testnet config is valid"),
            Settings::default(),
        )
    }
}
