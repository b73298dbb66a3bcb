// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain types and constants.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Xion network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Cosmos chain ID
    pub chain_id: &'static str,
    /// LCD (REST) endpoint URL
    pub rest_url: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// Xion mainnet configuration.
pub const XION_MAINNET: NetworkConfig = NetworkConfig {
    name: "Xion Mainnet",
    chain_id: "xion-mainnet-1",
    rest_url: "https://api.xion-mainnet-1.burnt.com",
    explorer_url: "https://explorer.burnt.com/xion-mainnet-1",
};

/// Xion testnet configuration.
pub const XION_TESTNET: NetworkConfig = NetworkConfig {
    name: "Xion Testnet",
    chain_id: "xion-testnet-1",
    rest_url: "https://api.xion-testnet-1.burnt.com",
    explorer_url: "https://explorer.burnt.com/xion-testnet-1",
};

/// Decimals used by micro-denominations (`u…` prefixed, e.g. `uxion`).
pub const MICRO_DECIMALS: u8 = 6;

/// A coin amount as the chain's bank module reports it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Coin {
    /// Denomination (e.g. "uxion")
    pub denom: String,
    /// Amount in the smallest unit, as a decimal string
    pub amount: String,
}

/// A coin balance enriched with a human-readable amount.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalance {
    /// Denomination (e.g. "uxion")
    pub denom: String,
    /// Amount in the smallest unit, as a decimal string
    pub amount: String,
    /// Amount formatted with decimals (micro-denoms only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl From<Coin> for CoinBalance {
    fn from(coin: Coin) -> Self {
        // Only `u…` micro-denoms have a known decimal scale; IBC and
        // factory denoms are passed through raw.
        let formatted = if coin.denom.starts_with('u') && coin.denom.len() > 1 {
            coin.amount
                .parse::<u128>()
                .ok()
                .map(|raw| format_amount(raw, MICRO_DECIMALS))
        } else {
            None
        };

        Self {
            denom: coin.denom,
            amount: coin.amount,
            formatted,
        }
    }
}

/// Format a raw amount with the specified number of decimals.
pub fn format_amount(amount: u128, decimals: u8) -> String {
    if amount == 0 {
        return "0".to_string();
    }

    let divisor = 10u128.pow(decimals as u32);
    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder == 0 {
        whole.to_string()
    } else {
        // Format with up to 6 decimal places
        let decimal_str = format!("{:0>width$}", remainder, width = decimals as usize);
        let trimmed = decimal_str.trim_end_matches('0');
        if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{}.{}", whole, &trimmed[..trimmed.len().min(6)])
        }
    }
}
