// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain balance proxy endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ApiError, models::BalanceResponse, state::AppState, wallet::keys::validate_address,
};

/// Get the bank balances of an address.
///
/// Thin proxy over the chain's LCD REST API; the address is validated
/// locally before the request leaves the service.
#[utoipa::path(
    get,
    path = "/v1/wallets/{address}/balance",
    tag = "Wallets",
    params(
        ("address" = String, Path, description = "Bech32 wallet address")
    ),
    responses(
        (status = 200, description = "Balances retrieved successfully", body = BalanceResponse),
        (status = 400, description = "Malformed address"),
        (status = 503, description = "Chain network unavailable")
    )
)]
pub async fn get_wallet_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    validate_address(&address, &state.settings.address_prefix)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let balances = state.chain.get_balances(&address).await.map_err(|e| {
        tracing::warn!(error = %e, %address, "Balance query failed");
        ApiError::service_unavailable("Failed to query balance")
    })?;

    let network = state.chain.network();

    Ok(Json(BalanceResponse {
        address,
        network: network.name.to_string(),
        chain_id: network.chain_id.to_string(),
        balances: balances.into_iter().map(Into::into).collect(),
    }))
}
