// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Smart-contract query proxy endpoint.
//!
//! Read-only CosmWasm smart queries only. Contract execution needs a
//! signed transaction and is outside this service's scope.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ApiError,
    models::{ContractQueryRequest, ContractQueryResponse},
    state::AppState,
    wallet::keys::validate_address,
};

/// Run a read-only smart query against a contract.
#[utoipa::path(
    post,
    path = "/v1/contracts/{address}/query",
    tag = "Contracts",
    params(
        ("address" = String, Path, description = "Bech32 contract address")
    ),
    request_body = ContractQueryRequest,
    responses(
        (status = 200, description = "Query executed successfully", body = ContractQueryResponse),
        (status = 400, description = "Malformed address or missing query"),
        (status = 503, description = "Chain network unavailable")
    )
)]
pub async fn query_contract(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Json(request): Json<ContractQueryRequest>,
) -> Result<Json<ContractQueryResponse>, ApiError> {
    validate_address(&address, &state.settings.address_prefix)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let query = request
        .query
        .ok_or_else(|| ApiError::bad_request("Query is required"))?;

    let data = state
        .chain
        .smart_query(&address, &query)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, contract = %address, "Contract query failed");
            ApiError::service_unavailable("Failed to query contract")
        })?;

    Ok(Json(ContractQueryResponse { data }))
}
