// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    chain::CoinBalance,
    models::{
        BalanceResponse, ContractQueryRequest, ContractQueryResponse, DecryptKeyRequest,
        DecryptKeyResponse, ImportWalletRequest, RecoverWalletRequest, RecoverWalletResponse,
        WalletKeyResponse,
    },
    state::AppState,
};

pub mod balance;
pub mod contracts;
pub mod health;
pub mod wallets;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/wallets", post(wallets::generate_wallet))
        .route("/wallets/import", post(wallets::import_wallet))
        .route("/wallets/recover", post(wallets::recover_wallet))
        .route("/wallets/decrypt", post(wallets::decrypt_key))
        .route("/wallets/{address}/balance", get(balance::get_wallet_balance))
        .route("/contracts/{address}/query", post(contracts::query_contract));

    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .nest("/v1", v1_routes)
        .with_state(state);

    routes
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        wallets::generate_wallet,
        wallets::import_wallet,
        wallets::recover_wallet,
        wallets::decrypt_key,
        balance::get_wallet_balance,
        contracts::query_contract,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            WalletKeyResponse,
            ImportWalletRequest,
            RecoverWalletRequest,
            RecoverWalletResponse,
            DecryptKeyRequest,
            DecryptKeyResponse,
            BalanceResponse,
            CoinBalance,
            ContractQueryRequest,
            ContractQueryResponse
        )
    ),
    tags(
        (name = "Wallets", description = "Wallet generation, recovery, and key custody"),
        (name = "Contracts", description = "Read-only smart-contract queries"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
