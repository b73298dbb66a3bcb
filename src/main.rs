// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use xion_custody_server::{
    api::router,
    chain::ChainClient,
    config::{self, Settings, LOG_FORMAT_ENV},
    state::AppState,
    wallet::SecretCipher,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let settings = Settings::from_env();

    // The cipher key is process-wide state: when it comes from the
    // environment, ciphertexts survive restarts; when generated here,
    // they are decryptable only within this process lifetime.
    let cipher = match config::encryption_key_from_env() {
        Ok(Some(key)) => SecretCipher::new(key),
        Ok(None) => {
            tracing::warn!(
                "No {} configured; using a random per-process key. \
                 Encrypted keys will not be decryptable after a restart.",
                config::ENCRYPTION_KEY_ENV
            );
            SecretCipher::with_random_key().expect("Failed to draw cipher key from OS entropy")
        }
        Err(e) => panic!("Invalid encryption key configuration: {e}"),
    };

    let chain = ChainClient::with_rest_url(&settings.rest_url, settings.network.clone())
        .expect("Failed to build chain client");

    tracing::info!(
        network = settings.network.name,
        rest_url = %settings.rest_url,
        address_prefix = %settings.address_prefix,
        "Chain proxy configured"
    );

    let state = AppState::new(cipher, chain, settings);
    let app = router(state);

    // Parse bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!("Wallet custody server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` controls the filter; `LOG_FORMAT=json` switches to
/// structured output for log aggregation.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Resolve when the process receives ctrl-c, letting in-flight requests
/// drain before the server exits.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
    }
}
