// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet key custody endpoints.
//!
//! These endpoints generate, import, recover, and decrypt wallet keys.
//! The service is stateless: nothing is persisted, and plaintext private
//! keys exist only for the duration of the request that asked for them.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiError,
    models::{
        DecryptKeyRequest, DecryptKeyResponse, ImportWalletRequest, RecoverWalletRequest,
        RecoverWalletResponse, WalletKeyResponse,
    },
    state::AppState,
    wallet::keys,
    wallet::KeyError,
};

/// Generate a new wallet.
///
/// Draws fresh entropy, derives the wallet identity, and returns the
/// private key only in encrypted form alongside the IV needed to decrypt
/// it through the decrypt endpoint.
#[utoipa::path(
    post,
    path = "/v1/wallets",
    tag = "Wallets",
    responses(
        (status = 201, description = "Wallet generated successfully", body = WalletKeyResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn generate_wallet(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<WalletKeyResponse>), ApiError> {
    let (private_key, identity) = keys::generate(&state.settings.address_prefix).map_err(|e| {
        tracing::error!(error = %e, "Wallet generation failed");
        ApiError::internal("Failed to generate wallet")
    })?;

    let encrypted = state.cipher.encrypt(&private_key).map_err(|e| {
        tracing::error!(error = %e, "Private key encryption failed");
        ApiError::internal("Failed to generate wallet")
    })?;

    tracing::info!(address = %identity.address, "Generated wallet");

    Ok((
        StatusCode::CREATED,
        Json(WalletKeyResponse {
            address: identity.address,
            public_key: identity.public_key,
            encrypted_private_key: encrypted.ciphertext,
            iv: encrypted.iv,
        }),
    ))
}

/// Derive a wallet from a caller-supplied private key.
///
/// Returns the same shape as generation: the identity plus the key
/// re-encrypted under the service's cipher.
#[utoipa::path(
    post,
    path = "/v1/wallets/import",
    tag = "Wallets",
    request_body = ImportWalletRequest,
    responses(
        (status = 200, description = "Wallet derived successfully", body = WalletKeyResponse),
        (status = 400, description = "Missing or invalid private key")
    )
)]
pub async fn import_wallet(
    State(state): State<AppState>,
    Json(request): Json<ImportWalletRequest>,
) -> Result<Json<WalletKeyResponse>, ApiError> {
    let private_key = request
        .private_key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::bad_request("Private key is required"))?;

    let identity = keys::from_private_key(&private_key, &state.settings.address_prefix)
        .map_err(|e| match e {
            KeyError::InvalidKey(_) => ApiError::bad_request(e.to_string()),
            _ => {
                tracing::error!(error = %e, "Wallet import failed");
                ApiError::internal("Failed to derive wallet")
            }
        })?;

    let encrypted = state.cipher.encrypt(&private_key).map_err(|e| {
        tracing::error!(error = %e, "Private key encryption failed");
        ApiError::internal("Failed to derive wallet")
    })?;

    Ok(Json(WalletKeyResponse {
        address: identity.address,
        public_key: identity.public_key,
        encrypted_private_key: encrypted.ciphertext,
        iv: encrypted.iv,
    }))
}

/// Recover a wallet from a mnemonic phrase.
///
/// Only the address is returned; recovered keys are not re-encrypted for
/// return.
#[utoipa::path(
    post,
    path = "/v1/wallets/recover",
    tag = "Wallets",
    request_body = RecoverWalletRequest,
    responses(
        (status = 200, description = "Wallet recovered successfully", body = RecoverWalletResponse),
        (status = 400, description = "Missing or invalid mnemonic")
    )
)]
pub async fn recover_wallet(
    State(state): State<AppState>,
    Json(request): Json<RecoverWalletRequest>,
) -> Result<Json<RecoverWalletResponse>, ApiError> {
    let mnemonic = request
        .mnemonic
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Mnemonic is required"))?;

    let identity = keys::from_mnemonic(&mnemonic, &state.settings.address_prefix).map_err(|e| {
        match e {
            KeyError::InvalidMnemonic(_) => ApiError::bad_request(e.to_string()),
            _ => {
                tracing::error!(error = %e, "Wallet recovery failed");
                ApiError::internal("Failed to recover wallet")
            }
        }
    })?;

    Ok(Json(RecoverWalletResponse {
        address: identity.address,
    }))
}

/// Decrypt a previously encrypted private key.
///
/// The failure message stays generic on purpose: distinguishable padding
/// errors would expose a padding oracle on this endpoint.
#[utoipa::path(
    post,
    path = "/v1/wallets/decrypt",
    tag = "Wallets",
    request_body = DecryptKeyRequest,
    responses(
        (status = 200, description = "Private key decrypted successfully", body = DecryptKeyResponse),
        (status = 400, description = "Missing encrypted key or IV"),
        (status = 422, description = "Decryption failed")
    )
)]
pub async fn decrypt_key(
    State(state): State<AppState>,
    Json(request): Json<DecryptKeyRequest>,
) -> Result<Json<DecryptKeyResponse>, ApiError> {
    let (encrypted_key, iv) = match (request.encrypted_key, request.iv) {
        (Some(key), Some(iv)) if !key.is_empty() && !iv.is_empty() => (key, iv),
        _ => return Err(ApiError::bad_request("Encrypted key and IV are required")),
    };

    let private_key = state
        .cipher
        .decrypt(&encrypted_key, &iv)
        .map_err(|_| ApiError::unprocessable("Failed to decrypt private key"))?;

    Ok(Json(DecryptKeyResponse { private_key }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generate_wallet_returns_encrypted_key_material() {
        let state = AppState::default();

        let (status, Json(response)) = generate_wallet(State(state.clone())).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert!(response.address.starts_with("xion1"));
        assert_eq!(response.public_key.len(), 66);
        assert_eq!(response.iv.len(), 32);

        // The returned ciphertext must decrypt back to a 64-hex-char key.
        let private_key = state
            .cipher
            .decrypt(&response.encrypted_private_key, &response.iv)
            .unwrap();
        assert_eq!(private_key.len(), 64);
        assert!(private_key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn import_wallet_requires_private_key() {
        let state = AppState::default();

        let err = import_wallet(
            State(state),
            Json(ImportWalletRequest { private_key: None }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Private key is required");
    }

    #[tokio::test]
    async fn import_wallet_is_deterministic() {
        let state = AppState::default();
        let key = "4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";

        let Json(a) = import_wallet(
            State(state.clone()),
            Json(ImportWalletRequest {
                private_key: Some(key.to_string()),
            }),
        )
        .await
        .unwrap();

        let Json(b) = import_wallet(
            State(state),
            Json(ImportWalletRequest {
                private_key: Some(key.to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(a.address, b.address);
        assert_eq!(a.public_key, b.public_key);
        // Fresh IV per call: the ciphertexts must differ even for the
        // same underlying key.
        assert_ne!(a.iv, b.iv);
    }

    #[tokio::test]
    async fn import_wallet_rejects_zero_key() {
        let state = AppState::default();

        let err = import_wallet(
            State(state),
            Json(ImportWalletRequest {
                private_key: Some("00".repeat(32)),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn recover_wallet_requires_mnemonic() {
        let state = AppState::default();

        let err = recover_wallet(
            State(state),
            Json(RecoverWalletRequest { mnemonic: None }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Mnemonic is required");
    }

    #[tokio::test]
    async fn recover_wallet_rejects_bad_checksum() {
        let state = AppState::default();

        let err = recover_wallet(
            State(state),
            Json(RecoverWalletRequest {
                mnemonic: Some(
                    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon"
                        .to_string(),
                ),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn recover_wallet_returns_address_only() {
        let state = AppState::default();

        let Json(response) = recover_wallet(
            State(state),
            Json(RecoverWalletRequest {
                mnemonic: Some(
                    "leader monkey parrot ring guide accident before fence cannon height naive bean"
                        .to_string(),
                ),
            }),
        )
        .await
        .unwrap();

        assert!(response.address.starts_with("xion1"));
    }

    #[tokio::test]
    async fn decrypt_key_requires_both_fields() {
        let state = AppState::default();

        let err = decrypt_key(
            State(state.clone()),
            Json(DecryptKeyRequest {
                encrypted_key: Some("deadbeef".to_string()),
                iv: None,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Encrypted key and IV are required");
    }

    #[tokio::test]
    async fn decrypt_key_roundtrips_generated_wallet() {
        let state = AppState::default();

        let (_, Json(wallet)) = generate_wallet(State(state.clone())).await.unwrap();

        let Json(decrypted) = decrypt_key(
            State(state.clone()),
            Json(DecryptKeyRequest {
                encrypted_key: Some(wallet.encrypted_private_key),
                iv: Some(wallet.iv),
            }),
        )
        .await
        .unwrap();

        // The decrypted key must re-derive the same address.
        let identity =
            keys::from_private_key(&decrypted.private_key, &state.settings.address_prefix).unwrap();
        assert_eq!(identity.address, wallet.address);
    }

    #[tokio::test]
    async fn decrypt_key_rejects_short_iv_with_422() {
        let state = AppState::default();

        let (_, Json(wallet)) = generate_wallet(State(state.clone())).await.unwrap();

        let err = decrypt_key(
            State(state),
            Json(DecryptKeyRequest {
                encrypted_key: Some(wallet.encrypted_private_key),
                // 8 hex chars instead of 32.
                iv: Some(wallet.iv[..8].to_string()),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "Failed to decrypt private key");
    }
}
