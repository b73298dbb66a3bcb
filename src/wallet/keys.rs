// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet key generation and recovery.
//!
//! A wallet identity (bech32 address + compressed public key) is derived
//! from one of three inputs: fresh entropy, a caller-supplied private key,
//! or a BIP-39 mnemonic. Derivation is deterministic: the address prefix
//! and the HD path are part of the public contract.

use bech32::{ToBase32, Variant};
use bip32::{DerivationPath, XPrv};
use bip39::{Language, Mnemonic};
use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use rand::RngCore;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// BIP-44 derivation path for Cosmos-SDK chains (coin type 118).
pub const COSMOS_HD_PATH: &str = "m/44'/118'/0'/0/0";

/// Errors from key generation and recovery.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Key generation failed: {0}")]
    Generation(String),

    #[error("Address encoding failed: {0}")]
    AddressEncoding(String),
}

/// Public, non-secret identity of a wallet.
///
/// Both fields are deterministic functions of the private key: the same key
/// always yields the same address and public key, across processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletIdentity {
    /// Bech32 address with the chain's human-readable prefix (e.g. `xion1…`).
    pub address: String,
    /// Compressed secp256k1 public key, hex-encoded (66 characters).
    pub public_key: String,
}

/// Generate a fresh wallet from 32 bytes of CSPRNG entropy.
///
/// Returns the private key as a 64-character hex string together with the
/// derived identity. The key is never stored; it exists only for the
/// duration of the request that asked for it.
pub fn generate(prefix: &str) -> Result<(String, WalletIdentity), KeyError> {
    let mut entropy = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| KeyError::Generation(e.to_string()))?;

    // An entropy draw outside the curve order is possible but vanishingly
    // rare; treat it as a generation failure rather than caller error.
    let signing_key = SigningKey::from_slice(&entropy)
        .map_err(|e| KeyError::Generation(e.to_string()))?;

    let identity = identity_from_key(&signing_key, prefix)?;
    Ok((hex::encode(entropy), identity))
}

/// Derive a wallet identity from a caller-supplied private key.
///
/// The input must be exactly 64 hex characters (32 bytes) and decode to a
/// valid non-zero scalar for secp256k1.
pub fn from_private_key(private_key_hex: &str, prefix: &str) -> Result<WalletIdentity, KeyError> {
    let bytes = hex::decode(private_key_hex)
        .map_err(|_| KeyError::InvalidKey("not a hexadecimal string".to_string()))?;

    if bytes.len() != 32 {
        return Err(KeyError::InvalidKey(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }

    // Rejects zero and values not reduced mod the curve order.
    let signing_key = SigningKey::from_slice(&bytes)
        .map_err(|_| KeyError::InvalidKey("not a valid curve scalar".to_string()))?;

    identity_from_key(&signing_key, prefix)
}

/// Recover a wallet identity from a BIP-39 mnemonic phrase.
///
/// Uses the English word list and an empty passphrase, deriving along
/// [`COSMOS_HD_PATH`] — the same key an equivalent Cosmos wallet would
/// reproduce from the phrase.
pub fn from_mnemonic(phrase: &str, prefix: &str) -> Result<WalletIdentity, KeyError> {
    let signing_key = derive_from_mnemonic(phrase)?;
    identity_from_key(&signing_key, prefix)
}

/// Parse a phrase and derive its signing key along the Cosmos HD path.
fn derive_from_mnemonic(phrase: &str) -> Result<SigningKey, KeyError> {
    let mnemonic = Mnemonic::parse_in(Language::English, phrase)
        .map_err(|e| KeyError::InvalidMnemonic(e.to_string()))?;

    let seed = mnemonic.to_seed("");

    let path: DerivationPath = COSMOS_HD_PATH
        .parse()
        .map_err(|e: bip32::Error| KeyError::Generation(e.to_string()))?;

    let xprv = XPrv::derive_from_path(seed, &path)
        .map_err(|e| KeyError::Generation(e.to_string()))?;

    Ok(xprv.private_key().clone())
}

/// Derive the bech32 address and hex public key for a signing key.
///
/// Cosmos-SDK address derivation: RIPEMD-160 of the SHA-256 of the
/// 33-byte compressed public key, bech32-encoded under the chain prefix.
fn identity_from_key(signing_key: &SigningKey, prefix: &str) -> Result<WalletIdentity, KeyError> {
    let verifying_key = signing_key.verifying_key();
    let compressed = verifying_key.to_encoded_point(true);
    let compressed_bytes = compressed.as_bytes();

    let sha = Sha256::digest(compressed_bytes);
    let hash = Ripemd160::digest(sha);

    let address = bech32::encode(prefix, hash.as_slice().to_base32(), Variant::Bech32)
        .map_err(|e| KeyError::AddressEncoding(e.to_string()))?;

    Ok(WalletIdentity {
        address,
        public_key: hex::encode(compressed_bytes),
    })
}

/// Validate that a string is a bech32 address under the expected prefix.
///
/// Used by the proxy endpoints before an address is forwarded to the chain.
pub fn validate_address(address: &str, prefix: &str) -> Result<(), KeyError> {
    let (hrp, data, _variant) = bech32::decode(address)
        .map_err(|e| KeyError::InvalidKey(format!("invalid bech32 address: {e}")))?;

    if hrp != prefix {
        return Err(KeyError::InvalidKey(format!(
            "expected address prefix '{prefix}', got '{hrp}'"
        )));
    }

    use bech32::FromBase32;
    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| KeyError::InvalidKey(format!("invalid bech32 data: {e}")))?;

    // 20 bytes for accounts, 32 for contract (module) addresses.
    if bytes.len() != 20 && bytes.len() != 32 {
        return Err(KeyError::InvalidKey(format!(
            "unexpected address payload length {}",
            bytes.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "xion";

    #[test]
    fn generate_produces_valid_identity() {
        let (private_key, identity) = generate(PREFIX).unwrap();

        assert_eq!(private_key.len(), 64);
        assert!(private_key.chars().all(|c| c.is_ascii_hexdigit()));

        assert!(identity.address.starts_with("xion1"));
        assert_eq!(identity.public_key.len(), 66);
        // Compressed SEC1 points start with 02 or 03.
        assert!(identity.public_key.starts_with("02") || identity.public_key.starts_with("03"));
    }

    #[test]
    fn generate_is_consistent_with_from_private_key() {
        let (private_key, identity) = generate(PREFIX).unwrap();
        let rederived = from_private_key(&private_key, PREFIX).unwrap();
        assert_eq!(rederived, identity);
    }

    #[test]
    fn generate_produces_unique_addresses() {
        let mut addresses = std::collections::HashSet::new();
        for _ in 0..10 {
            let (_, identity) = generate(PREFIX).unwrap();
            assert!(addresses.insert(identity.address), "Generated duplicate address");
        }
    }

    #[test]
    fn from_private_key_is_deterministic() {
        let key = "4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";
        let a = from_private_key(key, PREFIX).unwrap();
        let b = from_private_key(key, PREFIX).unwrap();
        assert_eq!(a, b);
        assert!(a.address.starts_with("xion1"));
    }

    #[test]
    fn from_private_key_rejects_zero_scalar() {
        let zero = "00".repeat(32);
        let err = from_private_key(&zero, PREFIX).unwrap_err();
        assert!(matches!(err, KeyError::InvalidKey(_)));
    }

    #[test]
    fn from_private_key_rejects_overflowing_scalar() {
        // Larger than the secp256k1 group order.
        let huge = "ff".repeat(32);
        let err = from_private_key(&huge, PREFIX).unwrap_err();
        assert!(matches!(err, KeyError::InvalidKey(_)));
    }

    #[test]
    fn from_private_key_rejects_bad_hex_and_length() {
        assert!(matches!(
            from_private_key("not-hex", PREFIX),
            Err(KeyError::InvalidKey(_))
        ));
        assert!(matches!(
            from_private_key("abcd", PREFIX),
            Err(KeyError::InvalidKey(_))
        ));
        // 33 bytes.
        assert!(matches!(
            from_private_key(&"ab".repeat(33), PREFIX),
            Err(KeyError::InvalidKey(_))
        ));
    }

    #[test]
    fn from_mnemonic_is_deterministic() {
        let phrase = "leader monkey parrot ring guide accident before fence cannon height naive bean";
        let a = from_mnemonic(phrase, PREFIX).unwrap();
        let b = from_mnemonic(phrase, PREFIX).unwrap();
        assert_eq!(a, b);
        assert!(a.address.starts_with("xion1"));
    }

    #[test]
    fn from_mnemonic_matches_raw_key_derivation() {
        let phrase = "leader monkey parrot ring guide accident before fence cannon height naive bean";
        let signing_key = derive_from_mnemonic(phrase).unwrap();
        let via_mnemonic = from_mnemonic(phrase, PREFIX).unwrap();
        let via_key =
            from_private_key(&hex::encode(signing_key.to_bytes()), PREFIX).unwrap();
        assert_eq!(via_mnemonic, via_key);
    }

    #[test]
    fn different_mnemonics_produce_different_identities() {
        let a = from_mnemonic(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
            PREFIX,
        )
        .unwrap();
        let b = from_mnemonic(
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            PREFIX,
        )
        .unwrap();
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn from_mnemonic_rejects_corrupted_checksum() {
        // Valid words, final (checksum) word swapped.
        let err = from_mnemonic(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon",
            PREFIX,
        )
        .unwrap_err();
        assert!(matches!(err, KeyError::InvalidMnemonic(_)));
    }

    #[test]
    fn from_mnemonic_rejects_unknown_word() {
        let err = from_mnemonic("definitely not a wordlist phrase at all", PREFIX).unwrap_err();
        assert!(matches!(err, KeyError::InvalidMnemonic(_)));
    }

    #[test]
    fn validate_address_accepts_generated_address() {
        let (_, identity) = generate(PREFIX).unwrap();
        validate_address(&identity.address, PREFIX).unwrap();
    }

    #[test]
    fn validate_address_rejects_wrong_prefix() {
        let (_, identity) = generate("cosmos").unwrap();
        assert!(validate_address(&identity.address, PREFIX).is_err());
    }

    #[test]
    fn validate_address_rejects_garbage() {
        assert!(validate_address("xion1notanaddress", PREFIX).is_err());
        assert!(validate_address("", PREFIX).is_err());
    }
}
