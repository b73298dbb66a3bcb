// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Symmetric protection of private keys in transit.
//!
//! AES-256-CBC with PKCS#7 padding and a fresh random IV per encryption.
//! The IV is not secret and travels beside the ciphertext; the 256-bit key
//! is injected at construction and lives only in process memory, so a
//! ciphertext is recoverable only by the cipher instance (process lifetime)
//! that produced it unless the key is supplied from configuration.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES block size and IV length in bytes.
pub const IV_LENGTH: usize = 16;

/// Errors from the secret cipher.
///
/// Display strings are deliberately generic: distinguishable padding
/// failures would hand an attacker a padding oracle.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("Encryption failed")]
    Encryption,

    #[error("Decryption failed")]
    Decryption,
}

/// A private key encrypted for transport, with the IV needed to reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedSecret {
    /// Hex-encoded AES-256-CBC ciphertext.
    pub ciphertext: String,
    /// Hex-encoded 16-byte initialization vector.
    pub iv: String,
}

/// Symmetric cipher over a process-lifetime 256-bit key.
///
/// The key is immutable after construction, so concurrent `encrypt` and
/// `decrypt` calls share it without locking.
pub struct SecretCipher {
    key: [u8; 32],
}

impl SecretCipher {
    /// Create a cipher owning the given 256-bit key.
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Create a cipher with a random key drawn from the OS CSPRNG.
    ///
    /// Ciphertexts produced under a random key cannot be decrypted after
    /// the process exits.
    pub fn with_random_key() -> Result<Self, CipherError> {
        let mut key = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut key)
            .map_err(|_| CipherError::Encryption)?;
        Ok(Self::new(key))
    }

    /// Encrypt a plaintext string under a fresh random IV.
    ///
    /// The IV is never reused: under CBC, a repeated IV leaks plaintext
    /// equality across messages encrypted with the same key.
    pub fn encrypt(&self, plaintext: &str) -> Result<EncryptedSecret, CipherError> {
        let mut iv = [0u8; IV_LENGTH];
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|_| CipherError::Encryption)?;

        let ciphertext = Aes256CbcEnc::new(&self.key.into(), &iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        Ok(EncryptedSecret {
            ciphertext: hex::encode(ciphertext),
            iv: hex::encode(iv),
        })
    }

    /// Decrypt hex-encoded ciphertext with the supplied hex-encoded IV.
    ///
    /// Fails when the IV is not exactly 16 bytes, the ciphertext is empty
    /// or not block-aligned, the padding is invalid after decryption (wrong
    /// key or corrupted data), or the plaintext is not valid UTF-8. All
    /// failures collapse into the same [`CipherError::Decryption`].
    pub fn decrypt(&self, ciphertext_hex: &str, iv_hex: &str) -> Result<String, CipherError> {
        let iv_bytes = hex::decode(iv_hex).map_err(|_| CipherError::Decryption)?;
        let iv: [u8; IV_LENGTH] = iv_bytes
            .try_into()
            .map_err(|_| CipherError::Decryption)?;

        let ciphertext = hex::decode(ciphertext_hex).map_err(|_| CipherError::Decryption)?;
        if ciphertext.is_empty() || ciphertext.len() % IV_LENGTH != 0 {
            return Err(CipherError::Decryption);
        }

        let plaintext = Aes256CbcDec::new(&self.key.into(), &iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| CipherError::Decryption)?;

        String::from_utf8(plaintext).map_err(|_| CipherError::Decryption)
    }
}
