// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Key custody core: wallet derivation and private-key encryption.
//!
//! This module is the only part of the service that touches secret
//! material. It performs no I/O beyond consuming OS entropy and holds no
//! state other than the cipher's in-memory key.

pub mod cipher;
pub mod keys;

pub use cipher::{CipherError, EncryptedSecret, SecretCipher};
pub use keys::{KeyError, WalletIdentity};
