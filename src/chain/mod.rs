// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain integration module for Xion (Cosmos SDK).
//!
//! This module provides functionality for:
//! - Querying bank balances over the chain's LCD REST API
//! - Read-only CosmWasm smart-contract queries
//!
//! It never signs or broadcasts transactions; the custody core upstream of
//! it handles keys, and everything here is plain HTTP against public
//! query endpoints.

pub mod client;
pub mod types;

pub use client::{ChainClient, ChainClientError};
pub use types::*;
