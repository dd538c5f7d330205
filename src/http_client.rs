// ABOUTME: Shared HTTP client with connection pooling for API calls
// ABOUTME: Singleton with fixed timeouts, created on first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get the shared HTTP client.
///
/// The client pools connections across sequential requests of a harvest run.
/// Cloning it is cheap; provider instances hold their own handle.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
