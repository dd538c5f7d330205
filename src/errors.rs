// ABOUTME: Error taxonomy for food-database provider operations
// ABOUTME: Transport failures are always fatal; format failures downgrade per-item on detail lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use thiserror::Error;

/// Errors raised while talking to the food-database API.
///
/// `Transport` aborts the run wherever it occurs. `Format` is fatal when a
/// search envelope cannot be decoded; on detail lookups the provider
/// downgrades malformed bodies to an absent result instead of raising, so
/// `Format` never surfaces from that path.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or HTTP-level failure issuing a request
    #[error("{endpoint} request failed")]
    Transport {
        /// API operation that failed
        endpoint: &'static str,
        /// Underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// Response body does not match the expected envelope shape
    #[error("unexpected {endpoint} response shape: {reason}")]
    Format {
        /// API operation whose response was malformed
        endpoint: &'static str,
        /// What was wrong with the body
        reason: String,
    },

    /// Error envelope reported by the provider itself
    #[error("provider error {code}: {message}")]
    Api {
        /// Provider-assigned error code
        code: u64,
        /// Provider-supplied error message
        message: String,
    },

    /// Required configuration is missing
    #[error("missing configuration: {key}")]
    Config {
        /// Environment variable that was not set
        key: &'static str,
    },
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
