// ABOUTME: FatSecret credential and endpoint configuration
// ABOUTME: Environment-driven with typed errors for missing credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use std::env;

use crate::errors::{ProviderError, ProviderResult};

/// Environment variable holding the OAuth consumer key
pub const ENV_CONSUMER_KEY: &str = "FATSECRET_CONSUMER_KEY";
/// Environment variable holding the OAuth shared secret
pub const ENV_SHARED_SECRET: &str = "FATSECRET_SHARED_SECRET";
/// Environment variable overriding the API base URL
pub const ENV_API_BASE_URL: &str = "FATSECRET_API_BASE_URL";

/// Default REST endpoint of the FatSecret platform API
pub const DEFAULT_API_BASE_URL: &str = "https://platform.fatsecret.com/rest/server.api";

/// Configuration for the FatSecret platform API.
#[derive(Debug, Clone)]
pub struct FatSecretConfig {
    /// OAuth consumer key
    pub consumer_key: String,
    /// OAuth shared secret
    pub shared_secret: String,
    /// REST endpoint all operations are issued against
    pub base_url: String,
}

impl FatSecretConfig {
    /// Create a configuration with explicit credentials and the default endpoint.
    #[must_use]
    pub fn new(consumer_key: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            shared_secret: shared_secret.into(),
            base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Credentials are required; the endpoint falls back to the platform
    /// default when `FATSECRET_API_BASE_URL` is not set.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] when a credential variable is unset.
    pub fn from_env() -> ProviderResult<Self> {
        let consumer_key = env::var(ENV_CONSUMER_KEY)
            .map_err(|_| ProviderError::Config {
                key: ENV_CONSUMER_KEY,
            })?;
        let shared_secret = env::var(ENV_SHARED_SECRET)
            .map_err(|_| ProviderError::Config {
                key: ENV_SHARED_SECRET,
            })?;
        let base_url =
            env::var(ENV_API_BASE_URL).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());

        Ok(Self {
            consumer_key,
            shared_secret,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn from_env_reads_credentials() {
        env::set_var(ENV_CONSUMER_KEY, "key");
        env::set_var(ENV_SHARED_SECRET, "secret");
        env::remove_var(ENV_API_BASE_URL);

        let config = FatSecretConfig::from_env().unwrap();
        assert_eq!(config.consumer_key, "key");
        assert_eq!(config.shared_secret, "secret");
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);

        env::remove_var(ENV_CONSUMER_KEY);
        env::remove_var(ENV_SHARED_SECRET);
    }

    #[test]
    #[serial]
    fn from_env_requires_consumer_key() {
        env::remove_var(ENV_CONSUMER_KEY);
        env::remove_var(ENV_SHARED_SECRET);

        let err = FatSecretConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Config {
                key: ENV_CONSUMER_KEY
            }
        ));
    }

    #[test]
    #[serial]
    fn from_env_honors_endpoint_override() {
        env::set_var(ENV_CONSUMER_KEY, "key");
        env::set_var(ENV_SHARED_SECRET, "secret");
        env::set_var(ENV_API_BASE_URL, "http://localhost:8080/rest");

        let config = FatSecretConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/rest");

        env::remove_var(ENV_CONSUMER_KEY);
        env::remove_var(ENV_SHARED_SECRET);
        env::remove_var(ENV_API_BASE_URL);
    }
}
