// ABOUTME: FatSecret platform API provider: signed GETs against the REST endpoint
// ABOUTME: Decodes the search envelope (stringly numbers, one-or-many lists) and detail bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

//! All operations go through the platform's single REST endpoint,
//! distinguished by the `method` parameter and signed per [`crate::oauth1`].
//!
//! The envelope needs tolerance in two places: the API reports counts as
//! JSON strings (`"total_results": "123"`), and it collapses single-element
//! lists to bare objects — a one-item page carries `"food": {...}` where a
//! multi-item page carries `"food": [...]`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::config::FatSecretConfig;
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client;
use crate::models::schema::PAGE_SIZE;
use crate::oauth1::OauthSigner;
use crate::providers::{FoodDetail, FoodProvider, FoodSummary, SearchPage};

const SEARCH_ENDPOINT: &str = "foods.search";
const DETAIL_ENDPOINT: &str = "food.get";

/// Provider for the FatSecret platform API.
pub struct FatSecretProvider {
    client: Client,
    config: FatSecretConfig,
    signer: OauthSigner,
}

impl FatSecretProvider {
    /// Create a provider for a configuration.
    #[must_use]
    pub fn new(config: FatSecretConfig) -> Self {
        let signer = OauthSigner::new(config.consumer_key.clone(), config.shared_secret.clone());
        Self {
            client: http_client::shared_client().clone(),
            config,
            signer,
        }
    }

    /// Create a provider from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] when a credential variable is unset.
    pub fn from_env() -> ProviderResult<Self> {
        Ok(Self::new(FatSecretConfig::from_env()?))
    }

    async fn get_signed(
        &self,
        endpoint: &'static str,
        params: &[(&str, String)],
    ) -> ProviderResult<String> {
        let signed = self.signer.sign("GET", &self.config.base_url, params);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&signed)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| ProviderError::Transport { endpoint, source })?;

        let body = response
            .text()
            .await
            .map_err(|source| ProviderError::Transport { endpoint, source })?;

        debug!(endpoint, bytes = body.len(), "api response received");
        Ok(body)
    }
}

#[async_trait]
impl FoodProvider for FatSecretProvider {
    fn name(&self) -> &'static str {
        "fatsecret"
    }

    async fn search(&self, term: &str, page: u64) -> ProviderResult<SearchPage> {
        let params = [
            ("method", SEARCH_ENDPOINT.to_owned()),
            ("search_expression", term.to_owned()),
            ("max_results", PAGE_SIZE.to_string()),
            ("page_number", page.to_string()),
            ("format", "json".to_owned()),
        ];

        let body = self.get_signed(SEARCH_ENDPOINT, &params).await?;
        decode_search(&body)
    }

    async fn detail(&self, food_id: &str) -> ProviderResult<Option<FoodDetail>> {
        let params = [
            ("method", DETAIL_ENDPOINT.to_owned()),
            ("food_id", food_id.to_owned()),
            ("format", "json".to_owned()),
        ];

        let body = self.get_signed(DETAIL_ENDPOINT, &params).await?;
        Ok(decode_detail(&body))
    }
}

// ── Envelope decoding ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    foods: SearchFoods,
}

#[derive(Debug, Deserialize)]
struct SearchFoods {
    #[serde(default, deserialize_with = "one_or_many")]
    food: Vec<RawFoodSummary>,
    #[serde(deserialize_with = "stringly_u64")]
    page_number: u64,
    #[serde(deserialize_with = "stringly_u64")]
    total_results: u64,
}

#[derive(Debug, Deserialize)]
struct RawFoodSummary {
    #[serde(deserialize_with = "stringly_string")]
    food_id: String,
    #[serde(default)]
    food_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: RawApiError,
}

#[derive(Debug, Deserialize)]
struct RawApiError {
    #[serde(deserialize_with = "stringly_u64")]
    code: u64,
    message: String,
}

fn decode_search(body: &str) -> ProviderResult<SearchPage> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(ProviderError::Api {
            code: envelope.error.code,
            message: envelope.error.message,
        });
    }

    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|err| ProviderError::Format {
            endpoint: SEARCH_ENDPOINT,
            reason: err.to_string(),
        })?;

    let foods = envelope
        .foods
        .food
        .into_iter()
        .map(|raw| FoodSummary {
            food_id: raw.food_id,
            food_name: raw.food_name,
        })
        .collect();

    Ok(SearchPage {
        foods,
        page_number: envelope.foods.page_number,
        total_results: envelope.foods.total_results,
    })
}

// Detail-side format problems downgrade to an absent result; the harvest
// loop logs the identifier and emits a placeholder row.
fn decode_detail(body: &str) -> Option<FoodDetail> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "detail body is not valid JSON");
            return None;
        }
    };

    if let Some(error) = value.get("error") {
        debug!(error = %error, "detail response carries an error envelope");
        return None;
    }

    value
        .get("food")
        .cloned()
        .and_then(FoodDetail::from_food_value)
}

// The API reports numbers as JSON strings; accept either form.
fn stringly_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(number) => Ok(number),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn stringly_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

// A one-item page carries a bare object where a multi-item page carries an
// array.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Many(items) => items,
        Raw::One(item) => vec![item],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_multi_item_page_with_stringly_numbers() {
        let body = r#"{
            "foods": {
                "food": [
                    {"food_id": "1234", "food_name": "Clif Bar Chocolate"},
                    {"food_id": "5678", "food_name": "Clif Bar Crunch"}
                ],
                "max_results": "50",
                "page_number": "0",
                "total_results": "120"
            }
        }"#;

        let page = decode_search(body).unwrap();
        assert_eq!(page.foods.len(), 2);
        assert_eq!(page.foods[0].food_id, "1234");
        assert_eq!(page.foods[1].food_name.as_deref(), Some("Clif Bar Crunch"));
        assert_eq!(page.page_number, 0);
        assert_eq!(page.total_results, 120);
        assert!(page.has_next_page());
    }

    #[test]
    fn decodes_a_single_item_page_as_a_bare_object() {
        let body = r#"{
            "foods": {
                "food": {"food_id": 42, "food_name": "Lone Bar"},
                "page_number": 0,
                "total_results": 1
            }
        }"#;

        let page = decode_search(body).unwrap();
        assert_eq!(page.foods.len(), 1);
        assert_eq!(page.foods[0].food_id, "42");
        assert!(!page.has_next_page());
    }

    #[test]
    fn decodes_an_empty_page_without_a_food_key() {
        let body = r#"{"foods": {"page_number": "0", "total_results": "0"}}"#;

        let page = decode_search(body).unwrap();
        assert!(page.foods.is_empty());
        assert!(!page.has_next_page());
    }

    #[test]
    fn search_error_envelope_becomes_an_api_error() {
        let body = r#"{"error": {"code": 8, "message": "Invalid signature"}}"#;

        let err = decode_search(body).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Api { code: 8, ref message } if message == "Invalid signature"
        ));
    }

    #[test]
    fn malformed_search_body_is_a_format_error() {
        let err = decode_search("not json at all").unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Format {
                endpoint: SEARCH_ENDPOINT,
                ..
            }
        ));
    }

    #[test]
    fn detail_with_a_food_object_decodes() {
        let body = r#"{
            "food": {
                "food_id": "1234",
                "food_name": "Clif Bar Chocolate",
                "servings": {"serving": {"calories": "250"}}
            }
        }"#;

        let detail = decode_detail(body).unwrap();
        assert!(detail.first_serving().is_some());
    }

    #[test]
    fn detail_without_a_food_object_is_absent() {
        assert!(decode_detail(r#"{"error": {"code": 106, "message": "unknown id"}}"#).is_none());
        assert!(decode_detail(r#"{"something_else": 1}"#).is_none());
        assert!(decode_detail("<html>gateway timeout</html>").is_none());
    }
}
