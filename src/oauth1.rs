// ABOUTME: Two-legged OAuth 1.0a request signing for the FatSecret platform API
// ABOUTME: RFC 5849 parameter encoding and HMAC-SHA1 signatures carried as query parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

//! FatSecret's legacy REST endpoint authenticates every request with a
//! two-legged OAuth 1.0a signature: consumer key plus shared secret, no
//! user token. The signature travels in the query string alongside the
//! request parameters.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use ring::hmac;

/// Length of the random alphanumeric nonce attached to each request.
const NONCE_LEN: usize = 32;

/// Signs requests with a consumer key and shared secret.
#[derive(Debug, Clone)]
pub struct OauthSigner {
    consumer_key: String,
    shared_secret: String,
}

impl OauthSigner {
    /// Create a signer for a credential pair.
    #[must_use]
    pub fn new(consumer_key: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            shared_secret: shared_secret.into(),
        }
    }

    /// Sign a request, returning the full query parameter set: the request's
    /// own parameters, the OAuth protocol parameters, and the signature.
    #[must_use]
    pub fn sign(&self, method: &str, url: &str, params: &[(&str, String)]) -> Vec<(String, String)> {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();
        self.sign_at(method, url, params, Utc::now().timestamp(), &nonce)
    }

    /// Sign with an explicit timestamp and nonce.
    ///
    /// The output is fully determined by the inputs, which is what makes the
    /// signing path testable.
    #[must_use]
    pub fn sign_at(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, String)],
        timestamp: i64,
        nonce: &str,
    ) -> Vec<(String, String)> {
        let mut all: Vec<(String, String)> = params
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect();
        all.push(("oauth_consumer_key".to_owned(), self.consumer_key.clone()));
        all.push(("oauth_nonce".to_owned(), nonce.to_owned()));
        all.push(("oauth_signature_method".to_owned(), "HMAC-SHA1".to_owned()));
        all.push(("oauth_timestamp".to_owned(), timestamp.to_string()));
        all.push(("oauth_version".to_owned(), "1.0".to_owned()));

        let signature = self.signature(method, url, &all);
        all.push(("oauth_signature".to_owned(), signature));
        all
    }

    // RFC 5849 §3.4: percent-encode keys and values, sort bytewise by
    // encoded key then value, join into the base string, and HMAC-SHA1 it
    // with `enc(secret)&` (no token secret in the two-legged flow).
    fn signature(&self, method: &str, url: &str, params: &[(String, String)]) -> String {
        let mut encoded: Vec<(String, String)> = params
            .iter()
            .map(|(key, value)| (percent_encode(key), percent_encode(value)))
            .collect();
        encoded.sort();

        let normalized = encoded
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(url),
            percent_encode(&normalized)
        );

        let signing_key = format!("{}&", percent_encode(&self.shared_secret));
        let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, signing_key.as_bytes());
        let tag = hmac::sign(&key, base_string.as_bytes());
        STANDARD.encode(tag.as_ref())
    }
}

// RFC 3986 unreserved set only, as RFC 5849 requires.
fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> OauthSigner {
        OauthSigner::new("consumer", "secret")
    }

    fn signed() -> Vec<(String, String)> {
        signer().sign_at(
            "GET",
            "https://platform.fatsecret.com/rest/server.api",
            &[
                ("method", "foods.search".to_owned()),
                ("search_expression", "clif bar".to_owned()),
            ],
            1_700_000_000,
            "abcdef0123456789",
        )
    }

    fn value_of<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn signed_request_carries_protocol_parameters() {
        let params = signed();
        assert_eq!(value_of(&params, "oauth_consumer_key"), "consumer");
        assert_eq!(value_of(&params, "oauth_signature_method"), "HMAC-SHA1");
        assert_eq!(value_of(&params, "oauth_timestamp"), "1700000000");
        assert_eq!(value_of(&params, "oauth_version"), "1.0");
        assert_eq!(value_of(&params, "method"), "foods.search");
    }

    #[test]
    fn signature_is_deterministic_for_fixed_inputs() {
        assert_eq!(
            value_of(&signed(), "oauth_signature").to_owned(),
            value_of(&signed(), "oauth_signature").to_owned()
        );
    }

    #[test]
    fn signature_depends_on_the_secret() {
        let a = signed();
        let b = OauthSigner::new("consumer", "other-secret").sign_at(
            "GET",
            "https://platform.fatsecret.com/rest/server.api",
            &[
                ("method", "foods.search".to_owned()),
                ("search_expression", "clif bar".to_owned()),
            ],
            1_700_000_000,
            "abcdef0123456789",
        );
        assert_ne!(
            value_of(&a, "oauth_signature"),
            value_of(&b, "oauth_signature")
        );
    }

    #[test]
    fn signature_depends_on_the_parameters() {
        let a = signed();
        let b = signer().sign_at(
            "GET",
            "https://platform.fatsecret.com/rest/server.api",
            &[
                ("method", "foods.search".to_owned()),
                ("search_expression", "granola".to_owned()),
            ],
            1_700_000_000,
            "abcdef0123456789",
        );
        assert_ne!(
            value_of(&a, "oauth_signature"),
            value_of(&b, "oauth_signature")
        );
    }

    #[test]
    fn signature_is_standard_base64_of_a_sha1_tag() {
        let params = signed();
        let decoded = STANDARD.decode(value_of(&params, "oauth_signature")).unwrap();
        assert_eq!(decoded.len(), 20);
    }

    #[test]
    fn encoding_uses_the_unreserved_set() {
        assert_eq!(percent_encode("clif bar"), "clif%20bar");
        assert_eq!(percent_encode("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(percent_encode("50%+"), "50%25%2B");
    }
}
