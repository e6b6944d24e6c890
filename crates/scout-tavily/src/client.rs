// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Tavily search and extract API.
//!
//! Provides [`TavilyClient`] which handles request construction, bearer-token
//! authentication, and bounded retry. Rate-limited responses (429) are
//! absorbed with a fixed delay; other failures are retried and the last one
//! propagates. The two exhaustion paths stay distinct in [`FetchOutcome`].

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use scout_config::TavilyConfig;
use scout_core::ScoutError;
use tracing::{debug, warn};

/// Default search endpoint URL.
pub const DEFAULT_SEARCH_URL: &str = "https://api.tavily.com/search";

/// Default extract endpoint URL.
pub const DEFAULT_EXTRACT_URL: &str = "https://api.tavily.com/extract";

/// Default total attempts per logical request (initial attempt plus retries).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default fixed delay after a rate-limited response, in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 5000;

/// Terminal outcome of one logical fetch, after the retry budget.
///
/// The two failure arms are deliberately distinct: the caller converts
/// `RateLimitExhausted` into a sentinel failure string returned as a normal
/// value, while `TransportFailure` carries the last underlying error and is
/// re-raised. Unifying them would silently change observed behavior.
#[derive(Debug)]
pub enum FetchOutcome {
    /// A 2xx response; the raw body text, returned verbatim.
    Success(String),
    /// Every attempt ended rate-limited (429).
    RateLimitExhausted,
    /// The final attempt failed with a transport or HTTP error.
    TransportFailure(ScoutError),
}

/// HTTP client for Tavily API communication.
///
/// Manages authentication headers, connection pooling, and the retry loop
/// shared by the search and extract operations.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    client: reqwest::Client,
    search_url: String,
    extract_url: String,
    max_attempts: u32,
    retry_delay: Duration,
}

impl TavilyClient {
    /// Creates a client authenticating with the given API key.
    pub fn new(api_key: &str) -> Result<Self, ScoutError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {api_key}");
        headers.insert(
            "authorization",
            HeaderValue::from_str(&bearer).map_err(|e| {
                ScoutError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ScoutError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            extract_url: DEFAULT_EXTRACT_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        })
    }

    /// Creates a client from the `[tavily]` config section.
    ///
    /// Fails with a configuration error when no API key is set.
    pub fn from_config(config: &TavilyConfig) -> Result<Self, ScoutError> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            ScoutError::Config(
                "tavily.api_key is not set (set SCOUT_TAVILY_API_KEY or [tavily] api_key)"
                    .to_string(),
            )
        })?;
        Ok(Self::new(api_key)?
            .with_search_url(config.search_url.clone())
            .with_extract_url(config.extract_url.clone())
            .with_max_attempts(config.max_attempts)
            .with_retry_delay(Duration::from_millis(config.retry_delay_ms)))
    }

    /// Overrides the search endpoint URL.
    pub fn with_search_url(mut self, url: String) -> Self {
        self.search_url = url;
        self
    }

    /// Overrides the extract endpoint URL.
    pub fn with_extract_url(mut self, url: String) -> Self {
        self.extract_url = url;
        self
    }

    /// Overrides the total attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Overrides the fixed rate-limit delay.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Searches the internet for the given query string.
    pub async fn search(&self, query: &str) -> FetchOutcome {
        debug!(query, "dispatching search request");
        let body = serde_json::json!({ "query": query });
        self.fetch(&self.search_url, &body, "search").await
    }

    /// Extracts the contents of the given URLs.
    pub async fn extract(&self, urls: &[String]) -> FetchOutcome {
        debug!(?urls, "dispatching extract request");
        let body = serde_json::json!({ "urls": urls });
        self.fetch(&self.extract_url, &body, "read website").await
    }

    /// Posts `body` to `url`, retrying up to the attempt cap.
    ///
    /// Per attempt: 429 waits the fixed delay and consumes the attempt;
    /// another non-2xx is a recoverable error that propagates only from the
    /// final attempt; a 2xx returns the raw body immediately. Falling out of
    /// the loop means every attempt was rate-limited. A failure while
    /// reading a 2xx body is treated as a recoverable transport error and
    /// consumes an attempt like any other, rather than ending the loop.
    async fn fetch(&self, url: &str, body: &serde_json::Value, action: &str) -> FetchOutcome {
        for attempt in 0..self.max_attempts {
            let last_attempt = attempt + 1 >= self.max_attempts;

            let response = match self.client.post(url).json(body).send().await {
                Ok(response) => response,
                Err(e) => {
                    let err = ScoutError::Provider {
                        message: format!("Failed to {action}: {e}"),
                        source: Some(Box::new(e)),
                    };
                    if last_attempt {
                        return FetchOutcome::TransportFailure(err);
                    }
                    warn!(attempt, %err, "request failed, retrying");
                    continue;
                }
            };

            let status = response.status();
            debug!(status = %status, attempt, "response received");

            if status == StatusCode::TOO_MANY_REQUESTS {
                warn!(attempt, "rate limited, waiting before retry");
                tokio::time::sleep(self.retry_delay).await;
                continue;
            }

            if !status.is_success() {
                let reason = status.canonical_reason().unwrap_or(status.as_str());
                let err = ScoutError::Provider {
                    message: format!("Failed to {action}: {reason}"),
                    source: None,
                };
                if last_attempt {
                    return FetchOutcome::TransportFailure(err);
                }
                warn!(attempt, %err, "error status, retrying");
                continue;
            }

            match response.text().await {
                Ok(text) => return FetchOutcome::Success(text),
                Err(e) => {
                    let err = ScoutError::Provider {
                        message: format!("Failed to {action}: {e}"),
                        source: Some(Box::new(e)),
                    };
                    if last_attempt {
                        return FetchOutcome::TransportFailure(err);
                    }
                    warn!(attempt, %err, "failed to read body, retrying");
                    continue;
                }
            }
        }

        FetchOutcome::RateLimitExhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> TavilyClient {
        TavilyClient::new("test-api-key")
            .unwrap()
            .with_search_url(format!("{}/search", server.uri()))
            .with_extract_url(format!("{}/extract", server.uri()))
            .with_retry_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn search_success_returns_raw_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(serde_json::json!({ "query": "rust retry loops" })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results": []}"#))
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.search("rust retry loops").await {
            FetchOutcome::Success(body) => assert_eq!(body, r#"{"results": []}"#),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn extract_posts_urls_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/extract"))
            .and(body_json(
                serde_json::json!({ "urls": ["https://example.com/a", "https://example.com/b"] }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("extracted"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let urls = vec![
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string(),
        ];
        match client.extract(&urls).await {
            FetchOutcome::Success(body) => assert_eq!(body, "extracted"),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_sends_bearer_auth_and_json_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.search("anything").await {
            FetchOutcome::Success(body) => assert_eq!(body, "ok"),
            other => panic!("headers should match, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn two_rate_limits_then_success_returns_the_body() {
        let server = MockServer::start().await;

        // First two attempts are rate limited, the third succeeds.
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(2)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("third time lucky"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.search("q").await {
            FetchOutcome::Success(body) => assert_eq!(body, "third time lucky"),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn all_rate_limited_exhausts_into_rate_limit_outcome() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429))
            .expect(3)
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.search("q").await {
            FetchOutcome::RateLimitExhausted => {}
            other => panic!("expected RateLimitExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repeated_server_errors_exhaust_into_transport_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.search("q").await {
            FetchOutcome::TransportFailure(err) => {
                let msg = err.to_string();
                assert!(
                    msg.contains("Failed to search: Internal Server Error"),
                    "got: {msg}"
                );
            }
            other => panic!("expected TransportFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_then_success_is_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.search("q").await {
            FetchOutcome::Success(body) => assert_eq!(body, "recovered"),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rate_limit_mixed_with_final_server_error_propagates_the_error() {
        let server = MockServer::start().await;

        // 429, 429, 500: exhaustion comes from the error path, not the
        // rate-limit fall-through.
        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(2)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let urls = vec!["https://example.com".to_string()];
        match client.extract(&urls).await {
            FetchOutcome::TransportFailure(err) => {
                assert!(err.to_string().contains("Failed to read website"));
            }
            other => panic!("expected TransportFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn from_config_without_api_key_is_a_config_error() {
        let config = TavilyConfig::default();
        let result = TavilyClient::from_config(&config);
        match result {
            Err(ScoutError::Config(msg)) => assert!(msg.contains("tavily.api_key")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn from_config_applies_endpoints_and_retry_settings() {
        let config = TavilyConfig {
            api_key: Some("tvly-test".to_string()),
            search_url: "http://localhost:1/search".to_string(),
            extract_url: "http://localhost:1/extract".to_string(),
            max_attempts: 1,
            retry_delay_ms: 0,
        };
        let client = TavilyClient::from_config(&config).unwrap();
        assert_eq!(client.search_url, "http://localhost:1/search");
        assert_eq!(client.extract_url, "http://localhost:1/extract");
        assert_eq!(client.max_attempts, 1);
        assert_eq!(client.retry_delay, Duration::ZERO);
    }
}
