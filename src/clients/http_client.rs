//! HTTP client for marketing API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the marketing API with automatic retry handling.

use std::collections::HashMap;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiToken, BaseUrl, MarketingConfig};

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the marketing API.
///
/// The client resolves request paths against a [`BaseUrl`], attaches the
/// default headers (User-Agent, Accept and Basic authorization) and retries
/// 429 and 5xx responses. It never interprets status codes beyond the retry
/// decision: every response that arrives, successful or not, is returned as
/// an [`HttpResponse`] for a result handler to render.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use marketing_api::{ApiToken, BaseUrl, MarketingConfig};
/// use marketing_api::clients::{HttpClient, HttpRequest};
///
/// let config = MarketingConfig::builder()
///     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
/// let token = ApiToken::new("products-token").unwrap();
///
/// let client = HttpClient::new(config.api_base_url(), &token, &config);
/// let request = HttpRequest::get("v1/products").build().unwrap();
/// let response = client.request(&request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client against `base_url`, authenticated with `token`.
    ///
    /// The token is sent as HTTP Basic credentials with an empty user name.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(base_url: &BaseUrl, token: &ApiToken, config: &MarketingConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.clone(),
            default_headers: default_headers(token, config.user_agent_prefix()),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request, retrying 429 and 5xx responses.
    ///
    /// Once `request.tries` attempts have been made the last response is
    /// returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails
    /// verification, or [`HttpError::Network`] if it cannot be sent.
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);
        let mut attempt: u32 = 1;
        loop {
            tracing::debug!(
                method = %request.method,
                url = %url,
                attempt,
                "Sending marketing API request"
            );
            let response = self.send_once(&url, request).await?;

            if !is_retryable(response.code) || attempt >= request.tries {
                return Ok(response);
            }

            let delay = retry_delay(&response);
            tracing::warn!(
                code = response.code,
                attempt,
                max_tries = request.tries,
                "Retrying marketing API request to {} in {:?}",
                request.path,
                delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn send_once(&self, url: &str, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        for (name, value) in self.default_headers.iter().chain(&request.headers) {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body_text() {
            builder = builder.header("Content-Type", "application/json").body(body);
        }

        let res = builder.send().await?;
        let status = res.status();
        let headers = collect_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            headers,
            body,
        ))
    }
}

fn default_headers(token: &ApiToken, user_agent_prefix: Option<&str>) -> HashMap<String, String> {
    let prefix = user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    let credentials = STANDARD.encode(format!(":{}", token.as_ref()));

    HashMap::from([
        (
            "User-Agent".to_string(),
            format!("{prefix}Marketing API Library v{SDK_VERSION} | Rust {rust_version}"),
        ),
        ("Accept".to_string(), "application/json".to_string()),
        ("Authorization".to_string(), format!("Basic {credentials}")),
    ])
}

const fn is_retryable(code: u16) -> bool {
    code == 429 || code >= 500
}

/// 429 honours `Retry-After`; every other retryable status waits the fixed delay.
fn retry_delay(response: &HttpResponse) -> Duration {
    response
        .retry_request_after
        .filter(|secs| response.code == 429 && secs.is_finite() && *secs >= 0.0)
        .map_or(Duration::from_secs(RETRY_WAIT_TIME), Duration::from_secs_f64)
}

/// Header names are lowercased; repeated headers keep every value.
fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut collected: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        collected
            .entry(name.as_str().to_lowercase())
            .or_default()
            .push(value.to_str().unwrap_or_default().to_string());
    }
    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_client(prefix: Option<&str>) -> HttpClient {
        let mut builder = MarketingConfig::builder()
            .api_base_url(BaseUrl::new("https://api.example.com").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        let config = builder.build().unwrap();
        HttpClient::new(config.api_base_url(), &ApiToken::new("secret").unwrap(), &config)
    }

    #[test]
    fn test_authorization_header_is_basic_with_empty_user() {
        let client = create_client(None);
        // base64(":secret")
        assert_eq!(
            client.default_headers()["Authorization"],
            "Basic OnNlY3JldA=="
        );
        assert_eq!(client.default_headers()["Accept"], "application/json");
        assert_eq!(client.base_url().as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_user_agent_with_and_without_prefix() {
        let plain = create_client(None);
        assert!(plain.default_headers()["User-Agent"].starts_with("Marketing API Library v"));

        let prefixed = create_client(Some("MyShop/1.0"));
        assert!(prefixed.default_headers()["User-Agent"].starts_with("MyShop/1.0 | Marketing"));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(429));
        assert!(is_retryable(500));
        assert!(is_retryable(503));
        assert!(!is_retryable(400));
        assert!(!is_retryable(404));
    }

    #[test]
    fn test_retry_delay_honours_retry_after_only_for_429() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["0.25".to_string()]);

        let limited = HttpResponse::new(429, "Too Many Requests", headers.clone(), "");
        assert_eq!(retry_delay(&limited), Duration::from_millis(250));

        let failed = HttpResponse::new(503, "Service Unavailable", headers, "");
        assert_eq!(retry_delay(&failed), Duration::from_secs(RETRY_WAIT_TIME));

        let no_header = HttpResponse::new(429, "Too Many Requests", HashMap::new(), "");
        assert_eq!(retry_delay(&no_header), Duration::from_secs(RETRY_WAIT_TIME));
    }
}
