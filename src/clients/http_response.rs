//! HTTP response types for the marketing API SDK.
//!
//! [`HttpResponse`] is the transport surface consumed by the result handlers:
//! status code, reason phrase, lowercase headers and the raw, undecoded body.
//! Decoding is left to the handler so a malformed body surfaces as a
//! [`ResultError::Decode`](crate::results::ResultError::Decode) instead of
//! being silently replaced.

use std::collections::HashMap;

/// An HTTP response from the marketing API.
///
/// # Example
///
/// ```rust
/// use marketing_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("content-type".to_string(), vec!["application/json".to_string()]);
///
/// let response = HttpResponse::new(200, "OK", headers, r#"{"data":{}}"#);
/// assert!(response.is_json());
/// assert_eq!(response.json_body().unwrap()["data"], serde_json::json!({}));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase accompanying the status code.
    pub message: String,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub raw_body: String,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are lowercased and `Retry-After` is parsed into
    /// [`retry_request_after`](Self::retry_request_after).
    #[must_use]
    pub fn new(
        code: u16,
        message: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        raw_body: impl Into<String>,
    ) -> Self {
        let headers: HashMap<String, Vec<String>> = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            message: message.into(),
            headers,
            raw_body: raw_body.into(),
            retry_request_after,
        }
    }

    /// Returns the first value of the given header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns `true` if the content type is `application/json`.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|value| value.trim().starts_with("application/json"))
    }

    /// Decodes the raw body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body is not valid JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.raw_body)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
