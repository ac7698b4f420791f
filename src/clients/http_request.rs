//! HTTP request types for the marketing API SDK.
//!
//! Every endpoint of the marketing API speaks JSON, so a request is just a
//! method, a path below the base URL, an optional JSON body and a handful of
//! headers. Requests are kept after sending so that failures can carry the
//! originating request (see [`ExceptionBuilder`](crate::results::ExceptionBuilder)).

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the marketing API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Reads, such as fetching catalog state.
    Get,
    /// Writes and every GraphQL operation.
    Post,
}

impl HttpMethod {
    /// Returns whether requests with this method carry a body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A request to the marketing API.
///
/// # Example
///
/// ```rust
/// use marketing_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::post("v1/products/discontinue", json!(["sku-1"]))
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.method, HttpMethod::Post);
/// assert_eq!(request.body_text().as_deref(), Some(r#"["sku-1"]"#));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Path relative to the client's base URL.
    pub path: String,
    /// JSON body, present exactly when the method carries one.
    pub body: Option<Value>,
    /// Headers sent on top of the client defaults.
    pub headers: HashMap<String, String>,
    /// Attempts allowed for retryable responses (at least 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Starts a request with the given method and path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            method,
            path: path.into(),
            body: None,
            headers: HashMap::new(),
            tries: 1,
        }
    }

    /// Starts a `GET` request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> HttpRequestBuilder {
        Self::builder(HttpMethod::Get, path)
    }

    /// Starts a `POST` request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: impl Into<Value>) -> HttpRequestBuilder {
        Self::builder(HttpMethod::Post, path).body(body)
    }

    /// Serialized body, as sent on the wire.
    #[must_use]
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }

    /// Checks that the request can be sent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if a `POST` has no body, a `GET`
    /// has one, or `tries` is zero.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.method.has_body(), self.body.is_some()) {
            (true, false) => {
                return Err(InvalidHttpRequestError::MissingBody {
                    method: self.method,
                })
            }
            (false, true) => {
                return Err(InvalidHttpRequestError::UnexpectedBody {
                    method: self.method,
                })
            }
            _ => {}
        }

        if self.tries == 0 {
            return Err(InvalidHttpRequestError::ZeroTries);
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
    headers: HashMap<String, String>,
    tries: u32,
}

impl HttpRequestBuilder {
    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a header, replacing any earlier value for the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds every header in `headers`.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets the number of attempts.
    ///
    /// Default is 1 (no retries). Higher values let
    /// [`HttpClient`](crate::clients::HttpClient) retry 429 and 5xx responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds and verifies the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails
    /// [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            headers: self.headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}
