//! Error taxonomy for result handling.
//!
//! Every failure a result handler can report is a [`ResultError`]. Failed
//! HTTP responses are further described by a [`ResponseException`], which
//! keeps the status code together with the originating request and the
//! response so callers can diagnose what went wrong.
//!
//! # Overview
//!
//! - [`ResultError::Decode`]: The body was not valid JSON
//! - [`ResultError::Response`]: A non-200 response ([`HttpException`] or [`ApiException`])
//! - [`ResultError::GraphQl`]: The GraphQL envelope carried `errors`
//! - [`ResultError::MissingField`]: An expected payload field was absent
//! - [`ResultError::Hydration`]: The payload could not be turned into a typed value
//! - [`ResultError::Validation`]: The typed value violated a constraint
//! - [`ResultError::Transport`]: The request never produced a response
//!
//! # Example
//!
//! ```rust,ignore
//! use marketing_api::results::ResultError;
//!
//! match client.upsert_categories(&categories).await {
//!     Ok(id) => println!("Category {id}"),
//!     Err(ResultError::GraphQl { message }) => println!("Rejected: {message}"),
//!     Err(e) => println!("Failed ({:?}, request {:?}): {e}", e.status_code(), e.request_id()),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpRequest, HttpResponse};
use crate::hydrate::{HydrationError, ValidationError};

/// A failed HTTP response without a structured API error envelope.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct HttpException {
    /// Human-readable description, including itemized errors.
    pub message: String,
    /// The HTTP status code.
    pub code: u16,
    /// The request that produced the response, when known.
    pub request: Option<HttpRequest>,
    /// The failed response, when available.
    pub response: Option<HttpResponse>,
}

impl HttpException {
    /// Creates an exception from a message and status code.
    #[must_use]
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
            request: None,
            response: None,
        }
    }

    /// Attaches the originating request.
    #[must_use]
    pub fn with_request(mut self, request: HttpRequest) -> Self {
        self.request = Some(request);
        self
    }

    /// Attaches the failed response.
    #[must_use]
    pub fn with_response(mut self, response: HttpResponse) -> Self {
        self.response = Some(response);
        self
    }
}

/// A failed HTTP response whose body carried a structured `{type, message}` envelope.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ApiException {
    /// The API's message, including itemized errors.
    pub message: String,
    /// The API's error type identifier.
    pub error_type: String,
    /// The HTTP status code.
    pub code: u16,
    /// The request that produced the response, when known.
    pub request: Option<HttpRequest>,
    /// The failed response, when available.
    pub response: Option<HttpResponse>,
}

/// A non-success HTTP response, typed by the shape of its body.
#[derive(Clone, Debug, Error)]
pub enum ResponseException {
    /// Generic HTTP failure.
    #[error(transparent)]
    Http(HttpException),

    /// Structured API failure.
    #[error(transparent)]
    Api(ApiException),
}

impl ResponseException {
    /// Returns the exception message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Http(e) => &e.message,
            Self::Api(e) => &e.message,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Http(e) => e.code,
            Self::Api(e) => e.code,
        }
    }

    /// Returns the originating request, if known.
    #[must_use]
    pub const fn request(&self) -> Option<&HttpRequest> {
        match self {
            Self::Http(e) => e.request.as_ref(),
            Self::Api(e) => e.request.as_ref(),
        }
    }

    /// Returns the failed response, if available.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Http(e) => e.response.as_ref(),
            Self::Api(e) => e.response.as_ref(),
        }
    }

    /// Returns the `X-Request-Id` of the failed response, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.response().and_then(HttpResponse::request_id)
    }
}

/// Errors produced while turning an HTTP response into a typed result.
#[derive(Debug, Error)]
pub enum ResultError {
    /// The response body could not be decoded as JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error(transparent)]
    Response(#[from] ResponseException),

    /// The GraphQL envelope reported errors.
    #[error("{message}")]
    GraphQl {
        /// Every reported message, joined with `" | "`.
        message: String,
    },

    /// An expected payload field was not found.
    #[error("{message}")]
    MissingField {
        /// The field that was searched for.
        field: String,
        /// Description naming the field and where it was searched.
        message: String,
    },

    /// The payload could not be hydrated into a typed value.
    #[error(transparent)]
    Hydration(HydrationError),

    /// A hydrated value failed validation.
    #[error(transparent)]
    Validation(ValidationError),

    /// The request failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl ResultError {
    /// Creates a [`ResultError::MissingField`] reading
    /// `"No <field> found in <context>"`.
    #[must_use]
    pub fn missing_field(field: impl Into<String>, context: &str) -> Self {
        let field = field.into();
        let message = format!("No {field} found in {context}");
        Self::MissingField { field, message }
    }

    /// Creates a [`ResultError::MissingField`] for a missing payload object,
    /// reading `"No <field> object was found in <context>"`.
    #[must_use]
    pub fn missing_object(field: impl Into<String>, context: &str) -> Self {
        let field = field.into();
        let message = format!("No {field} object was found in {context}");
        Self::MissingField { field, message }
    }

    /// Returns the HTTP status code behind this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code()),
            Self::Transport(HttpError::Network(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the `X-Request-Id` of the failed response, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.request_id(),
            _ => None,
        }
    }
}

impl From<HydrationError> for ResultError {
    fn from(error: HydrationError) -> Self {
        if let HydrationError::Validation(validation) = error.root_cause() {
            return Self::Validation(validation.clone());
        }
        Self::Hydration(error)
    }
}

impl From<ValidationError> for ResultError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResultError>();
    assert_send_sync::<ResponseException>();
};
