//! Transport-level error types for the marketing API SDK.
//!
//! These errors describe failures to *send* a request. A response that
//! arrives with a non-200 status is not a transport error: it is handed to
//! a [`ResultHandler`](crate::results::ResultHandler) or to the
//! [`ExceptionBuilder`](crate::results::ExceptionBuilder), which turn it into
//! a typed [`ResultError`](crate::results::ResultError).

use thiserror::Error;

use crate::clients::HttpMethod;

/// A request that fails [`HttpRequest::verify`](crate::clients::HttpRequest::verify).
///
/// # Example
///
/// ```rust
/// use marketing_api::clients::{HttpMethod, InvalidHttpRequestError};
///
/// let error = InvalidHttpRequestError::MissingBody { method: HttpMethod::Post };
/// assert_eq!(error.to_string(), "Cannot send POST without a body.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The method requires a body and none was set.
    #[error("Cannot send {method} without a body.")]
    MissingBody {
        /// The offending method.
        method: HttpMethod,
    },

    /// The method does not take a body and one was set.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The offending method.
        method: HttpMethod,
    },

    /// The request asked for zero attempts.
    #[error("Request tries must be at least 1.")]
    ZeroTries,
}

/// Unified error type for transport failures.
///
/// ```rust,ignore
/// match client.request(&request).await {
///     Ok(response) => println!("Status {}", response.code),
///     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
///     Err(HttpError::Network(e)) => println!("Network error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
