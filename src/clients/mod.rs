//! HTTP client types for marketing API communication.
//!
//! This module provides the transport layer: building requests, sending
//! them with retry handling, and capturing responses for the result
//! handlers in [`results`](crate::results).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A captured response (status, reason phrase, headers, raw body)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`rest::RestClient`]: Catalog and order endpoints
//! - [`graphql::GraphqlClient`]: GraphQL endpoint with typed result handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use marketing_api::{ApiToken, BaseUrl, MarketingConfig};
//! use marketing_api::clients::{HttpClient, HttpRequest};
//!
//! let config = MarketingConfig::builder()
//!     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(config.api_base_url(), &ApiToken::new("token").unwrap(), &config);
//!
//! let request = HttpRequest::get("v1/products")
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(&request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **5xx (Server Error)**: Retries with fixed 1-second delay
//! - **Other statuses**: Returned immediately
//!
//! When every attempt is used up the last response is returned unchanged;
//! status codes are interpreted by the result handlers, not the transport.
//! The default `tries` is 1, meaning no automatic retries.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export API clients at the clients module level
pub use graphql::GraphqlClient;
pub use rest::RestClient;
