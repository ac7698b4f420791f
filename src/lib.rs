//! # Marketing API Rust SDK
//!
//! A Rust SDK for a marketing platform's API, which accepts commerce data
//! (products, categories, orders) and answers with plain JSON and GraphQL
//! envelopes.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MarketingConfig`] and [`MarketingConfigBuilder`]
//! - Result handlers that locate payloads in nested responses and turn
//!   them into typed values, via [`results`]
//! - A structured error taxonomy ([`ResultError`]) for HTTP, API and GraphQL failures
//! - Object hydration driven by explicit field tables, via [`hydrate`]
//! - Domain models for products, categories, orders and recommendations, via [`model`]
//! - Async REST and GraphQL clients with retry handling
//!
//! ## Quick Start
//!
//! ```rust
//! use marketing_api::{BaseUrl, MarketingConfig};
//! use std::time::Duration;
//!
//! let config = MarketingConfig::builder()
//!     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Rendering Responses
//!
//! Every response is rendered through a [`ResultHandler`]. Only status `200`
//! counts as success; GraphQL envelopes carrying `errors` fail even then.
//!
//! ```rust
//! use marketing_api::results::{CategoryUpdateResultHandler, ResultHandler};
//! use marketing_api::HttpResponse;
//! use std::collections::HashMap;
//!
//! let response = HttpResponse::new(
//!     200,
//!     "OK",
//!     HashMap::new(),
//!     r#"{"data":{"upsertCategories":{"categoryResult":[{"category":{"id":"42"}}]}}}"#,
//! );
//!
//! let id = CategoryUpdateResultHandler.render(&response).unwrap();
//! assert_eq!(id, "42");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use marketing_api::{ApiToken, BaseUrl, GraphqlClient, MarketingConfig, RestClient};
//! use marketing_api::model::{OrderStatus, Product};
//!
//! let config = MarketingConfig::builder()
//!     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let rest = RestClient::new(&config, &ApiToken::new("products-token").unwrap());
//! rest.upsert_products(&products).await?;
//!
//! let graphql = GraphqlClient::new(&config, &ApiToken::new("graphql-token").unwrap());
//! let update = graphql
//!     .update_order_status(&OrderStatus {
//!         order_number: "M-100".into(),
//!         status: "shipped".into(),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and models validate on construction or hydration
//! - **Thread-safe**: Clients and handlers are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No silent defaults**: Malformed payloads are errors, never empty values

pub mod clients;
pub mod config;
pub mod error;
pub mod hydrate;
pub mod model;
pub mod results;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, BaseUrl, MarketingConfig, MarketingConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    GraphqlClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RestClient,
};

// Re-export result handling types
pub use hydrate::{HydrationError, ValidationError};
pub use results::{
    ApiException, ExceptionBuilder, HttpException, ResponseException, ResultError, ResultHandler,
};
