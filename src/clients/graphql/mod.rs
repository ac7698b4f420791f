//! GraphQL API client for the marketing API.
//!
//! This module provides [`GraphqlClient`], built on top of the
//! [`HttpClient`](crate::clients::HttpClient). Unlike a plain HTTP call, a
//! GraphQL call usually answers `200` even when the query failed, so every
//! response is rendered through a
//! [`GraphqlResultHandler`](crate::results::GraphqlResultHandler) that checks
//! the envelope's `errors` member before reading `data`.
//!
//! # Example
//!
//! ```rust,ignore
//! use marketing_api::{ApiToken, BaseUrl, GraphqlClient, MarketingConfig};
//! use marketing_api::results::GraphqlDataHandler;
//! use serde_json::json;
//!
//! let config = MarketingConfig::builder()
//!     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! let client = GraphqlClient::new(&config, &ApiToken::new("graphql-token").unwrap());
//!
//! // Ad-hoc query, returning `data` as JSON
//! let data = client
//!     .execute("query { session { id } }", None, &GraphqlDataHandler)
//!     .await?;
//!
//! // Typed search
//! let result = client
//!     .search(
//!         "query Search($q: String) { search(query: $q) { products { total hits { productId name } } } }",
//!         Some(json!({ "q": "shoe" })),
//!     )
//!     .await?;
//! ```

mod client;

pub use client::{GraphqlClient, GRAPHQL_PATH};
