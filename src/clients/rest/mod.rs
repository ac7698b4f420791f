//! REST API client for the marketing API.
//!
//! This module provides [`RestClient`], built on top of the
//! [`HttpClient`](crate::clients::HttpClient), for the catalog and order
//! endpoints.
//!
//! # Endpoints
//!
//! - `POST v1/products/upsert`: [`RestClient::upsert_products`]
//! - `POST v1/products/discontinue`: [`RestClient::delete_products`]
//! - `POST v1/orders/confirm/{customer_id}` and `POST v1/orders/unmatched`:
//!   [`RestClient::confirm_order`]
//!
//! Request bodies are the normalized form of the models (see
//! [`hydrate`](crate::hydrate)), so only declared fields are sent.
//!
//! # Errors
//!
//! A failed call becomes a
//! [`ResponseException`](crate::results::ResponseException): an
//! `ApiException` when the body is a `{type, message}` envelope, an
//! `HttpException` otherwise. Per-product errors reported by the API are
//! appended to the message as `"<error>(product #<id>)"`.

mod client;

pub use client::{RestClient, DISCONTINUE_PRODUCTS_PATH, UPSERT_PRODUCTS_PATH};
