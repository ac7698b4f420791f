//! Result handling for marketing API responses.
//!
//! This module turns raw [`HttpResponse`](crate::HttpResponse)s into typed
//! values, and failures into a structured error taxonomy.
//!
//! # Overview
//!
//! - [`ResultHandler`]: Base contract; only status `200` is success
//! - [`GeneralPurposeResultHandler`]: Returns the decoded JSON body
//! - [`GraphqlResultHandler`]: Reads `data` from a GraphQL envelope
//! - [`CategoryUpdateResultHandler`], [`RecommendationResultHandler`],
//!   [`SearchResultHandler`], [`OrderResultHandler`]: Query-specific handlers
//! - [`locator`]: Finds a named payload member at any depth
//! - [`ExceptionBuilder`]: Builds typed exceptions from failed request/response pairs
//! - [`ResultError`]: Every failure a handler can report
//!
//! Handlers hold no state. Construct them where needed and pass them by
//! reference; they are all `Send + Sync`.
//!
//! # Example
//!
//! ```rust
//! use marketing_api::results::{CategoryUpdateResultHandler, ResultError, ResultHandler};
//! use marketing_api::HttpResponse;
//! use std::collections::HashMap;
//!
//! let response = HttpResponse::new(
//!     200,
//!     "OK",
//!     HashMap::new(),
//!     r#"{"errors":[{"message":"field X required"}]}"#,
//! );
//!
//! match CategoryUpdateResultHandler.render(&response) {
//!     Err(ResultError::GraphQl { message }) => assert_eq!(message, "field X required"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod errors;
mod exception_builder;
pub mod graphql;
mod handler;
pub mod locator;

pub use errors::{ApiException, HttpException, ResponseException, ResultError};
pub use exception_builder::ExceptionBuilder;
pub use graphql::{
    CategoryUpdateResultHandler, GraphqlDataHandler, GraphqlResultHandler, OrderResultHandler,
    RecommendationResultHandler, SearchResultHandler,
};
pub use handler::{
    GeneralPurposeResultHandler, ResultHandler, DEFAULT_ERROR_MESSAGE, SUCCESS_CODE,
};
