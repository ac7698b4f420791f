//! GraphQL result handlers.
//!
//! GraphQL responses arrive as a `{data?, errors?}` envelope, normally with
//! status `200` even when the query failed. A [`GraphqlResultHandler`] only
//! describes how to read `data`; the blanket [`ResultHandler`] impl handles
//! the envelope itself.
//!
//! # Envelope rules
//!
//! 1. A body that is not valid JSON is [`ResultError::Decode`].
//! 2. An `errors` member fails the call with [`ResultError::GraphQl`], even
//!    when `data` is also present. Every item's `message` is kept, in order,
//!    joined with `" | "`.
//! 3. Otherwise `data` is handed to
//!    [`parse_query_result`](GraphqlResultHandler::parse_query_result).
//! 4. An envelope with neither member is [`ResultError::MissingField`].
//!
//! # Handlers
//!
//! - [`GraphqlDataHandler`]: Returns `data` unchanged
//! - [`CategoryUpdateResultHandler`]: Id of an upserted category
//! - [`RecommendationResultHandler`]: Category recommendations
//! - [`SearchResultHandler`]: Search results
//! - [`OrderResultHandler`]: Order status updates (reads the raw envelope)

mod category;
mod order;
mod recommendation;
mod search;

pub use category::CategoryUpdateResultHandler;
pub use order::OrderResultHandler;
pub use recommendation::RecommendationResultHandler;
pub use search::SearchResultHandler;

use serde_json::Value;

use super::errors::ResultError;
use super::exception_builder::{value_to_text, ERROR_SEPARATOR};
use super::handler::ResultHandler;
use crate::clients::HttpResponse;

/// Reads the `data` member of a GraphQL envelope into a typed value.
pub trait GraphqlResultHandler {
    /// The typed value produced from `data`.
    type Output;

    /// Parses the `data` member of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError`] if the expected payload is missing or malformed.
    fn parse_query_result(&self, data: &Value) -> Result<Self::Output, ResultError>;
}

impl<T: GraphqlResultHandler> ResultHandler for T {
    type Output = T::Output;

    fn parse_response(&self, response: &HttpResponse) -> Result<Self::Output, ResultError> {
        let envelope = response.json_body()?;

        if let Some(errors) = envelope.get("errors") {
            return Err(graphql_failure(errors));
        }

        match envelope.get("data") {
            Some(data) => self.parse_query_result(data),
            None => Err(ResultError::missing_field("data", "GraphQL result")),
        }
    }
}

/// Returns the `data` member unchanged, for ad-hoc queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphqlDataHandler;

impl GraphqlResultHandler for GraphqlDataHandler {
    type Output = Value;

    fn parse_query_result(&self, data: &Value) -> Result<Value, ResultError> {
        Ok(data.clone())
    }
}

/// Builds the error for an envelope's `errors` member.
pub(crate) fn graphql_failure(errors: &Value) -> ResultError {
    let message = join_error_messages(errors);
    if message.is_empty() {
        tracing::warn!(errors = %errors, "GraphQL response reported errors without messages");
    }
    ResultError::GraphQl { message }
}

/// Joins every error item's `message`, in order.
pub(crate) fn join_error_messages(errors: &Value) -> String {
    match errors {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("message"))
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(ERROR_SEPARATOR),
        Value::Null => String::new(),
        other => value_to_text(other),
    }
}

// Verify handlers are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlDataHandler>();
    assert_send_sync::<CategoryUpdateResultHandler>();
    assert_send_sync::<RecommendationResultHandler>();
    assert_send_sync::<SearchResultHandler>();
    assert_send_sync::<OrderResultHandler>();
};
