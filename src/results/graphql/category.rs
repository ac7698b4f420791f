//! Category upsert results.

use serde_json::Value;

use super::GraphqlResultHandler;
use crate::results::errors::ResultError;
use crate::results::exception_builder::value_to_text;
use crate::results::locator;

const CONTEXT: &str = "GraphQL result";

/// Extracts the id of the first category an `upsertCategories` mutation
/// reports.
///
/// The `categoryResult` items are checked in order. An item carrying a
/// non-empty `errors` list fails the call with its first message; the first
/// item holding a `category.id` wins. Items with neither are skipped.
///
/// # Example
///
/// ```rust
/// use marketing_api::results::{CategoryUpdateResultHandler, ResultHandler};
/// use marketing_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(
///     200,
///     "OK",
///     HashMap::new(),
///     r#"{"data":{"upsertCategories":{"categoryResult":[{"category":{"id":"42"}}]}}}"#,
/// );
/// assert_eq!(CategoryUpdateResultHandler.render(&response).unwrap(), "42");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryUpdateResultHandler;

impl GraphqlResultHandler for CategoryUpdateResultHandler {
    type Output = String;

    fn parse_query_result(&self, data: &Value) -> Result<String, ResultError> {
        let upsert = locator::locate(data, "upsertCategories")
            .ok_or_else(|| ResultError::missing_object("upsertCategories", CONTEXT))?;

        let results = locator::locate(upsert, "categoryResult")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice);

        for item in results {
            if let Some(first) = item
                .get("errors")
                .and_then(Value::as_array)
                .and_then(|errors| errors.first())
            {
                let message = first.get("message").map_or_else(
                    || value_to_text(first),
                    value_to_text,
                );
                return Err(ResultError::GraphQl { message });
            }

            let id = locator::locate(item, "category")
                .and_then(|category| category.get("id"))
                .filter(|id| !id.is_null());
            if let Some(id) = id {
                return Ok(value_to_text(id));
            }
        }

        Err(ResultError::missing_object("upsertCategories", CONTEXT))
    }
}
