//! Order status update results.

use serde_json::Value;

use super::graphql_failure;
use crate::clients::HttpResponse;
use crate::results::errors::ResultError;
use crate::results::exception_builder::value_to_text;
use crate::results::handler::ResultHandler;
use crate::results::locator;

/// Reads the result of an order status mutation.
///
/// Unlike the other GraphQL handlers this one reads the envelope itself: only
/// a non-empty `errors` list fails, and a missing `data` member is not an
/// error. The output is the first `id` or `updateStatus` found anywhere in
/// `data`, or `None` when neither exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderResultHandler;

impl ResultHandler for OrderResultHandler {
    type Output = Option<String>;

    fn parse_response(&self, response: &HttpResponse) -> Result<Option<String>, ResultError> {
        let envelope = response.json_body()?;

        if let Some(errors) = envelope.get("errors") {
            let has_errors = errors.as_array().map_or(!errors.is_null(), |e| !e.is_empty());
            if has_errors {
                return Err(graphql_failure(errors));
            }
        }

        Ok(envelope.get("data").and_then(find_status))
    }
}

fn find_status(data: &Value) -> Option<String> {
    locator::locate_any(data, &["id", "updateStatus"])
        .map(|(_, value)| value)
        .filter(|value| !value.is_null())
        .map(value_to_text)
}
