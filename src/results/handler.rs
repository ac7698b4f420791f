//! The base result handler contract.
//!
//! A [`ResultHandler`] turns one [`HttpResponse`] into a typed value. The
//! default [`render`](ResultHandler::render) only accepts status `200`; any
//! other status becomes a [`ResponseException::Http`] whose message is built
//! from the JSON error body when there is one.

use serde_json::Value;

use super::errors::{HttpException, ResponseException, ResultError};
use super::exception_builder::{append_itemized, join_itemized_errors};
use crate::clients::HttpResponse;

/// The only status code treated as success.
pub const SUCCESS_CODE: u16 = 200;

/// Message used when a failed response carries nothing more specific.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// Converts HTTP responses into typed results.
///
/// Implementors provide [`parse_response`](Self::parse_response), which is
/// only called for successful responses.
///
/// # Example
///
/// ```rust
/// use marketing_api::results::{GeneralPurposeResultHandler, ResultError, ResultHandler};
/// use marketing_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("content-type".to_string(), vec!["application/json".to_string()]);
/// let response = HttpResponse::new(403, "Forbidden", headers, r#"{"message":"token revoked"}"#);
///
/// let error = GeneralPurposeResultHandler.render(&response).unwrap_err();
/// assert_eq!(error.to_string(), "token revoked");
/// assert_eq!(error.status_code(), Some(403));
/// ```
pub trait ResultHandler {
    /// The typed value produced from a successful response.
    type Output;

    /// Checks the status code and delegates successful responses to
    /// [`parse_response`](Self::parse_response).
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::Response`] for any status other than `200`,
    /// otherwise whatever `parse_response` returns.
    fn render(&self, response: &HttpResponse) -> Result<Self::Output, ResultError> {
        tracing::debug!(
            code = response.code,
            request_id = ?response.request_id(),
            "Rendering marketing API response"
        );

        if response.code != SUCCESS_CODE {
            return Err(http_failure(response).into());
        }

        self.parse_response(response)
    }

    /// Parses a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError`] if the body cannot be turned into the output.
    fn parse_response(&self, response: &HttpResponse) -> Result<Self::Output, ResultError>;
}

/// Returns the decoded JSON body of a successful response.
///
/// Used for REST calls whose payload needs no further shaping.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneralPurposeResultHandler;

impl ResultHandler for GeneralPurposeResultHandler {
    type Output = Value;

    fn parse_response(&self, response: &HttpResponse) -> Result<Value, ResultError> {
        Ok(response.json_body()?)
    }
}

/// Builds the exception for a failed response.
fn http_failure(response: &HttpResponse) -> ResponseException {
    ResponseException::Http(
        HttpException::new(failure_message(response), response.code)
            .with_response(response.clone()),
    )
}

/// Extracts the most specific message a failed JSON response offers.
fn failure_message(response: &HttpResponse) -> String {
    if !response.is_json() {
        return DEFAULT_ERROR_MESSAGE.to_string();
    }
    let Ok(body) = response.json_body() else {
        return DEFAULT_ERROR_MESSAGE.to_string();
    };

    let top_level = || body.get("errors").and_then(join_itemized_errors);
    let (base, itemized) = match body.get("message") {
        Some(Value::String(message)) => (Some(message.clone()), top_level()),
        Some(Value::Object(message)) => (
            None,
            message
                .get("errors")
                .and_then(join_itemized_errors)
                .or_else(top_level),
        ),
        _ => (None, top_level()),
    };

    match (base, itemized) {
        (Some(base), itemized) if !base.is_empty() => append_itemized(base, itemized.as_deref()),
        (_, Some(itemized)) => itemized,
        _ => DEFAULT_ERROR_MESSAGE.to_string(),
    }
}

// Verify handlers are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GeneralPurposeResultHandler>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn json_response(code: u16, body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        HttpResponse::new(code, "", headers, body)
    }

    #[test]
    fn test_general_purpose_handler_returns_decoded_body() {
        let response = json_response(200, r#"{"status":"ok"}"#);
        let value = GeneralPurposeResultHandler.render(&response).unwrap();
        assert_eq!(value, json!({"status": "ok"}));
    }

    #[test]
    fn test_general_purpose_handler_reports_malformed_body() {
        let response = json_response(200, "{oops");
        let error = GeneralPurposeResultHandler.render(&response).unwrap_err();
        assert!(matches!(error, ResultError::Decode(_)));
    }

    #[test]
    fn test_only_200_is_success() {
        let response = json_response(201, r#"{"status":"created"}"#);
        let error = GeneralPurposeResultHandler.render(&response).unwrap_err();
        assert_eq!(error.status_code(), Some(201));
    }

    #[test]
    fn test_failure_message_from_nested_itemized_errors() {
        let response = json_response(
            404,
            r#"{"message":{"errors":[{"errors":"bad sku","product_id":7}]}}"#,
        );
        assert_eq!(failure_message(&response), "bad sku(product #7)");
    }

    #[test]
    fn test_failure_message_joins_base_and_top_level_errors() {
        let response = json_response(
            400,
            r#"{"message":"batch rejected","errors":[{"errors":"a","product_id":1},{"errors":"b"}]}"#,
        );
        assert_eq!(
            failure_message(&response),
            "batch rejected | a(product #1) | b"
        );
    }

    #[test]
    fn test_failure_message_defaults() {
        // Non-JSON content type.
        let response = HttpResponse::new(500, "Internal Server Error", HashMap::new(), "boom");
        assert_eq!(failure_message(&response), DEFAULT_ERROR_MESSAGE);

        // JSON content type, but nothing usable.
        let response = json_response(500, r#"{"detail":"x"}"#);
        assert_eq!(failure_message(&response), DEFAULT_ERROR_MESSAGE);

        // JSON content type with a broken body.
        let response = json_response(500, "{");
        assert_eq!(failure_message(&response), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_failure_carries_response_clone() {
        let response = json_response(409, r#"{"message":"conflict"}"#);
        let error = GeneralPurposeResultHandler.render(&response).unwrap_err();
        let ResultError::Response(exception) = error else {
            panic!("expected a response error");
        };
        assert_eq!(exception.response().unwrap().raw_body, response.raw_body);
        assert!(exception.request().is_none());
    }
}
