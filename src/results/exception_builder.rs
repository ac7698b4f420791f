//! Typed exceptions for failed HTTP calls.
//!
//! [`ExceptionBuilder`] reads a failed response body and picks the most
//! specific exception it supports: an [`ApiException`] when the body is a
//! structured `{type, message}` envelope, otherwise an [`HttpException`]
//! carrying the reason phrase. Per-product errors embedded in the body are
//! appended to the message in both cases.

use serde_json::Value;

use super::errors::{ApiException, HttpException, ResponseException};
use crate::clients::{HttpRequest, HttpResponse};

/// Separator between a message and each itemized error.
pub(crate) const ERROR_SEPARATOR: &str = " | ";

/// Builds [`ResponseException`]s from failed request/response pairs.
///
/// # Example
///
/// ```rust
/// use marketing_api::clients::{HttpRequest, HttpResponse};
/// use marketing_api::results::{ExceptionBuilder, ResponseException};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let request = HttpRequest::post("v1/products/upsert", json!([]))
///     .build()
///     .unwrap();
/// let response = HttpResponse::new(
///     400,
///     "Bad Request",
///     HashMap::new(),
///     r#"{"type":"InvalidProduct","message":"rejected","errors":[{"errors":"bad sku","product_id":7}]}"#,
/// );
///
/// let exception = ExceptionBuilder::from_http_request_and_response(&request, &response);
/// assert!(matches!(exception, ResponseException::Api(_)));
/// assert_eq!(exception.message(), "rejected | bad sku(product #7)");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ExceptionBuilder;

impl ExceptionBuilder {
    /// Builds the exception describing a failed call.
    #[must_use]
    pub fn from_http_request_and_response(
        request: &HttpRequest,
        response: &HttpResponse,
    ) -> ResponseException {
        let body = response.json_body().ok();
        let itemized = body
            .as_ref()
            .and_then(|b| b.get("errors"))
            .and_then(join_itemized_errors);

        let envelope = body.as_ref().and_then(|b| {
            let error_type = b.get("type").filter(|v| !v.is_null())?;
            let message = b.get("message").filter(|v| !v.is_null())?;
            Some((value_to_text(error_type), value_to_text(message)))
        });

        let exception = match envelope {
            Some((error_type, message)) => ResponseException::Api(ApiException {
                message: append_itemized(message, itemized.as_deref()),
                error_type,
                code: response.code,
                request: Some(request.clone()),
                response: Some(response.clone()),
            }),
            None => ResponseException::Http(
                HttpException::new(
                    append_itemized(response.message.clone(), itemized.as_deref()),
                    response.code,
                )
                .with_request(request.clone())
                .with_response(response.clone()),
            ),
        };

        tracing::debug!(
            code = response.code,
            path = %request.path,
            request_id = ?response.request_id(),
            "Built exception for failed request: {}",
            exception
        );

        exception
    }
}

/// Renders every itemized error in `errors` and joins them with `" | "`.
///
/// Each item contributes its `errors` text (or `message` when absent),
/// followed by `(product #<id>)` when it names a product. Returns `None`
/// when `errors` is not an array or yields nothing.
pub(crate) fn join_itemized_errors(errors: &Value) -> Option<String> {
    let items = errors.as_array()?;
    let rendered: Vec<String> = items.iter().filter_map(render_itemized_error).collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join(ERROR_SEPARATOR))
    }
}

fn render_itemized_error(item: &Value) -> Option<String> {
    let text = item
        .get("errors")
        .or_else(|| item.get("message"))
        .filter(|v| !v.is_null())
        .map(value_to_text)?;

    match item.get("product_id").filter(|v| !v.is_null()) {
        Some(product_id) => Some(format!("{text}(product #{})", value_to_text(product_id))),
        None => Some(text),
    }
}

/// Appends `itemized` to `message` after the separator, when present.
pub(crate) fn append_itemized(message: String, itemized: Option<&str>) -> String {
    match itemized {
        Some(itemized) if message.is_empty() => itemized.to_string(),
        Some(itemized) => format!("{message}{ERROR_SEPARATOR}{itemized}"),
        None => message,
    }
}

/// Strings are taken verbatim, anything else as its JSON text.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
