//! REST client implementation for the marketing API.
//!
//! This module provides the [`RestClient`] type for sending catalog and
//! order data through the REST endpoints.

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::config::{ApiToken, MarketingConfig};
use crate::hydrate::{self, Hydratable};
use crate::model::{Order, Product};
use crate::results::{
    ExceptionBuilder, GeneralPurposeResultHandler, ResultError, ResultHandler, SUCCESS_CODE,
};

/// Path for creating or updating products.
pub const UPSERT_PRODUCTS_PATH: &str = "v1/products/upsert";

/// Path for discontinuing products.
pub const DISCONTINUE_PRODUCTS_PATH: &str = "v1/products/discontinue";

/// REST API client for the marketing API.
///
/// Failed calls are turned into a typed
/// [`ResponseException`](crate::results::ResponseException) by the
/// [`ExceptionBuilder`], which keeps the originating request for diagnostics.
/// Successful calls return the decoded JSON body, or `null` when the body is
/// empty.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use marketing_api::{ApiToken, BaseUrl, MarketingConfig, RestClient};
/// use marketing_api::model::Product;
///
/// let config = MarketingConfig::builder()
///     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
/// let client = RestClient::new(&config, &ApiToken::new("products-token").unwrap());
///
/// client.upsert_products(&[product]).await?;
/// client.delete_products(&["sku-1", "sku-2"]).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Attempts per request.
    tries: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client against the configured API base URL.
    #[must_use]
    pub fn new(config: &MarketingConfig, token: &ApiToken) -> Self {
        Self {
            http_client: HttpClient::new(config.api_base_url(), token, config),
            tries: 1,
        }
    }

    /// Sets the number of attempts per request (retrying 429 and 5xx responses).
    #[must_use]
    pub const fn with_tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Creates or updates products.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::Validation`] if a product is invalid, otherwise
    /// the error built from the failed call.
    pub async fn upsert_products(&self, products: &[Product]) -> Result<Value, ResultError> {
        for product in products {
            product.validate()?;
        }

        let body: Vec<Value> = products
            .iter()
            .map(|product| Value::Object(hydrate::normalize(product)))
            .collect();

        tracing::debug!(count = products.len(), "Upserting products");
        self.post(UPSERT_PRODUCTS_PATH, Value::Array(body)).await
    }

    /// Marks products as discontinued.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::Validation`] if an id is empty, otherwise the
    /// error built from the failed call.
    pub async fn delete_products(&self, product_ids: &[&str]) -> Result<Value, ResultError> {
        for product_id in product_ids {
            crate::model::require_identifier(Product::TYPE_NAME, "product_id", product_id)?;
        }

        tracing::debug!(count = product_ids.len(), "Discontinuing products");
        self.post(DISCONTINUE_PRODUCTS_PATH, Value::from(product_ids.to_vec()))
            .await
    }

    /// Confirms a placed order.
    ///
    /// Orders with a known customer id are attributed to that customer; the
    /// rest are sent as unmatched.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::Validation`] if the order is invalid, otherwise
    /// the error built from the failed call.
    pub async fn confirm_order(
        &self,
        order: &Order,
        customer_id: Option<&str>,
    ) -> Result<Value, ResultError> {
        order.validate()?;
        for item in &order.purchased_items {
            item.validate()?;
        }

        let path = confirm_order_path(customer_id);
        tracing::debug!(order_number = %order.order_number, path = %path, "Confirming order");
        self.post(&path, Value::Object(hydrate::normalize(order)))
            .await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ResultError> {
        let request = HttpRequest::post(path, body)
            .tries(self.tries)
            .build()
            .map_err(HttpError::from)?;

        let response = self.http_client.request(&request).await?;

        if response.code != SUCCESS_CODE {
            return Err(ExceptionBuilder::from_http_request_and_response(&request, &response).into());
        }

        if response.raw_body.trim().is_empty() {
            return Ok(Value::Null);
        }
        GeneralPurposeResultHandler.parse_response(&response)
    }
}

/// Builds the order confirmation path for an optional customer id.
fn confirm_order_path(customer_id: Option<&str>) -> String {
    match customer_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("v1/orders/confirm/{}", urlencoding::encode(id)),
        None => "v1/orders/unmatched".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    fn create_client() -> RestClient {
        let config = MarketingConfig::builder()
            .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config, &ApiToken::new("t").unwrap())
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }

    #[test]
    fn test_confirm_order_path_encodes_customer_id() {
        assert_eq!(
            confirm_order_path(Some("a/b c")),
            "v1/orders/confirm/a%2Fb%20c"
        );
        assert_eq!(confirm_order_path(None), "v1/orders/unmatched");
        assert_eq!(confirm_order_path(Some("  ")), "v1/orders/unmatched");
    }

    #[tokio::test]
    async fn test_invalid_product_is_rejected_before_sending() {
        let error = create_client()
            .upsert_products(&[Product::default()])
            .await
            .unwrap_err();
        assert!(matches!(error, ResultError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_product_id_is_rejected_before_sending() {
        let error = create_client()
            .delete_products(&["sku-1", ""])
            .await
            .unwrap_err();
        assert!(matches!(error, ResultError::Validation(_)));
    }
}
