//! GraphQL client implementation for the marketing API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! queries and rendering their results through a
//! [`ResultHandler`](crate::results::ResultHandler).

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::config::{ApiToken, MarketingConfig};
use crate::hydrate::{self, Hydratable};
use crate::model::{Category, OrderStatus, RecommendationResult, SearchResult};
use crate::results::{
    CategoryUpdateResultHandler, OrderResultHandler, RecommendationResultHandler, ResultError,
    ResultHandler, SearchResultHandler,
};

/// Path of the GraphQL endpoint, relative to the GraphQL base URL.
pub const GRAPHQL_PATH: &str = "v1/graphql";

const UPSERT_CATEGORIES_MUTATION: &str = "mutation UpsertCategories($categories: [InputCategory]!) { \
    upsertCategories(categories: $categories) { \
    categoryResult { errors { field message } category { id name parentId urlPath available } } } }";

const UPDATE_ORDER_STATUS_MUTATION: &str = "mutation UpdateOrderStatus($orderNumber: String!, \
    $status: String!, $paymentProvider: String, $updatedAt: String) { \
    order: updateOrderStatus(number: $orderNumber, params: { orderStatus: $status, \
    paymentProvider: $paymentProvider, statusDate: $updatedAt }) { id } }";

/// GraphQL API client for the marketing API.
///
/// Every call posts `{"query", "variables"}` to [`GRAPHQL_PATH`] and hands
/// the response to a result handler. The convenience methods pair a query
/// with the handler that understands its payload.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use marketing_api::{ApiToken, BaseUrl, GraphqlClient, MarketingConfig};
/// use marketing_api::model::Category;
///
/// let config = MarketingConfig::builder()
///     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
/// let client = GraphqlClient::new(&config, &ApiToken::new("graphql-token").unwrap());
///
/// let id = client
///     .upsert_categories(&[Category { id: "10".into(), name: "Shoes".into(), ..Default::default() }])
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Attempts per request.
    tries: u32,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client against the configured GraphQL base URL.
    #[must_use]
    pub fn new(config: &MarketingConfig, token: &ApiToken) -> Self {
        Self {
            http_client: HttpClient::new(config.graphql_base_url(), token, config),
            tries: 1,
        }
    }

    /// Sets the number of attempts per request (retrying 429 and 5xx responses).
    #[must_use]
    pub const fn with_tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Sends a GraphQL query and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::Transport`] if the request cannot be sent.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<Value>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ResultError> {
        let body = json!({
            "query": query,
            "variables": variables
        });

        let mut builder = HttpRequest::post(GRAPHQL_PATH, body).tries(self.tries);
        if let Some(headers) = headers {
            builder = builder.headers(headers);
        }

        let request = builder.build().map_err(crate::clients::HttpError::from)?;
        Ok(self.http_client.request(&request).await?)
    }

    /// Sends a GraphQL query and renders the response with `handler`.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError`] if the request fails or the handler rejects
    /// the response.
    pub async fn execute<H: ResultHandler>(
        &self,
        query: &str,
        variables: Option<Value>,
        handler: &H,
    ) -> Result<H::Output, ResultError> {
        let response = self.query(query, variables, None).await?;
        handler.render(&response)
    }

    /// Creates or updates categories, returning the id the API reports.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::Validation`] if a category is invalid, otherwise
    /// any error from [`CategoryUpdateResultHandler`].
    pub async fn upsert_categories(&self, categories: &[Category]) -> Result<String, ResultError> {
        for category in categories {
            category.validate()?;
        }

        let variables = json!({
            "categories": categories
                .iter()
                .map(|category| Value::Object(hydrate::normalize(category)))
                .collect::<Vec<_>>()
        });

        tracing::debug!(count = categories.len(), "Upserting categories");
        self.execute(
            UPSERT_CATEGORIES_MUTATION,
            Some(variables),
            &CategoryUpdateResultHandler,
        )
        .await
    }

    /// Updates the status of an existing order.
    ///
    /// Returns the identifier the API reports for the update, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::Validation`] if the status is invalid, otherwise
    /// any error from [`OrderResultHandler`].
    pub async fn update_order_status(
        &self,
        status: &OrderStatus,
    ) -> Result<Option<String>, ResultError> {
        status.validate()?;

        let variables = Value::Object(hydrate::normalize(status));

        tracing::debug!(order_number = %status.order_number, "Updating order status");
        self.execute(
            UPDATE_ORDER_STATUS_MUTATION,
            Some(variables),
            &OrderResultHandler,
        )
        .await
    }

    /// Runs a category recommendation query.
    ///
    /// The query must select `category { resultId batchToken totalPrimaryCount primary { ... } }`
    /// with `primary` fields matching [`ResultItem`](crate::model::ResultItem).
    ///
    /// # Errors
    ///
    /// Returns any error from [`RecommendationResultHandler`].
    pub async fn category_recommendations(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<RecommendationResult, ResultError> {
        self.execute(query, variables, &RecommendationResultHandler)
            .await
    }

    /// Runs a search query.
    ///
    /// # Errors
    ///
    /// Returns any error from [`SearchResultHandler`].
    pub async fn search(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<SearchResult, ResultError> {
        self.execute(query, variables, &SearchResultHandler).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    fn create_config() -> MarketingConfig {
        MarketingConfig::builder()
            .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
            .graphql_base_url(BaseUrl::new("https://search.example.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
    }

    #[test]
    fn test_graphql_client_uses_graphql_base_url() {
        let client = GraphqlClient::new(&create_config(), &ApiToken::new("t").unwrap());
        assert_eq!(
            client.http_client.base_url().as_ref(),
            "https://search.example.com"
        );
        assert_eq!(client.tries, 1);
        assert_eq!(client.with_tries(3).tries, 3);
    }

    #[test]
    fn test_mutations_name_their_payload_fields() {
        assert!(UPSERT_CATEGORIES_MUTATION.contains("upsertCategories"));
        assert!(UPSERT_CATEGORIES_MUTATION.contains("categoryResult"));
        assert!(UPDATE_ORDER_STATUS_MUTATION.contains("$orderNumber"));
        assert!(UPDATE_ORDER_STATUS_MUTATION.contains("{ id }"));
    }

    #[tokio::test]
    async fn test_invalid_category_is_rejected_before_sending() {
        let client = GraphqlClient::new(&create_config(), &ApiToken::new("t").unwrap());
        let error = client
            .upsert_categories(&[Category::default()])
            .await
            .unwrap_err();
        assert!(matches!(error, ResultError::Validation(_)));
    }
}
