//! Search results.

use serde_json::Value;

use super::GraphqlResultHandler;
use crate::hydrate::HydrationError;
use crate::model::SearchResult;
use crate::results::errors::ResultError;
use crate::results::locator;

/// Decodes the `search` payload of a search query into a [`SearchResult`].
///
/// Absent members default; members of the wrong shape fail with
/// [`HydrationError::InvalidValue`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchResultHandler;

impl GraphqlResultHandler for SearchResultHandler {
    type Output = SearchResult;

    fn parse_query_result(&self, data: &Value) -> Result<SearchResult, ResultError> {
        let search = locator::require(data, "search", "search result")?;

        let result: SearchResult =
            serde_json::from_value(search.clone()).map_err(|source| {
                HydrationError::InvalidValue {
                    type_name: "SearchResult",
                    field: "search".to_string(),
                    source,
                }
            })?;

        tracing::debug!(
            total = ?result.products.as_ref().and_then(|p| p.total),
            redirect = ?result.redirect,
            "Parsed search result"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_products_and_facets() {
        let data = json!({"search": {
            "query": "shoe",
            "explain": {"matchedRules": [{"id": "r1", "name": "Boost"}]},
            "products": {
                "total": 1,
                "size": 24,
                "from": 0,
                "hits": [{"productId": "p-1", "name": "Trail Shoe"}],
                "facets": [{"id": "brand", "type": "terms", "data": []}]
            }
        }});

        let result = SearchResultHandler.parse_query_result(&data).unwrap();
        assert_eq!(result.query.as_deref(), Some("shoe"));
        let products = result.products.unwrap();
        assert_eq!(products.total, Some(1));
        assert_eq!(products.hits[0].name.as_deref(), Some("Trail Shoe"));
        assert_eq!(result.explain.unwrap().matched_rules.len(), 1);
    }

    #[test]
    fn test_redirect_only_result() {
        let data = json!({"search": {"redirect": "https://shop.example.com/sale"}});
        let result = SearchResultHandler.parse_query_result(&data).unwrap();
        assert!(result.products.is_none());
        assert_eq!(result.redirect.as_deref(), Some("https://shop.example.com/sale"));
    }

    #[test]
    fn test_null_lists_are_accepted() {
        let data = json!({"search": {
            "products": {"total": 0, "hits": null, "facets": null},
            "explain": {"matchedRules": null}
        }});

        let result = SearchResultHandler.parse_query_result(&data).unwrap();
        let products = result.products.unwrap();
        assert!(products.hits.is_empty());
        assert!(products.facets.is_empty());
        assert!(result.explain.unwrap().matched_rules.is_empty());
    }

    #[test]
    fn test_shape_mismatch_is_invalid_value() {
        let data = json!({"search": {"products": {"total": "many"}}});
        let error = SearchResultHandler.parse_query_result(&data).unwrap_err();
        assert!(matches!(
            error,
            ResultError::Hydration(HydrationError::InvalidValue { type_name: "SearchResult", .. })
        ));
    }

    #[test]
    fn test_missing_search_payload() {
        let error = SearchResultHandler
            .parse_query_result(&json!({"other": 1}))
            .unwrap_err();
        assert_eq!(error.to_string(), "No search found in search result");
    }
}
