//! Category recommendation results.

use serde_json::Value;

use super::GraphqlResultHandler;
use crate::hydrate;
use crate::model::{RecommendationResult, ResultItem, ResultSet};
use crate::results::errors::ResultError;
use crate::results::exception_builder::value_to_text;
use crate::results::locator;

const CONTEXT: &str = "recommendation result";

/// Reads the `category` payload of a recommendation query.
///
/// `resultId` and `batchToken` are optional and default to an empty string.
/// `totalPrimaryCount` and `primary` are required; every `primary` element
/// is hydrated into a [`ResultItem`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendationResultHandler;

impl GraphqlResultHandler for RecommendationResultHandler {
    type Output = RecommendationResult;

    fn parse_query_result(&self, data: &Value) -> Result<RecommendationResult, ResultError> {
        let category = locator::require(data, "category", CONTEXT)?;

        let tracking_code = optional_text(category, "resultId");
        let batch_token = optional_text(category, "batchToken");

        let total_primary_count = category
            .get("totalPrimaryCount")
            .filter(|v| !v.is_null())
            .ok_or_else(|| ResultError::missing_field("totalPrimaryCount", CONTEXT))?;
        let total_primary_count: u64 = serde_json::from_value(total_primary_count.clone())
            .map_err(|source| hydrate::HydrationError::InvalidValue {
                type_name: "RecommendationResult",
                field: "totalPrimaryCount".to_string(),
                source,
            })?;

        let primary = category
            .get("primary")
            .and_then(Value::as_array)
            .ok_or_else(|| ResultError::missing_field("primary", CONTEXT))?;

        let result_set = primary
            .iter()
            .map(hydrate::hydrate::<ResultItem>)
            .collect::<Result<ResultSet, _>>()?;

        tracing::debug!(
            items = result_set.len(),
            total_primary_count,
            "Parsed category recommendations"
        );

        Ok(RecommendationResult {
            result_set,
            tracking_code,
            total_primary_count,
            batch_token,
        })
    }
}

fn optional_text(category: &Value, field: &str) -> String {
    category
        .get(field)
        .filter(|v| !v.is_null())
        .map(value_to_text)
        .unwrap_or_default()
}
