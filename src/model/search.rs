//! Search results.
//!
//! The shape of a search document depends on the fields an account indexes,
//! so these types are decoded with serde: every member is optional, lists
//! that are absent or `null` decode as empty and unknown members are ignored. Product hits keep any
//! member they do not model in [`SearchHit::extra`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The `search` payload of a search query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    /// URL to redirect to instead of showing results, when a rule matched.
    pub redirect: Option<String>,
    /// The query as interpreted by the engine.
    pub query: Option<String>,
    /// Rules that shaped the result.
    pub explain: Option<Explain>,
    /// Matching products.
    pub products: Option<SearchProducts>,
}

/// Why a result looks the way it does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Explain {
    /// Merchandising rules applied to the query.
    #[serde(deserialize_with = "null_as_empty")]
    pub matched_rules: Vec<MatchedRule>,
}

/// A merchandising rule applied to a query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchedRule {
    /// Rule identifier.
    pub id: Option<String>,
    /// Rule name.
    pub name: Option<String>,
}

/// A page of matching products.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchProducts {
    /// Total number of matches.
    pub total: Option<u64>,
    /// Page size.
    pub size: Option<u64>,
    /// Offset of the first hit.
    pub from: Option<u64>,
    /// Field hits were collapsed on.
    pub collapse: Option<String>,
    /// Whether fuzzy matching was used.
    pub fuzzy: Option<bool>,
    /// Category the search was restricted to.
    pub category_id: Option<String>,
    /// Path of that category.
    pub category_path: Option<String>,
    /// The hits on this page.
    #[serde(deserialize_with = "null_as_empty")]
    pub hits: Vec<SearchHit>,
    /// Facets computed over all matches.
    #[serde(deserialize_with = "null_as_empty")]
    pub facets: Vec<Facet>,
}

/// One matching product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchHit {
    /// Product identifier.
    pub product_id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Absolute URL of the product page.
    pub url: Option<String>,
    /// Absolute URL of the main product image.
    pub image_url: Option<String>,
    /// Current selling price.
    pub price: Option<f64>,
    /// Price before discounts.
    pub list_price: Option<f64>,
    /// Brand name.
    pub brand: Option<String>,
    /// Every other member of the hit.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A facet computed over the matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facet {
    /// Facet identifier.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Indexed field the facet is computed on.
    pub field: Option<String>,
    /// Facet kind, such as `terms` or `stats`.
    #[serde(rename = "type")]
    pub facet_type: Option<String>,
    /// Term buckets, for term facets.
    #[serde(deserialize_with = "null_as_empty")]
    pub data: Vec<FacetValue>,
    /// Lowest value, for stats facets.
    pub min: Option<f64>,
    /// Highest value, for stats facets.
    pub max: Option<f64>,
}

/// One bucket of a term facet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetValue {
    /// The term.
    pub value: Option<String>,
    /// Number of matches carrying the term.
    pub count: Option<u64>,
    /// Whether the term is currently selected as a filter.
    pub selected: Option<bool>,
}

/// GraphQL sends `null` for empty nullable lists.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_members_default() {
        let result: SearchResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result, SearchResult::default());
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let result: SearchResult = serde_json::from_value(json!({
            "explain": {"matchedRules": null},
            "products": {
                "total": 0,
                "hits": null,
                "facets": [{"id": "brand", "data": null}]
            }
        }))
        .unwrap();

        assert!(result.explain.unwrap().matched_rules.is_empty());
        let products = result.products.unwrap();
        assert_eq!(products.total, Some(0));
        assert!(products.hits.is_empty());
        assert!(products.facets[0].data.is_empty());
    }

    #[test]
    fn test_hits_keep_unmodelled_members() {
        let hit: SearchHit = serde_json::from_value(json!({
            "productId": "p-1",
            "price": 10.5,
            "customFields": {"material": "wool"}
        }))
        .unwrap();

        assert_eq!(hit.product_id.as_deref(), Some("p-1"));
        assert_eq!(hit.extra["customFields"], json!({"material": "wool"}));
    }

    #[test]
    fn test_facet_type_is_renamed() {
        let facet: Facet = serde_json::from_value(json!({
            "id": "brand",
            "type": "terms",
            "data": [{"value": "Acme", "count": 3, "selected": false}]
        }))
        .unwrap();

        assert_eq!(facet.facet_type.as_deref(), Some("terms"));
        assert_eq!(facet.data[0].count, Some(3));
    }
}
