//! Domain models exchanged with the marketing API.
//!
//! Types sent to or read from the API through the hydrator implement
//! [`Hydratable`](crate::hydrate::Hydratable) with an explicit field table.
//! Wire names follow the endpoint a type travels through: REST payloads
//! (`Product`, `Order` and its parts) use `snake_case`, GraphQL payloads
//! (`Category`, `OrderStatus`, `ResultItem`) use `camelCase`.
//!
//! Search results vary per account and are decoded with serde instead; see
//! [`SearchResult`].

mod category;
mod order;
mod product;
mod result;
mod search;

pub use category::Category;
pub use order::{Buyer, LineItem, Order, OrderStatus};
pub use product::{Availability, Product};
pub use result::{RecommendationResult, ResultItem, ResultSet};
pub use search::{
    Explain, Facet, FacetValue, MatchedRule, SearchHit, SearchProducts, SearchResult,
};

use crate::hydrate::ValidationError;

/// Rejects empty or whitespace-only identifiers.
pub(crate) fn require_identifier(
    type_name: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(type_name, field, "must not be empty"));
    }
    Ok(())
}

/// Rejects prices that are negative, NaN or infinite.
pub(crate) fn check_price(
    type_name: &'static str,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    match value {
        Some(price) if !price.is_finite() || price < 0.0 => Err(ValidationError::new(
            type_name,
            field,
            format!("must be a non-negative amount, got {price}"),
        )),
        _ => Ok(()),
    }
}

/// Accepts three-letter uppercase ISO 4217 style codes.
pub(crate) fn check_currency(
    type_name: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        Some(code) if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) => {
            Err(ValidationError::new(
                type_name,
                field,
                format!("must be a three-letter uppercase currency code, got '{code}'"),
            ))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_identifier() {
        assert!(require_identifier("Product", "product_id", "p-1").is_ok());
        assert!(require_identifier("Product", "product_id", "  ").is_err());
    }

    #[test]
    fn test_check_price() {
        assert!(check_price("Product", "price", None).is_ok());
        assert!(check_price("Product", "price", Some(0.0)).is_ok());
        assert!(check_price("Product", "price", Some(-0.01)).is_err());
        assert!(check_price("Product", "price", Some(f64::NAN)).is_err());
        assert!(check_price("Product", "price", Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_check_currency() {
        assert!(check_currency("Product", "price_currency_code", Some("EUR")).is_ok());
        assert!(check_currency("Product", "price_currency_code", None).is_ok());

        let error = check_currency("Product", "price_currency_code", Some("eur")).unwrap_err();
        assert_eq!(error.field, "price_currency_code");
        assert!(check_currency("Product", "price_currency_code", Some("EURO")).is_err());
    }
}
