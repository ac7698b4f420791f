//! Recommendation results.

use std::ops::Deref;

use serde_json::Value;

use super::{check_currency, check_price, require_identifier};
use crate::hydrate::{get_scalar, set_scalar, Field, Hydratable, ValidationError};

/// One recommended product.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultItem {
    /// Product identifier.
    pub product_id: String,
    /// Absolute URL of the product page.
    pub url: String,
    /// Display name.
    pub name: String,
    /// Absolute URL of the main product image.
    pub image_url: Option<String>,
    /// Current selling price.
    pub price: Option<f64>,
    /// Price before discounts.
    pub list_price: Option<f64>,
    /// ISO 4217 currency of both prices.
    pub price_currency_code: Option<String>,
    /// Brand name.
    pub brand: Option<String>,
}

impl Hydratable for ResultItem {
    const TYPE_NAME: &'static str = "ResultItem";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar(
                "productId",
                |r: &Self| get_scalar(&r.product_id),
                |r: &mut Self, v: Value| set_scalar(&mut r.product_id, v),
            ),
            Field::scalar(
                "url",
                |r: &Self| get_scalar(&r.url),
                |r: &mut Self, v: Value| set_scalar(&mut r.url, v),
            ),
            Field::scalar(
                "name",
                |r: &Self| get_scalar(&r.name),
                |r: &mut Self, v: Value| set_scalar(&mut r.name, v),
            ),
            Field::scalar(
                "imageUrl",
                |r: &Self| get_scalar(&r.image_url),
                |r: &mut Self, v: Value| set_scalar(&mut r.image_url, v),
            ),
            Field::scalar(
                "price",
                |r: &Self| get_scalar(&r.price),
                |r: &mut Self, v: Value| set_scalar(&mut r.price, v),
            ),
            Field::scalar(
                "listPrice",
                |r: &Self| get_scalar(&r.list_price),
                |r: &mut Self, v: Value| set_scalar(&mut r.list_price, v),
            ),
            Field::scalar(
                "priceCurrencyCode",
                |r: &Self| get_scalar(&r.price_currency_code),
                |r: &mut Self, v: Value| set_scalar(&mut r.price_currency_code, v),
            ),
            Field::scalar(
                "brand",
                |r: &Self| get_scalar(&r.brand),
                |r: &mut Self, v: Value| set_scalar(&mut r.brand, v),
            ),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_identifier(Self::TYPE_NAME, "productId", &self.product_id)?;
        check_price(Self::TYPE_NAME, "price", self.price)?;
        check_price(Self::TYPE_NAME, "listPrice", self.list_price)?;
        check_currency(
            Self::TYPE_NAME,
            "priceCurrencyCode",
            self.price_currency_code.as_deref(),
        )
    }
}

/// An ordered list of recommended products.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet(Vec<ResultItem>);

impl ResultSet {
    /// Creates a result set from items, keeping their order.
    #[must_use]
    pub const fn new(items: Vec<ResultItem>) -> Self {
        Self(items)
    }

    /// Consumes the set, returning its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<ResultItem> {
        self.0
    }
}

impl Deref for ResultSet {
    type Target = [ResultItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Recommendations for one category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationResult {
    /// The recommended products, in ranking order.
    pub result_set: ResultSet,
    /// Identifier to send back with click tracking; empty when not provided.
    pub tracking_code: String,
    /// Total number of primary results available across all batches.
    pub total_primary_count: u64,
    /// Token for fetching the next batch; empty when not provided.
    pub batch_token: String,
}
