//! Catalog products.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{check_currency, check_price, require_identifier};
use crate::hydrate::{get_scalar, set_scalar, Field, Hydratable, ValidationError};

/// Stock state of a product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// The product can be bought.
    #[default]
    InStock,
    /// The product is sold out.
    OutOfStock,
}

/// A product in the merchant's catalog.
///
/// # Example
///
/// ```rust
/// use marketing_api::hydrate;
/// use marketing_api::model::Product;
///
/// let product = Product {
///     url: "https://shop.example.com/p/1".to_string(),
///     product_id: "1".to_string(),
///     name: "Trail Shoe".to_string(),
///     price: Some(99.5),
///     ..Product::default()
/// };
///
/// let json = hydrate::serialize(&product).unwrap();
/// assert_eq!(hydrate::deserialize::<Product>(&json).unwrap(), product);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Product {
    /// Absolute URL of the product page.
    pub url: String,
    /// Merchant product identifier.
    pub product_id: String,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: Option<f64>,
    /// Price before discounts.
    pub list_price: Option<f64>,
    /// ISO 4217 currency of both prices.
    pub price_currency_code: Option<String>,
    /// Absolute URL of the main product image.
    pub image_url: Option<String>,
    /// Brand name.
    pub brand: Option<String>,
    /// Stock state.
    pub availability: Option<Availability>,
    /// Category paths the product belongs to.
    pub categories: Vec<String>,
}

impl Hydratable for Product {
    const TYPE_NAME: &'static str = "Product";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar(
                "url",
                |p: &Self| get_scalar(&p.url),
                |p: &mut Self, v: Value| set_scalar(&mut p.url, v),
            ),
            Field::scalar(
                "product_id",
                |p: &Self| get_scalar(&p.product_id),
                |p: &mut Self, v: Value| set_scalar(&mut p.product_id, v),
            ),
            Field::scalar(
                "name",
                |p: &Self| get_scalar(&p.name),
                |p: &mut Self, v: Value| set_scalar(&mut p.name, v),
            ),
            Field::scalar(
                "price",
                |p: &Self| get_scalar(&p.price),
                |p: &mut Self, v: Value| set_scalar(&mut p.price, v),
            ),
            Field::scalar(
                "list_price",
                |p: &Self| get_scalar(&p.list_price),
                |p: &mut Self, v: Value| set_scalar(&mut p.list_price, v),
            ),
            Field::scalar(
                "price_currency_code",
                |p: &Self| get_scalar(&p.price_currency_code),
                |p: &mut Self, v: Value| set_scalar(&mut p.price_currency_code, v),
            ),
            Field::scalar(
                "image_url",
                |p: &Self| get_scalar(&p.image_url),
                |p: &mut Self, v: Value| set_scalar(&mut p.image_url, v),
            ),
            Field::scalar(
                "brand",
                |p: &Self| get_scalar(&p.brand),
                |p: &mut Self, v: Value| set_scalar(&mut p.brand, v),
            ),
            Field::scalar(
                "availability",
                |p: &Self| get_scalar(&p.availability),
                |p: &mut Self, v: Value| set_scalar(&mut p.availability, v),
            ),
            Field::scalar(
                "categories",
                |p: &Self| get_scalar(&p.categories),
                |p: &mut Self, v: Value| set_scalar(&mut p.categories, v),
            ),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_identifier(Self::TYPE_NAME, "product_id", &self.product_id)?;
        check_price(Self::TYPE_NAME, "price", self.price)?;
        check_price(Self::TYPE_NAME, "list_price", self.list_price)?;
        check_currency(
            Self::TYPE_NAME,
            "price_currency_code",
            self.price_currency_code.as_deref(),
        )
    }
}
