//! Orders, their buyers and line items, and order status updates.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{check_currency, check_price, require_identifier};
use crate::hydrate::{
    get_nested, get_nested_list, get_scalar, set_nested, set_nested_list, set_scalar, Field,
    Hydratable, ValidationError,
};

/// The customer who placed an order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buyer {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal code of the billing address.
    pub post_code: Option<String>,
    /// ISO 3166 country code of the billing address.
    pub country: Option<String>,
    /// Whether the buyer accepted marketing communication.
    pub marketing_permission: bool,
}

impl Hydratable for Buyer {
    const TYPE_NAME: &'static str = "Buyer";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar(
                "first_name",
                |b: &Self| get_scalar(&b.first_name),
                |b: &mut Self, v: Value| set_scalar(&mut b.first_name, v),
            ),
            Field::scalar(
                "last_name",
                |b: &Self| get_scalar(&b.last_name),
                |b: &mut Self, v: Value| set_scalar(&mut b.last_name, v),
            ),
            Field::scalar(
                "email",
                |b: &Self| get_scalar(&b.email),
                |b: &mut Self, v: Value| set_scalar(&mut b.email, v),
            ),
            Field::scalar(
                "phone",
                |b: &Self| get_scalar(&b.phone),
                |b: &mut Self, v: Value| set_scalar(&mut b.phone, v),
            ),
            Field::scalar(
                "post_code",
                |b: &Self| get_scalar(&b.post_code),
                |b: &mut Self, v: Value| set_scalar(&mut b.post_code, v),
            ),
            Field::scalar(
                "country",
                |b: &Self| get_scalar(&b.country),
                |b: &mut Self, v: Value| set_scalar(&mut b.country, v),
            ),
            Field::scalar(
                "marketing_permission",
                |b: &Self| get_scalar(&b.marketing_permission),
                |b: &mut Self, v: Value| set_scalar(&mut b.marketing_permission, v),
            ),
        ]
    }
}

/// One purchased product within an order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineItem {
    /// Product identifier; `-1` marks shipping or other non-product lines.
    pub product_id: String,
    /// Variant identifier, when the product has variants.
    pub sku_id: Option<String>,
    /// Number of units bought.
    pub quantity: u32,
    /// Line description.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: f64,
    /// ISO 4217 currency of `unit_price`.
    pub price_currency_code: String,
}

impl Hydratable for LineItem {
    const TYPE_NAME: &'static str = "LineItem";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar(
                "product_id",
                |l: &Self| get_scalar(&l.product_id),
                |l: &mut Self, v: Value| set_scalar(&mut l.product_id, v),
            ),
            Field::scalar(
                "sku_id",
                |l: &Self| get_scalar(&l.sku_id),
                |l: &mut Self, v: Value| set_scalar(&mut l.sku_id, v),
            ),
            Field::scalar(
                "quantity",
                |l: &Self| get_scalar(&l.quantity),
                |l: &mut Self, v: Value| set_scalar(&mut l.quantity, v),
            ),
            Field::scalar(
                "name",
                |l: &Self| get_scalar(&l.name),
                |l: &mut Self, v: Value| set_scalar(&mut l.name, v),
            ),
            Field::scalar(
                "unit_price",
                |l: &Self| get_scalar(&l.unit_price),
                |l: &mut Self, v: Value| set_scalar(&mut l.unit_price, v),
            ),
            Field::scalar(
                "price_currency_code",
                |l: &Self| get_scalar(&l.price_currency_code),
                |l: &mut Self, v: Value| set_scalar(&mut l.price_currency_code, v),
            ),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_identifier(Self::TYPE_NAME, "product_id", &self.product_id)?;
        check_price(Self::TYPE_NAME, "unit_price", Some(self.unit_price))?;
        check_currency(
            Self::TYPE_NAME,
            "price_currency_code",
            Some(self.price_currency_code.as_str()),
        )
    }
}

/// A placed order, as confirmed through the REST API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Order {
    /// Merchant order number.
    pub order_number: String,
    /// Merchant status code, such as `paid` or `shipped`.
    pub order_status_code: Option<String>,
    /// Payment provider used for the order.
    pub payment_provider: Option<String>,
    /// When the order was placed.
    pub created_at: Option<DateTime<Utc>>,
    /// The buyer.
    pub customer: Option<Buyer>,
    /// The purchased lines.
    pub purchased_items: Vec<LineItem>,
}

impl Hydratable for Order {
    const TYPE_NAME: &'static str = "Order";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar(
                "order_number",
                |o: &Self| get_scalar(&o.order_number),
                |o: &mut Self, v: Value| set_scalar(&mut o.order_number, v),
            ),
            Field::scalar(
                "order_status_code",
                |o: &Self| get_scalar(&o.order_status_code),
                |o: &mut Self, v: Value| set_scalar(&mut o.order_status_code, v),
            ),
            Field::scalar(
                "payment_provider",
                |o: &Self| get_scalar(&o.payment_provider),
                |o: &mut Self, v: Value| set_scalar(&mut o.payment_provider, v),
            ),
            Field::scalar(
                "created_at",
                |o: &Self| get_scalar(&o.created_at),
                |o: &mut Self, v: Value| set_scalar(&mut o.created_at, v),
            ),
            Field::nested(
                "customer",
                Buyer::TYPE_NAME,
                |o: &Self| get_nested(&o.customer),
                |o: &mut Self, v: &Value| set_nested(&mut o.customer, v),
            ),
            Field::nested(
                "purchased_items",
                LineItem::TYPE_NAME,
                |o: &Self| get_nested_list(&o.purchased_items),
                |o: &mut Self, v: &Value| set_nested_list(&mut o.purchased_items, v),
            ),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_identifier(Self::TYPE_NAME, "order_number", &self.order_number)
    }
}

/// A status change for an existing order, sent through GraphQL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderStatus {
    /// Merchant order number.
    pub order_number: String,
    /// The new status.
    pub status: String,
    /// Payment provider, when it changed along with the status.
    pub payment_provider: Option<String>,
    /// When the status changed.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Hydratable for OrderStatus {
    const TYPE_NAME: &'static str = "OrderStatus";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar(
                "orderNumber",
                |s: &Self| get_scalar(&s.order_number),
                |s: &mut Self, v: Value| set_scalar(&mut s.order_number, v),
            ),
            Field::scalar(
                "status",
                |s: &Self| get_scalar(&s.status),
                |s: &mut Self, v: Value| set_scalar(&mut s.status, v),
            ),
            Field::scalar(
                "paymentProvider",
                |s: &Self| get_scalar(&s.payment_provider),
                |s: &mut Self, v: Value| set_scalar(&mut s.payment_provider, v),
            ),
            Field::scalar(
                "updatedAt",
                |s: &Self| get_scalar(&s.updated_at),
                |s: &mut Self, v: Value| set_scalar(&mut s.updated_at, v),
            ),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_identifier(Self::TYPE_NAME, "order_number", &self.order_number)?;
        require_identifier(Self::TYPE_NAME, "status", &self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrate::{self, HydrationError};
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_order() -> Order {
        Order {
            order_number: "M-100".to_string(),
            order_status_code: Some("paid".to_string()),
            payment_provider: Some("card".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()),
            customer: Some(Buyer {
                first_name: Some("Ada".to_string()),
                email: Some("ada@example.com".to_string()),
                marketing_permission: true,
                ..Buyer::default()
            }),
            purchased_items: vec![LineItem {
                product_id: "sku-1".to_string(),
                quantity: 2,
                name: "Sock".to_string(),
                unit_price: 4.5,
                price_currency_code: "EUR".to_string(),
                ..LineItem::default()
            }],
        }
    }

    #[test]
    fn test_order_survives_serialization() {
        let order = sample_order();
        let json = hydrate::serialize(&order).unwrap();
        assert!(json.contains(r#""created_at":"2024-05-01T12:30:00Z""#));
        assert_eq!(hydrate::deserialize::<Order>(&json).unwrap(), order);
    }

    #[test]
    fn test_invalid_line_item_is_reported_with_its_path() {
        let source = json!({
            "order_number": "M-101",
            "purchased_items": [{"product_id": "sku-1", "unit_price": 1.0, "price_currency_code": "euro"}]
        });
        let error = hydrate::hydrate::<Order>(&source).unwrap_err();

        assert!(matches!(error, HydrationError::Nested { ref field, .. } if field == "purchased_items"));
        assert!(matches!(
            error.root_cause(),
            HydrationError::Validation(ValidationError { type_name: "LineItem", .. })
        ));
    }

    #[test]
    fn test_malformed_timestamp_is_invalid_value() {
        let error = hydrate::hydrate::<Order>(&json!({"order_number": "M-1", "created_at": "yesterday"}))
            .unwrap_err();
        assert!(matches!(error, HydrationError::InvalidValue { ref field, .. } if field == "created_at"));
    }

    #[test]
    fn test_order_status_uses_camel_case_keys() {
        let status = OrderStatus {
            order_number: "M-100".to_string(),
            status: "shipped".to_string(),
            ..OrderStatus::default()
        };
        let normalized = hydrate::normalize(&status);
        assert_eq!(normalized["orderNumber"], json!("M-100"));
        assert_eq!(normalized["paymentProvider"], Value::Null);
    }
}
