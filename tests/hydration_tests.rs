//! Integration tests for object hydration.
//!
//! These tests exercise the public hydrator against the shipped models.

use chrono::{TimeZone, Utc};
use marketing_api::hydrate::{self, HydrationError};
use marketing_api::model::{Buyer, Category, LineItem, Order, OrderStatus, Product};
use marketing_api::ResultError;
use serde_json::json;

fn sample_product() -> Product {
    Product {
        url: "https://shop.example.com/products/trail-shoe".to_string(),
        product_id: "sku-100".to_string(),
        name: "Trail Shoe".to_string(),
        price: Some(129.0),
        ..Product::default()
    }
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_product_serialize_then_deserialize_is_equal() {
    let product = sample_product();

    let json = hydrate::serialize(&product).unwrap();
    let restored: Product = hydrate::deserialize(&json).unwrap();

    assert_eq!(restored, product);
}

#[test]
fn test_fractional_prices_survive_serialization_exactly() {
    let prices = [
        904.889_999_140_816_9,
        972.953_788_753_714_5,
        212.926_808_252_423_83,
        0.1,
        19.99,
    ];

    for price in prices {
        let product = Product {
            price: Some(price),
            list_price: Some(price * 1.25),
            ..sample_product()
        };
        let restored: Product = hydrate::deserialize(&hydrate::serialize(&product).unwrap()).unwrap();
        assert_eq!(
            restored.price.map(f64::to_bits),
            Some(price.to_bits()),
            "price {price} changed"
        );
        assert_eq!(restored, product);
    }

    let item = LineItem {
        product_id: "sku-1".to_string(),
        quantity: 3,
        unit_price: 904.889_999_140_816_9,
        price_currency_code: "EUR".to_string(),
        ..LineItem::default()
    };
    let restored: LineItem = hydrate::deserialize(&hydrate::serialize(&item).unwrap()).unwrap();
    assert_eq!(restored.unit_price.to_bits(), item.unit_price.to_bits());
}

#[test]
fn test_fully_populated_models_survive_serialization() {
    let product = Product {
        list_price: Some(149.0),
        price_currency_code: Some("EUR".to_string()),
        image_url: Some("https://cdn.example.com/shoe.jpg".to_string()),
        brand: Some("Acme".to_string()),
        categories: vec!["/shoes".to_string(), "/sale".to_string()],
        ..sample_product()
    };
    let json = hydrate::serialize(&product).unwrap();
    assert_eq!(hydrate::deserialize::<Product>(&json).unwrap(), product);

    let category = Category {
        id: "10".to_string(),
        parent_id: Some("1".to_string()),
        name: "Shoes".to_string(),
        url_path: Some("/shoes".to_string()),
        available: Some(true),
    };
    let json = hydrate::serialize(&category).unwrap();
    assert_eq!(hydrate::deserialize::<Category>(&json).unwrap(), category);

    let status = OrderStatus {
        order_number: "M-1".to_string(),
        status: "shipped".to_string(),
        payment_provider: Some("invoice".to_string()),
        updated_at: Some(Utc.with_ymd_and_hms(2024, 2, 29, 8, 0, 0).unwrap()),
    };
    let json = hydrate::serialize(&status).unwrap();
    assert_eq!(hydrate::deserialize::<OrderStatus>(&json).unwrap(), status);
}

#[test]
fn test_order_with_nested_buyer_and_items_survives_serialization() {
    let order = Order {
        order_number: "M-200".to_string(),
        customer: Some(Buyer {
            email: Some("buyer@example.com".to_string()),
            country: Some("FI".to_string()),
            ..Buyer::default()
        }),
        purchased_items: vec![
            LineItem {
                product_id: "sku-1".to_string(),
                quantity: 1,
                name: "Sock".to_string(),
                unit_price: 5.0,
                price_currency_code: "EUR".to_string(),
                ..LineItem::default()
            },
            LineItem {
                product_id: "-1".to_string(),
                quantity: 1,
                name: "Shipping".to_string(),
                unit_price: 4.9,
                price_currency_code: "EUR".to_string(),
                ..LineItem::default()
            },
        ],
        ..Order::default()
    };

    let json = hydrate::serialize(&order).unwrap();
    assert_eq!(hydrate::deserialize::<Order>(&json).unwrap(), order);
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[test]
fn test_unknown_key_is_rejected() {
    let mut normalized = hydrate::normalize(&sample_product());
    normalized.insert("bogus".to_string(), json!("x"));
    let json = serde_json::Value::Object(normalized).to_string();

    let error = hydrate::deserialize::<Product>(&json).unwrap_err();
    assert!(matches!(
        error,
        HydrationError::UnknownField { type_name: "Product", ref field } if field == "bogus"
    ));
}

#[test]
fn test_unknown_key_in_nested_list_is_rejected() {
    let source = json!({
        "order_number": "M-300",
        "purchased_items": [{"product_id": "sku-1", "discount": 0.1}]
    });

    let error = hydrate::hydrate::<Order>(&source).unwrap_err();
    assert!(matches!(
        error.root_cause(),
        HydrationError::UnknownField { type_name: "LineItem", .. }
    ));
}

#[test]
fn test_hydration_errors_convert_into_result_errors() {
    let error: ResultError = hydrate::deserialize::<Product>(r#"{"product_id":"p","price":"free"}"#)
        .unwrap_err()
        .into();
    assert!(matches!(error, ResultError::Hydration(_)));

    let error: ResultError = hydrate::deserialize::<Product>(r#"{"product_id":""}"#)
        .unwrap_err()
        .into();
    assert!(matches!(error, ResultError::Validation(_)));
}
