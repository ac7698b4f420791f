//! Object hydration driven by explicit field tables.
//!
//! This module converts between typed domain objects and their *normalized
//! form*: the JSON object built from a type's declared fields.
//!
//! # Overview
//!
//! - [`Hydratable`]: The trait a type implements to declare its field table
//! - [`Field`]: One entry of that table (name, getter, scalar or nested setter)
//! - [`normalize`] / [`serialize`]: Typed value to JSON
//! - [`hydrate`] / [`deserialize`]: JSON to typed value
//!
//! # Rules
//!
//! - Only fields listed in the table are emitted or accepted.
//! - A source key the table does not declare fails the whole hydration with
//!   [`HydrationError::UnknownField`]. The check runs before any setter.
//! - A declared field missing from the source keeps its `Default` value.
//! - [`Hydratable::validate`] runs once the object is fully populated.
//!
//! # Example
//!
//! ```rust
//! use marketing_api::hydrate;
//! use marketing_api::model::Category;
//!
//! let category: Category = hydrate::deserialize(r#"{"id":"10","name":"Shoes"}"#).unwrap();
//! assert_eq!(category.name, "Shoes");
//!
//! let json = hydrate::serialize(&category).unwrap();
//! let again: Category = hydrate::deserialize(&json).unwrap();
//! assert_eq!(category, again);
//! ```

mod descriptor;
mod errors;

pub use descriptor::{
    get_nested, get_nested_list, get_scalar, set_nested, set_nested_list, set_scalar, Field,
    Getter, Hydratable, Setter,
};
pub use errors::{HydrationError, ValidationError};

use serde_json::{Map, Value};

/// Builds the normalized form of `value`, in field-table order.
#[must_use]
pub fn normalize<T: Hydratable>(value: &T) -> Map<String, Value> {
    T::fields()
        .into_iter()
        .map(|field| (field.name.to_string(), (field.getter)(value)))
        .collect()
}

/// Encodes the normalized form of `value` as a JSON string.
///
/// # Errors
///
/// Returns [`HydrationError::Decode`] if the normalized form cannot be encoded.
pub fn serialize<T: Hydratable>(value: &T) -> Result<String, HydrationError> {
    Ok(serde_json::to_string(&Value::Object(normalize(value)))?)
}

/// Decodes a JSON string and hydrates it into `T`.
///
/// # Errors
///
/// Returns [`HydrationError::Decode`] for malformed JSON, otherwise any error
/// from [`hydrate`].
pub fn deserialize<T: Hydratable>(json: &str) -> Result<T, HydrationError> {
    let value: Value = serde_json::from_str(json)?;
    hydrate(&value)
}

/// Hydrates a decoded JSON object into `T`.
///
/// # Errors
///
/// Returns [`HydrationError`] if `source` is not an object, carries an
/// undeclared key, holds a value of the wrong shape, or fails validation.
pub fn hydrate<T: Hydratable>(source: &Value) -> Result<T, HydrationError> {
    let Value::Object(members) = source else {
        return Err(HydrationError::NotAnObject {
            type_name: T::TYPE_NAME,
            found: errors::json_kind(source),
        });
    };

    let fields = T::fields();

    if let Some(unknown) = members
        .keys()
        .find(|key| !fields.iter().any(|field| field.name == key.as_str()))
    {
        return Err(HydrationError::UnknownField {
            type_name: T::TYPE_NAME,
            field: unknown.clone(),
        });
    }

    let mut target = T::default();
    for (key, value) in members {
        let Some(field) = fields.iter().find(|field| field.name == key.as_str()) else {
            continue;
        };
        match &field.setter {
            Setter::Scalar(set) => {
                set(&mut target, value.clone()).map_err(|source| HydrationError::InvalidValue {
                    type_name: T::TYPE_NAME,
                    field: key.clone(),
                    source,
                })?;
            }
            Setter::Nested { type_name, set } => {
                set(&mut target, value).map_err(|source| HydrationError::Nested {
                    type_name: T::TYPE_NAME,
                    field: key.clone(),
                    nested_type: *type_name,
                    source: Box::new(source),
                })?;
            }
        }
    }

    target.validate()?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Dimension {
        unit: String,
        value: f64,
    }

    impl Hydratable for Dimension {
        const TYPE_NAME: &'static str = "Dimension";

        fn fields() -> Vec<Field<Self>> {
            vec![
                Field::scalar(
                    "unit",
                    |d: &Self| get_scalar(&d.unit),
                    |d: &mut Self, v: Value| set_scalar(&mut d.unit, v),
                ),
                Field::scalar(
                    "value",
                    |d: &Self| get_scalar(&d.value),
                    |d: &mut Self, v: Value| set_scalar(&mut d.value, v),
                ),
            ]
        }

        fn validate(&self) -> Result<(), ValidationError> {
            if self.value < 0.0 {
                return Err(ValidationError::new("Dimension", "value", "must be non-negative"));
            }
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Parcel {
        id: String,
        height: Option<Dimension>,
        extras: Vec<Dimension>,
    }

    impl Hydratable for Parcel {
        const TYPE_NAME: &'static str = "Parcel";

        fn fields() -> Vec<Field<Self>> {
            vec![
                Field::scalar(
                    "id",
                    |p: &Self| get_scalar(&p.id),
                    |p: &mut Self, v: Value| set_scalar(&mut p.id, v),
                ),
                Field::nested(
                    "height",
                    Dimension::TYPE_NAME,
                    |p: &Self| get_nested(&p.height),
                    |p: &mut Self, v: &Value| set_nested(&mut p.height, v),
                ),
                Field::nested(
                    "extras",
                    Dimension::TYPE_NAME,
                    |p: &Self| get_nested_list(&p.extras),
                    |p: &mut Self, v: &Value| set_nested_list(&mut p.extras, v),
                ),
            ]
        }
    }

    #[test]
    fn test_normalize_follows_table_order() {
        let parcel = Parcel {
            id: "p-1".to_string(),
            ..Parcel::default()
        };
        let normalized = normalize(&parcel);
        let keys: Vec<&str> = normalized.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "height", "extras"]);
        assert_eq!(normalized["height"], Value::Null);
        assert_eq!(normalized["extras"], json!([]));
    }

    #[test]
    fn test_hydrate_populates_nested_values() {
        let source = json!({
            "id": "p-2",
            "height": {"unit": "cm", "value": 12.5},
            "extras": [{"unit": "kg", "value": 3.0}]
        });

        let parcel: Parcel = hydrate(&source).unwrap();
        assert_eq!(parcel.id, "p-2");
        assert_eq!(parcel.height.as_ref().unwrap().unit, "cm");
        assert_eq!(parcel.extras.len(), 1);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let parcel: Parcel = hydrate(&json!({"id": "p-3"})).unwrap();
        assert!(parcel.height.is_none());
        assert!(parcel.extras.is_empty());
    }

    #[test]
    fn test_unknown_key_is_rejected_before_setters_run() {
        // "height" is malformed, but the unknown key is reported first.
        let source = json!({"height": 3, "bogus": "x"});
        let error = hydrate::<Parcel>(&source).unwrap_err();
        assert!(matches!(
            error,
            HydrationError::UnknownField { type_name: "Parcel", ref field } if field == "bogus"
        ));
    }

    #[test]
    fn test_unknown_key_in_nested_object_is_wrapped() {
        let source = json!({"height": {"unit": "cm", "depth": 1}});
        let error = hydrate::<Parcel>(&source).unwrap_err();
        assert!(matches!(
            error,
            HydrationError::Nested { ref field, nested_type: "Dimension", .. } if field == "height"
        ));
        assert!(matches!(
            error.root_cause(),
            HydrationError::UnknownField { type_name: "Dimension", .. }
        ));
    }

    #[test]
    fn test_invalid_scalar_value() {
        let error = hydrate::<Dimension>(&json!({"value": "tall"})).unwrap_err();
        assert!(matches!(
            error,
            HydrationError::InvalidValue { type_name: "Dimension", ref field, .. } if field == "value"
        ));
    }

    #[test]
    fn test_non_object_source_is_rejected() {
        let error = hydrate::<Dimension>(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(
            error,
            HydrationError::NotAnObject { found: "array", .. }
        ));

        let error = hydrate::<Parcel>(&json!({"extras": "none"})).unwrap_err();
        assert!(matches!(
            error.root_cause(),
            HydrationError::NotAnObject { found: "string", .. }
        ));
    }

    #[test]
    fn test_validation_runs_after_population() {
        let error = hydrate::<Dimension>(&json!({"unit": "cm", "value": -1.0})).unwrap_err();
        assert!(matches!(error, HydrationError::Validation(_)));
    }

    #[test]
    fn test_deserialize_reports_malformed_json() {
        let error = deserialize::<Dimension>("{unit:").unwrap_err();
        assert!(matches!(error, HydrationError::Decode(_)));
    }

    #[test]
    fn test_serialize_then_deserialize_nested_object() {
        let parcel = Parcel {
            id: "p-4".to_string(),
            height: Some(Dimension {
                unit: "cm".to_string(),
                value: 4.0,
            }),
            extras: vec![Dimension {
                unit: "kg".to_string(),
                value: 0.5,
            }],
        };

        let json = serialize(&parcel).unwrap();
        let restored: Parcel = deserialize(&json).unwrap();
        assert_eq!(parcel, restored);
    }
}
