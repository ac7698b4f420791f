//! Field descriptor tables.
//!
//! A [`Hydratable`] type lists its fields once, as a table of [`Field`]
//! entries. Each entry pairs a wire name with a getter and a setter; the
//! setter is tagged as scalar (decoded with serde) or nested (hydrated
//! recursively through another descriptor table). Because the table is made
//! of plain function pointers, a field without a matching setter is a
//! compile error rather than a runtime failure.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::errors::{HydrationError, ValidationError};

/// A type that can be built from, and flattened into, a JSON object through
/// an explicit field table.
///
/// # Example
///
/// ```rust
/// use marketing_api::hydrate::{self, Field, Hydratable};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Tag {
///     name: String,
///     weight: Option<u32>,
/// }
///
/// impl Hydratable for Tag {
///     const TYPE_NAME: &'static str = "Tag";
///
///     fn fields() -> Vec<Field<Self>> {
///         vec![
///             Field::scalar(
///                 "name",
///                 |t: &Self| hydrate::get_scalar(&t.name),
///                 |t: &mut Self, v: serde_json::Value| hydrate::set_scalar(&mut t.name, v),
///             ),
///             Field::scalar(
///                 "weight",
///                 |t: &Self| hydrate::get_scalar(&t.weight),
///                 |t: &mut Self, v: serde_json::Value| hydrate::set_scalar(&mut t.weight, v),
///             ),
///         ]
///     }
/// }
///
/// let tag: Tag = hydrate::deserialize(r#"{"name":"sale"}"#).unwrap();
/// assert_eq!(tag, Tag { name: "sale".to_string(), weight: None });
/// ```
pub trait Hydratable: Default {
    /// The type name used in error messages.
    const TYPE_NAME: &'static str;

    /// The field table, in serialization order.
    fn fields() -> Vec<Field<Self>>;

    /// Checks the populated value. Runs after every field has been set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the value violates a constraint.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Reads a field into its normalized JSON form.
pub type Getter<T> = fn(&T) -> Value;

/// How a field is written during hydration.
pub enum Setter<T> {
    /// A scalar decoded with serde.
    Scalar(fn(&mut T, Value) -> Result<(), serde_json::Error>),
    /// A nested hydratable object or list of objects.
    Nested {
        /// The nested type's name, for diagnostics.
        type_name: &'static str,
        /// Hydrates the nested value into the field.
        set: fn(&mut T, &Value) -> Result<(), HydrationError>,
    },
}

/// One entry of a descriptor table.
pub struct Field<T> {
    /// The wire name of the field.
    pub name: &'static str,
    /// Produces the normalized value.
    pub getter: Getter<T>,
    /// Writes a source value into the field.
    pub setter: Setter<T>,
}

impl<T> Field<T> {
    /// Declares a scalar field.
    #[must_use]
    pub const fn scalar(
        name: &'static str,
        getter: Getter<T>,
        setter: fn(&mut T, Value) -> Result<(), serde_json::Error>,
    ) -> Self {
        Self {
            name,
            getter,
            setter: Setter::Scalar(setter),
        }
    }

    /// Declares a field holding another hydratable type.
    #[must_use]
    pub const fn nested(
        name: &'static str,
        type_name: &'static str,
        getter: Getter<T>,
        set: fn(&mut T, &Value) -> Result<(), HydrationError>,
    ) -> Self {
        Self {
            name,
            getter,
            setter: Setter::Nested { type_name, set },
        }
    }
}

/// Normalizes a scalar field. Values that cannot be represented become `null`.
#[must_use]
pub fn get_scalar<V: Serialize>(value: &V) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Decodes a scalar field from its JSON value.
///
/// # Errors
///
/// Returns the serde error if the value has the wrong shape.
pub fn set_scalar<V: DeserializeOwned>(slot: &mut V, value: Value) -> Result<(), serde_json::Error> {
    *slot = serde_json::from_value(value)?;
    Ok(())
}

/// Normalizes an optional nested object.
#[must_use]
pub fn get_nested<N: Hydratable>(value: &Option<N>) -> Value {
    value
        .as_ref()
        .map_or(Value::Null, |nested| Value::Object(super::normalize(nested)))
}

/// Normalizes a list of nested objects.
#[must_use]
pub fn get_nested_list<N: Hydratable>(values: &[N]) -> Value {
    Value::Array(
        values
            .iter()
            .map(|nested| Value::Object(super::normalize(nested)))
            .collect(),
    )
}

/// Hydrates an optional nested object. `null` clears the field.
///
/// # Errors
///
/// Returns [`HydrationError`] if the nested value cannot be hydrated.
pub fn set_nested<N: Hydratable>(slot: &mut Option<N>, value: &Value) -> Result<(), HydrationError> {
    *slot = match value {
        Value::Null => None,
        other => Some(super::hydrate(other)?),
    };
    Ok(())
}

/// Hydrates a list of nested objects. `null` yields an empty list.
///
/// # Errors
///
/// Returns [`HydrationError`] if the value is not an array or any element
/// cannot be hydrated.
pub fn set_nested_list<N: Hydratable>(slot: &mut Vec<N>, value: &Value) -> Result<(), HydrationError> {
    *slot = match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(super::hydrate::<N>)
            .collect::<Result<Vec<N>, _>>()?,
        other => {
            return Err(HydrationError::NotAnObject {
                type_name: N::TYPE_NAME,
                found: super::errors::json_kind(other),
            })
        }
    };
    Ok(())
}
