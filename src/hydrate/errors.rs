//! Error types for object hydration.
//!
//! - [`HydrationError`]: A JSON object could not be turned into a typed value
//! - [`ValidationError`]: A populated value violated one of its own constraints

use thiserror::Error;

/// A domain object failed its validation hook after being populated.
///
/// # Example
///
/// ```rust
/// use marketing_api::hydrate::ValidationError;
///
/// let error = ValidationError::new("Product", "price", "must be non-negative");
/// assert_eq!(error.to_string(), "Invalid Product.price: must be non-negative");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {type_name}.{field}: {reason}")]
pub struct ValidationError {
    /// The type that failed validation.
    pub type_name: &'static str,
    /// The offending field.
    pub field: &'static str,
    /// Why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(type_name: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            type_name,
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised while converting JSON into a [`Hydratable`](super::Hydratable) type.
#[derive(Debug, Error)]
pub enum HydrationError {
    /// The source text was not valid JSON.
    #[error("Failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The source value was not a JSON object.
    #[error("Cannot hydrate {type_name} from a JSON {found}")]
    NotAnObject {
        /// The target type.
        type_name: &'static str,
        /// The JSON kind that was found instead.
        found: &'static str,
    },

    /// The source object carried a key the target type does not declare.
    #[error("Unknown field '{field}' for {type_name}")]
    UnknownField {
        /// The target type.
        type_name: &'static str,
        /// The undeclared key.
        field: String,
    },

    /// A scalar field received a value of the wrong shape.
    #[error("Invalid value for {type_name}.{field}: {source}")]
    InvalidValue {
        /// The target type.
        type_name: &'static str,
        /// The field being set.
        field: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A nested object failed to hydrate.
    #[error("Failed to hydrate {nested_type} in {type_name}.{field}: {source}")]
    Nested {
        /// The type owning the nested field.
        type_name: &'static str,
        /// The nested field.
        field: String,
        /// The type the nested value was hydrated into.
        nested_type: &'static str,
        /// The failure inside the nested value.
        #[source]
        source: Box<HydrationError>,
    },

    /// The populated value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl HydrationError {
    /// Returns the innermost error, unwrapping [`HydrationError::Nested`] layers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Names the kind of a JSON value for error messages.
pub(crate) const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
