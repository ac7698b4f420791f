//! Payload location in loosely-shaped JSON trees.
//!
//! API responses nest their payload at depths that vary between endpoints
//! and accounts. These functions find a named member anywhere below an
//! object.
//!
//! # Search order
//!
//! Members are visited in document order. When a member does not match and
//! its value is an object, that object is searched completely before the
//! next sibling is visited. Arrays are never entered. The first match wins
//! and silently shadows any later ones.
//!
//! # Example
//!
//! ```rust
//! use marketing_api::results::locator;
//! use serde_json::json;
//!
//! let tree = json!({"data": {"upsertCategories": {"categoryResult": []}}});
//! let found = locator::locate(&tree, "categoryResult").unwrap();
//! assert_eq!(found, &json!([]));
//! ```

use serde_json::Value;

use super::errors::ResultError;

/// Returns the first member named `field` anywhere in `tree`.
///
/// Non-object trees yield `None`.
#[must_use]
pub fn locate<'a>(tree: &'a Value, field: &str) -> Option<&'a Value> {
    locate_any(tree, &[field]).map(|(_, value)| value)
}

/// Returns the first member whose name is any of `fields`, with the name
/// that matched.
#[must_use]
pub fn locate_any<'a>(tree: &'a Value, fields: &[&str]) -> Option<(&'a str, &'a Value)> {
    let Value::Object(members) = tree else {
        return None;
    };

    for (name, value) in members {
        if fields.contains(&name.as_str()) {
            return Some((name.as_str(), value));
        }
        if value.is_object() {
            if let Some(found) = locate_any(value, fields) {
                return Some(found);
            }
        }
    }

    None
}

/// Like [`locate`], but a missing field is an error.
///
/// # Errors
///
/// Returns [`ResultError::MissingField`] naming `field` and `context`.
pub fn require<'a>(tree: &'a Value, field: &str, context: &str) -> Result<&'a Value, ResultError> {
    locate(tree, field).ok_or_else(|| ResultError::missing_field(field, context))
}
