//! Catalog categories.

use serde_json::Value;

use super::require_identifier;
use crate::hydrate::{get_scalar, set_scalar, Field, Hydratable, ValidationError};

/// A category in the merchant's catalog, as sent to `upsertCategories`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    /// Merchant category identifier.
    pub id: String,
    /// Identifier of the parent category, for nested catalogs.
    pub parent_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Path of the category page, relative to the store root.
    pub url_path: Option<String>,
    /// Whether the category is visible in the store.
    pub available: Option<bool>,
}

impl Hydratable for Category {
    const TYPE_NAME: &'static str = "Category";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar(
                "id",
                |c: &Self| get_scalar(&c.id),
                |c: &mut Self, v: Value| set_scalar(&mut c.id, v),
            ),
            Field::scalar(
                "parentId",
                |c: &Self| get_scalar(&c.parent_id),
                |c: &mut Self, v: Value| set_scalar(&mut c.parent_id, v),
            ),
            Field::scalar(
                "name",
                |c: &Self| get_scalar(&c.name),
                |c: &mut Self, v: Value| set_scalar(&mut c.name, v),
            ),
            Field::scalar(
                "urlPath",
                |c: &Self| get_scalar(&c.url_path),
                |c: &mut Self, v: Value| set_scalar(&mut c.url_path, v),
            ),
            Field::scalar(
                "available",
                |c: &Self| get_scalar(&c.available),
                |c: &mut Self, v: Value| set_scalar(&mut c.available, v),
            ),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_identifier(Self::TYPE_NAME, "id", &self.id)
    }
}
