//! Field descriptor.

use serde::Serialize;

use super::types::{ts_type_for, ScalarType};

/// Name of the creation-time marker field.
pub const CREATED_AT: &str = "createdAt";

/// Name of the update-time marker field.
pub const UPDATED_AT: &str = "updatedAt";

/// Name of the deletion-time marker field.
pub const DELETED_AT: &str = "deletedAt";

/// The three lifecycle marker field names.
pub const LIFECYCLE_MARKERS: [&str; 3] = [CREATED_AT, UPDATED_AT, DELETED_AT];

/// One declared attribute of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name, unique within its model.
    pub name: String,

    /// Declared type name with array and optional markers stripped.
    #[serde(rename = "type")]
    pub ty: String,

    /// Declared nullable (`?`).
    pub is_optional: bool,

    /// Carries `@id`.
    pub is_id: bool,

    /// Carries `@unique`.
    pub is_unique: bool,

    /// Carries a `@default(...)` clause.
    pub has_default: bool,

    /// Declared as a list (`[]`).
    pub is_array: bool,

    /// Referenced model name. Present iff the field is a relation.
    #[serde(rename = "relationName", skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    /// 1-based source line of the declaration.
    #[serde(skip)]
    pub line: usize,
}

impl Field {
    /// Whether the field references another model.
    pub fn is_relation(&self) -> bool {
        self.relation.is_some()
    }

    /// The built-in scalar this field is declared as, if any.
    pub fn scalar(&self) -> Option<ScalarType> {
        ScalarType::from_name(&self.ty)
    }

    /// TypeScript type of a single element of this field.
    pub fn ts_type(&self) -> &'static str {
        ts_type_for(&self.ty)
    }

    /// Whether the name is one of `createdAt`, `updatedAt`, `deletedAt`.
    pub fn is_lifecycle_marker(&self) -> bool {
        LIFECYCLE_MARKERS.contains(&self.name.as_str())
    }
}
