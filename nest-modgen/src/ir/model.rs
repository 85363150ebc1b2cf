//! Model descriptor and derived capability flags.

use serde::Serialize;

use super::field::{Field, CREATED_AT, DELETED_AT, UPDATED_AT};

/// One named entity extracted from the schema.
///
/// Capability flags are computed once in [`Model::new`] from the field list
/// and the composite identity annotation; the value is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    name: String,
    fields: Vec<Field>,
    has_timestamps: bool,
    has_soft_delete: bool,
    #[serde(rename = "compositeIdFields", skip_serializing_if = "Option::is_none")]
    composite_id: Option<Vec<String>>,
    #[serde(rename = "compositeIdName", skip_serializing_if = "Option::is_none")]
    composite_key: Option<String>,
}

impl Model {
    /// Build a model from its parsed fields and optional `@@id` field list.
    ///
    /// An empty composite list is treated as no composite identity.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<Field>,
        composite_id: Option<Vec<String>>,
    ) -> Self {
        let has_field = |wanted: &str| fields.iter().any(|f| f.name == wanted);
        let has_timestamps = has_field(CREATED_AT) && has_field(UPDATED_AT);
        let has_soft_delete = has_field(DELETED_AT);

        Self {
            name: name.into(),
            has_timestamps,
            has_soft_delete,
            composite_id: composite_id.filter(|ids| !ids.is_empty()),
            composite_key: None,
            fields,
        }
    }

    /// Set the explicit lookup key of the composite identity
    /// (`@@id(fields: [...], name: "...")`). Ignored without a composite identity.
    pub fn with_composite_key(mut self, key: Option<String>) -> Self {
        if self.composite_id.is_some() {
            self.composite_key = key;
        }
        self
    }

    /// Model name as declared in the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Both `createdAt` and `updatedAt` are declared.
    pub fn has_timestamps(&self) -> bool {
        self.has_timestamps
    }

    /// `deletedAt` is declared.
    pub fn has_soft_delete(&self) -> bool {
        self.has_soft_delete
    }

    /// The model declares a multi-field `@@id`.
    pub fn has_composite_id(&self) -> bool {
        self.composite_id.is_some()
    }

    /// Composite identity fields in annotation order; empty when absent.
    pub fn composite_id_fields(&self) -> &[String] {
        self.composite_id.as_deref().unwrap_or_default()
    }

    /// Rich/basic classification driving every emitter.
    pub fn capability(&self) -> Capability {
        if self.has_timestamps && self.has_soft_delete {
            Capability::Rich
        } else {
            Capability::Basic
        }
    }

    /// Explicit name of the composite identity, if one was declared.
    pub fn composite_key(&self) -> Option<&str> {
        self.composite_key.as_deref()
    }

    /// Shape of the primary identity used by generated signatures.
    pub fn identity(&self) -> Identity<'_> {
        match &self.composite_id {
            Some(fields) => Identity::Composite {
                fields,
                key: self.composite_key(),
            },
            None => Identity::Single,
        }
    }
}

/// Whether generated code extends the shared base abstractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Timestamps and soft delete: extend `BaseRepository`/`BaseService`/`BaseController`.
    Rich,

    /// Hand-written CRUD bodies, no base abstraction.
    Basic,
}

impl Capability {
    /// Short label (`rich` or `basic`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Rich => "rich",
            Capability::Basic => "basic",
        }
    }

    /// Human-readable description used by the model listing.
    pub fn description(&self) -> &'static str {
        match self {
            Capability::Rich => "with base classes",
            Capability::Basic => "basic CRUD",
        }
    }
}

/// Primary identity of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity<'a> {
    /// A single numeric `id`.
    Single,

    /// One parameter per listed field, in order. `key` is the declared
    /// lookup name, when the annotation gives one.
    Composite {
        fields: &'a [String],
        key: Option<&'a str>,
    },
}
