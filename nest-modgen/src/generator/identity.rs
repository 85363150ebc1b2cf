//! Rendering of identity parameters, routes and lookup keys.
//!
//! Basic-branch artifacts take either a single numeric `id` or one numeric
//! parameter per composite identity field, in annotation order.

use crate::ir::Identity;

/// Parameter name of a single identity.
pub const ID_PARAM: &str = "id";

/// TypeScript type of every identity parameter.
pub const ID_TS_TYPE: &str = "number";

/// Lookup key name for a composite identity.
///
/// Prisma names compound unique inputs by joining the field names with `_`
/// unless the annotation declares a `name`. The result is embedded verbatim
/// in generated `where` clauses.
pub fn composite_key_name(fields: &[String], declared: Option<&str>) -> String {
    match declared {
        Some(name) => name.to_string(),
        None => fields.join("_"),
    }
}

fn names<'a>(identity: &Identity<'a>) -> Vec<&'a str> {
    match *identity {
        Identity::Single => vec![ID_PARAM],
        Identity::Composite { fields, .. } => fields.iter().map(String::as_str).collect(),
    }
}

/// Typed parameter list: `id: number` or `categoryId: number, productId: number`.
pub fn params(identity: &Identity<'_>) -> String {
    names(identity)
        .iter()
        .map(|name| format!("{}: {}", name, ID_TS_TYPE))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Argument list forwarding the parameters: `id` or `categoryId, productId`.
pub fn args(identity: &Identity<'_>) -> String {
    names(identity).join(", ")
}

/// Prisma `where` value: `{ id }` or `{ a_b: { a, b } }`.
pub fn where_clause(identity: &Identity<'_>) -> String {
    match *identity {
        Identity::Single => format!("{{ {} }}", ID_PARAM),
        Identity::Composite { fields, key } => format!(
            "{{ {}: {{ {} }} }}",
            composite_key_name(fields, key),
            args(identity)
        ),
    }
}

/// Name of the lookup method: `findById` or `findByCompositeId`.
pub fn finder(identity: &Identity<'_>) -> &'static str {
    match identity {
        Identity::Single => "findById",
        Identity::Composite { .. } => "findByCompositeId",
    }
}

/// Route path: `:id` or `:categoryId/:productId`.
pub fn route(identity: &Identity<'_>) -> String {
    names(identity)
        .iter()
        .map(|name| format!(":{}", name))
        .collect::<Vec<_>>()
        .join("/")
}

/// Controller parameters with `@Param` decorators.
pub fn route_params(identity: &Identity<'_>) -> String {
    names(identity)
        .iter()
        .map(|name| format!("@Param('{0}', ParseIntPipe) {0}: {1}", name, ID_TS_TYPE))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary wording for the lookup endpoint: `by id` or `by composite id`.
pub fn lookup_phrase(identity: &Identity<'_>) -> &'static str {
    match identity {
        Identity::Single => "by id",
        Identity::Composite { .. } => "by composite id",
    }
}
