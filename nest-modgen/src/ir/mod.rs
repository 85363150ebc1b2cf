//! Intermediate representation of parsed schema models.
//!
//! The IR is what the emitters consume: plain, immutable descriptors built
//! fresh on each run.

pub mod field;
pub mod model;
pub mod types;

pub use field::{Field, CREATED_AT, DELETED_AT, LIFECYCLE_MARKERS, UPDATED_AT};
pub use model::{Capability, Identity, Model};
pub use types::{ts_type_for, ScalarType, Validator};
