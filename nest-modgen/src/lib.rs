//! # nest-modgen
//!
//! Generates NestJS feature modules from the models of a Prisma-style schema.
//!
//! The crate is split the way a small compiler is:
//!
//! - [`parser`] - line scanner and field classifier producing [`ir::Model`]s
//! - [`ir`] - the model descriptors and their derived capability flags
//! - [`generator`] - the artifact emitters (DTOs, repository, service,
//!   controller, module) and their configuration
//! - [`naming`] - case conversions shared by every emitter
//!
//! ## Usage
//!
//! ```rust
//! use nest_modgen::generator::{generate_module, GeneratorConfig};
//! use nest_modgen::parser::SchemaParser;
//!
//! let schema = SchemaParser::new().parse(
//!     r#"
//! model Product {
//!   id        Int      @id @default(autoincrement())
//!   name      String
//!   createdAt DateTime @default(now())
//!   updatedAt DateTime @updatedAt
//! }
//! "#,
//! );
//!
//! let product = schema.find_model("product").unwrap();
//! let files = generate_module(product, &GeneratorConfig::default());
//! assert_eq!(files.len(), 6);
//! ```

pub mod error;
pub mod generator;
pub mod ir;
pub mod naming;
pub mod parser;

// Re-export main types for convenience
pub use error::{SchemaError, SchemaResult};
pub use generator::{generate_module, Emitter, GeneratedFile, GeneratorConfig};
pub use ir::{Capability, Field, Model};
pub use parser::{Diagnostic, ParsedSchema, SchemaParser};
