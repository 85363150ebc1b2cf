//! # nest-modgen-cli
//!
//! CLI library for generating NestJS feature modules from a Prisma schema.
//!
//! This crate provides the functionality behind the `nest-modgen` binary:
//! configuration loading, model resolution, generation planning and file
//! output.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`generator`] - Model resolution and generation plans
//! - [`writer`] - File output and dry-run support
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{GenerationPlan, ModelSummary, ModuleGenerator};
pub use writer::FileWriter;
