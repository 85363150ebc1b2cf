//! Emitter trait and generator configuration.
//!
//! Every artifact emitter implements [`Emitter`]: a pure function from a
//! [`Model`] and a [`GeneratorConfig`] to one or more [`GeneratedFile`]s.
//! Emitters never fail and never touch the file system.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::Deserialize;

use crate::ir::Model;

/// Trait for artifact emitters.
///
/// # Example
///
/// ```rust
/// use nest_modgen::generator::{ArtifactKind, Emitter, GeneratedFile, GeneratorConfig};
/// use nest_modgen::ir::Model;
///
/// struct Readme;
///
/// impl Emitter for Readme {
///     fn id(&self) -> &'static str { "readme" }
///
///     fn emit(&self, model: &Model, _config: &GeneratorConfig) -> Vec<GeneratedFile> {
///         vec![GeneratedFile::new(
///             ArtifactKind::Module,
///             "README.md",
///             format!("# {}\n", model.name()),
///         )]
///     }
/// }
/// ```
pub trait Emitter: Send + Sync {
    /// Short unique identifier (e.g. "dto", "repository").
    fn id(&self) -> &'static str;

    /// Produce the artifacts for `model`.
    fn emit(&self, model: &Model, config: &GeneratorConfig) -> Vec<GeneratedFile>;
}

/// The kinds of artifacts produced for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    CreateDto,
    UpdateDto,
    Repository,
    Service,
    Controller,
    Module,
}

impl ArtifactKind {
    /// All kinds, in write order.
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::CreateDto,
        ArtifactKind::UpdateDto,
        ArtifactKind::Repository,
        ArtifactKind::Service,
        ArtifactKind::Controller,
        ArtifactKind::Module,
    ];

    /// Path of the artifact relative to the model's module directory.
    pub fn relative_path(&self, kebab: &str, extension: &str) -> PathBuf {
        match self {
            ArtifactKind::CreateDto => {
                PathBuf::from("dto").join(format!("create-{}.dto.{}", kebab, extension))
            }
            ArtifactKind::UpdateDto => {
                PathBuf::from("dto").join(format!("update-{}.dto.{}", kebab, extension))
            }
            ArtifactKind::Repository => PathBuf::from(format!("{}.repository.{}", kebab, extension)),
            ArtifactKind::Service => PathBuf::from(format!("{}.service.{}", kebab, extension)),
            ArtifactKind::Controller => PathBuf::from(format!("{}.controller.{}", kebab, extension)),
            ArtifactKind::Module => PathBuf::from(format!("{}.module.{}", kebab, extension)),
        }
    }
}

/// One generated source artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// What this file is.
    pub kind: ArtifactKind,

    /// Path relative to the model's module directory.
    pub path: PathBuf,

    /// Source text.
    pub content: String,
}

impl GeneratedFile {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Field names treated as optional in create DTOs unless configured otherwise.
pub const LEGACY_OPTIONAL_FIELDS: [&str; 11] = [
    "sku",
    "description",
    "shortDescription",
    "compareAtPrice",
    "brandId",
    "isActive",
    "isFeatured",
    "stockQuantity",
    "lowStockThreshold",
    "metaTitle",
    "metaDescription",
];

/// Which fields are forced optional in create DTOs regardless of the schema.
///
/// Names in `global` apply to every model; `per_model` entries are keyed by
/// the exact model name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalityPolicy {
    global: BTreeSet<String>,
    per_model: BTreeMap<String, BTreeSet<String>>,
}

impl Default for OptionalityPolicy {
    fn default() -> Self {
        Self::empty().with_global_fields(LEGACY_OPTIONAL_FIELDS)
    }
}

impl OptionalityPolicy {
    /// A policy that forces nothing optional.
    pub fn empty() -> Self {
        Self {
            global: BTreeSet::new(),
            per_model: BTreeMap::new(),
        }
    }

    /// Add field names forced optional in every model.
    pub fn with_global_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.global.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Force one field of one model optional.
    pub fn with_model_field(mut self, model: impl Into<String>, field: impl Into<String>) -> Self {
        self.per_model
            .entry(model.into())
            .or_default()
            .insert(field.into());
        self
    }

    /// Whether `field` of `model` is forced optional.
    pub fn is_forced_optional(&self, model: &str, field: &str) -> bool {
        self.global.contains(field)
            || self
                .per_model
                .get(model)
                .is_some_and(|fields| fields.contains(field))
    }
}

/// Module paths used by generated import statements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportPaths {
    pub base_repository: String,
    pub base_service: String,
    pub base_controller: String,
    pub database_service: String,
    pub prisma_client: String,
    pub decimal: String,
}

impl Default for ImportPaths {
    fn default() -> Self {
        Self {
            base_repository: "../../common/repositories/base.repository".to_string(),
            base_service: "../../common/services/base.service".to_string(),
            base_controller: "../../common/controllers/base.controller".to_string(),
            database_service: "../../database/database.service".to_string(),
            prisma_client: "@prisma/client".to_string(),
            decimal: "@prisma/client/runtime/library".to_string(),
        }
    }
}

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Two spaces (default)
    #[default]
    Spaces2,

    /// Four spaces
    Spaces4,

    /// Tabs
    Tabs,
}

impl IndentStyle {
    /// Get the indentation string.
    pub fn as_str(&self) -> &str {
        match self {
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
            IndentStyle::Tabs => "\t",
        }
    }

    /// Create an indentation string for the given depth.
    pub fn indent(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

/// Generator configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Forced-optional create DTO fields.
    pub optionality: OptionalityPolicy,

    /// Import module paths.
    pub imports: ImportPaths,

    /// Indentation of generated code.
    pub indent: IndentStyle,

    /// Extension of generated files, without the dot.
    pub file_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            optionality: OptionalityPolicy::default(),
            imports: ImportPaths::default(),
            indent: IndentStyle::default(),
            file_extension: "ts".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the optionality policy.
    pub fn with_optionality(mut self, optionality: OptionalityPolicy) -> Self {
        self.optionality = optionality;
        self
    }

    /// Set the import paths.
    pub fn with_imports(mut self, imports: ImportPaths) -> Self {
        self.imports = imports;
        self
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set the file extension.
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }
}
