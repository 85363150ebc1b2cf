//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `nest-modgen.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use nest_modgen::generator::{
    GeneratorConfig, ImportPaths, IndentStyle, OptionalityPolicy, LEGACY_OPTIONAL_FIELDS,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "nest-modgen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations.
    pub paths: PathsConfig,

    /// Generated source formatting.
    pub output: OutputConfig,

    /// Create DTO fields forced optional.
    pub optional_fields: OptionalFieldsConfig,

    /// Module paths used in generated imports.
    pub imports: ImportPaths,
}

/// Input and output locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Schema file to read.
    pub schema: PathBuf,

    /// Root directory holding one sub-directory per generated module.
    pub modules_dir: PathBuf,
}

/// Generated source formatting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension of generated files, without the dot.
    pub file_extension: String,

    /// Spaces per indentation level (2 or 4).
    pub indent: u8,

    /// Indent with tabs instead of spaces.
    pub use_tabs: bool,
}

/// Create DTO fields forced optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OptionalFieldsConfig {
    /// Field names optional in every model.
    pub global: Vec<String>,

    /// Field names optional per model, keyed by exact model name.
    pub models: BTreeMap<String, Vec<String>>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("src/database/prisma/schema.prisma"),
            modules_dir: PathBuf::from("src/modules"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_extension: "ts".to_string(),
            indent: 2,
            use_tabs: false,
        }
    }
}

impl Default for OptionalFieldsConfig {
    fn default() -> Self {
        Self {
            global: LEGACY_OPTIONAL_FIELDS.iter().map(|s| s.to_string()).collect(),
            models: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Build the emitter configuration.
    pub fn generator_config(&self) -> CliResult<GeneratorConfig> {
        let indent = if self.output.use_tabs {
            IndentStyle::Tabs
        } else {
            match self.output.indent {
                2 => IndentStyle::Spaces2,
                4 => IndentStyle::Spaces4,
                other => {
                    return Err(ConfigError::invalid_value(
                        "output.indent",
                        format!("expected 2 or 4, got {}", other),
                    )
                    .into())
                }
            }
        };

        let extension = self.output.file_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(
                ConfigError::invalid_value("output.file_extension", "must not be empty").into(),
            );
        }

        let mut optionality =
            OptionalityPolicy::empty().with_global_fields(self.optional_fields.global.iter().cloned());
        for (model, fields) in &self.optional_fields.models {
            for field in fields {
                optionality = optionality.with_model_field(model.clone(), field.clone());
            }
        }

        Ok(GeneratorConfig::new()
            .with_optionality(optionality)
            .with_imports(self.imports.clone())
            .with_indent(indent)
            .with_file_extension(extension))
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// An explicit path must exist. Without one, `nest-modgen.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::not_found(path.to_path_buf()).into());
                }
                path.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILENAME);
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref schema) = args.schema {
            config.paths.schema = schema.clone();
        }

        if let Some(ref modules_dir) = args.modules_dir {
            config.paths.modules_dir = modules_dir.clone();
        }

        if let Some(ref extension) = args.file_extension {
            config.output.file_extension = extension.clone();
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# nest-modgen configuration file

[paths]
# Prisma schema to read models from
schema = "src/database/prisma/schema.prisma"

# Generated modules land in <modules_dir>/<kebab-name>/
modules_dir = "src/modules"

[output]
# Extension of generated files
file_extension = "ts"

# Spaces per indentation level (2 or 4)
indent = 2

# Indent with tabs instead of spaces
use_tabs = false

[optional_fields]
# Fields always optional in create DTOs, in every model
global = [
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
]

# Per-model additions
[optional_fields.models]
# Product = ["weight"]

[imports]
base_repository = "../../common/repositories/base.repository"
base_service = "../../common/services/base.service"
base_controller = "../../common/controllers/base.controller"
database_service = "../../database/database.service"
prisma_client = "@prisma/client"
decimal = "@prisma/client/runtime/library"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Schema path override.
    pub schema: Option<PathBuf>,

    /// Modules root override.
    pub modules_dir: Option<PathBuf>,

    /// File extension override.
    pub file_extension: Option<String>,
}
