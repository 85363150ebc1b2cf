//! Module generation orchestrator.
//!
//! This module resolves a model in the configured schema, runs the emitters
//! from `nest-modgen` and lands the resulting files under the modules root.
//! Every artifact is rendered before the first write.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use nest_modgen::generator::{generate_module, ArtifactKind, GeneratorConfig, ModuleNames};
use nest_modgen::ir::{Capability, Model};
use nest_modgen::parser::{ParsedSchema, SchemaParser};

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::writer::{FileWriter, WriteResult};

/// A file ready to be written.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    /// Artifact kind.
    pub kind: ArtifactKind,

    /// Destination path, under the module directory.
    pub path: PathBuf,

    /// Source text.
    pub content: String,
}

/// Everything generated for one model.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// Declared model name.
    pub model_name: String,

    /// `<modules_dir>/<kebab-name>`.
    pub module_dir: PathBuf,

    /// Files in write order.
    pub files: Vec<PlannedFile>,
}

/// One line of the model listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub name: String,
    pub module: String,
    pub capability: Capability,
    pub has_timestamps: bool,
    pub has_soft_delete: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub composite_id_fields: Vec<String>,
}

impl ModelSummary {
    pub fn from_model(model: &Model) -> Self {
        Self {
            name: model.name().to_string(),
            module: ModuleNames::new(model.name()).kebab,
            capability: model.capability(),
            has_timestamps: model.has_timestamps(),
            has_soft_delete: model.has_soft_delete(),
            composite_id_fields: model.composite_id_fields().to_vec(),
        }
    }
}

/// Module generator driven by CLI configuration.
pub struct ModuleGenerator {
    config: Config,
    emit: GeneratorConfig,
}

impl ModuleGenerator {
    /// Create a generator, validating the emitter settings up front.
    pub fn new(config: Config) -> CliResult<Self> {
        let emit = config.generator_config()?;
        Ok(Self { config, emit })
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read and parse the configured schema.
    pub fn load_schema(&self) -> CliResult<ParsedSchema> {
        Ok(SchemaParser::new().parse_file(&self.config.paths.schema)?)
    }

    /// Resolve `name` case-insensitively.
    pub fn find_model<'a>(&self, schema: &'a ParsedSchema, name: &str) -> CliResult<&'a Model> {
        schema.find_model(name).ok_or_else(|| {
            CliError::model_not_found(
                name,
                schema.model_names().into_iter().map(String::from).collect(),
            )
        })
    }

    /// Directory the module of `model` is generated into.
    pub fn module_dir(&self, model: &Model) -> PathBuf {
        self.config
            .paths
            .modules_dir
            .join(ModuleNames::new(model.name()).kebab)
    }

    /// Render every artifact of `model` without touching the file system.
    pub fn plan(&self, model: &Model) -> GenerationPlan {
        let module_dir = self.module_dir(model);
        let files = generate_module(model, &self.emit)
            .into_iter()
            .map(|file| PlannedFile {
                kind: file.kind,
                path: module_dir.join(&file.path),
                content: file.content,
            })
            .collect::<Vec<_>>();

        debug!(
            model = model.name(),
            dir = %module_dir.display(),
            files = files.len(),
            "planned module"
        );

        GenerationPlan {
            model_name: model.name().to_string(),
            module_dir,
            files,
        }
    }

    /// Create the module directories and write every planned file.
    pub fn write(&self, plan: &GenerationPlan, writer: &FileWriter) -> CliResult<Vec<WriteResult>> {
        writer.ensure_dir(&plan.module_dir)?;
        writer.ensure_dir(&plan.module_dir.join("dto"))?;

        plan.files
            .iter()
            .map(|file| writer.write(&file.path, &file.content))
            .collect()
    }

    /// Parse, resolve and generate in one step.
    pub fn generate(&self, name: &str, writer: &FileWriter) -> CliResult<(GenerationPlan, Vec<WriteResult>)> {
        let schema = self.load_schema()?;
        let model = self.find_model(&schema, name)?;
        let plan = self.plan(model);
        let results = self.write(&plan, writer)?;
        Ok((plan, results))
    }

    /// Summaries of every model in the schema, in source order.
    pub fn list(&self) -> CliResult<Vec<ModelSummary>> {
        let schema = self.load_schema()?;
        Ok(schema.models.iter().map(ModelSummary::from_model).collect())
    }
}

impl GenerationPlan {
    /// Path of the planned file of `kind`.
    pub fn path_of(&self, kind: ArtifactKind) -> Option<&Path> {
        self.files
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = "model DomCategory {\n  id Int @id\n  name String\n}\n\nmodel Tag {\n  a Int\n  b Int\n  @@id([a, b])\n}\n";

    fn generator() -> ModuleGenerator {
        let mut config = Config::default();
        config.paths.modules_dir = PathBuf::from("out/modules");
        ModuleGenerator::new(config).unwrap()
    }

    #[test]
    fn test_plan_paths() {
        let schema = SchemaParser::new().parse(SCHEMA);
        let generator = generator();
        let model = generator.find_model(&schema, "domcategory").unwrap();
        let plan = generator.plan(model);

        assert_eq!(plan.model_name, "DomCategory");
        assert_eq!(plan.module_dir, PathBuf::from("out/modules/dom-category"));
        assert_eq!(plan.files.len(), 6);
        assert_eq!(
            plan.path_of(ArtifactKind::CreateDto),
            Some(Path::new("out/modules/dom-category/dto/create-dom-category.dto.ts"))
        );
        assert_eq!(
            plan.path_of(ArtifactKind::Module),
            Some(Path::new("out/modules/dom-category/dom-category.module.ts"))
        );
    }

    #[test]
    fn test_find_model_missing() {
        let schema = SchemaParser::new().parse(SCHEMA);
        let err = generator().find_model(&schema, "Nope").unwrap_err();
        match err {
            CliError::ModelNotFound { name, available } => {
                assert_eq!(name, "Nope");
                assert_eq!(available, ["DomCategory", "Tag"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_summary() {
        let schema = SchemaParser::new().parse(SCHEMA);
        let summary = ModelSummary::from_model(&schema.models[1]);
        assert_eq!(summary.module, "tag");
        assert_eq!(summary.capability, Capability::Basic);
        assert_eq!(summary.composite_id_fields, ["a", "b"]);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["capability"], "basic");
        assert_eq!(json["compositeIdFields"][1], "b");
    }

    #[test]
    fn test_invalid_config_is_rejected_up_front() {
        let mut config = Config::default();
        config.output.indent = 7;
        assert!(ModuleGenerator::new(config).is_err());
    }
}
