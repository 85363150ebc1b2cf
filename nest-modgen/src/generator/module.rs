//! Module wiring emitter.

use crate::ir::Model;

use super::names::ModuleNames;
use super::source::SourceBuilder;
use super::traits::{ArtifactKind, Emitter, GeneratedFile, GeneratorConfig};

/// Emits `<name>.module`: one controller, service and repository as
/// providers, the service exported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleEmitter;

impl ModuleEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for ModuleEmitter {
    fn id(&self) -> &'static str {
        "module"
    }

    fn emit(&self, model: &Model, config: &GeneratorConfig) -> Vec<GeneratedFile> {
        let names = ModuleNames::new(model.name());
        let controller = names.controller();
        let service = names.service();
        let repository = names.repository();

        let mut out = SourceBuilder::new(config.indent);
        out.line(0, "import { Module } from '@nestjs/common';");
        out.line(
            0,
            format!("import {{ {} }} from '{}';", controller, names.sibling("controller")),
        );
        out.line(
            0,
            format!("import {{ {} }} from '{}';", service, names.sibling("service")),
        );
        out.line(
            0,
            format!("import {{ {} }} from '{}';", repository, names.sibling("repository")),
        );
        out.blank();
        out.line(0, "@Module({");
        out.line(1, format!("controllers: [{}],", controller));
        out.line(1, format!("providers: [{}, {}],", service, repository));
        out.line(1, format!("exports: [{}],", service));
        out.line(0, "})");
        out.line(0, format!("export class {} {{}}", names.module()));

        vec![GeneratedFile::new(
            ArtifactKind::Module,
            ArtifactKind::Module.relative_path(&names.kebab, &config.file_extension),
            out.finish(),
        )]
    }
}
