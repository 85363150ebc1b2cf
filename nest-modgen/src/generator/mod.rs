//! Code generator module.
//!
//! This module defines the emitter trait, the shared rendering helpers and
//! one emitter per artifact of a feature module.

pub mod controller;
pub mod dto;
pub mod identity;
pub mod module;
pub mod names;
pub mod repository;
pub mod service;
pub mod source;
pub mod traits;

use tracing::debug;

use crate::ir::Model;

pub use controller::ControllerEmitter;
pub use dto::DtoEmitter;
pub use identity::composite_key_name;
pub use module::ModuleEmitter;
pub use names::ModuleNames;
pub use repository::RepositoryEmitter;
pub use service::ServiceEmitter;
pub use traits::{
    ArtifactKind, Emitter, GeneratedFile, GeneratorConfig, ImportPaths, IndentStyle,
    OptionalityPolicy, LEGACY_OPTIONAL_FIELDS,
};

/// The emitters of a complete module, in write order.
pub fn default_emitters() -> Vec<Box<dyn Emitter>> {
    vec![
        Box::new(DtoEmitter::new()),
        Box::new(RepositoryEmitter::new()),
        Box::new(ServiceEmitter::new()),
        Box::new(ControllerEmitter::new()),
        Box::new(ModuleEmitter::new()),
    ]
}

/// Render every artifact of `model`.
///
/// Pure: the same model and config always produce byte-identical files.
pub fn generate_module(model: &Model, config: &GeneratorConfig) -> Vec<GeneratedFile> {
    let mut files = Vec::with_capacity(ArtifactKind::ALL.len());

    for emitter in default_emitters() {
        let emitted = emitter.emit(model, config);
        debug!(
            model = model.name(),
            emitter = emitter.id(),
            files = emitted.len(),
            "emitted artifacts"
        );
        files.extend(emitted);
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SchemaParser;

    #[test]
    fn test_generate_module_covers_every_kind_in_order() {
        let schema = SchemaParser::new().parse("model Product {\n  id Int @id\n  name String\n}");
        let files = generate_module(&schema.models[0], &GeneratorConfig::default());

        let kinds: Vec<_> = files.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, ArtifactKind::ALL);

        let paths: Vec<_> = files
            .iter()
            .map(|f| f.path.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            paths,
            [
                "dto/create-product.dto.ts",
                "dto/update-product.dto.ts",
                "product.repository.ts",
                "product.service.ts",
                "product.controller.ts",
                "product.module.ts",
            ]
        );
    }

    #[test]
    fn test_emitter_ids_are_unique() {
        let mut ids: Vec<_> = default_emitters().iter().map(|e| e.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
