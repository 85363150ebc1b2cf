//! Create/update DTO emitter.
//!
//! The create DTO carries every plain scalar field of the model except
//! identity fields and lifecycle markers, decorated with swagger and
//! class-validator annotations. The update DTO is always
//! `PartialType(Create<Model>Dto)`.

use crate::ir::{Field, Model, ScalarType, Validator};

use super::names::ModuleNames;
use super::source::SourceBuilder;
use super::traits::{ArtifactKind, Emitter, GeneratedFile, GeneratorConfig};

/// Emits `dto/create-<name>.dto` and `dto/update-<name>.dto`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DtoEmitter;

impl DtoEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Fields carried by the create DTO, in declaration order.
    pub fn payload_fields(model: &Model) -> Vec<&Field> {
        model
            .fields()
            .iter()
            .filter(|f| !f.is_relation() && !f.is_id && !f.is_lifecycle_marker())
            .collect()
    }

    /// Whether `field` is optional in the create DTO.
    pub fn is_optional_field(model: &Model, field: &Field, config: &GeneratorConfig) -> bool {
        field.is_optional
            || field.has_default
            || config
                .optionality
                .is_forced_optional(model.name(), &field.name)
    }

    fn create_dto(&self, model: &Model, names: &ModuleNames, config: &GeneratorConfig) -> String {
        let fields = Self::payload_fields(model);
        let validators: Vec<Validator> = fields
            .iter()
            .filter_map(|f| f.scalar().and_then(|s| s.validator()))
            .collect();

        let mut imports = vec!["IsOptional", "IsNotEmpty"];
        imports.extend(
            Validator::ALL
                .iter()
                .filter(|v| validators.contains(v))
                .map(Validator::as_str),
        );
        if fields.iter().any(|f| f.is_array) {
            imports.push("IsArray");
        }
        let has_decimal = fields.iter().any(|f| f.scalar() == Some(ScalarType::Decimal));

        let mut out = SourceBuilder::new(config.indent);
        out.line(
            0,
            format!("import {{ {} }} from 'class-validator';", imports.join(", ")),
        );
        out.line(
            0,
            "import { ApiProperty, ApiPropertyOptional } from '@nestjs/swagger';",
        );
        if has_decimal {
            out.line(
                0,
                format!("import {{ Decimal }} from '{}';", config.imports.decimal),
            );
        }
        out.blank();

        if fields.is_empty() {
            out.line(0, format!("export class {} {{}}", names.create_dto()));
            return out.finish();
        }

        out.line(0, format!("export class {} {{", names.create_dto()));
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                out.blank();
            }
            self.field(&mut out, model, field, config);
        }
        out.line(0, "}");

        out.finish()
    }

    fn field(&self, out: &mut SourceBuilder, model: &Model, field: &Field, config: &GeneratorConfig) {
        let optional = Self::is_optional_field(model, field, config);

        if optional {
            out.line(1, "@ApiPropertyOptional()");
            out.line(1, "@IsOptional()");
        } else {
            out.line(1, "@ApiProperty()");
            out.line(1, "@IsNotEmpty()");
        }

        let validator = field.scalar().and_then(|s| s.validator());
        if field.is_array {
            out.line(1, "@IsArray()");
            if let Some(v) = validator {
                out.line(1, format!("@{}({{ each: true }})", v.as_str()));
            }
        } else if let Some(v) = validator {
            out.line(1, format!("@{}()", v.as_str()));
        }

        out.line(
            1,
            format!(
                "{}{}: {}{};",
                field.name,
                if optional { "?" } else { "" },
                field.ts_type(),
                if field.is_array { "[]" } else { "" },
            ),
        );
    }

    fn update_dto(&self, names: &ModuleNames, config: &GeneratorConfig) -> String {
        let mut out = SourceBuilder::new(config.indent);
        out.line(0, "import { PartialType } from '@nestjs/swagger';");
        out.line(
            0,
            format!(
                "import {{ {} }} from './create-{}.dto';",
                names.create_dto(),
                names.kebab
            ),
        );
        out.blank();
        out.line(
            0,
            format!(
                "export class {} extends PartialType({}) {{}}",
                names.update_dto(),
                names.create_dto()
            ),
        );
        out.finish()
    }
}

impl Emitter for DtoEmitter {
    fn id(&self) -> &'static str {
        "dto"
    }

    fn emit(&self, model: &Model, config: &GeneratorConfig) -> Vec<GeneratedFile> {
        let names = ModuleNames::new(model.name());
        let ext = &config.file_extension;

        vec![
            GeneratedFile::new(
                ArtifactKind::CreateDto,
                ArtifactKind::CreateDto.relative_path(&names.kebab, ext),
                self.create_dto(model, &names, config),
            ),
            GeneratedFile::new(
                ArtifactKind::UpdateDto,
                ArtifactKind::UpdateDto.relative_path(&names.kebab, ext),
                self.update_dto(&names, config),
            ),
        ]
    }
}
