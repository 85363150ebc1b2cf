//! Service emitter.

use crate::ir::{Capability, Model};

use super::identity;
use super::names::ModuleNames;
use super::source::SourceBuilder;
use super::traits::{ArtifactKind, Emitter, GeneratedFile, GeneratorConfig};

/// Emits `<name>.service`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceEmitter;

impl ServiceEmitter {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, model: &Model, names: &ModuleNames, config: &GeneratorConfig) -> String {
        let capability = model.capability();
        let entity = &names.prisma_type;
        let repository = names.repository();
        let mut out = SourceBuilder::new(config.indent);

        out.line(0, "import { Injectable } from '@nestjs/common';");
        if capability == Capability::Rich {
            out.line(
                0,
                format!("import {{ BaseService }} from '{}';", config.imports.base_service),
            );
        }
        out.line(
            0,
            format!("import {{ {} }} from '{}';", entity, config.imports.prisma_client),
        );
        out.line(
            0,
            format!("import {{ {} }} from '{}';", repository, names.sibling("repository")),
        );
        // The rich branch never references the DTOs.
        if capability == Capability::Basic {
            out.line(
                0,
                format!(
                    "import {{ {} }} from '{}';",
                    names.create_dto(),
                    names.dto_import("create")
                ),
            );
            out.line(
                0,
                format!(
                    "import {{ {} }} from '{}';",
                    names.update_dto(),
                    names.dto_import("update")
                ),
            );
        }
        out.blank();
        out.line(0, "@Injectable()");

        match capability {
            Capability::Rich => {
                out.line(
                    0,
                    format!(
                        "export class {} extends BaseService<{}> {{",
                        names.service(),
                        entity
                    ),
                );
                out.line(1, format!("protected entityName = '{}';", entity));
                out.blank();
                out.line(
                    1,
                    format!("constructor(protected readonly repository: {}) {{", repository),
                );
                out.line(2, "super(repository);");
                out.line(1, "}");
                out.blank();
                out.line(1, "// Add custom validation methods here");
                out.line(
                    1,
                    format!(
                        "// protected async validateCreate(data: Partial<{}>): Promise<void> {{",
                        entity
                    ),
                );
                out.line(1, "//   // Custom create validation logic");
                out.line(1, "// }");
                out.blank();
                out.line(
                    1,
                    format!(
                        "// protected async validateUpdate(id: number, data: Partial<{}>): Promise<void> {{",
                        entity
                    ),
                );
                out.line(1, "//   // Custom update validation logic");
                out.line(1, "// }");
            }
            Capability::Basic => {
                let id = model.identity();
                let params = identity::params(&id);
                let args = identity::args(&id);
                let finder = identity::finder(&id);
                let repo = format!("this.{}", names.repository_var());

                out.line(0, format!("export class {} {{", names.service()));
                out.line(
                    1,
                    format!(
                        "constructor(private readonly {}: {}) {{}}",
                        names.repository_var(),
                        repository
                    ),
                );
                out.blank();

                out.line(1, format!("async findAll(): Promise<{}[]> {{", entity));
                out.line(2, format!("return {}.findAll();", repo));
                out.line(1, "}");
                out.blank();

                out.line(
                    1,
                    format!("async {}({}): Promise<{} | null> {{", finder, params, entity),
                );
                out.line(2, format!("return {}.{}({});", repo, finder, args));
                out.line(1, "}");
                out.blank();

                out.line(
                    1,
                    format!(
                        "async create(createDto: {}): Promise<{}> {{",
                        names.create_dto(),
                        entity
                    ),
                );
                out.line(2, format!("return {}.create(createDto);", repo));
                out.line(1, "}");
                out.blank();

                out.line(
                    1,
                    format!(
                        "async update({}, updateDto: {}): Promise<{}> {{",
                        params,
                        names.update_dto(),
                        entity
                    ),
                );
                out.line(2, format!("return {}.update({}, updateDto);", repo, args));
                out.line(1, "}");
                out.blank();

                out.line(1, format!("async delete({}): Promise<{}> {{", params, entity));
                out.line(2, format!("return {}.delete({});", repo, args));
                out.line(1, "}");
            }
        }

        out.line(0, "}");
        out.finish()
    }
}

impl Emitter for ServiceEmitter {
    fn id(&self) -> &'static str {
        "service"
    }

    fn emit(&self, model: &Model, config: &GeneratorConfig) -> Vec<GeneratedFile> {
        let names = ModuleNames::new(model.name());
        vec![GeneratedFile::new(
            ArtifactKind::Service,
            ArtifactKind::Service.relative_path(&names.kebab, &config.file_extension),
            self.render(model, &names, config),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SchemaParser;

    fn render(source: &str) -> String {
        let model = SchemaParser::new().parse(source).models.remove(0);
        ServiceEmitter::new()
            .emit(&model, &GeneratorConfig::default())
            .remove(0)
            .content
    }

    #[test]
    fn test_basic_single_identity() {
        let content = render("model DomCategory {\n  id Int @id\n  name String\n}");

        assert!(content.contains("import { DomCategoryRepository } from './dom-category.repository';"));
        assert!(content.contains(
            "import { CreateDomCategoryDto } from './dto/create-dom-category.dto';"
        ));
        assert!(content.contains(
            "import { UpdateDomCategoryDto } from './dto/update-dom-category.dto';"
        ));
        assert!(content.contains(
            "  constructor(private readonly domCategoryRepository: DomCategoryRepository) {}\n"
        ));
        assert!(content.contains("    return this.domCategoryRepository.findById(id);\n"));
        assert!(content.contains(
            "  async update(id: number, updateDto: UpdateDomCategoryDto): Promise<DomCategory> {\n"
        ));
        assert!(content.contains("    return this.domCategoryRepository.delete(id);\n"));
    }

    #[test]
    fn test_basic_composite_identity() {
        let content = render(
            "model ProductCategory {\n  categoryId Int\n  productId Int\n  @@id([categoryId, productId])\n}",
        );
        assert!(content.contains(
            "  async findByCompositeId(categoryId: number, productId: number): Promise<ProductCategory | null> {\n"
        ));
        assert!(content.contains(
            "    return this.productCategoryRepository.findByCompositeId(categoryId, productId);\n"
        ));
        assert!(content.contains(
            "    return this.productCategoryRepository.update(categoryId, productId, updateDto);\n"
        ));
    }

    #[test]
    fn test_rich_branch() {
        let content = render(
            "model Brand {\n  id Int @id\n  createdAt DateTime\n  updatedAt DateTime\n  deletedAt DateTime?\n}",
        );
        assert!(content.contains("import { BaseService } from '../../common/services/base.service';"));
        assert!(content.contains("export class BrandService extends BaseService<Brand> {\n"));
        assert!(content.contains("  protected entityName = 'Brand';\n"));
        assert!(content.contains("    super(repository);\n"));
        assert!(content.contains("  // protected async validateCreate(data: Partial<Brand>): Promise<void> {\n"));
        assert!(!content.contains("CreateBrandDto"));
    }

    #[test]
    fn test_lowercase_model_uses_declared_type() {
        let content = render(
            "model user {\n  id Int @id\n  createdAt DateTime\n  updatedAt DateTime\n  deletedAt DateTime?\n}",
        );
        assert!(content.contains("import { user } from '@prisma/client';"));
        assert!(content.contains("export class UserService extends BaseService<user> {\n"));
        assert!(content.contains("  protected entityName = 'user';\n"));
        assert!(content.contains("  constructor(protected readonly repository: UserRepository) {\n"));
    }
}
