//! Repository emitter.

use crate::ir::{Capability, Model, ScalarType};

use super::identity;
use super::names::ModuleNames;
use super::source::SourceBuilder;
use super::traits::{ArtifactKind, Emitter, GeneratedFile, GeneratorConfig};

/// Emits `<name>.repository`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryEmitter;

impl RepositoryEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Quoted names of the fields a rich repository searches over.
    pub fn search_fields(model: &Model) -> Vec<String> {
        model
            .fields()
            .iter()
            .filter(|f| {
                f.scalar() == Some(ScalarType::String)
                    && !f.is_relation()
                    && !f.is_lifecycle_marker()
            })
            .map(|f| format!("'{}'", f.name))
            .collect()
    }

    fn render(&self, model: &Model, names: &ModuleNames, config: &GeneratorConfig) -> String {
        let capability = model.capability();
        let entity = &names.prisma_type;
        let mut out = SourceBuilder::new(config.indent);

        out.line(0, "import { Injectable } from '@nestjs/common';");
        if capability == Capability::Rich {
            out.line(
                0,
                format!(
                    "import {{ BaseRepository }} from '{}';",
                    config.imports.base_repository
                ),
            );
        }
        out.line(
            0,
            format!("import {{ {} }} from '{}';", entity, config.imports.prisma_client),
        );
        out.line(
            0,
            format!(
                "import {{ DatabaseService }} from '{}';",
                config.imports.database_service
            ),
        );
        out.blank();
        out.line(0, "@Injectable()");

        match capability {
            Capability::Rich => {
                out.line(
                    0,
                    format!(
                        "export class {} extends BaseRepository<{}> {{",
                        names.repository(),
                        entity
                    ),
                );
                out.line(1, format!("protected model = this.prisma.{};", names.camel));
                out.blank();
                out.line(1, "constructor(protected readonly prisma: DatabaseService) {");
                out.line(2, "super(prisma);");
                out.line(1, "}");
                out.blank();
                out.line(1, "protected getSearchFields(): string[] {");
                out.line(
                    2,
                    format!("return [{}];", Self::search_fields(model).join(", ")),
                );
                out.line(1, "}");
            }
            Capability::Basic => {
                let id = model.identity();
                let params = identity::params(&id);
                let where_clause = identity::where_clause(&id);
                let delegate = format!("this.prisma.{}", names.camel);

                out.line(0, format!("export class {} {{", names.repository()));
                out.line(1, "constructor(private readonly prisma: DatabaseService) {}");
                out.blank();

                out.line(1, format!("async findAll(): Promise<{}[]> {{", entity));
                out.line(2, format!("return {}.findMany();", delegate));
                out.line(1, "}");
                out.blank();

                out.line(
                    1,
                    format!(
                        "async {}({}): Promise<{} | null> {{",
                        identity::finder(&id),
                        params,
                        entity
                    ),
                );
                out.line(
                    2,
                    format!("return {}.findUnique({{ where: {} }});", delegate, where_clause),
                );
                out.line(1, "}");
                out.blank();

                out.line(1, format!("async create(data: any): Promise<{}> {{", entity));
                out.line(2, format!("return {}.create({{ data }});", delegate));
                out.line(1, "}");
                out.blank();

                out.line(
                    1,
                    format!("async update({}, data: any): Promise<{}> {{", params, entity),
                );
                out.line(
                    2,
                    format!(
                        "return {}.update({{ where: {}, data }});",
                        delegate, where_clause
                    ),
                );
                out.line(1, "}");
                out.blank();

                out.line(1, format!("async delete({}): Promise<{}> {{", params, entity));
                out.line(
                    2,
                    format!("return {}.delete({{ where: {} }});", delegate, where_clause),
                );
                out.line(1, "}");
            }
        }

        out.line(0, "}");
        out.finish()
    }
}

impl Emitter for RepositoryEmitter {
    fn id(&self) -> &'static str {
        "repository"
    }

    fn emit(&self, model: &Model, config: &GeneratorConfig) -> Vec<GeneratedFile> {
        let names = ModuleNames::new(model.name());
        vec![GeneratedFile::new(
            ArtifactKind::Repository,
            ArtifactKind::Repository.relative_path(&names.kebab, &config.file_extension),
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
        RepositoryEmitter::new()
            .emit(&model, &GeneratorConfig::default())
            .remove(0)
            .content
    }

    #[test]
    fn test_basic_single_identity() {
        let content = render(
            "model Product {\n  id Int @id\n  name String\n  createdAt DateTime\n  updatedAt DateTime\n}",
        );

        assert!(!content.contains("BaseRepository"));
        assert!(content.contains("import { Product } from '@prisma/client';"));
        assert!(content.contains("export class ProductRepository {\n"));
        assert!(content.contains("  constructor(private readonly prisma: DatabaseService) {}\n"));
        assert!(content.contains("    return this.prisma.product.findMany();\n"));
        assert!(content.contains(
            "  async findById(id: number): Promise<Product | null> {\n    return this.prisma.product.findUnique({ where: { id } });\n"
        ));
        assert!(content.contains("  async update(id: number, data: any): Promise<Product> {\n"));
        assert!(content.contains("this.prisma.product.update({ where: { id }, data });"));
        assert!(content.contains("  async delete(id: number): Promise<Product> {\n"));
    }

    #[test]
    fn test_basic_composite_identity() {
        let content = render(
            "model ProductCategory {\n  categoryId Int\n  productId Int\n  @@id([categoryId, productId])\n}",
        );

        assert!(content.contains(
            "async findByCompositeId(categoryId: number, productId: number): Promise<ProductCategory | null>"
        ));
        assert!(content.contains(
            "this.prisma.productCategory.findUnique({ where: { categoryId_productId: { categoryId, productId } } });"
        ));
        assert!(content.contains(
            "async update(categoryId: number, productId: number, data: any): Promise<ProductCategory>"
        ));
        assert!(content.contains(
            "async delete(categoryId: number, productId: number): Promise<ProductCategory>"
        ));
        assert!(!content.contains("findById"));
    }

    #[test]
    fn test_rich_branch() {
        let content = render(
            "model Brand {\n  id Int @id\n  name String\n  slug String?\n  logo Media?\n  notes String[]\n  createdAt DateTime\n  updatedAt DateTime\n  deletedAt DateTime?\n}",
        );

        assert!(content.contains(
            "import { BaseRepository } from '../../common/repositories/base.repository';"
        ));
        assert!(content.contains("export class BrandRepository extends BaseRepository<Brand> {\n"));
        assert!(content.contains("  protected model = this.prisma.brand;\n"));
        assert!(content.contains(
            "  constructor(protected readonly prisma: DatabaseService) {\n    super(prisma);\n  }\n"
        ));
        assert!(content.contains("    return ['name', 'slug', 'notes'];\n"));
        assert!(!content.contains("findMany"));
    }

    #[test]
    fn test_rich_branch_ignores_composite_identity() {
        let content = render(
            "model Tag {\n  a Int\n  b Int\n  createdAt DateTime\n  updatedAt DateTime\n  deletedAt DateTime?\n  @@id([a, b])\n}",
        );
        assert!(content.contains("extends BaseRepository<Tag>"));
        assert!(content.contains("    return [];\n"));
        assert!(!content.contains("a_b"));
    }

    #[test]
    fn test_lowercase_model_uses_declared_type() {
        let content = render("model user {\n  id Int @id\n  name String\n}");

        assert!(content.contains("import { user } from '@prisma/client';"));
        assert!(content.contains("export class UserRepository {\n"));
        assert!(content.contains("  async findAll(): Promise<user[]> {\n"));
        assert!(content.contains("  async findById(id: number): Promise<user | null> {\n"));
        assert!(content.contains("    return this.prisma.user.findMany();\n"));
    }

    #[test]
    fn test_named_composite_identity_uses_declared_key() {
        let content = render(
            "model Pair {\n  a Int\n  b Int\n  @@id(fields: [a, b], name: \"pairKey\")\n}",
        );
        assert!(content.contains("findUnique({ where: { pairKey: { a, b } } })"));
        assert!(!content.contains("a_b"));
    }
}
