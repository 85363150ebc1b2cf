//! Controller emitter.
//!
//! Basic controllers expose five routes under `/<kebab-name>`:
//!
//! | Method | Route         | Handler   |
//! |--------|---------------|-----------|
//! | POST   | `/`           | `create`  |
//! | GET    | `/`           | `findAll` |
//! | GET    | `/:id`        | `findOne` |
//! | PATCH  | `/:id`        | `update`  |
//! | DELETE | `/:id`        | `remove`  |
//!
//! With a composite identity `:id` becomes one segment per field.
//! Rich controllers inherit their routes from `BaseController`.

use crate::ir::{Capability, Model};

use super::identity;
use super::names::ModuleNames;
use super::source::SourceBuilder;
use super::traits::{ArtifactKind, Emitter, GeneratedFile, GeneratorConfig};

/// Emits `<name>.controller`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerEmitter;

/// One documented endpoint of a basic controller.
struct Endpoint {
    decorator: String,
    summary: String,
    status: u16,
    description: String,
    signature: String,
    body: String,
}

impl ControllerEmitter {
    pub fn new() -> Self {
        Self
    }

    fn endpoints(model: &Model, names: &ModuleNames) -> Vec<Endpoint> {
        let id = model.identity();
        let entity = &names.prisma_type;
        let lower = &names.lower;
        let service = format!("this.{}", names.service_var());
        let route = identity::route(&id);
        let route_params = identity::route_params(&id);
        let args = identity::args(&id);

        let endpoint = |decorator: String,
                        summary: String,
                        status: u16,
                        description: String,
                        signature: String,
                        body: String| Endpoint {
            decorator,
            summary,
            status,
            description,
            signature,
            body,
        };

        vec![
            endpoint(
                "@Post()".to_string(),
                format!("Create {}", lower),
                201,
                format!("The {} has been successfully created.", lower),
                format!(
                    "create(@Body() createDto: {}): Promise<{}>",
                    names.create_dto(),
                    entity
                ),
                format!("return {}.create(createDto);", service),
            ),
            endpoint(
                "@Get()".to_string(),
                format!("Get all {}s", lower),
                200,
                format!("Return all {}s.", lower),
                format!("findAll(): Promise<{}[]>", entity),
                format!("return {}.findAll();", service),
            ),
            endpoint(
                format!("@Get('{}')", route),
                format!("Get {} {}", lower, identity::lookup_phrase(&id)),
                200,
                format!("Return the {}.", lower),
                format!("findOne({}): Promise<{} | null>", route_params, entity),
                format!("return {}.{}({});", service, identity::finder(&id), args),
            ),
            endpoint(
                format!("@Patch('{}')", route),
                format!("Update {}", lower),
                200,
                format!("The {} has been successfully updated.", lower),
                format!(
                    "update({}, @Body() updateDto: {}): Promise<{}>",
                    route_params,
                    names.update_dto(),
                    entity
                ),
                format!("return {}.update({}, updateDto);", service, args),
            ),
            endpoint(
                format!("@Delete('{}')", route),
                format!("Delete {}", lower),
                200,
                format!("The {} has been successfully deleted.", lower),
                format!("remove({}): Promise<{}>", route_params, entity),
                format!("return {}.delete({});", service, args),
            ),
        ]
    }

    fn render(&self, model: &Model, names: &ModuleNames, config: &GeneratorConfig) -> String {
        let capability = model.capability();
        let entity = &names.prisma_type;
        let service = names.service();
        let mut out = SourceBuilder::new(config.indent);

        match capability {
            Capability::Rich => {
                out.line(0, "import { Controller } from '@nestjs/common';");
                out.line(0, "import { ApiTags } from '@nestjs/swagger';");
                out.line(
                    0,
                    format!(
                        "import {{ BaseController }} from '{}';",
                        config.imports.base_controller
                    ),
                );
            }
            Capability::Basic => {
                out.line(
                    0,
                    "import { Controller, Get, Post, Body, Patch, Param, Delete, ParseIntPipe } from '@nestjs/common';",
                );
                out.line(
                    0,
                    "import { ApiTags, ApiOperation, ApiResponse } from '@nestjs/swagger';",
                );
            }
        }
        out.line(
            0,
            format!("import {{ {} }} from '{}';", entity, config.imports.prisma_client),
        );
        out.line(
            0,
            format!("import {{ {} }} from '{}';", service, names.sibling("service")),
        );
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
        out.line(0, format!("@ApiTags('{}')", names.kebab));
        out.line(0, format!("@Controller('{}')", names.kebab));

        match capability {
            Capability::Rich => {
                out.line(
                    0,
                    format!(
                        "export class {} extends BaseController<{}> {{",
                        names.controller(),
                        entity
                    ),
                );
                out.line(1, format!("protected resourceName = '{}';", entity));
                out.blank();
                out.line(
                    1,
                    format!("constructor(protected readonly service: {}) {{", service),
                );
                out.line(2, "super(service);");
                out.line(1, "}");
                out.blank();
                out.line(1, "// Add custom endpoints here");
            }
            Capability::Basic => {
                out.line(0, format!("export class {} {{", names.controller()));
                out.line(
                    1,
                    format!(
                        "constructor(private readonly {}: {}) {{}}",
                        names.service_var(),
                        service
                    ),
                );

                for endpoint in Self::endpoints(model, names) {
                    out.blank();
                    out.line(1, &endpoint.decorator);
                    out.line(
                        1,
                        format!("@ApiOperation({{ summary: '{}' }})", endpoint.summary),
                    );
                    out.line(
                        1,
                        format!(
                            "@ApiResponse({{ status: {}, description: '{}' }})",
                            endpoint.status, endpoint.description
                        ),
                    );
                    out.line(1, format!("{} {{", endpoint.signature));
                    out.line(2, &endpoint.body);
                    out.line(1, "}");
                }
            }
        }

        out.line(0, "}");
        out.finish()
    }
}

impl Emitter for ControllerEmitter {
    fn id(&self) -> &'static str {
        "controller"
    }

    fn emit(&self, model: &Model, config: &GeneratorConfig) -> Vec<GeneratedFile> {
        let names = ModuleNames::new(model.name());
        vec![GeneratedFile::new(
            ArtifactKind::Controller,
            ArtifactKind::Controller.relative_path(&names.kebab, &config.file_extension),
            self.render(model, &names, config),
        )]
    }
}
