//! Symbol and file names derived from a model name.

use crate::naming::{to_camel_case, to_kebab_case, to_pascal_case};

/// Every name an emitter needs for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNames {
    /// Class name stem (`DomCategory`).
    pub entity: String,

    /// Type exported by the Prisma client, exactly as declared.
    pub prisma_type: String,

    /// Prisma client accessor (`domCategory`).
    pub camel: String,

    /// File and route stem (`dom-category`).
    pub kebab: String,

    /// Lowercased name for human-readable summaries (`domcategory`).
    pub lower: String,
}

impl ModuleNames {
    pub fn new(model_name: &str) -> Self {
        Self {
            entity: to_pascal_case(model_name),
            prisma_type: model_name.to_string(),
            camel: to_camel_case(model_name),
            kebab: to_kebab_case(model_name),
            lower: model_name.to_lowercase(),
        }
    }

    pub fn create_dto(&self) -> String {
        format!("Create{}Dto", self.entity)
    }

    pub fn update_dto(&self) -> String {
        format!("Update{}Dto", self.entity)
    }

    pub fn repository(&self) -> String {
        format!("{}Repository", self.entity)
    }

    pub fn service(&self) -> String {
        format!("{}Service", self.entity)
    }

    pub fn controller(&self) -> String {
        format!("{}Controller", self.entity)
    }

    pub fn module(&self) -> String {
        format!("{}Module", self.entity)
    }

    /// Constructor-injected repository property (`domCategoryRepository`).
    pub fn repository_var(&self) -> String {
        format!("{}Repository", self.camel)
    }

    /// Constructor-injected service property (`domCategoryService`).
    pub fn service_var(&self) -> String {
        format!("{}Service", self.camel)
    }

    /// Relative import of a sibling artifact (`./dom-category.service`).
    pub fn sibling(&self, suffix: &str) -> String {
        format!("./{}.{}", self.kebab, suffix)
    }

    /// Relative import of a DTO from the module root.
    pub fn dto_import(&self, prefix: &str) -> String {
        format!("./dto/{}-{}.dto", prefix, self.kebab)
    }
}
