//! Validated catalog of resources, indexed by path segment for routing.

use crate::config::catalog::BUILTIN_RESOURCES;
use crate::config::types::ResourceDef;
use crate::config::validate;
use crate::error::ConfigError;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct Catalog {
    resources: Vec<&'static ResourceDef>,
    by_path: HashMap<&'static str, &'static ResourceDef>,
}

impl Catalog {
    /// Validate and index the given resources. Order is preserved for DDL and introspection.
    pub fn new(resources: &[&'static ResourceDef]) -> Result<Self, ConfigError> {
        validate(resources)?;
        let by_path = resources.iter().map(|r| (r.path_segment, *r)).collect();
        Ok(Catalog {
            resources: resources.to_vec(),
            by_path,
        })
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(BUILTIN_RESOURCES)
    }

    pub fn resource_by_path(&self, path: &str) -> Option<&'static ResourceDef> {
        self.by_path.get(path).copied()
    }

    pub fn resources(&self) -> &[&'static ResourceDef] {
        &self.resources
    }
}
