//! Catalog validation: unique paths and tables, and foreign keys that point inside the catalog.

use crate::config::types::ResourceDef;
use crate::error::ConfigError;
use std::collections::HashSet;

pub fn validate(resources: &[&ResourceDef]) -> Result<(), ConfigError> {
    let mut path_segments = HashSet::new();
    let mut table_names = HashSet::new();
    for r in resources {
        if !path_segments.insert(r.path_segment) {
            return Err(ConfigError::DuplicatePathSegment(r.path_segment.to_string()));
        }
        if !table_names.insert(r.table_name) {
            return Err(ConfigError::DuplicateTable(r.table_name.to_string()));
        }
        if r.columns.is_empty() {
            return Err(ConfigError::EmptyResource(r.path_segment.to_string()));
        }
    }

    for r in resources {
        let mut column_names = HashSet::new();
        for c in r.columns {
            if c.name == r.pk_column() || !column_names.insert(c.name) {
                return Err(ConfigError::DuplicateColumn {
                    table: r.table_name.to_string(),
                    column: c.name.to_string(),
                });
            }
            if let Some(fk) = &c.references {
                if !table_names.contains(fk.table) {
                    return Err(ConfigError::MissingReference {
                        kind: "table",
                        id: format!("{}.{} -> {}", r.table_name, c.name, fk.table),
                    });
                }
            }
        }
    }

    Ok(())
}
