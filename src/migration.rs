//! Apply the catalog to the database: one `CREATE TABLE IF NOT EXISTS` per resource.
//! There is no versioned migration; existing tables are left untouched.

use crate::config::{Catalog, ResourceDef};
use crate::error::AppError;
use sqlx::SqlitePool;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// DDL for one resource, foreign keys included as table constraints.
pub fn create_table_sql(resource: &ResourceDef) -> String {
    let mut col_defs: Vec<String> = vec![format!(
        "{} INTEGER PRIMARY KEY AUTOINCREMENT",
        quote(resource.pk_column())
    )];
    for c in resource.columns {
        let mut def = format!("{} {}", quote(c.name), c.ty.sql_name());
        if !c.nullable {
            def.push_str(" NOT NULL");
        }
        if let Some(d) = c.default {
            def.push_str(" DEFAULT ");
            def.push_str(d);
        }
        col_defs.push(def);
    }
    for c in resource.columns {
        if let Some(fk) = &c.references {
            col_defs.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                quote(c.name),
                quote(fk.table),
                quote(fk.column)
            ));
        }
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(resource.table_name),
        col_defs.join(",\n  ")
    )
}

/// Idempotent: safe to run at every process start.
pub async fn apply_schema(pool: &SqlitePool, catalog: &Catalog) -> Result<(), AppError> {
    for resource in catalog.resources() {
        let sql = create_table_sql(resource);
        tracing::debug!(sql = %sql, "ddl");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(tables = catalog.resources().len(), "database tables initialized");
    Ok(())
}
