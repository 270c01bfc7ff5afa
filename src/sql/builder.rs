//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a resource descriptor.
//! Identifiers come from the catalog only; every value is a `?` parameter.

use crate::config::ResourceDef;
use serde_json::{Map, Value};

/// Quote identifier for SQLite (safe: only from catalog).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }
}

/// `"id", "col1", "col2", ...` in descriptor order.
fn select_column_list(resource: &ResourceDef) -> String {
    std::iter::once(resource.pk_column())
        .chain(resource.columns.iter().map(|c| c.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One value per descriptor column, taken from the payload by name; absent fields bind NULL.
fn column_values(resource: &ResourceDef, body: &Map<String, Value>) -> Vec<Value> {
    resource
        .columns
        .iter()
        .map(|c| body.get(c.name).cloned().unwrap_or(Value::Null))
        .collect()
}

/// SELECT every row. No ORDER BY: rows come back in storage order.
pub fn select_list(resource: &ResourceDef) -> QueryBuf {
    QueryBuf::new(format!(
        "SELECT {} FROM {}",
        select_column_list(resource),
        quoted(resource.table_name)
    ))
}

/// SELECT by primary key. Caller binds the id as the sole param.
pub fn select_by_id(resource: &ResourceDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_column_list(resource),
        quoted(resource.table_name),
        quoted(resource.pk_column())
    ));
    q.params.push(Value::from(id));
    q
}

/// INSERT all descriptor columns positionally. The id is assigned by the database.
pub fn insert(resource: &ResourceDef, body: &Map<String, Value>) -> QueryBuf {
    let cols: Vec<String> = resource.columns.iter().map(|c| quoted(c.name)).collect();
    let placeholders = vec!["?"; cols.len()].join(", ");
    let mut q = QueryBuf::new(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(resource.table_name),
        cols.join(", "),
        placeholders
    ));
    q.params = column_values(resource, body);
    q
}

/// UPDATE every descriptor column (full-row overwrite), then the id as the last param.
pub fn update(resource: &ResourceDef, id: i64, body: &Map<String, Value>) -> QueryBuf {
    let set_parts: Vec<String> = resource
        .columns
        .iter()
        .map(|c| format!("{} = ?", quoted(c.name)))
        .collect();
    let mut q = QueryBuf::new(format!(
        "UPDATE {} SET {} WHERE {} = ?",
        quoted(resource.table_name),
        set_parts.join(", "),
        quoted(resource.pk_column())
    ));
    q.params = column_values(resource, body);
    q.params.push(Value::from(id));
    q
}

/// DELETE by primary key.
pub fn delete(resource: &ResourceDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "DELETE FROM {} WHERE {} = ?",
        quoted(resource.table_name),
        quoted(resource.pk_column())
    ));
    q.params.push(Value::from(id));
    q
}
