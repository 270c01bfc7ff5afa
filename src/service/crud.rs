//! Generic CRUD execution against SQLite, parameterized by a resource descriptor.

use crate::config::{ColumnType, ResourceDef};
use crate::error::AppError;
use crate::sql::{delete, insert, select_by_id, select_list, update, QueryBuf, SqliteBindValue};
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::query::Query;
use sqlx::{Sqlite, SqlitePool};

/// Outcome of a write that targets one row by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Updated,
    Deleted,
    NotFound,
}

pub struct CrudService;

impl CrudService {
    /// Every row of the table, in storage order.
    pub async fn list(pool: &SqlitePool, resource: &ResourceDef) -> Result<Vec<Value>, AppError> {
        let q = select_list(resource);
        tracing::debug!(sql = %q.sql, "query");
        let rows = sqlx::query(&q.sql).fetch_all(pool).await?;
        Ok(rows.iter().map(|r| row_to_json(resource, r)).collect())
    }

    /// Fetch one row by primary key. Returns JSON object or None.
    pub async fn read(pool: &SqlitePool, resource: &ResourceDef, id: i64) -> Result<Option<Value>, AppError> {
        let q = select_by_id(resource, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(&q).fetch_optional(pool).await?;
        Ok(row.map(|r| row_to_json(resource, &r)))
    }

    /// Insert one row from the payload. Returns the id assigned by the database.
    pub async fn create(
        pool: &SqlitePool,
        resource: &ResourceDef,
        body: &Map<String, Value>,
    ) -> Result<i64, AppError> {
        let q = insert(resource, body);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_all(&q).execute(pool).await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every column of the row with the payload.
    pub async fn update(
        pool: &SqlitePool,
        resource: &ResourceDef,
        id: i64,
        body: &Map<String, Value>,
    ) -> Result<WriteOutcome, AppError> {
        let q = update(resource, id, body);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_all(&q).execute(pool).await?;
        Ok(if result.rows_affected() > 0 {
            WriteOutcome::Updated
        } else {
            WriteOutcome::NotFound
        })
    }

    pub async fn delete(pool: &SqlitePool, resource: &ResourceDef, id: i64) -> Result<WriteOutcome, AppError> {
        let q = delete(resource, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_all(&q).execute(pool).await?;
        Ok(if result.rows_affected() > 0 {
            WriteOutcome::Deleted
        } else {
            WriteOutcome::NotFound
        })
    }
}

fn bind_all(q: &QueryBuf) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(SqliteBindValue::from_json(p));
    }
    query
}

/// Row as a JSON object: `id` plus every descriptor column, read by position.
fn row_to_json(resource: &ResourceDef, row: &SqliteRow) -> Value {
    let mut map = Map::new();
    map.insert(resource.pk_column().to_string(), cell_to_value(row, 0, ColumnType::Integer));
    for (i, c) in resource.columns.iter().enumerate() {
        map.insert(c.name.to_string(), cell_to_value(row, i + 1, c.ty));
    }
    Value::Object(map)
}

/// SQLite is dynamically typed, so decode by the storage class of the value itself.
///
/// BOOLEAN-declared columns holding an integer come back as JSON booleans (0 is `false`, any
/// other value `true`), so a payload that sent `1` reads back `true`.
/// REAL values without a fractional part come back as JSON integers, so `2` reads back `2`
/// rather than `2.0`.
fn cell_to_value(row: &SqliteRow, index: usize, declared: ColumnType) -> Value {
    use sqlx::{Row, TypeInfo, ValueRef};

    let raw = match row.try_get_raw(index) {
        Ok(raw) => raw,
        Err(_) => return Value::Null,
    };
    if raw.is_null() {
        return Value::Null;
    }
    let storage_class = raw.type_info().name().to_string();
    match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => match row.try_get::<i64, _>(index) {
            Ok(n) if declared == ColumnType::Boolean => Value::Bool(n != 0),
            Ok(n) => Value::Number(n.into()),
            Err(_) => Value::Null,
        },
        "REAL" => row
            .try_get::<f64, _>(index)
            .map(real_to_value)
            .unwrap_or(Value::Null),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(|b| Value::String(String::from_utf8_lossy(&b).into_owned()))
            .unwrap_or(Value::Null),
        _ => row
            .try_get::<String, _>(index)
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}

/// Largest magnitude below which every integral f64 converts to i64 exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn real_to_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
        return Value::Number((f as i64).into());
    }
    serde_json::Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
