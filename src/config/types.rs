//! Table descriptors: one `ResourceDef` per REST-exposed table.

use serde::Serialize;

/// Declared SQLite column type. Drives DDL and how stored values are rendered back to JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Boolean,
}

impl ColumnType {
    pub fn sql_name(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
            ColumnType::Boolean => "BOOLEAN",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: ColumnType,
    pub nullable: bool,
    /// Raw SQL default expression, e.g. `1` or `FALSE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<ForeignKey>,
}

impl ColumnDef {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        ColumnDef {
            name,
            ty,
            nullable: true,
            default: None,
            references: None,
        }
    }

    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub const fn default_value(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    /// Declares `FOREIGN KEY (name) REFERENCES table(id)`.
    pub const fn references(mut self, table: &'static str) -> Self {
        self.references = Some(ForeignKey { table, column: PK_COLUMN });
        self
    }
}

/// Every table is keyed by an auto-incrementing integer `id`.
pub const PK_COLUMN: &str = "id";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceDef {
    pub path_segment: &'static str,
    pub table_name: &'static str,
    /// Human-readable singular name used in response messages ("Food item").
    pub label: &'static str,
    /// Overrides `label` in the update confirmation only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_label: Option<&'static str>,
    /// Non-key columns in insert/update order.
    pub columns: &'static [ColumnDef],
}

impl ResourceDef {
    pub fn pk_column(&self) -> &'static str {
        PK_COLUMN
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn not_found_message(&self) -> String {
        format!("{} not found", self.label)
    }

    pub fn updated_message(&self) -> String {
        format!("{} updated successfully", self.updated_label.unwrap_or(self.label))
    }

    pub fn deleted_message(&self) -> String {
        format!("{} deleted successfully", self.label)
    }
}
