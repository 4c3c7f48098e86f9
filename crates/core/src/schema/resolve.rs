//! Column addressing and schema inference.

use super::column::ColumnSchema;
use crate::record::RowSlot;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// A reference to a column, either by position in the schema or by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    /// Position in the schema.
    Index(usize),
    /// Column name, used as-is.
    Name(String),
}

impl ColumnRef {
    /// Human-readable form for error messages.
    pub fn describe(&self) -> String {
        match self {
            ColumnRef::Index(i) => format!("#{}", i),
            ColumnRef::Name(name) => name.clone(),
        }
    }
}

impl From<usize> for ColumnRef {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::Name(name.into())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::Name(name)
    }
}

impl From<&String> for ColumnRef {
    fn from(name: &String) -> Self {
        ColumnRef::Name(name.clone())
    }
}

/// Resolves a column reference to a column name.
///
/// Names resolve to themselves without consulting the schema; indices resolve
/// through `schema[index].name` and yield `None` when out of range.
pub fn resolve_column<'a>(schema: &'a [ColumnSchema], column: &'a ColumnRef) -> Option<&'a str> {
    match column {
        ColumnRef::Index(i) => schema.get(*i).map(ColumnSchema::name),
        ColumnRef::Name(name) => Some(name.as_str()),
    }
}

/// Derives a schema from the field names of the first non-blank row.
pub fn infer_schema(rows: &[RowSlot]) -> Vec<ColumnSchema> {
    rows.iter()
        .flatten()
        .next()
        .map(|record| record.keys().map(ColumnSchema::new).collect())
        .unwrap_or_default()
}
