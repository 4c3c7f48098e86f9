//! Schema module for gridsource.
//!
//! This module contains the column schema entry and the helpers that turn a
//! column reference into a column name or derive a schema from data.

mod column;
mod resolve;

pub use column::{Calculator, ColumnSchema, CompareFn, Comparator};
pub use resolve::{infer_schema, resolve_column, ColumnRef};
