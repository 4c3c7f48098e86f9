//! gridsource Core - Core value, row and schema types for gridsource.
//!
//! This crate provides the foundational types for the gridsource tabular data
//! adapter:
//!
//! - `Value`: Runtime values a cell can hold
//! - `DataType`: Declared column types and their string names
//! - `Record`: An insertion-ordered row with out-of-band metadata
//! - `Metadata`: Sparse per-row and per-cell properties
//! - `schema`: Column schema entries, column references and schema inference
//! - `Error`: Error types for adapter operations
//!
//! # Example
//!
//! ```rust
//! use gridsource_core::{Record, Value};
//! use gridsource_core::schema::{infer_schema, resolve_column, ColumnRef};
//!
//! let rows = vec![Some(Record::new().with("id", 1i64).with("name", "Alice"))];
//! let schema = infer_schema(&rows);
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(resolve_column(&schema, &ColumnRef::Index(1)), Some("name"));
//! assert_eq!(rows[0].as_ref().and_then(|r| r.get("id")), Some(&Value::Int64(1)));
//! ```

#![no_std]

extern crate alloc;

mod error;
pub mod metadata;
mod record;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use metadata::{Metadata, MetadataKey, Properties};
pub use record::{Record, RowSlot};
pub use types::DataType;
pub use value::Value;
