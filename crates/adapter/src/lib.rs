//! gridsource Adapter - In-memory tabular data adapter for host grids.
//!
//! This crate provides `TabularDataAdapter`, which holds rows and a column
//! schema and exposes the read, write and shape-mutation interface a grid
//! rendering component calls on every render pass:
//!
//! - Schema: `get_schema`, `set_schema`, `set_data`, inference from data
//! - Cells: `get_value` / `set_value` addressed by `(ColumnRef, row)`
//! - Rows: `get_row`, `add_row`, `set_row`, `del_row`
//! - Metadata: `get_row_metadata`, `set_row_metadata`
//! - Specializations: tree/row-number pseudo-columns and sub-row aggregation
//!
//! # Example
//!
//! ```rust
//! use gridsource_adapter::{CellValue, TabularDataAdapter};
//! use gridsource_core::{Record, Value};
//!
//! let mut adapter = TabularDataAdapter::new();
//! adapter.set_data(
//!     vec![
//!         Record::new().with("id", 1i64).with("name", "Alice"),
//!         Record::new().with("id", 2i64).with("name", "Bob"),
//!     ],
//!     None,
//! );
//!
//! assert_eq!(adapter.get_column_count(), 2);
//! assert_eq!(adapter.get_value(1usize, 0), CellValue::Value(Value::from("Alice")));
//!
//! adapter.set_value("name", 1, "Robert").unwrap();
//! assert_eq!(adapter.get_value("name", 1), CellValue::Value(Value::from("Robert")));
//! assert_eq!(adapter.get_value("name", 2), CellValue::NoRow);
//! ```

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod aggregation;
pub mod options;
pub mod tree;

pub use adapter::{CellValue, TabularDataAdapter};
pub use aggregation::{RowAggregation, SpanAggregation, SpanTrigger};
pub use options::{AdapterBuilder, AdapterOptions};
pub use tree::TreeColumns;

// Re-export commonly used types from dependencies
pub use gridsource_core::schema::{ColumnRef, ColumnSchema};
pub use gridsource_core::{Error, Metadata, MetadataKey, Properties, Record, Result, RowSlot, Value};
pub use gridsource_reactive::{Notification, SubscriptionId};
