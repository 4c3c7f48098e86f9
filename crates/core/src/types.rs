//! Data type definitions for gridsource.
//!
//! A column schema entry may carry a `type`; this module defines the set of
//! types a cell value can have and their stable string names.

/// Supported cell data types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Boolean type (true/false)
    Boolean,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point number
    Float64,
    /// UTF-8 string
    String,
    /// Date and time stored as Unix timestamp (milliseconds)
    DateTime,
    /// Binary data
    Bytes,
    /// Ordered list of nested values
    List,
}

impl DataType {
    /// All data types, in type-rank order.
    pub const ALL: [DataType; 8] = [
        DataType::Boolean,
        DataType::Int32,
        DataType::Int64,
        DataType::Float64,
        DataType::String,
        DataType::DateTime,
        DataType::Bytes,
        DataType::List,
    ];

    /// Returns the lowercase name used in schema descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::Float64 => "float64",
            DataType::String => "string",
            DataType::DateTime => "datetime",
            DataType::Bytes => "bytes",
            DataType::List => "list",
        }
    }

    /// Parses a type name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<DataType> {
        Self::ALL
            .iter()
            .copied()
            .find(|dt| dt.name().eq_ignore_ascii_case(name))
    }

    /// Returns whether values of this type are numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int32 | DataType::Int64 | DataType::Float64)
    }
}
