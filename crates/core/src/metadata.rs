//! Per-row metadata.
//!
//! Metadata is a sparse property store the host grid uses for styling and
//! sizing. Each row may carry one `Metadata` record, keyed either by the
//! reserved row-level key or by a column name for per-cell properties.

use crate::value::Value;
use alloc::string::String;
use hashbrown::HashMap;

/// Property name for the display height of a row.
pub const HEIGHT: &str = "height";

/// Key of a metadata entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    /// The reserved row-level entry.
    Row,
    /// Per-cell entry for the named column.
    Column(String),
}

impl From<&str> for MetadataKey {
    fn from(name: &str) -> Self {
        MetadataKey::Column(name.into())
    }
}

impl From<String> for MetadataKey {
    fn from(name: String) -> Self {
        MetadataKey::Column(name)
    }
}

/// A properties object: property name to value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    values: HashMap<String, Value>,
}

impl Properties {
    /// Creates an empty properties object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Sets a property, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Returns the display height, if one is set as an integer.
    pub fn height(&self) -> Option<i64> {
        match self.values.get(HEIGHT)? {
            Value::Int32(h) => Some(*h as i64),
            Value::Int64(h) => Some(*h),
            _ => None,
        }
    }

    pub fn set_height(&mut self, height: i64) {
        self.values.insert(HEIGHT.into(), Value::Int64(height));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Metadata attached to a single row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    entries: HashMap<MetadataKey, Properties>,
}

impl Metadata {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates metadata holding only row-level properties.
    pub fn for_row(properties: Properties) -> Self {
        let mut metadata = Self::new();
        metadata.set(MetadataKey::Row, properties);
        metadata
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<MetadataKey>, properties: Properties) -> Self {
        self.set(key, properties);
        self
    }

    pub fn get(&self, key: &MetadataKey) -> Option<&Properties> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &MetadataKey) -> Option<&mut Properties> {
        self.entries.get_mut(key)
    }

    /// Sets the properties for a key, returning the previous ones.
    pub fn set(&mut self, key: impl Into<MetadataKey>, properties: Properties) -> Option<Properties> {
        self.entries.insert(key.into(), properties)
    }

    pub fn remove(&mut self, key: &MetadataKey) -> Option<Properties> {
        self.entries.remove(key)
    }

    /// Returns the row-level properties.
    pub fn row(&self) -> Option<&Properties> {
        self.entries.get(&MetadataKey::Row)
    }

    /// Returns the row-level properties, creating them if absent.
    pub fn row_mut(&mut self) -> &mut Properties {
        self.entries.entry(MetadataKey::Row).or_default()
    }

    /// Returns the properties of the named column's cell.
    pub fn cell(&self, column: &str) -> Option<&Properties> {
        self.entries.get(&MetadataKey::Column(column.into()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_set_get() {
        let mut props = Properties::new();
        assert!(props.is_empty());
        assert_eq!(props.set("color", "red"), None);
        assert_eq!(props.get("color"), Some(&Value::String("red".into())));
        assert_eq!(props.set("color", "blue"), Some(Value::String("red".into())));
        assert_eq!(props.len(), 1);
        assert_eq!(props.remove("color"), Some(Value::String("blue".into())));
        assert!(props.is_empty());
    }

    #[test]
    fn test_properties_height() {
        let mut props = Properties::new();
        assert_eq!(props.height(), None);
        props.set_height(60);
        assert_eq!(props.height(), Some(60));

        let props = Properties::new().with(HEIGHT, 30i32);
        assert_eq!(props.height(), Some(30));

        let props = Properties::new().with(HEIGHT, "tall");
        assert_eq!(props.height(), None);
    }

    #[test]
    fn test_metadata_row_and_cell() {
        let metadata = Metadata::for_row(Properties::new().with("font", "bold"))
            .with("price", Properties::new().with("color", "green"));

        assert_eq!(metadata.len(), 2);
        assert_eq!(
            metadata.row().and_then(|p| p.get("font")),
            Some(&Value::String("bold".into()))
        );
        assert!(metadata.cell("price").is_some());
        assert!(metadata.cell("name").is_none());
    }

    #[test]
    fn test_metadata_row_mut_creates_entry() {
        let mut metadata = Metadata::new();
        assert!(metadata.row().is_none());
        metadata.row_mut().set_height(40);
        assert_eq!(metadata.row().and_then(Properties::height), Some(40));
    }

    #[test]
    fn test_metadata_remove() {
        let mut metadata = Metadata::new().with("a", Properties::new());
        let key = MetadataKey::from("a");
        assert!(metadata.get(&key).is_some());
        assert!(metadata.remove(&key).is_some());
        assert!(metadata.is_empty());
    }
}
