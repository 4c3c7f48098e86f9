//! Row record for gridsource.
//!
//! A `Record` is one row of the data set: an insertion-ordered mapping from
//! column name to value. Metadata is held in its own field, out of band, so it
//! never shows up in field enumeration.

use crate::metadata::Metadata;
use crate::value::Value;
use alloc::string::String;
use alloc::vec::Vec;

/// A row slot. `None` is a blank row, distinct from an empty record.
pub type RowSlot = Option<Record>;

/// A row in the data set.
#[derive(Clone, Debug, Default)]
pub struct Record {
    /// Field values in insertion order.
    fields: Vec<(String, Value)>,
    /// Attached metadata, if any.
    metadata: Option<Metadata>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record from name/value pairs. Later duplicates overwrite
    /// earlier ones in place.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut record = Self::new();
        for (name, value) in fields {
            record.set(name, value);
        }
        record
    }

    /// Builder-style field setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Gets the value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Gets a mutable reference to the value of a field.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.iter_mut().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Sets a field. An existing field keeps its position; a new one is
    /// appended. Returns the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.get_mut(&name) {
            Some(slot) => Some(core::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let pos = self.fields.iter().position(|(k, _)| k == name)?;
        Some(self.fields.remove(pos).1)
    }

    /// Returns true if the field is set.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if this record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    #[inline]
    pub fn metadata_mut(&mut self) -> Option<&mut Metadata> {
        self.metadata.as_mut()
    }

    /// Attaches metadata, or detaches it when `None`. Returns the previous one.
    pub fn set_metadata(&mut self, metadata: Option<Metadata>) -> Option<Metadata> {
        core::mem::replace(&mut self.metadata, metadata)
    }

    /// Returns the metadata, installing `fallback` first if none is attached.
    pub fn metadata_or_insert(&mut self, fallback: Metadata) -> &mut Metadata {
        self.metadata.get_or_insert(fallback)
    }
}

/// Records compare by their fields only; metadata is presentation state.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}
