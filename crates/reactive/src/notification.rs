//! Notification kinds emitted to the host grid.
//!
//! Notifications carry no payload beyond their kind. The host reacts by
//! re-reading the schema or re-laying out rows.

use core::fmt;

/// Name of the schema-changed notification.
pub const SCHEMA_CHANGED: &str = "schema-changed";

/// Name of the shape-changed notification.
pub const DATA_SHAPE_CHANGED: &str = "data-shape-changed";

/// Legacy name the deferred sub-row path used for the shape notification.
pub const LEGACY_SHAPE_CHANGED: &str = "shape-changed";

/// A notification emitted by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notification {
    /// The column schema was replaced or edited.
    SchemaChanged,
    /// Row count or row layout changed; the host must re-layout.
    ShapeChanged,
}

impl Notification {
    /// Returns the host-facing event name.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::SchemaChanged => SCHEMA_CHANGED,
            Notification::ShapeChanged => DATA_SHAPE_CHANGED,
        }
    }

    /// Parses an event name. The legacy shape name maps to `ShapeChanged`.
    pub fn from_name(name: &str) -> Option<Notification> {
        match name {
            SCHEMA_CHANGED => Some(Notification::SchemaChanged),
            DATA_SHAPE_CHANGED | LEGACY_SHAPE_CHANGED => Some(Notification::ShapeChanged),
            _ => None,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
