//! Adapter configuration and builder.

use crate::adapter::TabularDataAdapter;
use crate::aggregation::RowAggregation;
use crate::tree::TreeColumns;
use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use gridsource_core::schema::ColumnSchema;
use gridsource_core::{Error, Record, Result, RowSlot};
use gridsource_reactive::{Notification, NotificationCallback};

/// Optional specializations of an adapter.
#[derive(Clone, Default)]
pub struct AdapterOptions {
    /// Reserved positions for the tree and row-number pseudo-columns.
    pub tree_columns: Option<TreeColumns>,
    /// Sub-row aggregation strategy.
    pub aggregation: Option<Rc<dyn RowAggregation>>,
}

impl AdapterOptions {
    /// Checks that the options are consistent.
    pub fn validate(&self) -> Result<()> {
        if let Some(tree) = &self.tree_columns {
            if tree.tree_column_index == tree.row_column_index {
                return Err(Error::invalid_schema(format!(
                    "Tree and row-number columns share index {}",
                    tree.tree_column_index
                )));
            }
        }
        Ok(())
    }
}

/// Builder for creating adapters.
///
/// # Example
///
/// ```rust
/// use gridsource_adapter::AdapterBuilder;
/// use gridsource_core::Record;
///
/// let adapter = AdapterBuilder::new()
///     .rows(vec![Record::new().with("a", 1i32)])
///     .tree_columns(0, 1)
///     .build()
///     .unwrap();
///
/// assert_eq!(adapter.get_column_count(), 3);
/// ```
#[derive(Default)]
pub struct AdapterBuilder {
    rows: Vec<RowSlot>,
    schema: Vec<ColumnSchema>,
    options: AdapterOptions,
    callbacks: Vec<NotificationCallback>,
}

impl AdapterBuilder {
    /// Creates a builder with no data and no specializations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial rows.
    pub fn rows(mut self, rows: impl IntoIterator<Item = Record>) -> Self {
        self.rows = rows.into_iter().map(Some).collect();
        self
    }

    /// Sets the initial row slots, blanks included.
    pub fn row_slots(mut self, rows: impl IntoIterator<Item = RowSlot>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }

    /// Sets the initial schema. Left empty, it is inferred from the rows.
    pub fn schema(mut self, schema: Vec<ColumnSchema>) -> Self {
        self.schema = schema;
        self
    }

    /// Reserves positions for the tree and row-number pseudo-columns.
    pub fn tree_columns(mut self, tree_column_index: usize, row_column_index: usize) -> Self {
        self.options.tree_columns = Some(TreeColumns::new(tree_column_index, row_column_index));
        self
    }

    /// Installs a sub-row aggregation strategy.
    pub fn aggregation<A: RowAggregation + 'static>(mut self, aggregation: A) -> Self {
        self.options.aggregation = Some(Rc::new(aggregation));
        self
    }

    /// Replaces all options at once.
    pub fn options(mut self, options: AdapterOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers a notification callback.
    pub fn on_notification<F>(mut self, callback: F) -> Self
    where
        F: Fn(Notification) + 'static,
    {
        self.callbacks.push(Box::new(callback));
        self
    }

    /// Builds the adapter. No notifications are emitted while building.
    pub fn build(self) -> Result<TabularDataAdapter> {
        self.options.validate()?;
        let mut adapter = TabularDataAdapter::with_options(self.options);
        for callback in self.callbacks {
            adapter.subscribe(callback);
        }
        adapter.load(self.rows, self.schema);
        Ok(adapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::SpanAggregation;
    use alloc::vec;
    use core::cell::Cell;

    #[test]
    fn test_build_empty() {
        let adapter = AdapterBuilder::new().build().unwrap();
        assert_eq!(adapter.get_row_count(), 0);
        assert_eq!(adapter.get_column_count(), 0);
    }

    #[test]
    fn test_build_infers_schema() {
        let adapter = AdapterBuilder::new()
            .rows(vec![Record::new().with("x", 1i32).with("y", 2i32)])
            .build()
            .unwrap();
        assert_eq!(adapter.get_row_count(), 1);
        assert_eq!(
            adapter.get_schema(),
            &[ColumnSchema::new("x"), ColumnSchema::new("y")][..]
        );
    }

    #[test]
    fn test_build_keeps_given_schema() {
        let schema = vec![ColumnSchema::new("y").header("Y")];
        let adapter = AdapterBuilder::new()
            .rows(vec![Record::new().with("x", 1i32).with("y", 2i32)])
            .schema(schema.clone())
            .build()
            .unwrap();
        assert_eq!(adapter.get_schema(), &schema[..]);
    }

    #[test]
    fn test_build_rejects_shared_tree_index() {
        let result = AdapterBuilder::new().tree_columns(1, 1).build();
        assert!(matches!(result, Err(Error::InvalidSchema { .. })));
    }

    #[test]
    fn test_build_is_silent() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let adapter = AdapterBuilder::new()
            .rows(vec![Record::new().with("a", 1i32)])
            .on_notification(move |_| seen.set(seen.get() + 1))
            .build()
            .unwrap();
        assert_eq!(count.get(), 0);
        assert_eq!(adapter.subscriber_count(), 1);
    }

    #[test]
    fn test_build_with_aggregation() {
        let rows = (0..10).map(|i| Record::new().with("n", i as i64));
        let adapter = AdapterBuilder::new()
            .rows(rows)
            .aggregation(SpanAggregation::new(vec![
                crate::aggregation::SpanTrigger::new(2, "n", 3),
            ]))
            .build()
            .unwrap();
        assert_eq!(adapter.get_row_count(), 8);
    }

    #[test]
    fn test_build_with_blank_slots() {
        let adapter = AdapterBuilder::new()
            .row_slots(vec![None, Some(Record::new().with("k", "v"))])
            .build()
            .unwrap();
        assert_eq!(adapter.get_row_count(), 2);
        assert!(adapter.get_row(0).is_none());
        assert_eq!(adapter.get_schema(), &[ColumnSchema::new("k")][..]);
    }
}
