//! The tabular data adapter.
//!
//! `TabularDataAdapter` owns a row-oriented data set and its column schema
//! and answers the host grid's reads and writes. Rows are addressed by
//! position; columns by `ColumnRef`, either a schema index or a name.
//!
//! Shape mutations (`add_row`, `del_row`, `set_data`, `clear`) emit
//! `ShapeChanged`; schema mutations emit `SchemaChanged`. Reads never fail.

use crate::aggregation::RowAggregation;
use crate::options::AdapterOptions;
use crate::tree::TreeColumns;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use gridsource_core::schema::{infer_schema, resolve_column, ColumnRef, ColumnSchema};
use gridsource_core::{Error, Metadata, Record, Result, RowSlot, Value};
use gridsource_reactive::{Notification, Notifier, SubscriptionId};
use tracing::{debug, trace};

/// Result of reading a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    /// The row does not exist or is blank.
    NoRow,
    /// The row exists but the column could not be resolved or the field is unset.
    Undefined,
    /// The stored value.
    Value(Value),
    /// Values of several consecutive storage rows shown in one merged cell.
    SubRows(Vec<Value>),
}

impl CellValue {
    /// Returns true for the "no row" sentinel.
    #[inline]
    pub fn is_no_row(&self) -> bool {
        matches!(self, CellValue::NoRow)
    }

    /// Returns the single stored value, if any.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            CellValue::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the merged values, if this cell spans several rows.
    pub fn as_sub_rows(&self) -> Option<&[Value]> {
        match self {
            CellValue::SubRows(values) => Some(values),
            _ => None,
        }
    }

    /// Converts into the single stored value, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            CellValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// In-memory data set plus column schema, read and written by a host grid.
///
/// Single-threaded: the adapter holds `Rc` closures and is neither `Send`
/// nor `Sync`. Hosts that share it must serialize access themselves.
pub struct TabularDataAdapter {
    /// Row slots in display order. `None` is a blank row.
    rows: Vec<RowSlot>,
    /// Column schema in column order.
    schema: Vec<ColumnSchema>,
    /// Reserved tree and row-number columns.
    tree_columns: Option<TreeColumns>,
    /// Sub-row aggregation strategy.
    aggregation: Option<Rc<dyn RowAggregation>>,
    /// Host notification sink.
    notifier: Notifier,
}

impl Default for TabularDataAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TabularDataAdapter {
    /// Creates an empty adapter with no specializations.
    pub fn new() -> Self {
        Self::with_options(AdapterOptions::default())
    }

    /// Creates an empty adapter with the given options.
    pub fn with_options(options: AdapterOptions) -> Self {
        Self {
            rows: Vec::new(),
            schema: Vec::new(),
            tree_columns: options.tree_columns,
            aggregation: options.aggregation,
            notifier: Notifier::new(),
        }
    }

    /// Replaces rows and schema without notifying.
    pub(crate) fn load(&mut self, rows: Vec<RowSlot>, schema: Vec<ColumnSchema>) {
        self.rows = rows;
        if !schema.is_empty() || !self.rows.is_empty() {
            self.establish_schema(schema);
        }
    }

    // ---------------------------------------------------------------------
    // Notifications
    // ---------------------------------------------------------------------

    /// Subscribes to schema and shape notifications.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(Notification) + 'static,
    {
        self.notifier.subscribe(callback)
    }

    /// Removes a subscription. Returns true if it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Returns the number of subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.notifier.subscriber_count()
    }

    /// Delivers notifications deferred during a render pass.
    ///
    /// The host calls this once its current render pass has completed.
    /// Returns true if anything was delivered.
    pub fn flush_deferred(&mut self) -> bool {
        self.notifier.flush() > 0
    }

    /// Returns true if a deferred notification is waiting for `flush_deferred`.
    pub fn has_deferred(&self) -> bool {
        self.notifier.has_pending()
    }

    // ---------------------------------------------------------------------
    // Schema
    // ---------------------------------------------------------------------

    /// Returns the current schema, empty if none is set.
    #[inline]
    pub fn get_schema(&self) -> &[ColumnSchema] {
        &self.schema
    }

    /// Replaces the schema and emits `SchemaChanged`.
    ///
    /// An empty `schema` is inferred from the first non-blank row. Calling
    /// this after new data was loaded rebuilds the schema from that data; a
    /// caller that wants to keep the current schema must not call it.
    pub fn set_schema(&mut self, schema: Vec<ColumnSchema>) {
        self.establish_schema(schema);
        debug!(columns = self.schema.len(), "schema set");
        self.notifier.emit(Notification::SchemaChanged);
    }

    fn establish_schema(&mut self, schema: Vec<ColumnSchema>) {
        let mut schema = if schema.is_empty() {
            infer_schema(&self.rows)
        } else {
            schema
        };
        if let Some(tree) = &self.tree_columns {
            tree.ensure(&mut schema);
        }
        self.schema = schema;
    }

    /// Replaces the data set.
    ///
    /// With `Some(schema)` the schema is set through `set_schema`. Without
    /// one, the schema is inferred only if rows were given and no schema is
    /// held; otherwise the current schema is kept.
    pub fn set_data<I>(&mut self, rows: I, schema: Option<Vec<ColumnSchema>>)
    where
        I: IntoIterator,
        I::Item: Into<RowSlot>,
    {
        self.rows = rows.into_iter().map(Into::into).collect();
        debug!(rows = self.rows.len(), "data set");

        match schema {
            Some(schema) => self.set_schema(schema),
            None if !self.rows.is_empty() && self.schema.is_empty() => {
                self.set_schema(Vec::new())
            }
            None => {}
        }
        self.notifier.emit(Notification::ShapeChanged);
    }

    /// Returns the number of columns.
    #[inline]
    pub fn get_column_count(&self) -> usize {
        self.schema.len()
    }

    /// Returns the position of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.iter().position(|c| c.name() == name)
    }

    /// Looks up a schema entry by index or name.
    pub fn column(&self, column: &ColumnRef) -> Option<&ColumnSchema> {
        match column {
            ColumnRef::Index(i) => self.schema.get(*i),
            ColumnRef::Name(name) => self.schema.iter().find(|c| c.name() == name),
        }
    }

    /// Resolves a column reference to a column name.
    pub fn resolve_column<'a>(&'a self, column: &'a ColumnRef) -> Option<&'a str> {
        resolve_column(&self.schema, column)
    }

    /// Inserts a schema entry at `index`, or appends when `index` is `None`
    /// or past the end. Emits `SchemaChanged`.
    pub fn add_column(&mut self, column: ColumnSchema, index: Option<usize>) {
        let at = index.unwrap_or(self.schema.len()).min(self.schema.len());
        debug!(name = column.name(), index = at, "add column");
        self.schema.insert(at, column);
        self.notifier.emit(Notification::SchemaChanged);
    }

    /// Removes a schema entry. Row fields are left untouched.
    ///
    /// Emits `SchemaChanged` if an entry was removed.
    pub fn remove_column(&mut self, column: &ColumnRef) -> Option<ColumnSchema> {
        let index = match column {
            ColumnRef::Index(i) => Some(*i).filter(|i| *i < self.schema.len()),
            ColumnRef::Name(name) => self.column_index(name),
        }?;
        let removed = self.schema.remove(index);
        debug!(name = removed.name(), index, "remove column");
        self.notifier.emit(Notification::SchemaChanged);
        Some(removed)
    }

    // ---------------------------------------------------------------------
    // Rows and cells
    // ---------------------------------------------------------------------

    /// Maps a display row to its storage position.
    #[inline]
    fn source_index(&self, y: usize) -> usize {
        match &self.aggregation {
            Some(aggregation) => aggregation.source_row(y),
            None => y,
        }
    }

    /// Returns the number of rows the host displays.
    ///
    /// Without aggregation this is the number of row slots.
    pub fn get_row_count(&self) -> usize {
        let len = self.rows.len();
        match &self.aggregation {
            Some(aggregation) => len - aggregation.absorbed_rows(len).min(len),
            None => len,
        }
    }

    /// Returns the row at display position `y`; `None` when out of range or blank.
    pub fn get_row(&self, y: usize) -> Option<&Record> {
        self.rows.get(self.source_index(y))?.as_ref()
    }

    /// Returns every row slot in storage order.
    #[inline]
    pub fn rows(&self) -> &[RowSlot] {
        &self.rows
    }

    /// Reads a cell.
    ///
    /// A missing or blank row yields `NoRow`; an unresolvable column or unset
    /// field yields `Undefined`. At an aggregation trigger the merged values
    /// are returned as `SubRows`, the triggering row's height is recorded in
    /// its metadata and, if that height changed, a `ShapeChanged` is deferred
    /// until `flush_deferred`.
    pub fn get_value(&mut self, x: impl Into<ColumnRef>, y: usize) -> CellValue {
        let column = x.into();
        let source = self.source_index(y);
        let record = match self.rows.get(source) {
            Some(Some(record)) => record,
            _ => return CellValue::NoRow,
        };
        let name = match resolve_column(&self.schema, &column) {
            Some(name) => name,
            None => return CellValue::Undefined,
        };

        if let Some(aggregation) = self.aggregation.clone() {
            if let Some(span) = aggregation.span_at(name, y) {
                let name = String::from(name);
                return self.read_span(&name, source, span, aggregation.row_height(span));
            }
        }

        match record.get(name) {
            Some(value) => CellValue::Value(value.clone()),
            None => CellValue::Undefined,
        }
    }

    fn is_span_cell(&self, column: &ColumnRef, y: usize) -> bool {
        match (&self.aggregation, resolve_column(&self.schema, column)) {
            (Some(aggregation), Some(name)) => aggregation.span_at(name, y).is_some(),
            _ => false,
        }
    }

    fn read_span(&mut self, name: &str, source: usize, span: usize, height: i64) -> CellValue {
        let values = (source..source.saturating_add(span))
            .map(|i| {
                self.rows
                    .get(i)
                    .and_then(Option::as_ref)
                    .and_then(|record| record.get(name))
                    .cloned()
                    .unwrap_or(Value::Null)
            })
            .collect();

        if let Some(Some(record)) = self.rows.get_mut(source) {
            let row = record.metadata_or_insert(Metadata::new()).row_mut();
            if row.height() != Some(height) {
                row.set_height(height);
                trace!(row = source, height, "sub-row height recorded");
                self.notifier.defer(Notification::ShapeChanged);
            }
        }
        CellValue::SubRows(values)
    }

    /// Reads a cell through the column's calculator when it has one.
    ///
    /// Aggregation trigger cells bypass the calculator and read like
    /// `get_value`, yielding `SubRows` and recording the row height.
    pub fn get_calculated_value(&mut self, x: impl Into<ColumnRef>, y: usize) -> CellValue {
        let column = x.into();
        if self.is_span_cell(&column, y) {
            return self.get_value(column, y);
        }
        let calculated = self.column(&column).and_then(|schema| {
            let calculator = schema.get_calculator()?;
            let record = self.get_row(y)?;
            Some(calculator(record))
        });
        match calculated {
            Some(value) => CellValue::Value(value),
            None => self.get_value(column, y),
        }
    }

    /// Writes a cell. Row `y` must exist and not be blank.
    pub fn set_value(
        &mut self,
        x: impl Into<ColumnRef>,
        y: usize,
        value: impl Into<Value>,
    ) -> Result<()> {
        let column = x.into();
        let source = self.source_index(y);
        let record = match self.rows.get_mut(source) {
            Some(Some(record)) => record,
            _ => return Err(Error::row_not_found(y)),
        };
        let name = resolve_column(&self.schema, &column)
            .ok_or_else(|| Error::column_not_found(column.describe()))?;
        record.set(name, value);
        Ok(())
    }

    /// Orders two values of a column, using its comparator when it has one
    /// and the natural value order otherwise.
    pub fn compare_values(
        &self,
        x: impl Into<ColumnRef>,
        a: &Value,
        b: &Value,
        ascending: bool,
    ) -> Ordering {
        match self.column(&x.into()) {
            Some(schema) => schema.compare(a, b, ascending),
            None if ascending => a.cmp(b),
            None => b.cmp(a),
        }
    }

    /// Inserts a row at storage position `y`, or appends when `y` is `None`
    /// or not below the row count. Emits `ShapeChanged`.
    ///
    /// Under aggregation the append threshold is the storage length, which
    /// exceeds `get_row_count` by the absorbed rows.
    pub fn add_row(&mut self, row: Record, y: Option<usize>) {
        match y {
            Some(y) if y < self.rows.len() => {
                debug!(index = y, "insert row");
                self.rows.insert(y, Some(row));
            }
            _ => {
                debug!(index = self.rows.len(), "append row");
                self.rows.push(Some(row));
            }
        }
        self.notifier.emit(Notification::ShapeChanged);
    }

    /// Overwrites the slot at storage position `y`; `None` leaves it blank.
    ///
    /// Returns the previous row, metadata included. The row count does not
    /// change, so nothing is emitted.
    pub fn set_row(&mut self, y: usize, row: Option<Record>) -> Result<RowSlot> {
        let slot = self.rows.get_mut(y).ok_or_else(|| Error::row_not_found(y))?;
        Ok(core::mem::replace(slot, row))
    }

    /// Removes up to `count` slots starting at storage position `y` and
    /// returns them. Emits `ShapeChanged` only if something was removed.
    pub fn del_row(&mut self, y: usize, count: usize) -> Vec<RowSlot> {
        if y >= self.rows.len() || count == 0 {
            return Vec::new();
        }
        let end = y.saturating_add(count).min(self.rows.len());
        let removed: Vec<RowSlot> = self.rows.drain(y..end).collect();
        debug!(index = y, removed = removed.len(), "delete rows");
        self.notifier.emit(Notification::ShapeChanged);
        removed
    }

    /// Removes the slot at storage position `y`.
    pub fn remove_row(&mut self, y: usize) -> Vec<RowSlot> {
        self.del_row(y, 1)
    }

    /// Removes every row, keeping the schema.
    pub fn clear(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        debug!(removed = self.rows.len(), "clear rows");
        self.rows.clear();
        self.notifier.emit(Notification::ShapeChanged);
    }

    // ---------------------------------------------------------------------
    // Row metadata
    // ---------------------------------------------------------------------

    /// Returns the metadata of display row `y`.
    ///
    /// If the row has none and `fallback` is given, the fallback is attached
    /// and returned. A missing or blank row yields `None`.
    pub fn get_row_metadata(&mut self, y: usize, fallback: Option<Metadata>) -> Option<&Metadata> {
        let source = self.source_index(y);
        let record = self.rows.get_mut(source)?.as_mut()?;
        match fallback {
            Some(fallback) => Some(&*record.metadata_or_insert(fallback)),
            None => record.metadata(),
        }
    }

    /// Returns the metadata of display row `y` without installing anything.
    pub fn row_metadata(&self, y: usize) -> Option<&Metadata> {
        self.get_row(y)?.metadata()
    }

    /// Attaches metadata to display row `y`, or detaches it with `None`.
    ///
    /// Returns whether the row was found.
    pub fn set_row_metadata(&mut self, y: usize, metadata: Option<Metadata>) -> bool {
        let source = self.source_index(y);
        match self.rows.get_mut(source) {
            Some(Some(record)) => {
                record.set_metadata(metadata);
                true
            }
            _ => false,
        }
    }

    /// Like `set_row_metadata`, but returns the metadata now attached:
    /// `None` if the row is missing or the metadata was detached.
    pub fn set_row_metadata_value(
        &mut self,
        y: usize,
        metadata: Option<Metadata>,
    ) -> Option<&Metadata> {
        let source = self.source_index(y);
        let record = self.rows.get_mut(source)?.as_mut()?;
        record.set_metadata(metadata);
        record.metadata()
    }
}
