//! Synthetic sub-row aggregation.
//!
//! An aggregation merges several consecutive storage rows into one display
//! row for a single column, so the host can draw a multi-line cell. Every
//! display row after a merge is shifted down by the number of rows the merge
//! absorbed.
//!
//! The adapter only talks to the `RowAggregation` trait; `SpanAggregation`
//! is the provided rule, driven by an explicit list of trigger positions.

use alloc::string::String;
use alloc::vec::Vec;

/// Default display height of one storage row.
pub const DEFAULT_ROW_HEIGHT: i64 = 20;

/// Display rows of the two legacy triggers.
pub const LEGACY_TRIGGER_ROWS: [usize; 2] = [114, 116];

/// Storage rows merged by each legacy trigger.
pub const LEGACY_SPAN: usize = 3;

/// Strategy mapping display positions onto storage rows.
pub trait RowAggregation {
    /// Maps a display row to the storage row it reads from.
    ///
    /// Positions past the addressable range saturate at `usize::MAX`, which
    /// no data set reaches.
    fn source_row(&self, display_row: usize) -> usize;

    /// Number of storage rows merged into the given cell, if it is a trigger.
    fn span_at(&self, column: &str, display_row: usize) -> Option<usize>;

    /// Storage rows hidden inside merged cells for a data set of `source_len` rows.
    fn absorbed_rows(&self, source_len: usize) -> usize;

    /// Display height of a row that merges `span` storage rows.
    fn row_height(&self, span: usize) -> i64;
}

/// A merge position: `span` storage rows starting at display row `row` are
/// shown together in `column`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanTrigger {
    pub row: usize,
    pub column: String,
    pub span: usize,
}

impl SpanTrigger {
    /// Creates a trigger. A span below 1 is raised to 1.
    pub fn new(row: usize, column: impl Into<String>, span: usize) -> Self {
        Self {
            row,
            column: column.into(),
            span: span.max(1),
        }
    }

    #[inline]
    fn absorbed(&self) -> usize {
        self.span - 1
    }
}

/// Aggregation driven by a fixed list of triggers.
///
/// Triggers are kept sorted by display row, one per row.
#[derive(Clone, Debug)]
pub struct SpanAggregation {
    triggers: Vec<SpanTrigger>,
    row_height: i64,
}

impl SpanAggregation {
    /// Creates an aggregation. When two triggers name the same display row,
    /// the first one given wins.
    pub fn new(triggers: impl IntoIterator<Item = SpanTrigger>) -> Self {
        let mut triggers: Vec<SpanTrigger> = triggers.into_iter().collect();
        triggers.sort_by_key(|t| t.row);
        triggers.dedup_by_key(|t| t.row);
        Self {
            triggers,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }

    /// The legacy configuration: three-row merges at display rows 114 and 116.
    pub fn legacy(column: impl Into<String>) -> Self {
        let column = column.into();
        Self::new(
            LEGACY_TRIGGER_ROWS
                .iter()
                .map(|&row| SpanTrigger::new(row, column.clone(), LEGACY_SPAN)),
        )
    }

    /// Sets the display height of one storage row.
    pub fn with_row_height(mut self, row_height: i64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn triggers(&self) -> &[SpanTrigger] {
        &self.triggers
    }
}

impl RowAggregation for SpanAggregation {
    fn source_row(&self, display_row: usize) -> usize {
        self.triggers
            .iter()
            .take_while(|t| t.row < display_row)
            .map(SpanTrigger::absorbed)
            .fold(display_row, usize::saturating_add)
    }

    fn span_at(&self, column: &str, display_row: usize) -> Option<usize> {
        self.triggers
            .iter()
            .find(|t| t.row == display_row && t.column == column)
            .map(|t| t.span)
    }

    fn absorbed_rows(&self, source_len: usize) -> usize {
        self.triggers
            .iter()
            .map(|t| {
                let start = self.source_row(t.row);
                if start >= source_len {
                    0
                } else {
                    t.absorbed().min(source_len - start - 1)
                }
            })
            .fold(0, usize::saturating_add)
    }

    fn row_height(&self, span: usize) -> i64 {
        span as i64 * self.row_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_legacy_shifts() {
        let agg = SpanAggregation::legacy("name");
        assert_eq!(agg.source_row(0), 0);
        assert_eq!(agg.source_row(114), 114);
        assert_eq!(agg.source_row(115), 117);
        assert_eq!(agg.source_row(116), 118);
        assert_eq!(agg.source_row(117), 121);
        assert_eq!(agg.source_row(200), 204);
    }

    #[test]
    fn test_span_at_matches_row_and_column() {
        let agg = SpanAggregation::legacy("name");
        assert_eq!(agg.span_at("name", 114), Some(3));
        assert_eq!(agg.span_at("name", 116), Some(3));
        assert_eq!(agg.span_at("name", 115), None);
        assert_eq!(agg.span_at("price", 114), None);
    }

    #[test]
    fn test_absorbed_rows() {
        let agg = SpanAggregation::legacy("name");
        assert_eq!(agg.absorbed_rows(100), 0);
        assert_eq!(agg.absorbed_rows(115), 0);
        assert_eq!(agg.absorbed_rows(116), 1);
        assert_eq!(agg.absorbed_rows(117), 2);
        assert_eq!(agg.absorbed_rows(119), 2);
        assert_eq!(agg.absorbed_rows(120), 3);
        assert_eq!(agg.absorbed_rows(300), 4);
    }

    #[test]
    fn test_custom_triggers_sorted_and_deduped() {
        let agg = SpanAggregation::new(vec![
            SpanTrigger::new(5, "b", 2),
            SpanTrigger::new(1, "a", 4),
            SpanTrigger::new(5, "c", 9),
        ]);
        assert_eq!(agg.triggers().len(), 2);
        assert_eq!(agg.triggers()[0].row, 1);
        assert_eq!(agg.triggers()[1].column, "b");
        // Rows after display 1 shift by 3, after display 5 by 4.
        assert_eq!(agg.source_row(1), 1);
        assert_eq!(agg.source_row(2), 5);
        assert_eq!(agg.source_row(6), 10);
    }

    #[test]
    fn test_span_floor_is_one() {
        let agg = SpanAggregation::new(vec![SpanTrigger::new(0, "a", 0)]);
        assert_eq!(agg.span_at("a", 0), Some(1));
        assert_eq!(agg.source_row(3), 3);
        assert_eq!(agg.absorbed_rows(10), 0);
    }

    #[test]
    fn test_source_row_saturates() {
        let agg = SpanAggregation::legacy("name");
        assert_eq!(agg.source_row(usize::MAX), usize::MAX);
        assert_eq!(agg.source_row(usize::MAX - 2), usize::MAX);

        let agg = SpanAggregation::new(vec![
            SpanTrigger::new(0, "a", usize::MAX),
            SpanTrigger::new(1, "a", usize::MAX),
        ]);
        assert_eq!(agg.source_row(5), usize::MAX);
        assert_eq!(agg.absorbed_rows(10), 9);
    }

    #[test]
    fn test_row_height() {
        let agg = SpanAggregation::legacy("name");
        assert_eq!(agg.row_height(3), 60);
        let agg = agg.with_row_height(15);
        assert_eq!(agg.row_height(3), 45);
    }
}
