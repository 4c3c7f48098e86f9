//! Property-based tests for gridsource-adapter using proptest.

use gridsource_adapter::{
    AdapterBuilder, CellValue, ColumnSchema, Metadata, Properties, Record, SpanAggregation,
    SpanTrigger, TabularDataAdapter, Value,
};
use proptest::prelude::*;

/// Rows with fields `a`, `b`, `c` holding integers.
fn rows_strategy(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((any::<i64>(), any::<i32>(), "[a-z]{0,8}"), 0..max).prop_map(|rows| {
        rows.into_iter()
            .map(|(a, b, c)| Record::new().with("a", a).with("b", b).with("c", c))
            .collect()
    })
}

fn loaded(rows: Vec<Record>) -> TabularDataAdapter {
    let mut adapter = TabularDataAdapter::new();
    adapter.set_data(rows, None);
    adapter
}

proptest! {
    /// Test that an explicit schema is kept exactly and the row count matches.
    #[test]
    fn set_data_keeps_schema(rows in rows_strategy(50), headers in prop::collection::vec("[A-Z]{1,5}", 1..5)) {
        let schema: Vec<ColumnSchema> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| ColumnSchema::new(format!("col{}", i)).header(h.clone()))
            .collect();
        let count = rows.len();

        let mut adapter = TabularDataAdapter::new();
        adapter.set_data(rows, Some(schema.clone()));

        prop_assert_eq!(adapter.get_schema(), &schema[..]);
        prop_assert_eq!(adapter.get_row_count(), count);
        prop_assert_eq!(adapter.get_column_count(), schema.len());
    }

    /// Test that reading past the last row yields the no-row sentinel.
    #[test]
    fn get_value_out_of_range(rows in rows_strategy(20), extra in 0usize..10) {
        let mut adapter = loaded(rows);
        let y = adapter.get_row_count() + extra;
        prop_assert_eq!(adapter.get_value("a", y), CellValue::NoRow);
        prop_assert_eq!(adapter.get_value(0usize, y), CellValue::NoRow);
    }

    /// Test that aggregated adapters also report missing rows at any distance.
    #[test]
    fn aggregated_get_value_out_of_range(
        rows in rows_strategy(40),
        triggers in prop::collection::vec((0usize..40, 1usize..6), 0..4),
        back in 0usize..8,
        extra in 0usize..10,
    ) {
        let mut adapter = AdapterBuilder::new()
            .rows(rows)
            .aggregation(SpanAggregation::new(
                triggers.into_iter().map(|(row, span)| SpanTrigger::new(row, "a", span)),
            ))
            .build()
            .unwrap();

        let y = adapter.get_row_count() + extra;
        prop_assert_eq!(adapter.get_value("a", y), CellValue::NoRow);
        prop_assert_eq!(adapter.get_value("b", y), CellValue::NoRow);

        let far = usize::MAX - back;
        prop_assert_eq!(adapter.get_value("a", far), CellValue::NoRow);
        prop_assert!(adapter.get_row(far).is_none());
        prop_assert!(adapter.set_value("b", far, 0i64).is_err());
        prop_assert!(!adapter.set_row_metadata(far, None));
    }

    /// Test that addressing by index and by name read the same cell.
    #[test]
    fn index_and_name_agree(rows in rows_strategy(20)) {
        let mut adapter = loaded(rows);
        let names: Vec<String> = adapter.get_schema().iter().map(|c| c.name().to_string()).collect();
        for y in 0..adapter.get_row_count() {
            for (x, name) in names.iter().enumerate() {
                prop_assert_eq!(adapter.get_value(x, y), adapter.get_value(name.as_str(), y));
            }
        }
    }

    /// Test that a written value reads back unchanged.
    #[test]
    fn set_value_round_trip(rows in rows_strategy(20).prop_filter("non-empty", |r| !r.is_empty()), v in any::<i64>(), pick in any::<prop::sample::Index>()) {
        let mut adapter = loaded(rows);
        let y = pick.index(adapter.get_row_count());
        for x in 0..adapter.get_column_count() {
            adapter.set_value(x, y, v).unwrap();
            prop_assert_eq!(adapter.get_value(x, y), CellValue::Value(Value::Int64(v)));
        }
    }

    /// Test that appending grows the count by one and lands at the old count.
    #[test]
    fn add_row_appends(rows in rows_strategy(20), n in any::<i64>()) {
        let mut adapter = loaded(rows);
        let before = adapter.get_row_count();
        let row = Record::new().with("a", n);

        adapter.add_row(row.clone(), None);

        prop_assert_eq!(adapter.get_row_count(), before + 1);
        prop_assert_eq!(adapter.get_row(before), Some(&row));
    }

    /// Test that inserting at the front shifts every row by one.
    #[test]
    fn add_row_front_shifts(rows in rows_strategy(20)) {
        let original = rows.clone();
        let mut adapter = loaded(rows);
        adapter.add_row(Record::new().with("a", -1i64), Some(0));
        for (i, row) in original.iter().enumerate() {
            prop_assert_eq!(adapter.get_row(i + 1), Some(row));
        }
    }

    /// Test that deleting returns exactly the removed rows and closes the gap.
    #[test]
    fn del_row_removes_range(rows in rows_strategy(30), start in 0usize..30, count in 0usize..10) {
        let original = rows.clone();
        let mut adapter = loaded(rows);

        let removed = adapter.del_row(start, count);

        let lo = start.min(original.len());
        let hi = (start + count).min(original.len());
        let expected: Vec<Option<Record>> = original[lo..hi].iter().cloned().map(Some).collect();
        prop_assert_eq!(removed, expected);
        prop_assert_eq!(adapter.get_row_count(), original.len() - (hi - lo));
        if hi < original.len() {
            prop_assert_eq!(adapter.get_row(lo), Some(&original[hi]));
        }
    }

    /// Test that metadata reads back what was set and vanishes when cleared.
    #[test]
    fn metadata_set_get(rows in rows_strategy(20).prop_filter("non-empty", |r| !r.is_empty()), height in 1i64..500, pick in any::<prop::sample::Index>()) {
        let mut adapter = loaded(rows);
        let y = pick.index(adapter.get_row_count());
        let mut props = Properties::new();
        props.set_height(height);
        let metadata = Metadata::for_row(props);

        prop_assert!(adapter.set_row_metadata(y, Some(metadata.clone())));
        prop_assert_eq!(adapter.get_row_metadata(y, None), Some(&metadata));

        prop_assert!(adapter.set_row_metadata(y, None));
        prop_assert_eq!(adapter.get_row_metadata(y, None), None);
    }

    /// Test that reading the schema twice yields the same slice.
    #[test]
    fn schema_reads_are_stable(rows in rows_strategy(10)) {
        let adapter = loaded(rows);
        let first = adapter.get_schema();
        let second = adapter.get_schema();
        prop_assert_eq!(first.as_ptr(), second.as_ptr());
        prop_assert_eq!(first, second);
    }
}
