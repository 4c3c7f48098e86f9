//! Tree and row-number pseudo-columns.

use alloc::vec::Vec;
use gridsource_core::schema::ColumnSchema;

/// Name and header of the tree pseudo-column.
pub const TREE_COLUMN_NAME: &str = "Tree";

/// Name and header of the blank row-number pseudo-column.
pub const ROW_NUMBER_COLUMN_NAME: &str = "";

/// Fixed schema positions reserved for the tree and row-number columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeColumns {
    pub tree_column_index: usize,
    pub row_column_index: usize,
}

impl TreeColumns {
    pub fn new(tree_column_index: usize, row_column_index: usize) -> Self {
        Self {
            tree_column_index,
            row_column_index,
        }
    }

    /// Inserts whichever pseudo-column is missing from `schema`, matching by
    /// name. The lower position is filled first; positions past the end append.
    ///
    /// Returns the number of entries inserted.
    pub fn ensure(&self, schema: &mut Vec<ColumnSchema>) -> usize {
        let mut missing = Vec::with_capacity(2);
        if !schema.iter().any(|c| c.name() == TREE_COLUMN_NAME) {
            missing.push((
                self.tree_column_index,
                ColumnSchema::new(TREE_COLUMN_NAME).header(TREE_COLUMN_NAME),
            ));
        }
        if !schema.iter().any(|c| c.name() == ROW_NUMBER_COLUMN_NAME) {
            missing.push((
                self.row_column_index,
                ColumnSchema::new(ROW_NUMBER_COLUMN_NAME).header(ROW_NUMBER_COLUMN_NAME),
            ));
        }
        missing.sort_by_key(|(index, _)| *index);

        let inserted = missing.len();
        for (index, column) in missing {
            let at = index.min(schema.len());
            schema.insert(at, column);
        }
        inserted
    }
}
