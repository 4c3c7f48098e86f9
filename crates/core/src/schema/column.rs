//! Column schema entry for gridsource.

use crate::record::Record;
use crate::types::DataType;
use crate::value::Value;
use alloc::rc::Rc;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

/// Computes a cell value from the whole row.
pub type Calculator = Rc<dyn Fn(&Record) -> Value>;

/// Orders two cell values.
pub type CompareFn = Rc<dyn Fn(&Value, &Value) -> Ordering>;

/// Ascending and descending orderings for a column.
#[derive(Clone)]
pub struct Comparator {
    asc: CompareFn,
    desc: CompareFn,
}

impl Comparator {
    /// Creates a comparator from explicit ascending and descending orderings.
    pub fn new<A, D>(asc: A, desc: D) -> Self
    where
        A: Fn(&Value, &Value) -> Ordering + 'static,
        D: Fn(&Value, &Value) -> Ordering + 'static,
    {
        Self {
            asc: Rc::new(asc),
            desc: Rc::new(desc),
        }
    }

    /// Creates a comparator whose descending order is the reverse of `asc`.
    pub fn from_ascending<A>(asc: A) -> Self
    where
        A: Fn(&Value, &Value) -> Ordering + 'static,
    {
        let asc: CompareFn = Rc::new(asc);
        let reversed = asc.clone();
        Self {
            asc,
            desc: Rc::new(move |a: &Value, b: &Value| reversed(a, b).reverse()),
        }
    }

    #[inline]
    pub fn asc(&self, a: &Value, b: &Value) -> Ordering {
        (self.asc)(a, b)
    }

    #[inline]
    pub fn desc(&self, a: &Value, b: &Value) -> Ordering {
        (self.desc)(a, b)
    }

    /// Compares in the requested direction.
    pub fn compare(&self, a: &Value, b: &Value, ascending: bool) -> Ordering {
        if ascending {
            self.asc(a, b)
        } else {
            self.desc(a, b)
        }
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.asc, &other.asc) && Rc::ptr_eq(&self.desc, &other.desc)
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Comparator { .. }")
    }
}

/// Descriptor for one column.
#[derive(Clone)]
pub struct ColumnSchema {
    /// Column name, used for symbolic addressing.
    name: String,
    /// Display header.
    header: Option<String>,
    /// Computes the value from the row instead of reading the field.
    calculator: Option<Calculator>,
    /// Declared value type.
    data_type: Option<DataType>,
    /// Custom sort orderings.
    comparator: Option<Comparator>,
}

impl ColumnSchema {
    /// Creates a schema entry holding only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: None,
            calculator: None,
            data_type: None,
            comparator: None,
        }
    }

    /// Sets the header.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets the calculator.
    pub fn calculator<F>(mut self, calculator: F) -> Self
    where
        F: Fn(&Record) -> Value + 'static,
    {
        self.calculator = Some(Rc::new(calculator));
        self
    }

    /// Sets the declared data type.
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Sets the comparator.
    pub fn comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the header, if any.
    #[inline]
    pub fn get_header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Returns the header, falling back to the column name.
    pub fn display_header(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.name)
    }

    #[inline]
    pub fn get_calculator(&self) -> Option<&Calculator> {
        self.calculator.as_ref()
    }

    #[inline]
    pub fn get_data_type(&self) -> Option<DataType> {
        self.data_type
    }

    #[inline]
    pub fn get_comparator(&self) -> Option<&Comparator> {
        self.comparator.as_ref()
    }

    /// Runs the calculator against a row, if the column has one.
    pub fn calculate(&self, record: &Record) -> Option<Value> {
        self.calculator.as_ref().map(|calc| calc(record))
    }

    /// Compares two values with the column's comparator, or the natural value
    /// order when none is set.
    pub fn compare(&self, a: &Value, b: &Value, ascending: bool) -> Ordering {
        match &self.comparator {
            Some(comparator) => comparator.compare(a, b, ascending),
            None if ascending => a.cmp(b),
            None => b.cmp(a),
        }
    }
}

impl fmt::Debug for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSchema")
            .field("name", &self.name)
            .field("header", &self.header)
            .field("calculator", &self.calculator.is_some())
            .field("data_type", &self.data_type)
            .field("comparator", &self.comparator)
            .finish()
    }
}

/// Closures compare by identity, so clones of an entry are equal to it.
impl PartialEq for ColumnSchema {
    fn eq(&self, other: &Self) -> bool {
        let calculator_eq = match (&self.calculator, &other.calculator) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        };
        let comparator_eq = match (&self.comparator, &other.comparator) {
            (None, None) => true,
            (Some(a), Some(b)) => a.ptr_eq(b),
            _ => false,
        };
        self.name == other.name
            && self.header == other.header
            && self.data_type == other.data_type
            && calculator_eq
            && comparator_eq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = ColumnSchema::new("id");
        assert_eq!(col.name(), "id");
        assert_eq!(col.get_header(), None);
        assert_eq!(col.display_header(), "id");
        assert!(col.get_calculator().is_none());
        assert!(col.get_comparator().is_none());
    }

    #[test]
    fn test_column_builder() {
        let col = ColumnSchema::new("price")
            .header("Price")
            .data_type(DataType::Float64);
        assert_eq!(col.get_header(), Some("Price"));
        assert_eq!(col.display_header(), "Price");
        assert_eq!(col.get_data_type(), Some(DataType::Float64));
    }

    #[test]
    fn test_column_calculator() {
        let col = ColumnSchema::new("total").calculator(|row| {
            let qty = row.get("qty").and_then(Value::as_i64).unwrap_or(0);
            let unit = row.get("unit").and_then(Value::as_i64).unwrap_or(0);
            Value::Int64(qty * unit)
        });
        let row = Record::new().with("qty", 3i64).with("unit", 7i64);
        assert_eq!(col.calculate(&row), Some(Value::Int64(21)));
        assert_eq!(ColumnSchema::new("plain").calculate(&row), None);
    }

    #[test]
    fn test_column_compare_default_order() {
        let col = ColumnSchema::new("n");
        let (a, b) = (Value::Int32(1), Value::Int32(2));
        assert_eq!(col.compare(&a, &b, true), Ordering::Less);
        assert_eq!(col.compare(&a, &b, false), Ordering::Greater);
    }

    #[test]
    fn test_column_compare_custom() {
        // Orders strings by length.
        let col = ColumnSchema::new("s").comparator(Comparator::from_ascending(|a, b| {
            let len = |v: &Value| v.as_str().map(str::len).unwrap_or(0);
            len(a).cmp(&len(b))
        }));
        let (short, long) = (Value::from("zz"), Value::from("aaaa"));
        assert_eq!(col.compare(&short, &long, true), Ordering::Less);
        assert_eq!(col.compare(&short, &long, false), Ordering::Greater);
    }

    #[test]
    fn test_column_equality() {
        let calc = ColumnSchema::new("c").calculator(|_| Value::Null);
        assert_eq!(calc, calc.clone());
        assert_ne!(calc, ColumnSchema::new("c").calculator(|_| Value::Null));
        assert_eq!(ColumnSchema::new("a").header("A"), ColumnSchema::new("a").header("A"));
        assert_ne!(ColumnSchema::new("a"), ColumnSchema::new("a").header("A"));
    }
}
