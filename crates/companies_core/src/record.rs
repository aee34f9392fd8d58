//! Record and collection representation.
//!
//! Records stay untyped JSON objects for the whole validation pass. A typed
//! model would reject a wrongly-typed field at deserialization time, which
//! would hide every other finding on that record.

use serde_json::{Map, Value};

/// A single company record as loaded from storage.
pub type RawRecord = Map<String, Value>;

/// An ordered collection of company records.
///
/// Record order is significant: duplicates are attributed to the later
/// occurrence, and reports refer to records by their position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    records: Vec<RawRecord>,
}

impl Collection {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from records, keeping their order.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Returns an iterator over the records.
    pub fn records(&self) -> impl Iterator<Item = &RawRecord> {
        self.records.iter()
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&RawRecord> {
        self.records.get(index)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record.
    pub fn push(&mut self, record: RawRecord) {
        self.records.push(record);
    }
}

impl From<Vec<RawRecord>> for Collection {
    fn from(records: Vec<RawRecord>) -> Self {
        Self::from_records(records)
    }
}

/// Returns the name of a JSON value's type as used in violation messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Renders a value for a violation message.
///
/// Strings are shown without quotes; anything else uses its JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
