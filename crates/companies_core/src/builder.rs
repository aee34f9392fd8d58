//! Builder pattern for creating company records.
//!
//! Records are plain JSON objects, so these builders exist mostly for tests and
//! fixtures: start from a valid record and break exactly the field under test.

use crate::{
    EnumeratedField, HiringStatus, RawRecord, RemotePolicy, VisaSponsorship, CAREERS_URL_FIELD,
    LAST_UPDATED_FIELD, LOCATIONS_FIELD, NAME_FIELD, TECH_STACK_FIELD,
};
use serde_json::{Map, Value};

/// Builder for creating a [`RawRecord`].
///
/// # Example
///
/// ```rust
/// use companies_core::{LocationBuilder, RecordBuilder};
///
/// let record = RecordBuilder::valid("Acme", "https://acme.example/careers")
///     .location(LocationBuilder::new("Germany", "Munich").build())
///     .set("remote_policy", "GLOBAL")
///     .remove("meta_data")
///     .build();
///
/// assert_eq!(record["locations"].as_array().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    /// Creates a builder with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled with a record that passes every rule.
    ///
    /// The record has a single HQ location in Berlin and dates from 2024.
    pub fn valid(name: impl Into<String>, careers_url: impl Into<String>) -> Self {
        Self::new()
            .set(NAME_FIELD, Value::String(name.into()))
            .set(CAREERS_URL_FIELD, Value::String(careers_url.into()))
            .locations(vec![LocationBuilder::new("Germany", "Berlin")
                .hq(true)
                .build()])
            .set(VisaSponsorship::FIELD, VisaSponsorship::Yes.as_str())
            .set(RemotePolicy::FIELD, RemotePolicy::Hybrid.as_str())
            .tech_stack(["Rust", "PostgreSQL"])
            .set(HiringStatus::FIELD, HiringStatus::Active.as_str())
            .set(LAST_UPDATED_FIELD, "2024-01-15")
    }

    /// Sets a field to any JSON value, replacing a previous value.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Removes a field.
    pub fn remove(mut self, field: &str) -> Self {
        self.fields.shift_remove(field);
        self
    }

    /// Replaces the location list.
    pub fn locations(self, locations: Vec<Value>) -> Self {
        self.set(LOCATIONS_FIELD, Value::Array(locations))
    }

    /// Appends a location, creating the list if needed.
    pub fn location(mut self, location: Value) -> Self {
        match self.fields.get_mut(LOCATIONS_FIELD) {
            Some(Value::Array(locations)) => locations.push(location),
            _ => {
                self.fields
                    .insert(LOCATIONS_FIELD.to_string(), Value::Array(vec![location]));
            }
        }
        self
    }

    /// Replaces the tech stack.
    pub fn tech_stack<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(|s| Value::String(s.into())).collect();
        self.set(TECH_STACK_FIELD, Value::Array(items))
    }

    /// Builds the record.
    pub fn build(self) -> RawRecord {
        self.fields
    }
}

/// Builder for a location entry.
#[derive(Debug, Clone)]
pub struct LocationBuilder {
    fields: Map<String, Value>,
}

impl LocationBuilder {
    /// Creates a non-HQ location.
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("country".to_string(), Value::String(country.into()));
        fields.insert("city".to_string(), Value::String(city.into()));
        fields.insert("is_hq".to_string(), Value::Bool(false));
        Self { fields }
    }

    /// Sets the HQ flag.
    pub fn hq(self, is_hq: bool) -> Self {
        self.set("is_hq", is_hq)
    }

    /// Sets a field to any JSON value.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Removes a field.
    pub fn remove(mut self, field: &str) -> Self {
        self.fields.shift_remove(field);
        self
    }

    /// Builds the location as a JSON object.
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
