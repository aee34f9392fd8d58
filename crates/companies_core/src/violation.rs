//! Violation categories and the ordered per-record violation mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Fixed label grouping related violations.
///
/// Variants are declared in the order the record validator discovers them;
/// duplicate findings are always added last, by the collection validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    RequiredFields,
    OptionalFields,
    FieldErrors,
    EnumErrors,
    LocationErrors,
    DateErrors,
    DuplicateErrors,
}

impl Category {
    /// Every category, in discovery order.
    pub const ALL: &'static [Category] = &[
        Category::RequiredFields,
        Category::OptionalFields,
        Category::FieldErrors,
        Category::EnumErrors,
        Category::LocationErrors,
        Category::DateErrors,
        Category::DuplicateErrors,
    ];

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::RequiredFields => "Required Fields",
            Category::OptionalFields => "Optional Fields",
            Category::FieldErrors => "Field Errors",
            Category::EnumErrors => "Enum Errors",
            Category::LocationErrors => "Location Errors",
            Category::DateErrors => "Date Errors",
            Category::DuplicateErrors => "Duplicate Errors",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered mapping from category to the messages filed under it.
///
/// Categories keep the order in which their first message was pushed, and
/// messages keep push order within a category. An empty mapping means the
/// record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    entries: Vec<(Category, Vec<String>)>,
}

impl Violations {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a message under `category`.
    pub fn push(&mut self, category: Category, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((category, vec![message])),
        }
    }

    /// Returns the messages filed under `category`, if any.
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Returns true if `category` holds at least one message.
    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Returns true if no violation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages across all categories.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }

    /// Categories in discovery order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Iterates `(category, messages)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries
            .iter()
            .map(|(c, messages)| (*c, messages.as_slice()))
    }
}

impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, messages) in &self.entries {
            map.serialize_entry(category.label(), messages)?;
        }
        map.end()
    }
}
