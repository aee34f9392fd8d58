//! Field tables describing a valid company record.
//!
//! Tables are ordered slices rather than maps: the record validator walks them
//! in declaration order, and that order shows up in reports.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Field holding the company name.
pub const NAME_FIELD: &str = "name";
/// Field holding the careers page URL.
pub const CAREERS_URL_FIELD: &str = "careers_url";
/// Field holding the list of office locations.
pub const LOCATIONS_FIELD: &str = "locations";
/// Field holding the list of technologies.
pub const TECH_STACK_FIELD: &str = "tech_stack";
/// Field holding the last update date.
pub const LAST_UPDATED_FIELD: &str = "last_updated";
/// Location field flagging the headquarters.
pub const IS_HQ_FIELD: &str = "is_hq";

/// Expected semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// JSON string
    String,
    /// JSON array
    List,
    /// JSON object
    Object,
    /// JSON boolean
    Boolean,
}

impl FieldType {
    /// Returns true if `value` has this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::List => value.is_array(),
            FieldType::Object => value.is_object(),
            FieldType::Boolean => value.is_boolean(),
        }
    }

    /// Returns the type name used in violation messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::List => "list",
            FieldType::Object => "object",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields every company record must carry, with their expected types.
pub const REQUIRED_FIELDS: &[(&str, FieldType)] = &[
    (NAME_FIELD, FieldType::String),
    (CAREERS_URL_FIELD, FieldType::String),
    (LOCATIONS_FIELD, FieldType::List),
    ("visa_sponsorship", FieldType::String),
    ("remote_policy", FieldType::String),
    (TECH_STACK_FIELD, FieldType::List),
    ("hiring_status", FieldType::String),
    (LAST_UPDATED_FIELD, FieldType::String),
];

/// Fields a company record may carry; checked only when present.
pub const OPTIONAL_FIELDS: &[(&str, FieldType)] = &[("meta_data", FieldType::Object)];

/// Fields every location entry must carry, with their expected types.
pub const LOCATION_REQUIRED_FIELDS: &[(&str, FieldType)] = &[
    ("country", FieldType::String),
    ("city", FieldType::String),
    (IS_HQ_FIELD, FieldType::Boolean),
];

/// Looks up the expected type of a top-level field, required or optional.
pub fn field_type(field: &str) -> Option<FieldType> {
    REQUIRED_FIELDS
        .iter()
        .chain(OPTIONAL_FIELDS)
        .find(|(name, _)| *name == field)
        .map(|(_, ty)| *ty)
}
