//! Error types for the schema registry.
//!
//! Validation findings are not errors: they are collected as
//! [`Violations`](crate::Violations). The errors here cover the few fallible
//! operations the registry exposes, such as parsing an enumerated value.

use thiserror::Error;

/// Result type for schema registry operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Main error type for schema registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Value is not a member of an enumerated field's allowed set
    #[error("Invalid value '{value}' for '{field}'. Allowed: {allowed}")]
    UnknownVariant {
        /// Record field the value belongs to
        field: String,
        /// Rejected value
        value: String,
        /// Comma separated list of allowed values
        allowed: String,
    },
}

impl SchemaError {
    /// Creates a new unknown variant error.
    pub fn unknown_variant(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Self::UnknownVariant {
            field: field.into(),
            value: value.into(),
            allowed: allowed.into(),
        }
    }
}
