//! # Companies Core
//!
//! Schema registry and core types for validating a collection of company
//! records.
//!
//! This crate is the single source of truth for what a valid company record
//! looks like. It holds no state: everything here is a constant table, a closed
//! enumeration, or a pure predicate, so it can be shared freely between
//! independent validation passes.
//!
//! ## Key Concepts
//!
//! - **Record**: one company entry, kept as an untyped JSON object so that
//!   missing and wrongly-typed fields can be reported instead of rejected
//! - **Schema**: required/optional field tables and the location sub-record shape
//! - **Enumerations**: closed value sets for visa sponsorship, remote policy
//!   and hiring status
//! - **Violations**: findings grouped by category, in discovery order
//!
//! ## Example
//!
//! ```rust
//! use companies_core::{is_non_empty_string, RecordBuilder, REQUIRED_FIELDS};
//!
//! let record = RecordBuilder::valid("Acme", "https://acme.example/careers").build();
//!
//! for (field, _) in REQUIRED_FIELDS {
//!     assert!(record.contains_key(*field));
//! }
//! assert!(is_non_empty_string(&record["name"]));
//! ```

pub mod builder;
pub mod context;
pub mod enums;
pub mod error;
pub mod predicates;
pub mod record;
pub mod schema;
pub mod violation;

pub use builder::*;
pub use context::*;
pub use enums::*;
pub use error::*;
pub use predicates::*;
pub use record::*;
pub use schema::*;
pub use violation::*;
