//! # Companies Validator
//!
//! Validation engine for company collections. This crate provides:
//!
//! - Per-record checks (required and optional fields, field rules, enumerated
//!   values, nested locations, dates)
//! - Whole-collection checks (duplicate names and careers URLs)
//! - A report grouping every finding by record and category
//!
//! Validation never stops at the first problem: every violation in every
//! record is collected in one pass.
//!
//! ## Example
//!
//! ```rust
//! use companies_core::{Collection, RecordBuilder, ValidationContext};
//! use companies_validator::CollectionValidator;
//!
//! let collection = Collection::from_records(vec![
//!     RecordBuilder::valid("Acme", "https://acme.example/jobs").build(),
//!     RecordBuilder::valid("acme ", "https://other.example/jobs").build(),
//! ]);
//!
//! let report = CollectionValidator::new().validate(&collection, &ValidationContext::new());
//!
//! assert!(!report.passed);
//! assert_eq!(report.invalid[0].index, 1);
//! ```

mod collection;
mod record;
mod report;

pub use collection::*;
pub use record::*;
pub use report::*;
