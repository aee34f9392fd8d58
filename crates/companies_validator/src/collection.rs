//! Whole-collection validation.
//!
//! Runs the record validator over every record and adds the one check that
//! needs cross-record state: duplicate names and careers URLs.

use crate::{CollectionReport, RecordReport, RecordValidator, ValidationStats};
use companies_core::{
    normalize, Category, Collection, RawRecord, ValidationContext, Violations, CAREERS_URL_FIELD,
    NAME_FIELD,
};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Main validation engine for company collections.
///
/// Holds no state between calls: the sets of seen names and URLs live only for
/// the duration of one [`validate`](Self::validate) call, so repeated or
/// concurrent passes cannot influence each other.
///
/// # Example
///
/// ```rust
/// use companies_core::{Collection, RecordBuilder, ValidationContext};
/// use companies_validator::CollectionValidator;
///
/// let collection = Collection::from_records(vec![
///     RecordBuilder::valid("Acme", "https://acme.example/jobs").build(),
/// ]);
///
/// let report = CollectionValidator::new().validate(&collection, &ValidationContext::new());
///
/// if report.passed {
///     println!("All checks passed");
/// } else {
///     for record in &report.invalid {
///         println!("{}: {} violation(s)", record.display_name, record.violations.len());
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionValidator {
    record_validator: RecordValidator,
}

impl CollectionValidator {
    /// Creates a new collection validator.
    pub fn new() -> Self {
        Self {
            record_validator: RecordValidator::new(),
        }
    }

    /// Validates every record of a collection, in order.
    ///
    /// Duplicates are attributed to the later record: the first occurrence of
    /// a name or URL is never flagged.
    pub fn validate(&self, collection: &Collection, context: &ValidationContext) -> CollectionReport {
        let start = Instant::now();
        let mut seen = SeenValues::default();
        let mut invalid = Vec::new();
        let mut violation_count = 0;

        for (index, record) in collection.records().enumerate() {
            let mut violations = self.record_validator.validate(record, index, context);
            seen.check(record, &mut violations);

            if violations.is_empty() {
                continue;
            }

            let display_name = display_name(record, index);
            debug!(
                index,
                name = %display_name,
                violations = violations.len(),
                "record failed validation"
            );
            violation_count += violations.len();
            invalid.push(RecordReport {
                index,
                display_name,
                violations,
            });
        }

        let stats = ValidationStats {
            records_validated: collection.len(),
            invalid_records: invalid.len(),
            violation_count,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            records = stats.records_validated,
            invalid = stats.invalid_records,
            violations = stats.violation_count,
            "validation pass complete"
        );

        CollectionReport {
            passed: invalid.is_empty(),
            invalid,
            stats,
        }
    }
}

/// Normalized names and URLs seen so far in one pass.
#[derive(Debug, Default)]
struct SeenValues {
    names: HashSet<String>,
    urls: HashSet<String>,
}

impl SeenValues {
    /// Records the record's name and URL, flagging values already seen.
    ///
    /// Works on the raw declared values, whether or not they passed their own
    /// field checks. Empty, missing and non-string values are ignored.
    fn check(&mut self, record: &RawRecord, violations: &mut Violations) {
        if let Some(name) = first_seen(&mut self.names, record, NAME_FIELD) {
            warn!(name, "duplicate company name");
            violations.push(
                Category::DuplicateErrors,
                format!("Duplicate company name '{name}'"),
            );
        }

        if let Some(url) = first_seen(&mut self.urls, record, CAREERS_URL_FIELD) {
            warn!(url, "duplicate careers_url");
            violations.push(
                Category::DuplicateErrors,
                format!("Duplicate {CAREERS_URL_FIELD} '{url}'"),
            );
        }
    }
}

/// Inserts the normalized value of `field` into `seen`.
///
/// Returns the raw value when it had already been seen.
fn first_seen<'a>(seen: &mut HashSet<String>, record: &'a RawRecord, field: &str) -> Option<&'a str> {
    let raw = record.get(field).and_then(|v| v.as_str())?;
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }
    if seen.insert(normalized) { None } else { Some(raw) }
}

/// Name shown for a record in reports.
fn display_name(record: &RawRecord, index: usize) -> String {
    match record.get(NAME_FIELD).and_then(|v| v.as_str()) {
        Some(name) => name.to_string(),
        None => format!("index {index}"),
    }
}
