//! Validation report types.

use companies_core::Violations;
use serde::Serialize;

/// Findings for one invalid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordReport {
    /// Position of the record in its collection (0-based)
    pub index: usize,

    /// The record's `name`, or `index N` when it has no string name
    #[serde(rename = "name")]
    pub display_name: String,

    /// Violations grouped by category, in discovery order
    pub violations: Violations,
}

/// Statistics about a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationStats {
    /// Number of records validated
    pub records_validated: usize,

    /// Number of records with at least one violation
    pub invalid_records: usize,

    /// Total number of violation messages
    pub violation_count: usize,

    /// Validation duration in milliseconds
    #[serde(skip)]
    pub duration_ms: u64,
}

/// Outcome of validating a whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionReport {
    /// True when no record has any violation, duplicates included
    pub passed: bool,

    /// Invalid records, in collection order
    #[serde(rename = "records")]
    pub invalid: Vec<RecordReport>,

    /// Pass statistics
    #[serde(rename = "summary")]
    pub stats: ValidationStats,
}

impl CollectionReport {
    /// Returns the report for the record at `index`, if it was invalid.
    pub fn record(&self, index: usize) -> Option<&RecordReport> {
        self.invalid.iter().find(|r| r.index == index)
    }

    /// Process exit code for this outcome: 0 when passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed { 0 } else { 1 }
    }
}
