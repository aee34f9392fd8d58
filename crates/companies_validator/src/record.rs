//! Per-record validation.
//!
//! Checks one record in isolation against the schema registry. Every rule
//! runs; a failing rule never prevents the others from reporting.

use companies_core::{
    count_hq, display_value, is_non_empty_string, is_valid_date_on, json_type_name, Category,
    EnumeratedField, FieldType, HiringStatus, RawRecord, RemotePolicy, ValidationContext,
    Violations, VisaSponsorship, CAREERS_URL_FIELD, LAST_UPDATED_FIELD, LOCATIONS_FIELD,
    LOCATION_REQUIRED_FIELDS, NAME_FIELD, OPTIONAL_FIELDS, REQUIRED_FIELDS, TECH_STACK_FIELD,
};
use serde_json::Value;
use tracing::trace;

/// Scheme prefix every careers URL must start with. Also covers `https`.
const URL_SCHEME_PREFIX: &str = "http";

/// Validates a single company record.
///
/// Stateless with respect to other records; duplicate detection lives in
/// [`CollectionValidator`](crate::CollectionValidator).
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl RecordValidator {
    /// Creates a new record validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a record and returns its violations grouped by category.
    ///
    /// `index` is the record's position in its collection and is only used
    /// for diagnostics. An empty result means the record is valid.
    pub fn validate(
        &self,
        record: &RawRecord,
        index: usize,
        context: &ValidationContext,
    ) -> Violations {
        let mut violations = Violations::new();

        self.check_required_fields(record, &mut violations);
        self.check_optional_fields(record, &mut violations);
        self.check_name(record, &mut violations);
        self.check_careers_url(record, &mut violations);
        self.check_enum::<VisaSponsorship>(record, &mut violations);
        self.check_enum::<RemotePolicy>(record, &mut violations);
        self.check_enum::<HiringStatus>(record, &mut violations);
        self.check_locations(record, &mut violations);
        self.check_tech_stack(record, &mut violations);
        self.check_last_updated(record, context, &mut violations);

        trace!(index, violations = violations.len(), "record checked");
        violations
    }

    fn check_required_fields(&self, record: &RawRecord, violations: &mut Violations) {
        for (field, expected) in REQUIRED_FIELDS {
            match record.get(*field) {
                None => violations.push(
                    Category::RequiredFields,
                    format!("Missing required field '{field}'"),
                ),
                Some(value) if !expected.matches(value) => violations.push(
                    Category::RequiredFields,
                    type_mismatch_message("Field", field, *expected, value),
                ),
                Some(_) => {}
            }
        }
    }

    fn check_optional_fields(&self, record: &RawRecord, violations: &mut Violations) {
        for (field, expected) in OPTIONAL_FIELDS {
            if let Some(value) = record.get(*field) {
                if !expected.matches(value) {
                    violations.push(
                        Category::OptionalFields,
                        type_mismatch_message("Optional field", field, *expected, value),
                    );
                }
            }
        }
    }

    fn check_name(&self, record: &RawRecord, violations: &mut Violations) {
        if let Some(name) = record.get(NAME_FIELD) {
            if !is_non_empty_string(name) {
                violations.push(
                    Category::FieldErrors,
                    format!("'{NAME_FIELD}' must be a non-empty string"),
                );
            }
        }
    }

    fn check_careers_url(&self, record: &RawRecord, violations: &mut Violations) {
        let Some(url) = record.get(CAREERS_URL_FIELD) else {
            return;
        };

        match url.as_str() {
            Some(s) if is_non_empty_string(url) => {
                if !s.starts_with(URL_SCHEME_PREFIX) {
                    violations.push(
                        Category::FieldErrors,
                        format!("'{CAREERS_URL_FIELD}' must start with http or https, got '{s}'"),
                    );
                }
            }
            _ => violations.push(
                Category::FieldErrors,
                format!("'{CAREERS_URL_FIELD}' must be a non-empty string"),
            ),
        }
    }

    fn check_enum<T: EnumeratedField>(&self, record: &RawRecord, violations: &mut Violations) {
        let Some(value) = record.get(T::FIELD) else {
            return;
        };

        if value.as_str().and_then(T::parse).is_none() {
            violations.push(
                Category::EnumErrors,
                format!(
                    "Invalid value '{}' for '{}'. Allowed: {}",
                    display_value(value),
                    T::FIELD,
                    T::allowed_list()
                ),
            );
        }
    }

    fn check_locations(&self, record: &RawRecord, violations: &mut Violations) {
        let locations = match record.get(LOCATIONS_FIELD) {
            Some(Value::Array(locations)) if !locations.is_empty() => locations,
            _ => {
                violations.push(
                    Category::LocationErrors,
                    format!("'{LOCATIONS_FIELD}' must be a non-empty list"),
                );
                return;
            }
        };

        for (position, location) in locations.iter().enumerate() {
            let number = position + 1;
            let Some(entry) = location.as_object() else {
                violations.push(
                    Category::LocationErrors,
                    format!(
                        "Location #{number} must be an object, got {}",
                        json_type_name(location)
                    ),
                );
                continue;
            };

            for (field, expected) in LOCATION_REQUIRED_FIELDS {
                match entry.get(*field) {
                    None => violations.push(
                        Category::LocationErrors,
                        format!("Location #{number} is missing required field '{field}'"),
                    ),
                    Some(value) if !expected.matches(value) => violations.push(
                        Category::LocationErrors,
                        type_mismatch_message(
                            &format!("Location #{number} field"),
                            field,
                            *expected,
                            value,
                        ),
                    ),
                    Some(_) => {}
                }
            }
        }

        // Runs over malformed entries too; they just do not count as HQ.
        let hq_count = count_hq(locations);
        if hq_count != 1 {
            violations.push(
                Category::LocationErrors,
                format!("Exactly one location must have is_hq = true, found {hq_count}"),
            );
        }
    }

    fn check_tech_stack(&self, record: &RawRecord, violations: &mut Violations) {
        let valid = matches!(
            record.get(TECH_STACK_FIELD),
            Some(Value::Array(items)) if !items.is_empty()
        );

        if !valid {
            violations.push(
                Category::FieldErrors,
                format!("'{TECH_STACK_FIELD}' must be a non-empty list"),
            );
        }
    }

    fn check_last_updated(
        &self,
        record: &RawRecord,
        context: &ValidationContext,
        violations: &mut Violations,
    ) {
        let Some(value) = record.get(LAST_UPDATED_FIELD) else {
            return;
        };

        let valid = value
            .as_str()
            .is_some_and(|date| is_valid_date_on(date, context.today));

        if !valid {
            violations.push(
                Category::DateErrors,
                format!(
                    "Invalid '{LAST_UPDATED_FIELD}' date '{}': expected YYYY-MM-DD not in the future",
                    display_value(value)
                ),
            );
        }
    }
}

fn type_mismatch_message(subject: &str, field: &str, expected: FieldType, actual: &Value) -> String {
    format!(
        "{subject} '{field}' must be of type {expected}, got {}",
        json_type_name(actual)
    )
}
