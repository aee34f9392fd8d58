//! End-to-end validation of realistic company collections.
//!
//! Records are written as JSON literals, the way they appear in the data file,
//! rather than through the builders, so these tests also pin down how raw JSON
//! shapes map to violations.

use chrono::NaiveDate;
use companies_core::{Category, Collection, RawRecord, ValidationContext};
use companies_validator::{CollectionValidator, RecordValidator};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn context() -> ValidationContext {
    ValidationContext::new().with_today(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
}

fn as_record(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

fn collection(values: Vec<Value>) -> Collection {
    Collection::from_records(values.into_iter().map(as_record).collect())
}

fn stripe() -> Value {
    json!({
        "name": "Stripe",
        "careers_url": "https://stripe.com/jobs",
        "locations": [
            {"country": "USA", "city": "San Francisco", "is_hq": true},
            {"country": "Ireland", "city": "Dublin", "is_hq": false}
        ],
        "visa_sponsorship": "YES",
        "remote_policy": "HYBRID",
        "tech_stack": ["Ruby", "Go", "Java"],
        "hiring_status": "ACTIVE",
        "last_updated": "2024-11-02",
        "meta_data": {"industry": "fintech", "size": 8000}
    })
}

fn gitlab() -> Value {
    json!({
        "name": "GitLab",
        "careers_url": "https://about.gitlab.com/jobs/",
        "locations": [{"country": "USA", "city": "San Francisco", "is_hq": true}],
        "visa_sponsorship": "NO",
        "remote_policy": "GLOBAL",
        "tech_stack": ["Ruby", "Go"],
        "hiring_status": "FREEZE",
        "last_updated": "2025-01-31"
    })
}

#[test]
fn test_clean_collection_passes() {
    let report = CollectionValidator::new().validate(&collection(vec![stripe(), gitlab()]), &context());

    assert!(report.passed, "unexpected violations: {:?}", report.invalid);
    assert_eq!(report.stats.records_validated, 2);
    assert_eq!(report.stats.invalid_records, 0);
}

#[test]
fn test_record_with_every_kind_of_problem() {
    let broken = json!({
        "name": 42,
        "careers_url": "jobs.example.com",
        "locations": [
            "Berlin",
            {"country": "Germany", "is_hq": "yes"},
            {"country": "France", "city": "Paris", "is_hq": true},
            {"country": "Spain", "city": "Madrid", "is_hq": true}
        ],
        "visa_sponsorship": "sometimes",
        "remote_policy": "ON_SITE",
        "tech_stack": [],
        "meta_data": "none",
        "last_updated": "2025-02-01"
    });

    let violations = RecordValidator::new().validate(&as_record(broken), 0, &context());

    let grouped: Vec<(Category, Vec<String>)> = violations
        .iter()
        .map(|(category, messages)| (category, messages.to_vec()))
        .collect();

    assert_eq!(
        grouped,
        vec![
            (
                Category::RequiredFields,
                vec![
                    "Field 'name' must be of type string, got number".to_string(),
                    "Missing required field 'hiring_status'".to_string(),
                ]
            ),
            (
                Category::OptionalFields,
                vec!["Optional field 'meta_data' must be of type object, got string".to_string()]
            ),
            (
                Category::FieldErrors,
                vec![
                    "'name' must be a non-empty string".to_string(),
                    "'careers_url' must start with http or https, got 'jobs.example.com'".to_string(),
                    "'tech_stack' must be a non-empty list".to_string(),
                ]
            ),
            (
                Category::EnumErrors,
                vec![
                    "Invalid value 'sometimes' for 'visa_sponsorship'. Allowed: YES, NO, SENIOR_ONLY"
                        .to_string()
                ]
            ),
            (
                Category::LocationErrors,
                vec![
                    "Location #1 must be an object, got string".to_string(),
                    "Location #2 is missing required field 'city'".to_string(),
                    "Location #2 field 'is_hq' must be of type boolean, got string".to_string(),
                    "Exactly one location must have is_hq = true, found 2".to_string(),
                ]
            ),
            (
                Category::DateErrors,
                vec![
                    "Invalid 'last_updated' date '2025-02-01': expected YYYY-MM-DD not in the future"
                        .to_string()
                ]
            ),
        ]
    );
}

#[test]
fn test_locations_of_wrong_type() {
    let mut record = stripe();
    record["locations"] = json!({"country": "USA", "city": "NYC", "is_hq": true});

    let violations = RecordValidator::new().validate(&as_record(record), 3, &context());

    assert_eq!(
        violations.get(Category::LocationErrors).unwrap(),
        ["'locations' must be a non-empty list".to_string()]
    );
    assert_eq!(
        violations.get(Category::RequiredFields).unwrap(),
        ["Field 'locations' must be of type list, got object".to_string()]
    );
}

#[test]
fn test_null_values_are_wrong_types_not_missing() {
    let mut record = gitlab();
    record["last_updated"] = Value::Null;
    record["remote_policy"] = Value::Null;

    let violations = RecordValidator::new().validate(&as_record(record), 0, &context());

    assert_eq!(
        violations.get(Category::RequiredFields).unwrap(),
        [
            "Field 'remote_policy' must be of type string, got null".to_string(),
            "Field 'last_updated' must be of type string, got null".to_string(),
        ]
    );
    assert_eq!(
        violations.get(Category::EnumErrors).unwrap(),
        ["Invalid value 'null' for 'remote_policy'. Allowed: GLOBAL, EU_ONLY, HYBRID, ON_SITE".to_string()]
    );
    assert_eq!(
        violations.get(Category::DateErrors).unwrap(),
        ["Invalid 'last_updated' date 'null': expected YYYY-MM-DD not in the future".to_string()]
    );
}

#[test]
fn test_duplicates_across_collection() {
    let mut renamed = stripe();
    renamed["name"] = json!("Stripe Payments");

    let mut same_name = gitlab();
    same_name["name"] = json!("  STRIPE");
    same_name["careers_url"] = json!("https://gitlab.example/careers");

    let report = CollectionValidator::new().validate(
        &collection(vec![stripe(), renamed, gitlab(), same_name]),
        &context(),
    );

    assert!(!report.passed);
    let flagged: Vec<(usize, Vec<String>)> = report
        .invalid
        .iter()
        .map(|r| {
            (
                r.index,
                r.violations
                    .get(Category::DuplicateErrors)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default(),
            )
        })
        .collect();

    assert_eq!(
        flagged,
        vec![
            (1, vec!["Duplicate careers_url 'https://stripe.com/jobs'".to_string()]),
            (3, vec!["Duplicate company name '  STRIPE'".to_string()]),
        ]
    );
}

#[test]
fn test_report_serializes_for_machine_consumers() {
    let mut record = gitlab();
    record["hiring_status"] = json!("PAUSED");

    let report = CollectionValidator::new().validate(&collection(vec![record]), &context());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        json!({
            "passed": false,
            "records": [{
                "index": 0,
                "name": "GitLab",
                "violations": {
                    "Enum Errors": ["Invalid value 'PAUSED' for 'hiring_status'. Allowed: ACTIVE, FREEZE"]
                }
            }],
            "summary": {
                "records_validated": 1,
                "invalid_records": 1,
                "violation_count": 1
            }
        })
    );
}
