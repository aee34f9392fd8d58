use anyhow::{Context, Result};
use chrono::NaiveDate;
use companies_core::ValidationContext;
use companies_loader::load_file;
use companies_validator::CollectionValidator;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use crate::output;

pub fn execute(path: &Path, format: &str, today: Option<NaiveDate>) -> Result<ExitCode> {
    info!("Validating collection: {}", path.display());

    // Load failures abort before any record is checked
    let collection = load_file(path)
        .with_context(|| format!("Failed to load company collection: {}", path.display()))?;

    let mut context = ValidationContext::new();
    if let Some(date) = today {
        info!("Reference date pinned to {}", date);
        context = context.with_today(date);
    }

    if format != "json" {
        output::print_info(&format!(
            "Validating {} companies from {}",
            collection.len(),
            path.display()
        ));
    }

    let report = CollectionValidator::new().validate(&collection, &context);

    output::print_validation_report(&report, format)?;

    Ok(ExitCode::from(report.exit_code() as u8))
}
