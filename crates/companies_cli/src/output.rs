use anyhow::Result;
use colored::*;
use companies_validator::{CollectionReport, RecordReport};

pub fn print_validation_report(report: &CollectionReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report)?,
        _ => print_text_report(report),
    }
    Ok(())
}

fn print_text_report(report: &CollectionReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    for record in &report.invalid {
        print_record(record);
    }

    println!("\n{}", "Summary:".bold());
    println!("  Records validated: {}", report.stats.records_validated);
    println!("  Invalid records:   {}", report.stats.invalid_records);
    println!("  Total violations:  {}", report.stats.violation_count);
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "All checks passed! No duplicates found.".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED. Please fix the errors above.".red().bold()
        );
    }
}

fn print_record(record: &RecordReport) {
    println!(
        "\n{} {}",
        format!("Record #{}", record.index).red().bold(),
        format!("({})", record.display_name).bold()
    );
    for (category, messages) in record.violations.iter() {
        println!("  {}", format!("{}:", category).yellow().bold());
        for message in messages {
            println!("    - {}", message);
        }
    }
}

fn print_json_report(report: &CollectionReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
