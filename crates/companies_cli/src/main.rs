mod commands;
mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code when the input cannot be loaded at all.
const LOAD_FAILURE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "companies")]
#[command(version, about = "Data-quality gate for company collections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a company collection (JSON or YAML)
    Validate {
        /// Path to the collection file
        #[arg(env = "COMPANIES_FILE", default_value = "data/companies.json")]
        path: PathBuf,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Reference date for the "not in the future" rule (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Print the record schema enforced by `validate`
    Schema {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so that `--format json` output stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Validate {
            path,
            format,
            today,
        } => commands::validate::execute(&path, &format, today),

        Commands::Schema { format } => commands::schema::execute(&format),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            output::print_error(&format!("Error: {err:#}"));
            ExitCode::from(LOAD_FAILURE_EXIT_CODE)
        }
    }
}
