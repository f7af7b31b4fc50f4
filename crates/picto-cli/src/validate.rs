//! # Validate Subcommand
//!
//! Runs the conformance pipeline on one pictogram file and prints the
//! report, either as the human-readable banner format or as JSON.

use std::path::{Path, PathBuf};

use clap::Args;

use picto_core::ValidationReport;
use picto_validator::PictogramValidator;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the SVG pictogram to validate.
    pub file: PathBuf,

    /// Path to a custom metadata schema (defaults to the repository's
    /// schemas/metadata.schema.json).
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Only show errors, not warnings.
    #[arg(long)]
    pub quiet: bool,

    /// Emit the report as JSON instead of the text format.
    #[arg(long)]
    pub json: bool,
}

/// Run the validate subcommand. Returns the process exit code.
pub fn run_validate(args: &ValidateArgs, repo_root: &Path) -> anyhow::Result<u8> {
    if !args.file.exists() {
        eprintln!("Error: file not found: {}", args.file.display());
        return Ok(2);
    }

    let schema_path = args
        .schema
        .clone()
        .unwrap_or_else(|| default_schema_path(repo_root));
    tracing::debug!(schema = %schema_path.display(), "using metadata schema");

    let validator = PictogramValidator::new(&schema_path);
    let report = validator.validate_file(&args.file);

    if args.json {
        print_json_report(&args.file, &report, args.quiet)?;
    } else {
        print_report(&args.file, &report, args.quiet);
    }

    Ok(if report.is_valid() { 0 } else { 1 })
}

/// The conventional schema location inside the repository.
pub fn default_schema_path(repo_root: &Path) -> PathBuf {
    repo_root.join("schemas").join("metadata.schema.json")
}

fn print_json_report(file: &Path, report: &ValidationReport, quiet: bool) -> anyhow::Result<()> {
    let warnings: &[String] = if quiet { &[] } else { &report.warnings };
    let payload = serde_json::json!({
        "file": file.display().to_string(),
        "is_valid": report.is_valid(),
        "errors": report.errors,
        "warnings": warnings,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_report(file: &Path, report: &ValidationReport, quiet: bool) {
    let banner = "=".repeat(70);
    let rule = "-".repeat(70);

    println!("\n{banner}");
    println!("Pictogram Conformance Validation Results");
    println!("{banner}");
    println!("File: {}", file.display());
    println!(
        "Status: {}",
        if report.is_valid() {
            "\u{2713} VALID"
        } else {
            "\u{2717} INVALID"
        }
    );
    println!("{banner}\n");

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        println!("{rule}");
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {error}", i + 1);
        }
        println!();
    }

    if !quiet && !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        println!("{rule}");
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {warning}", i + 1);
        }
        println!();
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("No errors or warnings. This pictogram is fully conformant!");
        println!();
    }
}
