//! # picto CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; output format and exit codes are kept
//! compatible with the Python `tools/validator.py` this replaces.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use picto_cli::validate::{run_validate, ValidateArgs};

/// Pictogram conformance toolchain.
///
/// Validates accessibility-oriented SVG pictograms against the
/// conformance profile: structural and ARIA rules, embedded metadata
/// schema conformance, and concept-to-group correspondence.
#[derive(Parser, Debug)]
#[command(name = "picto", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a pictogram file against the conformance profile.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Resolve the repository root for the default schema path: walk up
    // from CWD looking for a `schemas/` directory.
    let repo_root = resolve_repo_root().unwrap_or_else(|| {
        tracing::debug!("could not locate repository root; using current directory");
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &repo_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Walk up from the current directory to find the repository root,
/// identified by the presence of a `schemas/` directory.
fn resolve_repo_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        if dir.join("schemas").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
