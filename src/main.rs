use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use mealime_import::{process_directory, validate_file, validator, ImportError};

/// Convert Mealime PDF recipes to JSON format
#[derive(Parser, Debug)]
#[command(name = "mealime-import", version, about)]
struct Cli {
    /// Input directory containing PDF files
    #[arg(short, long, required_unless_present = "validate_only")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(short, long, default_value = "recipes.json")]
    output: PathBuf,

    /// Validate JSON after conversion
    #[arg(short, long)]
    validate: bool,

    /// Only validate an existing JSON file
    #[arg(long, value_name = "FILE")]
    validate_only: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(file) = cli.validate_only.as_deref() {
        run_validation(file);
        return ExitCode::SUCCESS;
    }

    // clap enforces --input when --validate-only is absent
    let Some(input) = cli.input else {
        return ExitCode::from(2);
    };

    match process_directory(&input, &cli.output) {
        Ok(summary) => {
            debug!(
                "converted {} recipes, {} failed",
                summary.converted,
                summary.failed.len()
            );
        }
        Err(e @ (ImportError::InputDirNotFound(_) | ImportError::NoPdfFiles(_))) => {
            // Nothing to do is reported but not fatal; no output is written.
            println!("ERROR: {}", e);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if cli.validate {
        run_validation(&cli.output);
    }

    ExitCode::SUCCESS
}

fn run_validation(file: &Path) {
    println!("\nValidating {}...", file.display());
    match validate_file(file) {
        Ok(report) => validator::print_report(&report),
        Err(ImportError::Json(e)) => println!("❌ Invalid JSON: {}", e),
        Err(e) => println!("❌ Error validating: {}", e),
    }
}
