//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use lexi::check::coverage;
use miette::{IntoDiagnostic, Result};

use crate::output::load_dictionary;
use crate::output::table::format_coverage_table;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Dictionary file (JSON).
    pub file: PathBuf,

    /// Locale whose keys define 100% coverage.
    #[arg(long, default_value = "en")]
    pub reference: String,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let dictionary = load_dictionary(&args.file)?;
    let coverage_data = coverage(&dictionary, &args.reference);

    // Check if any translation is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.is_complete());

    // Output results
    if args.json {
        let json_output = serde_json::to_string_pretty(&coverage_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        // Print ASCII table
        let table = format_coverage_table(&coverage_data);
        println!("{}", table);

        // Print missing keys per locale
        for locale_coverage in &coverage_data {
            if !locale_coverage.missing.is_empty() {
                println!("\nMissing in {}:", locale_coverage.locale);
                for key in &locale_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    // Determine exit code
    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
