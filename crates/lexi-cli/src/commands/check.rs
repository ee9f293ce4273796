//! Implementation of the `lexi check` command.

use std::path::PathBuf;

use lexi::check::check_dictionary;
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::load_dictionary;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Dictionary files to check (JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Locale every other locale is compared against
    #[arg(long, default_value = "en")]
    pub reference: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single finding.
#[derive(Debug, Serialize)]
struct FindingJson {
    file: String,
    kind: &'static str,
    locale: String,
    key: String,
    message: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut report: Vec<FindingJson> = Vec::new();
    let mut problem_files = 0;

    for path in &args.files {
        let dictionary = load_dictionary(path)?;
        let file = path.display().to_string();

        if !dictionary.has_locale(&args.reference) {
            return Err(miette::miette!(
                "{} has no entries for reference locale '{}'",
                file,
                args.reference
            ));
        }

        let findings = check_dictionary(&dictionary, &args.reference);
        if !findings.is_empty() {
            problem_files += 1;
        }

        if !args.json {
            if findings.is_empty() {
                println!(
                    "{} {}",
                    "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                    file
                );
            } else {
                println!(
                    "{} {}: {} problem(s)",
                    "error".if_supports_color(Stream::Stdout, |t| t.red()),
                    file,
                    findings.len()
                );
                for finding in &findings {
                    println!("  - {}", finding);
                }
            }
        }

        report.extend(findings.iter().map(|finding| FindingJson {
            file: file.clone(),
            kind: finding.kind(),
            locale: finding.locale().to_string(),
            key: finding.key().to_string(),
            message: finding.to_string(),
        }));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    }

    if problem_files > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
