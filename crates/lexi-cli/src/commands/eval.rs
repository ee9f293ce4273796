//! Implementation of the `lexi eval` command.

use std::path::PathBuf;
use std::sync::Arc;

use lexi::{
    CollectingSink, Diagnostic, DiagnosticSink, Interpolator, ResolutionChain, TracingSink,
    Translator, Value, Values,
};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::load_dictionary;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["template", "key"])
))]
pub struct EvalArgs {
    /// Template string to interpolate
    #[arg(long, conflicts_with = "dicts")]
    pub template: Option<String>,

    /// Key to resolve through the dictionary files
    #[arg(long, requires = "dicts")]
    pub key: Option<String>,

    /// Dictionary files (JSON), highest priority first
    #[arg(long = "dict", num_args = 1..)]
    pub dicts: Vec<PathBuf>,

    /// Locale used for key lookup (e.g., en, en-US, de)
    #[arg(long, default_value = "en", env = "LEXI_LOCALE")]
    pub locale: String,

    /// Locale tried when the target locale has no entry
    #[arg(long)]
    pub fallback_locale: Option<String>,

    /// Values in name=value format (repeatable)
    #[arg(short = 's', long = "set", value_parser = parse_key_val)]
    pub values: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
    pub diagnostics: Vec<String>,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid value format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Integers first, then floats, otherwise the raw string.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(raw)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let values: Values = args
        .values
        .into_iter()
        .map(|(k, v)| (k, parse_value(v)))
        .collect();

    // Diagnostics are collected for the report and also logged for --verbose
    let collected = Arc::new(CollectingSink::new());
    let reporter = Arc::clone(&collected);
    let interpolator = Interpolator::builder()
        .sink(Arc::new(move |diagnostic: &Diagnostic| {
            TracingSink.report(diagnostic);
            reporter.report(diagnostic);
        }))
        .build();

    let result = match (&args.template, &args.key) {
        (Some(template), _) => interpolator.interpolate(template, &values),
        (None, Some(key)) => {
            let chain = args
                .dicts
                .iter()
                .map(|path| load_dictionary(path).map(Arc::new))
                .collect::<miette::Result<ResolutionChain>>()?;
            let translator = Translator::builder()
                .chain(chain)
                .locale(args.locale)
                .maybe_fallback_locale(args.fallback_locale)
                .interpolator(interpolator)
                .build();
            translator.translate(key, &values)
        }
        (None, None) => return Err(miette::miette!("either --template or --key is required")),
    };

    let diagnostics = collected.take();
    let degraded = diagnostics.iter().any(|d| {
        matches!(
            d,
            Diagnostic::MissingValues { .. } | Diagnostic::MissingKey { .. }
        )
    });

    if args.json {
        let output = EvalResult {
            result,
            diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", result);
        for diagnostic in &diagnostics {
            eprintln!(
                "{}: {}",
                "warning".if_supports_color(Stream::Stderr, |t| t.yellow()),
                diagnostic
            );
        }
    }

    if degraded {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
