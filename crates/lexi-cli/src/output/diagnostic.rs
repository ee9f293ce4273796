//! Miette diagnostic wrapper for dictionary parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use lexi::{Dictionary, LoadError};
use miette::{miette, Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed dictionary files.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid dictionary: {message}")]
#[diagnostic(code(lexi::dictionary))]
pub struct LexiDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LexiDiagnostic {
    /// Create a diagnostic pointing at `line`:`column` (both 1-based) of
    /// `content`.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        LexiDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help: Some(
                "dictionaries are JSON objects of locale -> key -> template string".to_string(),
            ),
        }
    }
}

/// Read and parse a dictionary file, turning parse errors into a labelled
/// diagnostic over the file contents.
pub fn load_dictionary(path: &Path) -> miette::Result<Dictionary> {
    let content = read_to_string(path)
        .map_err(|e| miette!("Cannot read dictionary file {}: {}", path.display(), e))?;

    match Dictionary::from_json_str(&content) {
        Ok(dictionary) => Ok(dictionary),
        Err(LoadError::Parse {
            line,
            column,
            message,
            ..
        }) => Err(LexiDiagnostic::at(path, &content, line, column, message).into()),
        Err(e) => Err(miette!("{e}")),
    }
}
