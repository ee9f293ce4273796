//! Diagnostics reported while resolving translations.
//!
//! None of these are returned as errors: resolution always produces a
//! string, and what went wrong is reported through a
//! [`DiagnosticSink`](crate::DiagnosticSink).

use std::fmt;

use thiserror::Error;

use crate::parser::ConstructKind;

/// The kind of value a missing placeholder expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedKind {
    /// Discriminator of a select construct.
    String,
    /// Operand of a plural construct.
    Number,
    /// Simple `{name}` placeholder.
    ReplacementString,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedKind::String => f.write_str("string"),
            ExpectedKind::Number => f.write_str("number"),
            ExpectedKind::ReplacementString => f.write_str("replacement string"),
        }
    }
}

/// A named value that a message needed but the value bag did not provide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissingValue {
    pub name: String,
    pub expected: ExpectedKind,
}

impl fmt::Display for MissingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.name, self.expected)
    }
}

/// Something that degraded a translation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// Placeholders without values; the raw message was returned.
    #[error("missing values for message \"{message}\": {}", join(.missing))]
    MissingValues {
        message: String,
        missing: Vec<MissingValue>,
    },

    /// A select or plural construct had neither the chosen option nor `other`.
    #[error("{kind} construct for '{name}' has no '{category}' or 'other' option")]
    MissingOption {
        name: String,
        kind: ConstructKind,
        category: String,
    },

    /// No dictionary in the chain defines the key for the locale.
    #[error("missing translation for '{key}' in locale '{locale}'{}", hint(.suggestions))]
    MissingKey {
        locale: String,
        key: String,
        suggestions: Vec<String>,
    },

    /// Construct nesting went deeper than the configured cap.
    #[error("maximum interpolation depth {max_depth} exceeded")]
    RecursionLimitExceeded { max_depth: usize },
}

fn join(missing: &[MissingValue]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
