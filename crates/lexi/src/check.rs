//! Offline consistency checks for dictionaries.
//!
//! Compares every locale of a dictionary against a reference locale to find
//! untranslated keys, keys the reference does not know about, and
//! translations whose placeholders differ from the reference.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::parser::{Placeholder, placeholders};
use crate::resolver::Dictionary;

/// A problem found by [`check_dictionary`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Finding {
    /// The reference locale defines a key the locale lacks.
    #[error("'{key}' is not translated in '{locale}'")]
    MissingKey { locale: String, key: String },

    /// The locale defines a key the reference locale lacks.
    #[error("'{key}' in '{locale}' does not exist in the reference locale")]
    UnknownKey { locale: String, key: String },

    /// The locale's template references different values than the reference.
    #[error(
        "'{key}' in '{locale}' has different placeholders: missing [{}], extra [{}]",
        .missing.join(", "),
        .extra.join(", ")
    )]
    PlaceholderMismatch {
        locale: String,
        key: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },
}

impl Finding {
    /// The locale the finding is about.
    pub fn locale(&self) -> &str {
        match self {
            Finding::MissingKey { locale, .. }
            | Finding::UnknownKey { locale, .. }
            | Finding::PlaceholderMismatch { locale, .. } => locale,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Finding::MissingKey { key, .. }
            | Finding::UnknownKey { key, .. }
            | Finding::PlaceholderMismatch { key, .. } => key,
        }
    }

    /// Short machine-readable name of the finding kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Finding::MissingKey { .. } => "missing-key",
            Finding::UnknownKey { .. } => "unknown-key",
            Finding::PlaceholderMismatch { .. } => "placeholder-mismatch",
        }
    }
}

/// Translation coverage of one locale relative to the reference locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub locale: String,
    pub translated: usize,
    pub total: usize,
    pub missing: Vec<String>,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check every non-reference locale against `reference`.
///
/// Findings are ordered by locale, then key. Formatter entries have no
/// template and are only checked for presence.
///
/// # Example
///
/// ```
/// use lexi::Dictionary;
/// use lexi::check::{check_dictionary, Finding};
///
/// let dictionary = Dictionary::new()
///     .with("en", "greet", "Hello, {name}!")
///     .with("de", "greet", "Hallo, {nome}!");
///
/// let findings = check_dictionary(&dictionary, "en");
/// assert_eq!(
///     findings,
///     vec![Finding::PlaceholderMismatch {
///         locale: "de".into(),
///         key: "greet".into(),
///         missing: vec!["name (simple)".into()],
///         extra: vec!["nome (simple)".into()],
///     }]
/// );
/// ```
pub fn check_dictionary(dictionary: &Dictionary, reference: &str) -> Vec<Finding> {
    let reference_keys: BTreeSet<&str> = dictionary.keys(reference).into_iter().collect();
    let mut findings = Vec::new();

    for locale in dictionary.locales() {
        if locale == reference {
            continue;
        }
        let keys: BTreeSet<&str> = dictionary.keys(locale).into_iter().collect();

        for key in reference_keys.union(&keys) {
            match (reference_keys.contains(key), keys.contains(key)) {
                (true, false) => findings.push(Finding::MissingKey {
                    locale: locale.to_string(),
                    key: key.to_string(),
                }),
                (false, true) => findings.push(Finding::UnknownKey {
                    locale: locale.to_string(),
                    key: key.to_string(),
                }),
                _ => {
                    if let Some(finding) = compare_placeholders(dictionary, reference, locale, key)
                    {
                        findings.push(finding);
                    }
                }
            }
        }
    }
    findings
}

/// Coverage of every non-reference locale, sorted by locale.
pub fn coverage(dictionary: &Dictionary, reference: &str) -> Vec<Coverage> {
    let reference_keys = dictionary.keys(reference);
    dictionary
        .locales()
        .into_iter()
        .filter(|locale| *locale != reference)
        .map(|locale| {
            let missing: Vec<String> = reference_keys
                .iter()
                .filter(|key| dictionary.get(locale, key).is_none())
                .map(ToString::to_string)
                .collect();
            Coverage {
                locale: locale.to_string(),
                translated: reference_keys.len() - missing.len(),
                total: reference_keys.len(),
                missing,
            }
        })
        .collect()
}

fn compare_placeholders(
    dictionary: &Dictionary,
    reference: &str,
    locale: &str,
    key: &str,
) -> Option<Finding> {
    let expected = template_placeholders(dictionary, reference, key)?;
    let actual = template_placeholders(dictionary, locale, key)?;
    if expected == actual {
        return None;
    }
    Some(Finding::PlaceholderMismatch {
        locale: locale.to_string(),
        key: key.to_string(),
        missing: describe(expected.difference(&actual)),
        extra: describe(actual.difference(&expected)),
    })
}

fn template_placeholders(
    dictionary: &Dictionary,
    locale: &str,
    key: &str,
) -> Option<BTreeSet<Placeholder>> {
    let template = dictionary.get(locale, key)?.as_literal()?;
    Some(placeholders(template).into_iter().collect())
}

fn describe<'a>(placeholders: impl Iterator<Item = &'a Placeholder>) -> Vec<String> {
    placeholders
        .map(|p| format!("{} ({})", p.name, p.kind))
        .collect()
}
