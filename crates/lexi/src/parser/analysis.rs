//! Static analysis of message templates.

use std::collections::BTreeSet;

use super::ast::{ConstructKind, Placeholder, PlaceholderKind, Token};
use super::scan::{find_trailing_construct, parse_options, tokenize, unescape_quotes};

/// Maximum construct nesting followed by [`placeholders`].
const MAX_ANALYSIS_DEPTH: usize = 32;

/// List every named value a template can reference, sorted by name.
///
/// Follows the same grammar as interpolation: trailing select and plural
/// constructs are recognized at the end of the message, and every option
/// branch is analyzed. The same name may appear once per kind.
///
/// # Example
///
/// ```
/// use lexi::parser::{placeholders, PlaceholderKind};
///
/// let found = placeholders("{user} has {n, plural, one{# file} other{# files}}");
/// let names: Vec<_> = found.iter().map(|p| (p.name.as_str(), p.kind)).collect();
/// assert_eq!(
///     names,
///     vec![("n", PlaceholderKind::Plural), ("user", PlaceholderKind::Simple)]
/// );
/// ```
pub fn placeholders(message: &str) -> Vec<Placeholder> {
    let mut found = BTreeSet::new();
    collect(message, 0, &mut found);
    found.into_iter().collect()
}

fn collect(message: &str, depth: usize, found: &mut BTreeSet<Placeholder>) {
    if depth > MAX_ANALYSIS_DEPTH {
        return;
    }
    let mut text = unescape_quotes(message);

    for (kind, placeholder_kind) in [
        (ConstructKind::Select, PlaceholderKind::Select),
        (ConstructKind::Plural, PlaceholderKind::Plural),
    ] {
        let Some(construct) = find_trailing_construct(&text, kind) else {
            continue;
        };
        found.insert(Placeholder {
            name: construct.identifier.to_string(),
            kind: placeholder_kind,
        });
        for branch in parse_options(construct.options).branches {
            collect(branch.text, depth + 1, found);
        }
        let start = construct.start;
        text.truncate(start);
    }

    for token in tokenize(&text) {
        if let Token::Placeholder(name) = token {
            found.insert(Placeholder {
                name: name.to_string(),
                kind: PlaceholderKind::Simple,
            });
        }
    }
}
