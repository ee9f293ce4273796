//! Public types produced by the template scanner.
//!
//! These types are public to enable external tooling (dictionary checkers,
//! extraction scripts, editors).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a category construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstructKind {
    /// `{name, select, a{...} other{...}}`
    Select,
    /// `{name, plural, one{...} other{...}}`
    Plural,
}

impl ConstructKind {
    /// The keyword that follows the identifier in the construct header.
    pub fn keyword(self) -> &'static str {
        match self {
            ConstructKind::Select => "select",
            ConstructKind::Plural => "plural",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A select or plural construct that runs to the end of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingConstruct<'a> {
    /// Byte offset of the construct's opening brace.
    pub start: usize,
    /// The discriminator identifier.
    pub identifier: &'a str,
    /// Whether this is a select or plural construct.
    pub kind: ConstructKind,
    /// Raw option block between the header and the final closing brace.
    pub options: &'a str,
}

/// One `name{text}` option of a select or plural construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionBranch<'a> {
    pub name: &'a str,
    pub text: &'a str,
}

/// The parsed option block of a construct, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options<'a> {
    pub branches: Vec<OptionBranch<'a>>,
}

impl<'a> Options<'a> {
    /// Look up the text of an option. A repeated name resolves to its last
    /// occurrence.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.branches
            .iter()
            .rev()
            .find(|branch| branch.name == name)
            .map(|branch| branch.text)
    }

    /// Option names in source order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.branches.iter().map(|branch| branch.name)
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

/// A piece of message text outside of category constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text.
    Literal(&'a str),
    /// An escaped literal such as `'{'`, kept in raw form.
    Escaped(&'a str),
    /// A simple `{identifier}` placeholder; holds the identifier.
    Placeholder(&'a str),
}

/// How a message refers to a named value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    Simple,
    Select,
    Plural,
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderKind::Simple => f.write_str("simple"),
            PlaceholderKind::Select => f.write_str("select"),
            PlaceholderKind::Plural => f.write_str("plural"),
        }
    }
}

/// A named value referenced by a message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placeholder {
    pub name: String,
    pub kind: PlaceholderKind,
}
