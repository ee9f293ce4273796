use std::fmt;
use std::sync::Arc;

use super::Values;

/// Signature of a precompiled translation entry.
pub type FormatterFn = dyn Fn(&Values) -> String + Send + Sync;

/// A translation entry stored in a [`Dictionary`](crate::Dictionary).
///
/// Literal entries are message templates and go through the interpolator.
/// Formatter entries do their own formatting: they receive the caller's
/// values directly and their output is returned verbatim.
#[derive(Clone)]
pub enum Entry {
    /// A message template.
    Literal(String),
    /// A formatting function that bypasses interpolation.
    Formatter(Arc<FormatterFn>),
}

impl Entry {
    /// Create a literal entry.
    pub fn literal(template: impl Into<String>) -> Self {
        Entry::Literal(template.into())
    }

    /// Create a formatter entry from a closure.
    pub fn formatter(f: impl Fn(&Values) -> String + Send + Sync + 'static) -> Self {
        Entry::Formatter(Arc::new(f))
    }

    /// Get the template text if this is a literal entry.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Entry::Literal(s) => Some(s),
            Entry::Formatter(_) => None,
        }
    }

    /// Check whether this entry is a formatter.
    pub fn is_formatter(&self) -> bool {
        matches!(self, Entry::Formatter(_))
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Entry::Formatter(_) => f.write_str("Formatter(..)"),
        }
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Literal(s.to_string())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Literal(s)
    }
}
