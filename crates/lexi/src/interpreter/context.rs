//! Interpretation context for tracking state during recursive interpolation.

use crate::interpreter::{Diagnostic, ExpectedKind, MissingValue};
use crate::types::{Value, Values};

/// State carried through one interpolation call.
///
/// The context tracks:
/// - The caller's value bag (read-only)
/// - Current construct nesting depth and its cap
/// - Missing values, shared across every nesting level
/// - Other diagnostics collected along the way
pub struct InterpretContext<'a> {
    values: &'a Values,
    depth: usize,
    max_depth: usize,
    missing: Vec<MissingValue>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> InterpretContext<'a> {
    pub fn new(values: &'a Values, max_depth: usize) -> Self {
        Self {
            values,
            depth: 0,
            max_depth,
            missing: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Get a value from the bag.
    pub fn get_value(&self, name: &str) -> Option<&'a Value> {
        self.values.get(name)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether the current level is past the depth cap.
    pub fn over_limit(&self) -> bool {
        self.depth > self.max_depth
    }

    /// Run `f` one nesting level deeper.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Record a missing value. A name is recorded once, with the kind of its
    /// first use.
    pub fn record_missing(&mut self, name: &str, expected: ExpectedKind) {
        if self.missing.iter().all(|m| m.name != name) {
            self.missing.push(MissingValue {
                name: name.to_string(),
                expected,
            });
        }
    }

    /// Number of distinct missing values recorded so far.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn missing(&self) -> &[MissingValue] {
        &self.missing
    }

    /// Add a diagnostic, ignoring exact duplicates.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Consume the context, returning missing values and other diagnostics.
    pub fn finish(self) -> (Vec<MissingValue>, Vec<Diagnostic>) {
        (self.missing, self.diagnostics)
    }
}
