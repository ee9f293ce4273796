//! Injectable diagnostics channel.

use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Diagnostic;

/// Receives diagnostics produced while resolving translations.
///
/// Any `Fn(&Diagnostic) + Send + Sync` closure is a sink.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Default sink: emits each diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::MissingValues { message, missing } => {
                let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
                tracing::warn!(message = %message, missing = ?names, "missing interpolation values");
            }
            Diagnostic::MissingOption {
                name,
                kind,
                category,
            } => {
                tracing::warn!(name = %name, kind = %kind, category = %category, "no matching option and no 'other' fallback");
            }
            Diagnostic::MissingKey {
                locale,
                key,
                suggestions,
            } => {
                tracing::warn!(locale = %locale, key = %key, suggestions = ?suggestions, "missing translation");
            }
            Diagnostic::RecursionLimitExceeded { max_depth } => {
                tracing::warn!(max_depth = *max_depth, "interpolation depth limit exceeded");
            }
        }
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Sink that keeps every diagnostic in memory, in report order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Drain the diagnostics reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}
