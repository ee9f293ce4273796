//! Interpolator for ICU-subset message templates.
//!
//! This module provides the evaluation engine that takes a message template
//! and a value bag and produces the display string. It resolves trailing
//! select and plural constructs recursively, substitutes simple placeholders,
//! and reports anything that degraded the result through a
//! [`DiagnosticSink`].

mod context;
mod diagnostic;
mod interpolate;
mod plural;
mod sink;

pub use context::InterpretContext;
pub use diagnostic::{Diagnostic, ExpectedKind, MissingValue};
pub use interpolate::{DEFAULT_MAX_DEPTH, Interpolator, interpolate};
pub use plural::{PluralCategory, plural_category};
pub use sink::{CollectingSink, DiagnosticSink, NullSink, TracingSink};
