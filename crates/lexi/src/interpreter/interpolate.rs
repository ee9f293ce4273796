//! Interpolation engine for ICU-subset message templates.
//!
//! Each nesting level runs the same pipeline over its input:
//! 1. collapse `''` to `'`
//! 2. resolve a trailing select construct, recursing into the chosen branch
//! 3. resolve a trailing plural construct, recursing into the chosen branch
//! 4. substitute simple `{name}` placeholders
//! 5. unescape `'{'`, `'}'` and `'#'`
//!
//! A level that recorded a missing value returns its input unchanged, so a
//! caller either sees a fully resolved message or the raw template.

use std::sync::{Arc, LazyLock};

use bon::Builder;

use crate::interpreter::plural::plural_category;
use crate::interpreter::{
    Diagnostic, DiagnosticSink, ExpectedKind, InterpretContext, TracingSink,
};
use crate::parser::{
    ConstructKind, Token, TrailingConstruct, find_trailing_construct, parse_options,
    substitute_hash, tokenize, unescape_literals, unescape_quotes,
};
use crate::types::{Value, Values};

/// Default cap on select/plural nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

static DEFAULT_INTERPOLATOR: LazyLock<Interpolator> = LazyLock::new(Interpolator::default);

/// Interpolate a message with the default configuration.
///
/// Diagnostics go to [`TracingSink`]. Equivalent to
/// `Interpolator::default().interpolate(message, values)`.
///
/// # Example
///
/// ```
/// use lexi::{interpolate, values};
///
/// let text = interpolate(
///     "{n, plural, one{one item} other{# items}}",
///     &values! { "n" => 5 },
/// );
/// assert_eq!(text, "5 items");
/// ```
pub fn interpolate(message: &str, values: &Values) -> String {
    DEFAULT_INTERPOLATOR.interpolate(message, values)
}

/// Configured message interpolator.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lexi::{CollectingSink, Interpolator, values};
///
/// let sink = Arc::new(CollectingSink::new());
/// let interpolator = Interpolator::builder()
///     .max_depth(8)
///     .sink(sink.clone())
///     .build();
///
/// // A missing value returns the template unchanged and reports why.
/// let text = interpolator.interpolate("Hello, {name}!", &values! {});
/// assert_eq!(text, "Hello, {name}!");
/// assert_eq!(sink.diagnostics().len(), 1);
/// ```
#[derive(Builder, Clone)]
pub struct Interpolator {
    /// Maximum select/plural nesting depth.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Where diagnostics are reported.
    #[builder(default = default_sink())]
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Interpolator {
    fn default() -> Self {
        Interpolator::builder().build()
    }
}

impl Interpolator {
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn sink(&self) -> &Arc<dyn DiagnosticSink> {
        &self.sink
    }

    /// Interpolate `message` with `values`, reporting diagnostics to the sink.
    ///
    /// Returns the resolved message, or `message` itself if any placeholder
    /// had no value.
    pub fn interpolate(&self, message: &str, values: &Values) -> String {
        let (text, diagnostics) = self.interpolate_with_diagnostics(message, values);
        for diagnostic in &diagnostics {
            self.sink.report(diagnostic);
        }
        text
    }

    /// Interpolate without reporting, returning the diagnostics instead.
    ///
    /// A [`Diagnostic::MissingValues`] entry, always last, means the raw
    /// message was returned.
    pub fn interpolate_with_diagnostics(
        &self,
        message: &str,
        values: &Values,
    ) -> (String, Vec<Diagnostic>) {
        let mut ctx = InterpretContext::new(values, self.max_depth);
        let text = interpret(message, &mut ctx);
        let (missing, mut diagnostics) = ctx.finish();

        if missing.is_empty() {
            return (text, diagnostics);
        }
        diagnostics.push(Diagnostic::MissingValues {
            message: message.to_string(),
            missing,
        });
        (message.to_string(), diagnostics)
    }
}

fn default_sink() -> Arc<dyn DiagnosticSink> {
    Arc::new(TracingSink)
}

/// Interpret one nesting level.
fn interpret(message: &str, ctx: &mut InterpretContext<'_>) -> String {
    if ctx.over_limit() {
        ctx.add_diagnostic(Diagnostic::RecursionLimitExceeded {
            max_depth: ctx.max_depth(),
        });
        return message.to_string();
    }
    let missing_before = ctx.missing_count();

    let mut text = unescape_quotes(message);
    for kind in [ConstructKind::Select, ConstructKind::Plural] {
        if let Some(construct) = find_trailing_construct(&text, kind) {
            let replacement = match kind {
                ConstructKind::Select => resolve_select(&construct, ctx),
                ConstructKind::Plural => resolve_plural(&construct, ctx),
            };
            let start = construct.start;
            text.truncate(start);
            text.push_str(&replacement);
        }
    }
    let text = unescape_literals(&substitute_placeholders(&text, ctx));

    if ctx.missing_count() > missing_before {
        return message.to_string();
    }
    text
}

/// Resolve `{name, select, ...}` to the chosen branch.
fn resolve_select(construct: &TrailingConstruct<'_>, ctx: &mut InterpretContext<'_>) -> String {
    let name = construct.identifier;
    let Some(value) = ctx.get_value(name) else {
        ctx.record_missing(name, ExpectedKind::String);
        return bare_placeholder(name);
    };
    let key = value.to_string();
    let options = parse_options(construct.options);
    let Some(branch) = options.get(&key).or_else(|| options.get("other")) else {
        ctx.add_diagnostic(Diagnostic::MissingOption {
            name: name.to_string(),
            kind: ConstructKind::Select,
            category: key,
        });
        return bare_placeholder(name);
    };
    ctx.nested(|ctx| interpret(branch, ctx))
}

/// Resolve `{name, plural, ...}` to the chosen branch with `#` substituted.
fn resolve_plural(construct: &TrailingConstruct<'_>, ctx: &mut InterpretContext<'_>) -> String {
    let name = construct.identifier;
    let Some((n, display)) = ctx.get_value(name).and_then(plural_operand) else {
        ctx.record_missing(name, ExpectedKind::Number);
        return bare_placeholder(name);
    };
    let category = plural_category(n);
    let options = parse_options(construct.options);
    let Some(branch) = options
        .get(category.as_str())
        .or_else(|| options.get("other"))
    else {
        ctx.add_diagnostic(Diagnostic::MissingOption {
            name: name.to_string(),
            kind: ConstructKind::Plural,
            category: category.to_string(),
        });
        return bare_placeholder(name);
    };
    let branch = substitute_hash(branch, &display);
    ctx.nested(|ctx| interpret(&branch, ctx))
}

/// Coerce a value to a plural operand and its decimal form.
fn plural_operand(value: &Value) -> Option<(f64, String)> {
    let n = value.as_plural_operand()?;
    let display = match value {
        Value::Number(i) => i.to_string(),
        // -0 prints as 0
        _ if n == 0.0 => "0".to_string(),
        _ if n == f64::INFINITY => "Infinity".to_string(),
        _ if n == f64::NEG_INFINITY => "-Infinity".to_string(),
        _ => n.to_string(),
    };
    Some((n, display))
}

/// Replace simple placeholders, leaving missing ones in place.
fn substitute_placeholders(text: &str, ctx: &mut InterpretContext<'_>) -> String {
    let mut output = String::with_capacity(text.len());
    for token in tokenize(text) {
        match token {
            Token::Literal(s) | Token::Escaped(s) => output.push_str(s),
            Token::Placeholder(name) => match ctx.get_value(name) {
                Some(value) => output.push_str(&value.to_string()),
                None => {
                    ctx.record_missing(name, ExpectedKind::ReplacementString);
                    output.push_str(&bare_placeholder(name));
                }
            },
        }
    }
    output
}

fn bare_placeholder(name: &str) -> String {
    format!("{{{name}}}")
}
