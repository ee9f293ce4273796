//! Property-based invariant tests for interpolation.
//!
//! These hold for any template and value bag:
//!
//! 1. Text without braces, quotes or `#` is returned unchanged.
//! 2. Simple placeholders with every value present are fully substituted.
//! 3. A missing value returns the template byte-for-byte.
//! 4. Plural bucketing is total and matches the fixed table.
//! 5. Interpolation never panics and is deterministic.

use std::sync::Arc;

use lexi::interpreter::{PluralCategory, plural_category};
use lexi::parser::placeholders;
use lexi::{Diagnostic, Interpolator, NullSink, Values, interpolate, values};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?:;()-]{0,24}"
}

fn value_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}"
}

/// Literal segments interleaved with `{v0}`, `{v1}`, ... and their values.
fn simple_template() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    (1usize..=5).prop_flat_map(|n| {
        (
            proptest::collection::vec(plain_text(), n + 1),
            proptest::collection::vec(value_text(), n),
        )
    })
}

fn render_template(literals: &[String], count: usize) -> String {
    let mut template = literals[0].clone();
    for (i, literal) in literals[1..=count].iter().enumerate() {
        template.push_str(&format!("{{v{i}}}"));
        template.push_str(literal);
    }
    template
}

fn quiet() -> Interpolator {
    Interpolator::builder().sink(Arc::new(NullSink)).build()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Identity on plain text
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plain_text_is_unchanged(text in plain_text()) {
        prop_assert_eq!(interpolate(&text, &values! {}), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Full substitution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn present_values_are_substituted((literals, vals) in simple_template()) {
        let template = render_template(&literals, vals.len());
        let mut bag = Values::new();
        let mut expected = literals[0].clone();
        for (i, value) in vals.iter().enumerate() {
            bag.insert(format!("v{i}"), value.as_str().into());
            expected.push_str(value);
            expected.push_str(&literals[i + 1]);
        }

        let (text, diagnostics) = quiet().interpolate_with_diagnostics(&template, &bag);
        prop_assert_eq!(text, expected);
        prop_assert!(diagnostics.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Missing values return the template
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_value_returns_template(
        (literals, vals) in simple_template(),
        dropped in any::<prop::sample::Index>(),
    ) {
        let template = render_template(&literals, vals.len());
        let dropped = dropped.index(vals.len());
        let mut bag = Values::new();
        for (i, value) in vals.iter().enumerate() {
            if i != dropped {
                bag.insert(format!("v{i}"), value.as_str().into());
            }
        }

        let (text, diagnostics) = quiet().interpolate_with_diagnostics(&template, &bag);
        prop_assert_eq!(&text, &template);
        let reported = matches!(
            diagnostics.last(),
            Some(Diagnostic::MissingValues { missing, .. }) if missing.len() == 1
        );
        prop_assert!(reported);
    }

    #[test]
    fn missing_plural_operand_returns_template(prefix in plain_text()) {
        let template = format!("{prefix}{{n, plural, one{{# item}} other{{# items}}}}");
        prop_assert_eq!(quiet().interpolate(&template, &values! {}), template);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Plural bucketing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn integer_buckets_match_table(n in -1000i64..1000) {
        let expected = match n {
            0 => "zero",
            1 => "one",
            2 => "two",
            3 | 4 => "few",
            n if n >= 5 => "many",
            _ => "other",
        };
        let text = interpolate(
            "{n, plural, zero{zero} one{one} two{two} few{few} many{many} other{other}}",
            &values! { "n" => n },
        );
        prop_assert_eq!(text, expected);
    }

    #[test]
    fn every_finite_number_has_a_category(n in -1.0e9f64..1.0e9) {
        let category = plural_category(n);
        if n < 0.0 {
            prop_assert_eq!(category, PluralCategory::Other);
        } else if n >= 5.0 {
            prop_assert_eq!(category, PluralCategory::Many);
        }
    }

    #[test]
    fn other_is_the_universal_fallback(n in -1000i64..1000) {
        let text = interpolate("{n, plural, other{# things}}", &values! { "n" => n });
        prop_assert_eq!(text, format!("{n} things"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Robustness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_input_never_panics(message in "\\PC{0,64}") {
        let bag = values! { "n" => 3, "x" => "a", "g" => "f" };
        let first = quiet().interpolate(&message, &bag);
        let second = quiet().interpolate(&message, &bag);
        prop_assert_eq!(first, second);
        let _ = placeholders(&message);
    }

    #[test]
    fn syntax_heavy_input_never_panics(message in "[{}#', a-z0-9]{0,48}") {
        let bag = values! { "n" => 1.5, "x" => "'{'", "g" => "other" };
        let _ = quiet().interpolate(&message, &bag);
        let _ = placeholders(&message);
    }

    #[test]
    fn shallow_cap_terminates(depth in 0usize..4, message in "[{}#', a-z]{0,32}") {
        let interpolator = Interpolator::builder()
            .max_depth(depth)
            .sink(Arc::new(NullSink))
            .build();
        let _ = interpolator.interpolate(&message, &values! { "n" => 2, "x" => "y" });
    }
}
