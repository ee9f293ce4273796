//! Integration tests for message interpolation.

use std::sync::Arc;

use lexi::interpreter::{PluralCategory, plural_category};
use lexi::parser::ConstructKind;
use lexi::{
    CollectingSink, Diagnostic, ExpectedKind, Interpolator, MissingValue, Value, Values,
    interpolate, values,
};

fn collecting() -> (Interpolator, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let interpolator = Interpolator::builder().sink(sink.clone()).build();
    (interpolator, sink)
}

// =============================================================================
// Simple Placeholders
// =============================================================================

#[test]
fn template_without_placeholders_is_unchanged() {
    assert_eq!(interpolate("Hello, world!", &values! {}), "Hello, world!");
}

#[test]
fn empty_template() {
    assert_eq!(interpolate("", &values! {}), "");
}

#[test]
fn simple_placeholder_is_replaced() {
    let result = interpolate("Hello, {name}!", &values! { "name" => "Ada" });
    assert_eq!(result, "Hello, Ada!");
}

#[test]
fn number_and_float_values_use_display_form() {
    let result = interpolate(
        "{count} files, {ratio} ratio",
        &values! { "count" => 3, "ratio" => 0.25 },
    );
    assert_eq!(result, "3 files, 0.25 ratio");
}

#[test]
fn repeated_placeholder_is_replaced_everywhere() {
    let result = interpolate("{x} and {x}", &values! { "x" => "y" });
    assert_eq!(result, "y and y");
}

#[test]
fn placeholder_with_spaces_is_literal_text() {
    let (interpolator, sink) = collecting();
    let result = interpolator.interpolate("{ name }", &values! { "name" => "Ada" });
    assert_eq!(result, "{ name }");
    assert!(sink.is_empty());
}

// =============================================================================
// Missing Values
// =============================================================================

#[test]
fn missing_value_returns_original_template() {
    let (interpolator, sink) = collecting();
    let template = "Hello, {name}! You are {age}.";
    let result = interpolator.interpolate(template, &values! { "age" => 30 });
    assert_eq!(result, template);
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::MissingValues {
            message: template.to_string(),
            missing: vec![MissingValue {
                name: "name".to_string(),
                expected: ExpectedKind::ReplacementString,
            }],
        }]
    );
}

#[test]
fn every_missing_name_is_listed_once() {
    let (interpolator, sink) = collecting();
    let template = "{a} {b} {a}";
    assert_eq!(interpolator.interpolate(template, &values! {}), template);

    let diagnostics = sink.diagnostics();
    let [Diagnostic::MissingValues { missing, .. }] = diagnostics.as_slice() else {
        panic!("expected one MissingValues diagnostic, got {diagnostics:?}");
    };
    let names: Vec<&str> = missing.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn missing_select_value_expects_string() {
    let (interpolator, sink) = collecting();
    let template = "{g, select, male{Mr} other{Mx}}";
    assert_eq!(interpolator.interpolate(template, &values! {}), template);
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::MissingValues {
            message: template.to_string(),
            missing: vec![MissingValue {
                name: "g".to_string(),
                expected: ExpectedKind::String,
            }],
        }]
    );
}

#[test]
fn non_numeric_plural_value_expects_number() {
    let (interpolator, sink) = collecting();
    let template = "{n, plural, one{# item} other{# items}}";
    let result = interpolator.interpolate(template, &values! { "n" => "many" });
    assert_eq!(result, template);
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::MissingValues {
            message: template.to_string(),
            missing: vec![MissingValue {
                name: "n".to_string(),
                expected: ExpectedKind::Number,
            }],
        }]
    );
}

#[test]
fn missing_values_message_lists_expected_kinds() {
    let (interpolator, _sink) = collecting();
    let (text, diagnostics) =
        interpolator.interpolate_with_diagnostics("{who} has {n, plural, other{#}}", &values! {});
    assert_eq!(text, "{who} has {n, plural, other{#}}");
    insta::assert_snapshot!(
        diagnostics[0].to_string(),
        @r#"missing values for message "{who} has {n, plural, other{#}}": 'n' (number), 'who' (replacement string)"#
    );
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn doubled_quote_is_unescaped() {
    assert_eq!(interpolate("it''s {x}", &values! { "x" => "ok" }), "it's ok");
}

#[test]
fn escaped_braces_are_not_placeholders() {
    let (interpolator, sink) = collecting();
    let result = interpolator.interpolate("'{'name'}' stays", &values! {});
    assert_eq!(result, "{name} stays");
    assert!(sink.is_empty());
}

#[test]
fn escaped_hash_is_unescaped() {
    assert_eq!(interpolate("Item '#'{n}", &values! { "n" => 4 }), "Item #4");
}

#[test]
fn quotes_are_unescaped_at_every_level() {
    let result = interpolate("{g, select, other{It''''s}}", &values! { "g" => "x" });
    assert_eq!(result, "It's");
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn select_picks_matching_option() {
    let template = "{g, select, male{Mr} female{Ms} other{Mx}}";
    assert_eq!(interpolate(template, &values! { "g" => "female" }), "Ms");
}

#[test]
fn select_falls_back_to_other() {
    let template = "{g, select, male{Mr} female{Ms} other{Mx}}";
    assert_eq!(interpolate(template, &values! { "g" => "other-value" }), "Mx");
}

#[test]
fn select_keeps_leading_text() {
    let template = "Dear {g, select, male{Mr} other{Mx}}";
    assert_eq!(interpolate(template, &values! { "g" => "male" }), "Dear Mr");
}

#[test]
fn select_matches_number_display_form() {
    let template = "{k, select, 1{first} other{rest}}";
    assert_eq!(interpolate(template, &values! { "k" => 1 }), "first");
}

#[test]
fn select_header_whitespace_is_optional() {
    let template = "{g,select,a{A}other{O}}";
    assert_eq!(interpolate(template, &values! { "g" => "a" }), "A");
}

#[test]
fn repeated_option_uses_last_text() {
    let template = "{g, select, a{1} a{2} other{3}}";
    assert_eq!(interpolate(template, &values! { "g" => "a" }), "2");
}

#[test]
fn hash_is_literal_inside_select() {
    assert_eq!(interpolate("{g, select, other{#1}}", &values! { "g" => "x" }), "#1");
}

#[test]
fn select_without_match_or_other_degrades_to_placeholder() {
    let (interpolator, sink) = collecting();
    let result = interpolator.interpolate("{g, select, male{Mr}}", &values! { "g" => "x" });
    assert_eq!(result, "x");
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::MissingOption {
            name: "g".to_string(),
            kind: ConstructKind::Select,
            category: "x".to_string(),
        }]
    );
}

// =============================================================================
// Plural
// =============================================================================

#[test]
fn plural_one_and_many_with_other_fallback() {
    let template = "{n, plural, one{one item} other{# items}}";
    assert_eq!(interpolate(template, &values! { "n" => 1 }), "one item");
    assert_eq!(interpolate(template, &values! { "n" => 5 }), "5 items");
}

#[test]
fn plural_buckets() {
    let template = "{n, plural, zero{Z} one{O} two{T} few{F} many{M} other{X}}";
    let cases: [(Value, &str); 9] = [
        (0.into(), "Z"),
        (1.into(), "O"),
        (2.into(), "T"),
        (3.into(), "F"),
        (4.into(), "F"),
        (5.into(), "M"),
        (1000.into(), "M"),
        ((-1).into(), "X"),
        (1.5.into(), "X"),
    ];
    for (value, expected) in cases {
        let mut values = Values::new();
        values.insert("n".to_string(), value.clone());
        assert_eq!(interpolate(template, &values), expected, "value {value}");
    }
}

#[test]
fn plural_category_is_fixed_bucketing() {
    assert_eq!(plural_category(0.0), PluralCategory::Zero);
    assert_eq!(plural_category(2.5), PluralCategory::Few);
    assert_eq!(plural_category(4.999), PluralCategory::Few);
    assert_eq!(plural_category(5.0), PluralCategory::Many);
    assert_eq!(plural_category(0.5), PluralCategory::Other);
    assert_eq!(plural_category(-3.0), PluralCategory::Other);
}

#[test]
fn plural_hash_uses_decimal_form() {
    let template = "{n, plural, other{# left}}";
    assert_eq!(interpolate(template, &values! { "n" => 2.5 }), "2.5 left");
    assert_eq!(interpolate(template, &values! { "n" => 5.0 }), "5 left");
}

#[test]
fn plural_accepts_numeric_strings() {
    let template = "{n, plural, few{# some} other{# lots}}";
    assert_eq!(interpolate(template, &values! { "n" => " 3 " }), "3 some");
}

#[test]
fn plural_blank_string_counts_as_zero() {
    let template = "{n, plural, zero{none} many{lots #} other{some #}}";
    assert_eq!(interpolate(template, &values! { "n" => "" }), "none");
    assert_eq!(interpolate(template, &values! { "n" => "  " }), "none");
}

#[test]
fn plural_infinity_is_many() {
    let template = "{n, plural, zero{none} many{lots #} other{some #}}";
    assert_eq!(
        interpolate(template, &values! { "n" => f64::INFINITY }),
        "lots Infinity"
    );
    assert_eq!(
        interpolate(template, &values! { "n" => f64::NEG_INFINITY }),
        "some -Infinity"
    );
}

#[test]
fn plural_nan_is_missing() {
    let (interpolator, sink) = collecting();
    let template = "{n, plural, other{# items}}";
    let result = interpolator.interpolate(template, &values! { "n" => f64::NAN });
    assert_eq!(result, template);
    assert!(matches!(
        sink.diagnostics().as_slice(),
        [Diagnostic::MissingValues { .. }]
    ));
}

#[test]
fn plural_escaped_hash_survives() {
    assert_eq!(interpolate("{n, plural, other{#'#'}}", &values! { "n" => 7 }), "7#");
}

#[test]
fn plural_with_prefix_and_simple_placeholder() {
    let template = "Hello {name}, you have {n, plural, one{# message} other{# messages}}";
    let result = interpolate(template, &values! { "name" => "Ada", "n" => 3 });
    assert_eq!(result, "Hello Ada, you have 3 messages");
}

#[test]
fn plural_without_category_or_other_degrades_to_placeholder() {
    let (interpolator, sink) = collecting();
    let result = interpolator.interpolate("{n, plural, one{x}}", &values! { "n" => 5 });
    assert_eq!(result, "5");
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::MissingOption {
            name: "n".to_string(),
            kind: ConstructKind::Plural,
            category: "many".to_string(),
        }]
    );
}

// =============================================================================
// Grammar Limits
// =============================================================================

#[test]
fn construct_must_end_the_message() {
    let template = "{n, plural, one{a} other{b}} left";
    let result = interpolate(template, &values! { "n" => 1, "a" => "A", "b" => "B" });
    assert_eq!(result, "{n, plural, oneA otherB} left");
}

#[test]
fn option_bodies_do_not_nest() {
    let template = "{g, select, a{Hi {name}} other{Bye}}";
    let result = interpolate(template, &values! { "g" => "a", "name" => "Ada" });
    assert_eq!(result, "Hi {name");
}

// =============================================================================
// Recursion Limit
// =============================================================================

#[test]
fn recursion_limit_stops_nested_resolution() {
    let sink = Arc::new(CollectingSink::new());
    let interpolator = Interpolator::builder()
        .max_depth(0)
        .sink(sink.clone())
        .build();

    let result = interpolator.interpolate("{g, select, other{x}}", &values! { "g" => "a" });
    assert_eq!(result, "x");
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::RecursionLimitExceeded { max_depth: 0 }]
    );
}

#[test]
fn deeply_nested_fixture_terminates() {
    let depth = 40;
    let mut template = String::new();
    let mut values = Values::new();
    for level in 0..depth {
        template.push_str(&format!("{{v{level}, select, a{{"));
        values.insert(format!("v{level}"), Value::from("a"));
    }
    template.push_str("leaf");
    for _ in 0..depth {
        template.push_str("}}");
    }

    // Option bodies end at the first `}`, so only the outermost select
    // resolves and its branch is the unterminated remainder.
    let mut expected = String::new();
    for level in 1..depth {
        expected.push_str(&format!("{{v{level}, select, a{{"));
    }
    expected.push_str("leaf");

    let (interpolator, sink) = collecting();
    let result = interpolator.interpolate(&template, &values);
    assert_eq!(result, expected);
    assert!(sink.is_empty());
}

#[test]
fn shallow_nested_fixture_output() {
    let template = "{a, select, x{{b, select, y{{c, select, z{leaf}}}}}}";
    let result = interpolate(template, &values! { "a" => "x", "b" => "y", "c" => "z" });
    insta::assert_snapshot!(result, @"{b, select, y{{c, select, z{leaf");
}

// A select branch can supply the closing brace of a plural that precedes it,
// so the plural resolves one level deeper after the select is spliced in.
const SPLICED: &str = "{n, plural, other{#}{g, select, other{'}'}}";

#[test]
fn select_splice_completes_plural() {
    let (interpolator, sink) = collecting();
    let result = interpolator.interpolate(SPLICED, &values! { "n" => 3, "g" => "a" });
    assert_eq!(result, "3");
    assert!(sink.is_empty());
}

#[test]
fn depth_limit_stops_select_splice() {
    let sink = Arc::new(CollectingSink::new());
    let interpolator = Interpolator::builder()
        .max_depth(0)
        .sink(sink.clone())
        .build();

    let result = interpolator.interpolate(SPLICED, &values! { "n" => 3, "g" => "a" });
    insta::assert_snapshot!(result, @"{n, plural, other{#}}");
    assert_eq!(
        sink.diagnostics(),
        vec![Diagnostic::RecursionLimitExceeded { max_depth: 0 }]
    );
}

#[test]
fn default_max_depth_is_32() {
    assert_eq!(Interpolator::default().max_depth(), 32);
}
