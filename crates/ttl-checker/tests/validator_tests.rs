//! Syntactic validator rules: keyword recognition, arity bounds, and
//! per-form argument shapes.

mod common;

use common::validate_codes;
use ttl_checker::{Keyword, VARIADIC};
use ttl_common::diagnostics::diagnostic_codes;

/// Build a call with `count` type-variable arguments.
fn call_with_args(name: &str, count: usize) -> String {
    let args: Vec<&str> = std::iter::repeat_n("T", count).collect();
    format!("{name}({})", args.join(", "))
}

#[test]
fn leaf_terms_are_always_valid() {
    assert!(validate_codes("T").0);
    assert!(validate_codes("'Array'").0);
}

#[test]
fn unknown_keyword_is_rejected() {
    let (ok, codes) = validate_codes("frobnicate(T)");
    assert!(!ok);
    assert_eq!(codes, vec![diagnostic_codes::INVALID_EXPRESSION]);
}

#[test]
fn too_few_arguments_warn_missing_param() {
    for keyword in Keyword::ALL_KEYWORDS {
        let min = keyword.min_params();
        if min == 0 {
            continue;
        }
        let source = if keyword.is_boolean() {
            // Boolean forms are only legal inside cond.
            format!("cond({}, T, T)", call_with_args(keyword.name(), min - 1))
        } else {
            call_with_args(keyword.name(), min - 1)
        };
        let (ok, codes) = validate_codes(&source);
        assert!(!ok, "{source} should not validate");
        assert!(
            codes.contains(&diagnostic_codes::MISSING_PARAM),
            "{source} should warn missing.param, got {codes:?}"
        );
    }
}

#[test]
fn too_many_arguments_warn_extra_param() {
    for keyword in Keyword::ALL_KEYWORDS {
        let max = keyword.max_params();
        if max == VARIADIC {
            continue;
        }
        let source = if keyword.is_boolean() {
            format!("cond({}, T, T)", call_with_args(keyword.name(), max + 1))
        } else {
            call_with_args(keyword.name(), max + 1)
        };
        let (ok, codes) = validate_codes(&source);
        assert!(!ok, "{source} should not validate");
        assert!(
            codes.contains(&diagnostic_codes::EXTRA_PARAM),
            "{source} should warn extra.param, got {codes:?}"
        );
    }
}

#[test]
fn arity_bounds_accept_the_table() {
    // Representative well-formed calls at min arity.
    for source in [
        "all()",
        "none()",
        "unknown()",
        "type(T, S)",
        "union(T, S)",
        "record({a: T})",
        "rawTypeOf(T)",
        "templateTypeOf(T, 0)",
        "cond(eq(T, S), T, S)",
        "mapunion(T, (x) => x)",
        "maprecord(T, (k, v) => v)",
        "typeOfVar(x)",
    ] {
        assert!(validate_codes(source).0, "{source} should validate");
    }
    // Variadic keywords keep accepting more arguments.
    assert!(validate_codes("union(T, S, T, S, T)").0);
    assert!(validate_codes("type(T, S, T, S)").0);
}

#[test]
fn keyword_lookup_is_case_insensitive_at_the_surface() {
    assert!(validate_codes("MAPUNION(T, (x) => x)").0);
    assert!(validate_codes("RawTypeOf(T)").0);
}

#[test]
fn boolean_form_is_not_a_type_expression() {
    let (ok, codes) = validate_codes("eq(T, S)");
    assert!(!ok);
    assert_eq!(codes, vec![diagnostic_codes::INVALID_EXPRESSION]);

    let (ok, _) = validate_codes("union(T, sub(T, S))");
    assert!(!ok);
}

#[test]
fn cond_requires_a_boolean_head() {
    let (ok, codes) = validate_codes("cond(union(T, S), T, S)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::INVALID_EXPRESSION));

    let (ok, _) = validate_codes("cond(T, T, S)");
    assert!(!ok);
}

#[test]
fn type_base_must_be_a_leaf() {
    let (ok, codes) = validate_codes("type(union(T, S), T)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::INVALID_INSIDE));

    assert!(validate_codes("type('Array', T)").0);
    assert!(validate_codes("type(B, T)").0);
}

#[test]
fn template_type_of_index_must_be_a_whole_number() {
    let (ok, codes) = validate_codes("templateTypeOf(T, 1.5)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::INVALID));

    let (ok, _) = validate_codes("templateTypeOf(T, x)");
    assert!(!ok);

    assert!(validate_codes("templateTypeOf(T, 0)").0);
    assert!(validate_codes("templateTypeOf(T, 12)").0);
}

#[test]
fn record_argument_must_be_an_object_literal() {
    let (ok, codes) = validate_codes("record(T)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::INVALID_INSIDE));

    assert!(validate_codes("record({})").0);
    assert!(validate_codes("record({a: T, [k]: v})").0);
}

#[test]
fn streq_operands_are_names_or_nonempty_strings() {
    let (ok, codes) = validate_codes("cond(streq(x, ''), T, S)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::INVALID));

    let (ok, _) = validate_codes("cond(streq(union(T, S), 'a'), T, S)");
    assert!(!ok);

    assert!(validate_codes("cond(streq(x, 'foo'), T, S)").0);
    assert!(validate_codes("cond(streq(x, y), T, S)").0);
}

#[test]
fn mapping_forms_require_function_literals() {
    let (ok, codes) = validate_codes("mapunion(T, S)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::INVALID_INSIDE));
}

#[test]
fn mapunion_function_takes_exactly_one_formal() {
    let (ok, codes) = validate_codes("mapunion(T, (x, y) => x)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::EXTRA_PARAM));

    let (ok, codes) = validate_codes("mapunion(T, () => T)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::MISSING_PARAM));
}

#[test]
fn maprecord_function_takes_exactly_two_formals() {
    let (ok, codes) = validate_codes("maprecord(T, (k) => k)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::MISSING_PARAM));

    let (ok, codes) = validate_codes("maprecord(T, (k, v, w) => v)");
    assert!(!ok);
    assert!(codes.contains(&diagnostic_codes::EXTRA_PARAM));
}

#[test]
fn nested_bodies_are_validated() {
    let (ok, _) = validate_codes("mapunion(T, (x) => frobnicate(x))");
    assert!(!ok);

    let (ok, _) = validate_codes("maprecord(R, (k, v) => record(v))");
    assert!(!ok);
}

#[test]
fn sibling_arguments_keep_validating_after_a_failure() {
    // Both bad arguments should be reported, not just the first.
    let (ok, codes) = validate_codes("union(record(T), templateTypeOf(T, 1.5))");
    assert!(!ok);
    assert_eq!(codes.len(), 2);
    assert!(codes.contains(&diagnostic_codes::INVALID_INSIDE));
    assert!(codes.contains(&diagnostic_codes::INVALID));
}

#[test]
fn invalid_terms_are_not_evaluable() {
    // parse_and_validate returns no ast for an invalid term, which is the
    // contract that keeps the evaluator's unreachable arms unreachable.
    let (ast, _) = ttl_checker::parse_and_validate("eq(T, S)", "test.ttl");
    assert!(ast.is_none());
}
