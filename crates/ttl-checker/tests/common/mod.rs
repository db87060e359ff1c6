#![allow(dead_code)]

//! Shared helpers for the checker integration suites.

use ttl_checker::{NameEnv, TtlAst, TypeEnv, evaluate, parse_and_validate};
use ttl_common::diagnostics::Diagnostic;
use ttl_solver::{ProgramHost, TypeId};

/// A host with `Array` templatizable and the default primitives.
pub fn array_host() -> ProgramHost {
    let host = ProgramHost::new();
    host.register_templatizable("Array", 1);
    host
}

/// Parse and validate, asserting success.
pub fn parse_ok(source: &str) -> TtlAst {
    let (ast, diagnostics) = parse_and_validate(source, "test.ttl");
    match ast {
        Some(ast) => ast,
        None => panic!("expected {source:?} to validate, got {diagnostics:?}"),
    }
}

/// Evaluate `source` against `host` with the given variable bindings.
pub fn eval_with(
    host: &ProgramHost,
    source: &str,
    type_vars: &[(&str, TypeId)],
    name_vars: &[(&str, &str)],
) -> (TypeId, Vec<Diagnostic>) {
    let ast = parse_ok(source);
    let mut type_env = TypeEnv::new();
    for (name, ty) in type_vars {
        type_env = type_env.extend(name, *ty);
    }
    let mut name_env = NameEnv::new();
    for (name, value) in name_vars {
        name_env = name_env.extend(name, (*value).to_string());
    }
    evaluate(&ast, host, &type_env, &name_env, "test.ttl")
}

/// The diagnostic codes in emission order.
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics.iter().map(|d| d.code).collect()
}

/// The codes produced by parse_and_validate for `source`, plus whether it
/// validated.
pub fn validate_codes(source: &str) -> (bool, Vec<u32>) {
    let (ast, diagnostics) = parse_and_validate(source, "test.ttl");
    (ast.is_some(), codes(&diagnostics))
}
