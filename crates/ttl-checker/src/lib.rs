//! Syntactic validator and semantic evaluator for TTL terms.
//!
//! The two passes are independent: validation runs once per annotation,
//! evaluation runs on every template instantiation. An annotation that
//! fails validation is never evaluated.
//!
//! ```
//! use ttl_checker::{NameEnv, TypeEnv, evaluate, parse_and_validate};
//! use ttl_solver::{ProgramHost, TypeHost, TypeId};
//!
//! let host = ProgramHost::new();
//! host.register_templatizable("Array", 1);
//!
//! let (ast, diagnostics) = parse_and_validate("type('Array', T)", "doc.ttl");
//! assert!(diagnostics.is_empty());
//! let ast = ast.unwrap();
//!
//! let type_env = TypeEnv::new().extend("T", TypeId::NUMBER);
//! let (result, warnings) = evaluate(&ast, &host, &type_env, &NameEnv::new(), "doc.ttl");
//! assert!(warnings.is_empty());
//! assert_eq!(host.format_type(result), "Array<number>");
//! ```

pub mod env;
pub mod evaluate;
pub mod keywords;
pub mod validate;

pub use env::{Env, NameEnv, TypeEnv};
pub use evaluate::EvalState;
pub use keywords::{Keyword, KeywordKind, VARIADIC};
pub use validate::ValidatorState;

use ttl_common::diagnostics::Diagnostic;
use ttl_parser::{ExprArena, ExprId, ParserState};
use ttl_solver::{TypeHost, TypeId};

/// A parsed and validated TTL term, ready to evaluate.
pub struct TtlAst {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Parse annotation source and validate the result.
///
/// Returns `None` (with diagnostics) when the source does not parse or the
/// term is not well-formed TTL; a returned ast always evaluates without
/// invariant violations.
pub fn parse_and_validate(source: &str, file: &str) -> (Option<TtlAst>, Vec<Diagnostic>) {
    let mut parser = ParserState::new(file.to_string(), source.to_string());
    let root = parser.parse_expression();
    let (arena, mut diagnostics) = parser.into_parts();
    let Some(root) = root else {
        return (None, diagnostics);
    };

    let mut validator = ValidatorState::new(&arena, file);
    let ok = validator.validate(root);
    diagnostics.extend(validator.diagnostics);
    if ok {
        (Some(TtlAst { arena, root }), diagnostics)
    } else {
        (None, diagnostics)
    }
}

/// Evaluate a validated term against a host and environments.
///
/// Always yields a type; dynamic failures surface as warning diagnostics
/// with the canonical unknown type standing in for the failed subterm.
pub fn evaluate<H: TypeHost>(
    ast: &TtlAst,
    host: &H,
    type_env: &TypeEnv,
    name_env: &NameEnv,
    file: &str,
) -> (TypeId, Vec<Diagnostic>) {
    tracing::debug!(file, "evaluating type transformation");
    let mut state = EvalState::new(&ast.arena, host, file);
    let result = state.eval(ast.root, type_env, name_env);
    (result, state.diagnostics)
}
