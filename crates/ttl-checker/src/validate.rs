//! Syntactic validation of TTL terms.
//!
//! The validator decides whether a parsed expression is a well-formed TTL
//! term: known head keywords, argument counts within bounds, and the right
//! argument shapes per form. It warns on every violation and keeps
//! validating sibling arguments so one annotation surfaces as many
//! diagnostics as possible, but each recursive call reports `false` as soon
//! as anything in its own subterm is invalid.
//!
//! An expression that fails validation is never handed to the evaluator.

use ttl_common::diagnostics::{Diagnostic, DiagnosticMessage, diagnostic_messages};
use ttl_parser::{ExprArena, ExprId, ExprKind};

use crate::keywords::{Keyword, KeywordKind};

pub struct ValidatorState<'a> {
    arena: &'a ExprArena,
    file: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> ValidatorState<'a> {
    pub fn new(arena: &'a ExprArena, file: impl Into<String>) -> Self {
        Self {
            arena,
            file: file.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Whether `expr` is a well-formed TTL term.
    pub fn validate(&mut self, expr: ExprId) -> bool {
        match &self.arena.get(expr).kind {
            // Leaf terms: a TypeVar or TypeName is always valid.
            ExprKind::Name(_) | ExprKind::StringLit(_) => true,
            ExprKind::Call { .. } => self.validate_call(expr),
            _ => {
                self.warn(expr, diagnostic_messages::INVALID_EXPRESSION, &[
                    "type transformation",
                ]);
                false
            }
        }
    }

    fn validate_call(&mut self, expr: ExprId) -> bool {
        let Some(head) = self.arena.call_head_name(expr) else {
            self.warn(expr, diagnostic_messages::INVALID_EXPRESSION, &[
                "type transformation",
            ]);
            return false;
        };
        let Some(keyword) = Keyword::lookup(head) else {
            self.warn(expr, diagnostic_messages::INVALID_EXPRESSION, &[
                "type transformation",
            ]);
            return false;
        };
        // A boolean form is only a term inside the first slot of `cond`.
        if keyword.is_boolean() {
            self.warn(expr, diagnostic_messages::INVALID_EXPRESSION, &[
                "type transformation",
            ]);
            return false;
        }
        if !self.check_arity(expr, keyword) {
            return false;
        }

        let args = self.arena.call_args(expr);
        match keyword {
            Keyword::All | Keyword::None | Keyword::Unknown => true,
            Keyword::Type => self.validate_templatize(args),
            Keyword::Union => self.validate_all_terms(args),
            Keyword::Record => self.validate_record(args[0]),
            Keyword::RawTypeOf => self.validate(args[0]),
            Keyword::TemplateTypeOf => self.validate_template_type_of(args),
            Keyword::Cond => self.validate_cond(args),
            Keyword::MapUnion => self.validate_mapping(args, Keyword::MapUnion, 1),
            Keyword::MapRecord => self.validate_mapping(args, Keyword::MapRecord, 2),
            Keyword::TypeOfVar => self.validate_string_arg(args[0], "name"),
            Keyword::Eq | Keyword::Sub | Keyword::StrEq => unreachable!("handled above"),
        }
    }

    /// Argument count within the keyword's `[min, max]`.
    fn check_arity(&mut self, expr: ExprId, keyword: Keyword) -> bool {
        let count = self.arena.call_args(expr).len();
        if count < keyword.min_params() {
            self.warn(expr, diagnostic_messages::MISSING_PARAM, &[keyword.name()]);
            false
        } else if count > keyword.max_params() {
            self.warn(expr, diagnostic_messages::EXTRA_PARAM, &[keyword.name()]);
            false
        } else {
            true
        }
    }

    fn validate_all_terms(&mut self, args: &[ExprId]) -> bool {
        let mut ok = true;
        for &arg in args {
            if !self.validate(arg) {
                ok = false;
            }
        }
        ok
    }

    /// `type(base, p1, ..)` — base must be a TypeName or TypeVar leaf.
    fn validate_templatize(&mut self, args: &[ExprId]) -> bool {
        let mut ok = true;
        if !matches!(
            self.arena.get(args[0]).kind,
            ExprKind::Name(_) | ExprKind::StringLit(_)
        ) {
            self.warn(args[0], diagnostic_messages::INVALID_INSIDE, &["type"]);
            ok = false;
        }
        if !self.validate_all_terms(&args[1..]) {
            ok = false;
        }
        ok
    }

    /// `record({..})` — the sole argument is an object literal whose
    /// properties each carry a value. Plain and computed names are both
    /// valid; computed-name resolution is the evaluator's business.
    fn validate_record(&mut self, arg: ExprId) -> bool {
        if !self.arena.is_object_lit(arg) {
            self.warn(arg, diagnostic_messages::INVALID_INSIDE, &["record"]);
            return false;
        }
        let mut ok = true;
        for &prop in self.arena.object_props(arg) {
            match self.arena.prop_value(prop) {
                Some(value) => {
                    if !self.validate(value) {
                        ok = false;
                    }
                }
                None => {
                    self.warn(prop, diagnostic_messages::INVALID, &["property"]);
                    ok = false;
                }
            }
        }
        ok
    }

    /// `templateTypeOf(t, i)` — the index must be a non-negative integer
    /// literal.
    fn validate_template_type_of(&mut self, args: &[ExprId]) -> bool {
        let mut ok = self.validate(args[0]);
        match self.arena.number_value(args[1]) {
            Some(index) if index >= 0.0 && index.fract() == 0.0 => {}
            _ => {
                self.warn(args[1], diagnostic_messages::INVALID, &["index"]);
                ok = false;
            }
        }
        ok
    }

    /// `cond(b, then, else)` — the first argument must itself be a valid
    /// boolean form.
    fn validate_cond(&mut self, args: &[ExprId]) -> bool {
        let mut ok = self.validate_bool(args[0]);
        if !self.validate(args[1]) {
            ok = false;
        }
        if !self.validate(args[2]) {
            ok = false;
        }
        ok
    }

    fn validate_bool(&mut self, expr: ExprId) -> bool {
        let Some(head) = self.arena.call_head_name(expr) else {
            self.warn(expr, diagnostic_messages::INVALID_EXPRESSION, &["boolean"]);
            return false;
        };
        let keyword = match Keyword::lookup(head) {
            Some(keyword) if keyword.is_boolean() => keyword,
            _ => {
                self.warn(expr, diagnostic_messages::INVALID_EXPRESSION, &["boolean"]);
                return false;
            }
        };
        if !self.check_arity(expr, keyword) {
            return false;
        }
        let args = self.arena.call_args(expr);
        match keyword.kind() {
            KeywordKind::BooleanTypePredicate => self.validate_all_terms(args),
            KeywordKind::BooleanStringPredicate => {
                let mut ok = true;
                for &arg in args {
                    if !self.validate_string_arg(arg, "string") {
                        ok = false;
                    }
                }
                ok
            }
            _ => unreachable!("non-boolean keyword in boolean position"),
        }
    }

    /// A name identifier or a non-empty string literal.
    fn validate_string_arg(&mut self, arg: ExprId, subject: &str) -> bool {
        match &self.arena.get(arg).kind {
            ExprKind::Name(_) => true,
            ExprKind::StringLit(text) if !text.is_empty() => true,
            _ => {
                self.warn(arg, diagnostic_messages::INVALID, &[subject]);
                false
            }
        }
    }

    /// `mapunion(u, (x) => ..)` / `maprecord(r, (k, v) => ..)` — the second
    /// argument is a function literal with exactly `formals` parameters.
    fn validate_mapping(&mut self, args: &[ExprId], keyword: Keyword, formals: usize) -> bool {
        let mut ok = self.validate(args[0]);
        let function = args[1];
        if !self.arena.is_function(function) {
            self.warn(
                function,
                diagnostic_messages::INVALID_INSIDE,
                &[keyword.name()],
            );
            return false;
        }
        let params = self.arena.function_params(function).len();
        if params < formals {
            self.warn(function, diagnostic_messages::MISSING_PARAM, &[
                keyword.name(),
            ]);
            return false;
        }
        if params > formals {
            self.warn(function, diagnostic_messages::EXTRA_PARAM, &[keyword.name()]);
            return false;
        }
        let Some(body) = self.arena.function_body(function) else {
            return false;
        };
        if !self.validate(body) {
            ok = false;
        }
        ok
    }

    fn warn(&mut self, expr: ExprId, message: DiagnosticMessage, args: &[&str]) {
        self.diagnostics.push(Diagnostic::warning(
            &self.file,
            self.arena.span(expr),
            message,
            args,
        ));
    }
}
