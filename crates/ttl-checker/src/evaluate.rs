//! Semantic evaluation of validated TTL terms.
//!
//! Evaluation is a mutual recursion between [`EvalState::eval_type`] and
//! [`EvalState::eval_bool`] over the host's types. A failing subterm warns
//! and yields the canonical unknown type; it never aborts the enclosing
//! form, with three documented exceptions: the duplicate-binder and
//! wrong-shape pre-checks of `mapunion`/`maprecord`, and a `record` whose
//! computed key does not resolve.
//!
//! The evaluator requires validated input. A malformed keyword reaching it
//! means the validator let something through, and that invariant violation
//! is allowed to panic.

use indexmap::IndexMap;
use ttl_common::diagnostics::{Diagnostic, DiagnosticMessage, diagnostic_messages};
use ttl_parser::{ExprArena, ExprId, ExprKind};
use ttl_solver::{Atom, TypeHost, TypeId};

use crate::env::{NameEnv, TypeEnv};
use crate::keywords::Keyword;

pub struct EvalState<'a, H: TypeHost> {
    arena: &'a ExprArena,
    host: &'a H,
    file: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a, H: TypeHost> EvalState<'a, H> {
    pub fn new(arena: &'a ExprArena, host: &'a H, file: impl Into<String>) -> Self {
        Self {
            arena,
            host,
            file: file.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Evaluate a validated term to a host type. Total: always returns.
    pub fn eval(&mut self, expr: ExprId, type_env: &TypeEnv, name_env: &NameEnv) -> TypeId {
        self.eval_type(expr, type_env, name_env)
    }

    fn eval_type(&mut self, expr: ExprId, type_env: &TypeEnv, name_env: &NameEnv) -> TypeId {
        match &self.arena.get(expr).kind {
            ExprKind::Name(name) => match type_env.lookup(name) {
                Some(&ty) => ty,
                None => {
                    self.warn(expr, diagnostic_messages::UNKNOWN_TYPEVAR, &[name]);
                    self.host.unknown_type()
                }
            },
            ExprKind::StringLit(name) => match self.host.resolve_type_name(name) {
                Some(ty) => ty,
                None => {
                    self.warn(expr, diagnostic_messages::UNKNOWN_TYPENAME, &[name]);
                    self.host.unknown_type()
                }
            },
            ExprKind::Call { .. } => self.eval_call(expr, type_env, name_env),
            kind => unreachable!("validator accepted a non-term node: {kind:?}"),
        }
    }

    fn eval_call(&mut self, expr: ExprId, type_env: &TypeEnv, name_env: &NameEnv) -> TypeId {
        let head = self
            .arena
            .call_head_name(expr)
            .unwrap_or_default()
            .to_string();
        let Some(keyword) = Keyword::lookup(&head) else {
            unreachable!("validator accepted an unknown keyword: {head}")
        };
        tracing::trace!(keyword = keyword.name(), "eval call");
        let args = self.arena.call_args(expr);
        match keyword {
            Keyword::All => self.host.all_type(),
            Keyword::None => self.host.no_type(),
            Keyword::Unknown => self.host.unknown_type(),
            Keyword::Type => self.eval_templatize(args, type_env, name_env),
            Keyword::Union => {
                let alternates = args
                    .iter()
                    .map(|&arg| self.eval_type(arg, type_env, name_env))
                    .collect();
                self.host.union_of(alternates)
            }
            Keyword::Record => self.eval_record(args[0], type_env, name_env),
            Keyword::RawTypeOf => self.eval_raw_type_of(args[0], type_env, name_env),
            Keyword::TemplateTypeOf => self.eval_template_type_of(args, type_env, name_env),
            Keyword::Cond => {
                if self.eval_bool(args[0], type_env, name_env) {
                    self.eval_type(args[1], type_env, name_env)
                } else {
                    self.eval_type(args[2], type_env, name_env)
                }
            }
            Keyword::MapUnion => self.eval_mapunion(args, type_env, name_env),
            Keyword::MapRecord => self.eval_maprecord(args, type_env, name_env),
            Keyword::TypeOfVar => self.eval_type_of_var(args[0]),
            Keyword::Eq | Keyword::Sub | Keyword::StrEq => {
                unreachable!("validator accepted a boolean form as a type expression")
            }
        }
    }

    // ---- type constructors ----

    /// `type(base, p1, ..)`
    fn eval_templatize(
        &mut self,
        args: &[ExprId],
        type_env: &TypeEnv,
        name_env: &NameEnv,
    ) -> TypeId {
        let base = self.eval_type(args[0], type_env, name_env);
        if !self.host.is_templatizable(base) {
            let shown = self.host.format_type(base);
            self.warn(args[0], diagnostic_messages::BASETYPE_INVALID, &[&shown]);
            return self.host.unknown_type();
        }
        let params = args[1..]
            .iter()
            .map(|&arg| self.eval_type(arg, type_env, name_env))
            .collect();
        self.host.templatize(base, params)
    }

    /// `record({..})` — an unresolved computed key is fatal for the whole
    /// record; any other subterm failure just contributes unknown.
    fn eval_record(&mut self, object: ExprId, type_env: &TypeEnv, name_env: &NameEnv) -> TypeId {
        let mut props: Vec<(Atom, TypeId)> = Vec::new();
        for &prop in self.arena.object_props(object) {
            let Some(key) = self.arena.prop_key_name(prop) else {
                continue;
            };
            let name = if self.arena.is_computed_prop(prop) {
                match name_env.lookup(key) {
                    Some(resolved) => resolved.clone(),
                    None => {
                        self.warn(prop, diagnostic_messages::UNKNOWN_NAMEVAR, &[key]);
                        return self.host.unknown_type();
                    }
                }
            } else {
                key.to_string()
            };
            let Some(value) = self.arena.prop_value(prop) else {
                continue;
            };
            let ty = self.eval_type(value, type_env, name_env);
            props.push((self.host.intern_name(&name), ty));
        }
        self.host.record_of(props)
    }

    /// `rawTypeOf(t)`
    fn eval_raw_type_of(&mut self, arg: ExprId, type_env: &TypeEnv, name_env: &NameEnv) -> TypeId {
        let ty = self.eval_type(arg, type_env, name_env);
        if !self.host.is_templatized(ty) {
            let shown = self.host.format_type(ty);
            self.warn(arg, diagnostic_messages::TEMPTYPE_INVALID, &[
                "rawTypeOf", &shown,
            ]);
            return self.host.unknown_type();
        }
        self.host.raw_type(ty).unwrap_or_else(|| self.host.unknown_type())
    }

    /// `templateTypeOf(t, i)`
    ///
    /// The bound check is strict `>` against the parameter count, so an
    /// index equal to the count passes the check and falls through to the
    /// unknown fallback without a warning. Observed behaviour, kept.
    fn eval_template_type_of(
        &mut self,
        args: &[ExprId],
        type_env: &TypeEnv,
        name_env: &NameEnv,
    ) -> TypeId {
        let ty = self.eval_type(args[0], type_env, name_env);
        if !self.host.is_templatized(ty) {
            let shown = self.host.format_type(ty);
            self.warn(args[0], diagnostic_messages::TEMPTYPE_INVALID, &[
                "templateTypeOf",
                &shown,
            ]);
            return self.host.unknown_type();
        }
        let index = self.arena.number_value(args[1]).unwrap_or_default() as usize;
        let params = self.host.template_params(ty);
        if index > params.len() {
            self.warn(args[1], diagnostic_messages::INDEX_OUTOFBOUNDS, &[
                &index.to_string(),
                &params.len().to_string(),
            ]);
            return self.host.unknown_type();
        }
        params
            .get(index)
            .copied()
            .unwrap_or_else(|| self.host.unknown_type())
    }

    // ---- operations ----

    /// `typeOfVar(name)`
    fn eval_type_of_var(&mut self, arg: ExprId) -> TypeId {
        let name = self.leaf_text(arg);
        match self.host.slot_type(&name) {
            Some(ty) => ty,
            None => {
                self.warn(arg, diagnostic_messages::VAR_UNDEFINED, &[&name]);
                self.host.unknown_type()
            }
        }
    }

    /// `mapunion(u, (x) => body)`
    fn eval_mapunion(&mut self, args: &[ExprId], type_env: &TypeEnv, name_env: &NameEnv) -> TypeId {
        let function = args[1];
        let binder = self.function_binder(function, 0);
        if type_env.contains(&binder) {
            self.warn(function, diagnostic_messages::DUPLICATE_VARIABLE, &[&binder]);
            return self.host.unknown_type();
        }
        let Some(body) = self.arena.function_body(function) else {
            return self.host.unknown_type();
        };

        let source = self.eval_type(args[0], type_env, name_env);
        if !self.host.is_union(source) {
            // Singleton law: mapping over a non-union applies the body once.
            let extended = type_env.extend(&binder, source);
            return self.eval_type(body, &extended, name_env);
        }
        let results = self
            .host
            .alternates(source)
            .into_iter()
            .map(|alternate| {
                let extended = type_env.extend(&binder, alternate);
                self.eval_type(body, &extended, name_env)
            })
            .collect();
        self.host.union_of(results)
    }

    /// `maprecord(r, (k, v) => body)`
    fn eval_maprecord(
        &mut self,
        args: &[ExprId],
        type_env: &TypeEnv,
        name_env: &NameEnv,
    ) -> TypeId {
        let source = self.eval_type(args[0], type_env, name_env);
        if !self.host.is_record(source) {
            let shown = self.host.format_type(source);
            self.warn(args[0], diagnostic_messages::RECTYPE_INVALID, &[&shown]);
            return self.host.unknown_type();
        }

        let function = args[1];
        let key_binder = self.function_binder(function, 0);
        let value_binder = self.function_binder(function, 1);
        let mut duplicate = false;
        if name_env.contains(&key_binder) {
            self.warn(function, diagnostic_messages::DUPLICATE_VARIABLE, &[
                &key_binder,
            ]);
            duplicate = true;
        }
        if type_env.contains(&value_binder) {
            self.warn(function, diagnostic_messages::DUPLICATE_VARIABLE, &[
                &value_binder,
            ]);
            duplicate = true;
        }
        if duplicate {
            return self.host.unknown_type();
        }
        let Some(body) = self.arena.function_body(function) else {
            return self.host.unknown_type();
        };

        let mut accumulator: IndexMap<Atom, TypeId> = IndexMap::new();
        for (name, ty) in self.host.own_properties(source) {
            let extended_types = type_env.extend(&value_binder, ty);
            let extended_names = name_env.extend(&key_binder, self.host.resolve_name(name));
            let body_ty = self.eval_type(body, &extended_types, &extended_names);
            if self.host.is_no_type(body_ty) {
                // A bottom-typed body drops this property from the result.
                continue;
            }
            if !self.host.is_record(body_ty) {
                let shown = self.host.format_type(body_ty);
                self.warn(body, diagnostic_messages::MAPRECORD_BODY_INVALID, &[&shown]);
                return self.host.unknown_type();
            }
            for (prop, prop_ty) in self.host.own_properties(body_ty) {
                self.merge_property(&mut accumulator, prop, prop_ty);
            }
        }
        self.host.record_of(accumulator.into_iter().collect())
    }

    /// The property merge rule: record/record conflicts merge recursively
    /// into the flat union of their own properties; anything else is
    /// last-writer-wins.
    fn merge_property(&mut self, accumulator: &mut IndexMap<Atom, TypeId>, name: Atom, new: TypeId) {
        let Some(&old) = accumulator.get(&name) else {
            accumulator.insert(name, new);
            return;
        };
        if self.host.is_record(old) && self.host.is_record(new) {
            let mut merged: IndexMap<Atom, TypeId> =
                self.host.own_properties(old).into_iter().collect();
            for (prop, prop_ty) in self.host.own_properties(new) {
                self.merge_property(&mut merged, prop, prop_ty);
            }
            let merged_record = self.host.record_of(merged.into_iter().collect());
            accumulator.insert(name, merged_record);
        } else {
            accumulator.insert(name, new);
        }
    }

    // ---- booleans ----

    fn eval_bool(&mut self, expr: ExprId, type_env: &TypeEnv, name_env: &NameEnv) -> bool {
        let head = self
            .arena
            .call_head_name(expr)
            .unwrap_or_default()
            .to_string();
        let Some(keyword) = Keyword::lookup(&head) else {
            unreachable!("validator accepted an unknown boolean keyword: {head}")
        };
        let args = self.arena.call_args(expr);
        match keyword {
            Keyword::Eq => {
                let left = self.eval_type(args[0], type_env, name_env);
                let right = self.eval_type(args[1], type_env, name_env);
                self.host.equivalent(left, right)
            }
            Keyword::Sub => {
                let left = self.eval_type(args[0], type_env, name_env);
                let right = self.eval_type(args[1], type_env, name_env);
                self.host.subtype(left, right)
            }
            Keyword::StrEq => {
                let left = self.eval_string_arg(args[0], name_env);
                let right = self.eval_string_arg(args[1], name_env);
                // An empty resolution means an unbound variable (warned
                // above) or an empty binding; either way the comparison is
                // vacuously false.
                if left.is_empty() || right.is_empty() {
                    return false;
                }
                left == right
            }
            _ => unreachable!("validator accepted a non-boolean form inside cond"),
        }
    }

    /// A `streq` operand: identifiers resolve through `NameVars`, string
    /// literals stand for themselves. Unbound identifiers warn and resolve
    /// to the empty string.
    fn eval_string_arg(&mut self, arg: ExprId, name_env: &NameEnv) -> String {
        match &self.arena.get(arg).kind {
            ExprKind::StringLit(text) => text.clone(),
            ExprKind::Name(name) => match name_env.lookup(name) {
                Some(value) => value.clone(),
                None => {
                    self.warn(arg, diagnostic_messages::UNKNOWN_STRVAR, &[name]);
                    String::new()
                }
            },
            kind => unreachable!("validator accepted a non-string streq operand: {kind:?}"),
        }
    }

    // ---- plumbing ----

    /// Text of a Name or StringLit leaf.
    fn leaf_text(&self, expr: ExprId) -> String {
        match &self.arena.get(expr).kind {
            ExprKind::Name(text) | ExprKind::StringLit(text) => text.clone(),
            kind => unreachable!("validator accepted a non-leaf operand: {kind:?}"),
        }
    }

    /// The name of the `index`-th formal of a function literal.
    fn function_binder(&self, function: ExprId, index: usize) -> String {
        self.arena
            .function_params(function)
            .get(index)
            .and_then(|&param| self.arena.name_text(param))
            .unwrap_or_default()
            .to_string()
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
