//! Arena-backed expression tree for TTL annotations.
//!
//! Nodes live in an [`ExprArena`] and are addressed by [`ExprId`]. The
//! accessor methods on the arena are the only operations the validator and
//! evaluator perform on nodes; they return `None`/empty on a kind mismatch
//! instead of panicking.

use ttl_common::Span;

/// Index of a node in an [`ExprArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The syntactic shape of an expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Identifier reference, e.g. `T`.
    Name(String),
    /// String literal, e.g. `'Array'`.
    StringLit(String),
    /// Numeric literal, e.g. `0`.
    NumberLit(f64),
    /// Call with a `Name` callee, e.g. `union(T, S)`.
    Call { callee: ExprId, args: Vec<ExprId> },
    /// Arrow function literal, e.g. `(x) => body`. Params are `Name` nodes.
    Function { params: Vec<ExprId>, body: ExprId },
    /// Object literal, e.g. `{a: T, [k]: v}`. Props are `Property` or
    /// `ComputedProperty` nodes.
    ObjectLit { props: Vec<ExprId> },
    /// Plain-name property `a: value`; key is a `Name` node.
    Property { key: ExprId, value: ExprId },
    /// Computed-name property `[k]: value`; key is a `Name` node.
    ComputedProperty { key: ExprId, value: ExprId },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNode {
    pub kind: ExprKind,
    pub span: Span,
}

/// Owning arena of expression nodes.
#[derive(Debug, Default, Clone)]
pub struct ExprArena {
    nodes: Vec<ExprNode>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(ExprNode { kind, span });
        id
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> &ExprNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).span
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ---- accessor layer ----

    pub fn name_text(&self, id: ExprId) -> Option<&str> {
        match &self.get(id).kind {
            ExprKind::Name(text) => Some(text),
            _ => None,
        }
    }

    pub fn string_text(&self, id: ExprId) -> Option<&str> {
        match &self.get(id).kind {
            ExprKind::StringLit(text) => Some(text),
            _ => None,
        }
    }

    pub fn number_value(&self, id: ExprId) -> Option<f64> {
        match &self.get(id).kind {
            ExprKind::NumberLit(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_call(&self, id: ExprId) -> bool {
        matches!(self.get(id).kind, ExprKind::Call { .. })
    }

    /// The head identifier text of a call node.
    pub fn call_head_name(&self, id: ExprId) -> Option<&str> {
        match &self.get(id).kind {
            ExprKind::Call { callee, .. } => self.name_text(*callee),
            _ => None,
        }
    }

    /// The arguments of a call node, in order. Empty for non-calls.
    pub fn call_args(&self, id: ExprId) -> &[ExprId] {
        match &self.get(id).kind {
            ExprKind::Call { args, .. } => args,
            _ => &[],
        }
    }

    pub fn is_function(&self, id: ExprId) -> bool {
        matches!(self.get(id).kind, ExprKind::Function { .. })
    }

    /// The formal parameters of a function literal. Empty for non-functions.
    pub fn function_params(&self, id: ExprId) -> &[ExprId] {
        match &self.get(id).kind {
            ExprKind::Function { params, .. } => params,
            _ => &[],
        }
    }

    pub fn function_body(&self, id: ExprId) -> Option<ExprId> {
        match &self.get(id).kind {
            ExprKind::Function { body, .. } => Some(*body),
            _ => None,
        }
    }

    pub fn is_object_lit(&self, id: ExprId) -> bool {
        matches!(self.get(id).kind, ExprKind::ObjectLit { .. })
    }

    /// The properties of an object literal. Empty for non-objects.
    pub fn object_props(&self, id: ExprId) -> &[ExprId] {
        match &self.get(id).kind {
            ExprKind::ObjectLit { props, .. } => props,
            _ => &[],
        }
    }

    pub fn is_computed_prop(&self, id: ExprId) -> bool {
        matches!(self.get(id).kind, ExprKind::ComputedProperty { .. })
    }

    /// The key name of a plain or computed property.
    pub fn prop_key_name(&self, id: ExprId) -> Option<&str> {
        match &self.get(id).kind {
            ExprKind::Property { key, .. } | ExprKind::ComputedProperty { key, .. } => {
                self.name_text(*key)
            }
            _ => None,
        }
    }

    pub fn prop_value(&self, id: ExprId) -> Option<ExprId> {
        match &self.get(id).kind {
            ExprKind::Property { value, .. } | ExprKind::ComputedProperty { value, .. } => {
                Some(*value)
            }
            _ => None,
        }
    }
}
