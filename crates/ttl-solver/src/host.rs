//! The host type environment the evaluator consumes.
//!
//! [`TypeHost`] is the whole surface the TTL evaluator is allowed to see:
//! canonical types, constructors, the predicate set, name resolution, and
//! the slot scope for `typeOfVar`. Keeping it a trait keeps the evaluator
//! testable against any host; [`ProgramHost`] is the interner-backed one
//! tests and the CLI use.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::display;
use crate::intern::TypeInterner;
use crate::relate;
use crate::types::{Atom, TypeId};

pub trait TypeHost {
    // Canonical types.
    fn unknown_type(&self) -> TypeId;
    fn no_type(&self) -> TypeId;
    fn all_type(&self) -> TypeId;

    /// Resolve a type name through the scope chain and native registry.
    fn resolve_type_name(&self, name: &str) -> Option<TypeId>;

    /// The declared type of a program symbol, for `typeOfVar`.
    fn slot_type(&self, name: &str) -> Option<TypeId>;

    // Constructors. The evaluator never builds types by hand.
    fn union_of(&self, alternates: Vec<TypeId>) -> TypeId;
    fn templatize(&self, base: TypeId, params: Vec<TypeId>) -> TypeId;
    fn record_of(&self, props: Vec<(Atom, TypeId)>) -> TypeId;

    // Property-name plumbing.
    fn intern_name(&self, name: &str) -> Atom;
    fn resolve_name(&self, atom: Atom) -> String;

    // Predicates.
    fn is_templatizable(&self, ty: TypeId) -> bool;
    fn is_union(&self, ty: TypeId) -> bool;
    fn alternates(&self, ty: TypeId) -> Vec<TypeId>;
    fn is_templatized(&self, ty: TypeId) -> bool;
    fn raw_type(&self, ty: TypeId) -> Option<TypeId>;
    fn template_params(&self, ty: TypeId) -> Vec<TypeId>;
    fn is_record(&self, ty: TypeId) -> bool;
    fn own_properties(&self, ty: TypeId) -> Vec<(Atom, TypeId)>;
    fn is_no_type(&self, ty: TypeId) -> bool;

    // Relations.
    fn equivalent(&self, a: TypeId, b: TypeId) -> bool;
    fn subtype(&self, a: TypeId, b: TypeId) -> bool;

    /// Format a type for diagnostics.
    fn format_type(&self, ty: TypeId) -> String;
}

/// Interner-backed host: a native-type registry plus a slot scope.
pub struct ProgramHost {
    interner: TypeInterner,
    registry: RefCell<FxHashMap<String, TypeId>>,
    slots: RefCell<FxHashMap<String, TypeId>>,
}

impl ProgramHost {
    pub fn new() -> Self {
        let host = Self {
            interner: TypeInterner::new(),
            registry: RefCell::new(FxHashMap::default()),
            slots: RefCell::new(FxHashMap::default()),
        };
        for (name, id) in [
            ("number", TypeId::NUMBER),
            ("string", TypeId::STRING),
            ("boolean", TypeId::BOOLEAN),
        ] {
            host.registry.borrow_mut().insert(name.to_string(), id);
        }
        host
    }

    pub fn interner(&self) -> &TypeInterner {
        &self.interner
    }

    /// Register a plain (non-templatizable) native type.
    pub fn register_native(&self, name: &str) -> TypeId {
        let id = self.interner.native(name, None);
        self.registry.borrow_mut().insert(name.to_string(), id);
        id
    }

    /// Register a templatizable native type with the given arity.
    pub fn register_templatizable(&self, name: &str, arity: u32) -> TypeId {
        let id = self.interner.native(name, Some(arity));
        self.registry.borrow_mut().insert(name.to_string(), id);
        id
    }

    /// Declare a program symbol with a type, for `typeOfVar`.
    pub fn bind_slot(&self, name: &str, ty: TypeId) {
        self.slots.borrow_mut().insert(name.to_string(), ty);
    }
}

impl Default for ProgramHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeHost for ProgramHost {
    fn unknown_type(&self) -> TypeId {
        TypeId::UNKNOWN
    }

    fn no_type(&self) -> TypeId {
        TypeId::NO
    }

    fn all_type(&self) -> TypeId {
        TypeId::ALL
    }

    fn resolve_type_name(&self, name: &str) -> Option<TypeId> {
        self.registry.borrow().get(name).copied()
    }

    fn slot_type(&self, name: &str) -> Option<TypeId> {
        self.slots.borrow().get(name).copied()
    }

    fn union_of(&self, alternates: Vec<TypeId>) -> TypeId {
        self.interner.union(alternates)
    }

    fn templatize(&self, base: TypeId, params: Vec<TypeId>) -> TypeId {
        self.interner.application(base, params)
    }

    fn record_of(&self, props: Vec<(Atom, TypeId)>) -> TypeId {
        self.interner.record(props)
    }

    fn intern_name(&self, name: &str) -> Atom {
        self.interner.intern_string(name)
    }

    fn resolve_name(&self, atom: Atom) -> String {
        self.interner.resolve_atom(atom)
    }

    fn is_templatizable(&self, ty: TypeId) -> bool {
        self.interner.is_templatizable(ty)
    }

    fn is_union(&self, ty: TypeId) -> bool {
        self.interner.is_union(ty)
    }

    fn alternates(&self, ty: TypeId) -> Vec<TypeId> {
        self.interner.union_alternates(ty)
    }

    fn is_templatized(&self, ty: TypeId) -> bool {
        self.interner.is_application(ty)
    }

    fn raw_type(&self, ty: TypeId) -> Option<TypeId> {
        self.interner.application_base(ty)
    }

    fn template_params(&self, ty: TypeId) -> Vec<TypeId> {
        self.interner.application_params(ty)
    }

    fn is_record(&self, ty: TypeId) -> bool {
        self.interner.is_record(ty)
    }

    fn own_properties(&self, ty: TypeId) -> Vec<(Atom, TypeId)> {
        self.interner
            .record_properties(ty)
            .into_iter()
            .map(|prop| (prop.name, prop.type_id))
            .collect()
    }

    fn is_no_type(&self, ty: TypeId) -> bool {
        ty == TypeId::NO
    }

    fn equivalent(&self, a: TypeId, b: TypeId) -> bool {
        a == b
    }

    fn subtype(&self, a: TypeId, b: TypeId) -> bool {
        relate::is_subtype(&self.interner, a, b)
    }

    fn format_type(&self, ty: TypeId) -> String {
        display::format_type(&self.interner, ty)
    }
}
