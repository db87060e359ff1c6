//! The type interner.
//!
//! All tables sit behind `RefCell` so interning works through a shared
//! reference, the same way the checker drives its type tables. The
//! interner is single-threaded; embedders that share one across threads
//! wrap it themselves.

use std::cell::RefCell;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::types::{Atom, Intrinsic, PropertyInfo, RecordShape, ShapeId, TypeId, TypeKey};

pub struct TypeInterner {
    keys: RefCell<Vec<TypeKey>>,
    ids: RefCell<FxHashMap<TypeKey, TypeId>>,
    shapes: RefCell<Vec<RecordShape>>,
    shape_ids: RefCell<FxHashMap<RecordShape, ShapeId>>,
    strings: RefCell<Vec<String>>,
    atoms: RefCell<FxHashMap<String, Atom>>,
}

impl TypeInterner {
    pub fn new() -> Self {
        let interner = Self {
            keys: RefCell::new(Vec::new()),
            ids: RefCell::new(FxHashMap::default()),
            shapes: RefCell::new(Vec::new()),
            shape_ids: RefCell::new(FxHashMap::default()),
            strings: RefCell::new(Vec::new()),
            atoms: RefCell::new(FxHashMap::default()),
        };
        // Intrinsics must land on their fixed TypeId constants.
        for intrinsic in [
            Intrinsic::Unknown,
            Intrinsic::No,
            Intrinsic::All,
            Intrinsic::Number,
            Intrinsic::String,
            Intrinsic::Boolean,
        ] {
            interner.intern(TypeKey::Intrinsic(intrinsic));
        }
        interner
    }

    fn intern(&self, key: TypeKey) -> TypeId {
        if let Some(&id) = self.ids.borrow().get(&key) {
            return id;
        }
        let mut keys = self.keys.borrow_mut();
        let id = TypeId(u32::try_from(keys.len()).unwrap_or(u32::MAX));
        keys.push(key.clone());
        self.ids.borrow_mut().insert(key, id);
        id
    }

    /// The structural key of an interned type.
    pub fn lookup(&self, id: TypeId) -> Option<TypeKey> {
        self.keys.borrow().get(id.0 as usize).cloned()
    }

    // ---- strings ----

    pub fn intern_string(&self, text: &str) -> Atom {
        if let Some(&atom) = self.atoms.borrow().get(text) {
            return atom;
        }
        let mut strings = self.strings.borrow_mut();
        let atom = Atom(u32::try_from(strings.len()).unwrap_or(u32::MAX));
        strings.push(text.to_string());
        self.atoms.borrow_mut().insert(text.to_string(), atom);
        atom
    }

    pub fn resolve_atom(&self, atom: Atom) -> String {
        self.strings
            .borrow()
            .get(atom.0 as usize)
            .cloned()
            .unwrap_or_default()
    }

    // ---- constructors ----

    /// A named nominal type; templatizable when `template_arity` is given.
    pub fn native(&self, name: &str, template_arity: Option<u32>) -> TypeId {
        let name = self.intern_string(name);
        self.intern(TypeKey::Native {
            name,
            template_arity,
        })
    }

    /// Deduplicating union constructor.
    ///
    /// Nested unions are flattened and duplicate alternates dropped,
    /// keeping first-occurrence order. A single surviving alternate is
    /// returned as-is; the empty union is the bottom type.
    pub fn union(&self, alternates: Vec<TypeId>) -> TypeId {
        let mut flat: SmallVec<[TypeId; 8]> = SmallVec::new();
        for alt in alternates {
            match self.lookup(alt) {
                Some(TypeKey::Union(members)) => {
                    for member in members {
                        if !flat.contains(&member) {
                            flat.push(member);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&alt) {
                        flat.push(alt);
                    }
                }
            }
        }
        tracing::trace!(alternates = flat.len(), "union normalized");
        match flat.len() {
            0 => TypeId::NO,
            1 => flat[0],
            _ => self.intern(TypeKey::Union(flat.into_vec())),
        }
    }

    /// Apply a templatizable base to parameters.
    ///
    /// The caller is responsible for checking `is_templatizable` first;
    /// the interner records whatever application it is handed.
    pub fn application(&self, base: TypeId, params: Vec<TypeId>) -> TypeId {
        self.intern(TypeKey::Application { base, params })
    }

    /// A record type from ordered `(name, type)` properties.
    /// A later duplicate name overwrites the earlier value in place.
    pub fn record(&self, props: Vec<(Atom, TypeId)>) -> TypeId {
        let mut ordered: indexmap::IndexMap<Atom, TypeId> = indexmap::IndexMap::new();
        for (name, type_id) in props {
            ordered.insert(name, type_id);
        }
        let shape = RecordShape {
            properties: ordered
                .into_iter()
                .map(|(name, type_id)| PropertyInfo::new(name, type_id))
                .collect(),
        };
        let shape_id = self.intern_shape(shape);
        self.intern(TypeKey::Record(shape_id))
    }

    fn intern_shape(&self, shape: RecordShape) -> ShapeId {
        if let Some(&id) = self.shape_ids.borrow().get(&shape) {
            return id;
        }
        let mut shapes = self.shapes.borrow_mut();
        let id = ShapeId(u32::try_from(shapes.len()).unwrap_or(u32::MAX));
        shapes.push(shape.clone());
        self.shape_ids.borrow_mut().insert(shape, id);
        id
    }

    pub fn record_shape(&self, id: ShapeId) -> RecordShape {
        self.shapes
            .borrow()
            .get(id.0 as usize)
            .cloned()
            .unwrap_or_default()
    }

    // ---- queries ----

    pub fn is_templatizable(&self, id: TypeId) -> bool {
        matches!(
            self.lookup(id),
            Some(TypeKey::Native {
                template_arity: Some(_),
                ..
            })
        )
    }

    pub fn is_union(&self, id: TypeId) -> bool {
        matches!(self.lookup(id), Some(TypeKey::Union(_)))
    }

    pub fn union_alternates(&self, id: TypeId) -> Vec<TypeId> {
        match self.lookup(id) {
            Some(TypeKey::Union(alternates)) => alternates,
            _ => Vec::new(),
        }
    }

    pub fn is_application(&self, id: TypeId) -> bool {
        matches!(self.lookup(id), Some(TypeKey::Application { .. }))
    }

    pub fn application_base(&self, id: TypeId) -> Option<TypeId> {
        match self.lookup(id) {
            Some(TypeKey::Application { base, .. }) => Some(base),
            _ => None,
        }
    }

    pub fn application_params(&self, id: TypeId) -> Vec<TypeId> {
        match self.lookup(id) {
            Some(TypeKey::Application { params, .. }) => params,
            _ => Vec::new(),
        }
    }

    pub fn is_record(&self, id: TypeId) -> bool {
        matches!(self.lookup(id), Some(TypeKey::Record(_)))
    }

    pub fn record_properties(&self, id: TypeId) -> Vec<PropertyInfo> {
        match self.lookup(id) {
            Some(TypeKey::Record(shape_id)) => self.record_shape(shape_id).properties,
            _ => Vec::new(),
        }
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}
