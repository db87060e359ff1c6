//! Type representation: handles, structural keys, record shapes.

/// Interned string handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub u32);

/// Handle of an interned type.
///
/// Structural dedup in the interner makes `TypeId` equality coincide with
/// structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Canonical fallback type; every failed evaluation yields this.
    pub const UNKNOWN: TypeId = TypeId(0);
    /// Bottom type; `none()` and the maprecord skip sentinel.
    pub const NO: TypeId = TypeId(1);
    /// Dynamic-any top type; `all()`.
    pub const ALL: TypeId = TypeId(2);
    pub const NUMBER: TypeId = TypeId(3);
    pub const STRING: TypeId = TypeId(4);
    pub const BOOLEAN: TypeId = TypeId(5);
}

/// Handle of an interned record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// The built-in types pre-registered by the interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    Unknown,
    No,
    All,
    Number,
    String,
    Boolean,
}

impl Intrinsic {
    pub fn display_name(self) -> &'static str {
        match self {
            Intrinsic::Unknown => "?",
            Intrinsic::No => "None",
            Intrinsic::All => "*",
            Intrinsic::Number => "number",
            Intrinsic::String => "string",
            Intrinsic::Boolean => "boolean",
        }
    }
}

/// Structural key of a type; the interner dedups on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Intrinsic(Intrinsic),
    /// A named nominal type. `template_arity` is `Some` when the type is
    /// templatizable, carrying the number of template parameters.
    Native {
        name: Atom,
        template_arity: Option<u32>,
    },
    /// Deduplicated union of alternates, in first-occurrence order.
    Union(Vec<TypeId>),
    /// A templatized type: a templatizable base applied to parameters.
    Application { base: TypeId, params: Vec<TypeId> },
    /// A record type with ordered own properties.
    Record(ShapeId),
}

/// One own property of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    pub name: Atom,
    pub type_id: TypeId,
}

impl PropertyInfo {
    pub fn new(name: Atom, type_id: TypeId) -> Self {
        Self { name, type_id }
    }
}

/// Ordered own properties of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RecordShape {
    pub properties: Vec<PropertyInfo>,
}
