//! The TTL keyword table.
//!
//! A fixed, closed enumeration of every form the DSL has. Each keyword
//! carries its display name, argument-count bounds, and operational kind;
//! validator and evaluator both dispatch by exhaustive match on this enum,
//! so an unhandled keyword is a compile error rather than a runtime branch.

/// Sentinel for "no upper bound" on argument count.
pub const VARIADIC: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    TypeConstructor,
    Operation,
    BooleanTypePredicate,
    BooleanStringPredicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    All,
    None,
    Unknown,
    Type,
    Union,
    Record,
    RawTypeOf,
    TemplateTypeOf,
    Cond,
    MapUnion,
    MapRecord,
    TypeOfVar,
    Eq,
    Sub,
    StrEq,
}

impl Keyword {
    /// Every keyword, for table-driven tests.
    pub const ALL_KEYWORDS: [Keyword; 15] = [
        Keyword::All,
        Keyword::None,
        Keyword::Unknown,
        Keyword::Type,
        Keyword::Union,
        Keyword::Record,
        Keyword::RawTypeOf,
        Keyword::TemplateTypeOf,
        Keyword::Cond,
        Keyword::MapUnion,
        Keyword::MapRecord,
        Keyword::TypeOfVar,
        Keyword::Eq,
        Keyword::Sub,
        Keyword::StrEq,
    ];

    /// Case-insensitive lookup by surface spelling.
    pub fn lookup(name: &str) -> Option<Keyword> {
        Self::ALL_KEYWORDS
            .iter()
            .copied()
            .find(|keyword| keyword.name().eq_ignore_ascii_case(name))
    }

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Keyword::All => "all",
            Keyword::None => "none",
            Keyword::Unknown => "unknown",
            Keyword::Type => "type",
            Keyword::Union => "union",
            Keyword::Record => "record",
            Keyword::RawTypeOf => "rawTypeOf",
            Keyword::TemplateTypeOf => "templateTypeOf",
            Keyword::Cond => "cond",
            Keyword::MapUnion => "mapunion",
            Keyword::MapRecord => "maprecord",
            Keyword::TypeOfVar => "typeOfVar",
            Keyword::Eq => "eq",
            Keyword::Sub => "sub",
            Keyword::StrEq => "streq",
        }
    }

    pub fn kind(self) -> KeywordKind {
        match self {
            Keyword::All
            | Keyword::None
            | Keyword::Unknown
            | Keyword::Type
            | Keyword::Union
            | Keyword::Record
            | Keyword::RawTypeOf
            | Keyword::TemplateTypeOf => KeywordKind::TypeConstructor,
            Keyword::Cond | Keyword::MapUnion | Keyword::MapRecord | Keyword::TypeOfVar => {
                KeywordKind::Operation
            }
            Keyword::Eq | Keyword::Sub => KeywordKind::BooleanTypePredicate,
            Keyword::StrEq => KeywordKind::BooleanStringPredicate,
        }
    }

    pub fn min_params(self) -> usize {
        match self {
            Keyword::All | Keyword::None | Keyword::Unknown => 0,
            Keyword::Record
            | Keyword::RawTypeOf
            | Keyword::TypeOfVar => 1,
            Keyword::Type
            | Keyword::Union
            | Keyword::TemplateTypeOf
            | Keyword::MapUnion
            | Keyword::MapRecord
            | Keyword::Eq
            | Keyword::Sub
            | Keyword::StrEq => 2,
            Keyword::Cond => 3,
        }
    }

    pub fn max_params(self) -> usize {
        match self {
            Keyword::All | Keyword::None | Keyword::Unknown => 0,
            Keyword::Record
            | Keyword::RawTypeOf
            | Keyword::TypeOfVar => 1,
            Keyword::TemplateTypeOf
            | Keyword::MapUnion
            | Keyword::MapRecord
            | Keyword::Eq
            | Keyword::Sub
            | Keyword::StrEq => 2,
            Keyword::Cond => 3,
            Keyword::Type | Keyword::Union => VARIADIC,
        }
    }

    /// Whether this keyword heads a boolean form (only valid inside `cond`).
    pub fn is_boolean(self) -> bool {
        matches!(
            self.kind(),
            KeywordKind::BooleanTypePredicate | KeywordKind::BooleanStringPredicate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Keyword::lookup("mapunion"), Some(Keyword::MapUnion));
        assert_eq!(Keyword::lookup("MAPUNION"), Some(Keyword::MapUnion));
        assert_eq!(Keyword::lookup("RawTypeOf"), Some(Keyword::RawTypeOf));
        assert_eq!(Keyword::lookup("frobnicate"), None);
    }

    #[test]
    fn canonical_table_bounds() {
        let expect = [
            (Keyword::All, 0, 0),
            (Keyword::None, 0, 0),
            (Keyword::Unknown, 0, 0),
            (Keyword::Type, 2, VARIADIC),
            (Keyword::Union, 2, VARIADIC),
            (Keyword::Record, 1, 1),
            (Keyword::RawTypeOf, 1, 1),
            (Keyword::TemplateTypeOf, 2, 2),
            (Keyword::Cond, 3, 3),
            (Keyword::MapUnion, 2, 2),
            (Keyword::MapRecord, 2, 2),
            (Keyword::TypeOfVar, 1, 1),
            (Keyword::Eq, 2, 2),
            (Keyword::Sub, 2, 2),
            (Keyword::StrEq, 2, 2),
        ];
        for (keyword, min, max) in expect {
            assert_eq!(keyword.min_params(), min, "{}", keyword.name());
            assert_eq!(keyword.max_params(), max, "{}", keyword.name());
        }
    }

    #[test]
    fn boolean_kinds() {
        assert!(Keyword::Eq.is_boolean());
        assert!(Keyword::Sub.is_boolean());
        assert!(Keyword::StrEq.is_boolean());
        assert!(!Keyword::Cond.is_boolean());
        assert_eq!(Keyword::StrEq.kind(), KeywordKind::BooleanStringPredicate);
        assert_eq!(Keyword::Eq.kind(), KeywordKind::BooleanTypePredicate);
    }
}
