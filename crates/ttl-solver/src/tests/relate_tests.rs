use crate::TypeInterner;
use crate::relate::is_subtype;
use crate::types::TypeId;

#[test]
fn test_is_subtype_identity() {
    let interner = TypeInterner::new();

    assert!(is_subtype(&interner, TypeId::NUMBER, TypeId::NUMBER));
    assert!(is_subtype(&interner, TypeId::STRING, TypeId::STRING));
}

#[test]
fn test_is_subtype_tops_and_bottom() {
    let interner = TypeInterner::new();

    // Everything is below ALL and UNKNOWN
    assert!(is_subtype(&interner, TypeId::NUMBER, TypeId::ALL));
    assert!(is_subtype(&interner, TypeId::STRING, TypeId::UNKNOWN));

    // NO is below everything
    assert!(is_subtype(&interner, TypeId::NO, TypeId::NUMBER));
    assert!(is_subtype(&interner, TypeId::NO, TypeId::STRING));

    // Distinct natives are unrelated
    assert!(!is_subtype(&interner, TypeId::NUMBER, TypeId::STRING));
}

#[test]
fn test_union_subtyping() {
    let interner = TypeInterner::new();

    let num_or_str = interner.union(vec![TypeId::NUMBER, TypeId::STRING]);

    // Member below the union
    assert!(is_subtype(&interner, TypeId::NUMBER, num_or_str));
    // Union below a type only when all alternates are
    assert!(!is_subtype(&interner, num_or_str, TypeId::NUMBER));
    assert!(is_subtype(&interner, num_or_str, TypeId::ALL));
    // Union below itself despite the left-union rule firing first
    assert!(is_subtype(&interner, num_or_str, num_or_str));
}

#[test]
fn test_application_subtyping() {
    let interner = TypeInterner::new();

    let array = interner.native("Array", Some(1));
    let of_number = interner.application(array, vec![TypeId::NUMBER]);
    let of_string = interner.application(array, vec![TypeId::STRING]);

    assert!(is_subtype(&interner, of_number, of_number));
    assert!(!is_subtype(&interner, of_number, of_string));
}

#[test]
fn test_record_width_subtyping() {
    let interner = TypeInterner::new();

    let a = interner.intern_string("a");
    let b = interner.intern_string("b");
    let wide = interner.record(vec![(a, TypeId::NUMBER), (b, TypeId::STRING)]);
    let narrow = interner.record(vec![(a, TypeId::NUMBER)]);

    assert!(is_subtype(&interner, wide, narrow));
    assert!(!is_subtype(&interner, narrow, wide));
}
