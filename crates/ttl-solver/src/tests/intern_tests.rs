use crate::TypeInterner;
use crate::types::{TypeId, TypeKey};

#[test]
fn test_interner_intrinsics() {
    let interner = TypeInterner::new();

    // Intrinsics should be pre-registered on their fixed handles
    assert!(interner.lookup(TypeId::UNKNOWN).is_some());
    assert!(interner.lookup(TypeId::NO).is_some());
    assert!(interner.lookup(TypeId::ALL).is_some());
    assert!(interner.lookup(TypeId::NUMBER).is_some());
}

#[test]
fn test_interner_deduplication() {
    let interner = TypeInterner::new();

    let id1 = interner.native("Thenable", Some(1));
    let id2 = interner.native("Thenable", Some(1));
    let id3 = interner.native("Iterator", Some(1));

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
}

#[test]
fn test_interner_string_dedup() {
    let interner = TypeInterner::new();

    let a = interner.intern_string("foo");
    let b = interner.intern_string("foo");
    let c = interner.intern_string("bar");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.resolve_atom(a), "foo");
}

#[test]
fn test_interner_union_normalization() {
    let interner = TypeInterner::new();

    // Union with single member should return that member
    let single = interner.union(vec![TypeId::STRING]);
    assert_eq!(single, TypeId::STRING);

    // Empty union is the bottom type
    let empty = interner.union(vec![]);
    assert_eq!(empty, TypeId::NO);

    // Duplicates are dropped
    let dup = interner.union(vec![TypeId::NUMBER, TypeId::STRING, TypeId::NUMBER]);
    let expected = interner.union(vec![TypeId::NUMBER, TypeId::STRING]);
    assert_eq!(dup, expected);
}

#[test]
fn test_interner_union_dedups_and_flattens() {
    let interner = TypeInterner::new();

    let nested = interner.union(vec![TypeId::STRING, TypeId::NUMBER]);
    let flattened = interner.union(vec![TypeId::STRING, nested, TypeId::STRING]);
    let expected = interner.union(vec![TypeId::STRING, TypeId::NUMBER]);

    assert_eq!(flattened, expected);
}

#[test]
fn test_interner_union_keeps_unknown_alternate() {
    let interner = TypeInterner::new();

    // UNKNOWN stays an ordinary alternate; a failed subterm must remain
    // visible in the result.
    let with_unknown = interner.union(vec![TypeId::STRING, TypeId::UNKNOWN]);
    match interner.lookup(with_unknown) {
        Some(TypeKey::Union(alternates)) => {
            assert_eq!(alternates, vec![TypeId::STRING, TypeId::UNKNOWN]);
        }
        other => panic!("expected a union, got {other:?}"),
    }
}

#[test]
fn test_interner_union_order_is_first_occurrence() {
    let interner = TypeInterner::new();

    let a = interner.union(vec![TypeId::STRING, TypeId::NUMBER]);
    let b = interner.union(vec![TypeId::NUMBER, TypeId::STRING]);

    // Alternate order is part of the identity
    assert_ne!(a, b);
    assert_eq!(
        interner.union_alternates(a),
        vec![TypeId::STRING, TypeId::NUMBER]
    );
}

#[test]
fn test_interner_application() {
    let interner = TypeInterner::new();

    let array = interner.native("Array", Some(1));
    let of_number = interner.application(array, vec![TypeId::NUMBER]);
    let of_number_again = interner.application(array, vec![TypeId::NUMBER]);
    let of_string = interner.application(array, vec![TypeId::STRING]);

    assert_eq!(of_number, of_number_again);
    assert_ne!(of_number, of_string);
    assert_eq!(interner.application_base(of_number), Some(array));
    assert_eq!(interner.application_params(of_number), vec![TypeId::NUMBER]);
}

#[test]
fn test_interner_record_preserves_insertion_order() {
    let interner = TypeInterner::new();

    let a = interner.intern_string("a");
    let b = interner.intern_string("b");
    let record = interner.record(vec![(b, TypeId::STRING), (a, TypeId::NUMBER)]);

    let props = interner.record_properties(record);
    assert_eq!(props.len(), 2);
    assert_eq!(props[0].name, b);
    assert_eq!(props[1].name, a);
}

#[test]
fn test_interner_record_later_duplicate_wins() {
    let interner = TypeInterner::new();

    let a = interner.intern_string("a");
    let record = interner.record(vec![(a, TypeId::NUMBER), (a, TypeId::STRING)]);

    let props = interner.record_properties(record);
    assert_eq!(props.len(), 1);
    assert_eq!(props[0].type_id, TypeId::STRING);
}

#[test]
fn test_interner_record_structural_identity() {
    let interner = TypeInterner::new();

    let a = interner.intern_string("a");
    let r1 = interner.record(vec![(a, TypeId::NUMBER)]);
    let r2 = interner.record(vec![(a, TypeId::NUMBER)]);

    assert_eq!(r1, r2);
}

#[test]
fn test_is_templatizable() {
    let interner = TypeInterner::new();

    let array = interner.native("Array", Some(1));
    let date = interner.native("Date", None);

    assert!(interner.is_templatizable(array));
    assert!(!interner.is_templatizable(date));
    assert!(!interner.is_templatizable(TypeId::NUMBER));
}
