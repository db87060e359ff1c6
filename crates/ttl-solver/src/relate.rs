//! Type relations.
//!
//! Equivalence is handle equality (the interner dedups structurally).
//! Subtyping is the small structural relation the boolean predicates need;
//! it is deliberately not a full assignability judgement.

use crate::intern::TypeInterner;
use crate::types::{TypeId, TypeKey};

/// Structural subtype check.
///
/// Rules, in order: reflexivity; `NO` is bottom; `ALL` and `UNKNOWN` are
/// tops; a union on the left must have every alternate below the right;
/// a union on the right needs one alternate above the left; applications
/// relate by identical base and pairwise-equal parameters; records relate
/// by width (every right property present and below on the left).
pub fn is_subtype(interner: &TypeInterner, sub: TypeId, sup: TypeId) -> bool {
    if sub == sup || sub == TypeId::NO || sup == TypeId::ALL || sup == TypeId::UNKNOWN {
        return true;
    }

    if let Some(TypeKey::Union(alternates)) = interner.lookup(sub) {
        return alternates
            .iter()
            .all(|&alt| is_subtype(interner, alt, sup));
    }

    if let Some(TypeKey::Union(alternates)) = interner.lookup(sup) {
        return alternates
            .iter()
            .any(|&alt| is_subtype(interner, sub, alt));
    }

    match (interner.lookup(sub), interner.lookup(sup)) {
        (
            Some(TypeKey::Application {
                base: sub_base,
                params: sub_params,
            }),
            Some(TypeKey::Application {
                base: sup_base,
                params: sup_params,
            }),
        ) => sub_base == sup_base && sub_params == sup_params,
        (Some(TypeKey::Record(sub_shape)), Some(TypeKey::Record(sup_shape))) => {
            let sub_props = interner.record_shape(sub_shape).properties;
            interner
                .record_shape(sup_shape)
                .properties
                .iter()
                .all(|sup_prop| {
                    sub_props.iter().any(|sub_prop| {
                        sub_prop.name == sup_prop.name
                            && is_subtype(interner, sub_prop.type_id, sup_prop.type_id)
                    })
                })
        }
        _ => false,
    }
}
