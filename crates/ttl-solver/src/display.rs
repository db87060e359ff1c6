//! Human-readable type formatting for diagnostics and CLI output.

use crate::intern::TypeInterner;
use crate::types::{TypeId, TypeKey};

/// Format a type the way diagnostics quote it: `Array<number>`,
/// `{a: number}`, `number|string`.
pub fn format_type(interner: &TypeInterner, id: TypeId) -> String {
    match interner.lookup(id) {
        None => "?".to_string(),
        Some(TypeKey::Intrinsic(intrinsic)) => intrinsic.display_name().to_string(),
        Some(TypeKey::Native { name, .. }) => interner.resolve_atom(name),
        Some(TypeKey::Union(alternates)) => {
            let parts: Vec<String> = alternates
                .iter()
                .map(|&alt| format_type(interner, alt))
                .collect();
            parts.join("|")
        }
        Some(TypeKey::Application { base, params }) => {
            let args: Vec<String> = params
                .iter()
                .map(|&param| format_type(interner, param))
                .collect();
            format!("{}<{}>", format_type(interner, base), args.join(","))
        }
        Some(TypeKey::Record(shape_id)) => {
            let props: Vec<String> = interner
                .record_shape(shape_id)
                .properties
                .iter()
                .map(|prop| {
                    format!(
                        "{}: {}",
                        interner.resolve_atom(prop.name),
                        format_type(interner, prop.type_id)
                    )
                })
                .collect();
            format!("{{{}}}", props.join(", "))
        }
    }
}
