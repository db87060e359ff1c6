//! Interned type system and host interface for the TTL engine.
//!
//! Types are immutable values addressed by [`TypeId`]; their structure lives
//! in a [`TypeInterner`] that dedups by shape, so structural equality is
//! handle equality. The evaluator in `ttl-checker` never touches the
//! interner directly — it goes through the narrow [`TypeHost`] trait, for
//! which [`ProgramHost`] is the batteries-included implementation.

pub mod display;
pub mod host;
pub mod intern;
pub mod relate;
pub mod types;

pub use display::format_type;
pub use host::{ProgramHost, TypeHost};
pub use intern::TypeInterner;
pub use relate::is_subtype;
pub use types::{Atom, PropertyInfo, RecordShape, ShapeId, TypeId, TypeKey};

#[cfg(test)]
mod tests;
