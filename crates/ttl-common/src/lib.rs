//! Common types and utilities for the TTL type transformation engine.
//!
//! This crate provides foundational types used across all ttl crates:
//! - Source spans (`Span`)
//! - Position/line-map types for source locations
//! - Diagnostic messages, codes, and formatting

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position/Range types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostics - warning/error values produced by parser, validator, evaluator
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage, format_message};
