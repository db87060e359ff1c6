//! Diagnostic values produced by the parser, validator, and evaluator.
//!
//! Every diagnostic is a value accumulated in a context; nothing in the
//! engine throws. Message templates live in a static table with positional
//! `{0}` placeholders, addressed by stable numeric codes.

pub mod data;

use serde::{Deserialize, Serialize};

use crate::span::Span;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

/// A message template: stable code, category, and `{0}`-style text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_messages {
    pub use super::data::diagnostic_messages::*;
}

pub mod diagnostic_codes {
    pub use super::data::diagnostic_codes::*;
}

/// A rendered diagnostic pointing at a source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn warning(
        file: impl Into<String>,
        span: Span,
        message: DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code: message.code,
            file: file.into(),
            start: span.start,
            length: span.len(),
            message_text: format_message(message.message, args),
        }
    }

    pub fn error(
        file: impl Into<String>,
        span: Span,
        message: DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code: message.code,
            file: file.into(),
            start: span.start,
            length: span.len(),
            message_text: format_message(message.message, args),
        }
    }
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    use self::data::DIAGNOSTIC_MESSAGES;
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
