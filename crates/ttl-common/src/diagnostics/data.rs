//! Diagnostic message data for the TTL engine.

use super::DiagnosticCategory;
use super::DiagnosticMessage;

/// All diagnostic messages the engine can produce.
pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    // Parser errors (6xxx)
    DiagnosticMessage {
        code: 6001,
        category: DiagnosticCategory::Error,
        message: "Unterminated string literal.",
    },
    DiagnosticMessage {
        code: 6002,
        category: DiagnosticCategory::Error,
        message: "Unexpected token '{0}'.",
    },
    DiagnosticMessage {
        code: 6003,
        category: DiagnosticCategory::Error,
        message: "'{0}' expected.",
    },
    // Validator warnings (70xx)
    DiagnosticMessage {
        code: 7001,
        category: DiagnosticCategory::Warning,
        message: "Invalid {0}",
    },
    DiagnosticMessage {
        code: 7002,
        category: DiagnosticCategory::Warning,
        message: "Invalid {0} expression",
    },
    DiagnosticMessage {
        code: 7003,
        category: DiagnosticCategory::Warning,
        message: "Invalid expression inside {0}",
    },
    DiagnosticMessage {
        code: 7004,
        category: DiagnosticCategory::Warning,
        message: "Missing parameter in {0}",
    },
    DiagnosticMessage {
        code: 7005,
        category: DiagnosticCategory::Warning,
        message: "Found extra parameter in {0}",
    },
    // Evaluator warnings (71xx)
    DiagnosticMessage {
        code: 7101,
        category: DiagnosticCategory::Warning,
        message: "Reference to an unknown type variable {0}",
    },
    DiagnosticMessage {
        code: 7102,
        category: DiagnosticCategory::Warning,
        message: "Reference to an unknown string variable {0}",
    },
    DiagnosticMessage {
        code: 7103,
        category: DiagnosticCategory::Warning,
        message: "Reference to an unknown type name {0}",
    },
    DiagnosticMessage {
        code: 7104,
        category: DiagnosticCategory::Warning,
        message: "Reference to an unknown name variable {0}",
    },
    DiagnosticMessage {
        code: 7105,
        category: DiagnosticCategory::Warning,
        message: "The type {0} cannot be templatized",
    },
    DiagnosticMessage {
        code: 7106,
        category: DiagnosticCategory::Warning,
        message: "Expected templatized type in {0} found {1}",
    },
    DiagnosticMessage {
        code: 7107,
        category: DiagnosticCategory::Warning,
        message: "Index out of bounds in templateTypeOf: expected a number no greater than {1}, found {0}",
    },
    DiagnosticMessage {
        code: 7108,
        category: DiagnosticCategory::Warning,
        message: "The variable {0} is already defined",
    },
    DiagnosticMessage {
        code: 7109,
        category: DiagnosticCategory::Warning,
        message: "The type {0} is not a record type",
    },
    DiagnosticMessage {
        code: 7110,
        category: DiagnosticCategory::Warning,
        message: "The body of a maprecord function must evaluate to a record type or a no type, found {0}",
    },
    DiagnosticMessage {
        code: 7111,
        category: DiagnosticCategory::Warning,
        message: "Reference to an undefined variable {0}",
    },
];

/// Diagnostic codes as named constants.
pub mod diagnostic_codes {
    // Parser
    pub const UNTERMINATED_STRING_LITERAL: u32 = 6001;
    pub const UNEXPECTED_TOKEN: u32 = 6002;
    pub const EXPECTED_TOKEN: u32 = 6003;
    // Validator
    pub const INVALID: u32 = 7001;
    pub const INVALID_EXPRESSION: u32 = 7002;
    pub const INVALID_INSIDE: u32 = 7003;
    pub const MISSING_PARAM: u32 = 7004;
    pub const EXTRA_PARAM: u32 = 7005;
    // Evaluator
    pub const UNKNOWN_TYPEVAR: u32 = 7101;
    pub const UNKNOWN_STRVAR: u32 = 7102;
    pub const UNKNOWN_TYPENAME: u32 = 7103;
    pub const UNKNOWN_NAMEVAR: u32 = 7104;
    pub const BASETYPE_INVALID: u32 = 7105;
    pub const TEMPTYPE_INVALID: u32 = 7106;
    pub const INDEX_OUTOFBOUNDS: u32 = 7107;
    pub const DUPLICATE_VARIABLE: u32 = 7108;
    pub const RECTYPE_INVALID: u32 = 7109;
    pub const MAPRECORD_BODY_INVALID: u32 = 7110;
    pub const VAR_UNDEFINED: u32 = 7111;
}

/// Diagnostic messages as named constants.
pub mod diagnostic_messages {
    use super::super::{DiagnosticCategory, DiagnosticMessage};

    macro_rules! message_const {
        ($name:ident, $code:expr, $category:ident, $text:expr) => {
            pub const $name: DiagnosticMessage = DiagnosticMessage {
                code: $code,
                category: DiagnosticCategory::$category,
                message: $text,
            };
        };
    }

    message_const!(
        UNTERMINATED_STRING_LITERAL,
        6001,
        Error,
        "Unterminated string literal."
    );
    message_const!(UNEXPECTED_TOKEN, 6002, Error, "Unexpected token '{0}'.");
    message_const!(EXPECTED_TOKEN, 6003, Error, "'{0}' expected.");

    message_const!(INVALID, 7001, Warning, "Invalid {0}");
    message_const!(INVALID_EXPRESSION, 7002, Warning, "Invalid {0} expression");
    message_const!(
        INVALID_INSIDE,
        7003,
        Warning,
        "Invalid expression inside {0}"
    );
    message_const!(MISSING_PARAM, 7004, Warning, "Missing parameter in {0}");
    message_const!(EXTRA_PARAM, 7005, Warning, "Found extra parameter in {0}");

    message_const!(
        UNKNOWN_TYPEVAR,
        7101,
        Warning,
        "Reference to an unknown type variable {0}"
    );
    message_const!(
        UNKNOWN_STRVAR,
        7102,
        Warning,
        "Reference to an unknown string variable {0}"
    );
    message_const!(
        UNKNOWN_TYPENAME,
        7103,
        Warning,
        "Reference to an unknown type name {0}"
    );
    message_const!(
        UNKNOWN_NAMEVAR,
        7104,
        Warning,
        "Reference to an unknown name variable {0}"
    );
    message_const!(
        BASETYPE_INVALID,
        7105,
        Warning,
        "The type {0} cannot be templatized"
    );
    message_const!(
        TEMPTYPE_INVALID,
        7106,
        Warning,
        "Expected templatized type in {0} found {1}"
    );
    message_const!(
        INDEX_OUTOFBOUNDS,
        7107,
        Warning,
        "Index out of bounds in templateTypeOf: expected a number no greater than {1}, found {0}"
    );
    message_const!(
        DUPLICATE_VARIABLE,
        7108,
        Warning,
        "The variable {0} is already defined"
    );
    message_const!(
        RECTYPE_INVALID,
        7109,
        Warning,
        "The type {0} is not a record type"
    );
    message_const!(
        MAPRECORD_BODY_INVALID,
        7110,
        Warning,
        "The body of a maprecord function must evaluate to a record type or a no type, found {0}"
    );
    message_const!(
        VAR_UNDEFINED,
        7111,
        Warning,
        "Reference to an undefined variable {0}"
    );
}
