//! Recursive-descent parser producing the TTL expression tree.
//!
//! The grammar is small and fixed by the DSL surface:
//!
//! ```text
//! expr     := call | name | string | number
//! call     := name '(' [arg {',' arg}] ')'
//! arg      := expr | function | object
//! function := '(' [name {',' name}] ')' '=>' expr
//! object   := '{' [prop {',' prop}] '}'
//! prop     := name ':' expr | '[' name ']' ':' expr
//! ```
//!
//! Whether a parsed tree is a well-formed TTL term is the validator's
//! business, not the parser's; the parser only rejects what it cannot shape
//! into a node at all.

use ttl_common::Span;
use ttl_common::diagnostics::{Diagnostic, diagnostic_messages};

use crate::ast::{ExprArena, ExprId, ExprKind};
use crate::scanner::{self, Token, TokenKind};

pub struct ParserState {
    file: String,
    tokens: Vec<Token>,
    pos: usize,
    prev_span: Span,
    arena: ExprArena,
    diagnostics: Vec<Diagnostic>,
}

impl ParserState {
    pub fn new(file: String, source: String) -> Self {
        let mut diagnostics = Vec::new();
        let tokens = scanner::scan(&source, &file, &mut diagnostics);
        Self {
            file,
            tokens,
            pos: 0,
            prev_span: Span::at(0),
            arena: ExprArena::new(),
            diagnostics,
        }
    }

    /// Parse the whole source as a single expression.
    ///
    /// Returns `None` when the source cannot be shaped into a tree; the
    /// reason is in [`Self::diagnostics`].
    pub fn parse_expression(&mut self) -> Option<ExprId> {
        let root = self.parse_expr()?;
        if !matches!(self.peek().kind, TokenKind::Eof) {
            self.error_unexpected();
            return None;
        }
        Some(root)
    }

    pub fn get_arena(&self) -> &ExprArena {
        &self.arena
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (ExprArena, Vec<Diagnostic>) {
        (self.arena, self.diagnostics)
    }

    // ---- grammar ----

    fn parse_expr(&mut self) -> Option<ExprId> {
        match self.peek().kind.clone() {
            TokenKind::Ident(text) => {
                let span = self.bump();
                if matches!(self.peek().kind, TokenKind::LParen) {
                    let callee = self.arena.alloc(ExprKind::Name(text), span);
                    self.parse_call(callee, span)
                } else {
                    Some(self.arena.alloc(ExprKind::Name(text), span))
                }
            }
            TokenKind::StringLit(text) => {
                let span = self.bump();
                Some(self.arena.alloc(ExprKind::StringLit(text), span))
            }
            TokenKind::NumberLit(value) => {
                let span = self.bump();
                Some(self.arena.alloc(ExprKind::NumberLit(value), span))
            }
            TokenKind::LParen => self.parse_function(),
            TokenKind::LBrace => self.parse_object(),
            _ => {
                self.error_unexpected();
                None
            }
        }
    }

    fn parse_call(&mut self, callee: ExprId, start: Span) -> Option<ExprId> {
        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !matches!(self.peek().kind, TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;
        let span = start.merge(self.prev_span);
        Some(self.arena.alloc(ExprKind::Call { callee, args }, span))
    }

    fn parse_function(&mut self) -> Option<ExprId> {
        let start = self.peek().span;
        self.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        if !matches!(self.peek().kind, TokenKind::RParen) {
            loop {
                let param = self.parse_name()?;
                params.push(param);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;
        self.expect(&TokenKind::Arrow)?;
        let body = self.parse_expr()?;
        let span = start.merge(self.prev_span);
        Some(self.arena.alloc(ExprKind::Function { params, body }, span))
    }

    fn parse_object(&mut self) -> Option<ExprId> {
        let start = self.peek().span;
        self.expect(&TokenKind::LBrace)?;
        let mut props = Vec::new();
        if !matches!(self.peek().kind, TokenKind::RBrace) {
            loop {
                props.push(self.parse_prop()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RBrace)?;
        let span = start.merge(self.prev_span);
        Some(self.arena.alloc(ExprKind::ObjectLit { props }, span))
    }

    fn parse_prop(&mut self) -> Option<ExprId> {
        if self.eat(&TokenKind::LBracket) {
            let start = self.prev_span;
            let key = self.parse_name()?;
            self.expect(&TokenKind::RBracket)?;
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_expr()?;
            let span = start.merge(self.prev_span);
            Some(
                self.arena
                    .alloc(ExprKind::ComputedProperty { key, value }, span),
            )
        } else {
            let key = self.parse_name()?;
            let start = self.arena.span(key);
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_expr()?;
            let span = start.merge(self.prev_span);
            Some(self.arena.alloc(ExprKind::Property { key, value }, span))
        }
    }

    fn parse_name(&mut self) -> Option<ExprId> {
        match self.peek().kind.clone() {
            TokenKind::Ident(text) => {
                let span = self.bump();
                Some(self.arena.alloc(ExprKind::Name(text), span))
            }
            _ => {
                self.error_expected("identifier");
                None
            }
        }
    }

    // ---- token plumbing ----

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Span {
        let span = self.peek().span;
        self.prev_span = span;
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        span
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Option<()> {
        if self.eat(kind) {
            Some(())
        } else {
            self.error_expected(&kind.describe());
            None
        }
    }

    fn error_expected(&mut self, what: &str) {
        self.diagnostics.push(Diagnostic::error(
            &self.file,
            self.peek().span,
            diagnostic_messages::EXPECTED_TOKEN,
            &[what],
        ));
    }

    fn error_unexpected(&mut self) {
        let found = self.peek().kind.describe();
        self.diagnostics.push(Diagnostic::error(
            &self.file,
            self.peek().span,
            diagnostic_messages::UNEXPECTED_TOKEN,
            &[&found],
        ));
    }
}
