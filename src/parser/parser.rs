//! The parser state and the program-structure layer of the grammar.
//!
//! This module holds the [`Parser`] struct with its token-consumption
//! helpers and panic-mode recovery, plus the top grammar layer:
//! program, function definition and parameter list.

use std::mem;

use crate::{
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::compound_statement;

/// Synchronizing set for top-level recovery: the start of the next
/// function definition, or end-of-input.
const FUNCTION_SYNC: [TokenKind; 4] = [
    TokenKind::Int,
    TokenKind::Double,
    TokenKind::Float,
    TokenKind::Eof,
];

/// Synchronizing set for statement-level recovery.
pub(super) const STATEMENT_SYNC: [TokenKind; 7] = [
    TokenKind::Semicolon,
    TokenKind::OpenBrace,
    TokenKind::CloseBrace,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Return,
    TokenKind::Eof,
];

/// The syntax analyzer.
///
/// Owns its lexer and a single token of lookahead; the grammar functions
/// in this module and its siblings consume tokens through the helpers
/// here. The error log grows monotonically over one run and the error
/// flag, once set, is only cleared by [`Parser::reset`].
pub struct Parser {
    lexer: Lexer,
    current: Token,
    errors: Vec<SyntaxError>,
    had_error: bool,
}

impl Parser {
    /// Binds a parser to `source` and primes one lookahead token.
    pub fn new(source: &str) -> Parser {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Parser {
            lexer,
            current,
            errors: Vec::new(),
            had_error: false,
        }
    }

    /// Runs the grammar from the start symbol over the whole input.
    ///
    /// Returns true only if no syntax error was recorded; recovery having
    /// occurred does not by itself fail the run.
    pub fn analyze(&mut self) -> bool {
        let ok = program(self);
        ok && !self.had_error
    }

    /// Read-only view of the accumulated syntax error log.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// The underlying lexer, for its error log and symbol tables.
    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    /// Re-initializes the whole analyzer on the same input: rewinds the
    /// lexer, clears both error states and re-primes the lookahead.
    pub fn reset(&mut self) {
        self.lexer.reset();
        self.errors.clear();
        self.had_error = false;
        self.current = self.lexer.next_token();
    }

    pub(super) fn current(&self) -> &Token {
        &self.current
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the lookahead token and pulls the next one.
    pub(super) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Consumes the lookahead only if it matches `kind`.
    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a `kind` token or records an expected-terminal diagnostic,
    /// leaving the lookahead untouched on failure.
    pub(super) fn expect(&mut self, kind: TokenKind, expected: &'static str) -> bool {
        if self.eat(kind) {
            return true;
        }
        let found = self.found();
        self.error(SyntaxErrorKind::Expected { expected, found });
        false
    }

    /// The current token's spelling, for diagnostics.
    pub(super) fn found(&self) -> String {
        self.current.value.clone()
    }

    pub(super) fn error(&mut self, kind: SyntaxErrorKind) {
        self.errors.push(SyntaxError::new(self.current.line, kind));
        self.had_error = true;
    }

    pub(super) fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Undoes a one-token lookahead: restores `token` as the current
    /// token and pushes the displaced one back into the lexer's single
    /// slot. The slot is necessarily empty here because the displaced
    /// token was obtained from it, so a double pushback cannot occur.
    pub(super) fn rewind(&mut self, token: Token) {
        let displaced = mem::replace(&mut self.current, token);
        self.lexer.push_back(displaced);
    }

    /// Panic-mode recovery: discards tokens until one in `sync` or
    /// end-of-input is found, counting and previewing up to three of the
    /// discarded tokens for the info line.
    pub(super) fn skip_until(&mut self, sync: &[TokenKind]) {
        let mut skipped = 0usize;
        let mut preview = String::new();

        while !self.at(TokenKind::Eof) && !sync.contains(&self.current.kind) {
            if skipped < 3 {
                if !preview.is_empty() {
                    preview.push_str(", ");
                }
                preview.push('\'');
                preview.push_str(&self.current.value);
                preview.push('\'');
            } else if skipped == 3 {
                preview.push_str(", ...");
            }
            skipped += 1;
            self.advance();
        }

        if skipped > 0 {
            eprintln!("recovery: skipped {} token(s) ({})", skipped, preview);
        }
    }
}

// <program> ::= <function-definition>+
fn program(p: &mut Parser) -> bool {
    let mut success = true;

    while !p.at(TokenKind::Eof) {
        if p.current().kind.is_type_specifier() {
            let before = p.error_count();
            if !function_definition(p) {
                success = false;
                if p.error_count() == before {
                    let found = p.found();
                    p.error(SyntaxErrorKind::MalformedFunction { found });
                }
                p.skip_until(&FUNCTION_SYNC);
            }
        } else {
            let found = p.found();
            p.error(SyntaxErrorKind::ExpectedFunctionDefinition { found });
            p.skip_until(&FUNCTION_SYNC);
            success = false;
        }
    }

    success
}

// <function-definition> ::=
//     <type-specifier> <identifier> '(' <parameter-list>? ')' <compound-statement>
fn function_definition(p: &mut Parser) -> bool {
    if !type_specifier(p) {
        let found = p.found();
        p.error(SyntaxErrorKind::Expected {
            expected: "a type specifier to begin a function definition",
            found,
        });
        return false;
    }

    if !p.expect(TokenKind::Identifier, "a function name") {
        return false;
    }

    if !p.expect(TokenKind::OpenParen, "'(' after the function name") {
        return false;
    }

    if !p.at(TokenKind::CloseParen) && !parameter_list(p) {
        return false;
    }

    if !p.expect(TokenKind::CloseParen, "')' after the parameter list") {
        return false;
    }

    compound_statement(p)
}

// <type-specifier> ::= 'int' | 'double' | 'float'
pub(super) fn type_specifier(p: &mut Parser) -> bool {
    p.eat(TokenKind::Int) || p.eat(TokenKind::Double) || p.eat(TokenKind::Float)
}

// <parameter-list> ::= <parameter-declaration> (',' <parameter-declaration>)*
fn parameter_list(p: &mut Parser) -> bool {
    if !parameter_declaration(p) {
        return false;
    }

    while p.eat(TokenKind::Comma) {
        if !parameter_declaration(p) {
            return false;
        }
    }

    true
}

// <parameter-declaration> ::= <type-specifier> <identifier>
fn parameter_declaration(p: &mut Parser) -> bool {
    if !type_specifier(p) {
        let found = p.found();
        p.error(SyntaxErrorKind::Expected {
            expected: "a type specifier in a parameter declaration",
            found,
        });
        return false;
    }

    p.expect(TokenKind::Identifier, "a parameter name")
}
