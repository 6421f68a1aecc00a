//! The statement layer of the grammar.
//!
//! Diagnostics are recorded at the point of first detection (a terminal
//! mismatch or a bad primary); enclosing productions just propagate
//! failure, and the statement list adds its generic diagnostic only when
//! the failing statement recorded nothing itself. Recovery here keeps one
//! malformed statement from cascading into errors for the well-formed
//! statements that follow it.

use crate::{errors::errors::SyntaxErrorKind, lexer::tokens::TokenKind};

use super::{
    expr::expression,
    parser::{type_specifier, Parser, STATEMENT_SYNC},
};

// <compound-statement> ::= '{' <statement-list>? '}'
pub(super) fn compound_statement(p: &mut Parser) -> bool {
    if !p.expect(TokenKind::OpenBrace, "'{' to open a compound statement") {
        return false;
    }

    if !p.at(TokenKind::CloseBrace) {
        statement_list(p);
    }

    p.expect(TokenKind::CloseBrace, "'}' to close a compound statement")
}

// <statement-list> ::= <statement>+
//
// Recovery point: a malformed statement is reported once, then tokens are
// discarded up to a statement boundary. A synchronizing ';' is consumed
// before resuming; braces are left for the enclosing production.
fn statement_list(p: &mut Parser) -> bool {
    let mut success = true;

    while !p.at(TokenKind::CloseBrace) && !p.at(TokenKind::Eof) {
        let before = p.error_count();
        if !statement(p) {
            success = false;
            if p.error_count() == before {
                let found = p.found();
                p.error(SyntaxErrorKind::MalformedStatement { found });
            }
            p.skip_until(&STATEMENT_SYNC);
            if p.at(TokenKind::Semicolon) {
                p.advance();
            }
        }
    }

    success
}

// <statement> ::= <compound-statement> | <selection-statement>
//               | <iteration-statement> | <return-statement>
//               | <variable-declaration> | <expression-statement>
fn statement(p: &mut Parser) -> bool {
    match p.current().kind {
        TokenKind::OpenBrace => compound_statement(p),
        TokenKind::If => selection_statement(p),
        TokenKind::While => iteration_statement(p),
        TokenKind::Return => return_statement(p),
        TokenKind::Int | TokenKind::Double | TokenKind::Float => variable_declaration(p),
        _ => expression_statement(p),
    }
}

// <expression-statement> ::= <expression>? ';'
fn expression_statement(p: &mut Parser) -> bool {
    if !p.at(TokenKind::Semicolon) && !expression(p) {
        return false;
    }

    p.expect(TokenKind::Semicolon, "';' to end an expression statement")
}

// <selection-statement> ::=
//     'if' '(' <expression> ')' 'then'? <statement> ('else' <statement>)?
fn selection_statement(p: &mut Parser) -> bool {
    if !p.expect(TokenKind::If, "'if'") {
        return false;
    }

    if !p.expect(TokenKind::OpenParen, "'(' after 'if'") {
        return false;
    }

    if !expression(p) {
        return false;
    }

    if !p.expect(TokenKind::CloseParen, "')' after the if condition") {
        return false;
    }

    // Optional 'then' before the body.
    p.eat(TokenKind::Then);

    if !statement(p) {
        return false;
    }

    if p.eat(TokenKind::Else) && !statement(p) {
        return false;
    }

    true
}

// <iteration-statement> ::= 'while' '(' <expression> ')' <statement>
fn iteration_statement(p: &mut Parser) -> bool {
    if !p.expect(TokenKind::While, "'while'") {
        return false;
    }

    if !p.expect(TokenKind::OpenParen, "'(' after 'while'") {
        return false;
    }

    if !expression(p) {
        return false;
    }

    if !p.expect(TokenKind::CloseParen, "')' after the while condition") {
        return false;
    }

    statement(p)
}

// <return-statement> ::= 'return' <expression>? ';'
fn return_statement(p: &mut Parser) -> bool {
    if !p.expect(TokenKind::Return, "'return'") {
        return false;
    }

    if !p.at(TokenKind::Semicolon) && !expression(p) {
        return false;
    }

    p.expect(TokenKind::Semicolon, "';' after a return statement")
}

// <variable-declaration> ::= <type-specifier> <identifier> ('=' <expression>)? ';'
fn variable_declaration(p: &mut Parser) -> bool {
    if !type_specifier(p) {
        let found = p.found();
        p.error(SyntaxErrorKind::Expected {
            expected: "a type specifier to begin a variable declaration",
            found,
        });
        return false;
    }

    if !p.expect(TokenKind::Identifier, "a variable name") {
        return false;
    }

    if p.eat(TokenKind::Assign) && !expression(p) {
        return false;
    }

    p.expect(TokenKind::Semicolon, "';' to end a variable declaration")
}
