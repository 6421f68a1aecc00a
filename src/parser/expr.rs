//! The expression layers of the grammar, from assignment down to primary.
//!
//! Binary layers are left-associative loops over their operand layer. The
//! logical-or and logical-and layers are pass-throughs kept for layering
//! symmetry: the language defines no `||` or `&&` operators.

use crate::{errors::errors::SyntaxErrorKind, lexer::tokens::TokenKind};

use super::parser::Parser;

// <expression> ::= <assignment-expression>
pub(super) fn expression(p: &mut Parser) -> bool {
    assignment_expression(p)
}

// <assignment-expression> ::= <identifier> '=' <logical-or-expression>
//                           | <logical-or-expression>
//
// Assignment is only recognized when an identifier is immediately followed
// by '='. The identifier is consumed speculatively; if no '=' follows, the
// lookahead is undone through the single-token pushback slot.
fn assignment_expression(p: &mut Parser) -> bool {
    if p.at(TokenKind::Identifier) {
        let ident = p.advance();

        if p.at(TokenKind::Assign) {
            p.advance();
            return logical_or_expression(p);
        }

        // Not an assignment; rewind to the identifier.
        p.rewind(ident);
    }

    logical_or_expression(p)
}

// <logical-or-expression> ::= <logical-and-expression>
fn logical_or_expression(p: &mut Parser) -> bool {
    logical_and_expression(p)
}

// <logical-and-expression> ::= <equality-expression>
fn logical_and_expression(p: &mut Parser) -> bool {
    equality_expression(p)
}

// <equality-expression> ::= <relational-expression> ('==' <relational-expression>)*
fn equality_expression(p: &mut Parser) -> bool {
    if !relational_expression(p) {
        return false;
    }

    while p.eat(TokenKind::Equals) {
        if !relational_expression(p) {
            return false;
        }
    }

    true
}

// <relational-expression> ::=
//     <additive-expression> (('<' | '>' | '<=' | '>=') <additive-expression>)*
fn relational_expression(p: &mut Parser) -> bool {
    if !additive_expression(p) {
        return false;
    }

    while p.eat(TokenKind::Less)
        || p.eat(TokenKind::Greater)
        || p.eat(TokenKind::LessEquals)
        || p.eat(TokenKind::GreaterEquals)
    {
        if !additive_expression(p) {
            return false;
        }
    }

    true
}

// <additive-expression> ::=
//     <multiplicative-expression> (('+' | '-') <multiplicative-expression>)*
fn additive_expression(p: &mut Parser) -> bool {
    if !multiplicative_expression(p) {
        return false;
    }

    while p.eat(TokenKind::Plus) || p.eat(TokenKind::Minus) {
        if !multiplicative_expression(p) {
            return false;
        }
    }

    true
}

// <multiplicative-expression> ::=
//     <primary-expression> (('*' | '/') <primary-expression>)*
fn multiplicative_expression(p: &mut Parser) -> bool {
    if !primary_expression(p) {
        return false;
    }

    while p.eat(TokenKind::Star) || p.eat(TokenKind::Slash) {
        if !primary_expression(p) {
            return false;
        }
    }

    true
}

// <primary-expression> ::= <identifier> | <constant> | '(' <expression> ')'
fn primary_expression(p: &mut Parser) -> bool {
    match p.current().kind {
        TokenKind::Identifier | TokenKind::IntConst | TokenKind::DoubleConst => {
            p.advance();
            true
        }
        TokenKind::OpenParen => {
            p.advance();
            if !expression(p) {
                return false;
            }
            p.expect(TokenKind::CloseParen, "')' after a parenthesized expression")
        }
        _ => {
            let found = p.found();
            p.error(SyntaxErrorKind::ExpectedPrimary { found });
            false
        }
    }
}
