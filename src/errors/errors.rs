use std::fmt::Display;

use thiserror::Error;

/// A diagnostic recorded by the lexer.
///
/// Lexical errors are reported and skipped over: the lexer still produces a
/// token (possibly `Undefined`) and continues scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    line: usize,
    kind: LexicalErrorKind,
}

impl LexicalError {
    pub fn new(line: usize, kind: LexicalErrorKind) -> Self {
        LexicalError { line, kind }
    }

    /// 1-based source line the error was detected on.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &LexicalErrorKind {
        &self.kind
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalErrorKind {
    #[error("invalid number format: {literal:?}")]
    InvalidNumber { literal: String },
    #[error("invalid number format (multiple decimal points): {literal:?}")]
    MultipleDecimalPoints { literal: String },
    #[error("unknown symbol: {symbol:?}")]
    UnknownSymbol { symbol: String },
}

/// A diagnostic recorded by the syntax analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    line: usize,
    kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(line: usize, kind: SyntaxErrorKind) -> Self {
        SyntaxError { line, kind }
    }

    /// 1-based source line of the token the error was reported at.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("expected {expected}, found {found:?}")]
    Expected {
        expected: &'static str,
        found: String,
    },
    #[error("only function definitions may appear at the top level, found {found:?}")]
    ExpectedFunctionDefinition { found: String },
    #[error("could not parse a statement at {found:?}")]
    MalformedStatement { found: String },
    #[error("malformed function definition at {found:?}")]
    MalformedFunction { found: String },
    #[error("expected an identifier, a constant or '(', found {found:?}")]
    ExpectedPrimary { found: String },
}
