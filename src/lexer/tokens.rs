use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("double", TokenKind::Double);
        map.insert("float", TokenKind::Float);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Undefined,

    // Keywords
    Int,
    Double,
    Float,
    If,
    Then,
    Else,
    Return,
    While,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,        // =
    Equals,        // ==
    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=

    // Delimiters
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Comma,
    Semicolon,

    // Constants
    IntConst,
    DoubleConst,

    Identifier,
    Eof,
}

impl TokenKind {
    /// True for the keywords that can start a function definition,
    /// a parameter declaration or a variable declaration.
    pub fn is_type_specifier(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Double | TokenKind::Float)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Which symbol table a token is recorded in, if any.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SymbolClass {
    /// Not recorded anywhere (`Undefined` and `Eof` tokens).
    None,
    /// Keywords, operators, delimiters and identifiers.
    Tag,
    /// Integer and floating-point literals, keyed by exact spelling.
    Constant,
}

/// A classified lexical unit handed from the lexer to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based source line the token started on.
    pub line: usize,
    pub class: SymbolClass,
    /// 1-based insertion-order index into the relevant symbol table,
    /// 0 when no table applies.
    pub table_row: usize,
    /// The exact source spelling consumed for this token.
    pub value: String,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?}) at line {}", self.kind, self.value, self.line)
    }
}
