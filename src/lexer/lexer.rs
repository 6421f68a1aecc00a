use crate::errors::errors::{LexicalError, LexicalErrorKind};

use super::{
    tables::SymbolTable,
    tokens::{SymbolClass, Token, TokenKind, KEYWORD_LOOKUP},
};

/// Characters that may legally follow a numeric literal. Whitespace, the
/// `#` terminator and end-of-input are also accepted (checked separately).
const NUMBER_FOLLOWERS: &[u8] = b"+-*/=><&|^%?),;]";

fn legal_number_follower(next: Option<u8>) -> bool {
    match next {
        None => true,
        Some(ch) => ch.is_ascii_whitespace() || ch == b'#' || NUMBER_FOLLOWERS.contains(&ch),
    }
}

/// The lexer owns the input cursor, the line counter, both symbol tables
/// and the lexical error log.
///
/// Tokens are pulled one at a time with [`Lexer::next_token`]; the parser
/// may return exactly one token with [`Lexer::push_back`] to be re-delivered
/// on the next call. The single raw-character lookahead used to split `==`,
/// `<=` and `>=` is a separate, internal mechanism: those scans simply do
/// not advance the cursor past a character that does not belong to the
/// token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<u8>,
    pos: usize,
    line: usize,
    pushback: Option<Token>,
    tag_table: SymbolTable<TokenKind>,
    constant_table: SymbolTable<String>,
    errors: Vec<LexicalError>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.as_bytes().to_vec(),
            pos: 0,
            line: 1,
            pushback: None,
            tag_table: SymbolTable::new(),
            constant_table: SymbolTable::new(),
            errors: Vec::new(),
        }
    }

    /// Consumes and classifies one token, advancing the cursor.
    ///
    /// Always terminates: every call either drains the pushback slot or
    /// advances the cursor by at least one byte, and an `Eof` token is
    /// produced when the stream is exhausted or a `#` terminator is seen.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.pushback.take() {
            return token;
        }
        self.scan_token()
    }

    /// Buffers `token` to be re-delivered by the next [`Lexer::next_token`]
    /// call. The slot holds at most one token; callers must pull at most
    /// one token deep before deciding, so a second push without an
    /// intervening pull cannot occur.
    pub fn push_back(&mut self, token: Token) {
        debug_assert!(
            self.pushback.is_none(),
            "token pushback slot already occupied"
        );
        self.pushback = Some(token);
    }

    /// 1-based line number of the cursor.
    pub fn current_line(&self) -> usize {
        self.line
    }

    /// Read-only view of the accumulated lexical error log.
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Table of keywords, operators, delimiters and identifiers.
    pub fn tag_table(&self) -> &SymbolTable<TokenKind> {
        &self.tag_table
    }

    /// Table of numeric literals, keyed by exact spelling.
    pub fn constant_table(&self) -> &SymbolTable<String> {
        &self.constant_table
    }

    /// Rewinds to the start of the input, atomically clearing the line
    /// counter, the pushback slot, both symbol tables and the error log.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.pushback = None;
        self.tag_table.clear();
        self.constant_table.clear();
        self.errors.clear();
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn scan_token(&mut self) -> Token {
        // Skip whitespace, comments and multi-byte characters until a
        // significant byte is found.
        let ch = loop {
            let Some(ch) = self.bump() else {
                return self.eof_token("EOF");
            };
            match ch {
                b'#' => return self.eof_token("#"),
                b'\n' => self.line += 1,
                b' ' | b'\t' | b'\r' => {}
                b'/' if self.peek() == Some(b'/') => self.skip_line_comment(),
                _ if ch >= 0x80 => self.skip_multibyte(ch),
                _ => break ch,
            }
        };

        if ch.is_ascii_alphabetic() {
            return self.scan_word(ch);
        }
        if ch.is_ascii_digit() {
            return self.scan_number((ch as char).to_string());
        }

        match ch {
            b'+' => self.tag_token(TokenKind::Plus, "+"),
            b'-' => {
                // A digit directly after '-' folds into a signed literal.
                if matches!(self.peek(), Some(next) if next.is_ascii_digit()) {
                    self.scan_number(String::from("-"))
                } else {
                    self.tag_token(TokenKind::Minus, "-")
                }
            }
            b'*' => self.tag_token(TokenKind::Star, "*"),
            b'/' => self.tag_token(TokenKind::Slash, "/"),
            b'=' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    self.tag_token(TokenKind::Equals, "==")
                } else {
                    self.tag_token(TokenKind::Assign, "=")
                }
            }
            b'<' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    self.tag_token(TokenKind::LessEquals, "<=")
                } else {
                    self.tag_token(TokenKind::Less, "<")
                }
            }
            b'>' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    self.tag_token(TokenKind::GreaterEquals, ">=")
                } else {
                    self.tag_token(TokenKind::Greater, ">")
                }
            }
            b'(' => self.tag_token(TokenKind::OpenParen, "("),
            b')' => self.tag_token(TokenKind::CloseParen, ")"),
            b'[' => self.tag_token(TokenKind::OpenBracket, "["),
            b']' => self.tag_token(TokenKind::CloseBracket, "]"),
            b'{' => self.tag_token(TokenKind::OpenBrace, "{"),
            b'}' => self.tag_token(TokenKind::CloseBrace, "}"),
            b',' => self.tag_token(TokenKind::Comma, ","),
            b';' => self.tag_token(TokenKind::Semicolon, ";"),
            _ => {
                let symbol = (ch as char).to_string();
                self.errors.push(LexicalError::new(
                    self.line,
                    LexicalErrorKind::UnknownSymbol {
                        symbol: symbol.clone(),
                    },
                ));
                self.undefined_token(symbol)
            }
        }
    }

    /// Skips a `//` comment up to (but not past) the terminating newline,
    /// which the whitespace loop then counts.
    fn skip_line_comment(&mut self) {
        self.pos += 1; // second '/'
        while let Some(ch) = self.peek() {
            if ch == b'\n' {
                break;
            }
            self.pos += 1;
        }
    }

    /// Silently skips the continuation bytes of a multi-byte UTF-8
    /// sequence. No token and no error is produced for it.
    fn skip_multibyte(&mut self, lead: u8) {
        let continuation = if lead & 0xE0 == 0xC0 {
            1
        } else if lead & 0xF0 == 0xE0 {
            2
        } else if lead & 0xF8 == 0xF0 {
            3
        } else {
            0
        };
        for _ in 0..continuation {
            if self.pos < self.source.len() {
                self.pos += 1;
            }
        }
    }

    /// Letter-led run: keyword by exact match, identifier otherwise.
    fn scan_word(&mut self, first: u8) -> Token {
        let mut text = (first as char).to_string();
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            text.push(ch as char);
            self.pos += 1;
        }

        match KEYWORD_LOOKUP.get(text.as_str()) {
            Some(&kind) => self.tag_token(kind, text),
            None => self.tag_token(TokenKind::Identifier, text),
        }
    }

    /// Digit-led run, possibly seeded with a leading `-`. Consumes digits
    /// and decimal points maximally, then validates the follower character
    /// and the dot count before classifying.
    fn scan_number(&mut self, mut text: String) -> Token {
        let mut dots = 0;
        while let Some(ch) = self.peek() {
            if ch == b'.' {
                dots += 1;
            } else if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch as char);
            self.pos += 1;
        }

        if !legal_number_follower(self.peek()) {
            // Illegal follower: widen the malformed token over the follower
            // and any letter/digit tail so one diagnostic covers it all.
            if let Some(ch) = self.bump() {
                text.push(ch as char);
            }
            while let Some(ch) = self.peek() {
                if !ch.is_ascii_alphanumeric() {
                    break;
                }
                text.push(ch as char);
                self.pos += 1;
            }
            self.errors.push(LexicalError::new(
                self.line,
                LexicalErrorKind::InvalidNumber {
                    literal: text.clone(),
                },
            ));
            return self.undefined_token(text);
        }

        if dots > 1 {
            self.errors.push(LexicalError::new(
                self.line,
                LexicalErrorKind::MultipleDecimalPoints {
                    literal: text.clone(),
                },
            ));
            return self.undefined_token(text);
        }

        let kind = if dots == 1 {
            TokenKind::DoubleConst
        } else {
            TokenKind::IntConst
        };
        let row = self.constant_table.intern(text.clone());
        Token {
            kind,
            line: self.line,
            class: SymbolClass::Constant,
            table_row: row,
            value: text,
        }
    }

    /// Builds a tag-class token, interning its kind into the tag table.
    fn tag_token(&mut self, kind: TokenKind, value: impl Into<String>) -> Token {
        let row = self.tag_table.intern(kind);
        Token {
            kind,
            line: self.line,
            class: SymbolClass::Tag,
            table_row: row,
            value: value.into(),
        }
    }

    fn undefined_token(&self, value: String) -> Token {
        Token {
            kind: TokenKind::Undefined,
            line: self.line,
            class: SymbolClass::None,
            table_row: 0,
            value,
        }
    }

    fn eof_token(&self, value: &str) -> Token {
        Token {
            kind: TokenKind::Eof,
            line: self.line,
            class: SymbolClass::None,
            table_row: 0,
            value: value.to_string(),
        }
    }
}

/// Runs the lexer over `source` to exhaustion, returning the full token
/// stream (terminated by exactly one `Eof` token) together with the lexer
/// so callers can inspect the error log and symbol tables.
pub fn tokenize(source: &str) -> (Vec<Token>, Lexer) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    (tokens, lexer)
}
