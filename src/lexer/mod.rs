//! Lexical analysis module for the Mini language.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Maximal-munch tokenization with one character of lookahead
//! - Keywords, identifiers, numeric literals, operators and delimiters
//! - Line comments (`//`) and silent skipping of multi-byte characters
//! - Token line tracking for error reporting
//! - The tag and constant symbol tables
//! - A single-slot token pushback used by the parser

pub mod lexer;
pub mod tables;
pub mod tokens;
