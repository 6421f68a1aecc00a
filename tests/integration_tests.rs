//! Integration tests for the whole front end.
//!
//! These exercise the lexer and the syntax analyzer together over complete
//! Mini programs, covering the token/error protocol a driver consumes:
//! the token stream, both error logs and the final verdict.

use minic::lexer::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};
use minic::parser::parser::Parser;

#[test]
fn test_accepted_program_token_stream() {
    let source = "int main ( ) { return 0 ; }";
    let (tokens, lexer) = tokenize(source);

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::Return,
            TokenKind::IntConst,
            TokenKind::Semicolon,
            TokenKind::CloseBrace,
            TokenKind::Eof,
        ]
    );
    assert!(lexer.errors().is_empty());

    let mut parser = Parser::new(source);
    assert!(parser.analyze());
    assert!(parser.errors().is_empty());
}

#[test]
fn test_exactly_one_eof_token() {
    let (tokens, _) = tokenize("int x ; # trailing garbage ignored");
    let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eof_count, 1);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_both_error_logs_populated_independently() {
    // One lexical error (bad literal) and one syntax error (the resulting
    // undefined token cannot start an expression).
    let mut parser = Parser::new("int f ( ) { x = 1.2.3 ; return 0 ; }");
    assert!(!parser.analyze());
    assert_eq!(parser.lexer().errors().len(), 1);
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn test_clean_run_leaves_both_logs_empty() {
    let mut parser = Parser::new("int f ( int a ) { while ( a > 0 ) a = a - 1 ; return a ; }");
    assert!(parser.analyze());
    assert!(parser.lexer().errors().is_empty());
    assert!(parser.errors().is_empty());
}

#[test]
fn test_recovery_parses_statements_after_malformed_one() {
    let source = "int f ( ) { x + ; a = 1 ; b = 2 ; c = 3 ; d = 4 ; }";
    let mut parser = Parser::new(source);
    assert!(!parser.analyze());
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn test_multiple_independent_errors_reported() {
    let source = "int f ( )\n{\nx + ;\ny = 1 ;\n* ;\n}";
    let mut parser = Parser::new(source);
    assert!(!parser.analyze());
    assert_eq!(parser.errors().len(), 2);
    assert_eq!(parser.errors()[0].line(), 3);
    assert_eq!(parser.errors()[1].line(), 5);
}

#[test]
fn test_lexical_errors_do_not_stop_tokenization() {
    let (tokens, lexer) = tokenize("int a = 12x ; @ double b = 3.4 ;");
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.errors().len(), 2);
    // Scanning degraded gracefully: the later literal still interned.
    assert!(lexer.constant_table().get(&"3.4".to_string()).is_some());
}

#[test]
fn test_full_reset_is_idempotent() {
    let source = "int f ( ) { 1.2.3 ; x + ; return 0 ; }";
    let mut parser = Parser::new(source);
    parser.analyze();
    let syntax_before = parser.errors().to_vec();
    let lexical_before = parser.lexer().errors().to_vec();

    parser.reset();
    parser.analyze();

    assert_eq!(syntax_before, parser.errors());
    assert_eq!(lexical_before, parser.lexer().errors());
}

#[test]
fn test_reset_reproduces_token_stream() {
    let mut lexer = Lexer::new("int f ( ) { return 1.5 ; }");
    let mut first = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        first.push(token);
        if done {
            break;
        }
    }

    lexer.reset();
    let mut second = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        second.push(token);
        if done {
            break;
        }
    }

    assert_eq!(first, second);
}

#[test]
fn test_commented_and_multibyte_source_accepted() {
    let source = "// 求和函数\nint sum ( int a , int b )\n{\nreturn a + b ; // 返回\n}";
    let mut parser = Parser::new(source);
    assert!(parser.analyze());
    assert!(parser.lexer().errors().is_empty());
}

#[test]
fn test_verdict_failure_keeps_logs_readable() {
    let mut parser = Parser::new("float broken ( { ;");
    assert!(!parser.analyze());
    assert!(!parser.errors().is_empty());
    for error in parser.errors() {
        assert!(error.line() >= 1);
        assert!(!error.to_string().is_empty());
    }
}
