//! Command-line driver for the Mini language front end.
//!
//! Reads a source file, runs the lexer (and, unless `--lex-only` is given,
//! the syntax analyzer), prints a verdict and writes the token stream, the
//! symbol tables and the error log into `<file>-output/`.

use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use minic::{
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::Token,
    },
    parser::parser::Parser,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let (lex_only, file_path) = match args.len() {
        2 => (false, args[1].as_str()),
        3 if args[1] == "--lex-only" => (true, args[2].as_str()),
        _ => {
            eprintln!("usage: minic [--lex-only] <source-file>");
            return ExitCode::FAILURE;
        }
    };

    let source = match fs::read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {}: {}", file_path, err);
            return ExitCode::FAILURE;
        }
    };

    let (tokens, lexer) = tokenize(&source);
    println!(
        "{}: {} token(s), {} lexical error(s)",
        file_path,
        tokens.len(),
        lexer.errors().len()
    );

    let mut parser = None;
    let accepted = if lex_only {
        lexer.errors().is_empty()
    } else {
        let mut p = Parser::new(&source);
        let verdict = p.analyze();
        println!(
            "syntax analysis: {} ({} error(s))",
            if verdict { "accepted" } else { "rejected" },
            p.errors().len()
        );
        parser = Some(p);
        verdict
    };

    for error in lexer.errors() {
        println!("lexical error: {}", error);
    }
    if let Some(parser) = &parser {
        for error in parser.errors() {
            println!("syntax error: {}", error);
        }
    }

    let out_dir = PathBuf::from(format!("{}-output", file_path));
    if let Err(err) = write_results(&out_dir, &tokens, &lexer, parser.as_ref()) {
        eprintln!("error: cannot write results to {}: {}", out_dir.display(), err);
        return ExitCode::FAILURE;
    }
    println!("results written to {}", out_dir.display());

    if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_results(
    out_dir: &Path,
    tokens: &[Token],
    lexer: &Lexer,
    parser: Option<&Parser>,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let mut token_file = fs::File::create(out_dir.join("tokens.txt"))?;
    writeln!(token_file, "line\tkind\tclass\trow\tvalue")?;
    for token in tokens {
        writeln!(
            token_file,
            "{}\t{}\t{:?}\t{}\t{}",
            token.line, token.kind, token.class, token.table_row, token.value
        )?;
    }

    let mut tag_file = fs::File::create(out_dir.join("table_tag.csv"))?;
    for (kind, index) in lexer.tag_table().entries() {
        writeln!(tag_file, "{},{}", index, kind)?;
    }

    let mut constant_file = fs::File::create(out_dir.join("table_const.csv"))?;
    for (value, index) in lexer.constant_table().entries() {
        writeln!(constant_file, "{},{}", index, value)?;
    }

    let mut error_file = fs::File::create(out_dir.join("error.log"))?;
    for error in lexer.errors() {
        writeln!(error_file, "lexical: {}", error)?;
    }
    if let Some(parser) = parser {
        for error in parser.errors() {
            writeln!(error_file, "syntax: {}", error)?;
        }
    }

    Ok(())
}
