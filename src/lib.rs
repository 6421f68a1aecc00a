//! Front end for the Mini language, a small C-like teaching language.
//!
//! The crate is split into two cooperating components:
//!
//! - [`lexer`] - converts a raw character stream into classified tokens,
//!   maintaining the tag and constant symbol tables and a lexical error log
//! - [`parser`] - a recursive-descent syntax analyzer that pulls tokens on
//!   demand, recovers from errors in panic mode, and reports a verdict
//!
//! Both components record their diagnostics instead of aborting: a full run
//! always reaches end-of-input and leaves the accumulated error lists
//! readable afterwards.

#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod parser;
