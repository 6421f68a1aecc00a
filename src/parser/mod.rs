//! Recursive-descent syntax analyzer for the Mini language.
//!
//! The grammar is fixed in code, one mutually recursive function per
//! nonterminal, layered by precedence:
//!
//! - program -> function definition (type, name, parameters, body)
//! - compound statement -> statement (compound | if | while | return |
//!   declaration | expression statement)
//! - expression -> assignment -> logical-or -> logical-and -> equality ->
//!   relational -> additive -> multiplicative -> primary
//!
//! The logical-or/and layers are pass-throughs kept for layering symmetry;
//! the language defines no `||`/`&&` operators.
//!
//! On a mismatch the analyzer records a diagnostic and recovers in panic
//! mode, discarding tokens until a synchronizing one is found, so a single
//! run reports every independently recoverable error.

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
