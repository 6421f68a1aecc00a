//! Error types for the front end.
//!
//! Two independent, non-fatal error families exist:
//!
//! - [`errors::LexicalError`] - recorded by the lexer, which always keeps
//!   scanning after reporting one
//! - [`errors::SyntaxError`] - recorded by the parser, which resynchronizes
//!   and keeps analyzing after reporting one
//!
//! Both carry the 1-based source line and a message that includes the
//! offending spelling where one is available.

pub mod errors;
